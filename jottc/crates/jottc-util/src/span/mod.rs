//! Span module - Source location tracking.
//!
//! The tokenizer is line-oriented: every token records the file it came from
//! and the 1-based line it was scanned on. [`SourceLoc`] is that pair.
//!
//! # Examples
//!
//! ```
//! use jottc_util::span::SourceLoc;
//!
//! let loc = SourceLoc::new("main.jott".into(), 3);
//! assert_eq!(loc.to_string(), "main.jott:3");
//! ```

use std::fmt;
use std::sync::Arc;

/// A source location: file name plus 1-based line number.
///
/// The file name is an `Arc<str>` because every token on a line carries its
/// location; cloning one is a pointer bump, not a string copy.
///
/// # Examples
///
/// ```
/// use jottc_util::span::SourceLoc;
///
/// let loc = SourceLoc::new("main.jott".into(), 1);
/// assert_eq!(loc.line, 1);
/// assert_eq!(&*loc.file, "main.jott");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLoc {
    /// Name of the source file (as given to the lexer).
    pub file: Arc<str>,
    /// Line number (1-based).
    pub line: u32,
}

impl SourceLoc {
    /// Create a new source location.
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::span::SourceLoc;
    ///
    /// let loc = SourceLoc::new("test.jott".into(), 42);
    /// ```
    pub fn new(file: Arc<str>, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
