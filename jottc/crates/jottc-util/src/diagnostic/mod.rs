//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! compiler diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use jottc_util::diagnostic::{Diagnostic, DiagnosticCode, Handler};
//! use jottc_util::span::SourceLoc;
//!
//! let handler = Handler::new();
//! handler.emit_diagnostic(
//!     Diagnostic::error("bare '!' must be followed by '='")
//!         .with_code(DiagnosticCode::E_LEX_BARE_BANG)
//!         .with_loc(SourceLoc::new("main.jott".into(), 2)),
//! );
//!
//! if handler.has_errors() {
//!     eprintln!("tokenization failed");
//! }
//! ```

mod codes;

pub use codes::DiagnosticCode;

use crate::span::SourceLoc;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use jottc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that aborts tokenization
    Error,
    /// A warning that does not abort tokenization
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and optional location
///
/// # Examples
///
/// ```
/// use jottc_util::diagnostic::{Diagnostic, Level};
///
/// let diag = Diagnostic::error("something went wrong");
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location, if one applies
    pub loc: Option<SourceLoc>,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::{Diagnostic, Level};
    ///
    /// let diag = Diagnostic::new(Level::Error, "error message");
    /// ```
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            loc: None,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::error("something went wrong");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::warning("lexeme has no classification");
    /// ```
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Attach a source location
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::Diagnostic;
    /// use jottc_util::span::SourceLoc;
    ///
    /// let diag = Diagnostic::error("stray '.'")
    ///     .with_loc(SourceLoc::new("main.jott".into(), 4));
    /// ```
    pub fn with_loc(mut self, loc: SourceLoc) -> Self {
        self.loc = Some(loc);
        self
    }

    /// Set the diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::{Diagnostic, DiagnosticCode};
    ///
    /// let diag = Diagnostic::error("stray '.'")
    ///     .with_code(DiagnosticCode::E_LEX_STRAY_DOT);
    /// ```
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::error("unterminated string literal")
    ///     .with_note("string literals may not span lines");
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::error("bare '!'")
    ///     .with_help("write `!=` for inequality");
    /// ```
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if let Some(loc) = &self.loc {
            write!(f, "\n  --> {}", loc)?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }
        for help in &self.helps {
            write!(f, "\n  help: {}", help)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts. It can be configured to panic on errors for testing.
///
/// # Examples
///
/// ```
/// use jottc_util::diagnostic::{Diagnostic, Handler};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected token"));
///
/// if handler.has_errors() {
///     eprintln!("failed with {} errors", handler.error_count());
/// }
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::Handler;
    ///
    /// let handler = Handler::new();
    /// ```
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing)
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::Handler;
    ///
    /// let handler = Handler::new_panicking();
    /// ```
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::{Diagnostic, Handler};
    ///
    /// let handler = Handler::new();
    /// handler.emit_diagnostic(Diagnostic::warning("test"));
    /// ```
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level == Level::Error {
            panic!("diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::Handler;
    ///
    /// let handler = Handler::new();
    /// assert!(!handler.has_errors());
    /// ```
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
