//! File-level tokenization.
//!
//! The [`Lexer`] drives a [`LineScanner`] over each line of a source file
//! and collects the tokens. Errors are all-or-nothing: the first lexical
//! error on any line aborts the file and no tokens are returned, not even
//! from lines that scanned cleanly.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::LexError;
use crate::scanner::LineScanner;
use crate::token::Token;

/// Lexer for Jott source text.
///
/// # Example
///
/// ```
/// use jottc_lex::Lexer;
///
/// let tokens = Lexer::new("x = 5;\n", "main.jott").tokenize().unwrap();
/// assert_eq!(tokens.len(), 4);
/// ```
pub struct Lexer<'a> {
    /// The full source text.
    source: &'a str,

    /// File name recorded on every token.
    file: Arc<str>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for the given source text.
    ///
    /// `file` is only used for token locations and error messages; the
    /// source itself comes from `source`.
    pub fn new(source: &'a str, file: &str) -> Self {
        Self {
            source,
            file: Arc::from(file),
        }
    }

    /// Tokenizes the whole source.
    ///
    /// Lines are numbered from 1. On error, tokens from earlier lines are
    /// discarded and only the error is returned.
    pub fn tokenize(&self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        for (index, line) in self.source.lines().enumerate() {
            let line_number = index as u32 + 1;
            let scanner = LineScanner::new(line, self.file.clone(), line_number);
            tokens.extend(scanner.scan()?);
        }

        Ok(tokens)
    }
}

/// Reads and tokenizes a source file.
///
/// A read failure is reported as [`LexError::Io`] with the path attached,
/// and aborts tokenization the same way a lexical error does.
pub fn tokenize_file(path: &Path) -> Result<Vec<Token>, LexError> {
    let source = fs::read_to_string(path).map_err(|source| LexError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file = path.to_string_lossy();
    Lexer::new(&source, &file).tokenize()
}
