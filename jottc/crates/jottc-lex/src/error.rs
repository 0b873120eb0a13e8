//! Lexical error types.
//!
//! A lexical error aborts tokenization of the whole file: the lexer returns
//! the error and no tokens, including tokens from lines already scanned.

use std::io;
use std::path::PathBuf;

use jottc_util::{DiagnosticCode, SourceLoc};

/// An error encountered while tokenizing Jott source.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// A `.` with no digit on either side of it in the line.
    #[error("{loc}: stray '.' is not part of a number")]
    StrayDot {
        /// Where the dot was found.
        loc: SourceLoc,
    },

    /// A `!` not immediately followed by `=`.
    #[error("{loc}: '!' must be followed by '=' to form '!='")]
    BareBang {
        /// Where the bang was found.
        loc: SourceLoc,
    },

    /// A string literal whose closing `"` never arrived before end of line.
    #[error("{loc}: unterminated string literal")]
    UnterminatedString {
        /// Where the string started.
        loc: SourceLoc,
    },

    /// The source file could not be read.
    #[error("failed to read `{}`", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl LexError {
    /// Returns the source location of the error, if it has one.
    ///
    /// I/O errors are not tied to a line and return `None`.
    pub fn loc(&self) -> Option<&SourceLoc> {
        match self {
            LexError::StrayDot { loc }
            | LexError::BareBang { loc }
            | LexError::UnterminatedString { loc } => Some(loc),
            LexError::Io { .. } => None,
        }
    }

    /// Returns the diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::StrayDot { .. } => DiagnosticCode::E_LEX_STRAY_DOT,
            LexError::BareBang { .. } => DiagnosticCode::E_LEX_BARE_BANG,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEX_UNTERMINATED_STRING,
            LexError::Io { .. } => DiagnosticCode::E_LEX_IO,
        }
    }
}
