//! Core line scanner implementation.
//!
//! This module contains the main LineScanner struct and its dispatch loop.
//! The scanner walks one line, accumulating digit and letter runs into a
//! pending buffer and emitting finished lexemes as tokens. Whitespace and
//! any character that starts a new lexeme flush the buffer first, so tokens
//! always come out in source order.

use std::sync::Arc;

use jottc_util::SourceLoc;

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Scanner for a single line of Jott source.
///
/// Scanning is fallible: a stray `.`, a bare `!`, or an unterminated string
/// stops the scan with a [`LexError`]. The caller treats any line error as
/// fatal for the whole file.
pub struct LineScanner<'a> {
    /// Character cursor over the line.
    pub(super) cursor: Cursor<'a>,

    /// Name of the file this line came from.
    file: Arc<str>,

    /// 1-based line number.
    line: u32,

    /// Characters accumulated toward the next token.
    pub(super) pending: String,

    /// Tokens emitted so far on this line.
    tokens: Vec<Token>,
}

impl<'a> LineScanner<'a> {
    /// Creates a scanner for one line.
    pub fn new(line_text: &'a str, file: Arc<str>, line: u32) -> Self {
        Self {
            cursor: Cursor::new(line_text),
            file,
            line,
            pending: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Scans the line to completion and returns its tokens.
    ///
    /// A `#` ends the scan early; anything accumulated before it is still
    /// flushed. The pending buffer is always flushed at end of line.
    pub fn scan(mut self) -> Result<Vec<Token>, LexError> {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            match c {
                '#' => break,
                c if c.is_whitespace() => {
                    self.flush_pending();
                    self.cursor.advance();
                },
                c if c.is_ascii_digit() => {
                    self.pending.push(c);
                    self.cursor.advance();
                },
                c if c.is_ascii_alphabetic() => self.scan_identifier(),
                '.' => self.scan_dot()?,
                '<' | '>' | '=' | '!' => self.scan_relational()?,
                '"' => self.scan_string()?,
                ':' => self.scan_colon(),
                c => {
                    self.flush_pending();
                    self.cursor.advance();
                    self.emit(c.to_string());
                },
            }
        }

        self.flush_pending();
        Ok(self.tokens)
    }

    /// Emits the pending buffer as a token, if it is non-empty.
    pub(super) fn flush_pending(&mut self) {
        if !self.pending.is_empty() {
            let lexeme = std::mem::take(&mut self.pending);
            self.emit(lexeme);
        }
    }

    /// Emits a token, classifying the lexeme.
    pub(super) fn emit(&mut self, lexeme: String) {
        let loc = self.loc();
        self.tokens.push(Token::new(lexeme, loc));
    }

    /// Emits a token with an explicit kind.
    pub(super) fn emit_with_kind(&mut self, lexeme: String, kind: TokenKind) {
        let loc = self.loc();
        self.tokens.push(Token::with_kind(lexeme, loc, kind));
    }

    /// Returns the location of this line.
    pub(super) fn loc(&self) -> SourceLoc {
        SourceLoc::new(self.file.clone(), self.line)
    }
}
