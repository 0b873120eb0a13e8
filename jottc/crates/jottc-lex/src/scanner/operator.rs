//! Relational operators, assignment, and colons.
//!
//! These characters end whatever lexeme was accumulating, so each scan
//! flushes the pending buffer before emitting its own token. That keeps
//! `5<=3` in source order: NUMBER, REL_OP, NUMBER.

use crate::error::LexError;
use crate::scanner::LineScanner;
use crate::token::TokenKind;

impl<'a> LineScanner<'a> {
    /// Scans `<`, `>`, `=`, or `!` and their two-character forms.
    ///
    /// Handles: `<`, `<=`, `>`, `>=`, `=`, `==`, `!=`
    ///
    /// A `!` with no `=` after it is a [`LexError::BareBang`]; Jott has no
    /// unary not.
    pub(super) fn scan_relational(&mut self) -> Result<(), LexError> {
        self.flush_pending();

        let c = self.cursor.current_char();
        self.cursor.advance();

        if c == '!' {
            if self.cursor.match_char('=') {
                self.emit("!=".to_string());
                Ok(())
            } else {
                Err(LexError::BareBang { loc: self.loc() })
            }
        } else {
            if self.cursor.match_char('=') {
                let mut lexeme = String::with_capacity(2);
                lexeme.push(c);
                lexeme.push('=');
                self.emit(lexeme);
            } else {
                self.emit(c.to_string());
            }
            Ok(())
        }
    }

    /// Scans `:` or `::`.
    ///
    /// Handles: `:`, `::`
    ///
    /// `::` is the function-call header marker and is tagged
    /// [`TokenKind::FcHeader`] directly rather than going through
    /// classification.
    pub(super) fn scan_colon(&mut self) {
        self.flush_pending();
        self.cursor.advance();

        if self.cursor.match_char(':') {
            self.emit_with_kind("::".to_string(), TokenKind::FcHeader);
        } else {
            self.emit(":".to_string());
        }
    }
}
