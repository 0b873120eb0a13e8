//! String literal scanning.
//!
//! A `"` starts a literal that runs verbatim to the next `"` on the same
//! line. There are no escape sequences; a backslash is just a character.
//! Strings cannot span lines, so a missing closing quote is an error at end
//! of line.

use crate::error::LexError;
use crate::scanner::LineScanner;

impl<'a> LineScanner<'a> {
    /// Scans a string literal, quotes included in the lexeme.
    ///
    /// Everything up to the closing quote is taken verbatim, `#` included.
    /// Reaching end of line first is a [`LexError::UnterminatedString`]
    /// reported at the line the string started on.
    pub(super) fn scan_string(&mut self) -> Result<(), LexError> {
        self.flush_pending();

        let mut lexeme = String::from("\"");
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            self.cursor.advance();
            lexeme.push(c);
            if c == '"' {
                self.emit(lexeme);
                return Ok(());
            }
        }

        Err(LexError::UnterminatedString { loc: self.loc() })
    }
}
