//! Digit accumulation and the `.` rule.
//!
//! Digits are pushed onto the pending buffer one at a time by the dispatch
//! loop. The only interesting case lives here: a `.` is kept when a digit
//! sits directly before or after it in the raw line, and is a lexical error
//! otherwise. The check looks at the line text, not the pending buffer, so
//! `x5.` keeps the dot even though it cannot join the identifier.

use crate::error::LexError;
use crate::scanner::LineScanner;

impl<'a> LineScanner<'a> {
    /// Scans a `.`.
    ///
    /// The dot joins the pending buffer when the character before or after
    /// it in the line is a digit. A dot with no adjacent digit is a
    /// [`LexError::StrayDot`].
    pub(super) fn scan_dot(&mut self) -> Result<(), LexError> {
        let digit_after = self.cursor.peek_char(1).is_ascii_digit();
        let digit_before = self.cursor.prev_char().is_ascii_digit();

        if digit_after || digit_before {
            self.pending.push('.');
            self.cursor.advance();
            Ok(())
        } else {
            Err(LexError::StrayDot { loc: self.loc() })
        }
    }
}
