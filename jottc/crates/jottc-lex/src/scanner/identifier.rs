//! Identifier and keyword runs.
//!
//! A letter pulls the whole alphanumeric run into the pending buffer and
//! emits it immediately. The buffer may already hold digits when the letter
//! arrives; the run is then one lexeme (`5x`), which classification rejects.

use crate::scanner::LineScanner;

impl<'a> LineScanner<'a> {
    /// Scans a letter and the alphanumeric run after it, then emits the
    /// pending buffer as one token.
    ///
    /// Underscores do not extend the run; `_` is a lexeme of its own.
    pub(super) fn scan_identifier(&mut self) {
        self.pending.push(self.cursor.current_char());
        self.cursor.advance();

        while self.cursor.current_char().is_ascii_alphanumeric() {
            self.pending.push(self.cursor.current_char());
            self.cursor.advance();
        }

        self.flush_pending();
    }
}
