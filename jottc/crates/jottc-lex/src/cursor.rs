//! Character cursor for traversing a single source line.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through the characters of one line. The tokenizer is
//! line-oriented, so the cursor never sees a newline; line numbers are
//! tracked by the lexer, not here.

/// A cursor for traversing one source line character by character.
///
/// The cursor maintains the current byte position in the line and provides
/// methods for advancing, peeking ahead, and looking one character back.
/// Lookbehind is needed because a `.` is kept or rejected based on the raw
/// characters on either side of it.
///
/// # Example
///
/// ```
/// use jottc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x = 5;");
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// ```
pub struct Cursor<'a> {
    /// The line being traversed.
    line: &'a str,

    /// Current byte position in the line.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given line.
    ///
    /// # Example
    ///
    /// ```
    /// use jottc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("x = 5;");
    /// assert_eq!(cursor.current_char(), 'x');
    /// ```
    pub fn new(line: &'a str) -> Self {
        Self { line, position: 0 }
    }

    /// Returns the character at the given byte offset from the current
    /// position, or '\0' past the end of the line.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.line.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.line.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.line[pos..].chars().next().unwrap_or('\0')
    }

    /// Returns the current character, or '\0' at the end of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use jottc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character at the given offset from the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use jottc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek_char(1), 'b');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    /// Returns the character immediately before the current position, or
    /// '\0' at the start of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use jottc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("5.");
    /// assert_eq!(cursor.prev_char(), '\0');
    /// cursor.advance();
    /// assert_eq!(cursor.prev_char(), '5');
    /// ```
    pub fn prev_char(&self) -> char {
        if self.position == 0 {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.line.as_bytes()[self.position - 1];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.line[..self.position].chars().next_back().unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Does nothing if already at the end of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use jottc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// cursor.advance();
    /// assert_eq!(cursor.current_char(), 'b');
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.line.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.line.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.line[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use jottc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=");
    /// cursor.advance();
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use jottc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn is_at_end(&self) -> bool {
        self.position >= self.line.len()
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("x = 5;");
        assert_eq!(cursor.current_char(), 'x');
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_peek_char() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek_char(0), 'a');
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.peek_char(3), '\0');
        assert_eq!(cursor.peek_char(100), '\0');
    }

    #[test]
    fn test_prev_char() {
        let mut cursor = Cursor::new("5.x");
        assert_eq!(cursor.prev_char(), '\0');
        cursor.advance();
        assert_eq!(cursor.prev_char(), '5');
        cursor.advance();
        assert_eq!(cursor.prev_char(), '.');
    }

    #[test]
    fn test_prev_char_utf8() {
        let mut cursor = Cursor::new("α.");
        cursor.advance();
        assert_eq!(cursor.prev_char(), 'α');
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("==");
        assert!(cursor.match_char('='));
        assert!(cursor.match_char('='));
        assert!(!cursor.match_char('='));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_is_at_end() {
        let mut cursor = Cursor::new("a");
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_empty_line() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβ");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        cursor.advance();
        assert!(cursor.is_at_end());
    }
}
