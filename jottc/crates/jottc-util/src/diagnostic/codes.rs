//! Diagnostic codes for categorizing tokenizer errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, enabling users to look up documentation and grep
//! driver output for specific failures.
//!
//! # Examples
//!
//! ```
//! use jottc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_STRAY_DOT;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
///
/// Lexer diagnostics occupy the 1xxx block.
///
/// # Examples
///
/// ```
/// use jottc_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", 1001);
/// assert_eq!(code.as_str(), "E1001");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use jottc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 1001);
    /// assert_eq!(code.as_str(), "W1001");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix ("E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001", "W1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // PREDEFINED ERROR CODES (E1001-E1999: lexer)
    // =========================================================================

    /// E1001: Lexer - Stray '.' not attached to a digit
    pub const E_LEX_STRAY_DOT: Self = Self::new("E", 1001);
    /// E1002: Lexer - Bare '!' not followed by '='
    pub const E_LEX_BARE_BANG: Self = Self::new("E", 1002);
    /// E1003: Lexer - Unterminated string literal
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1003);
    /// E1004: Lexer - Source file could not be read
    pub const E_LEX_IO: Self = Self::new("E", 1004);

    // =========================================================================
    // PREDEFINED WARNING CODES (W1001-W1999: lexer)
    // =========================================================================

    /// W1001: Lexer - Lexeme has no classification
    pub const W_LEX_UNCLASSIFIED: Self = Self::new("W", 1001);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
