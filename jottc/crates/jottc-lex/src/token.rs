//! Token types for the Jott language.
//!
//! This module defines the `Token` struct produced by the lexer and the
//! `TokenKind` classification applied to each lexeme. Classification is a
//! property of the finished lexeme text, not of how it was scanned: the
//! scanner accumulates characters and the kind is decided when the lexeme
//! is emitted.

use std::fmt;

use jottc_util::SourceLoc;

/// The classification of a token's lexeme.
///
/// Kinds are decided by [`TokenKind::classify`] in a fixed precedence order:
/// number, then string, then identifier/keyword, then punctuation. A lexeme
/// matching none of these is `Unclassified`; the lexer still emits it so the
/// driver can surface it as a warning rather than dropping text silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A numeric literal: `123`, `5.`, `.5`, `3.14`.
    Number,
    /// A double-quoted string literal, quotes included in the lexeme.
    String,
    /// An identifier or keyword: `[a-zA-Z_][a-zA-Z0-9_]*`.
    IdKeyword,
    /// `;`
    Semicolon,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `=`
    Assign,
    /// One of `+`, `-`, `*`, `/`.
    MathOp,
    /// One of `==`, `!=`, `<`, `<=`, `>`, `>=`.
    RelOp,
    /// `::`, the function-call header marker.
    FcHeader,
    /// A lexeme that matched no classification rule.
    Unclassified,
}

impl TokenKind {
    /// Classifies a finished lexeme.
    ///
    /// Precedence: number, string, identifier, punctuation. `::` is never
    /// classified here; the scanner tags it [`TokenKind::FcHeader`] directly
    /// when it consumes both colons.
    ///
    /// # Example
    ///
    /// ```
    /// use jottc_lex::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::classify("5."), TokenKind::Number);
    /// assert_eq!(TokenKind::classify("While"), TokenKind::IdKeyword);
    /// assert_eq!(TokenKind::classify("<="), TokenKind::RelOp);
    /// assert_eq!(TokenKind::classify("5x"), TokenKind::Unclassified);
    /// ```
    pub fn classify(lexeme: &str) -> TokenKind {
        if is_number_lexeme(lexeme) {
            TokenKind::Number
        } else if is_string_lexeme(lexeme) {
            TokenKind::String
        } else if is_identifier_lexeme(lexeme) {
            TokenKind::IdKeyword
        } else if let Some(kind) = punctuation_kind(lexeme) {
            kind
        } else {
            TokenKind::Unclassified
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::IdKeyword => "ID_KEYWORD",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LBrace => "L_BRACE",
            TokenKind::RBrace => "R_BRACE",
            TokenKind::LBracket => "L_BRACKET",
            TokenKind::RBracket => "R_BRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::MathOp => "MATH_OP",
            TokenKind::RelOp => "REL_OP",
            TokenKind::FcHeader => "FC_HEADER",
            TokenKind::Unclassified => "UNCLASSIFIED",
        };
        f.write_str(name)
    }
}

/// A single token: the lexeme text, where it came from, and its kind.
///
/// # Example
///
/// ```
/// use jottc_lex::token::{Token, TokenKind};
/// use jottc_util::SourceLoc;
///
/// let token = Token::new("42".to_string(), SourceLoc::new("main.jott".into(), 1));
/// assert_eq!(token.kind, TokenKind::Number);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The exact text of the token as it appeared in the source.
    pub lexeme: String,
    /// File and 1-based line the token was scanned on.
    pub loc: SourceLoc,
    /// Classification of the lexeme.
    pub kind: TokenKind,
}

impl Token {
    /// Creates a token, classifying the lexeme with [`TokenKind::classify`].
    pub fn new(lexeme: String, loc: SourceLoc) -> Self {
        let kind = TokenKind::classify(&lexeme);
        Self { lexeme, loc, kind }
    }

    /// Creates a token with an explicit kind, skipping classification.
    ///
    /// Used for `::`, which the scanner recognizes structurally.
    pub fn with_kind(lexeme: String, loc: SourceLoc, kind: TokenKind) -> Self {
        Self { lexeme, loc, kind }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.loc, self.kind, self.lexeme)
    }
}

/// Returns true if the lexeme is a numeric literal.
///
/// A number is a run of ASCII digits with at most one `.` anywhere in it,
/// and at least one digit. This admits `5.`, `.5`, and `3.14`, and rejects
/// a bare `.` and anything with two dots.
fn is_number_lexeme(lexeme: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for b in lexeme.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Returns true if the lexeme is a complete double-quoted string literal.
fn is_string_lexeme(lexeme: &str) -> bool {
    lexeme.len() >= 2 && lexeme.starts_with('"') && lexeme.ends_with('"')
}

/// Returns true if the lexeme is an identifier or keyword.
///
/// Identifiers match `[a-zA-Z_][a-zA-Z0-9_]*`. Keywords are not
/// distinguished at this stage; the parser tells them apart.
fn is_identifier_lexeme(lexeme: &str) -> bool {
    let mut bytes = lexeme.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {},
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Maps a punctuation lexeme to its kind, if it is one.
///
/// `::` is deliberately absent: the scanner emits it with
/// [`TokenKind::FcHeader`] directly and it never reaches classification.
fn punctuation_kind(lexeme: &str) -> Option<TokenKind> {
    let kind = match lexeme {
        ";" => TokenKind::Semicolon,
        "{" => TokenKind::LBrace,
        "}" => TokenKind::RBrace,
        "[" => TokenKind::LBracket,
        "]" => TokenKind::RBracket,
        "," => TokenKind::Comma,
        ":" => TokenKind::Colon,
        "=" => TokenKind::Assign,
        "+" | "-" | "*" | "/" => TokenKind::MathOp,
        "==" | "!=" | "<" | "<=" | ">" | ">=" => TokenKind::RelOp,
        _ => return None,
    };
    Some(kind)
}
