//! jottc-lex - Lexical Analyzer for the Jott Programming Language
//!
//! This crate provides a complete tokenizer for the Jott programming
//! language. It transforms source code into a flat list of tokens that can
//! be consumed by the parser.
//!
//! # Overview
//!
//! Jott tokenization is line-oriented: each line is scanned independently
//! and every token records the file name and 1-based line it came from.
//! Scanning and classification are separate steps. The scanner cuts the
//! line into lexemes; classification then decides each lexeme's kind from
//! its text alone, trying number, string, identifier, and punctuation in
//! that order.
//!
//! Errors are all-or-nothing. A stray `.`, a bare `!`, or an unterminated
//! string anywhere in the file means no tokens at all, including from lines
//! that scanned cleanly.
//!
//! # Example Usage
//!
//! ```
//! use jottc_lex::{Lexer, TokenKind};
//!
//! let source = "x = 5; # assign\n";
//! let tokens = Lexer::new(source, "main.jott").tokenize().unwrap();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].kind, TokenKind::IdKeyword);
//! assert_eq!(tokens[1].kind, TokenKind::Assign);
//! assert_eq!(tokens[2].kind, TokenKind::Number);
//! assert_eq!(tokens[3].kind, TokenKind::Semicolon);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and kind definitions, plus classification
//! - [`lexer`] - File-level driver over the per-line scanner
//! - [`scanner`] - The per-line scanner
//! - [`cursor`] - Character cursor for line traversal
//! - [`error`] - Lexical error types
//!
//! # Token Kinds
//!
//! - **NUMBER**: `42`, `3.14`, `5.`, `.5`
//! - **STRING**: `"hello"` (verbatim, no escapes, single line)
//! - **ID_KEYWORD**: `[a-zA-Z_][a-zA-Z0-9_]*`; keywords are not split out
//! - **Punctuation**: `;` `{` `}` `[` `]` `,` `:` `=`
//! - **MATH_OP**: `+` `-` `*` `/`
//! - **REL_OP**: `==` `!=` `<` `<=` `>` `>=`
//! - **FC_HEADER**: `::`
//! - **UNCLASSIFIED**: anything that matched no rule, kept for the driver
//!   to warn about

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{tokenize_file, Lexer};
pub use scanner::LineScanner;
pub use token::{Token, TokenKind};
