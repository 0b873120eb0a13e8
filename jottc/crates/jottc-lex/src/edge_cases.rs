//! Edge case tests for the tokenizer.
//!
//! Cases that sit on the boundaries of the scanning rules: dots next to
//! identifiers, operators against buffer flushes, comments mid-lexeme, and
//! property tests over generated input.

use proptest::prelude::*;

use crate::error::LexError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

fn lex_all(source: &str) -> Vec<Token> {
    Lexer::new(source, "edge.jott").tokenize().unwrap()
}

fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source, "edge.jott").tokenize()
}

fn lexemes(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.lexeme.as_str()).collect()
}

#[test]
fn test_crlf_line_endings() {
    // lines() strips the '\r', so CRLF sources tokenize like LF sources.
    let tokens = lex_all("x = 1;\r\ny = 2;\r\n");
    assert_eq!(lexemes(&tokens), vec!["x", "=", "1", ";", "y", "=", "2", ";"]);
    assert_eq!(tokens[4].loc.line, 2);
}

#[test]
fn test_tabs_are_whitespace() {
    let tokens = lex_all("x\t=\t5;");
    assert_eq!(lexemes(&tokens), vec!["x", "=", "5", ";"]);
}

#[test]
fn test_hash_inside_pending_number() {
    let tokens = lex_all("12#34");
    assert_eq!(lexemes(&tokens), vec!["12"]);
}

#[test]
fn test_hash_immediately_after_operator() {
    let tokens = lex_all("a <=# rest");
    assert_eq!(lexemes(&tokens), vec!["a", "<="]);
}

#[test]
fn test_error_after_comment_char_is_ignored() {
    // The '!' is inside the comment, so the line is fine.
    let tokens = lex_all("x; # a ! b");
    assert_eq!(lexemes(&tokens), vec!["x", ";"]);
}

#[test]
fn test_dot_adjacent_to_comment() {
    // "5." then '#': dot kept by lookbehind, then comment stops the line.
    let tokens = lex_all("5.#c");
    assert_eq!(lexemes(&tokens), vec!["5."]);
    assert_eq!(tokens[0].kind, TokenKind::Number);
}

#[test]
fn test_number_glued_to_bracket() {
    let tokens = lex_all("[5.]");
    assert_eq!(lexemes(&tokens), vec!["[", "5.", "]"]);
    assert_eq!(tokens[1].kind, TokenKind::Number);
}

#[test]
fn test_dot_after_bracket_before_digit() {
    // "].5": lookbehind sees ']', lookahead sees '5', so the dot is kept.
    let tokens = lex_all("].5");
    assert_eq!(lexemes(&tokens), vec!["]", ".5"]);
    assert_eq!(tokens[1].kind, TokenKind::Number);
}

#[test]
fn test_assign_vs_releq_boundary() {
    let tokens = lex_all("a = b == c");
    assert_eq!(tokens[1].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::RelOp);
}

#[test]
fn test_less_greater_back_to_back() {
    // "<>" is two one-character operators, not a pair.
    let tokens = lex_all("<>");
    assert_eq!(lexemes(&tokens), vec!["<", ">"]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::RelOp));
}

#[test]
fn test_equals_then_bang_equals() {
    let tokens = lex_all("=!=");
    assert_eq!(lexemes(&tokens), vec!["=", "!="]);
    assert_eq!(tokens[0].kind, TokenKind::Assign);
    assert_eq!(tokens[1].kind, TokenKind::RelOp);
}

#[test]
fn test_fc_header_glued_to_identifier_and_bracket() {
    let tokens = lex_all("::concat[a,b]");
    assert_eq!(
        lexemes(&tokens),
        vec!["::", "concat", "[", "a", ",", "b", "]"]
    );
    assert_eq!(tokens[0].kind, TokenKind::FcHeader);
}

#[test]
fn test_string_then_error_later_in_line() {
    // Clean string first, bare '!' after: whole file still fails.
    assert!(matches!(
        lex("\"ok\" !"),
        Err(LexError::BareBang { .. })
    ));
}

#[test]
fn test_first_error_wins() {
    // Stray dot on line 1 is hit before the bang on line 2.
    match lex("a.\n!\n") {
        Err(LexError::StrayDot { loc }) => assert_eq!(loc.line, 1),
        other => panic!("expected StrayDot, got {other:?}"),
    }
}

#[test]
fn test_non_ascii_letter_is_single_unclassified() {
    let tokens = lex_all("α");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme, "α");
    assert_eq!(tokens[0].kind, TokenKind::Unclassified);
}

#[test]
fn test_long_digit_run() {
    let source = "9".repeat(4096);
    let tokens = lex_all(&source);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme.len(), 4096);
}

proptest! {
    #[test]
    fn prop_safe_alphabet_never_errors(source in "[a-zA-Z0-9 ;{}\\[\\],:=<>+*/_#-]{0,200}") {
        // No '.', '!', or '"' means no lexical error is reachable.
        prop_assert!(lex(&source).is_ok());
    }

    #[test]
    fn prop_tokenize_is_deterministic(source in "[a-zA-Z0-9 .;{}\\[\\],:=<>!\"+*/_#-]{0,200}") {
        let first = lex(&source);
        let second = lex(&source);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {},
            _ => prop_assert!(false, "tokenize was not deterministic"),
        }
    }

    #[test]
    fn prop_digit_runs_are_numbers(digits in "[0-9]{1,40}") {
        let tokens = lex_all(&digits);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].lexeme, &digits);
    }

    #[test]
    fn prop_words_are_id_keywords(words in proptest::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,10}", 1..10)) {
        let source = words.join(" ");
        let tokens = lex_all(&source);
        prop_assert_eq!(tokens.len(), words.len());
        prop_assert!(tokens.iter().all(|t| t.kind == TokenKind::IdKeyword));
    }

    #[test]
    fn prop_line_numbers_in_range(source in "[a-z0-9 ;\n]{0,200}") {
        let line_count = source.lines().count() as u32;
        let tokens = lex_all(&source);
        prop_assert!(tokens.iter().all(|t| t.loc.line >= 1 && t.loc.line <= line_count.max(1)));
    }
}
