use super::Scanner;
use crate::token::{Literal, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, errors) = Scanner::new(source).scan_tokens();
    assert!(errors.is_empty(), "unexpected scan errors: {errors:?}");
    tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn scans_single_char_punctuation() {
    assert_eq!(
        kinds("(){},.-+;*"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Star,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn scans_one_and_two_char_operators() {
    assert_eq!(
        kinds("! != = == < <= > >="),
        vec![
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn slash_is_division_unless_doubled() {
    assert_eq!(kinds("/"), vec![TokenKind::Slash, TokenKind::Eof]);
}

#[test]
fn line_comment_is_discarded() {
    let (tokens, errors) = Scanner::new("1 // a comment\n2").scan_tokens();
    assert!(errors.is_empty());
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]);
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn scans_string_literal() {
    let (tokens, errors) = Scanner::new("\"hello\"").scan_tokens();
    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Literal::Str("hello".to_string()));
}

#[test]
fn unterminated_string_reports_error_at_start_line() {
    let (_, errors) = Scanner::new("\"unterminated").scan_tokens();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, 1);
    assert!(errors[0].message.contains("Unterminated string"));
}

#[test]
fn string_literal_may_span_multiple_lines() {
    let (tokens, errors) = Scanner::new("\"a\nb\"").scan_tokens();
    assert!(errors.is_empty());
    assert_eq!(tokens[0].literal, Literal::Str("a\nb".to_string()));
}

#[test]
fn scans_integer_and_decimal_numbers() {
    let (tokens, errors) = Scanner::new("123 45.67").scan_tokens();
    assert!(errors.is_empty());
    assert_eq!(tokens[0].literal, Literal::Number(123.0));
    assert_eq!(tokens[1].literal, Literal::Number(45.67));
}

#[test]
fn leading_and_trailing_dot_are_not_part_of_number() {
    let (tokens, errors) = Scanner::new(".5 5.").scan_tokens();
    assert!(errors.is_empty());
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Dot,
            TokenKind::Number,
            TokenKind::Number,
            TokenKind::Dot,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn scans_identifiers_and_keywords() {
    assert_eq!(
        kinds("orchid and or"),
        vec![
            TokenKind::Identifier,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn identifier_may_contain_digits_and_underscore_but_not_start_with_digit() {
    let (tokens, errors) = Scanner::new("_foo bar_2").scan_tokens();
    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "_foo");
    assert_eq!(tokens[1].lexeme, "bar_2");
}

#[test]
fn unexpected_character_is_reported_and_scanning_continues() {
    let (tokens, errors) = Scanner::new("@ 1").scan_tokens();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Unexpected character"));
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn blank_source_scans_to_just_eof() {
    let (tokens, errors) = Scanner::new("").scan_tokens();
    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn tracks_line_numbers_across_newlines() {
    let (tokens, errors) = Scanner::new("1\n2\n3").scan_tokens();
    assert!(errors.is_empty());
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[2].line, 3);
}
