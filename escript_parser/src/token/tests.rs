//! Token-level lexing tests

use logos::Logos;

use super::{is_strict_reserved_word, Precedence, Token};

fn lex(source: &str) -> Vec<Token> {
    Token::lexer(source).map(|r| r.unwrap()).collect()
}

#[test]
fn test_keywords() {
    assert_eq!(
        lex("if else function return"),
        vec![Token::KwIf, Token::KwElse, Token::KwFunction, Token::KwReturn]
    );
}

#[test]
fn test_contextual_words_are_identifiers() {
    for word in ["let", "of", "from", "as", "static", "get", "set", "target"] {
        assert_eq!(lex(word), vec![Token::Identifier], "{word}");
    }
}

#[test]
fn test_keyword_prefix_identifiers() {
    assert_eq!(lex("iffy"), vec![Token::Identifier]);
    assert_eq!(lex("newish"), vec![Token::Identifier]);
    assert_eq!(lex("$_x1"), vec![Token::Identifier]);
}

#[test]
fn test_punctuator_maximal_munch() {
    assert_eq!(lex(">>>="), vec![Token::GtGtGtEq]);
    assert_eq!(lex(">>>"), vec![Token::GtGtGt]);
    assert_eq!(lex("==="), vec![Token::EqEqEq]);
    assert_eq!(lex("=>"), vec![Token::Arrow]);
    assert_eq!(lex("..."), vec![Token::Ellipsis]);
    assert_eq!(lex("++--"), vec![Token::PlusPlus, Token::MinusMinus]);
}

#[test]
fn test_numeric_literal_forms() {
    assert_eq!(lex("0"), vec![Token::DecimalLiteral]);
    assert_eq!(lex("1e10"), vec![Token::DecimalLiteral]);
    assert_eq!(lex(".5"), vec![Token::DecimalLiteral]);
    assert_eq!(lex("3.14"), vec![Token::DecimalLiteral]);
    assert_eq!(lex("0x1F"), vec![Token::HexLiteral]);
    assert_eq!(lex("0o17"), vec![Token::OctalLiteral]);
    assert_eq!(lex("0b101"), vec![Token::BinaryLiteral]);
    // Legacy octal lexes as a decimal literal; the strict gate rejects it later
    assert_eq!(lex("010"), vec![Token::DecimalLiteral]);
}

#[test]
fn test_newlines_and_comments() {
    assert_eq!(
        lex("a\nb"),
        vec![Token::Identifier, Token::Newline, Token::Identifier]
    );
    assert_eq!(lex("// comment"), vec![Token::LineComment]);
    assert_eq!(lex("/*"), vec![Token::BlockCommentStart]);
    assert_eq!(lex("/"), vec![Token::Slash]);
    assert_eq!(lex("/="), vec![Token::SlashEq]);
}

#[test]
fn test_classification_helpers() {
    assert!(Token::KwIn.is_keyword());
    assert!(Token::KwEnum.is_future_reserved());
    assert!(Token::KwDelete.is_identifier_name());
    assert!(!Token::LParen.is_identifier_name());
    assert!(Token::GtGtGtEq.is_assignment_operator());
    assert!(!Token::Arrow.is_assignment_operator());
    assert!(Token::KwTypeof.is_unary_operator());
    assert!(is_strict_reserved_word("let"));
    assert!(!is_strict_reserved_word("of"));
}

#[test]
fn test_binary_precedence_grades() {
    assert_eq!(Token::OrOr.binary_precedence(), Some(Precedence::LogicalOr));
    assert_eq!(Token::Star.binary_precedence(), Some(Precedence::Multiplicative));
    assert_eq!(Token::KwIn.binary_precedence(), Some(Precedence::Relational));
    assert_eq!(Token::Eq.binary_precedence(), None);
    assert!(Precedence::LogicalAnd.is_logical());
    assert!(!Precedence::BitwiseOr.is_logical());
    assert!(Precedence::Multiplicative > Precedence::Additive);
}
