//! Literal coverage: numbers, strings, templates, regular expressions

use pretty_assertions::assert_eq;

use escript_parser::ast::{Expression, LiteralValue, Program, Statement};
use escript_parser::parse_script;

fn parse(source: &str) -> Program {
    parse_script(source)
        .unwrap_or_else(|e| panic!("failed to parse {:?}\nerror: {}", source, e))
}

fn literal(source: &str) -> escript_parser::ast::Literal {
    let mut program = parse(source);
    match program.body.remove(0) {
        Statement::Expression(stmt) => match stmt.expression {
            Expression::Literal(literal) => literal,
            other => panic!("expected literal, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

fn number(source: &str) -> f64 {
    match literal(source).value {
        LiteralValue::Number(n) => n,
        other => panic!("expected number, got {:?}", other),
    }
}

fn string(source: &str) -> String {
    match literal(source).value {
        LiteralValue::String(s) => s,
        other => panic!("expected string, got {:?}", other),
    }
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn test_numeric_forms() {
    assert_eq!(number("42;"), 42.0);
    assert_eq!(number("3.25;"), 3.25);
    assert_eq!(number(".5;"), 0.5);
    assert_eq!(number("2e3;"), 2000.0);
    assert_eq!(number("0x1F;"), 31.0);
    assert_eq!(number("0o17;"), 15.0);
    assert_eq!(number("0b101;"), 5.0);
}

#[test]
fn test_legacy_octal_in_sloppy_mode() {
    assert_eq!(number("010;"), 8.0);
    // `08` has a non-octal digit, so it stays decimal
    assert_eq!(number("089;"), 89.0);
}

#[test]
fn test_raw_is_preserved() {
    assert_eq!(literal("0x1F;").raw, "0x1F");
    assert_eq!(literal("1e3;").raw, "1e3");
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn test_string_values() {
    assert_eq!(string("\"abc\";"), "abc");
    assert_eq!(string("'it\\'s';"), "it's");
    assert_eq!(string("\"a\\nb\";"), "a\nb");
    assert_eq!(string("\"\\x41\";"), "A");
    assert_eq!(string("\"\\u0041\";"), "A");
    assert_eq!(string("\"\\u{1F600}\";"), "\u{1F600}");
}

#[test]
fn test_string_line_continuation() {
    assert_eq!(string("\"a\\\nb\";"), "ab");
}

#[test]
fn test_string_octal_escape_in_sloppy_mode() {
    assert_eq!(string("\"\\101\";"), "A");
    assert_eq!(string("\"\\0\";"), "\0");
}

#[test]
fn test_boolean_and_null() {
    assert_eq!(literal("true;").value, LiteralValue::Boolean(true));
    assert_eq!(literal("false;").value, LiteralValue::Boolean(false));
    assert_eq!(literal("null;").value, LiteralValue::Null);
}

#[test]
fn test_unterminated_string_is_fatal() {
    assert!(parse_script("\"abc\n\";").is_err());
}

// =============================================================================
// Regular expressions
// =============================================================================

#[test]
fn test_regexp_literal() {
    let lit = literal("/ab+c/gi;");
    assert_eq!(lit.raw, "/ab+c/gi");
    let regex = lit.regex.expect("regex data");
    assert_eq!(regex.pattern, "ab+c");
    assert_eq!(regex.flags, "gi");
    assert_eq!(lit.value, LiteralValue::Null);
}

#[test]
fn test_regexp_with_class_slash() {
    let lit = literal("/a[/]b/;");
    assert_eq!(lit.regex.expect("regex data").pattern, "a[/]b");
}

#[test]
fn test_regexp_in_argument_position() {
    let mut program = parse("f(/x/);");
    match program.body.remove(0) {
        Statement::Expression(stmt) => match stmt.expression {
            Expression::Call(call) => {
                assert!(matches!(call.arguments[0], Expression::Literal(_)));
            }
            other => panic!("expected call, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

// =============================================================================
// Templates
// =============================================================================

#[test]
fn test_plain_template() {
    let mut program = parse("`hello`;");
    match program.body.remove(0) {
        Statement::Expression(stmt) => match stmt.expression {
            Expression::TemplateLiteral(template) => {
                assert_eq!(template.quasis.len(), 1);
                assert!(template.quasis[0].tail);
                assert_eq!(template.quasis[0].value.cooked, "hello");
                assert!(template.expressions.is_empty());
            }
            other => panic!("expected template, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_template_with_substitutions() {
    let mut program = parse("`a${x}b${y}c`;");
    match program.body.remove(0) {
        Statement::Expression(stmt) => match stmt.expression {
            Expression::TemplateLiteral(template) => {
                let raw: Vec<&str> = template
                    .quasis
                    .iter()
                    .map(|q| q.value.raw.as_str())
                    .collect();
                assert_eq!(raw, vec!["a", "b", "c"]);
                assert_eq!(template.expressions.len(), 2);
                assert!(template.quasis[2].tail);
            }
            other => panic!("expected template, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_template_with_object_literal_inside() {
    let mut program = parse("`${ {a: 1} }`;");
    match program.body.remove(0) {
        Statement::Expression(stmt) => match stmt.expression {
            Expression::TemplateLiteral(template) => {
                assert!(matches!(template.expressions[0], Expression::Object(_)));
            }
            other => panic!("expected template, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_template_cooked_escapes() {
    let mut program = parse("`a\\n${x}`;");
    match program.body.remove(0) {
        Statement::Expression(stmt) => match stmt.expression {
            Expression::TemplateLiteral(template) => {
                assert_eq!(template.quasis[0].value.raw, "a\\n");
                assert_eq!(template.quasis[0].value.cooked, "a\n");
            }
            other => panic!("expected template, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_template_spans_lines() {
    assert!(parse_script("`line1\nline2`;").is_ok());
}

#[test]
fn test_unterminated_template_is_fatal() {
    assert!(parse_script("`abc;").is_err());
}
