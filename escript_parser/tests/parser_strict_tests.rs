//! Strict mode gate behavior

use escript_parser::ast::{Program, Statement};
use escript_parser::{parse_module, parse_script};

fn parse(source: &str) -> Program {
    parse_script(source)
        .unwrap_or_else(|e| panic!("failed to parse {:?}\nerror: {}", source, e))
}

// =============================================================================
// Legacy octal literals
// =============================================================================

#[test]
fn test_octal_literal_rejected_after_use_strict() {
    let err = parse_script("\"use strict\"; var x = 010;").unwrap_err();
    assert!(
        err.to_string()
            .contains("Octal literals are not allowed in strict mode"),
        "unexpected message: {}",
        err
    );
}

#[test]
fn test_octal_literal_allowed_in_sloppy_mode() {
    assert!(parse_script("var x = 010;").is_ok());
}

#[test]
fn test_octal_escape_rejected_in_strict_string() {
    let err = parse_script("\"use strict\"; var s = \"\\01\";").unwrap_err();
    assert!(err
        .to_string()
        .contains("Octal literals are not allowed in strict mode"));
}

#[test]
fn test_null_escape_allowed_in_strict_string() {
    assert!(parse_script("\"use strict\"; var s = \"\\0\";").is_ok());
}

#[test]
fn test_octal_escape_rejected_in_strict_template() {
    assert!(parse_script("\"use strict\"; `\\1`;").is_err());
}

// =============================================================================
// delete identifier
// =============================================================================

#[test]
fn test_delete_identifier_rejected_in_strict_mode() {
    let err = parse_script("\"use strict\"; delete x;").unwrap_err();
    assert!(err
        .to_string()
        .contains("Deleting an unqualified identifier is not allowed in strict mode"));
}

#[test]
fn test_delete_member_allowed_in_strict_mode() {
    assert!(parse_script("\"use strict\"; delete a.b;").is_ok());
}

#[test]
fn test_delete_identifier_allowed_in_sloppy_mode() {
    assert!(parse_script("delete x;").is_ok());
}

// =============================================================================
// Labelled functions
// =============================================================================

#[test]
fn test_labelled_function_rejected_in_strict_mode() {
    let err = parse_script("\"use strict\"; l: function f() {}").unwrap_err();
    assert!(err
        .to_string()
        .contains("Labelled functions are not allowed in strict mode"));
}

// =============================================================================
// Reserved words
// =============================================================================

#[test]
fn test_strict_reserved_binding_rejected() {
    assert!(parse_script("\"use strict\"; var interface = 1;").is_err());
    assert!(parse_script("var interface = 1;").is_ok());
}

#[test]
fn test_yield_binding_rejected_in_strict_mode() {
    assert!(parse_script("\"use strict\"; var yield = 1;").is_err());
    assert!(parse_script("var yield = 1;").is_ok());
}

// =============================================================================
// Strictness scoping
// =============================================================================

#[test]
fn test_function_body_strictness_does_not_leak() {
    // The directive applies inside the body only
    let program = parse("function f() { \"use strict\"; } var let = 1;");
    assert_eq!(program.body.len(), 2);
    assert!(matches!(program.body[1], Statement::VariableDeclaration(_)));
}

#[test]
fn test_function_body_directive_applies_inside() {
    assert!(parse_script("function f() { \"use strict\"; var let = 1; }").is_err());
}

#[test]
fn test_class_bodies_are_strict() {
    assert!(parse_script("class A { m() { return 010; } }").is_err());
    assert!(parse_script("var x = 010; class A {}").is_ok());
}

#[test]
fn test_directive_must_lead_the_prologue() {
    // A non-directive statement ends the prologue, so the flag is not set
    assert!(parse_script("var a; \"use strict\"; var x = 010;").is_ok());
}

#[test]
fn test_with_statement_parses_in_strict_mode() {
    // The reference does not enforce the strict-mode with restriction
    assert!(parse_script("\"use strict\"; with (o) x;").is_ok());
}

// =============================================================================
// Modules
// =============================================================================

#[test]
fn test_module_rejects_octal_without_directive() {
    assert!(parse_module("var x = 010;").is_err());
}

#[test]
fn test_module_rejects_strict_reserved_binding() {
    assert!(parse_module("var package = 1;").is_err());
}
