//! Function and class definition coverage

use escript_parser::ast::{Expression, MethodKind, Pattern, Program, Statement};
use escript_parser::parse_script;

fn parse(source: &str) -> Program {
    parse_script(source)
        .unwrap_or_else(|e| panic!("failed to parse {:?}\nerror: {}", source, e))
}

fn first_statement(source: &str) -> Statement {
    let mut program = parse(source);
    assert!(!program.body.is_empty(), "no statements in {:?}", source);
    program.body.remove(0)
}

// =============================================================================
// Functions
// =============================================================================

#[test]
fn test_function_declaration() {
    match first_statement("function f(a, b) { a; }") {
        Statement::FunctionDeclaration(decl) => {
            assert_eq!(decl.id.expect("name").name, "f");
            assert_eq!(decl.params.len(), 2);
            assert!(!decl.generator);
            assert_eq!(decl.body.body.len(), 1);
        }
        other => panic!("expected function declaration, got {:?}", other),
    }
}

#[test]
fn test_generator_declaration() {
    match first_statement("function* g() {}") {
        Statement::FunctionDeclaration(decl) => assert!(decl.generator),
        other => panic!("expected function declaration, got {:?}", other),
    }
}

#[test]
fn test_function_declaration_requires_name() {
    assert!(parse_script("function () {}").is_err());
}

#[test]
fn test_function_pattern_params() {
    match first_statement("function f([a, b], {c}, d = 4, ...e) {}") {
        Statement::FunctionDeclaration(decl) => {
            assert_eq!(decl.params.len(), 4);
            assert!(matches!(decl.params[0], Pattern::Array(_)));
            assert!(matches!(decl.params[1], Pattern::Object(_)));
            assert!(matches!(decl.params[2], Pattern::Assignment(_)));
            assert!(matches!(decl.params[3], Pattern::Rest(_)));
        }
        other => panic!("expected function declaration, got {:?}", other),
    }
}

#[test]
fn test_nested_functions_restore_return_context() {
    // `return` legal in both bodies, fatal again at top level afterwards
    assert!(parse_script("function f() { function g() { return 1; } return 2; }").is_ok());
    assert!(parse_script("function f() {} return;").is_err());
}

#[test]
fn test_iife() {
    match first_statement("(function () { return 1; })();") {
        Statement::Expression(stmt) => match stmt.expression {
            Expression::Call(call) => {
                assert!(matches!(*call.callee, Expression::Parenthesized(_)));
            }
            other => panic!("expected call, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

// =============================================================================
// Classes
// =============================================================================

#[test]
fn test_class_declaration_members() {
    let source = "class A { constructor() {} m() {} get x() { return 1; } static s() {} }";
    match first_statement(source) {
        Statement::ClassDeclaration(decl) => {
            assert_eq!(decl.id.expect("name").name, "A");
            assert!(decl.super_class.is_none());
            let methods = &decl.body.body;
            assert_eq!(methods.len(), 4);
            assert_eq!(methods[0].kind, MethodKind::Constructor);
            assert_eq!(methods[1].kind, MethodKind::Method);
            assert_eq!(methods[2].kind, MethodKind::Get);
            assert_eq!(methods[3].kind, MethodKind::Method);
            assert!(methods[3].is_static);
            assert!(!methods[1].is_static);
        }
        other => panic!("expected class declaration, got {:?}", other),
    }
}

#[test]
fn test_class_heritage() {
    match first_statement("class B extends A.Base {}") {
        Statement::ClassDeclaration(decl) => {
            assert!(matches!(
                decl.super_class.as_deref(),
                Some(Expression::Member(_))
            ));
        }
        other => panic!("expected class declaration, got {:?}", other),
    }
}

#[test]
fn test_class_body_semicolons_are_skipped() {
    match first_statement("class A { ; m() {} ; }") {
        Statement::ClassDeclaration(decl) => assert_eq!(decl.body.body.len(), 1),
        other => panic!("expected class declaration, got {:?}", other),
    }
}

#[test]
fn test_class_generator_and_setter() {
    match first_statement("class A { *gen() {} set x(v) {} }") {
        Statement::ClassDeclaration(decl) => {
            assert!(decl.body.body[0].value.generator);
            assert_eq!(decl.body.body[1].kind, MethodKind::Set);
        }
        other => panic!("expected class declaration, got {:?}", other),
    }
}

#[test]
fn test_class_computed_method_name() {
    match first_statement("class A { [x]() {} }") {
        Statement::ClassDeclaration(decl) => {
            assert!(decl.body.body[0].computed);
            assert_eq!(decl.body.body[0].kind, MethodKind::Method);
        }
        other => panic!("expected class declaration, got {:?}", other),
    }
}

#[test]
fn test_method_named_get_and_static() {
    // `get` and `static` directly followed by `(` are plain method names
    match first_statement("class A { get() {} static() {} static static() {} }") {
        Statement::ClassDeclaration(decl) => {
            let methods = &decl.body.body;
            assert_eq!(methods.len(), 3);
            assert_eq!(methods[0].kind, MethodKind::Method);
            assert!(!methods[0].is_static);
            assert!(!methods[1].is_static);
            assert!(methods[2].is_static);
        }
        other => panic!("expected class declaration, got {:?}", other),
    }
}

#[test]
fn test_string_key_is_not_constructor() {
    match first_statement("class A { \"constructor\"() {} }") {
        Statement::ClassDeclaration(decl) => {
            assert_eq!(decl.body.body[0].kind, MethodKind::Method);
        }
        other => panic!("expected class declaration, got {:?}", other),
    }
}

#[test]
fn test_static_without_method_is_fatal() {
    assert!(parse_script("class A { static }").is_err());
}

#[test]
fn test_class_name_is_plain_identifier_only() {
    assert!(parse_script("class if {}").is_err());
}
