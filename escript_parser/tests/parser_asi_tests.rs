//! Automatic semicolon insertion behavior

use escript_parser::ast::{Expression, Program, Statement};
use escript_parser::parse_script;

fn parse(source: &str) -> Program {
    parse_script(source)
        .unwrap_or_else(|e| panic!("failed to parse {:?}\nerror: {}", source, e))
}

fn function_body(source: &str) -> Vec<Statement> {
    let mut program = parse(source);
    match program.body.remove(0) {
        Statement::FunctionDeclaration(decl) => decl.body.body,
        other => panic!("expected function declaration, got {:?}", other),
    }
}

#[test]
fn test_return_argument_must_share_the_line() {
    // return ⏎ a + b  →  return; followed by the expression statement
    let body = function_body("function f() { return\na + b }");
    assert_eq!(body.len(), 2);
    match &body[0] {
        Statement::Return(ret) => assert!(ret.argument.is_none()),
        other => panic!("expected return, got {:?}", other),
    }
    match &body[1] {
        Statement::Expression(stmt) => {
            assert!(matches!(stmt.expression, Expression::Binary(_)));
        }
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_return_expression_continues_across_lines() {
    // return a ⏎ + b  →  one return with the full binary expression
    let body = function_body("function f() { return a\n+ b }");
    assert_eq!(body.len(), 1);
    match &body[0] {
        Statement::Return(ret) => {
            assert!(matches!(ret.argument, Some(Expression::Binary(_))));
        }
        other => panic!("expected return, got {:?}", other),
    }
}

#[test]
fn test_newline_terminates_statements() {
    let program = parse("x = 1\ny = 2");
    assert_eq!(program.body.len(), 2);
}

#[test]
fn test_missing_terminator_on_one_line_is_fatal() {
    assert!(parse_script("var x = 1 var y = 2").is_err());
}

#[test]
fn test_closing_brace_ends_statement() {
    let program = parse("{ a = 1 }");
    match &program.body[0] {
        Statement::Block(block) => assert_eq!(block.body.len(), 1),
        other => panic!("expected block, got {:?}", other),
    }
}

#[test]
fn test_end_of_input_ends_statement() {
    assert_eq!(parse("a + b").body.len(), 1);
}

#[test]
fn test_postfix_update_must_share_the_line() {
    // x ⏎ ++ ⏎ y  →  x; ++y;
    let program = parse("x\n++\ny");
    assert_eq!(program.body.len(), 2);
    match &program.body[0] {
        Statement::Expression(stmt) => {
            assert!(matches!(stmt.expression, Expression::Identifier(_)));
        }
        other => panic!("expected expression statement, got {:?}", other),
    }
    match &program.body[1] {
        Statement::Expression(stmt) => match &stmt.expression {
            Expression::Update(update) => assert!(update.prefix),
            other => panic!("expected update, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_call_continues_across_lines() {
    // A parenthesis on the next line still belongs to the call
    let program = parse("a\n(b)");
    assert_eq!(program.body.len(), 1);
    match &program.body[0] {
        Statement::Expression(stmt) => {
            assert!(matches!(stmt.expression, Expression::Call(_)));
        }
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_throw_newline_is_fatal() {
    assert!(parse_script("throw\nnew Error()").is_err());
}

#[test]
fn test_continue_label_must_share_the_line() {
    let program = parse("while (0) { continue\nfoo; }");
    match &program.body[0] {
        Statement::While(stmt) => match &*stmt.body {
            Statement::Block(block) => {
                assert_eq!(block.body.len(), 2);
                match &block.body[0] {
                    Statement::Continue(c) => assert!(c.label.is_none()),
                    other => panic!("expected continue, got {:?}", other),
                }
            }
            other => panic!("expected block, got {:?}", other),
        },
        other => panic!("expected while, got {:?}", other),
    }
}

#[test]
fn test_debugger_asi() {
    let program = parse("debugger\nx");
    assert_eq!(program.body.len(), 2);
    assert!(matches!(program.body[0], Statement::Debugger(_)));
}

#[test]
fn test_do_while_asi() {
    let program = parse("do x; while (0)\ny");
    assert_eq!(program.body.len(), 2);
}

#[test]
fn test_asi_in_declarations() {
    let program = parse("var a = 1\nlet b = 2\nconst c = 3");
    assert_eq!(program.body.len(), 3);
}
