//! Source position bookkeeping
//!
//! Every node's span must start at its first token and end at its last,
//! and child spans must nest inside their parent's.

use pretty_assertions::assert_eq;

use escript_parser::ast::{Expression, Program, Statement};
use escript_parser::parse_script;

fn parse(source: &str) -> Program {
    parse_script(source)
        .unwrap_or_else(|e| panic!("failed to parse {:?}\nerror: {}", source, e))
}

/// Walk the serialized tree and check that every node with a span
/// contains all spans beneath it
fn check_containment(value: &serde_json::Value, parent: Option<(u64, u64)>) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(span) = map.get("span") {
                let start = span["start"].as_u64().expect("span.start");
                let end = span["end"].as_u64().expect("span.end");
                assert!(start <= end, "inverted span {start}..{end}");
                if let Some((parent_start, parent_end)) = parent {
                    assert!(
                        parent_start <= start && end <= parent_end,
                        "child span {start}..{end} escapes parent {parent_start}..{parent_end}"
                    );
                }
                for (key, child) in map {
                    if key != "span" {
                        check_containment(child, Some((start, end)));
                    }
                }
            } else {
                for child in map.values() {
                    check_containment(child, parent);
                }
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                check_containment(item, parent);
            }
        }
        _ => {}
    }
}

#[test]
fn test_span_containment_across_constructs() {
    let sources = [
        "var x = 1, [a, {b = 2}] = c;",
        "function f(a = 1, ...r) { return a ? r : [a, , 2]; }",
        "class A extends B { constructor() { super(); } get x() { return new.target; } }",
        "for (let [k, v] of pairs) { total += v; }",
        "switch (x) { case 1: a; default: b; }",
        "tag`one${1 + 2}two${ {a: `inner${b}`} }three`;",
        "try { throw /re/gi; } catch ({message}) {} finally { done(); }",
        "import d, {a as b} from \"m\"; export default (x) => x * 2;",
        "lbl: do x--; while (x > 0)",
    ];
    for source in sources {
        let program = if source.starts_with("import") {
            escript_parser::parse_module(source).expect("module parses")
        } else {
            parse(source)
        };
        check_containment(&program.to_json(), None);
    }
}

#[test]
fn test_exact_offsets_var_declaration() {
    let program = parse("var x = 1;");
    assert_eq!(program.span.start, 0);
    assert_eq!(program.span.end, 10);

    match &program.body[0] {
        Statement::VariableDeclaration(decl) => {
            // Statement span includes the semicolon
            assert_eq!((decl.span.start, decl.span.end), (0, 10));
            let declarator = &decl.declarations[0];
            assert_eq!((declarator.span.start, declarator.span.end), (4, 9));
            assert_eq!((declarator.id.span().start, declarator.id.span().end), (4, 5));
            let init = declarator.init.as_ref().expect("init");
            assert_eq!((init.span().start, init.span().end), (8, 9));
        }
        other => panic!("expected var declaration, got {:?}", other),
    }
}

#[test]
fn test_exact_offsets_binary_fold() {
    let program = parse("a + b * c;");
    match &program.body[0] {
        Statement::Expression(stmt) => match &stmt.expression {
            Expression::Binary(add) => {
                assert_eq!((add.span.start, add.span.end), (0, 9));
                assert_eq!((add.left.span().start, add.left.span().end), (0, 1));
                match &*add.right {
                    Expression::Binary(mul) => {
                        assert_eq!((mul.span.start, mul.span.end), (4, 9));
                    }
                    other => panic!("expected binary, got {:?}", other),
                }
            }
            other => panic!("expected binary, got {:?}", other),
        },
        other => panic!("expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_line_and_column_tracking() {
    let program = parse("a;\nb;");
    let second = &program.body[1];
    let span = second.span();
    assert_eq!(span.start, 3);
    assert_eq!(span.start_line, 2);
    assert_eq!(span.start_column, 1);
    assert_eq!(span.end_line, 2);
}

#[test]
fn test_statement_span_covers_terminator() {
    let program = parse("  a + b ;");
    let span = program.body[0].span();
    // Starts at the first token, not at offset zero
    assert_eq!(span.start, 2);
    assert_eq!(span.end, 9);
}

#[test]
fn test_reparse_yields_identical_tree() {
    let source = "function f(a) { return a ? [1, , 2] : `t${a}`; } f(new Date());";
    let first = parse(source);
    let second = parse(source);
    assert_eq!(first, second);
}

#[test]
fn test_arrow_cover_leaves_no_residue() {
    // The same prefix parses through the snapshot twice: once rejected
    // as arrow parameters, once committed
    let grouped = parse("(a, b);");
    let arrow = parse("(a, b) => a;");
    match &grouped.body[0] {
        Statement::Expression(stmt) => {
            assert!(matches!(stmt.expression, Expression::Parenthesized(_)));
            let span = stmt.expression.span();
            assert_eq!((span.start, span.end), (0, 6));
        }
        other => panic!("expected expression statement, got {:?}", other),
    }
    match &arrow.body[0] {
        Statement::Expression(stmt) => {
            assert!(matches!(stmt.expression, Expression::ArrowFunction(_)));
            let span = stmt.expression.span();
            assert_eq!((span.start, span.end), (0, 11));
        }
        other => panic!("expected expression statement, got {:?}", other),
    }
}
