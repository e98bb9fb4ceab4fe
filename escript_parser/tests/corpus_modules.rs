//! Module item coverage: import and export declarations

use escript_parser::ast::{
    ExportDefaultTarget, Expression, ImportDeclarationSpecifier, Program, Statement,
};
use escript_parser::{parse_module, parse_script};

fn parse(source: &str) -> Program {
    parse_module(source)
        .unwrap_or_else(|e| panic!("failed to parse module {:?}\nerror: {}", source, e))
}

fn first_item(source: &str) -> Statement {
    let mut program = parse(source);
    assert!(!program.body.is_empty(), "no items in {:?}", source);
    program.body.remove(0)
}

// =============================================================================
// Imports
// =============================================================================

#[test]
fn test_bare_import() {
    match first_item("import \"m\";") {
        Statement::Import(decl) => {
            assert!(decl.specifiers.is_empty());
            assert_eq!(decl.source.raw, "\"m\"");
        }
        other => panic!("expected import, got {:?}", other),
    }
}

#[test]
fn test_default_import() {
    match first_item("import d from \"m\";") {
        Statement::Import(decl) => {
            assert_eq!(decl.specifiers.len(), 1);
            match &decl.specifiers[0] {
                ImportDeclarationSpecifier::Default(spec) => assert_eq!(spec.local.name, "d"),
                other => panic!("expected default specifier, got {:?}", other),
            }
        }
        other => panic!("expected import, got {:?}", other),
    }
}

#[test]
fn test_namespace_import() {
    match first_item("import * as ns from \"m\";") {
        Statement::Import(decl) => match &decl.specifiers[0] {
            ImportDeclarationSpecifier::Namespace(spec) => assert_eq!(spec.local.name, "ns"),
            other => panic!("expected namespace specifier, got {:?}", other),
        },
        other => panic!("expected import, got {:?}", other),
    }
}

#[test]
fn test_named_imports() {
    match first_item("import {a, b as c} from \"m\";") {
        Statement::Import(decl) => {
            assert_eq!(decl.specifiers.len(), 2);
            match &decl.specifiers[1] {
                ImportDeclarationSpecifier::Named(spec) => {
                    assert_eq!(spec.imported.name, "b");
                    assert_eq!(spec.local.name, "c");
                }
                other => panic!("expected named specifier, got {:?}", other),
            }
        }
        other => panic!("expected import, got {:?}", other),
    }
}

#[test]
fn test_default_with_named_imports() {
    match first_item("import d, {a} from \"m\";") {
        Statement::Import(decl) => assert_eq!(decl.specifiers.len(), 2),
        other => panic!("expected import, got {:?}", other),
    }
}

#[test]
fn test_default_with_namespace_import() {
    match first_item("import d, * as ns from \"m\";") {
        Statement::Import(decl) => assert_eq!(decl.specifiers.len(), 2),
        other => panic!("expected import, got {:?}", other),
    }
}

#[test]
fn test_keyword_imported_name() {
    // The imported name accepts any IdentifierName; the local binding
    // does not
    match first_item("import {default as d} from \"m\";") {
        Statement::Import(decl) => match &decl.specifiers[0] {
            ImportDeclarationSpecifier::Named(spec) => {
                assert_eq!(spec.imported.name, "default");
                assert_eq!(spec.local.name, "d");
            }
            other => panic!("expected named specifier, got {:?}", other),
        },
        other => panic!("expected import, got {:?}", other),
    }
}

#[test]
fn test_import_in_script_is_fatal() {
    assert!(parse_script("import \"m\";").is_err());
}

// =============================================================================
// Exports
// =============================================================================

#[test]
fn test_export_all() {
    match first_item("export * from \"m\";") {
        Statement::ExportAll(decl) => assert_eq!(decl.source.raw, "\"m\""),
        other => panic!("expected export-all, got {:?}", other),
    }
}

#[test]
fn test_export_default_expression() {
    match first_item("export default 42;") {
        Statement::ExportDefault(decl) => {
            assert!(matches!(
                decl.declaration,
                ExportDefaultTarget::Expression(Expression::Literal(_))
            ));
        }
        other => panic!("expected export-default, got {:?}", other),
    }
}

#[test]
fn test_export_default_anonymous_function() {
    match first_item("export default function () {}") {
        Statement::ExportDefault(decl) => match decl.declaration {
            ExportDefaultTarget::Function(f) => assert!(f.id.is_none()),
            other => panic!("expected function target, got {:?}", other),
        },
        other => panic!("expected export-default, got {:?}", other),
    }
}

#[test]
fn test_export_default_named_class() {
    match first_item("export default class C {}") {
        Statement::ExportDefault(decl) => match decl.declaration {
            ExportDefaultTarget::Class(c) => assert_eq!(c.id.expect("name").name, "C"),
            other => panic!("expected class target, got {:?}", other),
        },
        other => panic!("expected export-default, got {:?}", other),
    }
}

#[test]
fn test_export_named_specifiers() {
    match first_item("export {a, b as c};") {
        Statement::ExportNamed(decl) => {
            assert!(decl.declaration.is_none());
            assert!(decl.source.is_none());
            assert_eq!(decl.specifiers.len(), 2);
            assert_eq!(decl.specifiers[1].local.name, "b");
            assert_eq!(decl.specifiers[1].exported.name, "c");
        }
        other => panic!("expected named export, got {:?}", other),
    }
}

#[test]
fn test_export_reexport() {
    match first_item("export {a} from \"m\";") {
        Statement::ExportNamed(decl) => assert!(decl.source.is_some()),
        other => panic!("expected named export, got {:?}", other),
    }
}

#[test]
fn test_export_declarations() {
    for source in [
        "export var x = 1;",
        "export const k = 1;",
        "export function f() {}",
        "export class C {}",
    ] {
        match first_item(source) {
            Statement::ExportNamed(decl) => {
                assert!(decl.declaration.is_some(), "no declaration for {:?}", source);
            }
            other => panic!("expected named export for {:?}, got {:?}", source, other),
        }
    }
}

// =============================================================================
// Module strictness
// =============================================================================

#[test]
fn test_module_is_strict_from_first_token() {
    assert!(parse_module("x = 010;").is_err());
    assert!(parse_module("delete x;").is_err());
    assert!(parse_script("x = 010;").is_ok());
}

#[test]
fn test_module_allows_regular_statements() {
    let program = parse("var a = 1; export {a};");
    assert_eq!(program.body.len(), 2);
}
