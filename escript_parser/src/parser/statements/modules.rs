//! Module item parsers (import and export declarations)
//!
//! Only the module item list tries these; a script never reaches them.
//! Specifier names accept any IdentifierName, local bindings accept a
//! plain identifier only.

use crate::ast::{
    ExportAllDeclaration, ExportDefaultDeclaration, ExportDefaultTarget, ExportNamedDeclaration,
    ExportSpecifier, ImportDeclaration, ImportDeclarationSpecifier, ImportDefaultSpecifier,
    ImportNamespaceSpecifier, ImportSpecifier, Statement,
};
use crate::error::ParseResult;
use crate::span::Span;

use crate::parser::{IdentifierMode, Parser};

impl<'a> Parser<'a> {
    /// Parse the body of a module: import/export declarations plus
    /// ordinary statement-list items
    pub(crate) fn parse_module_item_list(&mut self) -> ParseResult<Vec<Statement>> {
        let mut items = Vec::new();
        loop {
            if let Some(item) = self.parse_import_declaration()? {
                items.push(item);
                continue;
            }
            if let Some(item) = self.parse_export_declaration()? {
                items.push(item);
                continue;
            }
            match self.parse_statement_list_item()? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(items)
    }

    // ==================== Import ====================

    /// Parse an import declaration:
    /// `import "mod";`, `import def from "mod";`,
    /// `import * as ns from "mod";`, `import { a, b as c } from "mod";`,
    /// and the `def,` combinations
    pub(crate) fn parse_import_declaration(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("import")?.is_none() {
            return Ok(None);
        }

        // Bare module specifier: import "mod";
        if matches!(
            self.scanner.current()?,
            Some(t) if t.token == crate::token::Token::StringLiteral
        ) {
            let source = self.parse_string_literal_node()?;
            self.assert_end_of_statement()?;
            return Ok(Some(Statement::Import(ImportDeclaration {
                specifiers: Vec::new(),
                source,
                span: self.finish(start),
            })));
        }

        let mut specifiers = Vec::new();

        // Default binding, optionally followed by more specifiers
        if let Some(local) = self.parse_identifier(IdentifierMode::AllowNothing)? {
            let span = local.span;
            specifiers.push(ImportDeclarationSpecifier::Default(ImportDefaultSpecifier {
                local,
                span,
            }));
            if self.scanner.consume(",")?.is_some() {
                self.parse_secondary_import_specifiers(&mut specifiers)?;
            }
        } else {
            self.parse_secondary_import_specifiers(&mut specifiers)?;
        }

        self.expect("from")?;
        let source = self.parse_string_literal_node()?;
        self.assert_end_of_statement()?;

        Ok(Some(Statement::Import(ImportDeclaration {
            specifiers,
            source,
            span: self.finish(start),
        })))
    }

    /// Parse the namespace or named-imports specifier forms
    fn parse_secondary_import_specifiers(
        &mut self,
        specifiers: &mut Vec<ImportDeclarationSpecifier>,
    ) -> ParseResult<()> {
        // Namespace: * as ns
        if let Some(star) = self.scanner.consume("*")? {
            self.expect("as")?;
            let Some(local) = self.parse_identifier(IdentifierMode::AllowNothing)? else {
                return Err(self.unexpected()?);
            };
            let span = self.source_map.span(star.span.start, self.scanner.position());
            specifiers.push(ImportDeclarationSpecifier::Namespace(
                ImportNamespaceSpecifier { local, span },
            ));
            return Ok(());
        }

        // Named imports: { a, b as c }
        self.expect("{")?;
        loop {
            if self.scanner.check("}")? {
                break;
            }
            let start = self.start()?;
            let Some(imported) = self.parse_identifier(IdentifierMode::AllowAll)? else {
                return Err(self.unexpected()?);
            };
            let local = if self.scanner.consume("as")?.is_some() {
                match self.parse_identifier(IdentifierMode::AllowNothing)? {
                    Some(local) => local,
                    None => return Err(self.unexpected()?),
                }
            } else {
                imported.clone()
            };
            specifiers.push(ImportDeclarationSpecifier::Named(ImportSpecifier {
                imported,
                local,
                span: self.finish(start),
            }));
            if self.scanner.consume(",")?.is_none() {
                break;
            }
        }
        self.expect("}")?;
        Ok(())
    }

    // ==================== Export ====================

    /// Parse an export declaration:
    /// `export * from "mod";`, `export default ...;`,
    /// `export { a, b as c } [from "mod"];`, and `export <declaration>`
    pub(crate) fn parse_export_declaration(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("export")?.is_none() {
            return Ok(None);
        }

        // export * from "mod";
        if self.scanner.consume("*")?.is_some() {
            self.expect("from")?;
            let source = self.parse_string_literal_node()?;
            self.assert_end_of_statement()?;
            return Ok(Some(Statement::ExportAll(ExportAllDeclaration {
                source,
                span: self.finish(start),
            })));
        }

        // export default ...
        if self.scanner.consume("default")?.is_some() {
            // An expression form is allowed only when the next token is
            // not `function` or `class`
            let declaration = if self.scanner.check("function")? {
                match self.parse_function_declaration(true)? {
                    Some(declaration) => ExportDefaultTarget::Function(declaration),
                    None => return Err(self.unexpected()?),
                }
            } else if self.scanner.check("class")? {
                match self.parse_class_declaration(true)? {
                    Some(declaration) => ExportDefaultTarget::Class(declaration),
                    None => return Err(self.unexpected()?),
                }
            } else {
                let Some(expression) = self.parse_assignment_expression()? else {
                    return Err(self.unexpected()?);
                };
                self.assert_end_of_statement()?;
                ExportDefaultTarget::Expression(expression)
            };

            return Ok(Some(Statement::ExportDefault(ExportDefaultDeclaration {
                declaration,
                span: self.finish(start),
            })));
        }

        // export { ... } [from "mod"];
        if self.scanner.check("{")? {
            let specifiers = self.parse_export_specifiers()?;
            let source = if self.scanner.consume("from")?.is_some() {
                Some(self.parse_string_literal_node()?)
            } else {
                None
            };
            self.assert_end_of_statement()?;
            return Ok(Some(Statement::ExportNamed(ExportNamedDeclaration {
                declaration: None,
                specifiers,
                source,
                span: self.finish(start),
            })));
        }

        // export <declaration>
        let declaration = if let Some(statement) = self.parse_variable_statement()? {
            statement
        } else if let Some(statement) = self.parse_lexical_declaration()? {
            statement
        } else if let Some(statement) = self.parse_function_declaration_statement()? {
            statement
        } else if let Some(statement) = self.parse_class_declaration_statement()? {
            statement
        } else {
            return Err(self.unexpected()?);
        };

        Ok(Some(Statement::ExportNamed(ExportNamedDeclaration {
            declaration: Some(Box::new(declaration)),
            specifiers: Vec::new(),
            source: None,
            span: self.finish(start),
        })))
    }

    /// Parse `{ local [as exported], ... }`
    fn parse_export_specifiers(&mut self) -> ParseResult<Vec<ExportSpecifier>> {
        self.expect("{")?;
        let mut specifiers = Vec::new();
        loop {
            if self.scanner.check("}")? {
                break;
            }
            let start = self.start()?;
            let Some(local) = self.parse_identifier(IdentifierMode::AllowAll)? else {
                return Err(self.unexpected()?);
            };
            let exported = if self.scanner.consume("as")?.is_some() {
                match self.parse_identifier(IdentifierMode::AllowAll)? {
                    Some(exported) => exported,
                    None => return Err(self.unexpected()?),
                }
            } else {
                local.clone()
            };
            let span: Span = self.finish(start);
            specifiers.push(ExportSpecifier {
                local,
                exported,
                span,
            });
            if self.scanner.consume(",")?.is_none() {
                break;
            }
        }
        self.expect("}")?;
        Ok(specifiers)
    }
}
