//! Class declarations, class expressions, and method definitions
//!
//! Class bodies are strict code: the scanner's strict flag is forced on
//! for the class tail and restored afterwards. The leading `static`,
//! `get`, `set` and `*` of a class element are contextual: when the next
//! token is `(` they were really the method name, and the parser rewinds
//! its snapshot to reparse them as such.

use crate::ast::{
    ClassBody, ClassDeclaration, ClassExpression, Expression, Identifier, MethodDefinition,
    MethodKind, Statement,
};
use crate::error::ParseResult;

use super::{IdentifierMode, Parser};

impl<'a> Parser<'a> {
    // ==================== Declarations ====================

    /// Parse a class declaration: `class name [extends expr] { body }`
    ///
    /// `allow_anonymous` is set for `export default class {}`.
    pub(crate) fn parse_class_declaration(
        &mut self,
        allow_anonymous: bool,
    ) -> ParseResult<Option<ClassDeclaration>> {
        let start = self.start()?;
        if self.scanner.consume("class")?.is_none() {
            return Ok(None);
        }

        let saved_strict = self.scanner.strict();
        self.scanner.set_strict(true);

        let id = self.parse_identifier(IdentifierMode::AllowNothing)?;
        if id.is_none() && !allow_anonymous {
            return Err(self.unexpected()?);
        }
        let (super_class, body) = self.parse_class_tail()?;
        self.scanner.set_strict(saved_strict);

        Ok(Some(ClassDeclaration {
            id,
            super_class,
            body,
            span: self.finish(start),
        }))
    }

    /// Statement-list wrapper around `parse_class_declaration`
    pub(crate) fn parse_class_declaration_statement(&mut self) -> ParseResult<Option<Statement>> {
        Ok(self
            .parse_class_declaration(false)?
            .map(Statement::ClassDeclaration))
    }

    // ==================== Expressions ====================

    /// Parse a class expression: `class [name] [extends expr] { body }`
    pub(crate) fn parse_class_expression(&mut self) -> ParseResult<Option<Expression>> {
        let start = self.start()?;
        if self.scanner.consume("class")?.is_none() {
            return Ok(None);
        }

        let saved_strict = self.scanner.strict();
        self.scanner.set_strict(true);

        let id = self.parse_identifier(IdentifierMode::AllowNothing)?;
        let (super_class, body) = self.parse_class_tail()?;
        self.scanner.set_strict(saved_strict);

        Ok(Some(Expression::Class(ClassExpression {
            id,
            super_class,
            body,
            span: self.finish(start),
        })))
    }

    // ==================== Class Tail ====================

    /// Parse the heritage clause and body shared by both class forms
    fn parse_class_tail(&mut self) -> ParseResult<(Option<Box<Expression>>, ClassBody)> {
        let super_class = if self.scanner.consume("extends")?.is_some() {
            let Some(heritage) = self.parse_left_hand_side_expression()? else {
                return Err(self.unexpected()?);
            };
            Some(Box::new(heritage))
        } else {
            None
        };

        let body = self.parse_class_body()?;
        Ok((super_class, body))
    }

    /// Parse a class body: `{` elements `}`, skipping bare `;`
    fn parse_class_body(&mut self) -> ParseResult<ClassBody> {
        let start = self.start()?;
        self.expect("{")?;

        let mut body = Vec::new();
        loop {
            if self.scanner.check("}")? {
                break;
            }
            if self.scanner.consume(";")?.is_some() {
                continue;
            }
            body.push(self.parse_class_element()?);
        }

        self.expect("}")?;
        Ok(ClassBody {
            body,
            span: self.finish(start),
        })
    }

    /// Parse one class element: optional `static`, then a method
    /// definition. `static` directly followed by `(` is itself the
    /// method name.
    fn parse_class_element(&mut self) -> ParseResult<MethodDefinition> {
        let start = self.start()?;
        let state = self.scanner.state();

        let mut is_static = false;
        if self.scanner.consume("static")?.is_some() {
            if self.scanner.check("(")? {
                self.scanner.restore(state);
            } else {
                is_static = true;
            }
        }

        let Some(mut method) = self.parse_method_definition()? else {
            // `static` with no method behind it is a fatal error
            return Err(self.unexpected()?);
        };
        method.is_static = is_static;
        method.span = self.finish(start);
        Ok(method)
    }

    /// Parse a method definition: getter, setter, generator, or plain
    /// method; a plain method named `constructor` becomes the constructor
    pub(crate) fn parse_method_definition(&mut self) -> ParseResult<Option<MethodDefinition>> {
        let start = self.start()?;
        let state = self.scanner.state();

        if let Some(accessor) = self.scanner.consume_one_of(&["get", "set"])? {
            if self.scanner.check("(")? {
                // The accessor word is the method name; rewind and
                // reparse it as such
                self.scanner.restore(state);
            } else {
                let Some((key, computed)) = self.parse_property_name()? else {
                    return Err(self.unexpected()?);
                };
                let kind = if accessor.text == "get" {
                    MethodKind::Get
                } else {
                    MethodKind::Set
                };
                let value = self.parse_method_function(false)?;
                return Ok(Some(MethodDefinition {
                    key,
                    value,
                    kind,
                    computed,
                    is_static: false,
                    span: self.finish(start),
                }));
            }
        }

        let generator = self.scanner.consume("*")?.is_some();

        let Some((key, computed)) = self.parse_property_name()? else {
            if generator {
                return Err(self.unexpected()?);
            }
            return Ok(None);
        };

        let kind = if !computed && is_constructor_key(&key) {
            MethodKind::Constructor
        } else {
            MethodKind::Method
        };

        let value = self.parse_method_function(generator)?;
        Ok(Some(MethodDefinition {
            key,
            value,
            kind,
            computed,
            is_static: false,
            span: self.finish(start),
        }))
    }
}

/// Whether a non-computed method key is the identifier `constructor`
fn is_constructor_key(key: &Expression) -> bool {
    matches!(key, Expression::Identifier(Identifier { name, .. }) if name == "constructor")
}
