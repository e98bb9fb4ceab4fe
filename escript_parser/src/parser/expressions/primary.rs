//! Primary expression parsing
//!
//! Handles `this`, identifier references, literals, array and object
//! literals, parenthesized expressions, template literals, and the
//! function/class expression forms.

use crate::ast::{
    ArrayExpression, AssignmentExpression, Expression, ObjectExpression, ParenthesizedExpression,
    Pattern, Property, PropertyKind, SpreadElement, ThisExpression,
};
use crate::error::ParseResult;
use crate::token::Token;

use super::super::{IdentifierMode, Parser};

impl<'a> Parser<'a> {
    /// Parse a primary expression
    pub(crate) fn parse_primary_expression(&mut self) -> ParseResult<Option<Expression>> {
        if let Some(token) = self.scanner.consume("this")? {
            return Ok(Some(Expression::This(ThisExpression { span: token.span })));
        }

        if let Some(literal) = self.parse_literal()? {
            return Ok(Some(literal));
        }

        if let Some(array) = self.parse_array_literal()? {
            return Ok(Some(array));
        }

        if let Some(object) = self.parse_object_literal()? {
            return Ok(Some(object));
        }

        if let Some(function) = self.parse_function_expression()? {
            return Ok(Some(function));
        }

        if let Some(class) = self.parse_class_expression()? {
            return Ok(Some(class));
        }

        if matches!(self.scanner.current()?, Some(t) if t.token == Token::Template) {
            if let Some(template) = self.parse_template_literal()? {
                return Ok(Some(Expression::TemplateLiteral(template)));
            }
        }

        if let Some(paren) = self.parse_parenthesized_expression()? {
            return Ok(Some(paren));
        }

        if let Some(id) = self.parse_identifier(IdentifierMode::Mixed)? {
            return Ok(Some(Expression::Identifier(id)));
        }

        Ok(None)
    }

    /// Parse `( Expression )`
    ///
    /// The arrow cover grammar has already been tried and rejected by the
    /// time this runs, so a parenthesis here is a plain grouping.
    fn parse_parenthesized_expression(&mut self) -> ParseResult<Option<Expression>> {
        let start = self.start()?;
        if self.scanner.consume("(")?.is_none() {
            return Ok(None);
        }

        let context = self.context.and_in(true);
        let Some(expression) = self.with_context(context, |p| p.parse_expression())? else {
            return Err(self.unexpected()?);
        };
        self.expect(")")?;

        Ok(Some(Expression::Parenthesized(ParenthesizedExpression {
            expression: Box::new(expression),
            span: self.finish(start),
        })))
    }

    // ==================== Array Literals ====================

    /// Parse an array literal with elisions and spread elements
    pub(crate) fn parse_array_literal(&mut self) -> ParseResult<Option<Expression>> {
        let start = self.start()?;
        if self.scanner.consume("[")?.is_none() {
            return Ok(None);
        }

        let mut elements: Vec<Option<Expression>> = Vec::new();
        loop {
            if self.scanner.check("]")? {
                break;
            }
            // Elision
            if self.scanner.consume(",")?.is_some() {
                elements.push(None);
                continue;
            }

            let element = if self.scanner.check("...")? {
                let spread_start = self.start()?;
                self.expect("...")?;
                let context = self.context.and_in(true);
                let Some(argument) =
                    self.with_context(context, |p| p.parse_assignment_expression())?
                else {
                    return Err(self.unexpected()?);
                };
                Expression::Spread(SpreadElement {
                    argument: Box::new(argument),
                    span: self.finish(spread_start),
                })
            } else {
                let context = self.context.and_in(true);
                let Some(element) =
                    self.with_context(context, |p| p.parse_assignment_expression())?
                else {
                    return Err(self.unexpected()?);
                };
                element
            };
            elements.push(Some(element));

            if self.scanner.consume(",")?.is_none() {
                break;
            }
        }

        self.expect("]")?;
        Ok(Some(Expression::Array(ArrayExpression {
            elements,
            span: self.finish(start),
        })))
    }

    // ==================== Object Literals ====================

    /// Parse an object literal
    pub(crate) fn parse_object_literal(&mut self) -> ParseResult<Option<Expression>> {
        let start = self.start()?;
        if self.scanner.consume("{")?.is_none() {
            return Ok(None);
        }

        let mut properties = Vec::new();
        loop {
            if self.scanner.check("}")? {
                break;
            }
            let Some(property) = self.parse_property()? else {
                return Err(self.unexpected()?);
            };
            properties.push(property);
            if self.scanner.consume(",")?.is_none() {
                break;
            }
        }

        self.expect("}")?;
        Ok(Some(Expression::Object(ObjectExpression {
            properties,
            span: self.finish(start),
        })))
    }

    /// Parse one object literal property: method, getter/setter,
    /// `key: value`, shorthand, or cover-initialized shorthand
    fn parse_property(&mut self) -> ParseResult<Option<Property>> {
        if let Some(property) = self.parse_property_method()? {
            return Ok(Some(property));
        }

        let start = self.start()?;

        // Identifier key: `a: 1`, shorthand `a`, or covered `a = 1`
        if let Some(id) = self.parse_identifier(IdentifierMode::Mixed)? {
            if self.scanner.consume(":")?.is_some() {
                let context = self.context.and_in(true);
                let Some(value) =
                    self.with_context(context, |p| p.parse_assignment_expression())?
                else {
                    return Err(self.unexpected()?);
                };
                return Ok(Some(Property {
                    key: Expression::Identifier(id),
                    value,
                    kind: PropertyKind::Init,
                    method: false,
                    shorthand: false,
                    computed: false,
                    span: self.finish(start),
                }));
            }

            // Cover-initialized name; only meaningful once the object is
            // rewritten into a pattern
            let value = if self.scanner.consume("=")?.is_some() {
                let context = self.context.and_in(true);
                let Some(right) =
                    self.with_context(context, |p| p.parse_assignment_expression())?
                else {
                    return Err(self.unexpected()?);
                };
                Expression::Assignment(AssignmentExpression {
                    operator: "=".to_string(),
                    left: Box::new(Pattern::Identifier(id.clone())),
                    right: Box::new(right),
                    span: self.finish(start),
                })
            } else {
                Expression::Identifier(id.clone())
            };

            return Ok(Some(Property {
                key: Expression::Identifier(id),
                value,
                kind: PropertyKind::Init,
                method: false,
                shorthand: true,
                computed: false,
                span: self.finish(start),
            }));
        }

        // Keyword, string, numeric, or computed key; requires `: value`
        let Some((key, computed)) = self.parse_property_name()? else {
            return Ok(None);
        };
        self.expect(":")?;
        let context = self.context.and_in(true);
        let Some(value) = self.with_context(context, |p| p.parse_assignment_expression())? else {
            return Err(self.unexpected()?);
        };
        Ok(Some(Property {
            key,
            value,
            kind: PropertyKind::Init,
            method: false,
            shorthand: false,
            computed,
            span: self.finish(start),
        }))
    }

    /// Try to parse a method-shaped property: getter, setter, generator,
    /// or plain method. Restores the scanner and reports no match when
    /// the property turns out to be a plain `key: value` or shorthand.
    fn parse_property_method(&mut self) -> ParseResult<Option<Property>> {
        let start = self.start()?;
        let state = self.scanner.state();

        if let Some(accessor) = self.scanner.consume_one_of(&["get", "set"])? {
            if self.scanner.check("(")? {
                // `get`/`set` is the property name of a plain method
                self.scanner.restore(state.clone());
            } else {
                let Some((key, computed)) = self.parse_property_name()? else {
                    self.scanner.restore(state);
                    return Ok(None);
                };
                if !self.scanner.check("(")? {
                    self.scanner.restore(state);
                    return Ok(None);
                }
                let kind = if accessor.text == "get" {
                    PropertyKind::Get
                } else {
                    PropertyKind::Set
                };
                let value = self.parse_method_function(false)?;
                return Ok(Some(Property {
                    key,
                    value: Expression::Function(value),
                    kind,
                    method: false,
                    shorthand: false,
                    computed,
                    span: self.finish(start),
                }));
            }
        }

        let generator = self.scanner.consume("*")?.is_some();

        let Some((key, computed)) = self.parse_property_name()? else {
            self.scanner.restore(state);
            return Ok(None);
        };
        if !self.scanner.check("(")? {
            self.scanner.restore(state);
            return Ok(None);
        }
        let value = self.parse_method_function(generator)?;
        Ok(Some(Property {
            key,
            value: Expression::Function(value),
            kind: PropertyKind::Init,
            method: true,
            shorthand: false,
            computed,
            span: self.finish(start),
        }))
    }

    // ==================== Property Names ====================

    /// Parse a property name: IdentifierName, string or numeric literal,
    /// or a computed `[ expression ]` key. Returns the key and whether it
    /// is computed.
    pub(crate) fn parse_property_name(&mut self) -> ParseResult<Option<(Expression, bool)>> {
        if self.scanner.consume("[")?.is_some() {
            let context = self.context.and_in(true);
            let Some(key) = self.with_context(context, |p| p.parse_assignment_expression())?
            else {
                return Err(self.unexpected()?);
            };
            self.expect("]")?;
            return Ok(Some((key, true)));
        }

        if let Some(id) = self.parse_identifier(IdentifierMode::AllowAll)? {
            return Ok(Some((Expression::Identifier(id), false)));
        }

        let Some(token) = self.scanner.current()? else {
            return Ok(None);
        };
        match token.token {
            Token::StringLiteral => Ok(Some((self.parse_string_literal()?, false))),
            t if t.is_numeric() => Ok(Some((self.parse_numeric_literal()?, false))),
            _ => Ok(None),
        }
    }
}
