//! Binding patterns and the expression→pattern reinterpreter
//!
//! Binding forms (declarations, parameters, catch clauses) are parsed
//! directly as patterns. Destructuring assignment targets and for-in/of
//! heads are parsed as expressions first and rewritten here.
//!
//! The pattern parsers report a structural mismatch as "no match" even
//! after consuming tokens; committed callers escalate to a fatal error
//! and speculative callers (the arrow cover grammar) restore their
//! scanner snapshot.

use crate::ast::{
    ArrayPattern, AssignmentPattern, AssignmentProperty, Expression, ObjectPattern, Pattern,
    PropertyKind, RestElement,
};
use crate::error::ParseResult;

use super::{IdentifierMode, Parser};

impl<'a> Parser<'a> {
    // ==================== Binding Patterns ====================

    /// Parse a binding target: identifier, array pattern, or object pattern
    pub(crate) fn parse_binding_target(&mut self) -> ParseResult<Option<Pattern>> {
        if let Some(id) = self.parse_identifier(IdentifierMode::Mixed)? {
            return Ok(Some(Pattern::Identifier(id)));
        }
        if let Some(pattern) = self.parse_array_binding_pattern()? {
            return Ok(Some(pattern));
        }
        self.parse_object_binding_pattern()
    }

    /// Parse a binding element: a target with an optional default value
    pub(crate) fn parse_binding_element(&mut self) -> ParseResult<Option<Pattern>> {
        let start = self.start()?;
        let Some(target) = self.parse_binding_target()? else {
            return Ok(None);
        };

        if self.scanner.consume("=")?.is_none() {
            return Ok(Some(target));
        }

        let context = self.context.and_in(true);
        let Some(right) = self.with_context(context, |p| p.parse_assignment_expression())? else {
            return Err(self.unexpected()?);
        };

        Ok(Some(Pattern::Assignment(Box::new(AssignmentPattern {
            left: target,
            right,
            span: self.finish(start),
        }))))
    }

    /// Parse an array binding pattern: `[` elements with elisions and an
    /// optional trailing rest element `]`
    pub(crate) fn parse_array_binding_pattern(&mut self) -> ParseResult<Option<Pattern>> {
        let start = self.start()?;
        if self.scanner.consume("[")?.is_none() {
            return Ok(None);
        }

        let mut elements: Vec<Option<Pattern>> = Vec::new();
        loop {
            if self.scanner.check("]")? {
                break;
            }
            // Elision
            if self.scanner.consume(",")?.is_some() {
                elements.push(None);
                continue;
            }
            // Rest element terminates the list
            if self.scanner.check("...")? {
                let Some(rest) = self.parse_rest_element()? else {
                    return Ok(None);
                };
                elements.push(Some(rest));
                break;
            }
            let Some(element) = self.parse_binding_element()? else {
                return Ok(None);
            };
            elements.push(Some(element));
            if self.scanner.consume(",")?.is_none() {
                break;
            }
        }

        if self.scanner.consume("]")?.is_none() {
            return Ok(None);
        }

        Ok(Some(Pattern::Array(ArrayPattern {
            elements,
            span: self.finish(start),
        })))
    }

    /// Parse an object binding pattern: `{` properties `}`
    pub(crate) fn parse_object_binding_pattern(&mut self) -> ParseResult<Option<Pattern>> {
        let start = self.start()?;
        if self.scanner.consume("{")?.is_none() {
            return Ok(None);
        }

        let mut properties = Vec::new();
        loop {
            if self.scanner.check("}")? {
                break;
            }
            let Some(property) = self.parse_binding_property()? else {
                return Ok(None);
            };
            properties.push(property);
            if self.scanner.consume(",")?.is_none() {
                break;
            }
        }

        if self.scanner.consume("}")?.is_none() {
            return Ok(None);
        }

        Ok(Some(Pattern::Object(ObjectPattern {
            properties,
            span: self.finish(start),
        })))
    }

    /// Parse one property of an object binding pattern: shorthand with an
    /// optional default, or `name : element`
    fn parse_binding_property(&mut self) -> ParseResult<Option<AssignmentProperty>> {
        let start = self.start()?;

        // Shorthand: a binding identifier, optionally with a default
        if let Some(id) = self.parse_identifier(IdentifierMode::Mixed)? {
            if self.scanner.consume(":")?.is_some() {
                let Some(value) = self.parse_binding_element()? else {
                    return Ok(None);
                };
                return Ok(Some(AssignmentProperty {
                    key: Expression::Identifier(id),
                    value,
                    kind: PropertyKind::Init,
                    method: false,
                    shorthand: false,
                    computed: false,
                    span: self.finish(start),
                }));
            }

            let value = if self.scanner.consume("=")?.is_some() {
                let context = self.context.and_in(true);
                let Some(right) =
                    self.with_context(context, |p| p.parse_assignment_expression())?
                else {
                    return Err(self.unexpected()?);
                };
                Pattern::Assignment(Box::new(AssignmentPattern {
                    left: Pattern::Identifier(id.clone()),
                    right,
                    span: self.finish(start),
                }))
            } else {
                Pattern::Identifier(id.clone())
            };

            return Ok(Some(AssignmentProperty {
                key: Expression::Identifier(id),
                value,
                kind: PropertyKind::Init,
                method: false,
                shorthand: true,
                computed: false,
                span: self.finish(start),
            }));
        }

        // Keyword, string, numeric, or computed key; requires `: element`
        let Some((key, computed)) = self.parse_property_name()? else {
            return Ok(None);
        };
        if self.scanner.consume(":")?.is_none() {
            return Ok(None);
        }
        let Some(value) = self.parse_binding_element()? else {
            return Ok(None);
        };
        Ok(Some(AssignmentProperty {
            key,
            value,
            kind: PropertyKind::Init,
            method: false,
            shorthand: false,
            computed,
            span: self.finish(start),
        }))
    }

    /// Parse a rest element: `... target`
    pub(crate) fn parse_rest_element(&mut self) -> ParseResult<Option<Pattern>> {
        let start = self.start()?;
        if self.scanner.consume("...")?.is_none() {
            return Ok(None);
        }
        let Some(argument) = self.parse_binding_target()? else {
            return Ok(None);
        };
        Ok(Some(Pattern::Rest(Box::new(RestElement {
            argument,
            span: self.finish(start),
        }))))
    }
}

// ==================== Expression → Pattern ====================

/// Reinterpret an expression as a destructuring target
///
/// Shallow-structural: array and object literals become patterns, spreads
/// become rests, `=` assignments become defaulted patterns, and anything
/// else is passed through unchanged. No validation of the leaves happens
/// here.
pub(crate) fn reinterpret_expression_as_pattern(expression: Expression) -> Pattern {
    match expression {
        Expression::Array(array) => {
            let elements = array
                .elements
                .into_iter()
                .map(|element| element.map(reinterpret_expression_as_pattern))
                .collect();
            Pattern::Array(ArrayPattern {
                elements,
                span: array.span,
            })
        }

        Expression::Object(object) => {
            let properties = object
                .properties
                .into_iter()
                .map(|property| AssignmentProperty {
                    key: property.key,
                    value: reinterpret_expression_as_pattern(property.value),
                    kind: property.kind,
                    method: property.method,
                    shorthand: property.shorthand,
                    computed: property.computed,
                    span: property.span,
                })
                .collect();
            Pattern::Object(ObjectPattern {
                properties,
                span: object.span,
            })
        }

        Expression::Spread(spread) => Pattern::Rest(Box::new(RestElement {
            argument: reinterpret_expression_as_pattern(*spread.argument),
            span: spread.span,
        })),

        Expression::Assignment(assignment) if assignment.operator == "=" => {
            Pattern::Assignment(Box::new(AssignmentPattern {
                left: *assignment.left,
                right: *assignment.right,
                span: assignment.span,
            }))
        }

        Expression::Identifier(id) => Pattern::Identifier(id),

        other => Pattern::Expression(Box::new(other)),
    }
}
