//! Left-hand-side expression composition
//!
//! Collects leading `new` operators (with `new.target` producing a meta
//! property), a `super` or primary base, and then folds member access,
//! call, and tagged-template suffixes left to right. Each `( args )`
//! consumes the innermost pending `new`; leftover `new`s wrap the result
//! innermost-first with no arguments.

use crate::ast::{
    CallExpression, Expression, Identifier, MemberExpression, MetaProperty, NewExpression,
    SpreadElement, Super, TaggedTemplateExpression,
};
use crate::error::ParseResult;
use crate::scanner::SpannedToken;
use crate::token::Token;

use super::super::{IdentifierMode, Parser};

impl<'a> Parser<'a> {
    /// Parse a left-hand-side expression
    pub(crate) fn parse_left_hand_side_expression(&mut self) -> ParseResult<Option<Expression>> {
        // Leading `new` chain; `new . target` ends it
        let mut news: Vec<SpannedToken<'a>> = Vec::new();
        let mut base: Option<Expression> = None;

        while let Some(new_token) = self.scanner.consume("new")? {
            if self.scanner.consume(".")?.is_some() {
                let property = match self.scanner.consume("target")? {
                    Some(t) => Identifier {
                        name: t.text.to_string(),
                        span: t.span,
                    },
                    None => return Err(self.unexpected()?),
                };
                let span = self
                    .source_map
                    .span(new_token.span.start, self.scanner.position());
                let meta = Identifier {
                    name: new_token.text.to_string(),
                    span: new_token.span,
                };
                base = Some(Expression::MetaProperty(MetaProperty {
                    meta,
                    property,
                    span,
                }));
                break;
            }
            news.push(new_token);
        }

        let mut expression = match base {
            Some(expression) => expression,
            None => {
                if let Some(super_token) = self.scanner.consume("super")? {
                    Expression::Super(Super {
                        span: super_token.span,
                    })
                } else {
                    match self.parse_primary_expression()? {
                        Some(expression) => expression,
                        // A consumed `new` commits the production
                        None if news.is_empty() => return Ok(None),
                        None => return Err(self.unexpected()?),
                    }
                }
            }
        };

        // Suffix operators, folded left to right
        loop {
            if self.scanner.consume(".")?.is_some() {
                let Some(property) = self.parse_identifier(IdentifierMode::AllowAll)? else {
                    return Err(self.unexpected()?);
                };
                let span = self
                    .source_map
                    .span(expression.span().start, self.scanner.position());
                expression = Expression::Member(MemberExpression {
                    object: Box::new(expression),
                    property: Box::new(Expression::Identifier(property)),
                    computed: false,
                    span,
                });
            } else if self.scanner.consume("[")?.is_some() {
                let context = self.context.and_in(true);
                let Some(index) = self.with_context(context, |p| p.parse_expression())? else {
                    return Err(self.unexpected()?);
                };
                self.expect("]")?;
                let span = self
                    .source_map
                    .span(expression.span().start, self.scanner.position());
                expression = Expression::Member(MemberExpression {
                    object: Box::new(expression),
                    property: Box::new(index),
                    computed: true,
                    span,
                });
            } else if matches!(self.scanner.current()?, Some(t) if t.token == Token::Template) {
                let Some(quasi) = self.parse_template_literal()? else {
                    return Err(self.unexpected()?);
                };
                let span = self
                    .source_map
                    .span(expression.span().start, self.scanner.position());
                expression = Expression::TaggedTemplate(TaggedTemplateExpression {
                    tag: Box::new(expression),
                    quasi,
                    span,
                });
            } else if self.scanner.check("(")? {
                let arguments = self.parse_arguments()?;
                if let Some(new_token) = news.pop() {
                    let span = self
                        .source_map
                        .span(new_token.span.start, self.scanner.position());
                    expression = Expression::New(NewExpression {
                        callee: Box::new(expression),
                        arguments,
                        span,
                    });
                } else {
                    let span = self
                        .source_map
                        .span(expression.span().start, self.scanner.position());
                    expression = Expression::Call(CallExpression {
                        callee: Box::new(expression),
                        arguments,
                        span,
                    });
                }
            } else {
                break;
            }
        }

        // Unmatched `new`s wrap the result innermost-first
        while let Some(new_token) = news.pop() {
            let span = self
                .source_map
                .span(new_token.span.start, self.scanner.position());
            expression = Expression::New(NewExpression {
                callee: Box::new(expression),
                arguments: Vec::new(),
                span,
            });
        }

        Ok(Some(expression))
    }

    /// Parse a call or `new` argument list: `( assignment, ... )` with
    /// spread elements allowed
    pub(crate) fn parse_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        self.expect("(")?;
        let mut arguments = Vec::new();

        if !self.scanner.check(")")? {
            loop {
                let argument = if self.scanner.check("...")? {
                    let start = self.start()?;
                    self.expect("...")?;
                    let context = self.context.and_in(true);
                    let Some(inner) =
                        self.with_context(context, |p| p.parse_assignment_expression())?
                    else {
                        return Err(self.unexpected()?);
                    };
                    Expression::Spread(SpreadElement {
                        argument: Box::new(inner),
                        span: self.finish(start),
                    })
                } else {
                    let context = self.context.and_in(true);
                    let Some(argument) =
                        self.with_context(context, |p| p.parse_assignment_expression())?
                    else {
                        return Err(self.unexpected()?);
                    };
                    argument
                };
                arguments.push(argument);

                if self.scanner.consume(",")?.is_none() {
                    break;
                }
            }
        }

        self.expect(")")?;
        Ok(arguments)
    }
}
