//! Arrow function cover grammar
//!
//! `(a, b)` is a parenthesized sequence until a same-line `=>` proves it
//! was a parameter list. The whole prefix is parsed under a scanner
//! snapshot; any mismatch before the `=>` restores the snapshot and
//! reports no match so the parenthesized-expression and identifier
//! interpretations can apply instead. After `=>` the production is
//! committed.

use crate::ast::{ArrowBody, ArrowFunctionExpression, Expression, Pattern};
use crate::error::ParseResult;

use super::super::{IdentifierMode, Parser};

impl<'a> Parser<'a> {
    /// Try to parse an arrow function
    pub(crate) fn parse_arrow_function(&mut self) -> ParseResult<Option<Expression>> {
        let start = self.start()?;
        let state = self.scanner.state();

        // Parameters: a bare identifier or a parenthesized list
        let params: Vec<Pattern> = if self.scanner.check("(")? {
            match self.parse_formal_parameters()? {
                Some(params) => params,
                None => {
                    self.scanner.restore(state);
                    return Ok(None);
                }
            }
        } else if let Some(id) = self.parse_identifier(IdentifierMode::Mixed)? {
            vec![Pattern::Identifier(id)]
        } else {
            return Ok(None);
        };

        // The arrow must follow on the same line
        if !self.scanner.no_line_terminators()? || self.scanner.consume("=>")?.is_none() {
            self.scanner.restore(state);
            return Ok(None);
        }

        // Arrow bodies are never generators
        let context = self.context.and_yield(false);
        let (body, expression) = if self.scanner.check("{")? {
            let context = context.and_return(true).and_in(true);
            let block = self.with_context(context, |p| p.parse_function_body())?;
            (ArrowBody::Block(block), false)
        } else {
            let Some(concise) = self.with_context(context, |p| p.parse_assignment_expression())?
            else {
                return Err(self.unexpected()?);
            };
            (ArrowBody::Expression(Box::new(concise)), true)
        };

        Ok(Some(Expression::ArrowFunction(ArrowFunctionExpression {
            params,
            body,
            expression,
            generator: false,
            span: self.finish(start),
        })))
    }
}
