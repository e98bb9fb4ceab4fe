//! Function declarations, function expressions, parameter lists, and
//! function bodies
//!
//! Parameter lists are parsed softly (no match instead of an error) so
//! the arrow cover grammar can reuse them under its snapshot; committed
//! callers escalate a no-match to a fatal error.

use crate::ast::{
    BlockStatement, Expression, FunctionDeclaration, FunctionExpression, Pattern, Statement,
};
use crate::error::ParseResult;

use super::{Context, IdentifierMode, Parser};

impl<'a> Parser<'a> {
    // ==================== Declarations ====================

    /// Parse a function declaration: `function [*] name ( params ) { body }`
    ///
    /// `allow_anonymous` is set for `export default function () {}`.
    pub(crate) fn parse_function_declaration(
        &mut self,
        allow_anonymous: bool,
    ) -> ParseResult<Option<FunctionDeclaration>> {
        let start = self.start()?;
        if self.scanner.consume("function")?.is_none() {
            return Ok(None);
        }
        let generator = self.scanner.consume("*")?.is_some();

        let id = self.parse_identifier(IdentifierMode::Mixed)?;
        if id.is_none() && !allow_anonymous {
            return Err(self.unexpected()?);
        }

        let (params, body) = self.parse_function_rest(generator)?;
        Ok(Some(FunctionDeclaration {
            id,
            params,
            body,
            generator,
            span: self.finish(start),
        }))
    }

    /// Statement-list wrapper around `parse_function_declaration`
    pub(crate) fn parse_function_declaration_statement(
        &mut self,
    ) -> ParseResult<Option<Statement>> {
        Ok(self
            .parse_function_declaration(false)?
            .map(Statement::FunctionDeclaration))
    }

    // ==================== Expressions ====================

    /// Parse a function expression: `function [*] [name] ( params ) { body }`
    pub(crate) fn parse_function_expression(&mut self) -> ParseResult<Option<Expression>> {
        let start = self.start()?;
        if self.scanner.consume("function")?.is_none() {
            return Ok(None);
        }
        let generator = self.scanner.consume("*")?.is_some();
        let id = self.parse_identifier(IdentifierMode::Mixed)?;

        let (params, body) = self.parse_function_rest(generator)?;
        Ok(Some(Expression::Function(FunctionExpression {
            id,
            params,
            body,
            generator,
            span: self.finish(start),
        })))
    }

    /// Parse the parameter list and body of a method as an anonymous
    /// function expression (shared by object methods and class methods)
    pub(crate) fn parse_method_function(
        &mut self,
        generator: bool,
    ) -> ParseResult<FunctionExpression> {
        let start = self.start()?;
        let (params, body) = self.parse_function_rest(generator)?;
        Ok(FunctionExpression {
            id: None,
            params,
            body,
            generator,
            span: self.finish(start),
        })
    }

    // ==================== Parameters and Body ====================

    /// Parse `( params ) { body }` under the function's own context:
    /// `return` legal, `yield` per generator flag, `in` unrestricted
    fn parse_function_rest(
        &mut self,
        generator: bool,
    ) -> ParseResult<(Vec<Pattern>, BlockStatement)> {
        let context = Context::default().and_yield(generator).and_return(true);
        self.with_context(context, |p| {
            let Some(params) = p.parse_formal_parameters()? else {
                return Err(p.unexpected()?);
            };
            let body = p.parse_function_body()?;
            Ok((params, body))
        })
    }

    /// Parse a formal parameter list: `( element, ... , ...rest )`
    ///
    /// Soft: reports no match on any structural mismatch.
    pub(crate) fn parse_formal_parameters(&mut self) -> ParseResult<Option<Vec<Pattern>>> {
        if self.scanner.consume("(")?.is_none() {
            return Ok(None);
        }

        let mut params = Vec::new();
        if !self.scanner.check(")")? {
            loop {
                if self.scanner.check("...")? {
                    // Rest parameter must be last
                    let Some(rest) = self.parse_rest_element()? else {
                        return Ok(None);
                    };
                    params.push(rest);
                    break;
                }
                let Some(param) = self.parse_binding_element()? else {
                    return Ok(None);
                };
                params.push(param);
                if self.scanner.consume(",")?.is_none() {
                    break;
                }
            }
        }

        if self.scanner.consume(")")?.is_none() {
            return Ok(None);
        }
        Ok(Some(params))
    }

    /// Parse a function body: `{` statement list with directive
    /// prologues `}`. The scanner's strict flag is saved and restored
    /// around the list so a `"use strict"` body does not leak outward.
    pub(crate) fn parse_function_body(&mut self) -> ParseResult<BlockStatement> {
        let start = self.start()?;
        self.expect("{")?;
        let body = self.parse_statement_list(true)?;
        self.expect("}")?;
        Ok(BlockStatement {
            body,
            span: self.finish(start),
        })
    }
}
