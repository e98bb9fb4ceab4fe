//! Jump statement parsers (continue, break, return, throw, debugger)
//!
//! The optional label or argument of these statements must start on the
//! same logical line; automatic semicolon insertion closes them
//! otherwise.

use crate::ast::{
    BreakStatement, ContinueStatement, DebuggerStatement, ReturnStatement, Statement,
    ThrowStatement,
};
use crate::error::ParseResult;

use crate::parser::{IdentifierMode, Parser};

impl<'a> Parser<'a> {
    /// Parse a continue statement: `continue [label] ;`
    pub(crate) fn parse_continue_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("continue")?.is_none() {
            return Ok(None);
        }

        let label = if self.scanner.no_line_terminators()? {
            self.parse_identifier(IdentifierMode::Mixed)?
        } else {
            None
        };
        self.assert_end_of_statement()?;

        Ok(Some(Statement::Continue(ContinueStatement {
            label,
            span: self.finish(start),
        })))
    }

    /// Parse a break statement: `break [label] ;`
    pub(crate) fn parse_break_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("break")?.is_none() {
            return Ok(None);
        }

        let label = if self.scanner.no_line_terminators()? {
            self.parse_identifier(IdentifierMode::Mixed)?
        } else {
            None
        };
        self.assert_end_of_statement()?;

        Ok(Some(Statement::Break(BreakStatement {
            label,
            span: self.finish(start),
        })))
    }

    /// Parse a return statement: `return [argument] ;`
    ///
    /// Legal only where the context allows it (inside a function body).
    pub(crate) fn parse_return_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("return")?.is_none() {
            return Ok(None);
        }
        if !self.context.has_return() {
            return Err(crate::error::ParseError::unexpected_token(
                "return",
                self.source_map.span(start, self.scanner.position()),
            ));
        }

        let argument = if self.scanner.no_line_terminators()? {
            self.parse_expression()?
        } else {
            None
        };
        self.assert_end_of_statement()?;

        Ok(Some(Statement::Return(ReturnStatement {
            argument,
            span: self.finish(start),
        })))
    }

    /// Parse a throw statement: `throw argument ;`
    ///
    /// The argument is mandatory and must start on the same line.
    pub(crate) fn parse_throw_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("throw")?.is_none() {
            return Ok(None);
        }

        if !self.scanner.no_line_terminators()? {
            return Err(self.unexpected()?);
        }
        let Some(argument) = self.parse_expression()? else {
            return Err(self.unexpected()?);
        };
        self.assert_end_of_statement()?;

        Ok(Some(Statement::Throw(ThrowStatement {
            argument,
            span: self.finish(start),
        })))
    }

    /// Parse a debugger statement: `debugger ;`
    pub(crate) fn parse_debugger_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("debugger")?.is_none() {
            return Ok(None);
        }
        self.assert_end_of_statement()?;

        Ok(Some(Statement::Debugger(DebuggerStatement {
            span: self.finish(start),
        })))
    }
}
