//! Variable and lexical declaration parsers

use crate::ast::{Statement, VariableDeclaration, VariableDeclarator, VariableKind};
use crate::error::ParseResult;
use crate::token::Token;

use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// Parse a variable statement: `var declarator, ... ;`
    pub(crate) fn parse_variable_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("var")?.is_none() {
            return Ok(None);
        }

        let declarations = self.parse_variable_declaration_list()?;
        self.assert_end_of_statement()?;

        Ok(Some(Statement::VariableDeclaration(VariableDeclaration {
            kind: VariableKind::Var,
            declarations,
            span: self.finish(start),
        })))
    }

    /// Parse a lexical declaration: `let`/`const` followed by a binding
    /// list
    ///
    /// `let` opens a declaration only when a binding form follows;
    /// otherwise it falls through to the expression grammar as an
    /// identifier.
    pub(crate) fn parse_lexical_declaration(&mut self) -> ParseResult<Option<Statement>> {
        let (is_const, is_let) = match self.scanner.current()? {
            Some(t) => (
                t.token == Token::KwConst,
                t.token == Token::Identifier && t.text == "let",
            ),
            None => return Ok(None),
        };

        let kind = if is_const {
            VariableKind::Const
        } else if is_let {
            let binding_follows = match self.scanner.peek(1)? {
                Some(next) => {
                    matches!(
                        next.token,
                        Token::Identifier | Token::LBracket | Token::LBrace
                    ) || next.token.is_future_reserved()
                        || next.token == Token::KwYield
                }
                None => false,
            };
            if !binding_follows {
                return Ok(None);
            }
            VariableKind::Let
        } else {
            return Ok(None);
        };

        let start = self.start()?;
        self.scanner.consume_token()?;

        let declarations = self.parse_variable_declaration_list()?;
        self.assert_end_of_statement()?;

        Ok(Some(Statement::VariableDeclaration(VariableDeclaration {
            kind,
            declarations,
            span: self.finish(start),
        })))
    }

    /// Parse a comma-separated declarator list: `target [= init], ...`
    ///
    /// Initializers parse under the caller's context, so a `for` head
    /// keeps `in` out of the operator set.
    pub(crate) fn parse_variable_declaration_list(
        &mut self,
    ) -> ParseResult<Vec<VariableDeclarator>> {
        let mut declarations = Vec::new();
        loop {
            let start = self.start()?;
            let Some(id) = self.parse_binding_target()? else {
                return Err(self.unexpected()?);
            };

            let init = if self.scanner.consume("=")?.is_some() {
                match self.parse_assignment_expression()? {
                    Some(expression) => Some(expression),
                    None => return Err(self.unexpected()?),
                }
            } else {
                None
            };

            declarations.push(VariableDeclarator {
                id,
                init,
                span: self.finish(start),
            });

            if self.scanner.consume(",")?.is_none() {
                break;
            }
        }
        Ok(declarations)
    }
}
