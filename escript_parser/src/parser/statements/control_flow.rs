//! Control flow statement parsers (if, do-while, while, for, switch,
//! with, try)

use crate::ast::{
    CatchClause, DoWhileStatement, ForInStatement, ForInit, ForOfStatement, ForStatement,
    ForTarget, IfStatement, Statement, SwitchCase, SwitchStatement, TryStatement,
    VariableDeclaration, VariableKind, WhileStatement, WithStatement,
};
use crate::error::{ParseError, ParseResult};
use crate::token::Token;

use crate::parser::patterns::reinterpret_expression_as_pattern;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    // ==================== If ====================

    /// Parse an if statement: `if ( test ) consequent [else alternate]`
    pub(crate) fn parse_if_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("if")?.is_none() {
            return Ok(None);
        }
        self.expect("(")?;
        let Some(test) = self.parse_expression()? else {
            return Err(self.unexpected()?);
        };
        self.expect(")")?;

        let Some(consequent) = self.parse_statement()? else {
            return Err(self.unexpected()?);
        };

        let alternate = if self.scanner.consume("else")?.is_some() {
            match self.parse_statement()? {
                Some(statement) => Some(Box::new(statement)),
                None => return Err(self.unexpected()?),
            }
        } else {
            None
        };

        Ok(Some(Statement::If(IfStatement {
            test,
            consequent: Box::new(consequent),
            alternate,
            span: self.finish(start),
        })))
    }

    // ==================== Loops ====================

    /// Parse a do-while statement: `do body while ( test ) [;]`
    pub(crate) fn parse_do_while_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("do")?.is_none() {
            return Ok(None);
        }
        let Some(body) = self.parse_statement()? else {
            return Err(self.unexpected()?);
        };
        self.expect("while")?;
        self.expect("(")?;
        let Some(test) = self.parse_expression()? else {
            return Err(self.unexpected()?);
        };
        self.expect(")")?;
        // The terminating semicolon of do-while is always optional
        self.scanner.consume(";")?;

        Ok(Some(Statement::DoWhile(DoWhileStatement {
            body: Box::new(body),
            test,
            span: self.finish(start),
        })))
    }

    /// Parse a while statement: `while ( test ) body`
    pub(crate) fn parse_while_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("while")?.is_none() {
            return Ok(None);
        }
        self.expect("(")?;
        let Some(test) = self.parse_expression()? else {
            return Err(self.unexpected()?);
        };
        self.expect(")")?;
        let Some(body) = self.parse_statement()? else {
            return Err(self.unexpected()?);
        };

        Ok(Some(Statement::While(WhileStatement {
            test,
            body: Box::new(body),
            span: self.finish(start),
        })))
    }

    // ==================== For ====================

    /// Parse a for statement head and dispatch between the C-style,
    /// for-in and for-of forms
    ///
    /// After `for (` the scanner is snapshotted; a `var`/`let`/`const`
    /// head parses a declaration list with `in` excluded from the
    /// operator set, anything else parses an expression the same way and
    /// reinterprets it as a pattern when `in`/`of` follows.
    pub(crate) fn parse_for_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("for")?.is_none() {
            return Ok(None);
        }
        self.expect("(")?;

        // No init clause
        if self.scanner.consume(";")?.is_some() {
            return self.parse_for_rest(start, None).map(Some);
        }

        let state = self.scanner.state();

        if let Some(keyword) = self.scanner.consume_one_of(&["var", "let", "const"])? {
            // `let` only opens a declaration when a binding form follows
            if keyword.text != "let" || self.binding_follows()? {
                let kind = match keyword.text {
                    "var" => VariableKind::Var,
                    "let" => VariableKind::Let,
                    _ => VariableKind::Const,
                };
                let context = self.context.and_in(false);
                let declarations =
                    self.with_context(context, |p| p.parse_variable_declaration_list())?;
                let declaration = VariableDeclaration {
                    kind,
                    declarations,
                    span: self.finish(keyword.span.start),
                };

                if self.scanner.consume(";")?.is_some() {
                    let init = Some(ForInit::VariableDeclaration(declaration));
                    return self.parse_for_rest(start, init).map(Some);
                }
                if self.scanner.consume("in")?.is_some() {
                    let left = ForTarget::VariableDeclaration(declaration);
                    return self.parse_for_in_of_rest(start, left, true).map(Some);
                }
                if self.scanner.consume("of")?.is_some() {
                    let left = ForTarget::VariableDeclaration(declaration);
                    return self.parse_for_in_of_rest(start, left, false).map(Some);
                }
                return Err(self.unexpected()?);
            }
            self.scanner.restore(state);
        }

        // Expression head (the first token is known not to be `let [`)
        let context = self.context.and_in(false);
        let Some(head) = self.with_context(context, |p| p.parse_expression())? else {
            return Err(self.unexpected()?);
        };

        if self.scanner.consume(";")?.is_some() {
            return self
                .parse_for_rest(start, Some(ForInit::Expression(head)))
                .map(Some);
        }
        if self.scanner.consume("in")?.is_some() {
            let left = ForTarget::Pattern(reinterpret_expression_as_pattern(head));
            return self.parse_for_in_of_rest(start, left, true).map(Some);
        }
        if self.scanner.consume("of")?.is_some() {
            let left = ForTarget::Pattern(reinterpret_expression_as_pattern(head));
            return self.parse_for_in_of_rest(start, left, false).map(Some);
        }
        Err(self.unexpected()?)
    }

    /// Whether the current token can open a lexical binding (an
    /// identifier or a destructuring pattern)
    fn binding_follows(&mut self) -> ParseResult<bool> {
        Ok(match self.scanner.current()? {
            Some(t) => {
                matches!(t.token, Token::Identifier | Token::LBracket | Token::LBrace)
                    || t.token.is_future_reserved()
                    || t.token == Token::KwYield
            }
            None => false,
        })
    }

    /// Parse the remainder of a C-style for: `test? ; update? ) body`
    fn parse_for_rest(&mut self, start: usize, init: Option<ForInit>) -> ParseResult<Statement> {
        let test = if self.scanner.check(";")? {
            None
        } else {
            match self.parse_expression()? {
                Some(expression) => Some(expression),
                None => return Err(self.unexpected()?),
            }
        };
        self.expect(";")?;

        let update = if self.scanner.check(")")? {
            None
        } else {
            match self.parse_expression()? {
                Some(expression) => Some(expression),
                None => return Err(self.unexpected()?),
            }
        };
        self.expect(")")?;

        let Some(body) = self.parse_statement()? else {
            return Err(self.unexpected()?);
        };

        Ok(Statement::For(ForStatement {
            init,
            test,
            update,
            body: Box::new(body),
            span: self.finish(start),
        }))
    }

    /// Parse the remainder of a for-in or for-of: `right ) body`
    fn parse_for_in_of_rest(
        &mut self,
        start: usize,
        left: ForTarget,
        is_in: bool,
    ) -> ParseResult<Statement> {
        let right = if is_in {
            self.parse_expression()?
        } else {
            self.parse_assignment_expression()?
        };
        let Some(right) = right else {
            return Err(self.unexpected()?);
        };
        self.expect(")")?;

        let Some(body) = self.parse_statement()? else {
            return Err(self.unexpected()?);
        };
        let body = Box::new(body);
        let span = self.finish(start);

        Ok(if is_in {
            Statement::ForIn(ForInStatement {
                left,
                right,
                body,
                span,
            })
        } else {
            Statement::ForOf(ForOfStatement {
                left,
                right,
                body,
                span,
            })
        })
    }

    // ==================== Switch ====================

    /// Parse a switch statement; a second `default` clause anywhere in
    /// the case block is a fatal error
    pub(crate) fn parse_switch_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("switch")?.is_none() {
            return Ok(None);
        }
        self.expect("(")?;
        let Some(discriminant) = self.parse_expression()? else {
            return Err(self.unexpected()?);
        };
        self.expect(")")?;
        self.expect("{")?;

        let mut cases = Vec::new();
        let mut seen_default = false;
        loop {
            if self.scanner.check("}")? {
                break;
            }

            let case_start = self.start()?;
            let test = if self.scanner.consume("case")?.is_some() {
                match self.parse_expression()? {
                    Some(expression) => Some(expression),
                    None => return Err(self.unexpected()?),
                }
            } else if let Some(token) = self.scanner.consume("default")? {
                if seen_default {
                    return Err(ParseError::invalid_syntax(
                        "Multiple default clause in switch statement",
                        token.span,
                    ));
                }
                seen_default = true;
                None
            } else {
                return Err(self.unexpected()?);
            };
            self.expect(":")?;

            let mut consequent = Vec::new();
            while !self
                .scanner
                .is_before(&[&["case"], &["default"], &["}"]])?
            {
                let Some(statement) = self.parse_statement_list_item()? else {
                    return Err(self.unexpected()?);
                };
                consequent.push(statement);
            }

            cases.push(SwitchCase {
                test,
                consequent,
                span: self.finish(case_start),
            });
        }

        self.expect("}")?;
        Ok(Some(Statement::Switch(SwitchStatement {
            discriminant,
            cases,
            span: self.finish(start),
        })))
    }

    // ==================== With ====================

    /// Parse a with statement: `with ( object ) body`
    ///
    /// Parsed unconditionally, strict mode included.
    pub(crate) fn parse_with_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("with")?.is_none() {
            return Ok(None);
        }
        self.expect("(")?;
        let Some(object) = self.parse_expression()? else {
            return Err(self.unexpected()?);
        };
        self.expect(")")?;
        let Some(body) = self.parse_statement()? else {
            return Err(self.unexpected()?);
        };

        Ok(Some(Statement::With(WithStatement {
            object,
            body: Box::new(body),
            span: self.finish(start),
        })))
    }

    // ==================== Try ====================

    /// Parse a try statement; `try` with neither `catch` nor `finally`
    /// is a fatal error
    pub(crate) fn parse_try_statement(&mut self) -> ParseResult<Option<Statement>> {
        let start = self.start()?;
        if self.scanner.consume("try")?.is_none() {
            return Ok(None);
        }
        let Some(block) = self.parse_block_statement()? else {
            return Err(self.unexpected()?);
        };

        let handler = if let Some(catch_token) = self.scanner.consume("catch")? {
            let clause_start = catch_token.span.start;
            self.expect("(")?;
            let Some(param) = self.parse_binding_target()? else {
                return Err(self.unexpected()?);
            };
            self.expect(")")?;
            let Some(body) = self.parse_block_statement()? else {
                return Err(self.unexpected()?);
            };
            Some(CatchClause {
                param,
                body,
                span: self.finish(clause_start),
            })
        } else {
            None
        };

        let finalizer = if self.scanner.consume("finally")?.is_some() {
            match self.parse_block_statement()? {
                Some(block) => Some(block),
                None => return Err(self.unexpected()?),
            }
        } else {
            None
        };

        if handler.is_none() && finalizer.is_none() {
            return Err(self.unexpected()?);
        }

        Ok(Some(Statement::Try(TryStatement {
            block,
            handler,
            finalizer,
            span: self.finish(start),
        })))
    }
}
