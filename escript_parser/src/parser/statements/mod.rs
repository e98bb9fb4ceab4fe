//! Statement dispatch
//!
//! `parse_statement` tries its alternatives in declared order: block,
//! variable, empty, if, breakable (do/while/for/switch), continue,
//! break, return, with, throw, try, debugger, labelled, expression.
//! Earlier matches win; labelled must precede expression so it can
//! intercept `ident :`.

mod control_flow;
mod declarations;
mod jumps;
mod modules;

use crate::ast::{BlockStatement, EmptyStatement, ExpressionStatement, LabeledStatement, Statement};
use crate::error::{ParseError, ParseResult};
use crate::token::Token;

use super::{IdentifierMode, Parser};

impl<'a> Parser<'a> {
    // ==================== Statement Lists ====================

    /// Parse statement-list items until no alternative matches
    ///
    /// With `directives` set, the leading directive prologue is
    /// processed and the scanner's strict flag is saved around the list.
    pub(crate) fn parse_statement_list(&mut self, directives: bool) -> ParseResult<Vec<Statement>> {
        let mut items = Vec::new();
        let saved_strict = self.scanner.strict();

        if directives {
            self.parse_directive_prologues(&mut items)?;
        }
        while let Some(item) = self.parse_statement_list_item()? {
            items.push(item);
        }

        if directives {
            self.scanner.set_strict(saved_strict);
        }
        Ok(items)
    }

    /// Parse one statement-list item: a declaration or a statement
    pub(crate) fn parse_statement_list_item(&mut self) -> ParseResult<Option<Statement>> {
        if let Some(item) = self.parse_function_declaration_statement()? {
            return Ok(Some(item));
        }
        if let Some(item) = self.parse_class_declaration_statement()? {
            return Ok(Some(item));
        }
        if let Some(item) = self.parse_lexical_declaration()? {
            return Ok(Some(item));
        }
        self.parse_statement()
    }

    // ==================== Statement Dispatch ====================

    /// Parse a single statement, trying alternatives in declared order
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Option<Statement>> {
        if let Some(block) = self.parse_block_statement()? {
            return Ok(Some(Statement::Block(block)));
        }
        if let Some(statement) = self.parse_variable_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_empty_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_if_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_do_while_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_while_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_for_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_switch_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_continue_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_break_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_return_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_with_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_throw_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_try_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_debugger_statement()? {
            return Ok(Some(statement));
        }
        if let Some(statement) = self.parse_labelled_statement()? {
            return Ok(Some(statement));
        }
        self.parse_expression_statement()
    }

    // ==================== Simple Statements ====================

    /// Parse a block statement: `{` statement list `}`
    pub(crate) fn parse_block_statement(&mut self) -> ParseResult<Option<BlockStatement>> {
        let start = self.start()?;
        if self.scanner.consume("{")?.is_none() {
            return Ok(None);
        }
        let body = self.parse_statement_list(false)?;
        self.expect("}")?;
        Ok(Some(BlockStatement {
            body,
            span: self.finish(start),
        }))
    }

    /// Parse an empty statement: a bare `;`
    fn parse_empty_statement(&mut self) -> ParseResult<Option<Statement>> {
        let Some(token) = self.scanner.consume(";")? else {
            return Ok(None);
        };
        Ok(Some(Statement::Empty(EmptyStatement { span: token.span })))
    }

    /// Parse a labelled statement: `label :` followed by a statement, or
    /// (outside strict mode) a function declaration
    fn parse_labelled_statement(&mut self) -> ParseResult<Option<Statement>> {
        match self.scanner.peek(1)? {
            Some(t) if t.token == Token::Colon => {}
            _ => return Ok(None),
        }

        let start = self.start()?;
        let Some(label) = self.parse_identifier(IdentifierMode::Mixed)? else {
            return Ok(None);
        };
        self.expect(":")?;

        let body = if self.scanner.check("function")? {
            if self.scanner.strict() {
                return Err(ParseError::invalid_syntax(
                    "Labelled functions are not allowed in strict mode",
                    self.scanner.current_span()?,
                ));
            }
            match self.parse_function_declaration(false)? {
                Some(declaration) => Statement::FunctionDeclaration(declaration),
                None => return Err(self.unexpected()?),
            }
        } else {
            match self.parse_statement()? {
                Some(statement) => statement,
                None => return Err(self.unexpected()?),
            }
        };

        Ok(Some(Statement::Labeled(LabeledStatement {
            label,
            body: Box::new(body),
            span: self.finish(start),
        })))
    }

    /// Parse an expression statement
    ///
    /// The first token must not be `{`, `function`, `class`, or the
    /// two-token sequence `let [`.
    pub(crate) fn parse_expression_statement(&mut self) -> ParseResult<Option<Statement>> {
        if self
            .scanner
            .is_before(&[&["{"], &["function"], &["class"], &["let", "["]])?
        {
            return Ok(None);
        }

        let start = self.start()?;
        let Some(expression) = self.parse_expression()? else {
            return Ok(None);
        };
        self.assert_end_of_statement()?;

        Ok(Some(Statement::Expression(ExpressionStatement {
            expression,
            span: self.finish(start),
        })))
    }
}
