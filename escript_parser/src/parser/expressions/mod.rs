//! Expression parsing
//!
//! Handles:
//! - sequence, assignment (with the expression→pattern rewrite) and yield
//! - conditional expressions
//! - binary/logical folding by descending precedence grade
//! - unary, update and postfix forms

mod arrows;
mod calls;
mod primary;

use crate::ast::{
    AssignmentExpression, BinaryExpression, ConditionalExpression, Expression, LogicalExpression,
    Pattern, SequenceExpression, UnaryExpression, UpdateExpression, YieldExpression,
};
use crate::error::{ParseError, ParseResult};
use crate::token::{Precedence, Token};

use super::patterns::reinterpret_expression_as_pattern;
use super::Parser;

/// A conditional, logical, binary, update or unary expression can never
/// be the target of an assignment; everything else is a candidate.
fn is_simple_reference(expression: &Expression) -> bool {
    !matches!(
        expression,
        Expression::Conditional(_)
            | Expression::Logical(_)
            | Expression::Binary(_)
            | Expression::Update(_)
            | Expression::Unary(_)
    )
}

impl<'a> Parser<'a> {
    // ==================== Sequence ====================

    /// Parse a (possibly comma-separated) expression
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Option<Expression>> {
        let start = self.start()?;
        let Some(first) = self.parse_assignment_expression()? else {
            return Ok(None);
        };

        if !self.scanner.check(",")? {
            return Ok(Some(first));
        }

        let mut expressions = vec![first];
        while self.scanner.consume(",")?.is_some() {
            let Some(next) = self.parse_assignment_expression()? else {
                return Err(self.unexpected()?);
            };
            expressions.push(next);
        }

        Ok(Some(Expression::Sequence(SequenceExpression {
            expressions,
            span: self.finish(start),
        })))
    }

    // ==================== Assignment ====================

    /// Parse an assignment expression: arrow function, yield, or a
    /// conditional optionally followed by an assignment operator
    pub(crate) fn parse_assignment_expression(&mut self) -> ParseResult<Option<Expression>> {
        if let Some(arrow) = self.parse_arrow_function()? {
            return Ok(Some(arrow));
        }
        if self.context.has_yield() {
            if let Some(expr) = self.parse_yield_expression()? {
                return Ok(Some(expr));
            }
        }

        let start = self.start()?;
        let Some(expression) = self.parse_conditional_expression()? else {
            return Ok(None);
        };

        if !is_simple_reference(&expression) {
            return Ok(Some(expression));
        }
        let operator = match self.scanner.current()? {
            Some(t) if t.token.is_assignment_operator() => t.text.to_string(),
            _ => return Ok(Some(expression)),
        };
        self.scanner.consume_token()?;

        // Only plain `=` rewrites its left side into a pattern
        let left = if operator == "=" {
            reinterpret_expression_as_pattern(expression)
        } else {
            Pattern::Expression(Box::new(expression))
        };

        let Some(right) = self.parse_assignment_expression()? else {
            return Err(self.unexpected()?);
        };

        Ok(Some(Expression::Assignment(AssignmentExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span: self.finish(start),
        })))
    }

    /// Parse a yield expression (only reached when `allow_yield` is set)
    fn parse_yield_expression(&mut self) -> ParseResult<Option<Expression>> {
        let start = self.start()?;
        if self.scanner.consume("yield")?.is_none() {
            return Ok(None);
        }

        let mut delegate = false;
        let mut argument = None;

        // The argument must start on the same line
        if self.scanner.no_line_terminators()? {
            if self.scanner.consume("*")?.is_some() {
                // `yield *` commits to an argument; delegate is only set
                // alongside one
                let Some(expr) = self.parse_assignment_expression()? else {
                    return Err(self.unexpected()?);
                };
                delegate = true;
                argument = Some(Box::new(expr));
            } else if let Some(expr) = self.parse_assignment_expression()? {
                argument = Some(Box::new(expr));
            }
        }

        Ok(Some(Expression::Yield(YieldExpression {
            argument,
            delegate,
            span: self.finish(start),
        })))
    }

    // ==================== Conditional ====================

    /// Parse a conditional expression: binary, optionally `? a : b`
    pub(crate) fn parse_conditional_expression(&mut self) -> ParseResult<Option<Expression>> {
        let start = self.start()?;
        let Some(test) = self.parse_binary_expression()? else {
            return Ok(None);
        };

        if self.scanner.consume("?")?.is_none() {
            return Ok(Some(test));
        }

        let context = self.context.and_in(true);
        let Some(consequent) = self.with_context(context, |p| p.parse_assignment_expression())?
        else {
            return Err(self.unexpected()?);
        };
        self.expect(":")?;
        let Some(alternate) = self.parse_assignment_expression()? else {
            return Err(self.unexpected()?);
        };

        Ok(Some(Expression::Conditional(ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
            span: self.finish(start),
        })))
    }

    // ==================== Binary/Logical Folding ====================

    /// Collect a flat `operand (op operand)*` run, then fold it by
    /// descending grade, left-associatively. Grades below `|` build
    /// `LogicalExpression`, the rest `BinaryExpression`. `in` is excluded
    /// from the operator set while `allow_in` is off.
    pub(crate) fn parse_binary_expression(&mut self) -> ParseResult<Option<Expression>> {
        let Some(first) = self.parse_unary_expression()? else {
            return Ok(None);
        };

        let mut operands = vec![first];
        let mut operators: Vec<(String, Precedence)> = Vec::new();

        loop {
            let Some(token) = self.scanner.current()? else {
                break;
            };
            if token.token == Token::KwIn && !self.context.has_in() {
                break;
            }
            let Some(grade) = token.token.binary_precedence() else {
                break;
            };
            let operator = token.text.to_string();
            self.scanner.consume_token()?;

            let Some(operand) = self.parse_unary_expression()? else {
                return Err(self.unexpected()?);
            };
            operators.push((operator, grade));
            operands.push(operand);
        }

        if operators.is_empty() {
            return Ok(operands.pop());
        }

        for grade in Precedence::FOLD_ORDER {
            let mut i = 0;
            while i < operators.len() {
                if operators[i].1 != grade {
                    i += 1;
                    continue;
                }
                let (operator, _) = operators.remove(i);
                let left = operands.remove(i);
                let right = operands.remove(i);
                let span = left.span().merge(&right.span());
                let folded = if grade.is_logical() {
                    Expression::Logical(LogicalExpression {
                        operator,
                        left: Box::new(left),
                        right: Box::new(right),
                        span,
                    })
                } else {
                    Expression::Binary(BinaryExpression {
                        operator,
                        left: Box::new(left),
                        right: Box::new(right),
                        span,
                    })
                };
                operands.insert(i, folded);
                // Same index again: left associativity
            }
        }

        debug_assert_eq!(operands.len(), 1);
        Ok(operands.pop())
    }

    // ==================== Unary / Postfix ====================

    /// Parse a unary expression: prefix operators over a unary operand,
    /// or a postfix expression
    pub(crate) fn parse_unary_expression(&mut self) -> ParseResult<Option<Expression>> {
        let Some(token) = self.scanner.current()? else {
            return Ok(None);
        };
        if !token.token.is_unary_operator() {
            return self.parse_postfix_expression();
        }

        let op = self.scanner.consume_token()?.expect("current token exists");
        let start = op.span.start;
        let Some(argument) = self.parse_unary_expression()? else {
            return Err(self.unexpected()?);
        };
        let span = self.finish(start);

        if op.token.is_update_operator() {
            return Ok(Some(Expression::Update(UpdateExpression {
                operator: op.text.to_string(),
                prefix: true,
                argument: Box::new(argument),
                span,
            })));
        }

        if op.token == Token::KwDelete
            && self.scanner.strict()
            && matches!(argument, Expression::Identifier(_))
        {
            return Err(ParseError::invalid_syntax(
                "Deleting an unqualified identifier is not allowed in strict mode",
                span,
            ));
        }

        Ok(Some(Expression::Unary(UnaryExpression {
            operator: op.text.to_string(),
            prefix: true,
            argument: Box::new(argument),
            span,
        })))
    }

    /// Parse a left-hand-side expression with an optional same-line
    /// postfix `++`/`--`
    fn parse_postfix_expression(&mut self) -> ParseResult<Option<Expression>> {
        let start = self.start()?;
        let Some(expression) = self.parse_left_hand_side_expression()? else {
            return Ok(None);
        };

        match self.scanner.current()? {
            Some(t) if t.token.is_update_operator() && !t.newline_before => {}
            _ => return Ok(Some(expression)),
        }
        let op = self.scanner.consume_token()?.expect("current token exists");

        Ok(Some(Expression::Update(UpdateExpression {
            operator: op.text.to_string(),
            prefix: false,
            argument: Box::new(expression),
            span: self.finish(start),
        })))
    }
}
