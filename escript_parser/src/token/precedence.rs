//! Binary operator precedence grades
//!
//! The expression engine collects a flat `operand (op operand)*` run and
//! folds it by descending grade, left-associatively. Grades below
//! `Precedence::LOGICAL_LIMIT` build `LogicalExpression` nodes, the rest
//! `BinaryExpression`.

use super::Token;

/// Precedence grade of a binary or logical operator
///
/// Higher grades bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Precedence {
    /// `||`
    LogicalOr = 0,
    /// `&&`
    LogicalAnd = 1,
    /// `|`
    BitwiseOr = 2,
    /// `^`
    BitwiseXor = 3,
    /// `&`
    BitwiseAnd = 4,
    /// `=== !== == !=`
    Equality = 5,
    /// `<= >= < > instanceof in`
    Relational = 6,
    /// `>>> << >>`
    Shift = 7,
    /// `+ -`
    Additive = 8,
    /// `* / %`
    Multiplicative = 9,
}

impl Precedence {
    /// All grades, tightest-binding first, in fold order
    pub const FOLD_ORDER: [Precedence; 10] = [
        Precedence::Multiplicative,
        Precedence::Additive,
        Precedence::Shift,
        Precedence::Relational,
        Precedence::Equality,
        Precedence::BitwiseAnd,
        Precedence::BitwiseXor,
        Precedence::BitwiseOr,
        Precedence::LogicalAnd,
        Precedence::LogicalOr,
    ];

    /// Grades below this one produce `LogicalExpression` nodes
    pub fn is_logical(&self) -> bool {
        matches!(self, Precedence::LogicalOr | Precedence::LogicalAnd)
    }
}

impl Token {
    /// Get the precedence grade of a binary or logical operator
    ///
    /// `in` participates only when the caller's context allows it; the
    /// exclusion lives in the expression engine, not here.
    pub fn binary_precedence(&self) -> Option<Precedence> {
        use Precedence::*;

        Some(match self {
            Token::OrOr => LogicalOr,
            Token::AndAnd => LogicalAnd,
            Token::Pipe => BitwiseOr,
            Token::Caret => BitwiseXor,
            Token::Amp => BitwiseAnd,
            Token::EqEqEq | Token::NotEqEq | Token::EqEq | Token::NotEq => Equality,
            Token::LtEq | Token::GtEq | Token::Lt | Token::Gt | Token::KwInstanceof
            | Token::KwIn => Relational,
            Token::GtGtGt | Token::LtLt | Token::GtGt => Shift,
            Token::Plus | Token::Minus => Additive,
            Token::Star | Token::Slash | Token::Percent => Multiplicative,
            _ => return None,
        })
    }
}
