//! Parse error types
//!
//! The parser surfaces a single conceptual failure, a syntax error, as
//! soon as a committed production cannot continue. There is no recovery:
//! the first error terminates the parse.

use crate::span::Span;
use thiserror::Error;

/// Syntax error raised by the scanner or the parser
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    /// Unexpected token
    #[error("unexpected token '{found}' at {span:?}")]
    UnexpectedToken { found: String, span: Span },

    /// Unexpected end of input
    #[error("unexpected end of input at {span:?}, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },

    /// Unterminated string
    #[error("unterminated string literal starting at {span:?}")]
    UnterminatedString { span: Span },

    /// Unterminated template literal
    #[error("unterminated template literal starting at {span:?}")]
    UnterminatedTemplate { span: Span },

    /// Unterminated regular expression
    #[error("unterminated regular expression starting at {span:?}")]
    UnterminatedRegExp { span: Span },

    /// Unterminated block comment
    #[error("unterminated block comment starting at {span:?}")]
    UnterminatedBlockComment { span: Span },

    /// Invalid escape sequence
    #[error("invalid escape sequence '{sequence}' at {span:?}")]
    InvalidEscape { sequence: String, span: Span },

    /// Invalid syntax with a specific message
    #[error("{message} at {span:?}")]
    InvalidSyntax { message: String, span: Span },

    /// Unrecognized character
    #[error("unrecognized token at {span:?}")]
    LexerError { span: Span },
}

impl ParseError {
    /// Get the span of the error
    pub fn span(&self) -> &Span {
        match self {
            ParseError::UnexpectedToken { span, .. } => span,
            ParseError::UnexpectedEof { span, .. } => span,
            ParseError::UnterminatedString { span } => span,
            ParseError::UnterminatedTemplate { span } => span,
            ParseError::UnterminatedRegExp { span } => span,
            ParseError::UnterminatedBlockComment { span } => span,
            ParseError::InvalidEscape { span, .. } => span,
            ParseError::InvalidSyntax { span, .. } => span,
            ParseError::LexerError { span } => span,
        }
    }

    /// Create an unexpected token error
    pub fn unexpected_token(found: impl Into<String>, span: Span) -> Self {
        ParseError::UnexpectedToken {
            found: found.into(),
            span,
        }
    }

    /// Create an unexpected EOF error
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        ParseError::UnexpectedEof {
            expected: expected.into(),
            span,
        }
    }

    /// Create an invalid syntax error
    pub fn invalid_syntax(message: impl Into<String>, span: Span) -> Self {
        ParseError::InvalidSyntax {
            message: message.into(),
            span,
        }
    }

    /// Format error with source context
    ///
    /// Returns a string showing the offending source line with a caret
    /// marker under the error span.
    pub fn format_with_context(&self, source: &str) -> String {
        let span = self.span();

        let lines: Vec<&str> = source.lines().collect();
        let line_idx = span.start_line.saturating_sub(1);

        if line_idx >= lines.len() {
            return String::new();
        }

        let line = lines[line_idx];
        let col = span.start_column.saturating_sub(1);
        let len = if span.start_line == span.end_line {
            span.end_column.saturating_sub(span.start_column).max(1)
        } else {
            1
        };

        let spaces = " ".repeat(col);
        let marker = "^".repeat(len.min(line.len().saturating_sub(col)).max(1));

        format!(
            "  {} | {}\n  {} | {}{}",
            span.start_line,
            line,
            " ".repeat(span.start_line.to_string().len()),
            spaces,
            marker
        )
    }
}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
