//! Recursive descent parser for ECMAScript 2015
//!
//! Converts the scanner's token stream into an ESTree-shaped AST.
//!
//! Every non-terminal follows one convention: it returns `Ok(Some(node))`
//! on a match, `Ok(None)` when its sentinel token is absent (with the
//! scanner untouched), and `Err(_)` once the sentinel has been consumed
//! and the rest of the production cannot be completed. Productions that
//! speculate beyond their sentinel first take a scanner snapshot and
//! restore it on the no-match path; committed errors are never caught.

mod classes;
mod context;
mod expressions;
mod functions;
mod literals;
mod patterns;
mod statements;

use crate::ast::{Identifier, Program, SourceType, Statement};
use crate::error::{ParseError, ParseResult};
use crate::scanner::{Scanner, SpannedToken};
use crate::span::{SourceMap, Span};
use crate::token::{is_strict_reserved_word, Token};

pub(crate) use context::Context;

/// Identifier classification modes
///
/// What may serve as an identifier depends on the production: member
/// names and export specifiers take any IdentifierName including
/// keywords; class names, imports and namespace aliases take nothing but
/// a plain identifier; binding identifiers and labels additionally admit
/// future-reserved words outside strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdentifierMode {
    AllowAll,
    AllowNothing,
    Mixed,
}

/// ECMAScript parser
///
/// Parses a script or module into a `Program`.
pub struct Parser<'a> {
    /// Scanner
    pub(crate) scanner: Scanner<'a>,
    /// Source map for line/column calculation
    pub(crate) source_map: SourceMap,
    /// Grammar context flags
    pub(crate) context: Context,
    /// Script or module
    source_type: SourceType,
}

impl std::fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("source_type", &self.source_type)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code
    pub fn new(source: &'a str, source_type: SourceType) -> Self {
        let source_map = SourceMap::new(source);
        let scanner = Scanner::new(source);
        Self {
            scanner,
            source_map,
            context: Context::default(),
            source_type,
        }
    }

    /// Parse the source and return the `Program` node
    ///
    /// Raises a fatal error if tokens remain after the program body.
    pub fn parse(mut self) -> ParseResult<Program> {
        if self.source_type == SourceType::Module {
            // Module code is strict from the first token
            self.scanner.set_strict(true);
        }

        let body = match self.source_type {
            SourceType::Module => self.parse_module_item_list()?,
            SourceType::Script => self.parse_statement_list(true)?,
        };

        if !self.scanner.is_end()? {
            return Err(self.unexpected()?);
        }

        let span = self.source_map.span(0, self.scanner.position());
        Ok(Program {
            source_type: self.source_type,
            body,
            span,
        })
    }

    // ==================== Token Management ====================

    /// Consume the token with the given source text, or raise a fatal error
    pub(crate) fn expect(&mut self, value: &str) -> ParseResult<SpannedToken<'a>> {
        match self.scanner.consume(value)? {
            Some(token) => Ok(token),
            None => Err(self.unexpected()?),
        }
    }

    /// Build the fatal error for the current (unexpected) token
    ///
    /// Wrapped in `ParseResult` because inspecting the current token may
    /// itself hit a lexer error, which takes precedence.
    pub(crate) fn unexpected(&mut self) -> ParseResult<ParseError> {
        let span = self.scanner.current_span()?;
        Ok(match self.scanner.current()? {
            Some(token) => ParseError::unexpected_token(token.text, span),
            None => ParseError::unexpected_eof("more input", span),
        })
    }

    /// Start offset of the current token (end of input when exhausted)
    pub(crate) fn start(&mut self) -> ParseResult<usize> {
        self.scanner.current_start()
    }

    /// Span from `start` to the end of the last consumed token
    pub(crate) fn finish(&self, start: usize) -> Span {
        self.source_map.span(start, self.scanner.position())
    }

    // ==================== Context ====================

    /// Run `f` under the given context flags, restoring the previous
    /// flags on every exit path
    pub(crate) fn with_context<T>(
        &mut self,
        context: Context,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context;
        self.context = context;
        let result = f(self);
        self.context = saved;
        result
    }

    // ==================== Automatic Semicolon Insertion ====================

    /// Accept an explicit `;`, an immediate `}`, the end of input, or a
    /// preceding line terminator as the end of a statement
    pub(crate) fn assert_end_of_statement(&mut self) -> ParseResult<()> {
        if self.scanner.consume(";")?.is_some() {
            return Ok(());
        }
        if self.scanner.is_end()? || self.scanner.check("}")? {
            return Ok(());
        }
        if !self.scanner.no_line_terminators()? {
            return Ok(());
        }
        Err(self.unexpected()?)
    }

    // ==================== Identifiers ====================

    /// Parse an identifier under the given classification mode
    ///
    /// Returns no match when the current token cannot serve as an
    /// identifier in that mode (including strict-mode rejections).
    pub(crate) fn parse_identifier(
        &mut self,
        mode: IdentifierMode,
    ) -> ParseResult<Option<Identifier>> {
        let strict = self.scanner.strict();
        let allow_yield = self.context.has_yield();

        let Some(token) = self.scanner.current()? else {
            return Ok(None);
        };

        let accepted = match mode {
            IdentifierMode::AllowAll => token.token.is_identifier_name(),
            IdentifierMode::AllowNothing => {
                token.token == Token::Identifier
                    && !(strict && is_strict_reserved_word(token.text))
            }
            IdentifierMode::Mixed => match token.token {
                Token::Identifier => !(strict && is_strict_reserved_word(token.text)),
                Token::KwYield => !strict && !allow_yield,
                t => t.is_future_reserved() && !strict,
            },
        };

        if !accepted {
            return Ok(None);
        }

        let token = self
            .scanner
            .consume_token()?
            .expect("current token just checked");
        Ok(Some(Identifier {
            name: token.text.to_string(),
            span: token.span,
        }))
    }

    // ==================== Directive Prologues ====================

    /// Parse the directive prologue of a statement list, flipping the
    /// scanner's strict flag when a `"use strict"` directive appears
    pub(crate) fn parse_directive_prologues(
        &mut self,
        items: &mut Vec<Statement>,
    ) -> ParseResult<()> {
        loop {
            match self.scanner.current()? {
                Some(token) if token.token == Token::StringLiteral => {}
                _ => return Ok(()),
            }

            let Some(statement) = self.parse_expression_statement()? else {
                return Ok(());
            };

            // A directive is an expression statement that is nothing but
            // a string literal
            let directive = match &statement {
                Statement::Expression(stmt) => match &stmt.expression {
                    crate::ast::Expression::Literal(lit) => Some(lit.raw.clone()),
                    _ => None,
                },
                _ => None,
            };

            let was_directive = directive.is_some();
            if let Some(raw) = directive {
                if raw == "\"use strict\"" || raw == "'use strict'" {
                    self.scanner.set_strict(true);
                }
            }
            items.push(statement);
            if !was_directive {
                return Ok(());
            }
        }
    }
}
