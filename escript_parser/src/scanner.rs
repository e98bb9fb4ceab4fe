//! Scanner for ECMAScript source
//!
//! Wraps the logos-generated lexer with the services the grammar needs:
//! buffered multi-token lookahead, literal-directed consumption, opaque
//! state snapshots for backtracking, manual scanning of strings,
//! templates, block comments and regular expressions, and line-terminator
//! tracking for automatic semicolon insertion.
//!
//! Template literals are lexed automatically: the scanner keeps a stack
//! of open template substitutions, each with a brace counter, and decides
//! whether a `}` closes a block or resumes the innermost template.

use std::collections::VecDeque;

use logos::Logos;

use crate::error::{ParseError, ParseResult};
use crate::span::{SourceMap, Span};
use crate::token::Token;

/// A token with its span and source text
#[derive(Debug, Clone)]
pub struct SpannedToken<'a> {
    pub token: Token,
    pub span: Span,
    pub text: &'a str,
    /// Whether a line terminator appeared between the previous token and this one
    pub newline_before: bool,
}

/// Opaque scanner snapshot
///
/// Restoring a snapshot re-creates the lexer at the saved offset; this is
/// the sole backtracking primitive.
#[derive(Debug, Clone)]
pub struct ScannerState<'a> {
    lex_offset: usize,
    buffer: VecDeque<SpannedToken<'a>>,
    open_templates: Vec<u32>,
    pending_newline: bool,
    last_token_end: usize,
    strict: bool,
}

/// ECMAScript scanner
pub struct Scanner<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, Token>,
    source_map: SourceMap,
    /// Offset of the inner lexer's origin (used after restarting the lexer)
    offset: usize,
    /// Tokens lexed ahead of the parser
    buffer: VecDeque<SpannedToken<'a>>,
    /// Line terminator seen since the last buffered token
    pending_newline: bool,
    /// Open template substitutions, innermost last; each entry counts
    /// unbalanced `{` tokens inside the substitution
    open_templates: Vec<u32>,
    /// End offset of the last consumed token
    last_token_end: usize,
    /// Strict mode flag
    strict: bool,
}

impl std::fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("offset", &self.offset)
            .field("buffer", &self.buffer)
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: Token::lexer(source),
            source_map: SourceMap::new(source),
            offset: 0,
            buffer: VecDeque::new(),
            pending_newline: false,
            open_templates: Vec::new(),
            last_token_end: 0,
            strict: false,
        }
    }

    /// Get the source code
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Get the source map
    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    // ==================== Token Access ====================

    /// Peek at the current token without consuming it
    pub fn current(&mut self) -> ParseResult<Option<&SpannedToken<'a>>> {
        self.fill(0)?;
        Ok(self.buffer.front())
    }

    /// Peek `n` tokens past the current one (`peek(0)` is the current token)
    pub fn peek(&mut self, n: usize) -> ParseResult<Option<&SpannedToken<'a>>> {
        self.fill(n)?;
        Ok(self.buffer.get(n))
    }

    /// Consume and return the current token
    pub fn consume_token(&mut self) -> ParseResult<Option<SpannedToken<'a>>> {
        self.fill(0)?;
        let token = self.buffer.pop_front();
        if let Some(t) = &token {
            self.last_token_end = t.span.end;
        }
        Ok(token)
    }

    /// Check whether the current token's source text is `value`
    pub fn check(&mut self, value: &str) -> ParseResult<bool> {
        Ok(matches!(
            self.current()?,
            Some(t) if t.token.matches_by_text() && t.text == value
        ))
    }

    /// Consume the current token if its source text is `value`
    pub fn consume(&mut self, value: &str) -> ParseResult<Option<SpannedToken<'a>>> {
        if self.check(value)? {
            self.consume_token()
        } else {
            Ok(None)
        }
    }

    /// Consume the current token if its source text is any of `values`
    pub fn consume_one_of(&mut self, values: &[&str]) -> ParseResult<Option<SpannedToken<'a>>> {
        for value in values {
            if self.check(value)? {
                return self.consume_token();
            }
        }
        Ok(None)
    }

    /// Check whether the upcoming tokens match any of the given literal
    /// sequences, without consuming anything
    pub fn is_before(&mut self, sequences: &[&[&str]]) -> ParseResult<bool> {
        'sequences: for sequence in sequences {
            for (i, expected) in sequence.iter().enumerate() {
                match self.peek(i)? {
                    Some(t) if t.token.matches_by_text() && t.text == *expected => {}
                    _ => continue 'sequences,
                }
            }
            return Ok(true);
        }
        Ok(false)
    }

    /// True when the current token exists and no line terminator precedes it
    pub fn no_line_terminators(&mut self) -> ParseResult<bool> {
        Ok(matches!(self.current()?, Some(t) if !t.newline_before))
    }

    /// Check if all input has been consumed
    pub fn is_end(&mut self) -> ParseResult<bool> {
        Ok(self.current()?.is_none())
    }

    /// End offset of the last consumed token
    pub fn position(&self) -> usize {
        self.last_token_end
    }

    /// Start offset of the current token, or the end of input
    pub fn current_start(&mut self) -> ParseResult<usize> {
        Ok(self
            .current()?
            .map(|t| t.span.start)
            .unwrap_or(self.source.len()))
    }

    /// Span of the current token, or an empty span at the end of input
    pub fn current_span(&mut self) -> ParseResult<Span> {
        let len = self.source.len();
        Ok(self
            .current()?
            .map(|t| t.span)
            .unwrap_or_else(|| self.source_map.span(len, len)))
    }

    // ==================== Strict Mode ====================

    /// Get the strict mode flag
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Set the strict mode flag
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    // ==================== Snapshots ====================

    /// Take a snapshot of the scanner
    pub fn state(&self) -> ScannerState<'a> {
        ScannerState {
            lex_offset: self.offset + self.inner.span().end,
            buffer: self.buffer.clone(),
            open_templates: self.open_templates.clone(),
            pending_newline: self.pending_newline,
            last_token_end: self.last_token_end,
            strict: self.strict,
        }
    }

    /// Restore a snapshot taken earlier on this scanner
    pub fn restore(&mut self, state: ScannerState<'a>) {
        self.restart_from(state.lex_offset);
        self.buffer = state.buffer;
        self.open_templates = state.open_templates;
        self.pending_newline = state.pending_newline;
        self.last_token_end = state.last_token_end;
        self.strict = state.strict;
    }

    // ==================== Regular Expression Re-Lexing ====================

    /// Re-lex the current `/` or `/=` punctuator as a regular expression
    /// literal. The grammar calls this in primary-expression position,
    /// where a division operator cannot appear.
    pub fn reconsume_as_regexp(&mut self) -> ParseResult<Option<&SpannedToken<'a>>> {
        self.fill(0)?;
        let Some(front) = self.buffer.front() else {
            return Ok(None);
        };
        if !matches!(front.token, Token::Slash | Token::SlashEq) {
            return Ok(None);
        }
        let start = front.span.start;
        let newline_before = front.newline_before;

        // Tokens lexed past the slash were produced under the division
        // interpretation and are discarded; undo their effect on the
        // template stack in reverse order before re-lexing.
        for token in self.buffer.iter().skip(1).rev() {
            match token.token {
                Token::Template => {
                    let opens = token.text.starts_with('`');
                    let closes = token.text.ends_with('`');
                    match (opens, closes) {
                        (true, false) => {
                            self.open_templates.pop();
                        }
                        (false, true) => self.open_templates.push(0),
                        _ => {}
                    }
                }
                Token::LBrace => {
                    if let Some(depth) = self.open_templates.last_mut() {
                        *depth = depth.saturating_sub(1);
                    }
                }
                Token::RBrace => {
                    if let Some(depth) = self.open_templates.last_mut() {
                        *depth += 1;
                    }
                }
                _ => {}
            }
        }

        let end = self.scan_regexp(start)?;
        self.buffer.clear();
        self.pending_newline = false;
        self.restart_from(end);

        let token = SpannedToken {
            token: Token::RegularExpression,
            span: self.source_map.span(start, end),
            text: &self.source[start..end],
            newline_before,
        };
        self.buffer.push_front(token);
        Ok(self.buffer.front())
    }

    // ==================== Lexing Internals ====================

    /// Ensure the buffer holds at least `n + 1` tokens (or all remaining)
    fn fill(&mut self, n: usize) -> ParseResult<()> {
        while self.buffer.len() <= n {
            match self.lex_significant()? {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
        Ok(())
    }

    /// Lex the next significant token, skipping line terminators and
    /// comments while tracking the newline-before flag
    fn lex_significant(&mut self) -> ParseResult<Option<SpannedToken<'a>>> {
        loop {
            let Some(result) = self.inner.next() else {
                return Ok(None);
            };
            let raw = self.inner.span();
            let start = self.offset + raw.start;
            let end = self.offset + raw.end;

            match result {
                Ok(Token::Newline) => {
                    self.pending_newline = true;
                }

                Ok(Token::LineComment) => {}

                Ok(Token::BlockCommentStart) => {
                    let comment_end = self.scan_block_comment(start, end)?;
                    if contains_line_terminator(&self.source[start..comment_end]) {
                        self.pending_newline = true;
                    }
                    self.restart_from(comment_end);
                }

                Ok(Token::DoubleQuote) | Ok(Token::SingleQuote) => {
                    let quote = self.source.as_bytes()[start];
                    let string_end = self.scan_string(start, end, quote)?;
                    self.restart_from(string_end);
                    return Ok(Some(self.make_token(Token::StringLiteral, start, string_end)));
                }

                Ok(Token::Backtick) => {
                    let (part_end, closed) = self.scan_template_part(start, end)?;
                    if !closed {
                        self.open_templates.push(0);
                    }
                    self.restart_from(part_end);
                    return Ok(Some(self.make_token(Token::Template, start, part_end)));
                }

                Ok(Token::LBrace) => {
                    if let Some(depth) = self.open_templates.last_mut() {
                        *depth += 1;
                    }
                    return Ok(Some(self.make_token(Token::LBrace, start, end)));
                }

                Ok(Token::RBrace) => match self.open_templates.last().copied() {
                    Some(0) => {
                        // This brace ends the innermost substitution and
                        // resumes the template
                        let (part_end, closed) = self.scan_template_part(start, end)?;
                        if closed {
                            self.open_templates.pop();
                        }
                        self.restart_from(part_end);
                        return Ok(Some(self.make_token(Token::Template, start, part_end)));
                    }
                    Some(_) => {
                        if let Some(depth) = self.open_templates.last_mut() {
                            *depth -= 1;
                        }
                        return Ok(Some(self.make_token(Token::RBrace, start, end)));
                    }
                    None => return Ok(Some(self.make_token(Token::RBrace, start, end))),
                },

                Ok(token) => return Ok(Some(self.make_token(token, start, end))),

                Err(()) => {
                    return Err(ParseError::LexerError {
                        span: self.source_map.span(start, end),
                    })
                }
            }
        }
    }

    fn make_token(&mut self, token: Token, start: usize, end: usize) -> SpannedToken<'a> {
        let newline_before = std::mem::take(&mut self.pending_newline);
        SpannedToken {
            token,
            span: self.source_map.span(start, end),
            text: &self.source[start..end],
            newline_before,
        }
    }

    /// Restart the inner lexer at an absolute byte offset
    fn restart_from(&mut self, pos: usize) {
        self.inner = Token::lexer(&self.source[pos..]);
        self.offset = pos;
    }

    /// Scan to the end of a `/* */` comment. `content_start` points just
    /// past the opening delimiter; returns the offset past the closing one.
    fn scan_block_comment(&self, start: usize, content_start: usize) -> ParseResult<usize> {
        let bytes = self.source.as_bytes();
        let mut pos = content_start;

        while let Some(found) = memchr::memchr(b'*', &bytes[pos..]) {
            let at = pos + found;
            if bytes.get(at + 1) == Some(&b'/') {
                return Ok(at + 2);
            }
            pos = at + 1;
        }

        Err(ParseError::UnterminatedBlockComment {
            span: self.source_map.span(start, self.source.len()),
        })
    }

    /// Scan string contents up to the closing quote; returns the offset
    /// past it. Escaped characters and line continuations are skipped,
    /// bare line terminators are an error.
    fn scan_string(&self, start: usize, content_start: usize, quote: u8) -> ParseResult<usize> {
        let bytes = self.source.as_bytes();
        let mut pos = content_start;

        while pos < bytes.len() {
            let b = bytes[pos];
            if b == quote {
                return Ok(pos + 1);
            }
            if b == b'\\' {
                pos += 1;
                if pos >= bytes.len() {
                    break;
                }
                // \<CR><LF> is a single line continuation
                if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
                    pos += 2;
                } else {
                    pos += utf8_len(bytes[pos]);
                }
                continue;
            }
            if let Some(_len) = line_terminator_len(bytes, pos) {
                break;
            }
            pos += 1;
        }

        Err(ParseError::UnterminatedString {
            span: self.source_map.span(start, self.source.len()),
        })
    }

    /// Scan a template part from its opening `` ` `` or `}` up to either a
    /// closing backtick (`closed = true`) or a `${` substitution opener.
    /// Line terminators are legal inside templates.
    fn scan_template_part(&self, start: usize, content_start: usize) -> ParseResult<(usize, bool)> {
        let bytes = self.source.as_bytes();
        let mut pos = content_start;

        while pos < bytes.len() {
            match bytes[pos] {
                b'`' => return Ok((pos + 1, true)),
                b'$' if bytes.get(pos + 1) == Some(&b'{') => return Ok((pos + 2, false)),
                b'\\' => {
                    pos += 1;
                    if pos >= bytes.len() {
                        break;
                    }
                    pos += utf8_len(bytes[pos]);
                }
                _ => pos += 1,
            }
        }

        Err(ParseError::UnterminatedTemplate {
            span: self.source_map.span(start, self.source.len()),
        })
    }

    /// Scan a regular expression literal starting at its `/`; returns the
    /// offset past the flags. `[...]` classes may contain `/`.
    fn scan_regexp(&self, start: usize) -> ParseResult<usize> {
        let bytes = self.source.as_bytes();
        let mut pos = start + 1;
        let mut in_class = false;

        loop {
            if pos >= bytes.len() || line_terminator_len(bytes, pos).is_some() {
                return Err(ParseError::UnterminatedRegExp {
                    span: self.source_map.span(start, self.source.len()),
                });
            }
            match bytes[pos] {
                b'\\' => {
                    pos += 1;
                    if pos >= bytes.len() || line_terminator_len(bytes, pos).is_some() {
                        return Err(ParseError::UnterminatedRegExp {
                            span: self.source_map.span(start, self.source.len()),
                        });
                    }
                    pos += utf8_len(bytes[pos]);
                }
                b'[' => {
                    in_class = true;
                    pos += 1;
                }
                b']' => {
                    in_class = false;
                    pos += 1;
                }
                b'/' if !in_class => {
                    pos += 1;
                    break;
                }
                b => pos += utf8_len(b),
            }
        }

        // Flags
        while pos < bytes.len()
            && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'$' || bytes[pos] == b'_')
        {
            pos += 1;
        }

        Ok(pos)
    }
}

/// Byte length of the UTF-8 character starting with `first`
fn utf8_len(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

/// Length of a line terminator at `pos`, if any (LF, CR, U+2028, U+2029)
fn line_terminator_len(bytes: &[u8], pos: usize) -> Option<usize> {
    match bytes[pos] {
        b'\n' | b'\r' => Some(1),
        0xE2 if bytes.get(pos + 1) == Some(&0x80)
            && matches!(bytes.get(pos + 2), Some(&0xA8) | Some(&0xA9)) =>
        {
            Some(3)
        }
        _ => None,
    }
}

/// Whether `text` contains any ECMAScript line terminator
fn contains_line_terminator(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
}
