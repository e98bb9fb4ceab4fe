//! escript_parser
//!
//! Recursive-descent parser for the ECMAScript 2015 surface syntax,
//! producing an ESTree-shaped AST with source spans on every node.
//!
//! The grammar engine resolves the ES2015 cover grammars (parenthesized
//! expressions vs arrow parameter lists, expressions reinterpreted as
//! destructuring patterns), drives the contextual `[In]`/`[Yield]`/
//! `[Return]` flags, applies automatic semicolon insertion, folds binary
//! operators by precedence grade, and enforces the strict-mode early
//! errors on legacy octal forms, labelled functions, and
//! `delete identifier`.
//!
//! # Example
//!
//! ```
//! use escript_parser::parse_script;
//!
//! let program = parse_script("var answer = 6 * 7;").expect("parse failed");
//!
//! assert_eq!(program.body.len(), 1);
//! assert_eq!(program.to_json()["sourceType"], "script");
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod span;
pub mod token;

// Re-exports
pub use ast::{Program, SourceType};
pub use error::{ParseError, ParseResult};
pub use parser::Parser;
pub use scanner::{Scanner, SpannedToken};
pub use span::{SourceMap, Span};
pub use token::{Precedence, Token};

/// Parse source text as a script
///
/// # Example
///
/// ```
/// use escript_parser::parse_script;
///
/// let program = parse_script("if (a) b();").unwrap();
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse_script(source: &str) -> ParseResult<Program> {
    Parser::new(source, SourceType::Script).parse()
}

/// Parse source text as a module
///
/// Module code is strict from the first token and may contain import and
/// export declarations.
pub fn parse_module(source: &str) -> ParseResult<Program> {
    Parser::new(source, SourceType::Module).parse()
}

/// Tokenize source text
///
/// Returns the scanner's token stream, stopping after the first lexical
/// error. Division/regexp and template disambiguation follow the
/// expression-free interpretation, since no grammar is consulted.
pub fn tokenize(source: &str) -> Vec<ParseResult<SpannedToken<'_>>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        match scanner.consume_token() {
            Ok(Some(token)) => tokens.push(Ok(token)),
            Ok(None) => break,
            Err(error) => {
                tokens.push(Err(error));
                break;
            }
        }
    }
    tokens
}

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
