//! Token definitions for the ECMAScript 2015 lexer
//!
//! Keywords and punctuators are recognized by the logos-derived lexer.
//! Strings, templates, regular expressions and block comments open with a
//! sentinel token here and are completed by the scanner's manual scans.
//! Contextual words (`let`, `of`, `from`, `as`, `static`, `get`, `set`,
//! `target`) lex as `Identifier` and are recognized by position.

mod precedence;

#[cfg(test)]
mod tests;

use logos::Logos;

pub use precedence::Precedence;

/// ECMAScript 2015 tokens
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\u{000B}\u{000C}\u{00A0}\u{FEFF}]+")] // Skip whitespace (but not line terminators)
pub enum Token {
    // ==================== Keywords ====================
    #[token("break")]
    KwBreak,
    #[token("case")]
    KwCase,
    #[token("catch")]
    KwCatch,
    #[token("class")]
    KwClass,
    #[token("const")]
    KwConst,
    #[token("continue")]
    KwContinue,
    #[token("debugger")]
    KwDebugger,
    #[token("default")]
    KwDefault,
    #[token("delete")]
    KwDelete,
    #[token("do")]
    KwDo,
    #[token("else")]
    KwElse,
    #[token("export")]
    KwExport,
    #[token("extends")]
    KwExtends,
    #[token("finally")]
    KwFinally,
    #[token("for")]
    KwFor,
    #[token("function")]
    KwFunction,
    #[token("if")]
    KwIf,
    #[token("import")]
    KwImport,
    #[token("in")]
    KwIn,
    #[token("instanceof")]
    KwInstanceof,
    #[token("new")]
    KwNew,
    #[token("return")]
    KwReturn,
    #[token("super")]
    KwSuper,
    #[token("switch")]
    KwSwitch,
    #[token("this")]
    KwThis,
    #[token("throw")]
    KwThrow,
    #[token("try")]
    KwTry,
    #[token("typeof")]
    KwTypeof,
    #[token("var")]
    KwVar,
    #[token("void")]
    KwVoid,
    #[token("while")]
    KwWhile,
    #[token("with")]
    KwWith,
    #[token("yield")]
    KwYield,

    // Future reserved words
    #[token("enum")]
    KwEnum,
    #[token("await")]
    KwAwait,

    // ==================== Boolean/Null Literals ====================
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    // ==================== Delimiters ====================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // ==================== Punctuation ====================
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("?")]
    Question,
    #[token("=>")]
    Arrow,

    // ==================== Assignment Operators ====================
    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("<<=")]
    LtLtEq,
    #[token(">>=")]
    GtGtEq,
    #[token(">>>=")]
    GtGtGtEq,
    #[token("&=")]
    AmpEq,
    #[token("^=")]
    CaretEq,
    #[token("|=")]
    PipeEq,

    // ==================== Comparison Operators ====================
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    NotEqEq,

    // ==================== Logical Operators ====================
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Not,

    // ==================== Arithmetic/Bitwise Operators ====================
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("<<")]
    LtLt,
    #[token(">>")]
    GtGt,
    #[token(">>>")]
    GtGtGt,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,

    // ==================== Line Terminators ====================
    #[regex(r"\r\n|\r|\n|\u{2028}|\u{2029}")]
    Newline,

    // ==================== Comments ====================
    #[regex(r"//[^\n\r\u{2028}\u{2029}]*")]
    LineComment,

    // Block comments handled by the scanner (may span lines)
    #[token("/*")]
    BlockCommentStart,

    // ==================== Literal Openers ====================
    // String and template contents are scanned manually; the lexer only
    // recognizes the opening delimiter.
    #[token("\"")]
    DoubleQuote,
    #[token("'")]
    SingleQuote,
    #[token("`")]
    Backtick,

    // ==================== Numeric Literals ====================
    #[regex(r"0[xX][0-9a-fA-F]+")]
    HexLiteral,
    #[regex(r"0[oO][0-7]+")]
    OctalLiteral,
    #[regex(r"0[bB][01]+")]
    BinaryLiteral,
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?")]
    DecimalLiteral,

    // ==================== Identifiers ====================
    #[regex(r"[$_a-zA-Z][$_a-zA-Z0-9]*")]
    Identifier,

    // ==================== Scanner-Produced Tokens ====================
    // Never produced by the lexer directly; the scanner builds these
    // after a manual scan.
    StringLiteral,
    Template,
    RegularExpression,
}

impl Token {
    /// Check if this token is a reserved word of ES2015
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::KwBreak
                | Token::KwCase
                | Token::KwCatch
                | Token::KwClass
                | Token::KwConst
                | Token::KwContinue
                | Token::KwDebugger
                | Token::KwDefault
                | Token::KwDelete
                | Token::KwDo
                | Token::KwElse
                | Token::KwExport
                | Token::KwExtends
                | Token::KwFinally
                | Token::KwFor
                | Token::KwFunction
                | Token::KwIf
                | Token::KwImport
                | Token::KwIn
                | Token::KwInstanceof
                | Token::KwNew
                | Token::KwReturn
                | Token::KwSuper
                | Token::KwSwitch
                | Token::KwThis
                | Token::KwThrow
                | Token::KwTry
                | Token::KwTypeof
                | Token::KwVar
                | Token::KwVoid
                | Token::KwWhile
                | Token::KwWith
                | Token::KwYield
        ) || self.is_future_reserved()
    }

    /// Future reserved words (`enum`, and `await` in modules)
    pub fn is_future_reserved(&self) -> bool {
        matches!(self, Token::KwEnum | Token::KwAwait)
    }

    /// Tokens usable as an IdentifierName (member names, property keys,
    /// import/export specifier names)
    pub fn is_identifier_name(&self) -> bool {
        matches!(
            self,
            Token::Identifier | Token::True | Token::False | Token::Null
        ) || self.is_keyword()
    }

    /// Numeric literal token kinds
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Token::HexLiteral | Token::OctalLiteral | Token::BinaryLiteral | Token::DecimalLiteral
        )
    }

    /// Assignment operators (`=` and the compound forms)
    pub fn is_assignment_operator(&self) -> bool {
        matches!(
            self,
            Token::Eq
                | Token::PlusEq
                | Token::MinusEq
                | Token::StarEq
                | Token::SlashEq
                | Token::PercentEq
                | Token::LtLtEq
                | Token::GtGtEq
                | Token::GtGtGtEq
                | Token::AmpEq
                | Token::CaretEq
                | Token::PipeEq
        )
    }

    /// Prefix unary operators
    pub fn is_unary_operator(&self) -> bool {
        matches!(
            self,
            Token::KwDelete
                | Token::KwVoid
                | Token::KwTypeof
                | Token::PlusPlus
                | Token::MinusMinus
                | Token::Plus
                | Token::Minus
                | Token::Tilde
                | Token::Not
        )
    }

    /// Update operators (`++`/`--`)
    pub fn is_update_operator(&self) -> bool {
        matches!(self, Token::PlusPlus | Token::MinusMinus)
    }

    /// Tokens whose source text can drive literal-directed consumption
    /// (keywords, identifiers, boolean/null literals, punctuators).
    /// Literal tokens with free-form text are excluded so that e.g. the
    /// string `"if"` never satisfies `consume("if")`.
    pub fn matches_by_text(&self) -> bool {
        !matches!(
            self,
            Token::StringLiteral
                | Token::Template
                | Token::RegularExpression
                | Token::HexLiteral
                | Token::OctalLiteral
                | Token::BinaryLiteral
                | Token::DecimalLiteral
                | Token::Newline
                | Token::LineComment
                | Token::BlockCommentStart
        )
    }
}

/// Words reserved only in strict mode code
pub fn is_strict_reserved_word(word: &str) -> bool {
    matches!(
        word,
        "implements"
            | "interface"
            | "let"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "static"
    )
}
