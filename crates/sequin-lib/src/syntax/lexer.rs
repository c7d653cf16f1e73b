//! Tokenizer for SQL-like input text.
//!
//! Whitespace and `--` line comments are skipped during scanning. Lexing
//! never fails: a quote that never closes consumes to end of input, and a
//! character outside the known classes becomes its own one-character
//! literal token (mapped from the logos error path). One end-of-stream
//! token is appended to every stream.

use logos::Logos;
use serde::Serialize;

/// Token classes.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip(r"--[^\n]*", allow_greedy = true))]
pub enum TokenKind {
    /// Identifier-class run, case preserved.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Symbol,

    /// Digit run with at most one decimal point.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// Single-quoted text; a backslash passes the next character through
    /// literally, with no other escape processing.
    #[regex(r"'(?:[^'\\]|\\.)*'?")]
    Str,

    /// Any other non-whitespace character, one token per character.
    Literal,

    /// End of the token stream.
    Eof,
}

impl TokenKind {
    /// Lookahead key for the token category, where one exists.
    pub fn category(self) -> Option<&'static str> {
        match self {
            TokenKind::Symbol => Some("symbol"),
            TokenKind::Number => Some("number"),
            TokenKind::Str => Some("string"),
            TokenKind::Literal | TokenKind::Eof => None,
        }
    }
}

/// Classified token with its processed value and byte span.
///
/// For strings the value is the content between the quotes with escapes
/// resolved, so it differs from the source slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: std::ops::Range<usize>,
}

impl Token {
    /// Human-readable form for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_owned(),
            TokenKind::Str => format!("'{}'", self.value),
            _ => format!("`{}`", self.value),
        }
    }
}

/// Tokenizes input text, appending the end-of-stream token.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(TokenKind::Str) => tokens.push(Token {
                kind: TokenKind::Str,
                value: unquote(lexer.slice()),
                span,
            }),
            Ok(kind) => tokens.push(Token {
                kind,
                value: lexer.slice().to_owned(),
                span,
            }),
            Err(()) => tokens.push(Token {
                kind: TokenKind::Literal,
                value: source[span.clone()].to_owned(),
                span,
            }),
        }
    }

    let end = source.len();
    tokens.push(Token {
        kind: TokenKind::Eof,
        value: String::new(),
        span: end..end,
    });
    tokens
}

/// Strips the quotes and resolves escapes: a backslash passes the next
/// character through. Works on unterminated lexemes, which simply have no
/// closing quote to stop at.
fn unquote(slice: &str) -> String {
    let mut chars = slice.chars();
    chars.next(); // opening quote
    let mut value = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    value.push(escaped);
                }
            }
            '\'' => break,
            other => value.push(other),
        }
    }
    value
}
