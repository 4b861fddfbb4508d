//! Tokenizer for Python-like token streams.
//!
//! Produces `NAME`, `NUMBER`, `STRING`, `OP` and `NEWLINE` tokens, always
//! terminated by `ENDMARKER`. Blank lines, comments and newlines inside
//! brackets do not produce `NEWLINE`. Indentation is not tracked.

use logos::Logos;

use crate::token::{Token, TokenKind};

/// Error for input the tokenizer cannot classify.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unexpected character {text:?} at offset {offset}")]
pub struct LexError {
    pub offset: usize,
    pub text: String,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[ \t\r\f]+")]
    Whitespace,

    #[regex(r"\\\r?\n")]
    LineContinuation,

    #[regex(r"#[^\n]*", allow_greedy = true)]
    Comment,

    #[token("\n")]
    Newline,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name,

    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    String,

    #[token("(")]
    #[token("[")]
    #[token("{")]
    Open,

    #[token(")")]
    #[token("]")]
    #[token("}")]
    Close,

    #[regex(r"\*\*=?|//=?|>>=?|<<=?|->|:=|\.\.\.|[-+*/%@&|^=<>!]=|[-+*/%@&|^~<>=.,:;]")]
    Op,
}

/// Tokenize `source` into a buffer for [`ParserState`](crate::ParserState).
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = RawToken::lexer(source);
    let mut depth = 0usize;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = match result {
            Ok(RawToken::Whitespace | RawToken::LineContinuation | RawToken::Comment) => continue,
            Ok(RawToken::Newline) => {
                let after_newline = tokens.last().is_none_or(|t| t.kind == TokenKind::Newline);
                if depth > 0 || after_newline {
                    continue;
                }
                TokenKind::Newline
            }
            Ok(RawToken::Name) => TokenKind::Name,
            Ok(RawToken::Number) => TokenKind::Number,
            Ok(RawToken::String) => TokenKind::String,
            Ok(RawToken::Open) => {
                depth += 1;
                TokenKind::Op
            }
            Ok(RawToken::Close) => {
                depth = depth.saturating_sub(1);
                TokenKind::Op
            }
            Ok(RawToken::Op) => TokenKind::Op,
            Err(()) => {
                return Err(LexError {
                    offset: span.start,
                    text: text.to_owned(),
                });
            }
        };
        tokens.push(Token::new(kind, text, (span.start, span.end)));
    }

    let end = source.len();
    if tokens.last().is_some_and(|t| t.kind != TokenKind::Newline) {
        tokens.push(Token::new(TokenKind::Newline, "", (end, end)));
    }
    tokens.push(Token::end_marker(end));
    Ok(tokens)
}
