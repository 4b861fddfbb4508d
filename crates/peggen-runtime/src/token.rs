//! Tokens consumed by generated parsers.

use std::fmt;

use serde::{Serialize, Serializer};

/// Token classes, named after Python's `token` module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndMarker,
    Name,
    Number,
    String,
    Newline,
    Indent,
    Dedent,
    Op,
    Comment,
    Nl,
    ErrorToken,
}

impl TokenKind {
    /// Symbolic name, as used by grammars (`NAME`, `NEWLINE`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::EndMarker => "ENDMARKER",
            TokenKind::Name => "NAME",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Op => "OP",
            TokenKind::Comment => "COMMENT",
            TokenKind::Nl => "NL",
            TokenKind::ErrorToken => "ERRORTOKEN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its source text and byte span `[start, end)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: (usize, usize),
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: (usize, usize)) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Zero-width end-of-input token at `offset`.
    pub fn end_marker(offset: usize) -> Self {
        Self::new(TokenKind::EndMarker, "", (offset, offset))
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Token", 3)?;
        s.serialize_field("kind", self.kind.as_str())?;
        s.serialize_field("text", &self.text)?;
        s.serialize_field("span", &[self.span.0, self.span.1])?;
        s.end()
    }
}
