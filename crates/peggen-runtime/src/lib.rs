#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime support for parsers generated by peggen.
//!
//! Generated parsers hold a [`ParserState`] and implement [`PegParser`], which
//! provides everything the emitted rule routines call:
//! - `mark` / `reset` to undo consumption after a failed alternative
//! - `expect` and the lexical-class routines `name`, `number`, `string`, `op`
//! - zero-width `positive_lookahead` / `negative_lookahead`
//! - the `memoize`, `memoize_left_rec` and `logged` rule wrappers
//!
//! The free function [`commit`] implements cut (`~`) inside condition chains.
//!
//! [`tokenize`] turns source text into the token buffer a parser consumes.

mod lexer;
mod parser;
mod state;
mod token;
mod value;

#[cfg(test)]
mod lexer_tests;

pub use lexer::{LexError, tokenize};
pub use parser::{PegParser, commit};
pub use state::{Mark, ParserState};
pub use token::{Token, TokenKind};
pub use value::Value;
