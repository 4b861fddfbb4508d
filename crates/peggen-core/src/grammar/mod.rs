//! Grammar types for analyzed PEG grammars.
//!
//! This module provides the rule tree produced by the grammar front-end,
//! with support for JSON deserialization and compact binary serialization.

mod binary;
mod display;
mod json;
mod types;

#[cfg(test)]
mod binary_tests;
#[cfg(test)]
mod json_tests;

pub use json::GrammarError;
pub use types::{Alt, Grammar, Item, NamedItem, Rhs, Rule, RuleKind};
