#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Grammar model for the peggen parser generator.
//!
//! The grammar front-end hands over a fully analyzed rule tree: nullability,
//! left-recursion cycles and leader roles are already computed. This crate
//! holds that tree as plain Rust types:
//! - **Loading**: JSON from the front-end, postcard for cached grammars
//! - **Display**: PEG notation, used in generated code and `peggen dump`
//! - **Utils**: identifier fixing for emitted Rust code

pub mod grammar;
pub mod utils;


pub use grammar::{Alt, Grammar, GrammarError, Item, NamedItem, Rhs, Rule, RuleKind};
