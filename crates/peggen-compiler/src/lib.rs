//! peggen compiler: turns an analyzed PEG grammar into a Rust parser module.
//!
//! This crate provides the generation pipeline:
//! - `check` - reference validation before emission
//! - `naming` - helper-rule registry and local-name deduplication
//! - `expr` - compilation of grammar items into parsing calls
//! - `rule` - rule body emission (ordered choice, loops, cut)
//! - `memo` - memoization strategy per rule
//! - `driver` - work-list processing and module assembly
//!
//! The generated module targets the `peggen-runtime` crate.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod check;
pub mod config;
pub mod driver;
pub mod expr;
pub mod memo;
pub mod naming;
pub mod rule;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
pub mod test_utils;

use peggen_core::{Grammar, GrammarError};

pub use check::check_references;
pub use config::{Config, TokenTable};
pub use driver::Generator;
pub use memo::MemoStrategy;

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    /// A name that is neither a rule nor a token.
    #[error("rule `{rule}` references undefined name `{name}`")]
    DanglingReference { rule: String, name: String },

    /// An item that cannot be compiled into a terminating routine.
    #[error("malformed item in rule `{rule}`: {reason}")]
    MalformedItem { rule: String, reason: String },
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Generate the parser module for `grammar`.
///
/// `filename` is substituted for `{filename}` in the header, subheader
/// and trailer.
pub fn generate(grammar: &Grammar, config: &Config, filename: &str) -> Result<String> {
    check_references(grammar, &config.tokens)?;
    Generator::new(grammar, config).emit(filename)
}

/// Parse a JSON grammar and generate its parser module.
pub fn generate_from_json(json: &str, config: &Config, filename: &str) -> Result<String> {
    let grammar = Grammar::from_json(json)?;
    generate(&grammar, config, filename)
}
