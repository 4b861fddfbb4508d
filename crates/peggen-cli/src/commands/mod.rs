pub mod convert;
pub mod dump;
pub mod generate;
pub mod grammar_loader;

#[cfg(test)]
mod commands_tests;
