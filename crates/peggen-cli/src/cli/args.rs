//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar file (positional). JSON, or postcard when the extension is `.bin`.
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Analyzed grammar (JSON, `.bin` for postcard, `-` for stdin)")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write to FILE instead of stdout")
}

/// Generated parser type name (--class).
pub fn class_arg() -> Arg {
    Arg::new("class")
        .long("class")
        .value_name("NAME")
        .help("Parser type name (default: `class` meta or GeneratedParser)")
}

/// Runtime crate path (--runtime).
pub fn runtime_arg() -> Arg {
    Arg::new("runtime")
        .long("runtime")
        .value_name("PATH")
        .help("Crate path the generated module imports its runtime from")
}

/// Name substituted for `{filename}` (--filename).
pub fn filename_arg() -> Arg {
    Arg::new("filename")
        .long("filename")
        .value_name("NAME")
        .help("Name substituted for {filename} (default: grammar file name)")
}

/// Verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
}
