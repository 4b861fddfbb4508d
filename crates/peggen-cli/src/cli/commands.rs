//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("peggen")
        .about("PEG parser generator for Rust")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(dump_command())
        .subcommand(convert_command())
}

/// Generate a parser module from a grammar.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate a parser module from an analyzed grammar")
        .after_help(
            r#"EXAMPLES:
  peggen generate calc.json                  # module on stdout
  peggen generate calc.json -o src/calc.rs   # write to file
  peggen generate calc.json --class Calc     # name the parser type
  peggen generate calc.bin --runtime crate::rt"#,
        )
        .arg(grammar_path_arg())
        .arg(output_arg())
        .arg(class_arg())
        .arg(runtime_arg())
        .arg(filename_arg())
}

/// Print the rules of a grammar in PEG notation.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Print grammar rules in PEG notation with their analysis flags")
        .arg(grammar_path_arg())
}

/// Convert a grammar to its binary encoding.
pub fn convert_command() -> Command {
    Command::new("convert")
        .about("Convert a grammar to the postcard binary encoding")
        .arg(grammar_path_arg())
        .arg(output_arg().required(true))
}
