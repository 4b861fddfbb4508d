//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{convert_command, generate_command};
use crate::commands::convert::ConvertArgs;
use crate::commands::generate::GenerateArgs;

#[test]
fn generate_extracts_all_params() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "grammars/calc.json",
            "-o",
            "out.rs",
            "--class",
            "Calc",
            "--runtime",
            "crate::rt",
            "--filename",
            "calc.gram",
        ])
        .unwrap();
    let args: GenerateArgs = GenerateParams::from_matches(&m).into();

    assert_eq!(args.grammar_path, PathBuf::from("grammars/calc.json"));
    assert_eq!(args.output, Some(PathBuf::from("out.rs")));
    assert_eq!(args.class.as_deref(), Some("Calc"));
    assert_eq!(args.runtime.as_deref(), Some("crate::rt"));
    assert_eq!(args.filename, "calc.gram");
}

#[test]
fn generate_filename_defaults_to_file_name() {
    let m = generate_command()
        .try_get_matches_from(["generate", "grammars/calc.json"])
        .unwrap();
    let args: GenerateArgs = GenerateParams::from_matches(&m).into();
    assert_eq!(args.filename, "calc.json");
    assert_eq!(args.output, None);
}

#[test]
fn generate_requires_grammar() {
    let result = generate_command().try_get_matches_from(["generate"]);
    assert!(result.is_err());
}

#[test]
fn convert_requires_output() {
    assert!(
        convert_command()
            .try_get_matches_from(["convert", "calc.json"])
            .is_err()
    );

    let m = convert_command()
        .try_get_matches_from(["convert", "calc.json", "-o", "calc.bin"])
        .unwrap();
    let args: ConvertArgs = ConvertParams::from_matches(&m).into();
    assert_eq!(args.output, PathBuf::from("calc.bin"));
}

#[test]
fn verbose_is_global_and_counted() {
    let matches = build_cli()
        .try_get_matches_from(["peggen", "dump", "calc.json", "-vv"])
        .unwrap();
    let (name, m) = matches.subcommand().unwrap();
    assert_eq!(name, "dump");
    assert_eq!(m.get_count("verbose"), 2);
    assert_eq!(log_level(m.get_count("verbose")), log::LevelFilter::Debug);
}

#[test]
fn log_levels() {
    assert_eq!(log_level(0), log::LevelFilter::Warn);
    assert_eq!(log_level(1), log::LevelFilter::Info);
    assert_eq!(log_level(5), log::LevelFilter::Trace);
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["peggen"]).is_err());
}
