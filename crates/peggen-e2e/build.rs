//! Generates one parser module per `grammars/*.json` into `OUT_DIR`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use peggen_compiler::Config;
use peggen_core::Grammar;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let grammar_dir = Path::new(&manifest_dir).join("grammars");

    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-changed={}", grammar_dir.display());

    let mut grammars: Vec<PathBuf> = fs::read_dir(&grammar_dir)
        .expect("failed to read grammars directory")
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    grammars.sort();

    for path in grammars {
        println!("cargo::rerun-if-changed={}", path.display());

        let json = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        let grammar = Grammar::from_json(&json)
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));

        let filename = path
            .file_name()
            .expect("grammar path has a file name")
            .to_string_lossy();
        let module = peggen_compiler::generate(&grammar, &Config::new(), &filename)
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));

        let stem = path
            .file_stem()
            .expect("grammar path has a file stem")
            .to_string_lossy();
        fs::write(out_dir.join(format!("{stem}.rs")), module)
            .expect("failed to write generated parser");
    }
}
