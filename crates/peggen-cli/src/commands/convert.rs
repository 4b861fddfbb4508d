use std::path::PathBuf;

use super::grammar_loader::{load_grammar, write_output};

pub struct ConvertArgs {
    pub grammar_path: PathBuf,
    pub output: PathBuf,
}

pub fn run(args: ConvertArgs) {
    let grammar = match load_grammar(&args.grammar_path) {
        Ok(grammar) => grammar,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let bytes = grammar.to_binary();
    log::info!("encoded {} bytes", bytes.len());
    if let Err(msg) = write_output(Some(&args.output), &bytes) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
}
