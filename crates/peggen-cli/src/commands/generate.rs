use std::path::PathBuf;

use peggen_compiler::Config;

use super::grammar_loader::{load_grammar, write_output};

pub struct GenerateArgs {
    pub grammar_path: PathBuf,
    pub output: Option<PathBuf>,
    pub class: Option<String>,
    pub runtime: Option<String>,
    /// Substituted for `{filename}` in the header, subheader and trailer
    pub filename: String,
}

pub fn run(args: GenerateArgs) {
    let module = match render(&args) {
        Ok(module) => module,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    if let Err(msg) = write_output(args.output.as_deref(), module.as_bytes()) {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
}

/// Generate the module text for `args`.
pub fn render(args: &GenerateArgs) -> Result<String, String> {
    let grammar = load_grammar(&args.grammar_path)?;

    let mut config = Config::new();
    if let Some(class) = &args.class {
        config = config.parser_name(class);
    }
    if let Some(runtime) = &args.runtime {
        config = config.runtime_crate(runtime);
    }

    peggen_compiler::generate(&grammar, &config, &args.filename).map_err(|e| e.to_string())
}
