use std::fs;
use std::io::{self, Read};
use std::path::Path;

use peggen_core::Grammar;

/// Load an analyzed grammar.
///
/// `-` reads JSON from stdin. Files ending in `.bin` are decoded as
/// postcard, everything else as JSON.
pub fn load_grammar(path: &Path) -> Result<Grammar, String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        return Grammar::from_json(&buf).map_err(|e| format!("<stdin>: {}", e));
    }

    let grammar = if path.extension().is_some_and(|ext| ext == "bin") {
        let bytes = fs::read(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
        Grammar::from_binary(&bytes)
    } else {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
        Grammar::from_json(&content)
    };
    let grammar = grammar.map_err(|e| format!("{}: {}", path.display(), e))?;
    log::info!("loaded {} rule(s) from {}", grammar.rules.len(), path.display());
    Ok(grammar)
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &[u8]) -> Result<(), String> {
    match path {
        Some(path) => fs::write(path, content)
            .map_err(|e| format!("failed to write '{}': {}", path.display(), e)),
        None => {
            use std::io::Write;
            io::stdout()
                .write_all(content)
                .map_err(|e| format!("failed to write stdout: {}", e))
        }
    }
}
