use std::path::PathBuf;

use peggen_core::Grammar;

use super::grammar_loader::load_grammar;

pub struct DumpArgs {
    pub grammar_path: PathBuf,
}

pub fn run(args: DumpArgs) {
    let grammar = match load_grammar(&args.grammar_path) {
        Ok(grammar) => grammar,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    print!("{}", format_grammar(&grammar));
}

/// Metas as `@key value`, then one rule per line with its analysis flags.
pub fn format_grammar(grammar: &Grammar) -> String {
    let mut out = String::new();
    for (key, value) in &grammar.metas {
        match value {
            Some(value) => out.push_str(&format!("@{} {:?}\n", key, value)),
            None => out.push_str(&format!("@{}\n", key)),
        }
    }
    if !grammar.metas.is_empty() {
        out.push('\n');
    }

    for rule in grammar.rules.values() {
        let mut flags = Vec::new();
        if rule.left_recursive {
            flags.push(if rule.leader { "left-recursive leader" } else { "left-recursive" });
        }
        if rule.nullable {
            flags.push("nullable");
        }
        out.push_str(&rule.to_string());
        if !flags.is_empty() {
            out.push_str(&format!("  # {}", flags.join(", ")));
        }
        out.push('\n');
    }
    out
}
