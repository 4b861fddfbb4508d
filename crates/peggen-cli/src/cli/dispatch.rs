//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::convert::ConvertArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub grammar_path: PathBuf,
    pub output: Option<PathBuf>,
    pub class: Option<String>,
    pub runtime: Option<String>,
    pub filename: Option<String>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            class: m.get_one::<String>("class").cloned(),
            runtime: m.get_one::<String>("runtime").cloned(),
            filename: m.get_one::<String>("filename").cloned(),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        // The default `{filename}` is the grammar's file name, not its full path.
        let filename = p.filename.unwrap_or_else(|| {
            p.grammar_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "<stdin>".to_string())
        });
        Self {
            grammar_path: p.grammar_path,
            output: p.output,
            class: p.class,
            runtime: p.runtime,
            filename,
        }
    }
}

pub struct DumpParams {
    pub grammar_path: PathBuf,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
        }
    }
}

pub struct ConvertParams {
    pub grammar_path: PathBuf,
    pub output: PathBuf,
}

impl ConvertParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            output: m
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_default(),
        }
    }
}

impl From<ConvertParams> for ConvertArgs {
    fn from(p: ConvertParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            output: p.output,
        }
    }
}

/// Log level for the number of `-v` flags.
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn grammar_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("grammar_path")
        .cloned()
        .unwrap_or_default()
}
