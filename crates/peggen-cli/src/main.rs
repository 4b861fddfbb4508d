mod cli;
mod commands;

use cli::{ConvertParams, DumpParams, GenerateParams, build_cli, log_level};

fn main() {
    let matches = build_cli().get_matches();
    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };

    init_logging(log_level(m.get_count("verbose")));

    match name {
        "generate" => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        "dump" => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        "convert" => {
            let params = ConvertParams::from_matches(m);
            commands::convert::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

fn init_logging(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_time_format_custom(&[])
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("warning: logging disabled: {e}");
    }
}
