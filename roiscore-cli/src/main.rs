mod score;

use anyhow::Result;
use clap::{Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "roiscore";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Score genomic regions of interest by their overlap with a methylation or other signal track.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Log progress messages, not only warnings")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(score::cli::create_score_cli())
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            let level = match verbose {
                true => log::LevelFilter::Info,
                false => log::LevelFilter::Warn,
            };
            builder.filter_level(level);
        }
    }
    builder.init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // SCORE
        //
        Some((score::cli::SCORE_CMD, matches)) => {
            score::handlers::run_score(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
