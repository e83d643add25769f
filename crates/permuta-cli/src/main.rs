use clap::Parser;

use permuta_core::CycleQuery;

mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

pub use cli::{Cli, Command, OutputFormat};

use crate::cmd::Context;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose, logging::colors_enabled(cli.no_color));

    let code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let ctx = Context {
        format: cli.format,
        quiet: cli.quiet,
        verbose: cli.verbose,
    };
    let load = |file: &std::path::Path| io::load_engine(file, cli.max_file_size);

    match &cli.command {
        Command::Swaps { file, route } => {
            let filter = route.filter()?;
            cmd::swaps::run(&load(file)?, &filter, ctx)
        }
        Command::Cycles {
            file,
            length,
            route,
            signature,
        } => {
            let query = CycleQuery {
                filter: route.filter()?,
                signature: (*signature).into(),
            };
            cmd::cycles::run(&load(file)?, usize::from(*length), &query, ctx)
        }
        Command::Search {
            file,
            origin,
            destination,
            signature,
        } => {
            let query = CycleQuery {
                filter: cli::route_filter(
                    Some(origin.as_str()),
                    Some(destination.as_str()),
                )?,
                signature: (*signature).into(),
            };
            cmd::search::run(&load(file)?, origin, destination, &query, ctx)
        }
        Command::Stats {
            file,
            top,
            normalize_keys,
        } => cmd::stats::run(&load(file)?, *top, *normalize_keys, ctx),
        Command::Coverage { file } => cmd::coverage::run(&load(file)?, ctx),
        Command::Export { file, output } => {
            cmd::export::run(&load(file)?, output.as_deref(), ctx)
        }
    }
}
