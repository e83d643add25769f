/// Command module for the `permuta` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the loaded engine and parsed arguments and returns `Ok(())`
/// on success or a [`crate::error::CliError`] on failure.
use crate::OutputFormat;

pub mod coverage;
pub mod cycles;
pub mod export;
pub mod search;
pub mod stats;
pub mod swaps;

/// Global flags every command needs once the input is loaded.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Selected output format.
    pub format: OutputFormat,
    /// Suppress the stderr summary line.
    pub quiet: bool,
    /// `--verbose` was passed.
    pub verbose: bool,
}

impl Context {
    /// Prints a one-line summary to stderr unless `--quiet` was given.
    pub fn note(&self, line: &str) {
        if !self.quiet {
            eprintln!("{line}");
        }
    }
}
