//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use permuta_core::{RouteFilter, SignatureKey};

use crate::error::CliError;

/// Output format for CLI commands.
///
/// `Human` emits tab-separated text to stdout and counts to stderr.
/// `Json` emits a single pretty-printed JSON document to stdout.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// How repeated cycle discoveries are recognised.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SignatureArg {
    /// One result per set of courts (default).
    Courts,
    /// One result per rotation of the same participants.
    Participants,
}

impl From<SignatureArg> for SignatureKey {
    fn from(arg: SignatureArg) -> Self {
        match arg {
            SignatureArg::Courts => Self::Courts,
            SignatureArg::Participants => Self::Participants,
        }
    }
}

/// Optional origin→destination hop that results must realize.
///
/// Both ends must be given together; a lone or blank `--origin` or `--dest`
/// is rejected with exit code 1.
#[derive(Args, Clone, Debug, Default)]
pub struct RouteArgs {
    /// Current court of the participant you are searching for.
    #[arg(long, value_name = "COURT")]
    pub origin: Option<String>,
    /// Court that participant wants to move to.
    #[arg(long = "dest", value_name = "COURT")]
    pub destination: Option<String>,
}

impl RouteArgs {
    /// Converts the flags into a [`RouteFilter`].
    ///
    /// # Errors
    ///
    /// See [`route_filter`].
    pub fn filter(&self) -> Result<RouteFilter, CliError> {
        route_filter(self.origin.as_deref(), self.destination.as_deref())
    }
}

/// Builds a [`RouteFilter`] from the `--origin` and `--dest` values.
///
/// A blank value counts as missing. Omitting both flags yields the
/// pass-through filter.
///
/// # Errors
///
/// [`CliError::IncompleteRoute`] when only one end names a court, or when
/// both flags were given but neither names one.
pub fn route_filter(
    origin: Option<&str>,
    destination: Option<&str>,
) -> Result<RouteFilter, CliError> {
    let named: fn(Option<&str>) -> Option<&str> = |s| s.filter(|s| !s.trim().is_empty());
    match (named(origin), named(destination)) {
        (Some(origin), Some(destination)) => Ok(RouteFilter::hop(origin, destination)),
        (Some(_), None) => Err(CliError::IncompleteRoute {
            given: "--origin",
            missing: "--dest",
        }),
        (None, Some(_)) => Err(CliError::IncompleteRoute {
            given: "--dest",
            missing: "--origin",
        }),
        (None, None) if origin.is_none() && destination.is_none() => Ok(RouteFilter::none()),
        (None, None) => Err(CliError::IncompleteRoute {
            given: "--origin",
            missing: "--dest",
        }),
    }
}

/// All top-level subcommands exposed by the `permuta` binary.
#[derive(Subcommand)]
pub enum Command {
    /// List direct swaps: pairs of participants who want each other's court.
    Swaps {
        /// Participant table (.xlsx or .csv).
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        route: RouteArgs,
    },

    /// List exchange cycles of one length.
    Cycles {
        /// Participant table (.xlsx or .csv).
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Number of participants in each cycle (2 to 6).
        #[arg(long, short = 'k', value_parser = clap::value_parser!(u8).range(2..))]
        length: u8,
        #[command(flatten)]
        route: RouteArgs,
        /// How repeated discoveries are collapsed: courts (default) or participants.
        #[arg(long, default_value = "courts", value_enum)]
        signature: SignatureArg,
    },

    /// Find every exchange (swaps and cycles up to 6) realizing one move.
    Search {
        /// Participant table (.xlsx or .csv).
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Current court of the participant you are searching for.
        #[arg(long, value_name = "COURT")]
        origin: String,
        /// Court that participant wants to move to.
        #[arg(long = "dest", value_name = "COURT")]
        destination: String,
        /// How repeated discoveries are collapsed: courts (default) or participants.
        #[arg(long, default_value = "courts", value_enum)]
        signature: SignatureArg,
    },

    /// Print network totals and the most requested, exporting and connected courts.
    Stats {
        /// Participant table (.xlsx or .csv).
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Number of courts in each ranking (default: 10).
        #[arg(long, default_value = "10")]
        top: usize,
        /// Merge courts whose names differ only by case, accents or spacing.
        #[arg(long)]
        normalize_keys: bool,
    },

    /// Report which participants take part in at least one exchange.
    Coverage {
        /// Participant table (.xlsx or .csv).
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Re-export the loaded participant table.
    Export {
        /// Participant table (.xlsx or .csv).
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Output path; the extension picks .csv or .xlsx. Defaults to CSV on stdout.
        #[arg(long, short = 'o', value_name = "OUT")]
        output: Option<PathBuf>,
    },
}

/// Root CLI struct for the `permuta` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "permuta",
    version,
    about = "Court-exchange cycle finder",
    long_about = "Finds direct swaps and multi-party exchange cycles among participants\n\
                  who each hold one court and want to move to up to three others."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug detail to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `PERMUTA_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 67108864 (64 MB).
    #[arg(
        long,
        global = true,
        env = "PERMUTA_MAX_FILE_SIZE",
        default_value = "67108864"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in log output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
