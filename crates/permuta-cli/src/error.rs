/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `permuta` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure, the participant table could not be
///   read at all, or output could not be written.
/// - Exit code **1**: logical failure, the arguments were readable but
///   inconsistent.
use std::fmt;
use std::path::PathBuf;

use permuta_import::ImportError;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `permuta` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// The offending path.
        path: PathBuf,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes.
        actual: u64,
    },

    /// The table could be opened but not parsed, or has bad columns.
    Import {
        /// The file being read.
        path: PathBuf,
        /// The underlying import error.
        source: ImportError,
    },

    /// Writing results or an export failed.
    Output {
        /// `"stdout"` or the output path.
        target: String,
        /// The underlying error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// Only one end of an origin/destination pair was given.
    IncompleteRoute {
        /// The flag that was supplied.
        given: &'static str,
        /// The flag that must accompany it.
        missing: &'static str,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input or output failure.
    /// - `1`: inconsistent arguments.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::Import { .. }
            | Self::Output { .. } => 2,

            Self::IncompleteRoute { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                path,
                limit,
                actual,
            } => {
                format!(
                    "error: file too large: {} is {actual} bytes, limit is {limit} bytes",
                    path.display()
                )
            }
            Self::Import { path, source } => {
                format!("error: cannot load {}: {source}", path.display())
            }
            Self::Output { target, detail } => {
                format!("error: failed to write {target}: {detail}")
            }
            Self::IncompleteRoute { given, missing } => {
                format!("error: {given} requires {missing}")
            }
        }
    }

    /// Wraps a failed write to stdout.
    pub fn stdout(e: &std::io::Error) -> Self {
        Self::Output {
            target: "stdout".to_owned(),
            detail: e.to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Import { source, .. } => Some(source),
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::Output { .. }
            | Self::IncompleteRoute { .. } => None,
        }
    }
}
