use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

/// Errors surfaced across this crate's outer boundary — the benchmark
/// loader and CLI binary. Internal invariant violations (a malformed
/// pattern reaching [crate::oracle::Oracle], an out-of-range hole index
/// reaching [crate::partial_regex::fill]) are programmer errors and panic
/// instead, following this codebase's existing split between recoverable
/// `Error` types and `ImplementationError`/panic for "should never happen".
#[derive(Debug)]
pub enum SynthesisError {
    /// No examples file was given on the command line.
    MissingArgument,
    /// The examples file named on the command line couldn't be opened or
    /// read.
    UnreadableFile { path: PathBuf, source: io::Error },
}

impl Display for SynthesisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthesisError::MissingArgument => {
                write!(f, "error: missing required examples filename")
            }
            SynthesisError::UnreadableFile { path, source } => {
                write!(f, "error: could not read `{}`: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SynthesisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SynthesisError::MissingArgument => None,
            SynthesisError::UnreadableFile { source, .. } => Some(source),
        }
    }
}
