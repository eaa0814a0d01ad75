use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the bessie pipeline.
///
/// Every variant is fatal to the invocation: the message is printed to
/// stderr and the process exits with a failure status. Usage errors from
/// malformed command lines are reported by clap before the pipeline runs;
/// `Usage` covers the arguments clap accepts but the pipeline cannot.
#[derive(Debug, Error)]
pub enum BessieError {
    #[error("usage error: {0}")]
    Usage(String),

    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no usable credential: {0}")]
    Authentication(String),

    #[error("provider request failed: {0}")]
    Provider(String),
}
