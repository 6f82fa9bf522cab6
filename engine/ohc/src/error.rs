use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures outside the grading itself: reading input and encoding output.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("invalid exam input: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),
}
