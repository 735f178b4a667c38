use std::io;
use std::path::PathBuf;

/// Failures that abort a whole aggregation run.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("cannot read chain file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AggregateError {
    /// Path of the chain file that caused the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            AggregateError::Read { path, .. } => path,
        }
    }
}
