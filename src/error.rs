use std::path::PathBuf;
use thiserror::Error;

/// Errors from the file-level API. Diffing itself cannot fail.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
