use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Output error: could not create [{path}]: {source}")]
    Create {
        path: PathBuf,
        source: io::Error
    },
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
    #[error("Output error: {0}")]
    Csv(#[from] csv::Error)
}
