//! Error types for lg

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LgError>;

#[derive(Debug, Error)]
pub enum LgError {
    /// The input file could not be opened.
    #[error("cannot read {}: {source}", path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
