use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    /// The stream stopped looking like a sequence of JPEG marker segments.
    #[error("Malformed image: {0}")]
    MalformedImage(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
