pub mod cli;
pub mod commands;
pub mod error;
pub mod formats;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{Dimensions, FileInfo, ImageKind};
