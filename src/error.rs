//! Errors that abort a rendering run.

use std::path::PathBuf;

use crate::ascii::EmptyCharsetError;
use crate::config::ConfigError;
use crate::raster::{LoadError, RasterError};

/// Every failure is terminal for the run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    EmptyCharset(#[from] EmptyCharsetError),

    #[error("Failed to load image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to load image '{}': {source}", path.display())]
    InvalidImage { path: PathBuf, source: RasterError },

    #[error("Output grid {cols}x{rows} exceeds the limit of {max} cells; lower --width or raise --aspect")]
    GridTooLarge { cols: u32, rows: u32, max: u64 },

    #[error("Failed to open output file '{}': {source}", path.display())]
    OpenOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

impl AppError {
    /// Attach the attempted path to an image loading failure.
    pub fn load(path: PathBuf, err: LoadError) -> Self {
        match err {
            LoadError::Decode(source) => AppError::Decode { path, source },
            LoadError::Invalid(source) => AppError::InvalidImage { path, source },
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
