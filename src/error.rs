//! Error kinds shared by the accumulator core, the raster codec and the tools.
use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions of a transform run. None of them is retried.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid raster: expected {expected}, found {found}")]
    Format {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("cannot allocate parameter space of shape {shape:?}")]
    Allocation { shape: Vec<usize> },

    #[error("{0}")]
    Usage(String),

    #[error("Failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid dimension `{name}`: {reason}")]
    InvalidDimension { name: String, reason: String },

    #[error("Failed to save {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to serialize report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TransformError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TransformError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(
        path: impl Into<PathBuf>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        TransformError::Format {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
