//! Error types for kernel operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, meshing or writing a shape.
#[derive(Error, Debug)]
pub enum KernelError {
    /// The STEP file could not be read.
    #[error("cannot read '{}'", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid ISO 10303-21 text.
    #[error("invalid STEP data: {0}")]
    Parse(String),

    /// The input parsed but holds no DATA section.
    #[error("STEP file contains no data section")]
    NoData,

    /// Meshing tolerance is zero, negative or not finite.
    #[error("invalid tolerance value '{0}'")]
    InvalidTolerance(f64),

    /// The kernel's STL writer failed.
    #[error("STL writer failed: {0}")]
    StlWrite(String),
}

impl KernelError {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// Result type for kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;
