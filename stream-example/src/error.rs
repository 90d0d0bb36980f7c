//! Error types for the example tools

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Example tool error type
#[derive(Error, Debug)]
pub enum ExampleError {
    /// I/O error while reading input or writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file could not be opened
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for the example tools
pub type Result<T> = std::result::Result<T, ExampleError>;
