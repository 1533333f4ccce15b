//! Error types for band decoding

use thiserror::Error;

/// Result type for band decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding a band descriptor
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer bytes remain than the field requires
    #[error("{field}: truncated at offset {offset}, needed {needed} bytes, {available} available")]
    Truncated {
        field: &'static str,
        offset: u64,
        needed: usize,
        available: usize,
    },

    /// Field bytes cannot be interpreted as the declared type
    #[error("{field}: malformed value {value:?} at offset {offset}")]
    Malformed {
        field: &'static str,
        offset: u64,
        value: String,
    },

    /// Lookup table index outside `[0, count)`
    #[error("LUT index {index} out of range ({count} LUTs)")]
    LutIndexOutOfRange { index: usize, count: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
