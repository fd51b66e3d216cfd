//! Error types for the crate.
//!
//! Encoding and decoding are total over their well-formed inputs, so the only
//! errors are contract violations caught at a checked boundary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value wider than the information word was offered to the encoder
    #[error("information word {value:#04x} does not fit in {bits} bits")]
    InfoWordOutOfRange { value: u8, bits: u32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
