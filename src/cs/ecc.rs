//! Error correction code implementations.
//!
//! This module provides a fixed-size (8,4) linear block code:
//! - Encoding of 4-bit information words through a generator matrix
//! - A codebook of all 16 valid codewords, built at compile time
//! - Maximum-likelihood (nearest codeword) decoding
//!
//! # Error Correction Algorithms
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! # Examples
//!
//! ```rust
//! use linear84::ecc::{BlockCode, InfoWord, CODEBOOK};
//!
//! let info = InfoWord::new(9).unwrap();
//! let sent = CODEBOOK.encode(info);
//! let received = sent.flip(6);
//! assert_eq!(BlockCode::decode(&CODEBOOK, received), info);
//! ```

pub use crate::error::Result;

/// Trait for fixed-length block codes
pub trait BlockCode {
    /// Information word accepted by the encoder
    type Message;
    /// Codeword produced by the encoder and consumed by the decoder
    type Word;

    /// Codeword length in bits (n)
    const LENGTH: usize;
    /// Information length in bits (k)
    const DIMENSION: usize;

    /// Encode an information word into a codeword
    fn encode(&self, message: Self::Message) -> Self::Word;

    /// Decode a received word into the most likely information word
    fn decode(&self, received: Self::Word) -> Self::Message;

    /// Code rate k/n
    fn rate(&self) -> f64 {
        Self::DIMENSION as f64 / Self::LENGTH as f64
    }
}

/// (8,4) linear block code with maximum-likelihood decoding
pub mod linear84;
pub use linear84::{
    build_codebook, codebook, decode, encode, encode_checked, Codebook, Codeword, Decoded,
    InfoWord, CODEBOOK, GENERATOR,
};
