pub mod cs;
pub mod error;

pub use cs::ecc;
pub use cs::ecc::linear84::{
    build_codebook, codebook, decode, encode, encode_checked, Codebook, Codeword, Decoded,
    InfoWord, CODEBOOK,
};
pub use error::{Error, Result};
