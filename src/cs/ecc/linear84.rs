//! (8,4) linear block code with maximum-likelihood decoding.
//!
//! Every 4-bit information word maps to an 8-bit codeword. The information bits
//! are carried unchanged in bits 0-3 and four parity bits occupy bits 4-7:
//!
//! ```text
//! b4 = b0 + b1
//! b5 = b0 + b2
//! b6 = b1 + b2 + b3
//! b7 = b0 + b1 + b2 + b3
//! ```
//!
//! where `+` is addition modulo 2. The minimum distance between any two
//! codewords is 3, so every single-bit error is corrected.
//!
//! Decoding searches the whole codebook for the entry closest in Hamming
//! distance to the received word. Under a binary symmetric channel this is the
//! maximum-likelihood choice. Beyond one bit error the decoder still returns
//! its best guess, it just isn't guaranteed to be the word that was sent.
//!
//! # Example
//!
//! ```
//! use linear84::{Codeword, InfoWord, CODEBOOK};
//!
//! let info = InfoWord::new(0b1010).unwrap();
//! let sent = linear84::encode(info);
//! assert_eq!(sent.bits(), 0x1A);
//!
//! // One flipped bit is always corrected
//! assert_eq!(CODEBOOK.decode(sent.flip(3)), info);
//!
//! // The all-ones word is nearest to the codeword for 14
//! assert_eq!(CODEBOOK.decode(Codeword::from_bits(0xFF)).value(), 14);
//! ```

use crate::cs::ecc::{BlockCode, Result};
use crate::error::Error;
use bitvec::prelude::*;
use bitvec::view::BitView;
use std::fmt;
use std::ops::Index;

/// Number of information bits per codeword
pub const INFO_BITS: u32 = 4;

/// Number of bits in a codeword
pub const CODEWORD_BITS: u32 = 8;

/// Number of valid codewords
pub const CODEBOOK_SIZE: usize = 1 << INFO_BITS;

/// Mask selecting the information field of a codeword
pub const INFO_MASK: u8 = 0x0F;

/// Generator matrix, one row per information bit.
///
/// ```text
/// b0 b1 b2 b3 b4 b5 b6 b7
///  1  0  0  0  1  1  0  1
///  0  1  0  0  1  0  1  1
///  0  0  1  0  0  1  1  1
///  0  0  0  1  0  0  1  1
/// ```
///
/// Row `r` is the codeword for the information word with only bit `r` set.
pub const GENERATOR: [Codeword; INFO_BITS as usize] = [
    Codeword(0b1011_0001),
    Codeword(0b1101_0010),
    Codeword(0b1110_0100),
    Codeword(0b1100_1000),
];

/// A 4-bit information word.
///
/// The range is checked on construction, so a value held in an `InfoWord`
/// always encodes without truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct InfoWord(u8);

impl InfoWord {
    pub const MIN: InfoWord = InfoWord(0);
    pub const MAX: InfoWord = InfoWord(INFO_MASK);

    /// Creates an information word, rejecting values wider than 4 bits.
    pub fn new(value: u8) -> Result<Self> {
        if value > INFO_MASK {
            return Err(Error::InfoWordOutOfRange {
                value,
                bits: INFO_BITS,
            });
        }
        Ok(InfoWord(value))
    }

    const fn from_low_bits(value: u8) -> Self {
        InfoWord(value & INFO_MASK)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// All information words in ascending order
    pub fn all() -> impl Iterator<Item = InfoWord> {
        (0..=INFO_MASK).map(InfoWord)
    }

    /// Returns information bit `index` (0-3).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`INFO_BITS`].
    pub fn bit(self, index: usize) -> bool {
        assert!(index < INFO_BITS as usize, "information bit {index} out of range");
        self.0.view_bits::<Lsb0>()[index]
    }
}

impl TryFrom<u8> for InfoWord {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        InfoWord::new(value)
    }
}

impl From<InfoWord> for u8 {
    fn from(info: InfoWord) -> u8 {
        info.0
    }
}

impl fmt::Display for InfoWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An 8-bit word: information bits in 0-3, parity bits in 4-7.
///
/// Any bit pattern is accepted so a `Codeword` can also stand for a corrupted
/// received word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Codeword(u8);

impl Codeword {
    pub const fn from_bits(bits: u8) -> Self {
        Codeword(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Information field (bits 0-3)
    pub const fn info(self) -> InfoWord {
        InfoWord::from_low_bits(self.0)
    }

    /// Parity field (bits 4-7), shifted down to the low nibble
    pub const fn parity(self) -> u8 {
        self.0 >> INFO_BITS
    }

    /// Number of bit positions in which the two words differ
    pub const fn distance(self, other: Codeword) -> u32 {
        (self.0 ^ other.0).count_ones()
    }

    /// Returns bit `index` (0-7).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`CODEWORD_BITS`].
    pub fn bit(self, index: usize) -> bool {
        assert!(index < CODEWORD_BITS as usize, "codeword bit {index} out of range");
        self.0.view_bits::<Lsb0>()[index]
    }

    /// Returns a copy with bit `index` inverted, simulating a channel error.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`CODEWORD_BITS`].
    pub const fn flip(self, index: u32) -> Codeword {
        assert!(index < CODEWORD_BITS, "codeword bit out of range");
        Codeword(self.0 ^ (1 << index))
    }
}

impl From<u8> for Codeword {
    fn from(bits: u8) -> Self {
        Codeword(bits)
    }
}

impl From<Codeword> for u8 {
    fn from(word: Codeword) -> u8 {
        word.0
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

impl fmt::LowerHex for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// Encodes an information word as the GF(2) product with [`GENERATOR`].
pub const fn encode(info: InfoWord) -> Codeword {
    let mut word = 0u8;
    let mut row = 0;
    while row < GENERATOR.len() {
        if info.0 & (1 << row) != 0 {
            word ^= GENERATOR[row].0;
        }
        row += 1;
    }
    Codeword(word)
}

/// Encodes a raw value, failing if it does not fit in 4 bits.
pub fn encode_checked(value: u8) -> Result<Codeword> {
    Ok(encode(InfoWord::new(value)?))
}

/// Result of a nearest-codeword search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Information field of the winning entry
    pub info: InfoWord,
    /// The winning codebook entry
    pub codeword: Codeword,
    /// Hamming distance from the received word to `codeword`
    pub distance: u32,
}

/// Table of codewords indexed by the information word they encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codebook {
    entries: [Codeword; CODEBOOK_SIZE],
}

/// Codebook of the (8,4) code, evaluated at compile time.
pub static CODEBOOK: Codebook = Codebook::build();

/// Shared codebook for the process
pub fn codebook() -> &'static Codebook {
    &CODEBOOK
}

/// Builds a fresh codebook. Prefer [`CODEBOOK`], which is identical.
pub fn build_codebook() -> Codebook {
    Codebook::build()
}

/// Decodes `received` against `codebook`. See [`Codebook::nearest`].
pub fn decode(codebook: &Codebook, received: Codeword) -> InfoWord {
    codebook.decode(received)
}

impl Codebook {
    /// Encodes every information word in ascending order.
    pub const fn build() -> Self {
        let mut entries = [Codeword(0); CODEBOOK_SIZE];
        let mut value = 0;
        while value < CODEBOOK_SIZE {
            entries[value] = encode(InfoWord(value as u8));
            value += 1;
        }
        Codebook { entries }
    }

    /// Assembles a codebook from an arbitrary table of 16 entries.
    ///
    /// Decoding returns the information field of whichever entry is nearest,
    /// so the entries need not come from [`encode`].
    pub fn from_codewords(codewords: &[Codeword]) -> Result<Self> {
        let entries: [Codeword; CODEBOOK_SIZE] = codewords.try_into().map_err(|_| {
            Error::InvalidInput(format!(
                "Codebook needs exactly {} codewords, got {}",
                CODEBOOK_SIZE,
                codewords.len()
            ))
        })?;
        log::debug!("assembled codebook from {} codewords", entries.len());
        Ok(Codebook { entries })
    }

    pub fn get(&self, info: InfoWord) -> Codeword {
        self.entries[info.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Codeword] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = Codeword> + '_ {
        self.entries.iter().copied()
    }

    /// Finds the entry at minimum Hamming distance from `received`.
    ///
    /// Entries are scanned in ascending index order and only a strictly
    /// smaller distance replaces the current best, so ties go to the
    /// smallest information word.
    pub fn nearest(&self, received: Codeword) -> Decoded {
        let first = self.entries[0];
        let mut best = Decoded {
            info: first.info(),
            codeword: first,
            distance: received.distance(first),
        };

        for &candidate in &self.entries[1..] {
            let distance = received.distance(candidate);
            if distance < best.distance {
                best = Decoded {
                    info: candidate.info(),
                    codeword: candidate,
                    distance,
                };
            }
        }

        log::trace!(
            "decoded {} as {} (codeword {}, distance {})",
            received,
            best.info,
            best.codeword,
            best.distance
        );
        best
    }

    /// Maximum-likelihood decode of `received`
    pub fn decode(&self, received: Codeword) -> InfoWord {
        self.nearest(received).info
    }

    /// Smallest Hamming distance between any two entries
    pub fn minimum_distance(&self) -> u32 {
        let mut minimum = CODEWORD_BITS;
        for (i, &a) in self.entries.iter().enumerate() {
            for &b in &self.entries[i + 1..] {
                minimum = minimum.min(a.distance(b));
            }
        }
        minimum
    }

    /// Number of bit errors guaranteed to be corrected
    pub fn correctable_errors(&self) -> u32 {
        self.minimum_distance().saturating_sub(1) / 2
    }
}

impl Default for Codebook {
    fn default() -> Self {
        Codebook::build()
    }
}

impl Index<InfoWord> for Codebook {
    type Output = Codeword;

    fn index(&self, info: InfoWord) -> &Codeword {
        &self.entries[info.0 as usize]
    }
}

impl<'a> IntoIterator for &'a Codebook {
    type Item = Codeword;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Codeword>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().copied()
    }
}

impl BlockCode for Codebook {
    type Message = InfoWord;
    type Word = Codeword;

    const LENGTH: usize = CODEWORD_BITS as usize;
    const DIMENSION: usize = INFO_BITS as usize;

    fn encode(&self, message: InfoWord) -> Codeword {
        self.get(message)
    }

    fn decode(&self, received: Codeword) -> InfoWord {
        self.nearest(received).info
    }
}
