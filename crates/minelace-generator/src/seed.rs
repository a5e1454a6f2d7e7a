//! Reproducible seeds for board generation.

use std::{fmt, str::FromStr};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed fixing every random choice of board generation.
///
/// Seeds display as 64 hexadecimal digits and parse back from the same
/// form, so a board can be reproduced from nothing but its printed seed.
///
/// # Examples
///
/// ```
/// use minelace_generator::BoardSeed;
///
/// let seed = BoardSeed::from_phrase("first try");
/// let printed = seed.to_string();
///
/// assert_eq!(printed.len(), 64);
/// assert_eq!(printed.parse::<BoardSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives the seed a phrase denotes.
    ///
    /// The phrase is hashed with SHA-256, so any string names a seed and
    /// equal phrases always name the same one.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_generator::BoardSeed;
    ///
    /// assert_eq!(
    ///     BoardSeed::from_phrase("daily board"),
    ///     BoardSeed::from_phrase("daily board"),
    /// );
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the deterministic generator this seed denotes.
    #[must_use]
    pub fn to_rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

// 64 lowercase hexadecimal digits, the parseable form.
impl fmt::Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// An error parsing a [`BoardSeed`] from its hexadecimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardSeedError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hexadecimal digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected input, in bytes.
        len: usize,
    },
    /// The input contains a character outside `0-9a-fA-F`.
    #[display("seed contains a non-hexadecimal character at position {index}")]
    InvalidDigit {
        /// Byte position of the offending character.
        index: usize,
    },
}

impl FromStr for BoardSeed {
    type Err = ParseBoardSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseBoardSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let hi = hex_digit(s.as_bytes(), 2 * i)?;
            let lo = hex_digit(s.as_bytes(), 2 * i + 1)?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_digit(bytes: &[u8], index: usize) -> Result<u8, ParseBoardSeedError> {
    match bytes[index] {
        ch @ b'0'..=b'9' => Ok(ch - b'0'),
        ch @ b'a'..=b'f' => Ok(ch - b'a' + 10),
        ch @ b'A'..=b'F' => Ok(ch - b'A' + 10),
        _ => Err(ParseBoardSeedError::InvalidDigit { index }),
    }
}
