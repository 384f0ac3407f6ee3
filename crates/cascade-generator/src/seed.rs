//! Reproducible seeds for collapse runs.

use std::fmt::{self, Display};
use std::str::FromStr;

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one collapse run.
///
/// The seed feeds the run's PCG stream, so a stored seed replays the exact
/// digit sequence it originally produced. Seeds render as 64 lowercase hex
/// digits and parse back from the same form.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use cascade_generator::SequenceSeed;
///
/// let seed = SequenceSeed::from_phrase("morning run");
/// let hex = seed.to_string();
/// assert_eq!(hex.len(), 64);
/// assert_eq!(SequenceSeed::from_str(&hex), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SequenceSeed([u8; 32]);

impl SequenceSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Samples a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives the seed for `phrase`. The same phrase always maps to the
    /// same seed.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl Display for SequenceSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for SequenceSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.as_bytes();
        if raw.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: raw.len() });
        }
        let mut bytes = [0; 32];
        for (i, pair) in raw.chunks_exact(2).enumerate() {
            let hi = hex_value(pair[0]).ok_or(ParseSeedError::InvalidDigit { pos: i * 2 })?;
            let lo = hex_value(pair[1]).ok_or(ParseSeedError::InvalidDigit { pos: i * 2 + 1 })?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Errors from parsing a hex seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 hex digits long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the rejected string, in bytes.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit at position {pos}")]
    InvalidDigit {
        /// Byte offset of the rejected character.
        pos: usize,
    },
}
