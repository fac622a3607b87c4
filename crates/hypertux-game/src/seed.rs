use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// The seed of a board's random number generator.
///
/// A board created with the same seed, size, walls, and placement strategies
/// places the same actors and goals. Seeds are written as 64 lowercase hex
/// characters.
///
/// # Examples
///
/// ```
/// use hypertux_game::BoardSeed;
///
/// let seed = BoardSeed::from_u64(42);
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<BoardSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Expands a `u64` into a seed, for reproducible tests and tools.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<[u8; 32]> for BoardSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`BoardSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardSeedParseError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the input in bytes.
        len: usize,
    },
    /// The input contains a non-hex character.
    #[display("invalid hex digit at index {index}")]
    InvalidHexDigit {
        /// Byte offset of the offending character.
        index: usize,
    },
}

impl FromStr for BoardSeed {
    type Err = BoardSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(BoardSeedParseError::InvalidLength { len: s.len() });
        }
        let digits = s.as_bytes();
        let nibble = |index: usize| {
            char::from(digits[index])
                .to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(BoardSeedParseError::InvalidHexDigit { index })
        };
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (nibble(2 * i)? << 4) | nibble(2 * i + 1)?;
        }
        Ok(Self(bytes))
    }
}
