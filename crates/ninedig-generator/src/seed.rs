//! Reproducible seeds for puzzle generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::Rng as _;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed identifying one generation run.
///
/// The seed is the only source of randomness in [`PuzzleGenerator`]: it
/// derives one uncorrelated sub-seed per attempt (via SHA-256 over the seed
/// and the attempt index), and each sub-seed drives its own [`Pcg64`] stream.
/// Printing a puzzle's seed and parsing it back therefore regenerates the
/// identical puzzle.
///
/// The text form is 64 lowercase hex characters:
///
/// ```
/// use ninedig_generator::PuzzleSeed;
///
/// let hex = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
/// let seed: PuzzleSeed = hex.parse()?;
/// assert_eq!(seed.to_string(), hex);
/// # Ok::<(), ninedig_generator::ParseSeedError>(())
/// ```
///
/// [`PuzzleGenerator`]: crate::PuzzleGenerator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local entropy source.
    ///
    /// This is the one place ambient randomness enters the crate; everything
    /// downstream is a pure function of the returned seed.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Builds the random number generator driven by this seed.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }

    /// Derives the sub-seed for one generation attempt.
    ///
    /// Hashing seed-plus-index partitions the random stream so attempts stay
    /// uncorrelated and can run in any order (or in parallel).
    pub(crate) fn attempt_seed(self, attempt: u32) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(attempt.to_le_bytes());
        Self(hasher.finalize().into())
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error parsing a [`PuzzleSeed`] from its hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input was not exactly 64 characters.
    #[display("expected 64 hex characters, found {len}")]
    WrongLength {
        /// Number of characters found.
        len: usize,
    },
    /// The input contained a non-hex character.
    #[display("invalid hex digit at offset {index}")]
    InvalidHex {
        /// Byte offset of the first invalid character.
        index: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, ParseSeedError> {
        if s.len() != 64 {
            return Err(ParseSeedError::WrongLength {
                len: s.chars().count(),
            });
        }
        if let Some(index) = s.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidHex { index });
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|_| ParseSeedError::InvalidHex { index: i * 2 })?;
        }
        Ok(Self(bytes))
    }
}
