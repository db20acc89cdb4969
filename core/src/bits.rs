//! Validated binary strings.
//!
//! A [BitString] is a short, human-entered sequence of `'0'` and `'1'` characters. The only
//! way to obtain one is through [validate_binary] (or [str::parse]), so any value of the type
//! is known to be non-empty, binary, and within [MIN_BITS]..=[MAX_BITS] characters long.

use crate::Error;
use core::{fmt, str::FromStr};
use tracing::debug;

/// Minimum number of bits accepted.
pub const MIN_BITS: usize = 4;

/// Maximum number of bits accepted.
pub const MAX_BITS: usize = 32;

/// An immutable sequence of bits entered as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitString {
    /// Only contains `'0'` and `'1'`, so byte length equals bit length.
    text: String,
}

impl BitString {
    /// Returns the bits as text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of bits.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns the number of set bits.
    pub fn ones(&self) -> usize {
        self.bits().filter(|bit| *bit).count()
    }

    /// Returns the number of unset bits.
    pub fn zeros(&self) -> usize {
        self.len() - self.ones()
    }

    /// Iterates over the bits, most significant (leftmost) first.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.text.bytes().map(|b| b == b'1')
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for BitString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_binary(s)
    }
}

/// Validate user-provided binary data.
///
/// Surrounding whitespace is ignored. Checks are applied in order: emptiness, then the
/// character set (reporting the first offending character), then the length window.
pub fn validate_binary(s: &str) -> Result<BitString, Error> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(Error::Empty);
    }
    if let Some((position, c)) = trimmed
        .chars()
        .enumerate()
        .find(|(_, c)| *c != '0' && *c != '1')
    {
        return Err(Error::InvalidCharacter(c, position));
    }

    // All characters are ASCII at this point
    let found = trimmed.len();
    if found < MIN_BITS {
        return Err(Error::TooShort {
            found,
            min: MIN_BITS,
        });
    }
    if found > MAX_BITS {
        return Err(Error::TooLong {
            found,
            max: MAX_BITS,
        });
    }
    debug!(bits = found, "accepted binary data");
    Ok(BitString {
        text: trimmed.to_string(),
    })
}
