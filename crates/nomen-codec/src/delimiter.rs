//! Validated delimiter characters
//!
//! Provides [`Delimiter`], a single-character delimiter that is guaranteed
//! not to be the escape character.

use nomen_contract::{require, ContractResult, ContractViolation};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The one fixed escape character, reserved system-wide
///
/// It marks an immediately following delimiter or escape character as
/// literal and can never be chosen as a delimiter.
pub const ESCAPE_CHARACTER: char = '\\';

/// The fixed delimiter of the machine-readable data-string form
pub const DEFAULT_DELIMITER: char = '.';

/// A single-character component delimiter
///
/// Constructing a `Delimiter` is the only place delimiter validity is
/// checked; everything downstream can rely on it. `char` already rules out
/// multi-character input, so the constructor only has to reject the escape
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Delimiter(char);

impl Delimiter {
    /// The delimiter of the data-string form
    pub const DEFAULT: Self = Self(DEFAULT_DELIMITER);

    /// Create a delimiter from a character
    ///
    /// # Errors
    /// Returns a precondition violation if `c` is the escape character.
    #[inline]
    pub fn new(c: char) -> ContractResult<Self> {
        require(
            c != ESCAPE_CHARACTER,
            "escape character cannot be the delimiter",
        )?;
        Ok(Self(c))
    }

    /// The underlying character
    #[inline]
    #[must_use]
    pub const fn get(self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Delimiter {
    type Err = ContractViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(ContractViolation::precondition(
                "delimiter must be a single character",
            )),
        }
    }
}

impl serde::Serialize for Delimiter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_char(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Delimiter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let c = char::deserialize(deserializer)?;
        Self::new(c).map_err(serde::de::Error::custom)
    }
}
