use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AppError;

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("Hardcoded year pattern should always compile"));

/// A championship year, or the provider's `current` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Season {
    #[default]
    Current,
    Year(u16),
}

impl Season {
    /// # Errors
    ///
    /// Will return `Err` if `raw` is neither a four-digit year nor `current`
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("current") {
            return Ok(Self::Current);
        }
        if YEAR_RE.is_match(trimmed) {
            if let Ok(year) = trimmed.parse::<u16>() {
                return Ok(Self::Year(year));
            }
        }
        Err(AppError::InvalidSeason(raw.to_string()))
    }

    /// The path segment the provider expects.
    #[must_use]
    pub fn as_segment(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Current => write!(f, "current"),
            Season::Year(y) => write!(f, "{y:04}"),
        }
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
