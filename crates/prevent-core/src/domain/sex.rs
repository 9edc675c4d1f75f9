//! Sex stratification.

use std::fmt;
use std::str::FromStr;

use crate::error::RiskError;
use crate::normalize::normalize_sex;

/// Sex used to select a coefficient set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Canonical lowercase spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Sex::Female => 0,
            Sex::Male => 1,
        }
    }
}

impl FromStr for Sex {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_sex(s)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
