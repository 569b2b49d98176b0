use crate::error::AutoSemverError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which component of the highest tag gets incremented.
///
/// Major is deliberately absent: this tool never produces a new major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IncrementTarget {
    Minor,
    #[default]
    Patch,
}

impl FromStr for IncrementTarget {
    type Err = AutoSemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minor" => Ok(IncrementTarget::Minor),
            "patch" => Ok(IncrementTarget::Patch),
            other => Err(AutoSemverError::InvalidIncrementTarget(other.to_string())),
        }
    }
}

impl fmt::Display for IncrementTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncrementTarget::Minor => f.write_str("minor"),
            IncrementTarget::Patch => f.write_str("patch"),
        }
    }
}
