use serde::{Deserialize, Serialize};

use crate::shared::wire::{de_opt_int, de_string};

/// Project state read back from the blockchain box storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRecord {
    #[serde(default, deserialize_with = "de_opt_int")]
    pub budget: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_int")]
    pub spent: Option<i64>,
    /// Hex SHA-256 of the project details at sync time
    #[serde(default, deserialize_with = "de_string")]
    pub hash: String,
    #[serde(default)]
    pub verified: bool,
}

impl ChainRecord {
    /// Compare the on-chain budget with the locally stored one.
    ///
    /// Both sides are compared as integers (the local value is truncated).
    /// A record without a readable budget never matches.
    pub fn compare(&self, local_budget: f64) -> ChainOutcome {
        let local = local_budget
            .is_finite()
            .then(|| local_budget.trunc() as i64);
        match (self.budget, local) {
            (Some(chain), Some(local)) if chain == local => ChainOutcome::Verified,
            _ => ChainOutcome::Mismatch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChainOutcome {
    Verified,
    Mismatch,
}

impl ChainOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            ChainOutcome::Verified => "VERIFIED",
            ChainOutcome::Mismatch => "MISMATCH",
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, ChainOutcome::Verified)
    }
}
