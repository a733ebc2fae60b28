//! Record configuration.

use serde::{Deserialize, Serialize};

/// How a record treats the `effective_date <= expiration_date` invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePolicy {
    /// Never checked; an inverted range yields a record that is never valid.
    #[default]
    Permissive,
    /// Rejected at construction, on load, and when terminating before the
    /// effective date.
    Strict,
}

impl DatePolicy {
    pub fn is_strict(self) -> bool {
        matches!(self, DatePolicy::Strict)
    }
}

impl std::fmt::Display for DatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatePolicy::Permissive => write!(f, "permissive"),
            DatePolicy::Strict => write!(f, "strict"),
        }
    }
}
