//! Validity and status of a record at a point in time
//!
//! `is_valid` is inclusive on both ends; `evaluate_status` only reports
//! expiry strictly after the expiration date. The two agree on the
//! expiration date itself but diverge on an inverted date range: such a
//! record is never valid, while its status depends on which bound is
//! checked first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ContractRecord;

/// Status of a contract at a given date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    NotYetEffective,
    Expired,
    InEffect,
}

impl ContractStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ContractStatus::NotYetEffective => "Contract has not yet become effective.",
            ContractStatus::Expired => "Contract has expired.",
            ContractStatus::InEffect => "Contract is in effect.",
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ContractRecord {
    /// True iff `effective_date <= current <= expiration_date`
    pub fn is_valid(&self, current: NaiveDate) -> bool {
        self.effective_date() <= current && current <= self.expiration_date()
    }

    /// Status at `current`; the not-yet-effective check wins over expiry
    pub fn evaluate_status(&self, current: NaiveDate) -> ContractStatus {
        if current < self.effective_date() {
            ContractStatus::NotYetEffective
        } else if current > self.expiration_date() {
            ContractStatus::Expired
        } else {
            ContractStatus::InEffect
        }
    }
}
