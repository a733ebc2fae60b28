//! Contract record — the entity every other module reads from
//!
//! A record is constructed from six required fields and then mutated in
//! place: parties come and go, terms grow or get rewritten, clause slots get
//! asserted one at a time, and the expiration date can move.
//!
//! The record never reaches out of process. Callers that share a record
//! across threads must serialize access themselves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clause::{ClauseKind, ClauseSlots};
use crate::config::DatePolicy;
use crate::{Error, Result};

/// A contract and its asserted clauses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    name: String,
    parties: Vec<String>,
    effective_date: NaiveDate,
    expiration_date: NaiveDate,
    terms: String,
    governing_law: String,
    #[serde(default)]
    clauses: ClauseSlots,
    #[serde(default)]
    date_policy: DatePolicy,
}

impl ContractRecord {
    /// Build a record under the permissive date policy.
    ///
    /// The date range is taken as given, even when `effective_date` falls
    /// after `expiration_date`. Use [`ContractRecord::with_policy`] to reject
    /// inverted ranges.
    pub fn new(
        name: impl Into<String>,
        parties: Vec<String>,
        effective_date: NaiveDate,
        expiration_date: NaiveDate,
        terms: impl Into<String>,
        governing_law: impl Into<String>,
    ) -> Self {
        let record = ContractRecord {
            name: name.into(),
            parties,
            effective_date,
            expiration_date,
            terms: terms.into(),
            governing_law: governing_law.into(),
            clauses: ClauseSlots::default(),
            date_policy: DatePolicy::Permissive,
        };
        if effective_date > expiration_date {
            warn!(
                contract = %record.name,
                %effective_date,
                %expiration_date,
                "contract constructed with an inverted date range"
            );
        }
        record
    }

    /// Build a record under an explicit date policy.
    ///
    /// # Errors
    /// Returns `InvalidDateRange` under [`DatePolicy::Strict`] when the
    /// effective date falls after the expiration date.
    pub fn with_policy(
        name: impl Into<String>,
        parties: Vec<String>,
        effective_date: NaiveDate,
        expiration_date: NaiveDate,
        terms: impl Into<String>,
        governing_law: impl Into<String>,
        policy: DatePolicy,
    ) -> Result<Self> {
        let mut record = Self::new(
            name,
            parties,
            effective_date,
            expiration_date,
            terms,
            governing_law,
        );
        record.set_date_policy(policy)?;
        Ok(record)
    }

    /// Load a record from its JSON document form.
    ///
    /// The document's own `date_policy` is honored.
    pub fn from_json(text: &str) -> Result<Self> {
        let record: ContractRecord = serde_json::from_str(text)?;
        record.check_date_range()?;
        debug!(contract = %record.name, policy = %record.date_policy, "contract loaded");
        Ok(record)
    }

    /// Render the record as a pretty-printed JSON document
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // ── Accessors ─────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parties involved in the contract, in insertion order
    pub fn parties(&self) -> &[String] {
        &self.parties
    }

    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    pub fn terms(&self) -> &str {
        &self.terms
    }

    pub fn governing_law(&self) -> &str {
        &self.governing_law
    }

    pub fn clauses(&self) -> &ClauseSlots {
        &self.clauses
    }

    pub fn clause(&self, kind: ClauseKind) -> Option<&str> {
        self.clauses.get(kind)
    }

    pub fn date_policy(&self) -> DatePolicy {
        self.date_policy
    }

    /// Switch date policy; switching to strict re-checks the current range.
    pub fn set_date_policy(&mut self, policy: DatePolicy) -> Result<()> {
        let previous = self.date_policy;
        self.date_policy = policy;
        if let Err(err) = self.check_date_range() {
            self.date_policy = previous;
            return Err(err);
        }
        Ok(())
    }

    fn check_date_range(&self) -> Result<()> {
        if self.date_policy.is_strict() && self.effective_date > self.expiration_date {
            return Err(Error::InvalidDateRange {
                effective: self.effective_date,
                expiration: self.expiration_date,
            });
        }
        Ok(())
    }

    // ── Dates & Governing Law ─────────────────────────────

    pub fn set_governing_law(&mut self, governing_law: impl Into<String>) {
        self.governing_law = governing_law.into();
        debug!(contract = %self.name, governing_law = %self.governing_law, "governing law set");
    }

    /// Move the expiration date later. Earlier or equal dates are ignored.
    ///
    /// Returns whether the expiration date changed.
    pub fn extend_expiration(&mut self, new_expiration: NaiveDate) -> bool {
        if new_expiration > self.expiration_date {
            debug!(
                contract = %self.name,
                from = %self.expiration_date,
                to = %new_expiration,
                "expiration extended"
            );
            self.expiration_date = new_expiration;
            true
        } else {
            false
        }
    }

    /// Bring the expiration date forward. Later or equal dates are ignored.
    ///
    /// Returns whether the expiration date changed.
    ///
    /// # Errors
    /// Under [`DatePolicy::Strict`], terminating before the effective date
    /// returns `InvalidDateRange` and leaves the record untouched.
    pub fn terminate(&mut self, termination_date: NaiveDate) -> Result<bool> {
        if termination_date >= self.expiration_date {
            return Ok(false);
        }
        if self.date_policy.is_strict() && termination_date < self.effective_date {
            return Err(Error::InvalidDateRange {
                effective: self.effective_date,
                expiration: termination_date,
            });
        }
        debug!(
            contract = %self.name,
            from = %self.expiration_date,
            to = %termination_date,
            "contract terminated early"
        );
        self.expiration_date = termination_date;
        Ok(true)
    }

    // ── Parties ───────────────────────────────────────────

    pub fn is_party(&self, party: &str) -> bool {
        self.parties.iter().any(|p| p == party)
    }

    /// Add a party unless already present. Returns whether it was added.
    pub fn add_party(&mut self, party: impl Into<String>) -> bool {
        let party = party.into();
        if self.is_party(&party) {
            return false;
        }
        debug!(contract = %self.name, %party, "party added");
        self.parties.push(party);
        true
    }

    /// Remove the first occurrence of a party. Returns whether it was removed.
    pub fn remove_party(&mut self, party: &str) -> bool {
        match self.parties.iter().position(|p| p == party) {
            Some(index) => {
                self.parties.remove(index);
                debug!(contract = %self.name, %party, "party removed");
                true
            }
            None => false,
        }
    }

    // ── Terms ─────────────────────────────────────────────

    /// Append a term on its own line
    pub fn add_term(&mut self, term: &str) {
        self.terms.push('\n');
        self.terms.push_str(term);
        debug!(contract = %self.name, "term added");
    }

    /// Replace every occurrence of `existing` with `replacement`.
    ///
    /// Returns whether anything was replaced.
    pub fn modify_term(&mut self, existing: &str, replacement: &str) -> bool {
        if existing.is_empty() || !self.terms.contains(existing) {
            return false;
        }
        self.terms = self.terms.replace(existing, replacement);
        debug!(contract = %self.name, "term modified");
        true
    }

    // ── Clause Assertion ──────────────────────────────────

    /// Assert any clause slot, overwriting previous text
    pub fn assert_clause(&mut self, kind: ClauseKind, text: impl Into<String>) {
        self.clauses.set(kind, text);
        debug!(contract = %self.name, clause = %kind, "clause asserted");
    }

    pub fn assert_breach_claim(&mut self, text: impl Into<String>) {
        self.assert_clause(ClauseKind::BreachClaim, text);
    }

    pub fn assert_misrepresentation(&mut self, text: impl Into<String>) {
        self.assert_clause(ClauseKind::Misrepresentation, text);
    }

    pub fn assert_warranty(&mut self, text: impl Into<String>) {
        self.assert_clause(ClauseKind::Warranty, text);
    }

    pub fn assert_arbitration_clause(&mut self, text: impl Into<String>) {
        self.assert_clause(ClauseKind::ArbitrationClause, text);
    }

    pub fn assert_choice_of_forum(&mut self, text: impl Into<String>) {
        self.assert_clause(ClauseKind::ChoiceOfForum, text);
    }

    pub fn assert_payment_clause(&mut self, text: impl Into<String>) {
        self.assert_clause(ClauseKind::PaymentClause, text);
    }

    pub fn assert_confidentiality_clause(&mut self, text: impl Into<String>) {
        self.assert_clause(ClauseKind::ConfidentialityClause, text);
    }

    pub fn assert_force_majeure_clause(&mut self, text: impl Into<String>) {
        self.assert_clause(ClauseKind::ForceMajeureClause, text);
    }

    pub fn assert_termination_clause(&mut self, text: impl Into<String>) {
        self.assert_clause(ClauseKind::TerminationClause, text);
    }

    pub fn assert_liquidated_damages_clause(&mut self, text: impl Into<String>) {
        self.assert_clause(ClauseKind::LiquidatedDamagesClause, text);
    }

    pub fn assert_indemnification_clause(&mut self, text: impl Into<String>) {
        self.assert_clause(ClauseKind::IndemnificationClause, text);
    }

    pub fn arbitration_clause(&self) -> Option<&str> {
        self.clauses.get(ClauseKind::ArbitrationClause)
    }

    pub fn choice_of_forum(&self) -> Option<&str> {
        self.clauses.get(ClauseKind::ChoiceOfForum)
    }
}

impl std::fmt::Display for ContractRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = |kind| self.clauses.get(kind).unwrap_or("None");
        writeln!(f, "Contract Name: {}", self.name)?;
        writeln!(f, "Parties: {}", self.parties.join(", "))?;
        writeln!(f, "Effective Date: {}", self.effective_date)?;
        writeln!(f, "Expiration Date: {}", self.expiration_date)?;
        writeln!(f, "Governing Law: {}", self.governing_law)?;
        writeln!(f, "Breach Claim: {}", slot(ClauseKind::BreachClaim))?;
        writeln!(f, "Misrepresentation: {}", slot(ClauseKind::Misrepresentation))?;
        writeln!(f, "Warranty: {}", slot(ClauseKind::Warranty))?;
        writeln!(f, "Arbitration Clause: {}", slot(ClauseKind::ArbitrationClause))?;
        write!(f, "Choice of Forum: {}", slot(ClauseKind::ChoiceOfForum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, sample_record};

    #[test]
    fn test_add_party_is_deduplicated() {
        let mut record = sample_record();
        assert!(record.add_party("Carol"));
        assert!(!record.add_party("Carol"));
        assert_eq!(record.parties(), &["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_add_then_remove_restores_parties() {
        let mut record = sample_record();
        let before = record.parties().to_vec();
        record.add_party("Dave");
        record.remove_party("Dave");
        assert_eq!(record.parties(), before.as_slice());
    }

    #[test]
    fn test_remove_absent_party_is_noop() {
        let mut record = sample_record();
        assert!(!record.remove_party("Mallory"));
        assert_eq!(record.parties().len(), 2);
        assert!(record.is_party("Alice"));
        assert!(!record.is_party("Mallory"));
    }

    #[test]
    fn test_add_term_appends_line() {
        let mut record = sample_record();
        record.add_term("Delivery within 10 days.");
        assert_eq!(
            record.terms(),
            "Goods shall be delivered monthly.\nDelivery within 10 days."
        );
    }

    #[test]
    fn test_modify_term_replaces_all_occurrences() {
        let mut record = sample_record();
        record.add_term("Invoices are issued monthly.");
        assert!(record.modify_term("monthly", "weekly"));
        assert_eq!(
            record.terms(),
            "Goods shall be delivered weekly.\nInvoices are issued weekly."
        );
    }

    #[test]
    fn test_modify_missing_term_is_noop() {
        let mut record = sample_record();
        assert!(!record.modify_term("annually", "weekly"));
        assert_eq!(record.terms(), "Goods shall be delivered monthly.");
    }

    #[test]
    fn test_extend_only_moves_later() {
        let mut record = sample_record();
        assert!(!record.extend_expiration(date(2024, 6, 1)));
        assert!(!record.extend_expiration(date(2024, 12, 31)));
        assert_eq!(record.expiration_date(), date(2024, 12, 31));
        assert!(record.extend_expiration(date(2025, 6, 30)));
        assert_eq!(record.expiration_date(), date(2025, 6, 30));
    }

    #[test]
    fn test_terminate_only_moves_earlier() {
        let mut record = sample_record();
        assert_eq!(record.terminate(date(2025, 1, 1)), Ok(false));
        assert_eq!(record.terminate(date(2024, 12, 31)), Ok(false));
        assert_eq!(record.terminate(date(2024, 9, 30)), Ok(true));
        assert_eq!(record.expiration_date(), date(2024, 9, 30));
    }

    #[test]
    fn test_permissive_terminate_before_effective_date() {
        let mut record = sample_record();
        assert_eq!(record.terminate(date(2023, 6, 1)), Ok(true));
        assert_eq!(record.expiration_date(), date(2023, 6, 1));
    }

    #[test]
    fn test_strict_terminate_before_effective_date_rejected() {
        let mut record = sample_record();
        record.set_date_policy(DatePolicy::Strict).unwrap();
        let err = record.terminate(date(2023, 6, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidDateRange { .. }));
        assert_eq!(record.expiration_date(), date(2024, 12, 31));
    }

    #[test]
    fn test_permissive_accepts_inverted_range() {
        let record = ContractRecord::new(
            "Inverted",
            vec![],
            date(2024, 12, 31),
            date(2024, 1, 1),
            "",
            "",
        );
        assert_eq!(record.date_policy(), DatePolicy::Permissive);
    }

    #[test]
    fn test_strict_rejects_inverted_range() {
        let result = ContractRecord::with_policy(
            "Inverted",
            vec![],
            date(2024, 12, 31),
            date(2024, 1, 1),
            "",
            "",
            DatePolicy::Strict,
        );
        assert_eq!(
            result,
            Err(Error::InvalidDateRange {
                effective: date(2024, 12, 31),
                expiration: date(2024, 1, 1),
            })
        );
    }

    #[test]
    fn test_failed_policy_switch_keeps_previous_policy() {
        let mut record = ContractRecord::new(
            "Inverted",
            vec![],
            date(2024, 12, 31),
            date(2024, 1, 1),
            "",
            "",
        );
        assert!(record.set_date_policy(DatePolicy::Strict).is_err());
        assert_eq!(record.date_policy(), DatePolicy::Permissive);
    }

    #[test]
    fn test_assert_overwrites_clause() {
        let mut record = sample_record();
        record.assert_arbitration_clause("ICC arbitration");
        record.assert_arbitration_clause("LCIA arbitration");
        assert_eq!(record.arbitration_clause(), Some("LCIA arbitration"));
        assert_eq!(record.choice_of_forum(), None);
    }

    #[test]
    fn test_set_governing_law() {
        let mut record = sample_record();
        record.set_governing_law("Laws of Ontario");
        assert_eq!(record.governing_law(), "Laws of Ontario");
    }

    #[test]
    fn test_json_document_loads_with_defaults() {
        let text = r#"{
            "name": "Supply Agreement",
            "parties": ["Alice", "Bob"],
            "effective_date": "2024-01-01",
            "expiration_date": "2024-12-31",
            "terms": "Goods shall be delivered monthly.",
            "governing_law": "Laws of England and Wales"
        }"#;
        let record = ContractRecord::from_json(text).unwrap();
        assert_eq!(record, sample_record());
    }

    #[test]
    fn test_json_document_with_strict_inverted_range_fails() {
        let text = r#"{
            "name": "Inverted",
            "parties": [],
            "effective_date": "2024-12-31",
            "expiration_date": "2024-01-01",
            "terms": "",
            "governing_law": "",
            "date_policy": "strict"
        }"#;
        let err = ContractRecord::from_json(text).unwrap_err();
        assert!(matches!(err, Error::InvalidDateRange { .. }));
    }

    #[test]
    fn test_json_document_missing_field_fails() {
        let err = ContractRecord::from_json(r#"{"name": "Incomplete"}"#).unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_clauses() {
        let mut record = sample_record();
        record.assert_warranty("Goods are fit for purpose.");
        let json = record.to_json_pretty().unwrap();
        assert_eq!(ContractRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn test_display_lists_unset_clauses_as_none() {
        let mut record = sample_record();
        record.assert_warranty("Goods are fit for purpose.");
        let text = record.to_string();
        assert!(text.starts_with("Contract Name: Supply Agreement\nParties: Alice, Bob\n"));
        assert!(text.contains("Effective Date: 2024-01-01"));
        assert!(text.contains("Warranty: Goods are fit for purpose."));
        assert!(text.contains("Breach Claim: None"));
        assert!(text.ends_with("Choice of Forum: None"));
    }
}
