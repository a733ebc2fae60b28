//! Record verifier — checks cross-field invariants the record itself never enforces
//!
//! Construction and mutation accept whatever they are given (under the
//! permissive date policy). The verifier reports what a reviewer would flag,
//! accumulating every diagnostic rather than stopping at the first one.
//!
//! # Checks
//!
//! 1. **Dates** — effective date must not fall after the expiration date
//! 2. **Identity** — contract name must not be blank
//! 3. **Parties** — no duplicates; an empty party list is a warning
//! 4. **Governing law** — blank governing law is a warning
//! 5. **Clauses** — asserted clauses with blank text are warnings

use std::collections::BTreeSet;

use serde::Serialize;

use crate::ContractRecord;

// ── Verification Result Types ─────────────────────────────

/// Result of record verification — accumulates all diagnostics
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl VerificationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Returns true if no errors were found (warnings are OK)
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect()
    }

    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect()
    }

    fn add_error(&mut self, kind: DiagnosticKind, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            kind,
            message,
        });
    }

    fn add_warning(&mut self, kind: DiagnosticKind, message: String) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            kind,
            message,
        });
    }
}

/// A single verification diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{} [{}]: {}", prefix, self.kind, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// Category of verification issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    DateRange,
    Identity,
    Parties,
    GoverningLaw,
    Clause,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DiagnosticKind::DateRange => write!(f, "dates"),
            DiagnosticKind::Identity => write!(f, "identity"),
            DiagnosticKind::Parties => write!(f, "parties"),
            DiagnosticKind::GoverningLaw => write!(f, "governing-law"),
            DiagnosticKind::Clause => write!(f, "clause"),
        }
    }
}

// ── Public API ────────────────────────────────────────────

/// Verify a record's cross-field invariants.
///
/// Runs every check regardless of the record's date policy.
pub fn verify(record: &ContractRecord) -> VerificationResult {
    let mut result = VerificationResult::new();

    verify_dates(record, &mut result);
    verify_identity(record, &mut result);
    verify_parties(record, &mut result);
    verify_governing_law(record, &mut result);
    verify_clauses(record, &mut result);

    tracing::debug!(
        contract = %record.name(),
        errors = result.errors().len(),
        warnings = result.warnings().len(),
        "contract verified"
    );
    result
}

// ── Checks ────────────────────────────────────────────────

fn verify_dates(record: &ContractRecord, result: &mut VerificationResult) {
    if record.effective_date() > record.expiration_date() {
        result.add_error(
            DiagnosticKind::DateRange,
            format!(
                "effective date {} is after expiration date {}; the contract can never be valid",
                record.effective_date(),
                record.expiration_date()
            ),
        );
    }
}

fn verify_identity(record: &ContractRecord, result: &mut VerificationResult) {
    if record.name().trim().is_empty() {
        result.add_error(
            DiagnosticKind::Identity,
            "contract name must not be empty".to_string(),
        );
    }
}

fn verify_parties(record: &ContractRecord, result: &mut VerificationResult) {
    if record.parties().is_empty() {
        result.add_warning(
            DiagnosticKind::Parties,
            "contract has no parties".to_string(),
        );
        return;
    }

    let mut seen = BTreeSet::new();
    for party in record.parties() {
        if party.trim().is_empty() {
            result.add_error(
                DiagnosticKind::Parties,
                "party name must not be empty".to_string(),
            );
        } else if !seen.insert(party.as_str()) {
            result.add_error(
                DiagnosticKind::Parties,
                format!("duplicate party '{}'", party),
            );
        }
    }
}

fn verify_governing_law(record: &ContractRecord, result: &mut VerificationResult) {
    if record.governing_law().trim().is_empty() {
        result.add_warning(
            DiagnosticKind::GoverningLaw,
            "governing law is not set".to_string(),
        );
    }
}

fn verify_clauses(record: &ContractRecord, result: &mut VerificationResult) {
    for (kind, text) in record.clauses().asserted() {
        if text.trim().is_empty() {
            result.add_warning(
                DiagnosticKind::Clause,
                format!("{} is asserted with empty text", kind),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{date, sample_record};

    #[test]
    fn test_sample_record_is_clean() {
        let result = verify(&sample_record());
        assert!(result.is_valid(), "sample should verify: {:?}", result.errors());
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_inverted_dates_are_an_error() {
        let record = ContractRecord::new(
            "Inverted",
            vec!["Alice".into()],
            date(2024, 12, 31),
            date(2024, 1, 1),
            "",
            "Laws of England and Wales",
        );
        let result = verify(&record);
        assert!(!result.is_valid());
        let errors = result.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, DiagnosticKind::DateRange);
        assert!(errors[0].to_string().starts_with("error [dates]: effective date 2024-12-31"));
    }

    #[test]
    fn test_single_day_contract_is_valid() {
        let record = ContractRecord::new(
            "One Day",
            vec!["Alice".into()],
            date(2024, 6, 1),
            date(2024, 6, 1),
            "",
            "Laws of England and Wales",
        );
        assert!(verify(&record).is_valid());
    }

    #[test]
    fn test_duplicate_parties_from_construction() {
        let record = ContractRecord::new(
            "Dupes",
            vec!["Alice".into(), "Bob".into(), "Alice".into()],
            date(2024, 1, 1),
            date(2024, 12, 31),
            "",
            "Laws of England and Wales",
        );
        let result = verify(&record);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].message, "duplicate party 'Alice'");
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let mut record = ContractRecord::new(
            "Sparse",
            vec![],
            date(2024, 1, 1),
            date(2024, 12, 31),
            "",
            "",
        );
        record.assert_warranty(" ");
        let result = verify(&record);
        assert!(result.is_valid());
        let kinds: Vec<DiagnosticKind> = result.warnings().iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::Parties,
                DiagnosticKind::GoverningLaw,
                DiagnosticKind::Clause
            ]
        );
    }

    #[test]
    fn test_blank_name_is_an_error() {
        let record = ContractRecord::new(
            "  ",
            vec!["Alice".into()],
            date(2024, 1, 1),
            date(2024, 12, 31),
            "",
            "Laws of England and Wales",
        );
        let result = verify(&record);
        assert_eq!(result.errors()[0].kind, DiagnosticKind::Identity);
    }
}
