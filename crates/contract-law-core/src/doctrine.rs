//! Doctrine helpers — unilateral offers, collateral contracts, and case analysis
//!
//! These operations take their facts as arguments instead of reading clause
//! slots. Missing facts produce the `InvalidInput` outcome, whose label is
//! `"Invalid input or missing information."`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ContractRecord;

const INVALID_INPUT: &str = "Invalid input or missing information.";

// ── Unilateral Offers ─────────────────────────────────────

/// An offer that is accepted by performing an act
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnilateralOffer {
    pub intent_to_create_legal_relations: bool,
    pub required_performance: String,
    pub outcome: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferOutcome {
    /// Performance matched; carries the offer's declared outcome
    Fulfilled(String),
    PerformanceNotMet,
    NoIntent,
    InvalidInput,
}

impl std::fmt::Display for OfferOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OfferOutcome::Fulfilled(outcome) => f.write_str(outcome),
            OfferOutcome::PerformanceNotMet => f.write_str("Performance condition not met."),
            OfferOutcome::NoIntent => f.write_str("No intent to create legal relations."),
            OfferOutcome::InvalidInput => f.write_str(INVALID_INPUT),
        }
    }
}

// ── Collateral Contracts ──────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CollateralLiability {
    #[serde(rename = "The party making the oral statement in the collateral contract is liable.")]
    StatementMakerLiable,
    #[serde(rename = "No liability in the collateral contract case.")]
    NoLiability,
}

impl std::fmt::Display for CollateralLiability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CollateralLiability::StatementMakerLiable => {
                "The party making the oral statement in the collateral contract is liable."
            }
            CollateralLiability::NoLiability => "No liability in the collateral contract case.",
        })
    }
}

/// Inputs echoed back with the liability verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollateralReport {
    #[serde(rename = "Collateral Contract Statement")]
    pub statement: String,
    #[serde(rename = "Main Contract Terms")]
    pub main_contract_terms: String,
    #[serde(rename = "Breach of Main Contract")]
    pub main_contract_breach: bool,
    #[serde(rename = "Analysis")]
    pub analysis: CollateralLiability,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollateralAnalysis {
    Report(CollateralReport),
    InvalidInput,
}

impl std::fmt::Display for CollateralAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollateralAnalysis::Report(report) => write!(f, "{}", report.analysis),
            CollateralAnalysis::InvalidInput => f.write_str(INVALID_INPUT),
        }
    }
}

// ── Case Analysis ─────────────────────────────────────────

/// Elements extracted from a case text
///
/// Extraction is not implemented; the map is always empty.
pub type KeyElements = BTreeMap<String, String>;

pub fn parse_case_text(_case_text: &str) -> KeyElements {
    KeyElements::new()
}

fn analyze_intention_elements(_elements: &KeyElements) -> String {
    "The analysis of intention suggests that...".to_string()
}

fn analyze_enforceability_elements(_elements: &KeyElements) -> String {
    "The analysis of enforceability indicates that...".to_string()
}

impl ContractRecord {
    /// Decide a unilateral offer against the offeree's performance.
    ///
    /// A missing offer or an empty performance or offeree is invalid input.
    /// Performance must match the required performance exactly.
    pub fn handle_unilateral_offer(
        &self,
        offer: Option<&UnilateralOffer>,
        performance: &str,
        offeree: &str,
    ) -> OfferOutcome {
        let offer = match offer {
            Some(offer) if !performance.is_empty() && !offeree.is_empty() => offer,
            _ => {
                warn!(contract = %self.name(), "unilateral offer missing offer, performance, or offeree");
                return OfferOutcome::InvalidInput;
            }
        };

        let outcome = if !offer.intent_to_create_legal_relations {
            OfferOutcome::NoIntent
        } else if performance == offer.required_performance {
            OfferOutcome::Fulfilled(offer.outcome.clone())
        } else {
            OfferOutcome::PerformanceNotMet
        };
        debug!(contract = %self.name(), offeree, outcome = %outcome, "unilateral offer handled");
        outcome
    }

    /// Analyze a collateral contract formed by a statement outside the main terms.
    ///
    /// `main_contract_breach` must be provided; `Some(false)` counts as provided.
    pub fn analyze_collateral_contract(
        &self,
        statement: &str,
        main_contract_terms: &str,
        main_contract_breach: Option<bool>,
    ) -> CollateralAnalysis {
        let breach = match main_contract_breach {
            Some(breach) if !statement.is_empty() && !main_contract_terms.is_empty() => breach,
            _ => {
                warn!(contract = %self.name(), "collateral contract analysis missing information");
                return CollateralAnalysis::InvalidInput;
            }
        };

        let analysis = if breach {
            CollateralLiability::StatementMakerLiable
        } else {
            CollateralLiability::NoLiability
        };
        CollateralAnalysis::Report(CollateralReport {
            statement: statement.to_string(),
            main_contract_terms: main_contract_terms.to_string(),
            main_contract_breach: breach,
            analysis,
        })
    }

    /// Analyze whether a case shows intention to create legal relations.
    ///
    /// Returns a fixed placeholder analysis.
    pub fn analyze_intention(&self, case_text: &str) -> String {
        analyze_intention_elements(&parse_case_text(case_text))
    }

    /// Analyze whether the agreement in a case is enforceable.
    ///
    /// Returns a fixed placeholder analysis.
    pub fn analyze_enforceability(&self, case_text: &str) -> String {
        analyze_enforceability_elements(&parse_case_text(case_text))
    }
}
