//! Clause slots — the optional free-text clauses a record may carry
//!
//! Every slot starts unset. Asserting a clause overwrites whatever text the
//! slot held before; there is no way back to unset short of building a new
//! record.

use serde::{Deserialize, Serialize};

/// The named clause slots of a contract record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseKind {
    BreachClaim,
    Misrepresentation,
    Warranty,
    ArbitrationClause,
    ChoiceOfForum,
    PaymentClause,
    ConfidentialityClause,
    ForceMajeureClause,
    TerminationClause,
    LiquidatedDamagesClause,
    IndemnificationClause,
}

impl ClauseKind {
    /// All slots, in presentation order
    pub const ALL: [ClauseKind; 11] = [
        ClauseKind::BreachClaim,
        ClauseKind::Misrepresentation,
        ClauseKind::Warranty,
        ClauseKind::ArbitrationClause,
        ClauseKind::ChoiceOfForum,
        ClauseKind::PaymentClause,
        ClauseKind::ConfidentialityClause,
        ClauseKind::ForceMajeureClause,
        ClauseKind::TerminationClause,
        ClauseKind::LiquidatedDamagesClause,
        ClauseKind::IndemnificationClause,
    ];

    /// Human-readable label used by the presentation views
    pub fn label(self) -> &'static str {
        match self {
            ClauseKind::BreachClaim => "Breach Claim",
            ClauseKind::Misrepresentation => "Misrepresentation",
            ClauseKind::Warranty => "Warranty",
            ClauseKind::ArbitrationClause => "Arbitration Clause",
            ClauseKind::ChoiceOfForum => "Choice of Forum",
            ClauseKind::PaymentClause => "Payment Clause",
            ClauseKind::ConfidentialityClause => "Confidentiality Clause",
            ClauseKind::ForceMajeureClause => "Force Majeure Clause",
            ClauseKind::TerminationClause => "Termination Clause",
            ClauseKind::LiquidatedDamagesClause => "Liquidated Damages Clause",
            ClauseKind::IndemnificationClause => "Indemnification Clause",
        }
    }
}

impl std::fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Storage for every clause slot of a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClauseSlots {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breach_claim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misrepresentation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arbitration_clause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choice_of_forum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_clause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidentiality_clause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_majeure_clause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_clause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidated_damages_clause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indemnification_clause: Option<String>,
}

impl ClauseSlots {
    /// Text held by a slot, if it has been asserted
    pub fn get(&self, kind: ClauseKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    /// Assert a clause, replacing any previous text
    pub fn set(&mut self, kind: ClauseKind, text: impl Into<String>) {
        *self.slot_mut(kind) = Some(text.into());
    }

    pub fn is_set(&self, kind: ClauseKind) -> bool {
        self.slot(kind).is_some()
    }

    /// Iterate over asserted slots in presentation order
    pub fn asserted(&self) -> impl Iterator<Item = (ClauseKind, &str)> + '_ {
        ClauseKind::ALL
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|text| (kind, text)))
    }

    fn slot(&self, kind: ClauseKind) -> &Option<String> {
        match kind {
            ClauseKind::BreachClaim => &self.breach_claim,
            ClauseKind::Misrepresentation => &self.misrepresentation,
            ClauseKind::Warranty => &self.warranty,
            ClauseKind::ArbitrationClause => &self.arbitration_clause,
            ClauseKind::ChoiceOfForum => &self.choice_of_forum,
            ClauseKind::PaymentClause => &self.payment_clause,
            ClauseKind::ConfidentialityClause => &self.confidentiality_clause,
            ClauseKind::ForceMajeureClause => &self.force_majeure_clause,
            ClauseKind::TerminationClause => &self.termination_clause,
            ClauseKind::LiquidatedDamagesClause => &self.liquidated_damages_clause,
            ClauseKind::IndemnificationClause => &self.indemnification_clause,
        }
    }

    fn slot_mut(&mut self, kind: ClauseKind) -> &mut Option<String> {
        match kind {
            ClauseKind::BreachClaim => &mut self.breach_claim,
            ClauseKind::Misrepresentation => &mut self.misrepresentation,
            ClauseKind::Warranty => &mut self.warranty,
            ClauseKind::ArbitrationClause => &mut self.arbitration_clause,
            ClauseKind::ChoiceOfForum => &mut self.choice_of_forum,
            ClauseKind::PaymentClause => &mut self.payment_clause,
            ClauseKind::ConfidentialityClause => &mut self.confidentiality_clause,
            ClauseKind::ForceMajeureClause => &mut self.force_majeure_clause,
            ClauseKind::TerminationClause => &mut self.termination_clause,
            ClauseKind::LiquidatedDamagesClause => &mut self.liquidated_damages_clause,
            ClauseKind::IndemnificationClause => &mut self.indemnification_clause,
        }
    }
}
