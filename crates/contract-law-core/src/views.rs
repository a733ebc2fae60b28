//! Read-only presentation views of a record
//!
//! Views are plain field collections. They serialize with the human labels
//! used in rendered output ("Contract Name", "Governing Law", ...); unset
//! clauses serialize as `null`.

use chrono::NaiveDate;
use serde::Serialize;

use crate::clause::ClauseKind;
use crate::ContractRecord;

/// Contract metadata plus the commonly inspected clauses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractDetails {
    #[serde(rename = "Contract Name")]
    pub name: String,
    #[serde(rename = "Parties")]
    pub parties: Vec<String>,
    #[serde(rename = "Effective Date")]
    pub effective_date: NaiveDate,
    #[serde(rename = "Expiration Date")]
    pub expiration_date: NaiveDate,
    #[serde(rename = "Governing Law")]
    pub governing_law: String,
    #[serde(rename = "Breach Claim")]
    pub breach_claim: Option<String>,
    #[serde(rename = "Misrepresentation")]
    pub misrepresentation: Option<String>,
    #[serde(rename = "Warranty")]
    pub warranty: Option<String>,
    #[serde(rename = "Arbitration Clause")]
    pub arbitration_clause: Option<String>,
    #[serde(rename = "Choice of Forum")]
    pub choice_of_forum: Option<String>,
    #[serde(rename = "Payment Clause")]
    pub payment_clause: Option<String>,
    #[serde(rename = "Confidentiality Clause")]
    pub confidentiality_clause: Option<String>,
    #[serde(rename = "Force Majeure Clause")]
    pub force_majeure_clause: Option<String>,
    #[serde(rename = "Terms")]
    pub terms: String,
}

/// Every clause slot of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllClauses {
    #[serde(rename = "Breach Claim")]
    pub breach_claim: Option<String>,
    #[serde(rename = "Misrepresentation")]
    pub misrepresentation: Option<String>,
    #[serde(rename = "Warranty")]
    pub warranty: Option<String>,
    #[serde(rename = "Arbitration Clause")]
    pub arbitration_clause: Option<String>,
    #[serde(rename = "Choice of Forum")]
    pub choice_of_forum: Option<String>,
    #[serde(rename = "Payment Clause")]
    pub payment_clause: Option<String>,
    #[serde(rename = "Confidentiality Clause")]
    pub confidentiality_clause: Option<String>,
    #[serde(rename = "Force Majeure Clause")]
    pub force_majeure_clause: Option<String>,
    #[serde(rename = "Termination Clause")]
    pub termination_clause: Option<String>,
    #[serde(rename = "Liquidated Damages Clause")]
    pub liquidated_damages_clause: Option<String>,
    #[serde(rename = "Indemnification Clause")]
    pub indemnification_clause: Option<String>,
}

impl AllClauses {
    /// (label, text) pairs in presentation order
    pub fn entries(&self) -> [(&'static str, Option<&str>); 11] {
        [
            (ClauseKind::BreachClaim.label(), self.breach_claim.as_deref()),
            (ClauseKind::Misrepresentation.label(), self.misrepresentation.as_deref()),
            (ClauseKind::Warranty.label(), self.warranty.as_deref()),
            (ClauseKind::ArbitrationClause.label(), self.arbitration_clause.as_deref()),
            (ClauseKind::ChoiceOfForum.label(), self.choice_of_forum.as_deref()),
            (ClauseKind::PaymentClause.label(), self.payment_clause.as_deref()),
            (ClauseKind::ConfidentialityClause.label(), self.confidentiality_clause.as_deref()),
            (ClauseKind::ForceMajeureClause.label(), self.force_majeure_clause.as_deref()),
            (ClauseKind::TerminationClause.label(), self.termination_clause.as_deref()),
            (
                ClauseKind::LiquidatedDamagesClause.label(),
                self.liquidated_damages_clause.as_deref(),
            ),
            (ClauseKind::IndemnificationClause.label(), self.indemnification_clause.as_deref()),
        ]
    }
}

/// Parties, dates, and key clauses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractSummary {
    #[serde(rename = "Contract Name")]
    pub name: String,
    #[serde(rename = "Parties")]
    pub parties: Vec<String>,
    #[serde(rename = "Effective Date")]
    pub effective_date: NaiveDate,
    #[serde(rename = "Expiration Date")]
    pub expiration_date: NaiveDate,
    #[serde(rename = "Governing Law")]
    pub governing_law: String,
    #[serde(rename = "Key Clauses")]
    pub key_clauses: AllClauses,
}

impl ContractRecord {
    fn owned_clause(&self, kind: ClauseKind) -> Option<String> {
        self.clause(kind).map(str::to_string)
    }

    pub fn details(&self) -> ContractDetails {
        ContractDetails {
            name: self.name().to_string(),
            parties: self.parties().to_vec(),
            effective_date: self.effective_date(),
            expiration_date: self.expiration_date(),
            governing_law: self.governing_law().to_string(),
            breach_claim: self.owned_clause(ClauseKind::BreachClaim),
            misrepresentation: self.owned_clause(ClauseKind::Misrepresentation),
            warranty: self.owned_clause(ClauseKind::Warranty),
            arbitration_clause: self.owned_clause(ClauseKind::ArbitrationClause),
            choice_of_forum: self.owned_clause(ClauseKind::ChoiceOfForum),
            payment_clause: self.owned_clause(ClauseKind::PaymentClause),
            confidentiality_clause: self.owned_clause(ClauseKind::ConfidentialityClause),
            force_majeure_clause: self.owned_clause(ClauseKind::ForceMajeureClause),
            terms: self.terms().to_string(),
        }
    }

    pub fn all_clauses(&self) -> AllClauses {
        AllClauses {
            breach_claim: self.owned_clause(ClauseKind::BreachClaim),
            misrepresentation: self.owned_clause(ClauseKind::Misrepresentation),
            warranty: self.owned_clause(ClauseKind::Warranty),
            arbitration_clause: self.owned_clause(ClauseKind::ArbitrationClause),
            choice_of_forum: self.owned_clause(ClauseKind::ChoiceOfForum),
            payment_clause: self.owned_clause(ClauseKind::PaymentClause),
            confidentiality_clause: self.owned_clause(ClauseKind::ConfidentialityClause),
            force_majeure_clause: self.owned_clause(ClauseKind::ForceMajeureClause),
            termination_clause: self.owned_clause(ClauseKind::TerminationClause),
            liquidated_damages_clause: self.owned_clause(ClauseKind::LiquidatedDamagesClause),
            indemnification_clause: self.owned_clause(ClauseKind::IndemnificationClause),
        }
    }

    pub fn summary(&self) -> ContractSummary {
        ContractSummary {
            name: self.name().to_string(),
            parties: self.parties().to_vec(),
            effective_date: self.effective_date(),
            expiration_date: self.expiration_date(),
            governing_law: self.governing_law().to_string(),
            key_clauses: self.all_clauses(),
        }
    }
}
