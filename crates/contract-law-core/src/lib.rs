//! Contract Law Core - bookkeeping for contract records and their clauses
//!
//! A [`ContractRecord`] holds contract metadata (name, parties, dates,
//! terms, governing law) and a fixed set of optional clause slots. Reads
//! over the record produce fixed, human-readable verdicts.
//!
//! # Architecture
//!
//! ```text
//! JSON document → ContractRecord ──→ status     (validity at a date)
//!                      │        ├──→ evaluator  (clause verdicts, disputes)
//!                      │        ├──→ doctrine   (offers, collateral contracts)
//!                      │        └──→ views      (details, clauses, summary)
//!                      └──→ verifier (cross-field diagnostics)
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: verdicts depend only on the record and arguments
//! - **In-process**: no I/O, no clock reads, no shared state
//! - **Explicit dates**: the `effective <= expiration` invariant is only
//!   enforced under [`DatePolicy::Strict`]; [`verifier::verify`] reports it
//!   either way

pub mod clause;
pub mod config;
pub mod doctrine;
pub mod error;
pub mod evaluator;
pub mod record;
pub mod status;
pub mod verifier;
pub mod views;

pub use clause::{ClauseKind, ClauseSlots};
pub use config::DatePolicy;
pub use doctrine::{
    CollateralAnalysis, CollateralLiability, CollateralReport, OfferOutcome, UnilateralOffer,
};
pub use error::{Error, Result};
pub use evaluator::{
    BreachVerdict, ConfidentialityVerdict, Demand, DisputeResolution, EvaluationReport,
    ForceMajeureVerdict, LiquidatedDamagesVerdict, MisrepresentationVerdict, PaymentVerdict,
    TerminationVerdict, WarrantyVerdict,
};
pub use record::ContractRecord;
pub use status::ContractStatus;
pub use views::{AllClauses, ContractDetails, ContractSummary};
