//! Contract Law CLI
//!
//! ## Exit Codes
//!
//! - 0: success
//! - 1: contract failed verification or the strict date policy
//! - 2: usage, I/O, or parse error

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use chrono::{Months, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use contract_law_core::evaluator::{resolve_dispute, Demand};
use contract_law_core::verifier::{self, Severity};
use contract_law_core::{
    CollateralAnalysis, ContractRecord, ContractStatus, DatePolicy, Error, UnilateralOffer,
};

/// contract-law — inspect and evaluate contract records
///
/// Load a contract document (JSON), report its status, and evaluate its clauses.
#[derive(Parser)]
#[command(name = "contract-law", version, about, long_about = None)]
struct Cli {
    /// Reject contracts whose effective date falls after their expiration date
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show contract details
    Show {
        /// Path to contract document
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every clause slot
    Clauses {
        /// Path to contract document
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize parties, dates, and key clauses
    Summary {
        /// Path to contract document
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report validity and status on a date
    Status {
        /// Path to contract document
        file: PathBuf,
        /// Date to check (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        on: NaiveDate,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run every clause evaluation on a date
    Evaluate {
        /// Path to contract document
        file: PathBuf,
        /// Date used for status, termination, and payment (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        on: NaiveDate,
        /// A breach of contract has occurred
        #[arg(long)]
        breach: bool,
        /// A force majeure event has occurred
        #[arg(long)]
        force_majeure_event: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a dispute between two parties' demands
    Dispute {
        /// Party A's demand (e.g. "compensation")
        demand_a: String,
        /// Party B's demand (e.g. "termination")
        demand_b: String,
    },

    /// Decide a unilateral offer against an offeree's performance
    Offer {
        /// Path to contract document
        file: PathBuf,
        /// Path to offer document (JSON)
        #[arg(long)]
        offer: PathBuf,
        /// Act performed by the offeree
        #[arg(long)]
        performance: String,
        /// Party who performed
        #[arg(long)]
        offeree: String,
    },

    /// Analyze a collateral contract
    Collateral {
        /// Path to contract document
        file: PathBuf,
        /// Statement forming the collateral contract
        #[arg(long)]
        statement: String,
        /// Terms of the main contract
        #[arg(long)]
        terms: String,
        /// Whether the main contract was breached (true/false)
        #[arg(long)]
        breach: Option<bool>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check cross-field invariants (dates, parties, clauses)
    Verify {
        /// Path to contract document
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scaffold a new contract document
    Init {
        /// Contract name
        name: Option<String>,
    },

    /// Show version information
    Version,
}

fn parse_date(s: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date: {}. Expected YYYY-MM-DD (e.g., 2024-12-31)", e))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            match e.downcast_ref::<Error>() {
                Some(Error::InvalidDateRange { .. }) => 1,
                _ => 2,
            }
        }
    };

    process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let policy = if cli.strict {
        Some(DatePolicy::Strict)
    } else {
        None
    };

    match cli.command {
        Commands::Show { file, json } => {
            let record = load(&file, policy)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record.details())?);
            } else {
                println!("{}", record);
                println!("Terms:\n{}", record.terms());
            }
            Ok(0)
        }
        Commands::Clauses { file, json } => {
            let record = load(&file, policy)?;
            let clauses = record.all_clauses();
            if json {
                println!("{}", serde_json::to_string_pretty(&clauses)?);
            } else {
                print_clauses(&clauses.entries(), "");
            }
            Ok(0)
        }
        Commands::Summary { file, json } => {
            let record = load(&file, policy)?;
            let summary = record.summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{} {}", "Contract:".bold(), summary.name);
                println!("Parties: {}", summary.parties.join(", "));
                println!(
                    "Term: {} to {}",
                    summary.effective_date, summary.expiration_date
                );
                println!("Governing Law: {}", summary.governing_law);
                println!("Key Clauses:");
                print_clauses(&summary.key_clauses.entries(), "  ");
            }
            Ok(0)
        }
        Commands::Status { file, on, json } => {
            let record = load(&file, policy)?;
            let valid = record.is_valid(on);
            let status = record.evaluate_status(on);
            if json {
                let out = serde_json::json!({
                    "contract": record.name(),
                    "date": on,
                    "valid": valid,
                    "status": status,
                    "message": status.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} on {}: {}", record.name().bold(), on, colored_status(status));
                println!("Valid: {}", valid);
            }
            Ok(0)
        }
        Commands::Evaluate {
            file,
            on,
            breach,
            force_majeure_event,
            json,
        } => {
            let record = load(&file, policy)?;
            let report = record.evaluate_all(on, breach, force_majeure_event);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{} on {}", record.name().bold(), report.date);
                println!("  Status:             {}", colored_status(record.evaluate_status(on)));
                println!("  Breach claim:       {}", report.breach_claim);
                println!("  Misrepresentation:  {}", report.misrepresentation);
                println!("  Warranty:           {}", report.warranty);
                println!(
                    "  Arbitration:        {}",
                    report.arbitration_clause.as_deref().unwrap_or("None")
                );
                println!(
                    "  Choice of forum:    {}",
                    report.choice_of_forum.as_deref().unwrap_or("None")
                );
                println!("  Termination:        {}", report.termination);
                println!("  Payment:            {}", report.payment);
                println!("  Confidentiality:    {}", report.confidentiality);
                println!("  Liquidated damages: {}", report.liquidated_damages);
                println!("  Force majeure:      {}", report.force_majeure);
            }
            Ok(0)
        }
        Commands::Dispute { demand_a, demand_b } => {
            let resolution = resolve_dispute(Demand::parse(&demand_a), Demand::parse(&demand_b));
            println!("{}", resolution);
            Ok(0)
        }
        Commands::Offer {
            file,
            offer,
            performance,
            offeree,
        } => {
            let record = load(&file, policy)?;
            let text = std::fs::read_to_string(&offer)
                .with_context(|| format!("failed to read offer from {}", offer.display()))?;
            let offer: UnilateralOffer = serde_json::from_str(&text)
                .with_context(|| format!("failed to parse offer from {}", offer.display()))?;
            let outcome = record.handle_unilateral_offer(Some(&offer), &performance, &offeree);
            println!("{}", outcome);
            Ok(0)
        }
        Commands::Collateral {
            file,
            statement,
            terms,
            breach,
            json,
        } => {
            let record = load(&file, policy)?;
            let analysis = record.analyze_collateral_contract(&statement, &terms, breach);
            match (&analysis, json) {
                (CollateralAnalysis::Report(report), true) => {
                    println!("{}", serde_json::to_string_pretty(report)?);
                }
                _ => println!("{}", analysis),
            }
            Ok(0)
        }
        Commands::Verify { file, json } => {
            let record = load(&file, policy)?;
            let result = verifier::verify(&record);
            if json {
                let out = serde_json::json!({
                    "valid": result.is_valid(),
                    "errors": result.errors().len(),
                    "warnings": result.warnings().len(),
                    "diagnostics": result.diagnostics,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for diagnostic in &result.diagnostics {
                    match diagnostic.severity {
                        Severity::Error => eprintln!("{}", diagnostic.to_string().red()),
                        Severity::Warning => eprintln!("{}", diagnostic.to_string().yellow()),
                    }
                }
                if result.is_valid() {
                    println!("{} {} is valid", "✓".green(), file.display());
                } else {
                    eprintln!(
                        "{} {} has {} error(s)",
                        "✗".red(),
                        file.display(),
                        result.errors().len()
                    );
                }
            }
            Ok(if result.is_valid() { 0 } else { 1 })
        }
        Commands::Init { name } => {
            let name = name.unwrap_or_else(|| "Untitled Contract".to_string());
            let effective = chrono::Local::now().date_naive();
            let expiration = effective
                .checked_add_months(Months::new(12))
                .context("expiration date out of range")?;
            let record = ContractRecord::new(
                name,
                vec!["Party A".to_string(), "Party B".to_string()],
                effective,
                expiration,
                "Describe the terms of the agreement here.",
                "Specify the governing law here.",
            );
            println!("{}", record.to_json_pretty()?);
            Ok(0)
        }
        Commands::Version => {
            println!(
                "contract-law {} (contract-law-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
            Ok(0)
        }
    }
}

// ── Helpers ───────────────────────────────────────────────

/// Load a contract document, optionally overriding its date policy
fn load(path: &Path, policy: Option<DatePolicy>) -> Result<ContractRecord> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read contract from {}", path.display()))?;
    let mut record = ContractRecord::from_json(&text)
        .with_context(|| format!("failed to load contract from {}", path.display()))?;
    if let Some(policy) = policy {
        record
            .set_date_policy(policy)
            .with_context(|| format!("{} violates the {} date policy", path.display(), policy))?;
    }
    tracing::info!(contract = %record.name(), path = %path.display(), "contract loaded");
    Ok(record)
}

fn colored_status(status: ContractStatus) -> colored::ColoredString {
    match status {
        ContractStatus::InEffect => status.as_str().green(),
        ContractStatus::NotYetEffective => status.as_str().yellow(),
        ContractStatus::Expired => status.as_str().red(),
    }
}

fn print_clauses(entries: &[(&'static str, Option<&str>)], indent: &str) {
    for (label, text) in entries {
        match text {
            Some(text) => println!("{}{}: {}", indent, label.bold(), text),
            None => println!("{}{}: {}", indent, label.bold(), "None".dimmed()),
        }
    }
}
