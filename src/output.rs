//! Reports for `check` and `reorder`, as text diagnostics or JSON.
//!
//! Text failures go to stderr followed by the raw manifest so the user can see
//! what the scan walked over.
use crate::manifest::{self, PthFile};
use crate::order::OrderError;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Ordered,
    Unordered,
}

/// Result of `check --json`.
#[derive(Serialize, Debug)]
pub struct CheckReport {
    pub location: String,
    pub status: CheckStatus,
    pub expected: Vec<String>,
    pub unmatched: Vec<String>,
    pub lines: Vec<String>,
}

impl CheckReport {
    pub fn new(pth: &PthFile, expected: &[String]) -> Self {
        let unmatched = pth.find_unordered(expected).to_vec();
        let status = if unmatched.is_empty() {
            CheckStatus::Ordered
        } else {
            CheckStatus::Unordered
        };
        Self {
            location: pth.location().display().to_string(),
            status,
            expected: expected.to_vec(),
            unmatched,
            lines: pth.lines().to_vec(),
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReorderStatus {
    Unchanged,
    Reordered,
    Unordered,
    MissingEntries,
    RepeatedEntries,
}

/// Result of `reorder --json`; `lines` is the manifest as it is on disk afterwards.
#[derive(Serialize, Debug)]
pub struct ReorderReport {
    pub location: String,
    pub status: ReorderStatus,
    pub expected: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repeated: Vec<String>,
    pub lines: Vec<String>,
}

impl ReorderReport {
    pub fn new(pth: &PthFile, expected: &[String], outcome: &Result<bool, OrderError>) -> Self {
        let (status, missing, repeated) = match outcome {
            Ok(false) => (ReorderStatus::Unchanged, Vec::new(), Vec::new()),
            Ok(true) => (ReorderStatus::Reordered, Vec::new(), Vec::new()),
            Err(OrderError::MissingEntries { missing }) => {
                (ReorderStatus::MissingEntries, listed(missing), Vec::new())
            }
            Err(OrderError::RepeatedEntries { repeated }) => {
                (ReorderStatus::RepeatedEntries, Vec::new(), listed(repeated))
            }
            Err(OrderError::Unordered { .. }) => (ReorderStatus::Unordered, Vec::new(), Vec::new()),
        };
        Self {
            location: pth.location().display().to_string(),
            status,
            expected: expected.to_vec(),
            missing,
            repeated,
            lines: pth.lines().to_vec(),
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(
            self.status,
            ReorderStatus::Unchanged | ReorderStatus::Reordered
        )
    }
}

fn listed(entries: &BTreeSet<String>) -> Vec<String> {
    entries.iter().cloned().collect()
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize report")?;
    println!("{json}");
    Ok(())
}

/// Print an ordering failure and the current manifest contents on stderr.
pub fn report_failure(err: &OrderError, location: &Path) -> Result<()> {
    eprintln!("Error: {err}");
    let text = manifest::read_text(location)?;
    eprint!("{text}");
    Ok(())
}
