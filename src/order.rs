//! Ordering checks and the stable reorder over manifest lines.
//!
//! Everything here is pure: lines are compared as exact strings and callers
//! decide what to do with the outcome (report it, or persist new lines).
use std::collections::{BTreeSet, HashMap, HashSet};
use thiserror::Error;

/// Failures produced by the ordering operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The forward scan ended before every expected entry was seen in order.
    #[error(
        "reached the end of the manifest, but did not encounter {unmatched:?} in the correct order"
    )]
    Unordered { unmatched: Vec<String> },
    /// Expected entries that do not appear in the manifest at all.
    #[error("provided one or more value(s) which don't appear in the manifest: {missing:?}")]
    MissingEntries { missing: BTreeSet<String> },
    /// Expected entries listed more than once; no single placement satisfies them.
    #[error("provided one or more value(s) more than once: {repeated:?}")]
    RepeatedEntries { repeated: BTreeSet<String> },
}

/// Result of a reorder request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reorder {
    /// The lines already satisfy the expected order.
    Unchanged,
    /// New lines that satisfy the expected order.
    Reordered(Vec<String>),
}

/// Return the suffix of `expected` not found, in order, by a forward scan of `lines`.
///
/// Matches need not be contiguous; each expected entry is matched greedily
/// against its first occurrence after the previous match.
pub fn find_unordered<'a>(lines: &[String], expected: &'a [String]) -> &'a [String] {
    let mut matched = 0;
    for line in lines {
        if matched == expected.len() {
            break;
        }
        if *line == expected[matched] {
            matched += 1;
        }
    }
    &expected[matched..]
}

/// Succeed when `lines` already contain `expected` in order.
pub fn check_order(lines: &[String], expected: &[String]) -> Result<(), OrderError> {
    let unmatched = find_unordered(lines, expected);
    if unmatched.is_empty() {
        return Ok(());
    }
    Err(OrderError::Unordered {
        unmatched: unmatched.to_vec(),
    })
}

/// Compute lines that satisfy `expected`, or `Unchanged` when they already do.
///
/// Unconstrained lines keep their relative order and come first; the expected
/// entries are appended in the requested order. Every occurrence of an expected
/// value moves with it, so the output is always a permutation of `lines`.
///
/// Out-of-order lines are rejected when `expected` names an entry the manifest
/// lacks, or names the same entry twice.
pub fn reorder(lines: &[String], expected: &[String]) -> Result<Reorder, OrderError> {
    let unmatched = find_unordered(lines, expected);
    if unmatched.is_empty() {
        tracing::debug!(expected = expected.len(), "lines already ordered");
        return Ok(Reorder::Unchanged);
    }
    tracing::debug!(?unmatched, "lines out of order");

    let present: HashSet<&str> = lines.iter().map(String::as_str).collect();
    let missing: BTreeSet<String> = expected
        .iter()
        .filter(|entry| !present.contains(entry.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(OrderError::MissingEntries { missing });
    }
    let repeated = repeated_entries(expected);
    if !repeated.is_empty() {
        return Err(OrderError::RepeatedEntries { repeated });
    }

    let mut occurrences: HashMap<&str, usize> =
        expected.iter().map(|entry| (entry.as_str(), 0)).collect();
    let mut result = Vec::with_capacity(lines.len());
    for line in lines {
        match occurrences.get_mut(line.as_str()) {
            Some(count) => *count += 1,
            None => result.push(line.clone()),
        }
    }
    for entry in expected {
        let count = occurrences.get(entry.as_str()).copied().unwrap_or(0);
        result.extend(std::iter::repeat_n(entry.clone(), count));
    }
    debug_assert_eq!(result.len(), lines.len());
    debug_assert!(find_unordered(&result, expected).is_empty());

    Ok(Reorder::Reordered(result))
}

fn repeated_entries(expected: &[String]) -> BTreeSet<String> {
    let mut seen = HashSet::with_capacity(expected.len());
    expected
        .iter()
        .filter(|entry| !seen.insert(entry.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
