//! Resolution of a typed command against the configured vocabulary.
//!
//! The query is matched two ways: exact equality against the shortcut
//! table, and Jaro-Winkler similarity against the command vocabulary.
//! Everything that ties at the maximum similarity is recorded; only the
//! first recorded command is executed.

use crate::error::{Error, Result};
use crate::utils::distance;

/// Ordered set of commands that matched a query equally well.
///
/// Shortcut hits always precede similarity hits, and insertion order is
/// preserved. The first entry is the command acted upon; the rest are kept
/// for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub matches: Vec<String>,
}

impl Resolution {
    /// The command chosen for execution.
    pub fn chosen(&self) -> &str {
        &self.matches[0]
    }
}

/// Resolve a query token to the configured commands it most resembles.
///
/// `shortcuts` and `shortcut_mappings` are index-aligned; the config loader
/// rejects tables of differing length before they reach this function.
///
/// Fails with [`Error::InvalidInput`] for an empty query and with
/// [`Error::NoMatch`] when nothing matches, which is only reachable when
/// the vocabulary itself is empty and no shortcut applies.
pub fn resolve(
    query: &str,
    commands: &[String],
    shortcuts: &[String],
    shortcut_mappings: &[String],
) -> Result<Resolution> {
    if query.is_empty() {
        return Err(Error::InvalidInput("empty command".to_string()));
    }

    let scores: Vec<f64> = commands
        .iter()
        .map(|command| distance::jaro_winkler(command, query, 1.0, 0))
        .collect();

    let mut matches: Vec<String> = Vec::new();

    // Shortcuts first: an exact alias hit outranks any similarity tie.
    for (alias, mapped) in shortcuts.iter().zip(shortcut_mappings) {
        if alias == query && !matches.contains(mapped) {
            matches.push(mapped.clone());
        }
    }

    // Exact equality on purpose: every score comes from the same
    // deterministic formula, and a tolerance would change tie sets.
    let max = scores.iter().cloned().fold(f64::MIN, f64::max);
    for (command, score) in commands.iter().zip(&scores) {
        if *score == max && !matches.contains(command) {
            matches.push(command.clone());
        }
    }

    if matches.is_empty() {
        return Err(Error::NoMatch(query.to_string()));
    }

    Ok(Resolution { matches })
}
