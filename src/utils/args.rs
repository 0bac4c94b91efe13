//! Argument normalization ahead of command resolution.
//!
//! Flags aimed at pak itself are handled by clap before any of this runs.
//! Hyphen-prefixed tokens that land in the trailing argument list are
//! stripped here so that the first surviving token is the command to
//! resolve and the rest are pass-through package manager arguments.

use regex::Regex;

/// Separator used to join arguments for flag stripping. Chosen because it
/// cannot plausibly appear inside a real command-line argument.
pub const FLAG_SEPARATOR: &str = ";;;";

/// Remove flag tokens from an argument list, preserving the relative order
/// of the surviving tokens.
///
/// The list is joined with [`FLAG_SEPARATOR`], every
/// `(separator|start-of-string) -flag separator` span is deleted in a single
/// substitution pass, and the result is re-split. Two quirks of the single
/// pass are part of the contract: a flag in final position has no trailing
/// separator and survives, and the second of two adjacent flags survives
/// because its leading separator was consumed by the first match.
///
/// An empty input (or one where every token was stripped) round-trips to a
/// single empty token; callers treat an empty first token as "no command".
pub fn strip_flags(raw: &[String]) -> Vec<String> {
    let flag_pattern = Regex::new(r"(?m)(;;;|^)-+[^;]*;;;").expect("Invalid regex pattern");

    let joined = raw.join(FLAG_SEPARATOR);
    let stripped = flag_pattern.replace_all(&joined, "$1");

    stripped
        .split(FLAG_SEPARATOR)
        .map(|s| s.to_string())
        .collect()
}
