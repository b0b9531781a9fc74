//! Series ordering resolution.
//!
//! Galleries display their series in an explicit, user-editable order: the
//! `series-order.txt` list names the series that matter, and everything
//! else follows alphabetically. The merge is a two-phase, deterministic
//! operation over the series keys actually present in a catalog:
//!
//! 1. every listed key that is present, in list order;
//! 2. every present-but-unlisted key, ascending alphabetically.
//!
//! No key is duplicated or dropped, and keys listed but absent from the
//! catalog are ignored — the order file can safely name series that only
//! some galleries contain.

use crate::sidecar::TextIndex;
use crate::titling::capitalize;
use crate::types::Series;
use std::collections::BTreeSet;

/// Merge the preference list with the observed key set.
///
/// `present` is deduplicated and sorted by construction (`BTreeSet`);
/// `preferred` is taken as-is, first occurrence winning on duplicates.
pub fn resolve_order(present: &BTreeSet<String>, preferred: &[String]) -> Vec<String> {
    let mut resolved: Vec<String> = Vec::with_capacity(present.len());

    for key in preferred {
        if present.contains(key) && !resolved.contains(key) {
            resolved.push(key.clone());
        }
    }
    // BTreeSet iteration is already ascending alphabetical
    for key in present {
        if !resolved.contains(key) {
            resolved.push(key.clone());
        }
    }

    resolved
}

/// Build the full [`Series`] records for a gallery: resolved order,
/// capitalized labels, and descriptions looked up by key.
pub fn build_series(
    present: &BTreeSet<String>,
    preferred: &[String],
    descriptions: &TextIndex,
) -> Vec<Series> {
    resolve_order(present, preferred)
        .into_iter()
        .map(|key| Series {
            label: capitalize(&key),
            description: descriptions.get(&key).map(String::from),
            key,
        })
        .collect()
}
