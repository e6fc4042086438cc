//! Steno dictionary validation and canonical sorting

use crate::dict::Dictionary;

use super::order::{is_steno_stroke, steno_indices};

/// Checks every key of the dictionary for steno order.
///
/// Invalid keys are reported through `log::warn!` and left in place;
/// validation is advisory, not a gate.
pub fn validate_dictionary(dictionary: &Dictionary) {
    for key in dictionary.keys() {
        if !key.split('/').all(is_steno_stroke) {
            log::warn!("Invalid key: {}", key);
        }
    }
}

/// Sorts the dictionary into canonical steno order.
///
/// Entries are stably sorted by the index vector of their key, so the result
/// differs from lexical string order (e.g. `TPH` sorts before `H`). Only the
/// order changes; every entry is preserved.
pub fn sort_dictionary(dictionary: Dictionary) -> Dictionary {
    let mut entries: Vec<_> = dictionary.into_iter().collect();
    entries.sort_by_cached_key(|(key, _)| steno_indices(key));
    entries.into_iter().collect()
}
