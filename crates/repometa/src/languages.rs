//! Language-breakdown selection.

use std::collections::BTreeMap;

/// Select the dominant languages from a language → code-volume breakdown.
///
/// Languages are sorted by descending volume and the minimal prefix whose
/// cumulative share strictly exceeds 80% of the total is returned, inclusive
/// of the language that crosses the threshold. Exactly 80% is not enough.
/// Ties in volume are broken by ascending name (the input map iterates in
/// name order and the sort is stable).
pub fn dominant_languages(breakdown: &BTreeMap<String, u64>) -> Vec<String> {
    let total: u64 = breakdown.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut entries: Vec<(&String, u64)> = breakdown.iter().map(|(k, &v)| (k, v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let mut selected = Vec::new();
    let mut cumulative: u64 = 0;
    for (name, volume) in entries {
        selected.push(name.clone());
        cumulative += volume;
        // cumulative / total > 0.8, in integer arithmetic
        if u128::from(cumulative) * 5 > u128::from(total) * 4 {
            break;
        }
    }

    selected
}
