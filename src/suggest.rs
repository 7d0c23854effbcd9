//! Autocomplete suggestions
//!
//! Independent of the scoring engine: filters the configured catalog of
//! canonical service-category phrases by case-insensitive substring against
//! the partial query, capped at `max_suggestions`. Catalog order is kept.

use crate::config::SearchConfig;

/// Suggestions for a partial query; empty input yields nothing.
pub fn suggestions(partial: &str, config: &SearchConfig) -> Vec<String> {
    let needle = partial.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    config
        .suggestion_catalog
        .iter()
        .filter(|phrase| phrase.to_lowercase().contains(&needle))
        .take(config.max_suggestions)
        .cloned()
        .collect()
}
