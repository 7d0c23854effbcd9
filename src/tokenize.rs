//! Query tokenization
//!
//! Turns a raw query string into the ordered list of search terms the scorer
//! consumes: lowercased, punctuation stripped, single-character tokens and
//! stop words dropped. Duplicates are preserved so callers keep the
//! frequency signal.

use std::collections::HashSet;

/// Tokenize a raw query.
///
/// Deterministic and side-effect free. An empty, whitespace-only, or
/// all-stop-word query yields an empty vec; callers treat that as "no
/// filtering by term", not an error.
pub fn tokenize(query: &str, stop_words: &HashSet<String>) -> Vec<String> {
    let cleaned: String = query
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .filter(|t| !stop_words.contains(*t))
        .map(str::to_string)
        .collect()
}
