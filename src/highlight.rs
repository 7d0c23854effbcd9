//! Match highlighting for presentation
//!
//! Wraps every case-insensitive occurrence of each matched term in `**…**`
//! so a display layer can emphasize hits. Terms are applied longest-first
//! (ties lexicographic) and each substitution pass rewrites the output of
//! the previous one; exact marker placement under overlapping terms is
//! deterministic but not otherwise contractual.

use regex::RegexBuilder;

/// Opening marker inserted before a match
pub const MARK_OPEN: &str = "**";
/// Closing marker inserted after a match
pub const MARK_CLOSE: &str = "**";

/// Highlight every occurrence of each matched term within `text`.
///
/// Returns `text` unchanged when `matched_terms` is empty. Matching is
/// case-insensitive and global; the original casing of the text is kept.
pub fn highlight(text: &str, matched_terms: &[String]) -> String {
    let mut terms: Vec<&str> = matched_terms
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect();
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    terms.dedup();

    let mut out = text.to_string();
    for term in terms {
        let Ok(re) = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };
        out = re
            .replace_all(&out, |caps: &regex::Captures<'_>| {
                format!("{MARK_OPEN}{}{MARK_CLOSE}", &caps[0])
            })
            .into_owned();
    }
    out
}
