//! Searchable-text projection
//!
//! Flattens a record into one lowercase blob covering every searchable
//! field, including derived phrases for boolean flags so that terms like
//! "wheelchair" or "verified" can hit records that never spell them out.
//! Used only by the scorer's partial-match fallback; never returned to
//! callers.

use crate::record::{HoursStatus, SearchableRecord};

/// Project a record into a single lowercase searchable string.
pub fn searchable_text(record: &SearchableRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    for field in [
        &record.name,
        &record.category,
        &record.description,
        &record.address,
    ] {
        if !field.is_empty() {
            parts.push(field.to_lowercase());
        }
    }

    parts.extend(
        record
            .services
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase()),
    );

    for language in &record.languages {
        if !language.is_empty() {
            parts.push(format!("{} speaking", language.to_lowercase()));
        }
    }

    if record.accessibility {
        parts.push("accessible wheelchair access".to_string());
    }
    if record.verified {
        parts.push("verified government approved".to_string());
    }
    if record.hours_status == HoursStatus::Open {
        parts.push("24/7 emergency available".to_string());
    }

    parts.join(" ")
}
