//! Pre-filters applied before scoring
//!
//! Each filter is a pure subtractive pass over the candidate set. Malformed
//! values never error: unknown language codes match nothing, the "any"
//! sentinel disables a filter, and unparsable radius strings leave the
//! distance filter unset.

use serde::{Deserialize, Serialize};

use crate::config::{ANY, SearchConfig};
use crate::record::{SearchableRecord, parse_distance_km};

/// Caller-supplied structured filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Language code ("en", "zh", ...); `None` or "any" disables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// `Some(true)` keeps only accessible records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<bool>,

    /// Maximum distance in km; `None` disables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_radius_km: Option<f64>,
}

impl SearchFilters {
    /// Create new empty filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: filter by language code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Builder: require accessible records
    pub fn accessible(mut self, required: bool) -> Self {
        self.accessibility = Some(required);
        self
    }

    /// Builder: cap distance in km
    pub fn max_distance_km(mut self, radius: f64) -> Self {
        self.distance_radius_km = Some(radius);
        self
    }

    /// Builder: cap distance from free text ("5", "5 km", "any").
    ///
    /// "any" and unparsable values leave the filter unset.
    pub fn max_distance(mut self, raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(ANY) {
            self.distance_radius_km = None;
        } else {
            self.distance_radius_km = parse_distance_km(trimmed);
        }
        self
    }

    fn active_language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty() && !code.eq_ignore_ascii_case(ANY))
    }

    /// Check if no filtering will occur
    pub fn is_empty(&self) -> bool {
        self.active_language().is_none()
            && self.accessibility != Some(true)
            && self.distance_radius_km.is_none()
    }

    /// Check if a record passes all filters
    pub fn matches(&self, record: &SearchableRecord, config: &SearchConfig) -> bool {
        if let Some(code) = self.active_language() {
            // Unknown code maps to nothing, so the filter excludes everything
            let Some(names) = config.language_names(code) else {
                return false;
            };
            let overlaps = record.languages.iter().any(|language| {
                let language = language.to_lowercase();
                names
                    .iter()
                    .any(|name| language.contains(name) || name.contains(&language))
            });
            if !overlaps {
                return false;
            }
        }

        if self.accessibility == Some(true) && !record.accessibility {
            return false;
        }

        if let Some(radius) = self.distance_radius_km {
            // Records whose distance cannot be parsed fail a radius filter:
            // the ceiling cannot be verified
            match record.distance() {
                Some(km) if km <= radius => {}
                _ => return false,
            }
        }

        true
    }
}
