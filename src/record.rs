//! The unit being searched: one organization/service record.

use serde::{Deserialize, Serialize};

/// Opening-hours status of a record at search time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoursStatus {
    /// Currently open
    Open,
    /// Currently closed
    Closed,
    /// Open but closing within the hour
    ClosingSoon,
    /// No hours information available
    #[default]
    Unknown,
}

impl HoursStatus {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(Self::Open),
            "closed" => Some(Self::Closed),
            "closing-soon" | "closing_soon" | "closing soon" => Some(Self::ClosingSoon),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::ClosingSoon => "closing-soon",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for HoursStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A candidate record evaluated against a query
///
/// All text fields are matched case-insensitively; empty fields contribute
/// nothing to scoring. The engine never mutates records and does not
/// deduplicate beyond the caller's guarantee that `id` is unique within one
/// candidate collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchableRecord {
    /// Unique within one candidate collection
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Service category ("food relief", "legal aid", ...)
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    /// Short offering labels; duplicates allowed, order irrelevant
    #[serde(default)]
    pub services: Vec<String>,
    /// Human-language names the record supports
    #[serde(default)]
    pub languages: Vec<String>,
    /// Wheelchair/physical accessibility
    #[serde(default)]
    pub accessibility: bool,
    /// Trust/verification flag
    #[serde(default)]
    pub verified: bool,
    /// Conventionally 0.0-5.0
    #[serde(default)]
    pub rating: f64,
    /// Distance from the searcher as entered, may carry a unit suffix
    /// ("1.5 km"); parsed leniently, see [`parse_distance_km`]
    #[serde(default)]
    pub distance_km: String,
    #[serde(default)]
    pub hours_status: HoursStatus,
    /// Free-text hours description ("24 hours", "9am-5pm")
    #[serde(default)]
    pub hours_today: String,
}

impl SearchableRecord {
    /// Numeric distance in km, `None` if `distance_km` does not start with a
    /// number.
    pub fn distance(&self) -> Option<f64> {
        parse_distance_km(&self.distance_km)
    }
}

/// Parse a distance value from free text, tolerating a unit suffix.
///
/// Takes the longest leading run of ASCII digits with at most one decimal
/// point after trimming whitespace; everything past that (units, extra text)
/// is ignored. Fails soft: anything without a numeric prefix yields `None`.
pub fn parse_distance_km(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '0'..='9' => end = idx + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            _ => break,
        }
    }
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distance_plain() {
        assert_eq!(parse_distance_km("8.5"), Some(8.5));
        assert_eq!(parse_distance_km("12"), Some(12.0));
    }

    #[test]
    fn test_parse_distance_unit_suffix() {
        assert_eq!(parse_distance_km("1.5 km"), Some(1.5));
        assert_eq!(parse_distance_km("3km"), Some(3.0));
        assert_eq!(parse_distance_km("  2.25 kilometres  "), Some(2.25));
    }

    #[test]
    fn test_parse_distance_fail_soft() {
        assert_eq!(parse_distance_km(""), None);
        assert_eq!(parse_distance_km("far away"), None);
        assert_eq!(parse_distance_km("km 5"), None);
        assert_eq!(parse_distance_km("."), None);
    }

    #[test]
    fn test_parse_distance_single_dot() {
        // Second dot terminates the number
        assert_eq!(parse_distance_km("1.5.3"), Some(1.5));
    }

    #[test]
    fn test_hours_status_round_trip() {
        for status in [
            HoursStatus::Open,
            HoursStatus::Closed,
            HoursStatus::ClosingSoon,
            HoursStatus::Unknown,
        ] {
            assert_eq!(HoursStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(HoursStatus::from_str("OPEN"), Some(HoursStatus::Open));
        assert_eq!(HoursStatus::from_str("never"), None);
    }

    #[test]
    fn test_record_deserializes_with_defaults() {
        let record: SearchableRecord = serde_json::from_str(r#"{"id": "org-1"}"#).unwrap();
        assert_eq!(record.id, "org-1");
        assert!(record.name.is_empty());
        assert!(record.services.is_empty());
        assert!(!record.accessibility);
        assert_eq!(record.hours_status, HoursStatus::Unknown);
        assert_eq!(record.distance(), None);
    }

    #[test]
    fn test_hours_status_serde_kebab() {
        let json = serde_json::to_string(&HoursStatus::ClosingSoon).unwrap();
        assert_eq!(json, "\"closing-soon\"");
    }
}
