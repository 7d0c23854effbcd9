//! Search configuration: the fixed tables the engine ranks with.
//!
//! The stop-word set, language-code mapping, field weights, and suggestion
//! catalog are injected here at engine construction instead of living as
//! module-level globals. Defaults reproduce the standard tables; any field
//! can be overridden from a TOML file.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Filter sentinel meaning "no constraint"
pub const ANY: &str = "any";

/// Per-category match weights and record-level bonuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Term is a substring of the record name
    #[serde(default = "default_name_weight")]
    pub name: f64,
    /// Term is a substring of the category
    #[serde(default = "default_category_weight")]
    pub category: f64,
    /// Per matching services entry
    #[serde(default = "default_services_weight")]
    pub services: f64,
    /// Term is a substring of the description
    #[serde(default = "default_description_weight")]
    pub description: f64,
    /// Per matching language name
    #[serde(default = "default_languages_weight")]
    pub languages: f64,
    /// Term is a substring of the address
    #[serde(default = "default_address_weight")]
    pub address: f64,
    /// Accessibility-related term against an accessible record
    #[serde(default = "default_accessibility_weight")]
    pub accessibility: f64,
    /// Urgency-related term against a 24-hour record
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
    /// Per prefix-bounded occurrence in the projected searchable text
    #[serde(default = "default_partial_weight")]
    pub partial: f64,

    /// Added once per record when verified
    #[serde(default = "default_verified_bonus")]
    pub verified_bonus: f64,
    /// Added once per record when accessible
    #[serde(default = "default_accessible_bonus")]
    pub accessible_bonus: f64,
    /// Added once per record when rating exceeds `top_rated_threshold`
    #[serde(default = "default_top_rated_bonus")]
    pub top_rated_bonus: f64,
    /// Rating above which `top_rated_bonus` applies
    #[serde(default = "default_top_rated_threshold")]
    pub top_rated_threshold: f64,
    /// Added once per record when currently open
    #[serde(default = "default_open_now_bonus")]
    pub open_now_bonus: f64,
}

fn default_name_weight() -> f64 {
    100.0
}

fn default_category_weight() -> f64 {
    80.0
}

fn default_services_weight() -> f64 {
    70.0
}

fn default_description_weight() -> f64 {
    50.0
}

fn default_languages_weight() -> f64 {
    40.0
}

fn default_address_weight() -> f64 {
    30.0
}

fn default_accessibility_weight() -> f64 {
    40.0
}

fn default_availability_weight() -> f64 {
    35.0
}

fn default_partial_weight() -> f64 {
    10.0
}

fn default_verified_bonus() -> f64 {
    5.0
}

fn default_accessible_bonus() -> f64 {
    5.0
}

fn default_top_rated_bonus() -> f64 {
    10.0
}

fn default_top_rated_threshold() -> f64 {
    4.5
}

fn default_open_now_bonus() -> f64 {
    8.0
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            name: default_name_weight(),
            category: default_category_weight(),
            services: default_services_weight(),
            description: default_description_weight(),
            languages: default_languages_weight(),
            address: default_address_weight(),
            accessibility: default_accessibility_weight(),
            availability: default_availability_weight(),
            partial: default_partial_weight(),
            verified_bonus: default_verified_bonus(),
            accessible_bonus: default_accessible_bonus(),
            top_rated_bonus: default_top_rated_bonus(),
            top_rated_threshold: default_top_rated_threshold(),
            open_now_bonus: default_open_now_bonus(),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Low-signal words dropped during tokenization
    #[serde(default = "default_stop_words")]
    pub stop_words: HashSet<String>,

    /// Language code to canonical language names ("zh" -> mandarin, chinese)
    #[serde(default = "default_language_codes")]
    pub language_codes: HashMap<String, Vec<String>>,

    /// Field weights and record-level bonuses
    #[serde(default)]
    pub weights: ScoreWeights,

    /// Canonical service-category phrases offered as autocomplete
    #[serde(default = "default_suggestion_catalog")]
    pub suggestion_catalog: Vec<String>,

    /// Cap on autocomplete suggestions
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_stop_words() -> HashSet<String> {
    [
        "the", "a", "an", "is", "are", "was", "be", "do", "does", "did", "can", "could", "will",
        "would", "should", "i", "im", "me", "my", "we", "our", "you", "your", "it", "its", "to",
        "of", "in", "on", "at", "for", "with", "and", "or", "but", "need", "needs", "want",
        "wants", "looking", "find", "get", "help", "please", "some", "any", "near", "nearby",
        "where", "what", "when", "how", "who", "which",
    ]
    .iter()
    .map(|w| (*w).to_string())
    .collect()
}

fn default_language_codes() -> HashMap<String, Vec<String>> {
    let table: &[(&str, &[&str])] = &[
        ("en", &["english"]),
        ("zh", &["mandarin", "chinese", "cantonese"]),
        ("ar", &["arabic"]),
        ("vi", &["vietnamese"]),
        ("es", &["spanish"]),
        ("fa", &["persian", "farsi", "dari"]),
        ("hi", &["hindi"]),
        ("pa", &["punjabi"]),
        ("ur", &["urdu"]),
        ("it", &["italian"]),
        ("el", &["greek"]),
        ("so", &["somali"]),
        ("sw", &["swahili"]),
        ("ne", &["nepali"]),
        ("ti", &["tigrinya"]),
        ("am", &["amharic"]),
    ];
    table
        .iter()
        .map(|(code, names)| {
            (
                (*code).to_string(),
                names.iter().map(|n| (*n).to_string()).collect(),
            )
        })
        .collect()
}

fn default_suggestion_catalog() -> Vec<String> {
    [
        "food relief",
        "emergency accommodation",
        "housing assistance",
        "mental health support",
        "crisis counselling",
        "legal aid",
        "free medical clinic",
        "english classes",
        "job search assistance",
        "disability services",
        "aged care support",
        "youth services",
        "domestic violence support",
        "financial counselling",
        "drug and alcohol support",
        "migrant resource centre",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

fn default_max_suggestions() -> usize {
    8
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            stop_words: default_stop_words(),
            language_codes: default_language_codes(),
            weights: ScoreWeights::default(),
            suggestion_catalog: default_suggestion_catalog(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl SearchConfig {
    /// Load config from a TOML file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| SearchError::Config(format!("read config {}: {err}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|err| SearchError::Config(format!("parse config {}: {err}", path.display())))
    }

    /// Canonical language names for a filter code, if known.
    ///
    /// Codes are matched case-insensitively; unknown codes map to nothing
    /// rather than erroring.
    pub fn language_names(&self, code: &str) -> Option<&[String]> {
        self.language_codes
            .get(&code.trim().to_lowercase())
            .map(Vec::as_slice)
    }
}
