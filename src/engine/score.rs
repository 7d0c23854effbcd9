//! Relevance scoring
//!
//! Two-tier matching: a declarative table of per-field substring rules is
//! the primary signal; a prefix-bounded regex pass over the projected
//! searchable text is the catch-all. Record-level bonuses (verification,
//! accessibility, rating, open-now) and a distance adjustment are applied
//! once per record, then the total is normalized by the term count.
//!
//! Weights live in [`ScoreWeights`] so the table is data, not branches; a
//! new category means one more [`FieldRule`] entry, not a scoring-loop
//! change.

use std::collections::BTreeSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ScoreWeights;
use crate::record::{HoursStatus, SearchableRecord};

/// Field category that contributed to a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchField {
    Name,
    Type,
    Services,
    Description,
    Languages,
    Address,
    Accessibility,
    Availability,
    /// Prefix-bounded hit in the projected searchable text
    Partial,
}

impl MatchField {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Services => "services",
            Self::Description => "description",
            Self::Languages => "languages",
            Self::Address => "address",
            Self::Accessibility => "accessibility",
            Self::Availability => "availability",
            Self::Partial => "partial",
        }
    }
}

impl std::fmt::Display for MatchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the primary matching table: a field category plus a predicate
/// returning how many times a term matched it (0 = no match, >1 multiplies
/// the weight).
struct FieldRule {
    field: MatchField,
    matches: fn(&SearchableRecord, &str) -> usize,
}

/// Primary matching table, checked independently per term. A term may match
/// several categories at once; each contributes additively.
const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: MatchField::Name,
        matches: name_matches,
    },
    FieldRule {
        field: MatchField::Type,
        matches: category_matches,
    },
    FieldRule {
        field: MatchField::Services,
        matches: services_matches,
    },
    FieldRule {
        field: MatchField::Description,
        matches: description_matches,
    },
    FieldRule {
        field: MatchField::Languages,
        matches: languages_matches,
    },
    FieldRule {
        field: MatchField::Address,
        matches: address_matches,
    },
    FieldRule {
        field: MatchField::Accessibility,
        matches: accessibility_matches,
    },
    FieldRule {
        field: MatchField::Availability,
        matches: availability_matches,
    },
];

fn contains_ci(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

fn name_matches(record: &SearchableRecord, term: &str) -> usize {
    usize::from(contains_ci(&record.name, term))
}

fn category_matches(record: &SearchableRecord, term: &str) -> usize {
    usize::from(contains_ci(&record.category, term))
}

fn services_matches(record: &SearchableRecord, term: &str) -> usize {
    record
        .services
        .iter()
        .filter(|s| contains_ci(s.as_str(), term))
        .count()
}

fn description_matches(record: &SearchableRecord, term: &str) -> usize {
    usize::from(contains_ci(&record.description, term))
}

fn languages_matches(record: &SearchableRecord, term: &str) -> usize {
    record
        .languages
        .iter()
        .filter(|language| {
            let language = language.to_lowercase();
            language.contains(term) || format!("{language} speaking").contains(term)
        })
        .count()
}

fn address_matches(record: &SearchableRecord, term: &str) -> usize {
    usize::from(contains_ci(&record.address, term))
}

fn accessibility_matches(record: &SearchableRecord, term: &str) -> usize {
    let topical =
        term.contains("access") || term.contains("wheelchair") || term.contains("disability");
    usize::from(record.accessibility && topical)
}

fn availability_matches(record: &SearchableRecord, term: &str) -> usize {
    let topical = term.contains("emergency") || term.contains("24") || term.contains("urgent");
    usize::from(record.hours_today.contains("24") && topical)
}

/// Distance bands: (ceiling km, adjustment). Checked in order.
const DISTANCE_BANDS: &[(f64, f64)] = &[(2.0, 15.0), (5.0, 10.0), (10.0, 5.0)];
const FAR_DISTANCE_KM: f64 = 50.0;
const FAR_PENALTY: f64 = -10.0;

fn distance_adjustment(distance: Option<f64>) -> f64 {
    // Unparsable distance: no adjustment either way
    let Some(km) = distance else { return 0.0 };
    for &(ceiling, adjustment) in DISTANCE_BANDS {
        if km <= ceiling {
            return adjustment;
        }
    }
    if km > FAR_DISTANCE_KM { FAR_PENALTY } else { 0.0 }
}

fn record_bonuses(record: &SearchableRecord, weights: &ScoreWeights) -> f64 {
    let mut bonus = 0.0;
    if record.verified {
        bonus += weights.verified_bonus;
    }
    if record.accessibility {
        bonus += weights.accessible_bonus;
    }
    if record.rating > weights.top_rated_threshold {
        bonus += weights.top_rated_bonus;
    }
    if record.hours_status == HoursStatus::Open {
        bonus += weights.open_now_bonus;
    }
    bonus
}

fn weight_for(weights: &ScoreWeights, field: MatchField) -> f64 {
    match field {
        MatchField::Name => weights.name,
        MatchField::Type => weights.category,
        MatchField::Services => weights.services,
        MatchField::Description => weights.description,
        MatchField::Languages => weights.languages,
        MatchField::Address => weights.address,
        MatchField::Accessibility => weights.accessibility,
        MatchField::Availability => weights.availability,
        MatchField::Partial => weights.partial,
    }
}

/// A tokenized query term with its precompiled fallback matcher.
///
/// The fallback counts prefix-bounded occurrences of the term anywhere in
/// the projected searchable text; compiling once per term keeps the scorer
/// linear over candidates.
#[derive(Debug, Clone)]
pub(crate) struct QueryTerm {
    pub text: String,
    partial: Option<Regex>,
}

impl QueryTerm {
    pub fn new(text: String) -> Self {
        let partial = Regex::new(&format!(r"\b{}", regex::escape(&text))).ok();
        Self { text, partial }
    }

    fn partial_occurrences(&self, searchable_text: &str) -> usize {
        self.partial
            .as_ref()
            .map_or(0, |re| re.find_iter(searchable_text).count())
    }
}

/// Scoring outcome for one candidate.
#[derive(Debug, Clone, Default)]
pub(crate) struct Relevance {
    pub score: f64,
    pub matched_fields: BTreeSet<MatchField>,
    pub matched_terms: BTreeSet<String>,
}

/// Score one candidate against the query terms.
///
/// Record-level bonuses and the distance adjustment only apply when at
/// least one term contributed, so a record that matches nothing always
/// scores zero and is dropped by the pipeline.
pub(crate) fn score_record(
    record: &SearchableRecord,
    terms: &[QueryTerm],
    searchable_text: &str,
    weights: &ScoreWeights,
) -> Relevance {
    let mut relevance = Relevance::default();

    for term in terms {
        let mut term_score = 0.0;
        let mut term_fields: Vec<MatchField> = Vec::new();

        for rule in FIELD_RULES {
            let count = (rule.matches)(record, &term.text);
            if count > 0 {
                term_score += weight_for(weights, rule.field) * count as f64;
                term_fields.push(rule.field);
            }
        }

        let occurrences = term.partial_occurrences(searchable_text);
        if occurrences > 0 {
            term_score += weight_for(weights, MatchField::Partial) * occurrences as f64;
            term_fields.push(MatchField::Partial);
        }

        if term_score > 0.0 {
            relevance.score += term_score;
            relevance.matched_terms.insert(term.text.clone());
            relevance.matched_fields.extend(term_fields);
        }
    }

    if !relevance.matched_terms.is_empty() {
        relevance.score += record_bonuses(record, weights);
        relevance.score += distance_adjustment(record.distance());
        relevance.score /= terms.len().max(1) as f64;
    }

    relevance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_record() -> SearchableRecord {
        SearchableRecord {
            id: "org-1".to_string(),
            name: String::new(),
            category: String::new(),
            description: String::new(),
            address: String::new(),
            services: vec![],
            languages: vec![],
            accessibility: false,
            verified: false,
            rating: 0.0,
            distance_km: "20".to_string(),
            hours_status: HoursStatus::Unknown,
            hours_today: String::new(),
        }
    }

    fn terms(words: &[&str]) -> Vec<QueryTerm> {
        words.iter().map(|w| QueryTerm::new((*w).to_string())).collect()
    }

    fn score_with_text(record: &SearchableRecord, words: &[&str]) -> Relevance {
        let text = crate::engine::project::searchable_text(record);
        score_record(record, &terms(words), &text, &ScoreWeights::default())
    }

    #[test]
    fn test_name_beats_description() {
        let mut named = base_record();
        named.name = "shelter house".to_string();
        let mut described = base_record();
        described.description = "shelter house".to_string();

        let name_score = score_with_text(&named, &["shelter"]).score;
        let description_score = score_with_text(&described, &["shelter"]).score;
        assert!(name_score > description_score);
    }

    #[test]
    fn test_services_weight_multiplies_by_count() {
        let mut one = base_record();
        one.services = vec!["food parcels".to_string()];
        let mut two = base_record();
        two.services = vec!["food parcels".to_string(), "food vouchers".to_string()];

        let single = score_with_text(&one, &["food"]);
        let double = score_with_text(&two, &["food"]);
        assert!(double.score > single.score);
        assert!(single.matched_fields.contains(&MatchField::Services));
    }

    #[test]
    fn test_language_speaking_suffix_matches() {
        let mut record = base_record();
        record.languages = vec!["Arabic".to_string()];
        let relevance = score_with_text(&record, &["speaking"]);
        assert!(relevance.matched_fields.contains(&MatchField::Languages));
        assert!(relevance.score > 0.0);
    }

    #[test]
    fn test_accessibility_requires_flag() {
        let mut accessible = base_record();
        accessible.accessibility = true;
        let inaccessible = base_record();

        let hit = score_with_text(&accessible, &["wheelchair"]);
        assert!(hit.matched_fields.contains(&MatchField::Accessibility));
        assert!(hit.score > 0.0);

        let miss = score_with_text(&inaccessible, &["wheelchair"]);
        assert_eq!(miss.score, 0.0);
        assert!(miss.matched_terms.is_empty());
    }

    #[test]
    fn test_availability_requires_24_in_hours_today() {
        let mut open_24 = base_record();
        open_24.hours_today = "open 24 hours".to_string();
        let relevance = score_with_text(&open_24, &["emergency"]);
        assert!(relevance.matched_fields.contains(&MatchField::Availability));

        let mut day_only = base_record();
        day_only.hours_today = "9am-5pm".to_string();
        let relevance = score_with_text(&day_only, &["emergency"]);
        assert!(!relevance.matched_fields.contains(&MatchField::Availability));
    }

    #[test]
    fn test_partial_is_prefix_bounded() {
        let mut record = base_record();
        record.name = "Foodbank SA".to_string();
        // "food" hits the start of "foodbank"; "bank" has no word boundary
        let food = score_with_text(&record, &["food"]);
        assert!(food.matched_fields.contains(&MatchField::Partial));
        let bank = score_with_text(&record, &["bank"]);
        assert!(bank.matched_fields.contains(&MatchField::Name));
        assert!(!bank.matched_fields.contains(&MatchField::Partial));
    }

    #[test]
    fn test_no_match_means_no_bonuses() {
        let mut record = base_record();
        record.verified = true;
        record.rating = 5.0;
        record.hours_status = HoursStatus::Open;
        record.distance_km = "1".to_string();
        // "xyzzy" matches nothing; bonuses must not surface the record.
        // (hours_status open projects "24/7 emergency available", so avoid
        // urgency terms here.)
        let relevance = score_with_text(&record, &["xyzzy"]);
        assert_eq!(relevance.score, 0.0);
    }

    #[test]
    fn test_bonuses_applied_once_per_record() {
        let mut record = base_record();
        record.name = "food relief food pantry".to_string();
        record.verified = true;

        // name 100 + two prefix-bounded occurrences (20) per term, +5
        // verified once per record, distance 20km adds nothing
        let one_term = score_with_text(&record, &["food"]);
        assert!((one_term.score - 125.0).abs() < 1e-9);

        // bonus is not re-applied for the second term: (240 + 5) / 2
        let two_terms = score_with_text(&record, &["food", "food"]);
        assert!((two_terms.score - 122.5).abs() < 1e-9);
    }

    #[test]
    fn test_distance_bands() {
        assert_eq!(distance_adjustment(Some(1.0)), 15.0);
        assert_eq!(distance_adjustment(Some(2.0)), 15.0);
        assert_eq!(distance_adjustment(Some(4.9)), 10.0);
        assert_eq!(distance_adjustment(Some(10.0)), 5.0);
        assert_eq!(distance_adjustment(Some(30.0)), 0.0);
        assert_eq!(distance_adjustment(Some(50.0)), 0.0);
        assert_eq!(distance_adjustment(Some(51.0)), -10.0);
        assert_eq!(distance_adjustment(None), 0.0);
    }

    #[test]
    fn test_normalization_by_term_count() {
        let mut record = base_record();
        record.name = "legal aid".to_string();
        record.distance_km = String::new();

        let single = score_with_text(&record, &["legal"]);
        // "legal" matches (name 100 + partial 10); "zzz" matches nothing.
        let padded = score_with_text(&record, &["legal", "zzz"]);
        assert!((single.score - 110.0).abs() < 1e-9);
        assert!((padded.score - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_matched_sets_deduplicated() {
        let mut record = base_record();
        record.name = "food food food".to_string();
        let relevance = score_with_text(&record, &["food", "food"]);
        assert_eq!(relevance.matched_terms.len(), 1);
        assert!(relevance.matched_fields.contains(&MatchField::Name));
    }
}
