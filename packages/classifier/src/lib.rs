#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Keyword-based firearm incident classification pipeline.
//!
//! Takes raw crime extract rows, keeps the firearm-related ones via
//! substring inclusion/exclusion matching, deduplicates by incident id
//! (first occurrence wins), and attaches derived severity and temporal
//! features. The pipeline is a pure function of its input sequence: the
//! same rows in the same order always produce the same classified set.

pub mod dates;

use std::collections::HashSet;

use chrono::{Datelike, Timelike};
use gun_trends_classifier_models::{
    ClassifiedIncident, GunSeverity, KeywordConfig, RawIncidentRecord,
};

/// Result of one classification run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationOutcome {
    /// Classified incidents, ordered by first occurrence in the input.
    pub incidents: Vec<ClassifiedIncident>,
    /// Number of matching records dropped because an earlier record
    /// already claimed their id.
    pub duplicates_dropped: u64,
}

/// Classifies raw incident records as firearm-related.
#[derive(Debug, Clone, Copy)]
pub struct IncidentClassifier {
    keywords: KeywordConfig,
}

impl IncidentClassifier {
    /// Creates a classifier with the given keyword configuration.
    #[must_use]
    pub const fn new(keywords: KeywordConfig) -> Self {
        Self { keywords }
    }

    /// Creates a classifier with the canonical keyword configuration.
    #[must_use]
    pub const fn with_default_keywords() -> Self {
        Self::new(KeywordConfig::DEFAULT)
    }

    /// Runs the full classification pipeline over an ordered sequence of
    /// raw records.
    ///
    /// Never fails: malformed dates, missing descriptions, and absent
    /// fields degrade to field-level omission, not rejection. Duplicate
    /// ids among matching records resolve first-wins and are counted in
    /// [`ClassificationOutcome::duplicates_dropped`].
    #[must_use]
    pub fn classify(&self, records: &[RawIncidentRecord]) -> ClassificationOutcome {
        let mut seen_ids: HashSet<&str> = HashSet::new();
        let mut incidents = Vec::new();
        let mut duplicates_dropped: u64 = 0;

        for record in records {
            let description = normalized(record.description.as_deref());

            if !contains_any(&description, self.keywords.inclusion) {
                continue;
            }
            if contains_any(&description, self.keywords.exclusion) {
                continue;
            }

            if !seen_ids.insert(record.id.as_str()) {
                duplicates_dropped += 1;
                continue;
            }

            incidents.push(classify_record(record));
        }

        log::debug!(
            "Classified {} firearm incidents from {} raw records ({duplicates_dropped} duplicates dropped)",
            incidents.len(),
            records.len(),
        );

        ClassificationOutcome {
            incidents,
            duplicates_dropped,
        }
    }
}

impl Default for IncidentClassifier {
    fn default() -> Self {
        Self::with_default_keywords()
    }
}

/// Derives the severity tier from offense category text.
///
/// Severe is checked before High, so a category mentioning both "homicide"
/// and "assault" is Severe. Everything unmatched (including a missing
/// category) falls back to Medium.
#[must_use]
pub fn derive_severity(primary_type: &str) -> GunSeverity {
    let lower = primary_type.to_lowercase();
    if contains_any(&lower, &["homicide", "murder"]) {
        return GunSeverity::Severe;
    }
    if contains_any(&lower, &["robbery", "assault"]) {
        return GunSeverity::High;
    }
    GunSeverity::Medium
}

/// Builds the feature-augmented incident for a record that passed the
/// keyword filter and deduplication.
fn classify_record(record: &RawIncidentRecord) -> ClassifiedIncident {
    let severity = derive_severity(record.primary_type.as_deref().unwrap_or_default());

    let occurred_at = record.date.as_deref().and_then(dates::parse_incident_date);

    ClassifiedIncident {
        id: record.id.clone(),
        description: record.description.clone(),
        primary_type: record.primary_type.clone(),
        arrest: record.arrest,
        district: record.district.clone(),
        community_area: record.community_area.clone(),
        latitude: record.latitude,
        longitude: record.longitude,
        severity,
        occurred_at,
        year: occurred_at.map(|dt| dt.year()),
        month: occurred_at.map(|dt| dt.month()),
        day: occurred_at.map(|dt| dt.day()),
        hour: occurred_at.map(|dt| dt.hour()),
        day_of_week: occurred_at.map(|dt| dt.weekday().num_days_from_monday()),
    }
}

/// Lowercased view of an optional text field. A missing value yields an
/// empty view, which no keyword can match.
fn normalized(field: Option<&str>) -> String {
    field.unwrap_or_default().to_lowercase()
}

/// Checks if `haystack` contains any of the given `needles`.
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
