#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Firearm incident record types, severity tiers, and keyword configuration.
//!
//! This crate defines the canonical record shapes shared by the classifier
//! and the reporting layer, plus the single keyword configuration that every
//! consumer of the classification pipeline uses. Keeping the keyword sets
//! here (rather than inline in the pipeline) means inclusion and exclusion
//! terms can be extended without touching classification logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity tier for a firearm-related incident. Ordered least severe
/// first, so `Severe > High > Medium`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GunSeverity {
    /// Everything not matched by a higher tier, including weapons
    /// violations and firearm discharge incidents with no more specific
    /// offense category.
    Medium,
    /// Robbery and assault offenses.
    High,
    /// Homicide and murder offenses.
    Severe,
}

/// Substrings whose presence in a lowercased description marks a record as
/// a firearm-crime candidate.
pub const GUN_INCLUSION_KEYWORDS: &[&str] = &[
    "gun", "firearm", "rifle", "pistol", "handgun", "shotgun", "revolver", "weapon", "firearms",
    "shooting", "armed",
];

/// Substrings that veto an inclusion match. Evaluated only on records that
/// already matched an inclusion keyword.
///
/// `"weapon - other"` is the literal category label used by the upstream
/// dataset; if the upstream taxonomy ever renames that category this
/// exclusion silently stops matching.
pub const GUN_EXCLUSION_KEYWORDS: &[&str] = &["knife", "blunt", "taser", "weapon - other"];

/// The inclusion/exclusion keyword sets driving classification.
///
/// Matching is plain substring containment over the lowercased description,
/// not whole-word: "armed" matches "unarmed" too. That is a documented
/// heuristic limitation of the source analysis, kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordConfig {
    /// Keywords that admit a record as firearm-related.
    pub inclusion: &'static [&'static str],
    /// Keywords that veto an already-admitted record.
    pub exclusion: &'static [&'static str],
}

impl KeywordConfig {
    /// The canonical keyword configuration used across the toolchain.
    pub const DEFAULT: Self = Self {
        inclusion: GUN_INCLUSION_KEYWORDS,
        exclusion: GUN_EXCLUSION_KEYWORDS,
    };
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One row of the source crime extract as ingested.
///
/// Only `id` is required. Every other field may be missing or malformed in
/// the source data; the loader degrades those to `None` rather than
/// rejecting the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIncidentRecord {
    /// Source incident identifier. Not guaranteed unique within an extract.
    pub id: String,
    /// Free-text incident description, case and whitespace as ingested.
    pub description: Option<String>,
    /// High-level offense category text (e.g., "HOMICIDE", "ROBBERY").
    pub primary_type: Option<String>,
    /// Raw timestamp text from the extract. May be absent or malformed.
    pub date: Option<String>,
    /// Whether an arrest was made.
    pub arrest: Option<bool>,
    /// Police district identifier.
    pub district: Option<String>,
    /// Community area identifier.
    pub community_area: Option<String>,
    /// Latitude (WGS84), if the row carries coordinates.
    pub latitude: Option<f64>,
    /// Longitude (WGS84), if the row carries coordinates.
    pub longitude: Option<f64>,
}

/// A firearm-related incident: a deduplicated [`RawIncidentRecord`] that
/// passed the keyword filter, augmented with derived features.
///
/// Produced once per pipeline run and never mutated afterwards; the
/// reporting layer only filters and groups it. `id` is unique within any
/// classified set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedIncident {
    /// Source incident identifier, unique post-deduplication.
    pub id: String,
    /// Incident description as ingested.
    pub description: Option<String>,
    /// Offense category text as ingested.
    pub primary_type: Option<String>,
    /// Whether an arrest was made.
    pub arrest: Option<bool>,
    /// Police district identifier.
    pub district: Option<String>,
    /// Community area identifier.
    pub community_area: Option<String>,
    /// Latitude (WGS84).
    pub latitude: Option<f64>,
    /// Longitude (WGS84).
    pub longitude: Option<f64>,
    /// Derived severity tier.
    pub severity: GunSeverity,
    /// Parsed incident timestamp. `None` when the raw date was missing or
    /// unparseable; such records stay in the classified set with all
    /// temporal fields absent.
    pub occurred_at: Option<DateTime<Utc>>,
    /// Calendar year, present iff the date parsed.
    pub year: Option<i32>,
    /// Calendar month (1-12), present iff the date parsed.
    pub month: Option<u32>,
    /// Day of month (1-31), present iff the date parsed.
    pub day: Option<u32>,
    /// Hour of day (0-23), present iff the date parsed.
    pub hour: Option<u32>,
    /// Day of week with Monday = 0, present iff the date parsed.
    pub day_of_week: Option<u32>,
}
