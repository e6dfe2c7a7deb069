//! Grouping and aggregation over classified incidents.
//!
//! Temporal groupings carry an explicit `unknown` bucket for incidents
//! whose date never parsed; those records stay in the classified set and
//! must never be silently excluded from a breakdown.

use std::collections::BTreeMap;

use gun_trends_classifier_models::{ClassifiedIncident, GunSeverity};
use serde::{Deserialize, Serialize};

/// Incident count for a single calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearCount {
    /// Calendar year.
    pub year: i32,
    /// Incidents in that year.
    pub count: u64,
}

/// Incidents per year, ascending by year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyCounts {
    /// Per-year counts, ascending.
    pub years: Vec<YearCount>,
    /// Incidents whose date never parsed.
    pub unknown: u64,
}

/// Incident count for a single (year, month) bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCount {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Incidents in that month.
    pub count: u64,
}

/// Incidents per (year, month), chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// Chronological (year, month) counts.
    pub points: Vec<MonthCount>,
    /// Incidents whose date never parsed.
    pub unknown: u64,
}

/// Arrest statistics for one offense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrestRate {
    /// Lowercased offense category text.
    pub primary_type: String,
    /// Total incidents in this category.
    pub total: u64,
    /// Incidents where an arrest was made.
    pub arrests: u64,
    /// Arrest percentage (0-100).
    pub arrest_rate_pct: f64,
}

/// Incident counts per day of week, Monday = 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayCounts {
    /// Counts indexed Monday = 0 through Sunday = 6.
    pub counts: [u64; 7],
    /// Incidents whose date never parsed.
    pub unknown: u64,
}

/// Incident counts per hour of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyCounts {
    /// Counts indexed by hour 0-23.
    pub counts: [u64; 24],
    /// Incidents whose date never parsed.
    pub unknown: u64,
}

/// Incident count for one categorical area (district or community area).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaCount {
    /// Area identifier as it appears in the extract.
    pub area: String,
    /// Incidents attributed to that area.
    pub count: u64,
}

/// Incident counts per severity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityBreakdown {
    /// Homicide/murder tier.
    pub severe: u64,
    /// Robbery/assault tier.
    pub high: u64,
    /// Default tier.
    pub medium: u64,
}

/// Counts incidents per calendar year.
#[must_use]
pub fn yearly_counts(incidents: &[ClassifiedIncident]) -> YearlyCounts {
    let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
    let mut unknown: u64 = 0;

    for incident in incidents {
        match incident.year {
            Some(year) => *by_year.entry(year).or_insert(0) += 1,
            None => unknown += 1,
        }
    }

    YearlyCounts {
        years: by_year
            .into_iter()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
        unknown,
    }
}

/// Counts incidents per (year, month), chronological.
#[must_use]
pub fn monthly_trend(incidents: &[ClassifiedIncident]) -> MonthlyTrend {
    let mut by_month: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    let mut unknown: u64 = 0;

    for incident in incidents {
        match (incident.year, incident.month) {
            (Some(year), Some(month)) => *by_month.entry((year, month)).or_insert(0) += 1,
            _ => unknown += 1,
        }
    }

    MonthlyTrend {
        points: by_month
            .into_iter()
            .map(|((year, month), count)| MonthCount { year, month, count })
            .collect(),
        unknown,
    }
}

/// Computes the arrest rate for the `top_n` most frequent offense
/// categories, most frequent first within rate ties, highest rate first
/// overall.
///
/// Categories are grouped on lowercased text; incidents with no category
/// land in an `"unknown"` bucket. An absent arrest flag counts as no
/// arrest.
#[must_use]
pub fn arrest_rate_by_type(incidents: &[ClassifiedIncident], top_n: usize) -> Vec<ArrestRate> {
    let mut by_type: BTreeMap<String, (u64, u64)> = BTreeMap::new();

    for incident in incidents {
        let key = incident
            .primary_type
            .as_deref()
            .map_or_else(|| "unknown".to_string(), str::to_lowercase);
        let entry = by_type.entry(key).or_insert((0, 0));
        entry.0 += 1;
        if incident.arrest == Some(true) {
            entry.1 += 1;
        }
    }

    let mut rates: Vec<ArrestRate> = by_type
        .into_iter()
        .map(|(primary_type, (total, arrests))| {
            #[allow(clippy::cast_precision_loss)]
            let arrest_rate_pct = if total == 0 {
                0.0
            } else {
                arrests as f64 / total as f64 * 100.0
            };
            ArrestRate {
                primary_type,
                total,
                arrests,
                arrest_rate_pct,
            }
        })
        .collect();

    // Keep the most frequent categories, then present highest arrest rate
    // first, matching the source analysis.
    rates.sort_by(|a, b| b.total.cmp(&a.total));
    rates.truncate(top_n);
    rates.sort_by(|a, b| {
        b.arrest_rate_pct
            .partial_cmp(&a.arrest_rate_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.total.cmp(&a.total))
    });
    rates
}

/// Counts incidents per day of week, Monday = 0.
#[must_use]
pub fn day_of_week_counts(incidents: &[ClassifiedIncident]) -> WeekdayCounts {
    let mut counts = [0u64; 7];
    let mut unknown: u64 = 0;

    for incident in incidents {
        match incident.day_of_week {
            Some(weekday) if (weekday as usize) < 7 => counts[weekday as usize] += 1,
            _ => unknown += 1,
        }
    }

    WeekdayCounts { counts, unknown }
}

/// Counts incidents per hour of day.
#[must_use]
pub fn hourly_counts(incidents: &[ClassifiedIncident]) -> HourlyCounts {
    let mut counts = [0u64; 24];
    let mut unknown: u64 = 0;

    for incident in incidents {
        match incident.hour {
            Some(hour) if (hour as usize) < 24 => counts[hour as usize] += 1,
            _ => unknown += 1,
        }
    }

    HourlyCounts { counts, unknown }
}

/// Returns the `top_n` police districts by incident count, descending.
/// Incidents without a district are not ranked.
#[must_use]
pub fn top_districts(incidents: &[ClassifiedIncident], top_n: usize) -> Vec<AreaCount> {
    top_areas(incidents.iter().filter_map(|i| i.district.as_deref()), top_n)
}

/// Returns the `top_n` community areas by incident count, descending.
/// Incidents without a community area are not ranked.
#[must_use]
pub fn top_community_areas(incidents: &[ClassifiedIncident], top_n: usize) -> Vec<AreaCount> {
    top_areas(
        incidents.iter().filter_map(|i| i.community_area.as_deref()),
        top_n,
    )
}

fn top_areas<'a>(areas: impl Iterator<Item = &'a str>, top_n: usize) -> Vec<AreaCount> {
    let mut by_area: BTreeMap<&str, u64> = BTreeMap::new();
    for area in areas {
        *by_area.entry(area).or_insert(0) += 1;
    }

    let mut counts: Vec<AreaCount> = by_area
        .into_iter()
        .map(|(area, count)| AreaCount {
            area: area.to_owned(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.area.cmp(&b.area)));
    counts.truncate(top_n);
    counts
}

/// Counts incidents per severity tier.
#[must_use]
pub fn severity_breakdown(incidents: &[ClassifiedIncident]) -> SeverityBreakdown {
    let mut breakdown = SeverityBreakdown {
        severe: 0,
        high: 0,
        medium: 0,
    };
    for incident in incidents {
        match incident.severity {
            GunSeverity::Severe => breakdown.severe += 1,
            GunSeverity::High => breakdown.high += 1,
            GunSeverity::Medium => breakdown.medium += 1,
        }
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(
        id: &str,
        year: Option<i32>,
        month: Option<u32>,
        severity: GunSeverity,
    ) -> ClassifiedIncident {
        ClassifiedIncident {
            id: id.to_string(),
            description: Some("handgun".to_string()),
            primary_type: Some("WEAPONS VIOLATION".to_string()),
            arrest: Some(false),
            district: Some("11".to_string()),
            community_area: None,
            latitude: None,
            longitude: None,
            severity,
            occurred_at: None,
            year,
            month,
            day: None,
            hour: None,
            day_of_week: year.map(|_| 0),
        }
    }

    #[test]
    fn yearly_counts_with_unknown_bucket() {
        let incidents = vec![
            incident("1", Some(2019), Some(1), GunSeverity::Medium),
            incident("2", Some(2019), Some(2), GunSeverity::Medium),
            incident("3", Some(2020), Some(1), GunSeverity::Medium),
            incident("4", None, None, GunSeverity::Medium),
        ];
        let counts = yearly_counts(&incidents);
        assert_eq!(
            counts.years,
            vec![
                YearCount {
                    year: 2019,
                    count: 2
                },
                YearCount {
                    year: 2020,
                    count: 1
                },
            ]
        );
        assert_eq!(counts.unknown, 1);
    }

    #[test]
    fn monthly_trend_is_chronological() {
        let incidents = vec![
            incident("1", Some(2020), Some(3), GunSeverity::Medium),
            incident("2", Some(2019), Some(12), GunSeverity::Medium),
            incident("3", Some(2020), Some(3), GunSeverity::Medium),
        ];
        let trend = monthly_trend(&incidents);
        assert_eq!(trend.points.len(), 2);
        assert_eq!((trend.points[0].year, trend.points[0].month), (2019, 12));
        assert_eq!(trend.points[1].count, 2);
        assert_eq!(trend.unknown, 0);
    }

    #[test]
    fn monthly_trend_buckets_dateless_incidents_as_unknown() {
        let incidents = vec![
            incident("1", Some(2020), Some(3), GunSeverity::Medium),
            incident("2", None, None, GunSeverity::Medium),
        ];
        let trend = monthly_trend(&incidents);
        assert_eq!(trend.points.len(), 1);
        assert_eq!(trend.unknown, 1);
    }

    #[test]
    fn arrest_rates_group_on_lowercased_type() {
        let mut a = incident("1", Some(2020), Some(1), GunSeverity::High);
        a.primary_type = Some("ROBBERY".to_string());
        a.arrest = Some(true);
        let mut b = incident("2", Some(2020), Some(1), GunSeverity::High);
        b.primary_type = Some("robbery".to_string());
        b.arrest = Some(false);
        let mut c = incident("3", Some(2020), Some(1), GunSeverity::Medium);
        c.primary_type = None;

        let rates = arrest_rate_by_type(&[a, b, c], 10);
        assert_eq!(rates.len(), 2);
        let robbery = rates.iter().find(|r| r.primary_type == "robbery").unwrap();
        assert_eq!(robbery.total, 2);
        assert_eq!(robbery.arrests, 1);
        assert!((robbery.arrest_rate_pct - 50.0).abs() < f64::EPSILON);
        assert!(rates.iter().any(|r| r.primary_type == "unknown"));
    }

    #[test]
    fn weekday_counts_use_unknown_bucket() {
        let mut dated = incident("1", Some(2020), Some(1), GunSeverity::Medium);
        dated.day_of_week = Some(5);
        let undated = incident("2", None, None, GunSeverity::Medium);

        let counts = day_of_week_counts(&[dated, undated]);
        assert_eq!(counts.counts[5], 1);
        assert_eq!(counts.unknown, 1);
    }

    #[test]
    fn hourly_counts_use_unknown_bucket() {
        let mut evening = incident("1", Some(2020), Some(1), GunSeverity::Medium);
        evening.hour = Some(22);
        let mut midnight = incident("2", Some(2020), Some(1), GunSeverity::Medium);
        midnight.hour = Some(0);
        let undated = incident("3", None, None, GunSeverity::Medium);

        let counts = hourly_counts(&[evening, midnight, undated]);
        assert_eq!(counts.counts[22], 1);
        assert_eq!(counts.counts[0], 1);
        assert_eq!(counts.counts.iter().sum::<u64>(), 2);
        assert_eq!(counts.unknown, 1);
    }

    #[test]
    fn top_districts_rank_by_count() {
        let mut incidents = vec![
            incident("1", Some(2020), Some(1), GunSeverity::Medium),
            incident("2", Some(2020), Some(1), GunSeverity::Medium),
            incident("3", Some(2020), Some(1), GunSeverity::Medium),
        ];
        incidents[2].district = Some("7".to_string());
        let mut no_district = incident("4", Some(2020), Some(1), GunSeverity::Medium);
        no_district.district = None;
        incidents.push(no_district);

        let top = top_districts(&incidents, 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].area, "11");
        assert_eq!(top[0].count, 2);
    }

    #[test]
    fn top_community_areas_rank_by_count_and_respect_top_n() {
        let mut incidents = vec![
            incident("1", Some(2020), Some(1), GunSeverity::Medium),
            incident("2", Some(2020), Some(1), GunSeverity::Medium),
            incident("3", Some(2020), Some(1), GunSeverity::Medium),
            incident("4", Some(2020), Some(1), GunSeverity::Medium),
        ];
        incidents[0].community_area = Some("25".to_string());
        incidents[1].community_area = Some("25".to_string());
        incidents[2].community_area = Some("43".to_string());
        incidents[3].community_area = None;

        let top = top_community_areas(&incidents, 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].area, "25");
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].area, "43");

        let capped = top_community_areas(&incidents, 1);
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].area, "25");
    }

    #[test]
    fn severity_breakdown_counts_tiers() {
        let incidents = vec![
            incident("1", None, None, GunSeverity::Severe),
            incident("2", None, None, GunSeverity::High),
            incident("3", None, None, GunSeverity::High),
            incident("4", None, None, GunSeverity::Medium),
        ];
        let breakdown = severity_breakdown(&incidents);
        assert_eq!(breakdown.severe, 1);
        assert_eq!(breakdown.high, 2);
        assert_eq!(breakdown.medium, 1);
    }
}
