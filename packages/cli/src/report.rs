//! Plain-text statistics tables for the `stats` subcommand.

use gun_trends_analytics::aggregate;
use gun_trends_classifier_models::ClassifiedIncident;

const WEEKDAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Prints the full set of aggregate tables to stdout.
pub fn print_stats(incidents: &[ClassifiedIncident], top: usize) {
    println!("Firearm incidents: {}", incidents.len());
    println!();

    let severity = aggregate::severity_breakdown(incidents);
    println!("By severity:");
    println!("  Severe  {}", severity.severe);
    println!("  High    {}", severity.high);
    println!("  Medium  {}", severity.medium);
    println!();

    let yearly = aggregate::yearly_counts(incidents);
    println!("Per year:");
    for year in &yearly.years {
        println!("  {}  {}", year.year, year.count);
    }
    if yearly.unknown > 0 {
        println!("  unknown date  {}", yearly.unknown);
    }
    println!();

    let trend = aggregate::monthly_trend(incidents);
    let recent = trend.points.len().saturating_sub(12);
    println!("Monthly trend (last 12 months of {}):", trend.points.len());
    for point in &trend.points[recent..] {
        println!("  {}-{:02}  {}", point.year, point.month, point.count);
    }
    if trend.unknown > 0 {
        println!("  unknown date  {}", trend.unknown);
    }
    println!();

    let hours = aggregate::hourly_counts(incidents);
    println!("By hour:");
    for (hour, count) in hours.counts.iter().enumerate() {
        println!("  {hour:02}:00  {count}");
    }
    if hours.unknown > 0 {
        println!("  unknown  {}", hours.unknown);
    }
    println!();

    let weekdays = aggregate::day_of_week_counts(incidents);
    println!("By day of week:");
    for (label, count) in WEEKDAY_LABELS.iter().zip(weekdays.counts.iter()) {
        println!("  {label:<9}  {count}");
    }
    if weekdays.unknown > 0 {
        println!("  unknown    {}", weekdays.unknown);
    }
    println!();

    println!("Arrest rate for top {top} offense types:");
    for rate in aggregate::arrest_rate_by_type(incidents, top) {
        println!(
            "  {:<40}  {:>6.1}%  ({} of {})",
            rate.primary_type, rate.arrest_rate_pct, rate.arrests, rate.total
        );
    }
    println!();

    println!("Top {top} districts:");
    for area in aggregate::top_districts(incidents, top) {
        println!("  {:<6}  {}", area.area, area.count);
    }
    println!();

    println!("Top {top} community areas:");
    for area in aggregate::top_community_areas(incidents, top) {
        println!("  {:<6}  {}", area.area, area.count);
    }
}
