//! Geographic bounding-box post-filter for map consumers.
//!
//! Layered on top of the classified set, never part of classification
//! itself: only map-oriented consumers need coordinates, and records
//! without them simply can't be placed on a map.

use gun_trends_classifier_models::ClassifiedIncident;
use serde::{Deserialize, Serialize};

/// An axis-aligned geographic bounding box with exclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Southern bound (exclusive).
    pub min_lat: f64,
    /// Northern bound (exclusive).
    pub max_lat: f64,
    /// Western bound (exclusive).
    pub min_lng: f64,
    /// Eastern bound (exclusive).
    pub max_lng: f64,
}

impl BoundingBox {
    /// The regional extent used by the map layer:
    /// latitude in (41.6, 42.1), longitude in (-88.0, -87.5).
    pub const REGIONAL: Self = Self {
        min_lat: 41.6,
        max_lat: 42.1,
        min_lng: -88.0,
        max_lng: -87.5,
    };

    /// Whether a point lies strictly inside the box.
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude > self.min_lat
            && latitude < self.max_lat
            && longitude > self.min_lng
            && longitude < self.max_lng
    }

    /// Returns the incidents with coordinates strictly inside the box,
    /// preserving input order. Incidents without coordinates are excluded.
    #[must_use]
    pub fn filter(&self, incidents: &[ClassifiedIncident]) -> Vec<ClassifiedIncident> {
        let inside: Vec<ClassifiedIncident> = incidents
            .iter()
            .filter(|incident| match (incident.latitude, incident.longitude) {
                (Some(lat), Some(lng)) => self.contains(lat, lng),
                _ => false,
            })
            .cloned()
            .collect();

        log::debug!(
            "Bounding box kept {} of {} incidents",
            inside.len(),
            incidents.len()
        );

        inside
    }
}
