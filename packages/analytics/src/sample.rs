//! Reproducible sampling for rendering-time size caps.
//!
//! When a renderer can't handle the full matched set, a fixed-size uniform
//! random sample with a fixed seed stands in for it. This is strictly a
//! reporting-time concern: the classified set itself is never altered.

use gun_trends_classifier_models::ClassifiedIncident;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default cap on the number of incidents handed to a renderer.
pub const RENDER_SAMPLE_CAP: usize = 50_000;

/// Default seed, fixed so repeated runs render the same sample.
pub const RENDER_SAMPLE_SEED: u64 = 1;

/// Takes a uniform random sample of at most `cap` incidents without
/// replacement, seeded for reproducibility.
///
/// If the input already fits under the cap this is the identity (a clone
/// of the full set). The sample preserves the relative input order of the
/// selected incidents.
#[must_use]
pub fn sample_for_rendering(
    incidents: &[ClassifiedIncident],
    cap: usize,
    seed: u64,
) -> Vec<ClassifiedIncident> {
    if incidents.len() <= cap {
        return incidents.to_vec();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indexes = rand::seq::index::sample(&mut rng, incidents.len(), cap).into_vec();
    indexes.sort_unstable();

    log::debug!(
        "Sampled {cap} of {} incidents for rendering (seed {seed})",
        incidents.len()
    );

    indexes.into_iter().map(|i| incidents[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gun_trends_classifier_models::GunSeverity;

    fn incident(id: u32) -> ClassifiedIncident {
        ClassifiedIncident {
            id: id.to_string(),
            description: None,
            primary_type: None,
            arrest: None,
            district: None,
            community_area: None,
            latitude: None,
            longitude: None,
            severity: GunSeverity::Medium,
            occurred_at: None,
            year: None,
            month: None,
            day: None,
            hour: None,
            day_of_week: None,
        }
    }

    #[test]
    fn identity_under_the_cap() {
        let incidents: Vec<ClassifiedIncident> = (0..10).map(incident).collect();
        let sampled = sample_for_rendering(&incidents, 50, 1);
        assert_eq!(sampled, incidents);
    }

    #[test]
    fn caps_the_sample_size() {
        let incidents: Vec<ClassifiedIncident> = (0..100).map(incident).collect();
        let sampled = sample_for_rendering(&incidents, 25, 1);
        assert_eq!(sampled.len(), 25);
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let incidents: Vec<ClassifiedIncident> = (0..100).map(incident).collect();
        let first = sample_for_rendering(&incidents, 25, 1);
        let second = sample_for_rendering(&incidents, 25, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn sample_preserves_relative_input_order() {
        let incidents: Vec<ClassifiedIncident> = (0..100).map(incident).collect();
        let sampled = sample_for_rendering(&incidents, 25, 7);
        let ids: Vec<u32> = sampled.iter().map(|i| i.id.parse().unwrap()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn sample_draws_only_from_the_input() {
        let incidents: Vec<ClassifiedIncident> = (0..100).map(incident).collect();
        let sampled = sample_for_rendering(&incidents, 25, 3);
        for item in &sampled {
            assert!(incidents.contains(item));
        }
    }
}
