#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reporting layer over classified firearm incidents.
//!
//! Everything here consumes `&[ClassifiedIncident]` and never mutates it:
//! grouping and aggregation for the statistical summaries, a geographic
//! bounding-box post-filter for map consumers, and reproducible sampling
//! for renderers that can't handle the full matched set.

pub mod aggregate;
pub mod geo;
pub mod sample;
