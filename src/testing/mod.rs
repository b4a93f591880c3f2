//! Test helpers: fixture themes and text rendering of emission results.
//!
//! Use [`scenario_theme`] for a small, predictable spacing scale and
//! [`render_emission`] to turn an [`EmissionResult`](crate::style::EmissionResult)
//! into a single line for snapshot-style assertions.

pub mod fixtures;
pub mod snapshot;

pub use fixtures::scenario_theme;
pub use snapshot::render_emission;
