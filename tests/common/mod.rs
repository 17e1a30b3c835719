//! Shared test fixtures for integration tests.

use gridshift::forecast::profile::{self, RegionProfile};
use gridshift::forecast::types::{SECS_PER_HOUR, TimePoint};

/// Hour-aligned start timestamp: 2025-01-01 00:00 UTC.
pub const START_TS: i64 = 1_735_689_600;

/// Builds an hourly series from parallel carbon/price slices.
pub fn series_from(carbon: &[f32], price: &[f32]) -> Vec<TimePoint> {
    assert_eq!(carbon.len(), price.len());
    carbon
        .iter()
        .zip(price)
        .enumerate()
        .map(|(i, (&c, &p))| TimePoint {
            timestamp: START_TS + i as i64 * SECS_PER_HOUR,
            carbon_intensity: c,
            price: p,
            solar_pct: 0.0,
        })
        .collect()
}

/// Builds a flat series with constant carbon and price.
pub fn flat_series(len: usize, carbon: f32, price: f32) -> Vec<TimePoint> {
    series_from(&vec![carbon; len], &vec![price; len])
}

/// Default region profile used across generator tests.
pub fn default_region() -> &'static RegionProfile {
    profile::lookup("india-west").expect("built-in region")
}
