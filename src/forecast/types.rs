//! Forecast series sample type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed step between consecutive forecast points.
pub const SECS_PER_HOUR: i64 = 3600;

/// Hour of day (0–23, UTC) for an hour-aligned unix timestamp.
pub fn hour_of_day(timestamp: i64) -> u32 {
    timestamp.div_euclid(SECS_PER_HOUR).rem_euclid(24) as u32
}

/// One hour of the grid forecast.
///
/// The generator guarantees `carbon_intensity >= 10.0` and `price >= 0.5`
/// (clamped at generation); consumers must not rely on those bounds for
/// arbitrary input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Unix timestamp in seconds, aligned to the hour.
    pub timestamp: i64,
    /// Grid carbon intensity (gCO2/kWh).
    pub carbon_intensity: f32,
    /// Electricity price (currency/kWh).
    pub price: f32,
    /// Solar share of generation (0–100 %).
    pub solar_pct: f32,
}

impl TimePoint {
    /// Hour of day (0–23, UTC) for this point.
    pub fn hour_of_day(&self) -> u32 {
        hour_of_day(self.timestamp)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:00 | carbon={:>6.1} gCO2/kWh  price={:>6.2}/kWh  solar={:>5.1}%",
            self.hour_of_day(),
            self.carbon_intensity,
            self.price,
            self.solar_pct,
        )
    }
}
