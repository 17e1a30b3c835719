//! API response and query types.
//!
//! Field names follow the CSV schema v1 conventions for consistency
//! across export formats.

use serde::{Deserialize, Serialize};

use crate::forecast::types::TimePoint;
use crate::sched::types::{JobRequest, OptimizationResult, SavingsReport};

/// Single forecast record using CSV schema v1 field names.
#[derive(Debug, Serialize)]
pub struct ForecastRecord {
    /// Hour index within the forecast (0-based).
    pub hour: usize,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Hour of day (0–23, UTC).
    pub hour_of_day: u32,
    /// Grid carbon intensity (gCO2/kWh).
    pub carbon_gco2_kwh: f32,
    /// Electricity price (currency/kWh).
    pub price_kwh: f32,
    /// Solar share of generation (0–100 %).
    pub solar_pct: f32,
}

impl ForecastRecord {
    /// Maps a series point at `hour` to its public record.
    pub fn from_point(hour: usize, p: &TimePoint) -> Self {
        Self {
            hour,
            timestamp: p.timestamp,
            hour_of_day: p.hour_of_day(),
            carbon_gco2_kwh: p.carbon_intensity,
            price_kwh: p.price,
            solar_pct: p.solar_pct,
        }
    }
}

/// Combined recommendation response for one scheduling run.
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    /// Region the forecast was generated for.
    pub region: String,
    /// Job the recommendation was computed for.
    pub job: JobRequest,
    /// Winning window.
    pub optimal: OptimizationResult,
    /// Savings vs. starting now.
    pub savings: SavingsReport,
    /// First green hour after now, if any.
    pub next_green_hour: Option<usize>,
}

/// Optional range query parameters for the forecast endpoint.
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    /// Start hour index (inclusive).
    pub from: Option<usize>,
    /// End hour index (inclusive).
    pub to: Option<usize>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_record_maps_fields() {
        let p = TimePoint {
            timestamp: 1_735_689_600 + 19 * 3600,
            carbon_intensity: 545.0,
            price: 14.9,
            solar_pct: 0.0,
        };
        let rec = ForecastRecord::from_point(19, &p);
        assert_eq!(rec.hour, 19);
        assert_eq!(rec.hour_of_day, 19);
        assert_eq!(rec.carbon_gco2_kwh, 545.0);
        assert_eq!(rec.price_kwh, 14.9);
        assert_eq!(rec.solar_pct, 0.0);
    }
}
