//! Synthetic grid forecast generator.
//!
//! Produces an hourly carbon-intensity/price/solar series with a daily
//! sine shape: carbon peaks at 19:00, price tracks carbon, solar follows
//! a half-sine between 06:00 and 18:00. All randomness comes from a
//! seeded RNG held by the generator, so identical parameters produce an
//! identical series.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::profile::RegionProfile;
use super::types::{SECS_PER_HOUR, TimePoint, hour_of_day};

/// Lower clamp on generated carbon intensity (gCO2/kWh).
pub const MIN_CARBON_GCO2: f32 = 10.0;

/// Lower clamp on generated price (currency/kWh).
pub const MIN_PRICE: f32 = 0.5;

/// Phase shift so the carbon sine peaks at hour 19.
const CARBON_PEAK_SHIFT_H: f32 = 13.0;

/// First daylight hour (inclusive).
const SUNRISE_HOUR: u32 = 6;

/// Last daylight hour (inclusive).
const SUNSET_HOUR: u32 = 18;

/// Gaussian noise std on the solar share (percentage points).
const SOLAR_NOISE_STD: f32 = 5.0;

/// Deterministic mock forecast source for one region.
#[derive(Debug, Clone)]
pub struct GridForecaster {
    profile: RegionProfile,
    rng: StdRng,
}

impl GridForecaster {
    /// Creates a forecaster for `profile` seeded with `seed`.
    pub fn new(profile: &RegionProfile, seed: u64) -> Self {
        Self {
            profile: profile.clone(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `hours` consecutive hourly points starting at
    /// `start_timestamp` (truncated down to the hour).
    ///
    /// Timestamps are strictly ascending with a fixed 3600 s step;
    /// carbon and price are clamped to [`MIN_CARBON_GCO2`] and
    /// [`MIN_PRICE`], the solar share to 0–100 %.
    pub fn forecast(&mut self, start_timestamp: i64, hours: usize) -> Vec<TimePoint> {
        let start = start_timestamp - start_timestamp.rem_euclid(SECS_PER_HOUR);
        let p = &self.profile;

        let mut points = Vec::with_capacity(hours);
        for i in 0..hours {
            let timestamp = start + i as i64 * SECS_PER_HOUR;
            let h = hour_of_day(timestamp);

            let wave =
                (2.0 * std::f32::consts::PI * (h as f32 - CARBON_PEAK_SHIFT_H) / 24.0).sin();
            let carbon_intensity = (p.base_carbon
                + p.carbon_amplitude * wave
                + gaussian_noise(&mut self.rng, p.carbon_noise_std))
            .max(MIN_CARBON_GCO2);

            // Dirty peaker hours are expensive hours.
            let price = (p.price_base
                + carbon_intensity * p.carbon_price_slope
                + gaussian_noise(&mut self.rng, p.price_noise_std))
            .max(MIN_PRICE);

            let solar_pct = if (SUNRISE_HOUR..=SUNSET_HOUR).contains(&h) {
                let arg = (h - SUNRISE_HOUR) as f32 * std::f32::consts::PI
                    / (SUNSET_HOUR - SUNRISE_HOUR) as f32;
                let raw = arg.sin() * 100.0 * p.solar_potential
                    + gaussian_noise(&mut self.rng, SOLAR_NOISE_STD);
                raw.clamp(0.0, 100.0)
            } else {
                0.0
            };

            points.push(TimePoint {
                timestamp,
                carbon_intensity,
                price,
                solar_pct,
            });
        }
        points
    }
}

/// Gaussian noise via the Box-Muller transform, mean 0.
fn gaussian_noise(rng: &mut StdRng, std_dev: f32) -> f32 {
    if std_dev <= 0.0 {
        return 0.0;
    }

    let u1: f32 = rng.random::<f32>().clamp(1e-6, 1.0);
    let u2: f32 = rng.random::<f32>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
    z0 * std_dev
}
