//! Region generation profiles.
//!
//! Each region is a row of parameters for the mock forecast generator, so
//! adding a region is a data change, not a code change.

/// Generation parameters for one grid region.
#[derive(Debug, Clone)]
pub struct RegionProfile {
    /// Region identifier used in config and CLI.
    pub name: &'static str,
    /// Seed used when the scenario does not override it.
    pub default_seed: u64,
    /// Mean carbon intensity (gCO2/kWh).
    pub base_carbon: f32,
    /// Amplitude of the daily carbon sine wave (gCO2/kWh).
    pub carbon_amplitude: f32,
    /// Gaussian noise std for carbon intensity (gCO2/kWh).
    pub carbon_noise_std: f32,
    /// Price floor component (currency/kWh).
    pub price_base: f32,
    /// Price added per gCO2/kWh of carbon intensity.
    pub carbon_price_slope: f32,
    /// Gaussian noise std for price (currency/kWh).
    pub price_noise_std: f32,
    /// Scale on the daylight solar half-sine (0.0–1.0).
    pub solar_potential: f32,
    /// Dominant generation source label, display only.
    pub dominant_source: &'static str,
}

/// Built-in region table.
pub const REGIONS: &[RegionProfile] = &[
    RegionProfile {
        name: "india-west",
        default_seed: 42,
        base_carbon: 400.0,
        carbon_amplitude: 150.0,
        carbon_noise_std: 20.0,
        price_base: 4.0,
        carbon_price_slope: 0.02,
        price_noise_std: 0.5,
        solar_potential: 1.0,
        dominant_source: "coal",
    },
    RegionProfile {
        name: "india-north",
        default_seed: 101,
        base_carbon: 430.0,
        carbon_amplitude: 140.0,
        carbon_noise_std: 25.0,
        price_base: 4.5,
        carbon_price_slope: 0.02,
        price_noise_std: 0.5,
        solar_potential: 0.8,
        dominant_source: "coal",
    },
    RegionProfile {
        name: "us-east",
        default_seed: 999,
        base_carbon: 340.0,
        carbon_amplitude: 110.0,
        carbon_noise_std: 15.0,
        price_base: 6.0,
        carbon_price_slope: 0.015,
        price_noise_std: 0.4,
        solar_potential: 0.6,
        dominant_source: "gas",
    },
];

/// Looks up a region profile by name.
pub fn lookup(name: &str) -> Option<&'static RegionProfile> {
    REGIONS.iter().find(|p| p.name == name)
}

/// Comma-separated list of known region names, for error messages.
pub fn known_regions() -> String {
    REGIONS
        .iter()
        .map(|p| p.name)
        .collect::<Vec<_>>()
        .join(", ")
}
