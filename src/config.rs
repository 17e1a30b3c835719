//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::forecast::profile;
use crate::sched::types::JobRequest;

/// Longest supported forecast horizon (hours).
pub const MAX_HORIZON_HOURS: usize = 168;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Forecast generation parameters.
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Compute job parameters.
    #[serde(default)]
    pub job: JobConfig,
}

/// Forecast generation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    /// Grid region name (must match a built-in region profile).
    pub region: String,
    /// Forecast horizon in hours (1–168).
    pub horizon_hours: usize,
    /// Optional seed override; falls back to the region's default seed.
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            region: "india-west".to_string(),
            horizon_hours: 48,
            seed: None,
        }
    }
}

/// Compute job parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobConfig {
    /// Number of compute units (e.g. accelerators).
    pub unit_count: u32,
    /// Power draw per unit (kW).
    pub power_per_unit_kw: f32,
    /// Job duration in whole hours.
    pub duration_hours: usize,
    /// Carbon intensity below which an hour counts as green (gCO2/kWh).
    pub green_threshold_gco2: f32,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            unit_count: 8,
            power_per_unit_kw: 0.4,
            duration_hours: 4,
            green_threshold_gco2: 400.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"forecast.horizon_hours"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: 48 h india-west forecast, 8 units
    /// at 0.4 kW for 4 h.
    pub fn baseline() -> Self {
        Self {
            forecast: ForecastConfig::default(),
            job: JobConfig::default(),
        }
    }

    /// Returns the overnight-batch preset: a long heavy job in us-east.
    pub fn overnight_batch() -> Self {
        Self {
            forecast: ForecastConfig {
                region: "us-east".to_string(),
                ..ForecastConfig::default()
            },
            job: JobConfig {
                unit_count: 64,
                duration_hours: 12,
                green_threshold_gco2: 380.0,
                ..JobConfig::default()
            },
        }
    }

    /// Returns the quick-run preset: a single-hour job on a short horizon.
    pub fn quick_run() -> Self {
        Self {
            forecast: ForecastConfig {
                horizon_hours: 24,
                ..ForecastConfig::default()
            },
            job: JobConfig {
                unit_count: 2,
                duration_hours: 1,
                ..JobConfig::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "overnight-batch", "quick-run"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "overnight-batch" => Ok(Self::overnight_batch()),
            "quick-run" => Ok(Self::quick_run()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Seed to generate with: the explicit override, or the region's
    /// default when the region is known.
    pub fn effective_seed(&self) -> Option<u64> {
        self.forecast
            .seed
            .or_else(|| profile::lookup(&self.forecast.region).map(|p| p.default_seed))
    }

    /// Builds the job request described by `[job]`.
    ///
    /// # Panics
    ///
    /// Panics on non-positive job parameters; call [`Self::validate`] first.
    pub fn job_request(&self) -> JobRequest {
        JobRequest::from_units(
            self.job.unit_count,
            self.job.power_per_unit_kw,
            self.job.duration_hours,
        )
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let fc = &self.forecast;

        if profile::lookup(&fc.region).is_none() {
            errors.push(ConfigError {
                field: "forecast.region".into(),
                message: format!(
                    "unknown region \"{}\", available: {}",
                    fc.region,
                    profile::known_regions()
                ),
            });
        }
        if fc.horizon_hours == 0 {
            errors.push(ConfigError {
                field: "forecast.horizon_hours".into(),
                message: "must be > 0".into(),
            });
        }
        if fc.horizon_hours > MAX_HORIZON_HOURS {
            errors.push(ConfigError {
                field: "forecast.horizon_hours".into(),
                message: format!("must be <= {MAX_HORIZON_HOURS}"),
            });
        }

        let job = &self.job;
        if job.unit_count == 0 {
            errors.push(ConfigError {
                field: "job.unit_count".into(),
                message: "must be > 0".into(),
            });
        }
        if !(job.power_per_unit_kw > 0.0 && job.power_per_unit_kw.is_finite()) {
            errors.push(ConfigError {
                field: "job.power_per_unit_kw".into(),
                message: "must be a positive finite number".into(),
            });
        }
        if job.duration_hours == 0 {
            errors.push(ConfigError {
                field: "job.duration_hours".into(),
                message: "must be > 0".into(),
            });
        }
        if !(job.green_threshold_gco2 > 0.0) {
            errors.push(ConfigError {
                field: "job.green_threshold_gco2".into(),
                message: "must be > 0".into(),
            });
        }

        errors
    }
}
