//! Core scheduling types and error conditions.

use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::forecast::types::{SECS_PER_HOUR, TimePoint, hour_of_day};

/// Recoverable scheduling failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The requested duration exceeds the forecast horizon; no window of
    /// that length exists. Expected condition, surfaced to the user as
    /// "no feasible window".
    WindowTooLong {
        /// Requested job duration (hours).
        requested: usize,
        /// Available forecast length (hours).
        available: usize,
    },
    /// The series violates the generator contract (empty, or timestamps
    /// not strictly ascending on a fixed hourly step).
    InvalidSeries {
        /// What was wrong with the series.
        reason: String,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowTooLong {
                requested,
                available,
            } => write!(
                f,
                "no feasible window: job needs {requested} h but the forecast covers {available} h"
            ),
            Self::InvalidSeries { reason } => write!(f, "invalid forecast series: {reason}"),
        }
    }
}

impl Error for ScheduleError {}

/// Checks the series contract: non-empty, strictly ascending timestamps
/// on a fixed 3600 s step.
pub fn validate_series(series: &[TimePoint]) -> Result<(), ScheduleError> {
    if series.is_empty() {
        return Err(ScheduleError::InvalidSeries {
            reason: "series is empty".to_string(),
        });
    }
    for (i, w) in series.windows(2).enumerate() {
        let step = w[1].timestamp - w[0].timestamp;
        if step != SECS_PER_HOUR {
            return Err(ScheduleError::InvalidSeries {
                reason: format!(
                    "expected a fixed {SECS_PER_HOUR} s step, got {step} s between points {i} and {}",
                    i + 1
                ),
            });
        }
    }
    Ok(())
}

/// A compute job to be placed on the grid forecast.
///
/// Read-only input to the core; the core never mutates or stores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JobRequest {
    /// Total power draw while running (kW).
    pub power_draw_kw: f32,
    /// Job duration in whole hours.
    pub duration_hours: usize,
}

impl JobRequest {
    /// Creates a job request.
    ///
    /// # Panics
    ///
    /// Panics if `power_draw_kw <= 0` or `duration_hours == 0`.
    pub fn new(power_draw_kw: f32, duration_hours: usize) -> Self {
        assert!(power_draw_kw > 0.0, "power_draw_kw must be > 0");
        assert!(duration_hours > 0, "duration_hours must be > 0");
        Self {
            power_draw_kw,
            duration_hours,
        }
    }

    /// Derives a request from a unit count and per-unit draw
    /// (e.g. 8 accelerators at 0.4 kW each).
    pub fn from_units(unit_count: u32, per_unit_kw: f32, duration_hours: usize) -> Self {
        Self::new(unit_count as f32 * per_unit_kw, duration_hours)
    }

    /// Total energy consumed over the job (kWh).
    pub fn energy_kwh(&self) -> f32 {
        self.power_draw_kw * self.duration_hours as f32
    }
}

/// Winning window of an optimization call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimizationResult {
    /// Start index of the window within the series.
    pub start_index: usize,
    /// Timestamp of the first point in the window.
    pub start_time: i64,
    /// Timestamp of the last point inside the window (start of its final
    /// hour, matching the dashboard's reporting convention).
    pub end_time: i64,
    /// Mean carbon intensity over the window (gCO2/kWh).
    pub avg_carbon: f32,
    /// Mean price over the window (currency/kWh).
    pub avg_price: f32,
}

/// Savings of the optimal window relative to starting now.
///
/// Both deltas are signed and never clamped: starting now can already be
/// the best choice, and the presentation layer decides how to show that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsReport {
    /// Energy cost when starting at the first forecast hour.
    pub cost_now: f32,
    /// Energy cost when starting at the optimal window.
    pub cost_smart: f32,
    /// `cost_now - cost_smart`; negative when waiting costs more.
    pub financial_savings: f32,
    /// Carbon delta in grams of CO2; negative when waiting emits more.
    pub carbon_saved_g: f32,
    /// Start of the optimal window.
    pub optimal_start_time: i64,
    /// Last hour of the optimal window.
    pub optimal_end_time: i64,
}

impl fmt::Display for SavingsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Recommendation ---")?;
        writeln!(
            f,
            "Optimal window:     {:02}:00 through {:02}:00",
            hour_of_day(self.optimal_start_time),
            hour_of_day(self.optimal_end_time),
        )?;
        writeln!(f, "Cost starting now:  {:.2}", self.cost_now)?;
        writeln!(f, "Cost in window:     {:.2}", self.cost_smart)?;
        writeln!(f, "Financial savings:  {:.2}", self.financial_savings)?;
        write!(f, "Carbon avoided:     {:.0} gCO2", self.carbon_saved_g)
    }
}
