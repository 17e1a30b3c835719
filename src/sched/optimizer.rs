//! Optimal-window search over an hourly grid forecast.

use crate::forecast::types::TimePoint;

use super::types::{OptimizationResult, ScheduleError, validate_series};

/// Finds the contiguous window of `duration_hours` with the lowest mean
/// carbon intensity.
///
/// Evaluates every feasible start index left to right with a strict `<`
/// comparison, so among equally clean windows the earliest one wins.
/// Means are computed by direct summation per candidate; with at most 48
/// points the O(n·w) scan is a handful of comparisons. Pure function of
/// its inputs.
///
/// # Errors
///
/// * [`ScheduleError::WindowTooLong`] when `duration_hours` exceeds the
///   series length.
/// * [`ScheduleError::InvalidSeries`] when the series is empty or not on
///   a strict hourly step.
///
/// # Panics
///
/// Panics if `duration_hours == 0`.
pub fn find_optimal_window(
    series: &[TimePoint],
    duration_hours: usize,
) -> Result<OptimizationResult, ScheduleError> {
    assert!(duration_hours > 0, "duration_hours must be > 0");
    validate_series(series)?;

    if duration_hours > series.len() {
        return Err(ScheduleError::WindowTooLong {
            requested: duration_hours,
            available: series.len(),
        });
    }

    let mut best_index = 0;
    let mut best_avg = f32::INFINITY;
    for i in 0..=series.len() - duration_hours {
        let avg = mean_carbon(&series[i..i + duration_hours]);
        if avg < best_avg {
            best_avg = avg;
            best_index = i;
        }
    }

    let window = &series[best_index..best_index + duration_hours];
    Ok(OptimizationResult {
        start_index: best_index,
        start_time: window[0].timestamp,
        end_time: window[window.len() - 1].timestamp,
        avg_carbon: best_avg,
        avg_price: mean_price(window),
    })
}

/// First index after now (index 0) whose carbon intensity is below
/// `threshold_gco2`, or `None` if the grid stays dirty all horizon.
pub fn next_green_hour(series: &[TimePoint], threshold_gco2: f32) -> Option<usize> {
    series
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, p)| p.carbon_intensity < threshold_gco2)
        .map(|(i, _)| i)
}

pub(crate) fn mean_carbon(window: &[TimePoint]) -> f32 {
    window.iter().map(|p| p.carbon_intensity).sum::<f32>() / window.len() as f32
}

pub(crate) fn mean_price(window: &[TimePoint]) -> f32 {
    window.iter().map(|p| p.price).sum::<f32>() / window.len() as f32
}
