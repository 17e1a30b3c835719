//! Savings calculation: optimal window vs. starting now.

use crate::forecast::types::TimePoint;

use super::optimizer::{mean_carbon, mean_price};
use super::types::{JobRequest, OptimizationResult, SavingsReport, ScheduleError, validate_series};

/// Computes cost and carbon savings of running `job` in the optimal
/// window instead of starting at the first forecast hour.
///
/// The baseline is `series[0..duration]`, the "start now" choice. Both
/// deltas are signed and never clamped; a flat series yields exactly
/// zero. Pure function of its inputs.
///
/// # Errors
///
/// * [`ScheduleError::WindowTooLong`] when the job does not fit the
///   forecast horizon (the baseline window is infeasible too).
/// * [`ScheduleError::InvalidSeries`] when the series violates the
///   generator contract.
pub fn compute_savings(
    series: &[TimePoint],
    job: &JobRequest,
    optimal: &OptimizationResult,
) -> Result<SavingsReport, ScheduleError> {
    validate_series(series)?;

    if job.duration_hours > series.len() {
        return Err(ScheduleError::WindowTooLong {
            requested: job.duration_hours,
            available: series.len(),
        });
    }

    let baseline = &series[..job.duration_hours];
    let energy_kwh = job.energy_kwh();

    let cost_now = mean_price(baseline) * energy_kwh;
    let cost_smart = optimal.avg_price * energy_kwh;
    let carbon_saved_g = (mean_carbon(baseline) - optimal.avg_carbon) * energy_kwh;

    Ok(SavingsReport {
        cost_now,
        cost_smart,
        financial_savings: cost_now - cost_smart,
        carbon_saved_g,
        optimal_start_time: optimal.start_time,
        optimal_end_time: optimal.end_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::types::SECS_PER_HOUR;
    use crate::sched::optimizer::find_optimal_window;

    const START: i64 = 1_735_689_600;

    fn series_from(carbon: &[f32], price: &[f32]) -> Vec<TimePoint> {
        carbon
            .iter()
            .zip(price)
            .enumerate()
            .map(|(i, (&c, &p))| TimePoint {
                timestamp: START + i as i64 * SECS_PER_HOUR,
                carbon_intensity: c,
                price: p,
                solar_pct: 0.0,
            })
            .collect()
    }

    #[test]
    fn valley_scenario_savings() {
        // Baseline = hours 0-1 at 500 gCO2; optimal = hours 2-3 at 100 gCO2.
        let series = series_from(&[500.0, 500.0, 100.0, 100.0, 500.0, 500.0], &[10.0; 6]);
        let job = JobRequest::new(10.0, 2);
        let optimal = find_optimal_window(&series, 2).expect("feasible");
        let report = compute_savings(&series, &job, &optimal).expect("computable");

        assert!((job.energy_kwh() - 20.0).abs() < 1e-5);
        assert!((report.carbon_saved_g - 8000.0).abs() < 1e-2);
        assert!((report.financial_savings - 0.0).abs() < 1e-4);
        assert_eq!(report.optimal_start_time, series[2].timestamp);
    }

    #[test]
    fn flat_series_yields_exactly_zero() {
        let series = series_from(&[321.0; 8], &[7.5; 8]);
        let job = JobRequest::new(3.2, 5);
        let optimal = find_optimal_window(&series, 5).expect("feasible");
        let report = compute_savings(&series, &job, &optimal).expect("computable");
        assert_eq!(report.financial_savings, 0.0);
        assert_eq!(report.carbon_saved_g, 0.0);
    }

    #[test]
    fn negative_price_savings_are_not_clamped() {
        // Cleanest window is also the most expensive one.
        let series = series_from(&[500.0, 500.0, 100.0, 100.0], &[5.0, 5.0, 20.0, 20.0]);
        let job = JobRequest::new(1.0, 2);
        let optimal = find_optimal_window(&series, 2).expect("feasible");
        let report = compute_savings(&series, &job, &optimal).expect("computable");
        assert!(report.financial_savings < 0.0, "waiting must cost more here");
        assert!(report.carbon_saved_g > 0.0);
    }

    #[test]
    fn too_long_job_fails_like_the_optimizer() {
        let series = series_from(&[100.0; 24], &[1.0; 24]);
        let optimal = find_optimal_window(&series, 24).expect("feasible");
        let job = JobRequest::new(1.0, 48);
        let err = compute_savings(&series, &job, &optimal).expect_err("infeasible");
        assert_eq!(
            err,
            ScheduleError::WindowTooLong {
                requested: 48,
                available: 24
            }
        );
    }

    #[test]
    fn invalid_series_is_rejected() {
        let optimal = OptimizationResult {
            start_index: 0,
            start_time: START,
            end_time: START,
            avg_carbon: 100.0,
            avg_price: 1.0,
        };
        let job = JobRequest::new(1.0, 1);
        let err = compute_savings(&[], &job, &optimal).expect_err("empty series");
        assert!(matches!(err, ScheduleError::InvalidSeries { .. }));
    }
}
