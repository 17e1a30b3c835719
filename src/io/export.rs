//! CSV export for the generated forecast and the recommended window.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::forecast::types::TimePoint;
use crate::sched::types::OptimizationResult;

/// Schema v1 column header for CSV forecast export.
const HEADER: &str = "hour,timestamp,hour_of_day,carbon_gco2_kwh,price_kwh,\
                      solar_pct,in_optimal_window";

/// Exports the forecast to a CSV file at the given path.
///
/// Writes a header row followed by one data row per forecast hour using
/// the schema v1 column layout. Produces deterministic output for
/// identical inputs.
///
/// # Arguments
///
/// * `series` - Complete forecast series
/// * `optimal` - Winning window, if the optimization was feasible
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(
    series: &[TimePoint],
    optimal: Option<&OptimizationResult>,
    path: &Path,
) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(series, optimal, buf)
}

/// Writes the forecast as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(
    series: &[TimePoint],
    optimal: Option<&OptimizationResult>,
    writer: impl Write,
) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(',').map(str::trim))?;

    // Data rows
    for (hour, p) in series.iter().enumerate() {
        let in_window = optimal
            .map(|o| p.timestamp >= o.start_time && p.timestamp <= o.end_time)
            .unwrap_or(false);
        wtr.write_record(&[
            hour.to_string(),
            p.timestamp.to_string(),
            p.hour_of_day().to_string(),
            format!("{:.4}", p.carbon_intensity),
            format!("{:.4}", p.price),
            format!("{:.4}", p.solar_pct),
            in_window.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::types::SECS_PER_HOUR;
    use crate::sched::optimizer::find_optimal_window;

    const START: i64 = 1_735_689_600;

    fn make_series(len: usize) -> Vec<TimePoint> {
        (0..len)
            .map(|i| TimePoint {
                timestamp: START + i as i64 * SECS_PER_HOUR,
                carbon_intensity: if (2..4).contains(&i) { 100.0 } else { 500.0 },
                price: 10.0,
                solar_pct: 0.0,
            })
            .collect()
    }

    #[test]
    fn header_matches_schema_v1() {
        let series = make_series(1);
        let mut buf = Vec::new();
        write_csv(&series, None, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(
            first_line,
            "hour,timestamp,hour_of_day,carbon_gco2_kwh,price_kwh,\
             solar_pct,in_optimal_window"
        );
    }

    #[test]
    fn row_count_matches_series_length() {
        let series = make_series(24);
        let mut buf = Vec::new();
        write_csv(&series, None, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        // 1 header + 24 data rows
        assert_eq!(lines.len(), 25);
    }

    #[test]
    fn optimal_window_rows_are_flagged() {
        let series = make_series(6);
        let optimal = find_optimal_window(&series, 2).expect("feasible");
        let mut buf = Vec::new();
        write_csv(&series, Some(&optimal), &mut buf).ok();
        let output = String::from_utf8(buf).unwrap_or_default();

        let flags: Vec<&str> = output
            .lines()
            .skip(1)
            .map(|l| l.rsplit(',').next().unwrap_or(""))
            .collect();
        assert_eq!(flags, ["false", "false", "true", "true", "false", "false"]);
    }

    #[test]
    fn deterministic_output() {
        let series = make_series(5);
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&series, None, &mut buf1).ok();
        write_csv(&series, None, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let series = make_series(3);
        let optimal = find_optimal_window(&series, 2).expect("feasible");
        let mut buf = Vec::new();
        write_csv(&series, Some(&optimal), &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(7));

        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            let rec = rec.as_ref();
            // Numeric columns parse as f32
            for i in 3..6 {
                let val: Result<f32, _> = rec.unwrap()[i].parse();
                assert!(val.is_ok(), "column {i} should parse as f32");
            }
            // in_optimal_window parses as bool
            let flag: Result<bool, _> = rec.unwrap()[6].parse();
            assert!(flag.is_ok(), "in_optimal_window column should parse as bool");
            row_count += 1;
        }
        assert_eq!(row_count, 3);
    }
}
