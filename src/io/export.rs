//! CSV export for a planned trip's stop list.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::hos::types::TripResult;

/// Schema v1 column header for CSV stop export.
const HEADER: &str = "day,type,label,time,duration_h,lat,lng,mileage";

/// Exports a trip's stops to a CSV file at the given path.
///
/// Writes a header row followed by one data row per stop, in plan
/// order, across all days. Produces deterministic output for
/// identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(trip: &TripResult, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(trip, buf)
}

/// Writes a trip's stops as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(trip: &TripResult, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for day in &trip.days {
        for stop in &day.stops {
            wtr.write_record(&[
                stop.day.to_string(),
                stop.kind.to_string(),
                stop.label.clone(),
                stop.time.clone(),
                format!("{:.2}", stop.duration_h),
                format!("{:.4}", stop.lat),
                format!("{:.4}", stop.lng),
                stop.mileage_rounded.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hos::assembler::plan_trip_from;
    use crate::hos::types::{Location, PlanRequest};
    use chrono::NaiveDate;

    fn sample_trip() -> TripResult {
        let request = PlanRequest {
            current: Location::new("New York, NY", 40.7128, -74.0060),
            pickup: Location::new("Newark, NJ", 40.8, -74.1),
            dropoff: Location::new("Jersey City, NJ", 40.9, -74.2),
            cycle_hours_used: 0,
        };
        plan_trip_from(&request, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
    }

    #[test]
    fn header_matches_schema_v1() {
        let trip = sample_trip();
        let mut buf = Vec::new();
        write_csv(&trip, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(first_line, HEADER);
    }

    #[test]
    fn row_count_matches_stop_count() {
        let trip = sample_trip();
        let total_stops: usize = trip.days.iter().map(|d| d.stops.len()).sum();
        let mut buf = Vec::new();
        write_csv(&trip, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        assert_eq!(lines.len(), total_stops + 1);
    }

    #[test]
    fn deterministic_output() {
        let trip = sample_trip();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&trip, &mut buf1).ok();
        write_csv(&trip, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let trip = sample_trip();
        let mut buf = Vec::new();
        write_csv(&trip, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(8));

        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.expect("row should parse");
            let lat: Result<f64, _> = rec[5].parse();
            assert!(lat.is_ok(), "lat column should parse as f64");
            row_count += 1;
        }
        let total_stops: usize = trip.days.iter().map(|d| d.stops.len()).sum();
        assert_eq!(row_count, total_stops);
    }
}
