//! CSV export for generated charger readings.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::GenError;
use crate::generator::clock::format_timestamp;
use crate::generator::types::EventRecord;

/// Column header for the exported dataset.
pub const HEADER: [&str; 2] = ["date_time", "power"];

/// Joins timestamps and power draws by position.
///
/// # Errors
///
/// Returns [`GenError::LengthMismatch`] if the sequences differ in length.
pub fn pair_records(
    timestamps: &[NaiveDateTime],
    powers: &[u32],
) -> Result<Vec<EventRecord>, GenError> {
    if timestamps.len() != powers.len() {
        return Err(GenError::LengthMismatch {
            timestamps: timestamps.len(),
            powers: powers.len(),
        });
    }
    Ok(timestamps
        .iter()
        .zip(powers)
        .map(|(&timestamp, &power_w)| EventRecord { timestamp, power_w })
        .collect())
}

/// Exports records to a CSV file at the given path.
///
/// Creates the file or truncates an existing one, then writes a header row
/// followed by one row per record.
///
/// # Arguments
///
/// * `records` - Generated readings, in output order
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[EventRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes records as CSV to any writer.
///
/// Non-numeric fields are quoted, so the header and timestamps appear in
/// double quotes while power values do not.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[EventRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::NonNumeric)
        .from_writer(writer);

    wtr.write_record(HEADER)?;

    for r in records {
        wtr.write_record(&[format_timestamp(&r.timestamp), r.power_w.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::clock::ClockValue;

    fn make_record(hour: f64, power_w: u32) -> EventRecord {
        EventRecord {
            timestamp: ClockValue::from_fractional_hour(hour).to_datetime(),
            power_w,
        }
    }

    fn render(records: &[EventRecord]) -> String {
        let mut buf = Vec::new();
        write_csv(records, &mut buf).ok();
        String::from_utf8(buf).unwrap_or_default()
    }

    #[test]
    fn header_is_quoted() {
        let output = render(&[]);
        assert_eq!(output.lines().next(), Some("\"date_time\",\"power\""));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn timestamp_quoted_power_bare() {
        let output = render(&[make_record(9.2, 7200)]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "\"2020-01-05 09:12:00\",7200");
    }

    #[test]
    fn row_count_matches_record_count() {
        let records: Vec<EventRecord> = (0..24).map(|h| make_record(h as f64, 11000)).collect();
        let output = render(&records);
        // 1 header + 24 data rows
        assert_eq!(output.lines().count(), 25);
    }

    #[test]
    fn round_trip_parseable() {
        let records = vec![make_record(8.4, 7200), make_record(17.9, 22000)];
        let output = render(&records);

        let mut rdr = csv::ReaderBuilder::new().from_reader(output.as_bytes());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(
            headers.as_ref().map(|h| h.iter().collect::<Vec<_>>()),
            Some(vec!["date_time", "power"])
        );

        let rows: Vec<(String, u32)> = rdr
            .records()
            .filter_map(Result::ok)
            .filter_map(|rec| Some((rec.get(0)?.to_string(), rec.get(1)?.parse().ok()?)))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("2020-01-05 08:24:00".to_string(), 7200),
                ("2020-01-05 17:54:00".to_string(), 22000),
            ]
        );
    }

    #[test]
    fn pairing_rejects_length_mismatch() {
        let ts = vec![make_record(1.0, 0).timestamp];
        let err = pair_records(&ts, &[7200, 7200]);
        assert!(matches!(
            err,
            Err(GenError::LengthMismatch {
                timestamps: 1,
                powers: 2
            })
        ));
    }

    #[test]
    fn pairing_is_positional() {
        let ts = vec![make_record(18.0, 0).timestamp, make_record(9.0, 0).timestamp];
        let paired = pair_records(&ts, &[22000, 7200]).unwrap_or_default();
        assert_eq!(paired, vec![make_record(18.0, 22000), make_record(9.0, 7200)]);
    }

    #[test]
    fn export_fails_for_missing_directory() {
        let dir = tempfile::tempdir().ok();
        let path = dir
            .as_ref()
            .map(|d| d.path().join("no_such_dir").join("out.csv"));
        let result = path.map(|p| export_csv(&[], &p));
        assert!(matches!(result, Some(Err(_))));
    }
}
