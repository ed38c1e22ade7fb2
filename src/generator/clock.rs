//! Conversion of fractional hour-of-day values into wall-clock timestamps.
//!
//! Hours are clamped to `[0, 23]` on both sides. The minute comes only from
//! the first decimal digit `d` of the value's fractional part, scaled as
//! `ceil(59 * d / 10)`, so the reachable minutes are
//! `0, 6, 12, 18, 24, 30, 36, 42, 48, 54`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Output format for timestamps, sortable as plain strings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const REFERENCE_YEAR: i32 = 2020;
const REFERENCE_MONTH: u32 = 1;
const REFERENCE_DAY: u32 = 5;

/// Latest hour a reading may land on.
pub const MAX_HOUR: u32 = 23;

/// The fixed calendar day every generated reading is placed on (2020-01-05).
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, REFERENCE_MONTH, REFERENCE_DAY).unwrap_or_default()
}

/// An hour/minute pair derived from one expanded time sample.
///
/// # Examples
///
/// ```
/// use evc_datagen::generator::clock::ClockValue;
///
/// let c = ClockValue::from_fractional_hour(23.5);
/// assert_eq!((c.hour(), c.minute()), (23, 30));
/// assert_eq!(c.to_timestamp_string(), "2020-01-05 23:30:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockValue {
    hour: u32,
    minute: u32,
}

impl ClockValue {
    /// Normalizes a fractional hour into a clock value.
    ///
    /// Non-finite input saturates: NaN and negative infinity map to 00:00,
    /// positive infinity to 23:00.
    pub fn from_fractional_hour(value: f64) -> Self {
        if !value.is_finite() {
            let hour = if value == f64::INFINITY { MAX_HOUR } else { 0 };
            return Self { hour, minute: 0 };
        }

        let floor = value.floor();
        let hour = floor.clamp(0.0, f64::from(MAX_HOUR)) as u32;

        // Read the digit from the value in hundredths so that binary
        // representation error (9.2 - 9.0 == 0.1999...) cannot shift it.
        let hundredths = ((value - floor) * 100.0).round() as u32;
        let digit = ((hundredths / 10) % 10) as u8;

        Self {
            hour,
            minute: minute_for_digit(digit),
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Places this clock value on the reference date with zero seconds.
    pub fn to_datetime(&self) -> NaiveDateTime {
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default();
        reference_date().and_time(time)
    }

    pub fn to_timestamp_string(&self) -> String {
        format_timestamp(&self.to_datetime())
    }
}

/// Maps a tenths digit to a minute: 0 stays 0, otherwise `ceil(59 * d / 10)`.
///
/// Digits above 9 are treated as 9.
pub fn minute_for_digit(digit: u8) -> u32 {
    let d = u32::from(digit.min(9));
    if d == 0 {
        return 0;
    }
    (59 * d).div_ceil(10)
}

/// Formats a reading timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Converts every expanded sample into a timestamp on the reference date.
pub fn normalize_all(values: &[f64]) -> Vec<NaiveDateTime> {
    values
        .iter()
        .map(|&v| ClockValue::from_fractional_hour(v).to_datetime())
        .collect()
}
