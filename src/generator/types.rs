//! Core generator types: day parts, bucket sizes, and output records.

use std::fmt;

use chrono::NaiveDateTime;

use crate::error::GenError;

/// Standard deviation, in hours, shared by all three day-part distributions.
pub const SIGMA_HOURS: f64 = 3.0;

/// Number of sub-events each sampled arrival expands into.
pub const SUB_EVENTS: usize = 5;

/// One of the three Gaussian arrival clusters over a day.
///
/// # Examples
///
/// ```
/// use evc_datagen::generator::types::DayPart;
///
/// assert_eq!(DayPart::Morning.mean_hour(), 9.0);
/// assert_eq!(DayPart::Evening.to_string(), "evening");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
}

impl DayPart {
    /// Mean arrival hour of this cluster (9am, 1pm, 6pm).
    pub fn mean_hour(self) -> f64 {
        match self {
            DayPart::Morning => 9.0,
            DayPart::Afternoon => 13.0,
            DayPart::Evening => 18.0,
        }
    }
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayPart::Morning => "morning",
            DayPart::Afternoon => "afternoon",
            DayPart::Evening => "evening",
        };
        f.write_str(name)
    }
}

/// Number of base charging arrivals drawn for each day part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketSizes {
    pub morning: usize,
    pub afternoon: usize,
    pub evening: usize,
}

impl BucketSizes {
    /// Creates bucket sizes from already non-negative counts.
    pub fn new(morning: usize, afternoon: usize, evening: usize) -> Self {
        Self {
            morning,
            afternoon,
            evening,
        }
    }

    /// Creates bucket sizes from signed counts, as read from config or CLI.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidBucket`] for the first negative count, in
    /// morning, afternoon, evening order.
    pub fn try_new(morning: i64, afternoon: i64, evening: i64) -> Result<Self, GenError> {
        let check = |part: DayPart, value: i64| {
            usize::try_from(value).map_err(|_| GenError::InvalidBucket { part, value })
        };
        Ok(Self {
            morning: check(DayPart::Morning, morning)?,
            afternoon: check(DayPart::Afternoon, afternoon)?,
            evening: check(DayPart::Evening, evening)?,
        })
    }

    /// Count requested for a single day part.
    pub fn count(&self, part: DayPart) -> usize {
        match part {
            DayPart::Morning => self.morning,
            DayPart::Afternoon => self.afternoon,
            DayPart::Evening => self.evening,
        }
    }

    /// Total number of raw samples (N).
    pub fn base_count(&self) -> usize {
        self.morning + self.afternoon + self.evening
    }

    /// Total number of output rows (5N).
    pub fn event_count(&self) -> usize {
        self.base_count() * SUB_EVENTS
    }
}

/// One output row: a charging reading timestamp and its power draw in watts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRecord {
    pub timestamp: NaiveDateTime,
    pub power_w: u32,
}

/// Rounds to two decimal places, half away from zero.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
