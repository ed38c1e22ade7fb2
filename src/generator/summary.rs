//! Post-hoc summary of a generated dataset.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;

use super::clock::format_timestamp;
use super::power::POWER_LEVELS_W;
use super::types::EventRecord;

/// Aggregate figures for a generated dataset.
///
/// Readings are grouped by timestamp and their power summed, the same view a
/// plot of load over the day would show.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    /// Number of rows written.
    pub rows: usize,
    /// Row count for each level in [`POWER_LEVELS_W`], in the same order.
    pub level_counts: [usize; 3],
    /// Sum of all power draws (W).
    pub total_power_w: u64,
    /// Number of distinct timestamps.
    pub distinct_timestamps: usize,
    /// Timestamp with the largest summed draw and that sum (W); earliest wins ties.
    pub peak: Option<(NaiveDateTime, u64)>,
    /// Earliest and latest timestamps.
    pub span: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl DatasetSummary {
    pub fn from_records(records: &[EventRecord]) -> Self {
        let mut level_counts = [0_usize; 3];
        let mut by_timestamp: BTreeMap<NaiveDateTime, u64> = BTreeMap::new();

        for r in records {
            if let Some(idx) = POWER_LEVELS_W.iter().position(|&w| w == r.power_w) {
                level_counts[idx] += 1;
            }
            *by_timestamp.entry(r.timestamp).or_insert(0) += u64::from(r.power_w);
        }

        // BTreeMap iterates in time order, so a strict `>` keeps the earliest peak.
        let mut peak: Option<(NaiveDateTime, u64)> = None;
        for (&ts, &sum) in &by_timestamp {
            if peak.is_none_or(|(_, best)| sum > best) {
                peak = Some((ts, sum));
            }
        }

        let span = by_timestamp
            .keys()
            .next()
            .copied()
            .zip(by_timestamp.keys().next_back().copied());

        Self {
            rows: records.len(),
            level_counts,
            total_power_w: by_timestamp.values().sum(),
            distinct_timestamps: by_timestamp.len(),
            peak,
            span,
        }
    }

    /// Fraction of rows drawing `level_w`, or 0 when there are no rows.
    pub fn share_of(&self, level_w: u32) -> f64 {
        if self.rows == 0 {
            return 0.0;
        }
        POWER_LEVELS_W
            .iter()
            .position(|&w| w == level_w)
            .map_or(0.0, |idx| self.level_counts[idx] as f64 / self.rows as f64)
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Dataset Summary ---")?;
        writeln!(f, "Rows: {}", self.rows)?;
        writeln!(f, "Distinct timestamps: {}", self.distinct_timestamps)?;
        for (level, count) in POWER_LEVELS_W.iter().zip(self.level_counts) {
            writeln!(
                f,
                "{:>6} W: {count} ({:.1}%)",
                level,
                100.0 * self.share_of(*level)
            )?;
        }
        writeln!(f, "Total draw: {:.1} kW", self.total_power_w as f64 / 1000.0)?;
        if let Some((first, last)) = &self.span {
            writeln!(
                f,
                "Span: {} .. {}",
                format_timestamp(first),
                format_timestamp(last)
            )?;
        }
        match &self.peak {
            Some((ts, w)) => write!(
                f,
                "Peak: {:.1} kW at {}",
                *w as f64 / 1000.0,
                format_timestamp(ts)
            ),
            None => write!(f, "Peak: n/a"),
        }
    }
}
