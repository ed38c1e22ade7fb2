//! End-to-end dataset generation: sample, expand, normalize, and pair.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::clock::normalize_all;
use super::expander::expand_events;
use super::power::sample_power_draws;
use super::time_sampler::{GaussianHours, HourSource, sample_raw_times};
use super::types::{BucketSizes, EventRecord};
use crate::error::GenError;
use crate::io::export::pair_records;

/// Seed offset for the power RNG so it never mirrors the arrival-time stream.
const POWER_SEED_OFFSET: u64 = 57;

/// Generates one day of charger readings.
///
/// Arrival times come from `hours`; power draws are sampled independently
/// from `power_rng` and joined to the timestamps by position only.
///
/// The result always holds `buckets.event_count()` records.
pub fn generate_records(
    hours: &mut impl HourSource,
    power_rng: &mut impl Rng,
    buckets: &BucketSizes,
) -> Vec<EventRecord> {
    let raw = sample_raw_times(hours, buckets);
    debug!(samples = raw.len(), "sampled raw arrival hours");

    let expanded = expand_events(&raw);
    debug!(readings = expanded.len(), "expanded arrivals into readings");

    let timestamps = normalize_all(&expanded);
    let powers = sample_power_draws(power_rng, timestamps.len());
    debug!(draws = powers.len(), "sampled power draws");

    // Both sequences are built from `expanded.len()`, so pairing cannot fail.
    pair_records(&timestamps, &powers).unwrap_or_default()
}

/// Seeded dataset generator.
///
/// Each call to [`Generator::generate`] builds fresh RNGs from the seed, so
/// repeated runs with the same seed and buckets produce identical records.
/// Parallel callers should use distinct seeds.
///
/// # Examples
///
/// ```
/// use evc_datagen::generator::Generator;
/// use evc_datagen::generator::types::BucketSizes;
///
/// let generator = Generator::new(42);
/// let records = generator.generate(&BucketSizes::new(2, 1, 1));
/// assert_eq!(records.len(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    seed: u64,
}

impl Generator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates records for the given bucket sizes.
    pub fn generate(&self, buckets: &BucketSizes) -> Vec<EventRecord> {
        let mut hours = GaussianHours::new(StdRng::seed_from_u64(self.seed));
        let mut power_rng = StdRng::seed_from_u64(self.seed.wrapping_add(POWER_SEED_OFFSET));
        let records = generate_records(&mut hours, &mut power_rng, buckets);
        info!(
            seed = self.seed,
            morning = buckets.morning,
            afternoon = buckets.afternoon,
            evening = buckets.evening,
            rows = records.len(),
            "generated charger dataset"
        );
        records
    }

    /// Validates signed bucket sizes, then generates.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidBucket`] before any sampling if a size is negative.
    pub fn generate_checked(
        &self,
        morning: i64,
        afternoon: i64,
        evening: i64,
    ) -> Result<Vec<EventRecord>, GenError> {
        let buckets = BucketSizes::try_new(morning, afternoon, evening)?;
        Ok(self.generate(&buckets))
    }
}
