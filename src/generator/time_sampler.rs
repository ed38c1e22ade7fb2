use rand::Rng;
use rand_distr::StandardNormal;

use super::types::{BucketSizes, DayPart, SIGMA_HOURS, round_hundredths};

/// A source of raw arrival hours for a day part.
///
/// The pipeline only depends on this trait, so tests can substitute fixed
/// samples for the Gaussian draws.
pub trait HourSource {
    /// Returns `count` fractional hour-of-day values for `part`.
    ///
    /// Values are not bounded to `[0, 24)`; the clock normalizer handles
    /// samples from the distribution tails.
    fn sample_hours(&mut self, part: DayPart, count: usize) -> Vec<f64>;
}

/// Draws arrival hours from `Normal(part.mean_hour(), 3)`, rounded to hundredths.
///
/// # Examples
///
/// ```
/// use evc_datagen::generator::time_sampler::{GaussianHours, HourSource};
/// use evc_datagen::generator::types::DayPart;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut hours = GaussianHours::new(StdRng::seed_from_u64(7));
/// let morning = hours.sample_hours(DayPart::Morning, 4);
/// assert_eq!(morning.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GaussianHours<R> {
    rng: R,
}

impl<R: Rng> GaussianHours<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> HourSource for GaussianHours<R> {
    fn sample_hours(&mut self, part: DayPart, count: usize) -> Vec<f64> {
        let mean = part.mean_hour();
        (0..count)
            .map(|_| {
                let z: f64 = self.rng.sample(StandardNormal);
                round_hundredths(mean + SIGMA_HOURS * z)
            })
            .collect()
    }
}

/// Samples every bucket and concatenates them as `[morning, evening, afternoon]`.
///
/// Buckets are drawn in morning, afternoon, evening order, so a seeded
/// source yields the same per-bucket values regardless of the output order.
pub fn sample_raw_times(source: &mut impl HourSource, buckets: &BucketSizes) -> Vec<f64> {
    let morning = source.sample_hours(DayPart::Morning, buckets.morning);
    let afternoon = source.sample_hours(DayPart::Afternoon, buckets.afternoon);
    let evening = source.sample_hours(DayPart::Evening, buckets.evening);

    [morning, evening, afternoon].concat()
}
