//! Synthetic EV charger reading generation.

/// Fractional-hour to wall-clock conversion.
pub mod clock;
/// Expansion of arrivals into sub-event bursts.
pub mod expander;
pub mod pipeline;
/// Charger power draw sampling.
pub mod power;
pub mod summary;
/// Gaussian arrival-time sampling.
pub mod time_sampler;
pub mod types;

pub use pipeline::{Generator, generate_records};
pub use summary::DatasetSummary;
pub use types::{BucketSizes, DayPart, EventRecord};
