/// CSV export of generated readings.
pub mod export;
