//! Error type shared by the generator pipeline, configuration, and export.

use std::io;

use thiserror::Error;

use crate::generator::types::DayPart;

/// Errors raised while building or writing a synthetic EV charging dataset.
#[derive(Debug, Error)]
pub enum GenError {
    /// A bucket size was negative. Raised before any sampling happens.
    #[error("invalid {part} bucket size {value}: must be >= 0")]
    InvalidBucket { part: DayPart, value: i64 },

    /// Timestamp and power sequences could not be paired positionally.
    #[error("cannot pair {timestamps} timestamps with {powers} power draws")]
    LengthMismatch { timestamps: usize, powers: usize },

    /// Configuration could not be loaded or failed validation.
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
