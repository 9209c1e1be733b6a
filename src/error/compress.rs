use thiserror::Error;

use crate::error::GeohashError;

pub type CompressResult<T> = Result<T, CompressError>;

/// Errors produced by the prefix-set compressor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompressError {
    #[error("invalid level range: min={min}, max={max} (expected 1 <= min <= max <= 12)")]
    InvalidLevelRange { min: usize, max: usize },

    #[error(transparent)]
    Geohash(#[from] GeohashError),
}
