use thiserror::Error;

use crate::error::GeohashError;

pub type CoverResult<T> = Result<T, CoverError>;

/// Errors produced by the polygon coverage engine.
#[derive(Error, Debug)]
pub enum CoverError {
    #[error("precision {0} out of range 1..=12")]
    InvalidPrecision(usize),

    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("polygon would need splitting at more than one meridian")]
    UnsupportedMultiMeridianSplit,

    #[error("coverage cancelled")]
    Cancelled,

    #[error("worker pool: {0}")]
    WorkerPool(String),

    #[error(transparent)]
    Geohash(#[from] GeohashError),
}
