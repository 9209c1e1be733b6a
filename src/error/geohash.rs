use thiserror::Error;

pub type GeohashResult<T> = Result<T, GeohashError>;

/// Errors produced by the base-32 codec and the neighbor algebra.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeohashError {
    #[error("coordinate out of range: lon={lon}, lat={lat}")]
    InvalidCoordinate { lon: f64, lat: f64 },

    #[error("precision {0} out of range 1..=12")]
    InvalidPrecision(usize),

    #[error("empty geohash")]
    EmptyGeohash,

    #[error("geohash length {0} exceeds 12 characters")]
    TooLong(usize),

    #[error("character {0:?} is not in the geohash alphabet")]
    InvalidCharacter(char),

    #[error("length-1 geohash has no parent")]
    NoParent,
}
