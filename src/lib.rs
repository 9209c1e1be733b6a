//! Geocover - a geohash spatial index with coverage and compression
//! utilities.
//!
//! Main modules:
//! - `codec` — base-32 geohash codec: encode/decode, bounding boxes, the
//!   parent/children hierarchy and 8-way neighbor lookups
//! - `cover` — polygon-to-geohash coverage engine (Contains / Intersects
//!   criteria, antimeridian splitting, parallel row scan)
//! - `compress` — minimal prefix-set compression of geohash collections
//! - `error` — common error types

/// Base-32 geohash codec: cells, bounding boxes, hierarchy, neighbors.
pub mod codec;
/// Geohash prefix-set compression.
pub mod compress;
/// Polygon-to-geohash coverage engine.
pub mod cover;
/// Common error types.
pub mod error;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Codec types: cells, points, boxes, directions, precision constants.
pub use codec::{
    cell_size_meters, lat_step, lng_step, precision_for_radius, BoundingBox, Direction, GeoPoint,
    Geohash, Neighbors, MAX_PRECISION, MIN_PRECISION,
};

/// Prefix-set compression.
pub use compress::{compress, compress_with_levels, DEFAULT_MAX_LEVEL, DEFAULT_MIN_LEVEL};

/// Coverage engine: entry points, criteria, options, progress, cancellation.
pub use cover::{
    cover, cover_bounding_box, cover_with_options, CancelToken, CoverCriterion, CoverOptions,
    ProgressSink,
};

/// Operation errors and result types.
pub use error::{
    CompressError, CompressResult, CoverError, CoverResult, GeohashError, GeohashResult,
};
