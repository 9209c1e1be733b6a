//! Error types for the codec, the coverage engine and the compressor.

pub mod compress;
pub mod cover;
pub mod geohash;

// Publicly re-export all error types and result aliases from the submodules
// to simplify access from external code.
pub use compress::*;
pub use cover::*;
pub use geohash::*;
