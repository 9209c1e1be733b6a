//! Base-32 geohash codec: cell names, bounding boxes, the parent/children
//! hierarchy and the 8-way neighbor algebra.

pub mod base32;
pub mod geohash;
pub mod neighbors;
pub mod types;

// Publicly re-export the codec types and functions from the submodules to
// simplify access from external code.
pub use geohash::*;
pub use neighbors::*;
pub use types::*;
