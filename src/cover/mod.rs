//! Polygon-to-geohash coverage engine.
//!
//! Grids the polygon's envelope at the precision's native cell size and
//! keeps the cells matching the chosen criterion, splitting
//! antimeridian-crossing polygons first. Latitude rows are scanned in
//! parallel on a work-stealing pool; hits accumulate lock-free in a
//! concurrent set.

mod antimeridian;
mod cancel;
mod grid;
mod options;
mod progress;

pub use cancel::CancelToken;
pub use options::CoverOptions;
pub use progress::ProgressSink;

use std::collections::HashSet;

use dashmap::DashSet;
use geo::Validation;
use geo_types::Polygon;
use tracing::debug;

use crate::{
    codec::BoundingBox,
    cover::{grid::Grid, progress::ProgressTracker},
    error::{CoverError, CoverResult},
};

/// Cell selection criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverCriterion {
    /// Keep cells whose bounding box lies fully inside the polygon;
    /// boundary touches are excluded.
    Contains,
    /// Keep cells whose bounding box shares any area, edge or point with
    /// the polygon.
    Intersects,
}

/// Returns the geohash cells of the given precision matching the
/// criterion against the polygon, with default options.
pub fn cover(
    polygon: &Polygon<f64>,
    precision: usize,
    criterion: CoverCriterion,
) -> CoverResult<HashSet<String>> {
    cover_with_options(polygon, precision, criterion, &CoverOptions::default())
}

/// Covers a bounding box instead of an explicit polygon.
pub fn cover_bounding_box(
    bbox: &BoundingBox,
    precision: usize,
    criterion: CoverCriterion,
) -> CoverResult<HashSet<String>> {
    cover(&bbox.to_polygon(), precision, criterion)
}

/// [`cover`] with explicit worker, progress and cancellation settings.
pub fn cover_with_options(
    polygon: &Polygon<f64>,
    precision: usize,
    criterion: CoverCriterion,
    options: &CoverOptions,
) -> CoverResult<HashSet<String>> {
    if !(crate::codec::MIN_PRECISION..=crate::codec::MAX_PRECISION).contains(&precision) {
        return Err(CoverError::InvalidPrecision(precision));
    }

    // An empty polygon covers nothing; full progress is still reported,
    // exactly once.
    if polygon.exterior().0.is_empty() {
        if let Some(sink) = options.progress.as_deref() {
            sink.report(1.0);
        }
        return Ok(HashSet::new());
    }

    polygon
        .check_validation()
        .map_err(|e| CoverError::InvalidPolygon(e.to_string()))?;

    let pieces = antimeridian::split(polygon)?;
    let scans: Vec<(Polygon<f64>, Grid)> = pieces
        .into_iter()
        .filter_map(|piece| Grid::from_piece(&piece, precision).map(|grid| (piece, grid)))
        .collect();

    let total_rows: usize = scans.iter().map(|(_, grid)| grid.rows()).sum();
    let total_cells: usize = scans.iter().map(|(_, grid)| grid.rows() * grid.cols()).sum();
    debug!(
        pieces = scans.len(),
        total_rows, total_cells, precision, "coverage grid prepared"
    );

    let tracker = ProgressTracker::new(total_rows, options.progress.as_deref());
    let cells: DashSet<String> = DashSet::new();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()
        .map_err(|e| CoverError::WorkerPool(e.to_string()))?;

    pool.install(|| {
        scans.iter().try_for_each(|(piece, grid)| {
            grid::scan_piece(
                piece,
                grid,
                criterion,
                &cells,
                &tracker,
                options.cancel.as_ref(),
            )
        })
    })?;

    tracker.finish();
    debug!(cells = cells.len(), "coverage scan complete");

    Ok(cells.into_iter().collect())
}
