//! Cell grid derived from a polygon piece's envelope, and the parallel
//! row scan that filters cells through the geometry engine.

use dashmap::DashSet;
use geo::{BoundingRect, Contains, Intersects};
use geo_types::Polygon;
use rayon::prelude::*;

use crate::{
    codec::{lat_step, lng_step, GeoPoint, Geohash},
    cover::{progress::ProgressTracker, CancelToken, CoverCriterion},
    error::{CoverError, CoverResult},
};

/// Integer cell-index bounds of a scan, half-open on both axes. Index `k`
/// names the cell spanning `[k*step, (k+1)*step]`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Grid {
    precision: usize,
    lat_step: f64,
    lng_step: f64,
    lat_lo: i64,
    lat_hi: i64,
    lng_lo: i64,
    lng_hi: i64,
}

impl Grid {
    /// Grid covering a piece's envelope, expanded by half a cell in each
    /// direction so edge-touching cells are not missed, then clamped to
    /// the valid coordinate range.
    pub(crate) fn from_piece(
        piece: &Polygon<f64>,
        precision: usize,
    ) -> Option<Grid> {
        let envelope = piece.bounding_rect()?;
        let lat_step = lat_step(precision);
        let lng_step = lng_step(precision);

        let min_lon = (envelope.min().x - lng_step * 0.5).max(-180.0);
        let max_lon = (envelope.max().x + lng_step * 0.5).min(180.0);
        let min_lat = (envelope.min().y - lat_step * 0.5).max(-90.0);
        let max_lat = (envelope.max().y + lat_step * 0.5).min(90.0);

        Some(Grid {
            precision,
            lat_step,
            lng_step,
            lat_lo: (min_lat / lat_step).floor() as i64,
            lat_hi: (max_lat / lat_step).ceil() as i64,
            lng_lo: (min_lon / lng_step).floor() as i64,
            lng_hi: (max_lon / lng_step).ceil() as i64,
        })
    }

    pub(crate) fn rows(&self) -> usize {
        (self.lat_hi - self.lat_lo).max(0) as usize
    }

    pub(crate) fn cols(&self) -> usize {
        (self.lng_hi - self.lng_lo).max(0) as usize
    }

    fn cell_center(
        &self,
        lat_idx: i64,
        lng_idx: i64,
    ) -> GeoPoint {
        GeoPoint {
            lon: (lng_idx as f64 + 0.5) * self.lng_step,
            lat: (lat_idx as f64 + 0.5) * self.lat_step,
        }
    }
}

/// Scans one piece: latitude rows in parallel, longitude columns inner.
/// Hits land in the shared concurrent set; the cancellation token is
/// polled once per row.
pub(crate) fn scan_piece(
    piece: &Polygon<f64>,
    grid: &Grid,
    criterion: CoverCriterion,
    cells: &DashSet<String>,
    tracker: &ProgressTracker<'_>,
    cancel: Option<&CancelToken>,
) -> CoverResult<()> {
    (grid.lat_lo..grid.lat_hi)
        .into_par_iter()
        .try_for_each(|lat_idx| {
            if cancel.is_some_and(|token| token.is_cancelled()) {
                return Err(CoverError::Cancelled);
            }

            for lng_idx in grid.lng_lo..grid.lng_hi {
                let center = grid.cell_center(lat_idx, lng_idx);
                let cell = Geohash::encode(center, grid.precision)?;
                let cell_polygon = cell.bounding_box().to_polygon();

                let hit = match criterion {
                    CoverCriterion::Contains => piece.contains(&cell_polygon),
                    CoverCriterion::Intersects => piece.intersects(&cell_polygon),
                };
                if hit {
                    cells.insert(cell.into_string());
                }
            }

            tracker.row_done();
            Ok(())
        })
}
