//! Antimeridian handling for the coverage engine.
//!
//! Rings that jump across the ±180° seam are unwrapped into a continuous
//! longitude frame, clipped against half-plane strips at the exceeded
//! meridian, and the out-of-range pieces translated back by 360°.

use geo::{BooleanOps, BoundingRect, Translate};
use geo_types::{coord, LineString, Polygon, Rect};
use tracing::{debug, warn};

use crate::error::{CoverError, CoverResult};

/// Half-extent of the clip strips. Must exceed any longitude the unwrap
/// step can produce.
const CLIP_EXTENT: f64 = 1_000.0;

/// Splits an antimeridian-crossing polygon into pieces that each fit the
/// `[-180, 180]` longitude range. Non-crossing polygons pass through
/// unchanged.
pub(crate) fn split(polygon: &Polygon<f64>) -> CoverResult<Vec<Polygon<f64>>> {
    let Some(envelope) = polygon.bounding_rect() else {
        return Ok(Vec::new());
    };
    // A polygon already spanning the full longitude range (an
    // entire-world polygon) has nothing to split.
    if envelope.width() >= 360.0 {
        return Ok(vec![polygon.clone()]);
    }
    if !crosses_antimeridian(polygon.exterior()) {
        return Ok(vec![polygon.clone()]);
    }

    let shell = unwrap_ring(polygon.exterior());
    let shell_envelope = line_envelope(&shell);
    let holes = polygon
        .interiors()
        .iter()
        .map(|hole| align_to_shell(unwrap_ring(hole), &shell_envelope))
        .collect();
    let unwrapped = Polygon::new(shell, holes);

    let beyond_east = shell_envelope.max().x > 180.0;
    let beyond_west = shell_envelope.min().x < -180.0;
    debug!(
        min_lon = shell_envelope.min().x,
        max_lon = shell_envelope.max().x,
        "polygon crosses the antimeridian"
    );

    let pieces = match (beyond_east, beyond_west) {
        (true, true) => {
            warn!("unwrapped polygon exceeds both meridians");
            return Err(CoverError::UnsupportedMultiMeridianSplit);
        }
        // The unwrap landed back inside the valid range.
        (false, false) => vec![unwrapped],
        (true, false) => clip_and_translate(&unwrapped, 180.0, -360.0),
        (false, true) => clip_and_translate(&unwrapped, -180.0, 360.0),
    };

    // A piece still out of range would need a second split.
    for piece in &pieces {
        if let Some(env) = piece.bounding_rect() {
            if env.min().x < -180.0 || env.max().x > 180.0 {
                warn!("piece still crosses a meridian after one split");
                return Err(CoverError::UnsupportedMultiMeridianSplit);
            }
        }
    }

    Ok(pieces)
}

/// True when any consecutive ring edge jumps more than 180° in longitude.
fn crosses_antimeridian(ring: &LineString<f64>) -> bool {
    ring.0.windows(2).any(|w| (w[1].x - w[0].x).abs() > 180.0)
}

/// Rewrites ring longitudes into a continuous frame: whenever an edge
/// jumps more than 180°, all following vertices are shifted by ∓360°.
fn unwrap_ring(ring: &LineString<f64>) -> LineString<f64> {
    let mut out = Vec::with_capacity(ring.0.len());
    let mut offset = 0.0;
    let mut prev_x: Option<f64> = None;

    for &c in &ring.0 {
        if let Some(prev) = prev_x {
            let dx = c.x - prev;
            if dx > 180.0 {
                offset -= 360.0;
            } else if dx < -180.0 {
                offset += 360.0;
            }
        }
        prev_x = Some(c.x);
        out.push(coord! { x: c.x + offset, y: c.y });
    }

    LineString::new(out)
}

/// Shifts an unwrapped hole by ±360° when it ended up a frame away from
/// the shell.
fn align_to_shell(
    hole: LineString<f64>,
    shell_envelope: &Rect<f64>,
) -> LineString<f64> {
    let Some(env) = hole.bounding_rect() else {
        return hole;
    };
    let shell_mid = (shell_envelope.min().x + shell_envelope.max().x) * 0.5;
    let hole_mid = (env.min().x + env.max().x) * 0.5;

    if hole_mid - shell_mid > 180.0 {
        hole.translate(-360.0, 0.0)
    } else if shell_mid - hole_mid > 180.0 {
        hole.translate(360.0, 0.0)
    } else {
        hole
    }
}

/// Clips the unwrapped polygon against the in-range strip and the strip
/// beyond `meridian`; pieces beyond are translated by `shift` back into
/// range.
fn clip_and_translate(
    polygon: &Polygon<f64>,
    meridian: f64,
    shift: f64,
) -> Vec<Polygon<f64>> {
    let (inside, beyond) = if shift < 0.0 {
        // Overflow past +180: the in-range side is west of the meridian.
        (
            strip(meridian - CLIP_EXTENT, meridian),
            strip(meridian, meridian + CLIP_EXTENT),
        )
    } else {
        (
            strip(meridian, meridian + CLIP_EXTENT),
            strip(meridian - CLIP_EXTENT, meridian),
        )
    };

    let mut pieces: Vec<Polygon<f64>> = polygon.intersection(&inside).0;
    pieces.extend(
        polygon
            .intersection(&beyond)
            .0
            .iter()
            .map(|piece| piece.translate(shift, 0.0)),
    );
    pieces
}

fn strip(
    min_lon: f64,
    max_lon: f64,
) -> Polygon<f64> {
    Rect::new(
        coord! { x: min_lon, y: -CLIP_EXTENT },
        coord! { x: max_lon, y: CLIP_EXTENT },
    )
    .to_polygon()
}

fn line_envelope(line: &LineString<f64>) -> Rect<f64> {
    line.bounding_rect()
        .expect("unwrapped ring keeps its vertices")
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use geo::Area;
    use geo_types::polygon;

    use super::*;

    #[test]
    fn test_non_crossing_polygon_passes_through() {
        let poly = polygon![
            (x: 2.0, y: 48.0),
            (x: 3.0, y: 48.0),
            (x: 3.0, y: 49.0),
            (x: 2.0, y: 49.0),
            (x: 2.0, y: 48.0),
        ];
        let pieces = split(&poly).unwrap();
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0], poly);
    }

    /// A Fiji-style rectangle crossing +180 splits into one piece per
    /// hemisphere, both inside the valid range, with the area preserved.
    #[test]
    fn test_crossing_rectangle_splits_in_two() {
        let poly = polygon![
            (x: 170.0, y: -10.0),
            (x: -170.0, y: -10.0),
            (x: -170.0, y: 10.0),
            (x: 170.0, y: 10.0),
            (x: 170.0, y: -10.0),
        ];
        let pieces = split(&poly).unwrap();
        assert_eq!(pieces.len(), 2);

        let mut area = 0.0;
        for piece in &pieces {
            let env = piece.bounding_rect().unwrap();
            assert!(env.min().x >= -180.0 && env.max().x <= 180.0);
            area += piece.unsigned_area();
        }
        // 20° of longitude by 20° of latitude.
        assert!((area - 400.0).abs() < 1e-6);

        let has_east = pieces
            .iter()
            .any(|p| p.bounding_rect().unwrap().min().x >= 170.0 - 1e-9);
        let has_west = pieces
            .iter()
            .any(|p| p.bounding_rect().unwrap().max().x <= -170.0 + 1e-9);
        assert!(has_east && has_west);
    }

    /// A hole listed on the far side of the seam is shifted into the
    /// shell's frame and survives the split.
    #[test]
    fn test_hole_aligned_across_seam() {
        let shell: LineString<f64> = LineString::new(vec![
            coord! { x: 170.0, y: -10.0 },
            coord! { x: -170.0, y: -10.0 },
            coord! { x: -170.0, y: 10.0 },
            coord! { x: 170.0, y: 10.0 },
            coord! { x: 170.0, y: -10.0 },
        ]);
        // Hole around the seam itself, expressed in the negative frame.
        let hole: LineString<f64> = LineString::new(vec![
            coord! { x: -178.0, y: -2.0 },
            coord! { x: -178.0, y: 2.0 },
            coord! { x: -176.0, y: 2.0 },
            coord! { x: -176.0, y: -2.0 },
            coord! { x: -178.0, y: -2.0 },
        ]);
        let poly = Polygon::new(shell, vec![hole]);

        let pieces = split(&poly).unwrap();
        let area: f64 = pieces.iter().map(|p| p.unsigned_area()).sum();
        // 400 square degrees minus the 2x4 hole.
        assert!((area - 392.0).abs() < 1e-6);
    }

    #[test]
    fn test_world_spanning_envelope_is_not_split() {
        let poly = polygon![
            (x: -180.0, y: -60.0),
            (x: 180.0, y: -60.0),
            (x: 180.0, y: 60.0),
            (x: -180.0, y: 60.0),
            (x: -180.0, y: -60.0),
        ];
        let pieces = split(&poly).unwrap();
        assert_eq!(pieces.len(), 1);
    }

    /// An unwrap that overflows past +180 and under -180 at once cannot be
    /// fixed by a single split.
    #[test]
    fn test_double_overflow_is_unsupported() {
        let ring = LineString::new(vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 150.0, y: 1.0 },
            coord! { x: -170.0, y: 2.0 },
            coord! { x: 150.0, y: 3.0 },
            coord! { x: 0.0, y: 4.0 },
            coord! { x: -150.0, y: 5.0 },
            coord! { x: 170.0, y: 6.0 },
            coord! { x: -150.0, y: 7.0 },
            coord! { x: 0.0, y: 8.0 },
            coord! { x: 0.0, y: 0.0 },
        ]);
        let poly = Polygon::new(ring, vec![]);
        assert!(matches!(
            split(&poly),
            Err(CoverError::UnsupportedMultiMeridianSplit)
        ));
    }

    #[test]
    fn test_unwrap_round_trip_offsets_cancel() {
        // Crosses eastwards and back; the offsets cancel by the closing
        // vertex.
        let ring = LineString::new(vec![
            coord! { x: 170.0, y: 0.0 },
            coord! { x: -170.0, y: 0.0 },
            coord! { x: 170.0, y: 5.0 },
            coord! { x: 170.0, y: 0.0 },
        ]);
        let unwrapped = unwrap_ring(&ring);
        assert_eq!(unwrapped.0[0].x, 170.0);
        assert_eq!(unwrapped.0[1].x, 190.0);
        assert_eq!(unwrapped.0[2].x, 170.0);
        assert_eq!(unwrapped.0[3].x, 170.0);
    }
}
