use geo_types::{coord, Polygon, Rect};

/// A geographic point (longitude and latitude in degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// The rectangular degree-space area named by a geohash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub fn new(
        min_lon: f64,
        max_lon: f64,
        min_lat: f64,
        max_lat: f64,
    ) -> Self {
        Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        }
    }

    /// Geometric center of the box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lon: (self.min_lon + self.max_lon) * 0.5,
            lat: (self.min_lat + self.max_lat) * 0.5,
        }
    }

    pub fn width_lon(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    pub fn height_lat(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn contains_point(
        &self,
        point: GeoPoint,
    ) -> bool {
        point.lon >= self.min_lon
            && point.lon <= self.max_lon
            && point.lat >= self.min_lat
            && point.lat <= self.max_lat
    }

    /// The box as a `geo-types` rectangle, the seam to the geometry engine.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_lon, y: self.min_lat },
            coord! { x: self.max_lon, y: self.max_lat },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}
