use std::fmt;

use crate::{
    codec::{base32, BoundingBox, GeoPoint},
    error::{GeohashError, GeohashResult},
};

pub const MIN_PRECISION: usize = 1;
pub const MAX_PRECISION: usize = 12;

/// A geohash cell name together with its precision (character count).
///
/// Instances are always canonical: lowercase alphabet characters, length
/// within 1..=12. Construct through [`Geohash::encode`] or
/// [`Geohash::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Geohash {
    hash: String,
    precision: usize,
}

impl Geohash {
    /// Encodes a point into a geohash of the requested precision.
    ///
    /// Longitude is first normalized into `[-180, 180)`, so +180 maps to
    /// -180 and any finite longitude is accepted. Latitude must lie in
    /// `[-90, 90]`.
    pub fn encode(
        point: GeoPoint,
        precision: usize,
    ) -> GeohashResult<Self> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
            return Err(GeohashError::InvalidPrecision(precision));
        }

        let lon = normalize_lon(point.lon);
        if !(-180.0..180.0).contains(&lon) || !(-90.0..=90.0).contains(&point.lat) {
            return Err(GeohashError::InvalidCoordinate {
                lon: point.lon,
                lat: point.lat,
            });
        }

        Ok(Self {
            hash: encode_base32(lon, point.lat, precision),
            precision,
        })
    }

    /// Validates a geohash string.
    pub fn parse(s: &str) -> GeohashResult<Self> {
        if s.is_empty() {
            return Err(GeohashError::EmptyGeohash);
        }
        for c in s.chars() {
            base32::value_of(c)?;
        }
        // All characters are ASCII at this point, so bytes == chars.
        if s.len() > MAX_PRECISION {
            return Err(GeohashError::TooLong(s.len()));
        }

        Ok(Self {
            hash: s.to_string(),
            precision: s.len(),
        })
    }

    /// Center of the cell's bounding box.
    pub fn decode(&self) -> GeoPoint {
        self.bounding_box().center()
    }

    /// The exact bounding box, derived by running the binary refinement
    /// five times per character.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut min_lon = -180.0;
        let mut max_lon = 180.0;
        let mut min_lat = -90.0;
        let mut max_lat = 90.0;

        let mut bit_index = 0;
        for c in self.hash.chars() {
            let value = base32::value_of(c).expect("geohash is validated on construction");

            for bit in 0..5 {
                let is_high = (value >> (4 - bit)) & 1 == 1;
                if bit_index % 2 == 0 {
                    let mid = (min_lon + max_lon) * 0.5;
                    if is_high {
                        min_lon = mid;
                    } else {
                        max_lon = mid;
                    }
                } else {
                    let mid = (min_lat + max_lat) * 0.5;
                    if is_high {
                        min_lat = mid;
                    } else {
                        max_lat = mid;
                    }
                }
                bit_index += 1;
            }
        }

        BoundingBox::new(min_lon, max_lon, min_lat, max_lat)
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn into_string(self) -> String {
        self.hash
    }

    /// The (n-1)-length prefix cell.
    pub fn parent(&self) -> GeohashResult<Geohash> {
        if self.precision <= MIN_PRECISION {
            return Err(GeohashError::NoParent);
        }
        Ok(Geohash {
            hash: self.hash[..self.precision - 1].to_string(),
            precision: self.precision - 1,
        })
    }

    /// The 32 next-precision cells tiling this one, in alphabet order.
    pub fn children(&self) -> GeohashResult<Vec<Geohash>> {
        if self.precision >= MAX_PRECISION {
            return Err(GeohashError::TooLong(self.precision + 1));
        }

        Ok(base32::ALPHABET
            .iter()
            .map(|&b| {
                let mut hash = self.hash.clone();
                hash.push(b as char);
                Geohash {
                    hash,
                    precision: self.precision + 1,
                }
            })
            .collect())
    }

    pub fn has_prefix(
        &self,
        prefix: &str,
    ) -> bool {
        self.hash.starts_with(prefix)
    }

    /// The first `len` characters (at most the full hash).
    pub fn prefix(
        &self,
        len: usize,
    ) -> &str {
        &self.hash[..len.min(self.precision)]
    }
}

impl fmt::Display for Geohash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}

impl AsRef<str> for Geohash {
    fn as_ref(&self) -> &str {
        &self.hash
    }
}

/// Cell height in degrees at a precision: `180 / 2^floor(5n/2)`.
pub fn lat_step(precision: usize) -> f64 {
    180.0 / 2f64.powi((5 * precision / 2) as i32)
}

/// Cell width in degrees at a precision: `360 / 2^ceil(5n/2)`.
pub fn lng_step(precision: usize) -> f64 {
    360.0 / 2f64.powi(((5 * precision + 1) / 2) as i32)
}

/// Approximate short side of a cell in meters, per precision.
pub fn cell_size_meters(precision: usize) -> f64 {
    match precision {
        1 => 5_000_000.0,
        2 => 630_000.0,
        3 => 156_000.0,
        4 => 20_000.0,
        5 => 4_900.0,
        6 => 1_200.0,
        7 => 153.0,
        8 => 38.0,
        9 => 4.8,
        10 => 1.2,
        11 => 0.149,
        _ => 0.037,
    }
}

/// Smallest precision whose cells stay usefully below a search radius.
pub fn precision_for_radius(radius_m: f64) -> usize {
    if radius_m > 2_500_000.0 {
        1
    } else if radius_m > 300_000.0 {
        2
    } else if radius_m > 40_000.0 {
        3
    } else if radius_m > 10_000.0 {
        4
    } else if radius_m > 2_500.0 {
        5
    } else if radius_m > 600.0 {
        6
    } else if radius_m > 80.0 {
        7
    } else if radius_m > 20.0 {
        8
    } else if radius_m > 2.5 {
        9
    } else if radius_m > 0.6 {
        10
    } else if radius_m > 0.075 {
        11
    } else {
        12
    }
}

/// Normalizes a longitude into `[-180, 180)`; +180 maps to -180.
pub(crate) fn normalize_lon(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Interleaves longitude/latitude bits, longitude first, emitting a
/// base-32 character every five bits. Midpoint goes to the upper half.
/// Mirror image of [`Geohash::bounding_box`].
fn encode_base32(
    lon: f64,
    lat: f64,
    chars: usize,
) -> String {
    let mut min_lon = -180.0;
    let mut max_lon = 180.0;
    let mut min_lat = -90.0;
    let mut max_lat = 90.0;

    let mut hash = String::with_capacity(chars);
    let mut bit_index = 0;

    for _ in 0..chars {
        let mut value = 0u8;
        for _ in 0..5 {
            value <<= 1;
            if bit_index % 2 == 0 {
                let mid = (min_lon + max_lon) * 0.5;
                if lon >= mid {
                    value |= 1;
                    min_lon = mid;
                } else {
                    max_lon = mid;
                }
            } else {
                let mid = (min_lat + max_lat) * 0.5;
                if lat >= mid {
                    value |= 1;
                    min_lat = mid;
                } else {
                    max_lat = mid;
                }
            }
            bit_index += 1;
        }
        hash.push(base32::char_of(value));
    }
    hash
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
