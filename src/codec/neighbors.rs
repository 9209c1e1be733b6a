use crate::{
    codec::{lat_step, lng_step, GeoPoint, Geohash},
    error::GeohashResult,
};

/// Compass direction to an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];
}

/// The eight cells adjacent to a geohash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors {
    pub n: Geohash,
    pub ne: Geohash,
    pub e: Geohash,
    pub se: Geohash,
    pub s: Geohash,
    pub sw: Geohash,
    pub w: Geohash,
    pub nw: Geohash,
}

impl Neighbors {
    pub fn get(
        &self,
        direction: Direction,
    ) -> &Geohash {
        match direction {
            Direction::N => &self.n,
            Direction::NE => &self.ne,
            Direction::E => &self.e,
            Direction::SE => &self.se,
            Direction::S => &self.s,
            Direction::SW => &self.sw,
            Direction::W => &self.w,
            Direction::NW => &self.nw,
        }
    }
}

impl Geohash {
    /// The adjacent cell in the given direction, at the same precision.
    ///
    /// Cardinal neighbors step one cell width from the center and
    /// re-encode; longitude wraps across the antimeridian and latitude is
    /// clamped at the poles, so the poleward neighbor of a polar cell is
    /// the cell itself. Diagonals compose the cardinal steps and inherit
    /// both rules.
    pub fn neighbor(
        &self,
        direction: Direction,
    ) -> GeohashResult<Geohash> {
        match direction {
            Direction::N => self.step(1.0, 0.0),
            Direction::S => self.step(-1.0, 0.0),
            Direction::E => self.step(0.0, 1.0),
            Direction::W => self.step(0.0, -1.0),
            Direction::NE => self.neighbor(Direction::N)?.neighbor(Direction::E),
            Direction::NW => self.neighbor(Direction::N)?.neighbor(Direction::W),
            Direction::SE => self.neighbor(Direction::S)?.neighbor(Direction::E),
            Direction::SW => self.neighbor(Direction::S)?.neighbor(Direction::W),
        }
    }

    /// All eight neighbors.
    pub fn neighbors(&self) -> GeohashResult<Neighbors> {
        Ok(Neighbors {
            n: self.neighbor(Direction::N)?,
            ne: self.neighbor(Direction::NE)?,
            e: self.neighbor(Direction::E)?,
            se: self.neighbor(Direction::SE)?,
            s: self.neighbor(Direction::S)?,
            sw: self.neighbor(Direction::SW)?,
            w: self.neighbor(Direction::W)?,
            nw: self.neighbor(Direction::NW)?,
        })
    }

    fn step(
        &self,
        dlat: f64,
        dlon: f64,
    ) -> GeohashResult<Geohash> {
        let center = self.decode();
        let lat = (center.lat + dlat * lat_step(self.precision())).clamp(-90.0, 90.0);
        // Encode re-normalizes longitude into [-180, 180).
        let lon = center.lon + dlon * lng_step(self.precision());
        Geohash::encode(GeoPoint { lon, lat }, self.precision())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
