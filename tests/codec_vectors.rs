//! Concrete codec vectors.

use geocover::{Direction, GeoPoint, Geohash, GeohashError};
use rstest::rstest;

#[rstest]
#[case(52.5174, 13.409, 6, "u33dc0")]
#[case(0.0, 0.0, 6, "s00000")]
#[case(35.3003, -120.6623, 5, "9q60y")]
#[case(37.8324, 112.5584, 9, "ww8p1r4t8")]
#[case(57.64911, 10.40744, 11, "u4pruydqqvj")]
fn test_encode_vectors(
    #[case] lat: f64,
    #[case] lon: f64,
    #[case] precision: usize,
    #[case] expected: &str,
) {
    let cell = Geohash::encode(GeoPoint { lon, lat }, precision).unwrap();
    assert_eq!(cell.as_str(), expected);
}

#[test]
fn test_decode_vector() {
    let cell = Geohash::parse("9q60y").unwrap();
    let center = cell.decode();
    assert_eq!(center.lon, -120.65185546875);
    assert_eq!(center.lat, 35.31005859375);
}

#[rstest]
#[case("u", Direction::W, "g")]
#[case("u", Direction::E, "v")]
#[case("u", Direction::S, "s")]
// "u" touches the north pole; clamping keeps the neighbor on this side.
#[case("u", Direction::N, "u")]
// West of "8" wraps across the antimeridian to positive longitude.
#[case("8", Direction::W, "x")]
#[case("9q60y60rhs", Direction::N, "9q60y60rht")]
#[case("9q60y60rhs", Direction::NE, "9q60y60rhv")]
#[case("9q60y60rhs", Direction::E, "9q60y60rhu")]
#[case("9q60y60rhs", Direction::SE, "9q60y60rhg")]
#[case("9q60y60rhs", Direction::S, "9q60y60rhe")]
#[case("9q60y60rhs", Direction::SW, "9q60y60rh7")]
#[case("9q60y60rhs", Direction::W, "9q60y60rhk")]
#[case("9q60y60rhs", Direction::NW, "9q60y60rhm")]
fn test_neighbor_vectors(
    #[case] hash: &str,
    #[case] direction: Direction,
    #[case] expected: &str,
) {
    let cell = Geohash::parse(hash).unwrap();
    assert_eq!(cell.neighbor(direction).unwrap().as_str(), expected);
}

#[rstest]
#[case("", GeohashError::EmptyGeohash)]
#[case("u33dc0u33dc0u", GeohashError::TooLong(13))]
#[case("hello", GeohashError::InvalidCharacter('l'))]
#[case("U33", GeohashError::InvalidCharacter('U'))]
fn test_parse_error_vectors(
    #[case] input: &str,
    #[case] expected: GeohashError,
) {
    assert_eq!(Geohash::parse(input).unwrap_err(), expected);
}
