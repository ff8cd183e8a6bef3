use std::fmt::{Display, Formatter};

/// Mean earth radius in meters used for all spherical calculations.
pub const EARTH_RADIUS_M: f64 = 6_371e3;

/// A global position given as latitude/longitude in degrees and altitude in meters.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`; neither
/// is enforced or normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
    alt: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64, alt: f64) -> Self { Self { lat, lon, alt } }

    pub fn lat(&self) -> f64 { self.lat }
    pub fn lon(&self) -> f64 { self.lon }
    pub fn alt(&self) -> f64 { self.alt }

    /// Returns the same horizontal position at a different altitude.
    pub fn with_alt(self, alt: f64) -> Self { Self { alt, ..self } }

    /// Moves `distance` meters along the great circle starting at `bearing` degrees.
    ///
    /// The altitude is passed through unchanged. See [`destination_location`].
    pub fn destination(&self, distance: f64, bearing: f64) -> GeoPoint {
        destination_location(self.lat, self.lon, distance, bearing, self.alt)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.7}, {:.7}, {:.2}m]", self.lat, self.lon, self.alt)
    }
}

/// Computes the point reached from a home position after travelling a given
/// distance along a constant initial bearing on a spherical earth.
///
/// # Arguments
/// - `home_lat`, `home_lon`: Start position in degrees.
/// - `distance`: Distance to travel in meters.
/// - `bearing`: Initial bearing in degrees, 0 = north, clockwise positive.
/// - `alt`: Altitude in meters, copied into the result.
///
/// # Returns
/// - The destination as a [`GeoPoint`]. The result is not defined for start
///   points on the poles; longitudes are not wrapped back into `[-180, 180]`.
pub fn destination_location(
    home_lat: f64,
    home_lon: f64,
    distance: f64,
    bearing: f64,
    alt: f64,
) -> GeoPoint {
    let lat_1 = home_lat.to_radians();
    let lon_1 = home_lon.to_radians();
    let theta = bearing.to_radians();
    let delta = distance / EARTH_RADIUS_M;

    let lat_2 = (lat_1.sin() * delta.cos() + lat_1.cos() * delta.sin() * theta.cos()).asin();
    let lon_2 = lon_1
        + (theta.sin() * delta.sin() * lat_1.cos()).atan2(delta.cos() - lat_1.sin() * lat_2.sin());

    GeoPoint::new(lat_2.to_degrees(), lon_2.to_degrees(), alt)
}
