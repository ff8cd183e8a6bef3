use super::geo::GeoPoint;
use super::waypoint::MISSION_POINTS;

/// Bearings flown from one corner to the next: west, north, east.
const LEG_BEARINGS: [f64; 3] = [-90.0, 0.0, 90.0];

/// A square route starting and ending at the vehicle's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareMission {
    altitude: f64,
    side_length: f64,
}

impl SquareMission {
    /// # Arguments
    /// - `altitude`: Flight altitude relative to home in meters.
    /// - `side_length`: Length of each side of the square in meters.
    pub fn new(altitude: f64, side_length: f64) -> Self { Self { altitude, side_length } }

    pub fn altitude(&self) -> f64 { self.altitude }
    pub fn side_length(&self) -> f64 { self.side_length }

    /// Computes the route points from the current vehicle position.
    ///
    /// The origin is lifted to the mission altitude, three legs of `side_length`
    /// are flown west, north and east, and the route closes on the origin.
    pub fn corners(&self, position: GeoPoint) -> [GeoPoint; MISSION_POINTS] {
        let origin = position.with_alt(self.altitude);
        let mut route = [origin; MISSION_POINTS];
        for (i, bearing) in LEG_BEARINGS.iter().enumerate() {
            route[i + 1] = route[i].destination(self.side_length, *bearing);
        }
        route
    }
}
