use super::{GeoPoint, VehicleMode, Waypoint};
use crate::http_handler::common::HTTPError;

/// Operations the mission driver needs from the vehicle's navigation API.
///
/// `arm`, `waypoint_set` and `waypoint_execute` return whether the command was
/// accepted; a transport failure is an `Err`.
pub(crate) trait Navigation: Sized {
    async fn global_position(&self) -> Result<GeoPoint, HTTPError>;
    async fn arm(&self) -> Result<bool, HTTPError>;
    async fn is_armed(&self) -> Result<bool, HTTPError>;
    async fn vehicle_mode(&self) -> Result<VehicleMode, HTTPError>;
    async fn waypoint_set(&self, waypoints: &[Waypoint]) -> Result<bool, HTTPError>;
    /// Number of mission items currently stored on the autopilot.
    async fn waypoint_count(&self) -> Result<usize, HTTPError>;
    async fn waypoint_execute(&self) -> Result<bool, HTTPError>;
    /// Ends the session. The handle is unusable afterwards.
    async fn disconnect(self);
}
