use strum_macros::{Display, EnumString};

/// Flight modes reported by FlytOS through the vehicle state.
///
/// Modes controlled through the API carry an `API|` prefix. Anything not listed
/// here is kept verbatim in [`VehicleMode::Other`].
#[derive(Debug, PartialEq, Eq, Clone, Hash, Display, EnumString)]
pub enum VehicleMode {
    #[strum(serialize = "API|POSCTL")]
    PositionControl,
    #[strum(serialize = "API|WAYPOINT")]
    Waypoint,
    #[strum(serialize = "API|LAND")]
    Land,
    #[strum(serialize = "API|RTL")]
    ReturnToLaunch,
    #[strum(serialize = "MANUAL")]
    Manual,
    #[strum(default)]
    Other(String),
}

impl VehicleMode {
    /// Parses a FlytOS mode string, unknown modes end up in [`VehicleMode::Other`].
    pub fn parse_mode(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| VehicleMode::Other(value.to_string()))
    }

    /// Whether the autopilot is currently running an uploaded mission.
    pub fn is_waypoint(&self) -> bool { *self == VehicleMode::Waypoint }
}
