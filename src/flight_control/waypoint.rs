use super::geo::GeoPoint;
use strum_macros::Display;

/// MAVLink coordinate frames understood by the FlytOS waypoint service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, serde::Serialize, serde::Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum MavFrame {
    /// `MAV_FRAME_GLOBAL`, altitude above mean sea level.
    Global,
    /// `MAV_FRAME_GLOBAL_RELATIVE_ALT`, altitude relative to home.
    GlobalRelativeAlt,
    Other(u8),
}

impl From<MavFrame> for u8 {
    fn from(value: MavFrame) -> Self {
        match value {
            MavFrame::Global => 0,
            MavFrame::GlobalRelativeAlt => 3,
            MavFrame::Other(id) => id,
        }
    }
}

impl From<u8> for MavFrame {
    fn from(value: u8) -> Self {
        match value {
            0 => MavFrame::Global,
            3 => MavFrame::GlobalRelativeAlt,
            id => MavFrame::Other(id),
        }
    }
}

/// MAVLink mission commands used by the square mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, serde::Serialize, serde::Deserialize)]
#[serde(into = "u16", from = "u16")]
pub enum MavCommand {
    /// `MAV_CMD_NAV_WAYPOINT`
    NavWaypoint,
    /// `MAV_CMD_NAV_LAND`
    NavLand,
    /// `MAV_CMD_NAV_TAKEOFF`
    NavTakeoff,
    Other(u16),
}

impl From<MavCommand> for u16 {
    fn from(value: MavCommand) -> Self {
        match value {
            MavCommand::NavWaypoint => 16,
            MavCommand::NavLand => 21,
            MavCommand::NavTakeoff => 22,
            MavCommand::Other(id) => id,
        }
    }
}

impl From<u16> for MavCommand {
    fn from(value: u16) -> Self {
        match value {
            16 => MavCommand::NavWaypoint,
            21 => MavCommand::NavLand,
            22 => MavCommand::NavTakeoff,
            id => MavCommand::Other(id),
        }
    }
}

/// A single mission item in the layout expected by `/navigation/waypoint_set`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Waypoint {
    frame: MavFrame,
    command: MavCommand,
    is_current: bool,
    autocontinue: bool,
    param1: f32,
    param2: f32,
    param3: f32,
    param4: f32,
    x_lat: f64,
    y_long: f64,
    z_alt: f64,
}

impl Waypoint {
    /// Creates a mission item with all four command parameters set to zero.
    pub fn new(frame: MavFrame, command: MavCommand, lat: f64, lon: f64, alt: f64) -> Self {
        Self {
            frame,
            command,
            is_current: true,
            autocontinue: true,
            param1: 0.0,
            param2: 0.0,
            param3: 0.0,
            param4: 0.0,
            x_lat: lat,
            y_long: lon,
            z_alt: alt,
        }
    }

    pub fn frame(&self) -> MavFrame { self.frame }
    pub fn command(&self) -> MavCommand { self.command }
    pub fn is_current(&self) -> bool { self.is_current }
    pub fn autocontinue(&self) -> bool { self.autocontinue }
    pub fn params(&self) -> [f32; 4] { [self.param1, self.param2, self.param3, self.param4] }
    pub fn lat(&self) -> f64 { self.x_lat }
    pub fn lon(&self) -> f64 { self.y_long }
    pub fn alt(&self) -> f64 { self.z_alt }
}

/// Number of input points a mission is generated from.
pub const MISSION_POINTS: usize = 5;
/// Length of the generated mission: home and takeoff items plus one item per point.
pub const MISSION_LENGTH: usize = MISSION_POINTS + 2;
/// Altitude written into the leading home item.
const HOME_ITEM_ALT: f64 = 100.0;
/// Altitude of the takeoff item, relative to home.
const TAKEOFF_ALT: f64 = 1.0;

/// Builds the mission items for a closed five-point route.
///
/// The first point additionally yields a home item (global frame) and a takeoff
/// item in front of its own waypoint. The fifth point is turned into a landing.
/// All route items use the relative-altitude frame.
///
/// # Arguments
/// - `points`: The route, first point is the start and fifth the landing spot.
///
/// # Returns
/// - [`MISSION_LENGTH`] items in upload order.
pub fn generate_waypoints(points: &[GeoPoint; MISSION_POINTS]) -> Vec<Waypoint> {
    let start = points[0];
    let mut mission = Vec::with_capacity(MISSION_LENGTH);
    mission.push(Waypoint::new(
        MavFrame::Global,
        MavCommand::NavWaypoint,
        start.lat(),
        start.lon(),
        HOME_ITEM_ALT,
    ));
    mission.push(Waypoint::new(
        MavFrame::GlobalRelativeAlt,
        MavCommand::NavTakeoff,
        start.lat(),
        start.lon(),
        TAKEOFF_ALT,
    ));

    let last = points.len() - 1;
    mission.extend(points.iter().enumerate().map(|(i, p)| {
        let command = if i == last { MavCommand::NavLand } else { MavCommand::NavWaypoint };
        Waypoint::new(MavFrame::GlobalRelativeAlt, command, p.lat(), p.lon(), p.alt())
    }));
    mission
}
