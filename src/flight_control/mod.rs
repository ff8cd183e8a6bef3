mod flight_computer;
mod geo;
mod mission_controller;
pub(crate) mod navigation;
mod square_mission;
mod vehicle_mode;
pub(crate) mod waypoint;

pub use flight_computer::FlightComputer;
pub use geo::GeoPoint;
pub(crate) use mission_controller::MissionController;
pub use mission_controller::MissionError;
pub use square_mission::SquareMission;
pub use vehicle_mode::VehicleMode;
pub use waypoint::Waypoint;
