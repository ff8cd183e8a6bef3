pub(crate) mod response_common;
pub mod command_ack;
pub mod global_position;
pub mod namespace;
pub mod vehicle_state;
pub mod waypoint_list;
