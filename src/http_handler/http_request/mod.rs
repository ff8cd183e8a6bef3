use super::http_response::{
    command_ack, global_position, namespace, response_common, vehicle_state, waypoint_list,
};

pub mod arm_post;
pub mod global_position_get;
pub mod namespace_get;
pub mod request_common;
pub mod vehicle_state_get;
pub mod waypoint_execute_post;
pub mod waypoint_get_get;
pub mod waypoint_set_post;
