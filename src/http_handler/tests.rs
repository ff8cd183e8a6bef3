use super::http_client::HTTPClient;
use super::http_request::{
    global_position_get::GlobalPositionRequest, namespace_get::NamespaceRequest,
    request_common::HTTPRequestType, waypoint_set_post::WaypointSetRequest,
};
use super::http_response::{
    command_ack::CommandAckResponse, namespace::NamespaceResponse,
    response_common::ResponseError, vehicle_state::VehicleStateResponse,
    waypoint_list::WaypointListResponse,
};
use crate::flight_control::waypoint::{MavCommand, MavFrame, generate_waypoints};
use crate::flight_control::{GeoPoint, SquareMission};
use reqwest::StatusCode;
use std::time::Duration;

#[test]
fn test_endpoint_urls() {
    let mut client = HTTPClient::new("http://10.0.0.5:80/", "flytos").unwrap();
    let pos = GlobalPositionRequest {};
    assert_eq!(
        client.endpoint_url(pos.endpoint(), pos.namespaced()),
        "http://10.0.0.5:80/ros/flytos/mavros/global_position/global"
    );
    let ns = NamespaceRequest {};
    assert_eq!(
        client.endpoint_url(ns.endpoint(), ns.namespaced()),
        "http://10.0.0.5:80/ros/get_global_namespace"
    );
    client.set_namespace("drone_7");
    assert_eq!(
        client.endpoint_url(pos.endpoint(), pos.namespaced()),
        "http://10.0.0.5:80/ros/drone_7/mavros/global_position/global"
    );
}

#[test]
fn test_waypoint_set_body() {
    let route = SquareMission::new(5.0, 6.5).corners(GeoPoint::new(18.5, 73.8, 0.0));
    let waypoints = generate_waypoints(&route);
    let body = serde_json::to_value(WaypointSetRequest { waypoints: &waypoints }).unwrap();

    let items = body["waypoints"].as_array().unwrap();
    assert_eq!(items.len(), 7);
    assert_eq!(items[0]["frame"], 0);
    assert_eq!(items[0]["command"], 16);
    assert_eq!(items[0]["z_alt"], 100.0);
    assert_eq!(items[1]["frame"], 3);
    assert_eq!(items[1]["command"], 22);
    assert_eq!(items[6]["command"], 21);
    assert_eq!(items[6]["is_current"], true);
    assert_eq!(items[6]["autocontinue"], true);
    assert_eq!(items[6]["param1"], 0.0);
    assert_eq!(items[6]["x_lat"], 18.5);
    assert_eq!(items[6]["y_long"], 73.8);
    assert_eq!(items[6]["z_alt"], 5.0);
}

#[test]
fn test_parse_command_ack() {
    let ack: CommandAckResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert!(ack.is_success());
    assert_eq!(ack.message(), "");

    let ack: CommandAckResponse =
        serde_json::from_str(r#"{"success": false, "message": "Vehicle not in API mode"}"#)
            .unwrap();
    assert!(!ack.is_success());
    assert_eq!(ack.message(), "Vehicle not in API mode");
}

#[test]
fn test_parse_namespace() {
    let resp: NamespaceResponse =
        serde_json::from_str(r#"{"param_info": {"param_value": "flytpod"}}"#).unwrap();
    assert_eq!(resp.namespace(), "flytpod");
}

#[test]
fn test_parse_vehicle_state() {
    let resp: VehicleStateResponse = serde_json::from_str(
        r#"{"connected": true, "armed": false, "guided": true, "mode": "API|WAYPOINT",
            "mav_type": 2, "mav_autopilot": 12, "mav_sys_status": 4}"#,
    )
    .unwrap();
    assert!(resp.is_connected());
    assert!(!resp.is_armed());
    assert_eq!(resp.mode(), "API|WAYPOINT");
}

#[test]
fn test_parse_waypoint_list() {
    let resp: WaypointListResponse = serde_json::from_str(
        r#"{"success": true, "wp_received": 2, "waypoints": [
            {"frame": 0, "command": 16, "is_current": true, "autocontinue": true,
             "param1": 0, "param2": 0, "param3": 0, "param4": 0,
             "x_lat": 18.5, "y_long": 73.8, "z_alt": 100.0},
            {"frame": 3, "command": 178, "is_current": false, "autocontinue": true,
             "param1": 1, "param2": 5.0, "param3": -1, "param4": 0,
             "x_lat": 0.0, "y_long": 0.0, "z_alt": 0.0}
        ]}"#,
    )
    .unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.wp_received(), 2);
    assert_eq!(resp.waypoints()[0].frame(), MavFrame::Global);
    assert_eq!(resp.waypoints()[0].command(), MavCommand::NavWaypoint);
    assert_eq!(resp.waypoints()[1].command(), MavCommand::Other(178));
    assert_eq!(resp.waypoints()[1].params(), [1.0, 5.0, -1.0, 0.0]);
}

#[test]
fn test_status_mapping() {
    let err = ResponseError::from_status(StatusCode::NOT_FOUND, "no such service".to_string());
    assert!(matches!(err, ResponseError::BadRequest(404, ref body) if body == "no such service"));

    let err = ResponseError::from_status(StatusCode::INTERNAL_SERVER_ERROR, String::new());
    assert!(matches!(err, ResponseError::InternalServer(500)));

    let err = ResponseError::from_status(StatusCode::SERVICE_UNAVAILABLE, String::new());
    assert!(matches!(err, ResponseError::InternalServer(503)));

    let err = ResponseError::from_status(StatusCode::MOVED_PERMANENTLY, String::new());
    assert!(matches!(err, ResponseError::Unknown));
}

#[tokio::test]
async fn test_timeout_maps_to_timeout() {
    // The listener accepts connections into its backlog but never answers.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/ros/flytos/flyt/state", listener.local_addr().unwrap());
    let client = reqwest::Client::builder().timeout(Duration::from_millis(200)).build().unwrap();

    let err = client.get(url).send().await.unwrap_err();
    assert!(matches!(ResponseError::from(err), ResponseError::Timeout));
}
