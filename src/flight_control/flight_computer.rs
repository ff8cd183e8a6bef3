use super::{GeoPoint, VehicleMode, Waypoint, navigation::Navigation};
use crate::http_handler::{
    common::HTTPError,
    http_client::HTTPClient,
    http_request::{
        arm_post::ArmRequest,
        global_position_get::GlobalPositionRequest,
        namespace_get::NamespaceRequest,
        request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
        vehicle_state_get::VehicleStateRequest,
        waypoint_execute_post::WaypointExecuteRequest,
        waypoint_get_get::WaypointGetRequest,
        waypoint_set_post::WaypointSetRequest,
    },
};
use crate::{event, info, warn};

/// [`Navigation`] backed by the FlytOS REST interface.
#[derive(Debug)]
pub struct FlightComputer {
    /// HTTP client bound to the vehicle namespace.
    request_client: HTTPClient,
}

impl FlightComputer {
    /// Namespace FlytOS uses when none was configured on the vehicle.
    pub const DEFAULT_NAMESPACE: &'static str = "flytos";

    /// Creates a flight computer talking to the FlytOS instance at `base_url`.
    ///
    /// If `namespace` is `None` it is looked up from the server; a failed lookup
    /// falls back to [`Self::DEFAULT_NAMESPACE`].
    ///
    /// # Errors
    /// Returns a `reqwest::Error` if the HTTP client cannot be constructed.
    pub async fn connect(
        base_url: &str,
        namespace: Option<&str>,
    ) -> Result<FlightComputer, reqwest::Error> {
        let mut request_client =
            HTTPClient::new(base_url, namespace.unwrap_or(Self::DEFAULT_NAMESPACE))?;
        if namespace.is_none() {
            match (NamespaceRequest {}.send_request(&request_client).await) {
                Ok(resp) => request_client.set_namespace(resp.namespace()),
                Err(e) => warn!(
                    "Namespace lookup failed ({e}), using '{}'",
                    Self::DEFAULT_NAMESPACE
                ),
            }
        }
        info!(
            "Connected to FlytOS at {} (namespace '{}')",
            request_client.url(),
            request_client.namespace()
        );
        Ok(FlightComputer { request_client })
    }

    /// Vehicle namespace all navigation requests are sent to.
    pub fn namespace(&self) -> &str { self.request_client.namespace() }

    fn client(&self) -> &HTTPClient { &self.request_client }
}

impl Navigation for FlightComputer {
    async fn global_position(&self) -> Result<GeoPoint, HTTPError> {
        let pos = GlobalPositionRequest {}.send_request(self.client()).await?;
        Ok(GeoPoint::new(pos.lat(), pos.lon(), pos.alt()))
    }

    async fn arm(&self) -> Result<bool, HTTPError> {
        let ack = ArmRequest {}.send_request(self.client()).await?;
        if !ack.is_success() {
            warn!("Arming rejected: {}", ack.message());
        }
        Ok(ack.is_success())
    }

    async fn is_armed(&self) -> Result<bool, HTTPError> {
        Ok(VehicleStateRequest {}.send_request(self.client()).await?.is_armed())
    }

    async fn vehicle_mode(&self) -> Result<VehicleMode, HTTPError> {
        let state = VehicleStateRequest {}.send_request(self.client()).await?;
        event!(
            "Vehicle state: mode {}, armed {}, connected {}, guided {}",
            state.mode(),
            state.is_armed(),
            state.is_connected(),
            state.is_guided()
        );
        Ok(VehicleMode::parse_mode(state.mode()))
    }

    async fn waypoint_set(&self, waypoints: &[Waypoint]) -> Result<bool, HTTPError> {
        let ack = WaypointSetRequest { waypoints }.send_request(self.client()).await?;
        if !ack.is_success() {
            warn!("Waypoint upload rejected: {}", ack.message());
        }
        Ok(ack.is_success())
    }

    async fn waypoint_count(&self) -> Result<usize, HTTPError> {
        let list = WaypointGetRequest {}.send_request(self.client()).await?;
        if !list.is_success() {
            warn!("Waypoint readback reported failure");
        }
        event!(
            "Autopilot reports {} waypoints, {} listed",
            list.wp_received(),
            list.waypoints().len()
        );
        Ok(list.wp_received())
    }

    async fn waypoint_execute(&self) -> Result<bool, HTTPError> {
        let ack = WaypointExecuteRequest {}.send_request(self.client()).await?;
        if !ack.is_success() {
            warn!("Mission execution rejected: {}", ack.message());
        }
        Ok(ack.is_success())
    }

    async fn disconnect(self) {
        info!("Disconnecting from {} (namespace '{}')", self.request_client.url(), self.namespace());
        drop(self.request_client);
    }
}
