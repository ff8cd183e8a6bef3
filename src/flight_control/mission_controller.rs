use super::{
    SquareMission, VehicleMode,
    navigation::Navigation,
    waypoint::{MISSION_LENGTH, generate_waypoints},
};
use crate::http_handler::common::HTTPError;
use crate::{event, info, log, mission};
use std::time::Duration;
use strum_macros::Display;
use tokio::time::sleep;

/// Runs a [`SquareMission`] from arming to the final disarm on one vehicle.
pub(crate) struct MissionController<N: Navigation> {
    nav: N,
    mission: SquareMission,
    startup_delay: Duration,
    poll_interval: Duration,
}

impl<N: Navigation> MissionController<N> {
    /// Time given to the navigation interface to come up before arming.
    pub const STARTUP_DELAY: Duration = Duration::from_secs(3);
    /// Pause between two vehicle state polls while the mission runs.
    pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

    pub fn new(nav: N, mission: SquareMission) -> Self {
        Self { nav, mission, startup_delay: Self::STARTUP_DELAY, poll_interval: Self::POLL_INTERVAL }
    }

    /// Overrides the startup delay and poll interval.
    #[cfg(test)]
    pub fn with_timing(mut self, startup_delay: Duration, poll_interval: Duration) -> Self {
        self.startup_delay = startup_delay;
        self.poll_interval = poll_interval;
        self
    }

    /// Flies the mission and disconnects once the vehicle has landed and disarmed.
    ///
    /// There is no timeout: if the vehicle never reports a disarm in waypoint
    /// mode, this never returns.
    ///
    /// # Errors
    /// - [`MissionError::Http`] if any call to the navigation API fails.
    /// - [`MissionError::WaypointCountMismatch`] if the autopilot does not report
    ///   the full mission after upload. The mission is not executed in that case.
    pub async fn run(self) -> Result<(), MissionError> {
        sleep(self.startup_delay).await;

        self.nav.arm().await?;
        if self.nav.is_armed().await? {
            mission!("ARMED");
        }

        self.upload().await?;

        let received = self.nav.waypoint_count().await?;
        if received != MISSION_LENGTH {
            return Err(MissionError::WaypointCountMismatch { expected: MISSION_LENGTH, received });
        }
        mission!("Waypoints inserted properly ({received} items)");
        self.nav.waypoint_execute().await?;

        self.wait_for_completion().await?;
        mission!("Mission completed");

        self.nav.disconnect().await;
        Ok(())
    }

    async fn upload(&self) -> Result<(), HTTPError> {
        let position = self.nav.global_position().await?;
        info!(
            "Planning {}m square at {}m from {position}",
            self.mission.side_length(),
            self.mission.altitude()
        );
        let waypoints = generate_waypoints(&self.mission.corners(position));
        for (i, wp) in waypoints.iter().enumerate() {
            log!(
                "WP {i}: {} ({}) at [{:.7}, {:.7}, {:.2}m]",
                wp.command(),
                wp.frame(),
                wp.lat(),
                wp.lon(),
                wp.alt()
            );
            event!(
                "WP {i}: params {:?}, current {}, autocontinue {}",
                wp.params(),
                wp.is_current(),
                wp.autocontinue()
            );
        }
        self.nav.waypoint_set(&waypoints).await?;
        Ok(())
    }

    /// Polls until the vehicle is disarmed while in waypoint mode.
    async fn wait_for_completion(&self) -> Result<(), HTTPError> {
        loop {
            event!("Waiting for the mission to complete");
            let mode: VehicleMode = self.nav.vehicle_mode().await?;
            if mode.is_waypoint() && !self.nav.is_armed().await? {
                return Ok(());
            }
            sleep(self.poll_interval).await;
        }
    }
}

#[derive(Debug, Display)]
pub enum MissionError {
    Http(HTTPError),
    WaypointCountMismatch { expected: usize, received: usize },
}

impl std::error::Error for MissionError {}

impl From<HTTPError> for MissionError {
    fn from(value: HTTPError) -> Self { MissionError::Http(value) }
}
