#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod flight_control;
mod http_handler;
mod logger;

use crate::config::MissionConfig;
use clap::Parser;
use crate::flight_control::{FlightComputer, MissionController, MissionError, SquareMission};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let conf = MissionConfig::parse();

    let f_cont = FlightComputer::connect(conf.base_url(), conf.namespace())
        .await
        .unwrap_or_else(|e| fatal!("Could not set up HTTP client: {e}"));

    let mission = SquareMission::new(conf.altitude(), conf.side_length());
    info!(
        "Starting square mission: altitude {}m, side length {}m",
        mission.altitude(),
        mission.side_length()
    );
    match MissionController::new(f_cont, mission).run().await {
        Ok(()) => info!("Shutting down"),
        Err(MissionError::WaypointCountMismatch { expected, received }) => {
            error!("Autopilot reports {received} waypoints instead of {expected}, mission not executed");
            std::process::exit(1);
        }
        Err(MissionError::Http(e)) => fatal!("Navigation API failure: {e:?}"),
    }
}
