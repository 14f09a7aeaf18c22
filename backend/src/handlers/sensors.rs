//! HTTP handler for the field sensor dashboard

use axum::{extract::State, Json};
use shared::SensorDashboard;

use crate::error::AppResult;
use crate::AppState;

/// Poll the sensor feed and derive dashboard statuses
pub async fn sensor_dashboard(State(state): State<AppState>) -> AppResult<Json<SensorDashboard>> {
    let reading = state.sensors.poll().await?;
    let dashboard =
        shared::sensor_dashboard(reading, state.config.sensors.refresh_interval_secs)?;

    if !dashboard.sensors_needing_replacement.is_empty() {
        tracing::warn!(
            sensors = ?dashboard.sensors_needing_replacement,
            "Sensor batteries need replacement"
        );
    }

    Ok(Json(dashboard))
}
