//! HTTP handler for the dashboard overview

use axum::{extract::State, Json};
use shared::FarmOverview;

use crate::error::AppResult;
use crate::AppState;

/// Farm counts, alerts, today's weather for the default city and the carbon trend
pub async fn dashboard_overview(State(state): State<AppState>) -> AppResult<Json<FarmOverview>> {
    let records = state.records.snapshot().await?;
    let weather = state
        .weather
        .current(&state.config.weather.default_city)
        .await?;

    let overview = shared::farm_overview(records, weather)?;
    tracing::debug!(alerts_active = overview.alerts_active, "Overview assembled");

    Ok(Json(overview))
}
