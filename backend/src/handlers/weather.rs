//! HTTP handler for weather lookup

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::CurrentConditions;

use crate::error::AppResult;
use crate::AppState;

/// Query parameters for weather lookup
#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

/// Get current conditions for a city, or for the configured default city
pub async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<CurrentConditions>> {
    let city = query
        .city
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| state.config.weather.default_city.clone());

    let conditions = state.weather.current(&city).await?;
    Ok(Json(conditions))
}
