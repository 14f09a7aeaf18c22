//! Route definitions for the Smart Farm Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/irrigation-advice", post(handlers::irrigation_advice))
        .route("/carbon-footprint", post(handlers::carbon_footprint))
        .route("/crop-health", post(handlers::analyze_crop))
        .route("/dashboard", get(handlers::dashboard_overview))
        .route("/sensors", get(handlers::sensor_dashboard))
        .route("/weather", get(handlers::current_weather))
}
