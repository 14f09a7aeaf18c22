//! HTTP handlers

mod carbon;
mod crop_health;
mod health;
mod irrigation;
mod overview;
mod sensors;
mod weather;

pub use carbon::carbon_footprint;
pub use crop_health::{analyze_crop, AnalyzeCropInput};
pub use health::{health_check, HealthResponse};
pub use irrigation::irrigation_advice;
pub use overview::dashboard_overview;
pub use sensors::sensor_dashboard;
pub use weather::{current_weather, CityQuery};
