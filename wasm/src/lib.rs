//! WebAssembly module for the Smart Farm Advisory Platform
//!
//! Provides client-side evaluation for:
//! - Irrigation advice
//! - Soil moisture and battery status badges
//! - Dashboard selector options
//! - Carbon footprint (placeholder figures)

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"advisory engine loaded".into());
}

/// Crop names offered by the dashboard selector
#[wasm_bindgen]
pub fn known_crops() -> js_sys::Array {
    KNOWN_CROPS.iter().map(|c| JsValue::from_str(c)).collect()
}

fn forecast_options_json() -> String {
    let options: Vec<_> = WeatherForecast::ALL
        .iter()
        .map(|f| serde_json::json!({ "value": f.as_str(), "label": f.label() }))
        .collect();
    serde_json::Value::Array(options).to_string()
}

/// Forecast choices for the dashboard selector as a JSON array of `{value, label}`
#[wasm_bindgen]
pub fn forecast_options() -> String {
    forecast_options_json()
}

fn to_decimal(field: &'static str, value: f64) -> Result<Decimal, ValidationError> {
    Decimal::try_from(value).map_err(|_| ValidationError::InvalidValue {
        field,
        message: format!("{} is not a finite number", value),
    })
}

fn irrigation_advice_json(
    soil_moisture: f64,
    crop_type: &str,
    weather_forecast: &str,
) -> Result<String, String> {
    let moisture = to_decimal("soil_moisture_percent", soil_moisture).map_err(|e| e.to_string())?;
    let forecast: WeatherForecast = weather_forecast.parse().map_err(|e: ValidationError| e.to_string())?;
    let advice = shared::recommend(moisture, crop_type, forecast).map_err(|e| e.to_string())?;
    serde_json::to_string(&advice).map_err(|e| e.to_string())
}

/// Irrigation advice as a JSON string
#[wasm_bindgen]
pub fn irrigation_advice(
    soil_moisture: f64,
    crop_type: &str,
    weather_forecast: &str,
) -> Result<String, JsValue> {
    irrigation_advice_json(soil_moisture, crop_type, weather_forecast)
        .map_err(|e| JsValue::from_str(&e))
}

fn soil_moisture_label(moisture: f64) -> Result<String, ValidationError> {
    let moisture = to_decimal("soil_moisture_percent", moisture)?;
    validate_soil_moisture(moisture)?;
    Ok(moisture_status(moisture).to_string())
}

/// Soil moisture badge label ("Critical", "Low", "Optimal", "High")
#[wasm_bindgen]
pub fn classify_soil_moisture(moisture: f64) -> Result<String, JsValue> {
    soil_moisture_label(moisture).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Battery badge label ("Good", "Low", "Replace")
#[wasm_bindgen]
pub fn battery_status_label(level_percent: u8) -> String {
    format!("{}", battery_status(level_percent))
}

fn carbon_footprint_json(input_json: &str) -> Result<String, String> {
    let input: FootprintInput =
        serde_json::from_str(input_json).map_err(|e| format!("Invalid footprint JSON: {}", e))?;
    let result = shared::footprint_for(&input).map_err(|e| e.to_string())?;
    serde_json::to_string(&result).map_err(|e| e.to_string())
}

/// Carbon footprint for a calculator form serialized as JSON
#[wasm_bindgen]
pub fn carbon_footprint(input_json: &str) -> Result<String, JsValue> {
    carbon_footprint_json(input_json).map_err(|e| JsValue::from_str(&e))
}
