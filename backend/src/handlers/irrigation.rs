//! HTTP handler for irrigation advice

use axum::Json;
use shared::{FarmIrrigationInput, IrrigationAdvice};

use crate::error::{AppJson, AppResult};

/// Evaluate the irrigation rules for one field
pub async fn irrigation_advice(
    AppJson(input): AppJson<FarmIrrigationInput>,
) -> AppResult<Json<IrrigationAdvice>> {
    let advice = shared::advise(&input)?;

    tracing::debug!(
        crop = %advice.crop,
        moisture = %advice.soil_moisture_percent,
        forecast = %advice.weather_forecast,
        urgency = %advice.urgency,
        "Irrigation advice issued"
    );

    Ok(Json(advice))
}
