//! HTTP handler for crop disease detection

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use shared::{CropHealthReport, ValidationError};

use crate::error::{AppJson, AppResult};
use crate::external::CropImage;
use crate::AppState;

/// Crop photo upload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCropInput {
    pub filename: Option<String>,
    #[serde(alias = "image_base64")]
    pub image_base64: String,
}

impl AnalyzeCropInput {
    fn decode(self) -> Result<CropImage, ValidationError> {
        let bytes = STANDARD
            .decode(self.image_base64.trim())
            .map_err(|e| ValidationError::InvalidValue {
                field: "image_base64",
                message: format!("not valid base64: {}", e),
            })?;

        if bytes.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "image_base64",
                message: "image is empty".to_string(),
            });
        }

        Ok(CropImage {
            filename: self.filename,
            bytes,
        })
    }
}

/// Classify a crop photo and return treatment advice
pub async fn analyze_crop(
    State(state): State<AppState>,
    AppJson(input): AppJson<AnalyzeCropInput>,
) -> AppResult<Json<CropHealthReport>> {
    let image = input.decode()?;
    let diagnosis = state.classifier.predict(&image).await?;
    let report = shared::crop_health_report(image.filename, &diagnosis)?;

    tracing::debug!(
        prediction = %report.prediction,
        confidence = report.confidence_percent,
        "Crop photo analysed"
    );

    Ok(Json(report))
}
