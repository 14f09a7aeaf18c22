//! HTTP handler for the carbon footprint calculator

use axum::Json;
use shared::{FootprintInput, FootprintResult};

use crate::error::{AppJson, AppResult};

/// Calculate a farm's carbon footprint.
///
/// Figures are placeholders until an accounting model exists; the response
/// carries `"estimate": "placeholder"`.
pub async fn carbon_footprint(
    AppJson(input): AppJson<FootprintInput>,
) -> AppResult<Json<FootprintResult>> {
    let result = shared::footprint_for(&input)?;

    tracing::debug!(farm_id = %result.farm_id, area_ha = %result.area_ha, "Footprint estimated");

    Ok(Json(result))
}
