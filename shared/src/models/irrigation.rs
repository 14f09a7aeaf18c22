//! Irrigation advisory models

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Urgency, WeatherForecast};

/// Lower and upper bound of the soil moisture band most crops thrive in (percent)
pub const OPTIMAL_MOISTURE_RANGE: [u8; 2] = [40, 70];

/// Hours until the field should be checked again after advice is issued
pub const NEXT_CHECK_HOURS: u32 = 6;

/// Raw irrigation form fields, any of which may be absent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmIrrigationInput {
    #[serde(alias = "soil_moisture", alias = "soil_moisture_percent")]
    pub soil_moisture_percent: Option<Decimal>,
    #[serde(alias = "crop_type")]
    pub crop_type: Option<String>,
    #[serde(alias = "weather_forecast")]
    pub weather_forecast: Option<String>,
}

/// Irrigation recommendation derived from a single input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationAdvice {
    pub crop: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub soil_moisture_percent: Decimal,
    pub weather_forecast: WeatherForecast,
    pub urgency: Urgency,
    #[serde(with = "rust_decimal::serde::float")]
    pub recommended_water_amount_mm: Decimal,
    pub advice: String,
    pub optimal_moisture_range: [u8; 2],
    pub moisture_status: MoistureStatus,
    pub next_check_hours: u32,
}

impl IrrigationAdvice {
    /// Whether the advice asks the farmer to apply water
    pub fn requires_irrigation(&self) -> bool {
        self.recommended_water_amount_mm > Decimal::ZERO
    }
}

/// Soil moisture band as shown next to the reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoistureStatus {
    /// Below 30%
    Critical,
    /// 30% up to 50%
    Low,
    /// 50% to 80%
    Optimal,
    /// Above 80%
    High,
}

impl std::fmt::Display for MoistureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoistureStatus::Critical => write!(f, "Critical"),
            MoistureStatus::Low => write!(f, "Low"),
            MoistureStatus::Optimal => write!(f, "Optimal"),
            MoistureStatus::High => write!(f, "High"),
        }
    }
}

/// Classify a soil moisture reading
pub fn moisture_status(moisture_percent: Decimal) -> MoistureStatus {
    if moisture_percent < dec!(30) {
        MoistureStatus::Critical
    } else if moisture_percent < dec!(50) {
        MoistureStatus::Low
    } else if moisture_percent > dec!(80) {
        MoistureStatus::High
    } else {
        MoistureStatus::Optimal
    }
}
