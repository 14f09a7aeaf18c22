//! Carbon footprint models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Farm activity inputs collected by the carbon calculator form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FootprintInput {
    #[validate(length(max = 64, message = "must be at most 64 characters"))]
    #[serde(alias = "farm_id")]
    pub farm_id: Option<String>,
    #[serde(alias = "area_ha")]
    pub area_ha: Option<Decimal>,
    #[serde(flatten)]
    pub fuel_usage: FuelUsage,
}

/// Annual farm activity from the calculator form.
///
/// Every figure is optional and must not be negative. Values are validated but
/// not yet modelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FuelUsage {
    #[validate(range(min = 0.0, message = "must not be negative"))]
    #[serde(alias = "diesel_liters")]
    pub diesel_liters: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    #[serde(alias = "electricity_kwh")]
    pub electricity_kwh: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    #[serde(alias = "fertilizer_kg")]
    pub fertilizer_kg: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    #[serde(alias = "manure_tons")]
    pub manure_tons: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    #[serde(alias = "enteric_fermentation")]
    pub enteric_fermentation: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    #[serde(alias = "rice_paddies")]
    pub rice_paddies: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub tillage: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub lime: Option<f64>,
    /// Carbon stored in soil, reported as a positive quantity
    #[validate(range(min = 0.0, message = "must not be negative"))]
    #[serde(alias = "soil_sequestration")]
    pub soil_sequestration: Option<f64>,
}

/// How a footprint figure was obtained
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EstimateKind {
    /// Fixed figures standing in for a real accounting model
    Placeholder,
}

/// Emissions per source, in tonnes of CO2 equivalent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmissionsBreakdown {
    #[serde(rename = "diesel_tCO2e", with = "rust_decimal::serde::float")]
    pub diesel: Decimal,
    #[serde(rename = "electricity_tCO2e", with = "rust_decimal::serde::float")]
    pub electricity: Decimal,
    #[serde(rename = "fertilizer_tCO2e", with = "rust_decimal::serde::float")]
    pub fertilizer: Decimal,
    #[serde(rename = "manure_tCO2e", with = "rust_decimal::serde::float")]
    pub manure: Decimal,
}

impl EmissionsBreakdown {
    /// Entries keyed by their serialized names
    pub fn entries(&self) -> [(&'static str, Decimal); 4] {
        [
            ("diesel_tCO2e", self.diesel),
            ("electricity_tCO2e", self.electricity),
            ("fertilizer_tCO2e", self.fertilizer),
            ("manure_tCO2e", self.manure),
        ]
    }

    /// Names of the `n` largest sources, largest first
    pub fn top_contributors(&self, n: usize) -> Vec<String> {
        let mut entries = self.entries();
        // Stable sort keeps declaration order for ties.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
            .iter()
            .take(n)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

/// Farm emissions summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Emissions {
    #[serde(rename = "total_tCO2e", with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(rename = "tCO2e_per_ha", with = "rust_decimal::serde::float")]
    pub per_hectare: Decimal,
    pub emissions_breakdown: EmissionsBreakdown,
    pub top_contributors: Vec<String>,
}

/// Carbon footprint result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    pub farm_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub area_ha: Decimal,
    pub emissions: Emissions,
    pub sustainability_score: u8,
    pub sustainability_rating: SustainabilityRating,
    pub recommendations: Vec<String>,
    pub estimate: EstimateKind,
}

/// Banding of the 0-100 sustainability score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SustainabilityRating {
    /// 80 and above
    Good,
    /// 60 to 79
    Fair,
    /// Below 60
    Poor,
}

impl std::fmt::Display for SustainabilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SustainabilityRating::Good => write!(f, "Good"),
            SustainabilityRating::Fair => write!(f, "Fair"),
            SustainabilityRating::Poor => write!(f, "Poor"),
        }
    }
}

/// Band a sustainability score
pub fn sustainability_rating(score: u8) -> SustainabilityRating {
    match score {
        80..=u8::MAX => SustainabilityRating::Good,
        60..=79 => SustainabilityRating::Fair,
        _ => SustainabilityRating::Poor,
    }
}
