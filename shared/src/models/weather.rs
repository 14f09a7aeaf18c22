//! Weather data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current conditions for a city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub city: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub temperature_celsius: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub feels_like_celsius: Decimal,
    pub humidity_percent: u8,
    pub conditions: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub wind_speed_kmh: Decimal,
}
