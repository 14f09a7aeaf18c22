//! Common types used across the platform

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::validation::ValidationError;

/// Ordinal severity of a recommended action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short-range weather outlook used by the irrigation rules
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeatherForecast {
    Sunny,
    Cloudy,
    Rain,
    Storm,
}

impl WeatherForecast {
    pub const ALL: [WeatherForecast; 4] = [
        WeatherForecast::Sunny,
        WeatherForecast::Cloudy,
        WeatherForecast::Rain,
        WeatherForecast::Storm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherForecast::Sunny => "sunny",
            WeatherForecast::Cloudy => "cloudy",
            WeatherForecast::Rain => "rain",
            WeatherForecast::Storm => "storm",
        }
    }

    /// Human-facing label as shown in the dashboard selector
    pub fn label(&self) -> &'static str {
        match self {
            WeatherForecast::Sunny => "Sunny",
            WeatherForecast::Cloudy => "Cloudy",
            WeatherForecast::Rain => "Rain Expected",
            WeatherForecast::Storm => "Storm",
        }
    }
}

impl std::fmt::Display for WeatherForecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherForecast {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        WeatherForecast::ALL
            .into_iter()
            .find(|f| f.as_str() == normalized)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "weather_forecast",
                message: format!("'{}' is not one of sunny, cloudy, rain, storm", s.trim()),
            })
    }
}

/// Crops offered by the dashboard selector. Any non-empty crop name is accepted.
pub const KNOWN_CROPS: &[&str] = &[
    "Wheat", "Rice", "Corn", "Soybeans", "Cotton", "Tomatoes", "Potatoes", "Carrots", "Lettuce",
    "Other",
];

/// Check whether a crop name is one of the dashboard's listed crops (case-insensitive)
pub fn is_known_crop(crop: &str) -> bool {
    let crop = crop.trim();
    KNOWN_CROPS.iter().any(|c| c.eq_ignore_ascii_case(crop))
}
