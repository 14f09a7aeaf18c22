//! Weather lookup
//!
//! [`StaticWeatherProvider`] serves fixed conditions for known cities. Swap in
//! an HTTP-backed provider for live data.

use async_trait::async_trait;
use rust_decimal_macros::dec;
use shared::CurrentConditions;
use std::collections::HashMap;

use crate::error::{AppError, AppResult};

/// Source of current weather conditions
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> AppResult<CurrentConditions>;
}

/// Provider backed by an in-memory table keyed by lowercase city name
#[derive(Debug, Clone, Default)]
pub struct StaticWeatherProvider {
    cities: HashMap<String, CurrentConditions>,
}

impl StaticWeatherProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider preloaded with the bundled city table
    pub fn with_defaults() -> Self {
        Self::new().with_city(CurrentConditions {
            city: "Delhi".to_string(),
            temperature_celsius: dec!(28),
            feels_like_celsius: dec!(32),
            humidity_percent: 65,
            conditions: "partly cloudy".to_string(),
            wind_speed_kmh: dec!(12),
        })
    }

    pub fn with_city(mut self, conditions: CurrentConditions) -> Self {
        self.cities
            .insert(conditions.city.trim().to_lowercase(), conditions);
        self
    }
}

#[async_trait]
impl WeatherProvider for StaticWeatherProvider {
    async fn current(&self, city: &str) -> AppResult<CurrentConditions> {
        self.cities
            .get(&city.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Weather for city '{}'", city.trim())))
    }
}
