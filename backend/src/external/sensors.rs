//! Field sensor feed

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal_macros::dec;
use shared::{FieldHealth, SensorReading};
use std::collections::BTreeMap;

use crate::error::AppResult;

/// Source of field sensor readings
#[async_trait]
pub trait SensorFeed: Send + Sync {
    async fn poll(&self) -> AppResult<SensorReading>;
}

/// Feed that replays one fixed reading, stamped with the poll time
#[derive(Debug, Clone)]
pub struct StaticSensorFeed {
    reading: SensorReading,
}

impl StaticSensorFeed {
    pub fn new(reading: SensorReading) -> Self {
        Self { reading }
    }
}

impl Default for StaticSensorFeed {
    fn default() -> Self {
        let battery_levels = BTreeMap::from([
            ("sensor_1".to_string(), 86),
            ("sensor_2".to_string(), 72),
            ("sensor_3".to_string(), 64),
        ]);

        Self::new(SensorReading {
            recorded_at: Utc::now(),
            soil_moisture_percent: dec!(48),
            temperature_celsius: dec!(26),
            humidity_percent: dec!(62),
            ph_level: dec!(6.8),
            light_intensity_lux: 650,
            wind_speed_kmh: dec!(11.5),
            field_health: FieldHealth::Healthy,
            battery_levels,
        })
    }
}

#[async_trait]
impl SensorFeed for StaticSensorFeed {
    async fn poll(&self) -> AppResult<SensorReading> {
        Ok(SensorReading {
            recorded_at: Utc::now(),
            ..self.reading.clone()
        })
    }
}
