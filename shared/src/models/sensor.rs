//! Field sensor models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::irrigation::MoistureStatus;

/// Overall field status reported by drone survey
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldHealth {
    Healthy,
    NeedsAttention,
    PestDetected,
}

impl std::fmt::Display for FieldHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldHealth::Healthy => write!(f, "Healthy"),
            FieldHealth::NeedsAttention => write!(f, "Needs Attention"),
            FieldHealth::PestDetected => write!(f, "Pest Detected"),
        }
    }
}

/// One poll of the field sensor network
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    pub recorded_at: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub soil_moisture_percent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub temperature_celsius: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub humidity_percent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub ph_level: Decimal,
    pub light_intensity_lux: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub wind_speed_kmh: Decimal,
    pub field_health: FieldHealth,
    /// Battery charge per sensor id, in percent
    pub battery_levels: BTreeMap<String, u8>,
}

/// Battery charge band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BatteryStatus {
    /// Above 50%
    Good,
    /// Above 20%
    Low,
    /// 20% or less
    Replace,
}

impl std::fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatteryStatus::Good => write!(f, "Good"),
            BatteryStatus::Low => write!(f, "Low"),
            BatteryStatus::Replace => write!(f, "Replace"),
        }
    }
}

/// Classify a battery charge level
pub fn battery_status(level_percent: u8) -> BatteryStatus {
    match level_percent {
        51..=u8::MAX => BatteryStatus::Good,
        21..=50 => BatteryStatus::Low,
        _ => BatteryStatus::Replace,
    }
}

/// Battery state of a single sensor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SensorBattery {
    pub sensor_id: String,
    pub level_percent: u8,
    pub status: BatteryStatus,
}

/// Sensor reading with derived statuses, as rendered on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SensorDashboard {
    pub reading: SensorReading,
    pub moisture_status: MoistureStatus,
    pub batteries: Vec<SensorBattery>,
    pub sensors_needing_replacement: Vec<String>,
    pub refresh_interval_secs: u64,
}
