//! Farm overview models for the dashboard landing page

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::weather::CurrentConditions;
use crate::types::Urgency;

/// Subsystem that raised an alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Irrigation,
    Disease,
    Weather,
}

/// A recent alert shown on the overview
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmAlert {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    pub severity: Urgency,
}

/// Farm records the overview is built from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FarmRecords {
    pub total_farms: u32,
    pub healthy_fields: u32,
    pub recent_alerts: Vec<FarmAlert>,
    /// Last month's footprint in tCO2e
    pub last_month_tco2e: Decimal,
}

/// Month-over-month footprint change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarbonTrend {
    #[serde(with = "rust_decimal::serde::float")]
    pub this_month: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub last_month: Decimal,
    /// Positive when emissions fell, one decimal place
    #[serde(with = "rust_decimal::serde::float")]
    pub reduction_percent: Decimal,
}

impl CarbonTrend {
    pub fn new(this_month: Decimal, last_month: Decimal) -> Self {
        let reduction_percent = if last_month.is_zero() {
            Decimal::ZERO
        } else {
            ((last_month - this_month) / last_month * Decimal::ONE_HUNDRED).round_dp(1)
        };

        Self {
            this_month,
            last_month,
            reduction_percent,
        }
    }
}

/// Dashboard landing page summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FarmOverview {
    pub total_farms: u32,
    pub healthy_fields: u32,
    /// High-severity alerts among the recent ones
    pub alerts_active: usize,
    pub avg_sustainability_score: u8,
    pub today_weather: CurrentConditions,
    pub recent_alerts: Vec<FarmAlert>,
    pub carbon_footprint: CarbonTrend,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_carbon_trend_reduction() {
        let trend = CarbonTrend::new(dec!(15.4), dec!(18.2));
        assert_eq!(trend.reduction_percent, dec!(15.4));
    }

    #[test]
    fn test_carbon_trend_increase_is_negative() {
        let trend = CarbonTrend::new(dec!(12), dec!(10));
        assert_eq!(trend.reduction_percent, dec!(-20));
    }

    #[test]
    fn test_carbon_trend_without_history() {
        assert_eq!(CarbonTrend::new(dec!(15.4), Decimal::ZERO).reduction_percent, Decimal::ZERO);
    }

    #[test]
    fn test_alert_serializes_kind_as_type() {
        let alert = FarmAlert {
            id: 7,
            kind: AlertKind::Disease,
            message: "Potential leaf blight".into(),
            severity: Urgency::High,
        };
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "disease");
        assert_eq!(json["severity"], "high");
    }
}
