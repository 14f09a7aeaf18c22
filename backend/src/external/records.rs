//! Farm records backing the dashboard overview

use async_trait::async_trait;
use rust_decimal_macros::dec;
use shared::{AlertKind, FarmAlert, FarmRecords, Urgency};

use crate::error::AppResult;

/// Source of farm counts and recent alerts
#[async_trait]
pub trait FarmRecordStore: Send + Sync {
    async fn snapshot(&self) -> AppResult<FarmRecords>;
}

/// Store that serves one fixed snapshot
#[derive(Debug, Clone)]
pub struct StaticFarmRecords {
    records: FarmRecords,
}

impl StaticFarmRecords {
    pub fn new(records: FarmRecords) -> Self {
        Self { records }
    }
}

impl Default for StaticFarmRecords {
    fn default() -> Self {
        Self::new(FarmRecords {
            total_farms: 3,
            healthy_fields: 2,
            recent_alerts: vec![
                FarmAlert {
                    id: 1,
                    kind: AlertKind::Irrigation,
                    message: "Low soil moisture detected in Field A".to_string(),
                    severity: Urgency::Medium,
                },
                FarmAlert {
                    id: 2,
                    kind: AlertKind::Disease,
                    message: "Potential leaf blight in tomato crop".to_string(),
                    severity: Urgency::High,
                },
                FarmAlert {
                    id: 3,
                    kind: AlertKind::Weather,
                    message: "Heavy rain expected tomorrow".to_string(),
                    severity: Urgency::Low,
                },
            ],
            last_month_tco2e: dec!(18.2),
        })
    }
}

#[async_trait]
impl FarmRecordStore for StaticFarmRecords {
    async fn snapshot(&self) -> AppResult<FarmRecords> {
        Ok(self.records.clone())
    }
}
