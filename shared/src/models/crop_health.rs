//! Crop disease detection models

use serde::{Deserialize, Serialize};

/// Condition reported by an image classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CropCondition {
    Healthy,
    LeafBlight,
    Rust,
    PowderyMildew,
}

impl CropCondition {
    pub fn is_healthy(&self) -> bool {
        matches!(self, CropCondition::Healthy)
    }
}

impl std::fmt::Display for CropCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropCondition::Healthy => write!(f, "Healthy"),
            CropCondition::LeafBlight => write!(f, "Leaf Blight"),
            CropCondition::Rust => write!(f, "Rust"),
            CropCondition::PowderyMildew => write!(f, "Powdery Mildew"),
        }
    }
}

/// Severity of a detected condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Classifier output for one crop photo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnosis {
    pub condition: CropCondition,
    pub confidence_percent: u8,
    pub severity: Severity,
}

/// Treatment advice for a diagnosed photo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CropHealthReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub prediction: CropCondition,
    pub prediction_label: String,
    pub confidence_percent: u8,
    pub severity: Severity,
    pub recommendation: String,
    pub follow_up_actions: Vec<String>,
}

/// Steps suggested whenever a disease is detected
pub const DISEASE_FOLLOW_UP_ACTIONS: &[&str] = &[
    "Isolate affected plants if possible",
    "Apply appropriate fungicide treatment",
    "Monitor surrounding crops closely",
    "Improve air circulation around plants",
    "Consider consulting with agricultural expert",
];
