//! Crop image classification
//!
//! No model ships with the platform. [`UnconfiguredClassifier`] reports the
//! service as unavailable instead of inventing a diagnosis.

use async_trait::async_trait;
use shared::Diagnosis;

use crate::error::{AppError, AppResult};

/// Decoded crop photo submitted for analysis
#[derive(Debug, Clone)]
pub struct CropImage {
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

/// Image-based crop disease classifier
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn predict(&self, image: &CropImage) -> AppResult<Diagnosis>;
}

/// Placeholder used until a real classifier is wired in
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredClassifier;

#[async_trait]
impl ImageClassifier for UnconfiguredClassifier {
    async fn predict(&self, image: &CropImage) -> AppResult<Diagnosis> {
        tracing::warn!(
            filename = image.filename.as_deref().unwrap_or("<unnamed>"),
            bytes = image.bytes.len(),
            "Crop image received but no classifier is configured"
        );
        Err(AppError::ClassifierUnavailable)
    }
}
