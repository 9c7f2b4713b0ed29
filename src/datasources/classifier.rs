use crate::config::ClassifierConfig;
use crate::error::{AgroFertError, Result};
use crate::models::{ClassifierPrediction, FieldInput};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Feature vector the external fertilizer classifier expects. Crop and soil
/// categories are sent as the label-encoded integers the model was trained
/// with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierFeatures {
    pub temperature: f64,
    pub humidity: f64,
    pub moisture: f64,
    pub soil_type: i32,
    pub crop_type: i32,
    pub nitrogen: f64,
    pub potassium: f64,
    pub phosphorus: f64,
}

impl ClassifierFeatures {
    pub fn from_input(input: &FieldInput) -> Self {
        Self {
            temperature: input.temperature,
            humidity: input.humidity,
            moisture: input.soil_moisture,
            soil_type: input.soil_type.code(),
            crop_type: input.crop_type.code(),
            nitrogen: input.nitrogen,
            potassium: input.potassium,
            phosphorus: input.phosphorus,
        }
    }
}

// Classifier service response structure
#[derive(Debug, Deserialize)]
struct PredictResponse {
    fertilizer: String,
    confidence: f64,
}

/// HTTP client for the external fertilizer classification service.
pub struct ClassifierClient {
    client: reqwest::Client,
    config: ClassifierConfig,
}

impl ClassifierClient {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Request a fertilizer prediction for the given feature vector.
    ///
    /// Any transport failure, non-success status or undecodable body maps
    /// to `ClassifierUnavailable`; no default fertilizer is ever invented
    /// here.
    pub async fn predict(&self, features: &ClassifierFeatures) -> Result<ClassifierPrediction> {
        let url = format!("{}/predict", self.config.url.trim_end_matches('/'));

        tracing::debug!(%url, "requesting fertilizer prediction");

        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .json(features)
            .send()
            .await
            .map_err(|e| AgroFertError::ClassifierUnavailable(format!("classifier: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgroFertError::ClassifierUnavailable(format!(
                "classifier returned {}: {}",
                status, body
            )));
        }

        let prediction: PredictResponse = response.json().await.map_err(|e| {
            AgroFertError::ClassifierUnavailable(format!(
                "failed to parse classifier response: {}",
                e
            ))
        })?;

        tracing::info!(
            fertilizer = %prediction.fertilizer,
            confidence = prediction.confidence,
            "classifier prediction received"
        );

        Ok(ClassifierPrediction {
            fertilizer: prediction.fertilizer,
            confidence: prediction.confidence,
        })
    }

    /// Probe the classifier's health endpoint.
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/health", self.config.url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}
