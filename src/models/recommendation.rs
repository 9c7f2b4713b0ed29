use super::assessment::SoilAssessment;
use super::field::{AreaUnit, CropType, SoilType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output of the external ML classifier: a fertilizer label from its known
/// catalog and a confidence score in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierPrediction {
    pub fertilizer: String,
    pub confidence: f64,
}

/// A single fertilizer pick with its area-scaled dosage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerChoice {
    pub name: String,
    pub amount_kg: i64,
    pub reason: String,
    pub application_method: String,
}

impl FertilizerChoice {
    pub fn new(
        name: impl Into<String>,
        amount_kg: i64,
        reason: impl Into<String>,
        application_method: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount_kg,
            reason: reason.into(),
            application_method: application_method.into(),
        }
    }
}

/// One of the fixed organic soil amendments, scaled to field area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganicOption {
    pub name: String,
    pub amount_kg: i64,
    pub benefits: String,
    pub application_timing: String,
}

/// Fixed application-timing guidance attached to every recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationTiming {
    pub best_time: String,
    pub frequency: String,
    pub weather_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub primary: i64,
    pub secondary: i64,
    pub organic: i64,
    pub total: i64,
}

/// The complete recommendation produced for one request. Immutable once
/// assembled; every invocation of the engine yields a fresh instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FertilizerRecommendation {
    pub primary_fertilizer: FertilizerChoice,
    pub secondary_fertilizer: FertilizerChoice,
    pub organic_options: Vec<OrganicOption>,
    pub application_timing: ApplicationTiming,
    pub cost_estimate: CostEstimate,
    pub soil_condition: SoilAssessment,
    pub ml_prediction: ClassifierPrediction,
}

/// Caller-facing wrapper around a recommendation. The timestamp is owned by
/// the caller, not the engine, so the engine itself stays deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub generated_at: DateTime<Utc>,
    pub crop_type: CropType,
    pub soil_type: SoilType,
    pub field_size: f64,
    pub size_unit: AreaUnit,
    pub area_hectares: f64,
    pub recommendation: FertilizerRecommendation,
}
