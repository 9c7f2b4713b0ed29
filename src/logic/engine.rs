use super::{catalog, cost, selector, soil, units};
use crate::error::Result;
use crate::models::{
    ApplicationTiming, ClassifierPrediction, FertilizerRecommendation, FieldInput,
};

/// Stateless recommendation engine. Composes unit normalization, soil
/// assessment, fertilizer selection, the organic catalog and cost
/// estimation into one recommendation per request. Performs no I/O;
/// identical inputs always produce identical output.
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(
        &self,
        input: &FieldInput,
        prediction: &ClassifierPrediction,
    ) -> Result<FertilizerRecommendation> {
        let area_hectares = units::to_hectares(input.field_size, input.size_unit)?;

        let soil_condition = soil::assess(
            input.soil_ph,
            input.nitrogen,
            input.phosphorus,
            input.potassium,
            input.soil_moisture,
        );

        let primary_fertilizer = selector::select_primary(prediction, input, area_hectares);
        let secondary_fertilizer =
            selector::select_secondary(&soil_condition.deficiencies, area_hectares);

        Ok(FertilizerRecommendation {
            primary_fertilizer,
            secondary_fertilizer,
            organic_options: catalog::organic_options(area_hectares),
            application_timing: application_timing(),
            cost_estimate: cost::estimate(area_hectares),
            soil_condition,
            ml_prediction: prediction.clone(),
        })
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn application_timing() -> ApplicationTiming {
    ApplicationTiming {
        best_time: "Apply during early morning or late evening to limit volatilization"
            .to_string(),
        frequency: "Split the total dose into 2-3 applications across the season".to_string(),
        weather_note: "Avoid application within 24 hours of expected heavy rainfall"
            .to_string(),
    }
}
