use super::catalog::fertilizer_metadata;
use crate::models::{ClassifierPrediction, FertilizerChoice, FieldInput, Nutrient};

// Dosage rates in kg per hectare.
const PRIMARY_KG_PER_HA: f64 = 100.0;
const DAP_KG_PER_HA: f64 = 50.0;
const POTASSIUM_SULFATE_KG_PER_HA: f64 = 40.0;
const COMPOST_KG_PER_HA: f64 = 1000.0;

/// Build the primary fertilizer choice from the classifier's label.
///
/// Labels outside the metadata catalog never fail: the reason degrades to a
/// templated string naming crop and soil, and the application method to a
/// generic instruction.
pub fn select_primary(
    prediction: &ClassifierPrediction,
    input: &FieldInput,
    area_hectares: f64,
) -> FertilizerChoice {
    let amount_kg = (PRIMARY_KG_PER_HA * area_hectares).round() as i64;

    match fertilizer_metadata(&prediction.fertilizer) {
        Some(meta) => FertilizerChoice::new(
            &prediction.fertilizer,
            amount_kg,
            format!("{} (NPK {})", meta.description, meta.npk_ratio),
            meta.application_method,
        ),
        None => {
            tracing::debug!(
                label = %prediction.fertilizer,
                "fertilizer label not in catalog, using generic guidance"
            );
            FertilizerChoice::new(
                &prediction.fertilizer,
                amount_kg,
                format!(
                    "Recommended for {} cultivation in {} soil based on nutrient analysis",
                    input.crop_type, input.soil_type
                ),
                "Apply as per standard agricultural practices",
            )
        }
    }
}

/// Pick the deficiency-driven complementary fertilizer. Priority order,
/// first match wins: phosphorus deficiency, then potassium, then a compost
/// default. Nitrogen deficiency alone does not change the pick since the
/// classifier-chosen primary already covers it.
pub fn select_secondary(deficiencies: &[Nutrient], area_hectares: f64) -> FertilizerChoice {
    if deficiencies.contains(&Nutrient::Phosphorus) {
        build_dap(area_hectares)
    } else if deficiencies.contains(&Nutrient::Potassium) {
        build_potassium_sulfate(area_hectares)
    } else {
        build_compost(area_hectares)
    }
}

fn build_dap(area_hectares: f64) -> FertilizerChoice {
    FertilizerChoice::new(
        "DAP",
        (DAP_KG_PER_HA * area_hectares).round() as i64,
        "Phosphorus deficiency detected in soil analysis",
        "Apply as basal dose at sowing, placed below the seed",
    )
}

fn build_potassium_sulfate(area_hectares: f64) -> FertilizerChoice {
    FertilizerChoice::new(
        "Potassium sulfate",
        (POTASSIUM_SULFATE_KG_PER_HA * area_hectares).round() as i64,
        "Potassium deficiency detected in soil analysis",
        "Side-dress during the fruit development stage",
    )
}

fn build_compost(area_hectares: f64) -> FertilizerChoice {
    FertilizerChoice::new(
        "Organic Compost",
        (COMPOST_KG_PER_HA * area_hectares).round() as i64,
        "Maintain soil structure and organic matter",
        "Spread evenly and work into the top 15 cm of soil",
    )
}
