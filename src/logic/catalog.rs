use crate::models::OrganicOption;

/// Descriptive metadata for a fertilizer label the classifier can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FertilizerMetadata {
    pub description: &'static str,
    pub application_method: &'static str,
    pub npk_ratio: &'static str,
}

/// Static lookup for the classifier's known fertilizer catalog. Returns
/// `None` for labels outside the catalog; callers degrade to generic
/// guidance rather than failing.
pub fn fertilizer_metadata(label: &str) -> Option<FertilizerMetadata> {
    match label {
        "Urea" => Some(FertilizerMetadata {
            description: "High-nitrogen fertilizer for rapid vegetative growth",
            application_method: "Broadcast evenly and incorporate into moist soil",
            npk_ratio: "46-0-0",
        }),
        "DAP" => Some(FertilizerMetadata {
            description: "Diammonium phosphate supplying phosphorus and starter nitrogen",
            application_method: "Apply as basal dose at sowing, placed below the seed",
            npk_ratio: "18-46-0",
        }),
        "14-35-14" => Some(FertilizerMetadata {
            description: "Phosphorus-rich complex for root establishment",
            application_method: "Apply at sowing and mix into the topsoil",
            npk_ratio: "14-35-14",
        }),
        "28-28" => Some(FertilizerMetadata {
            description: "Balanced nitrogen-phosphorus complex for early growth",
            application_method: "Apply in bands near the root zone before irrigation",
            npk_ratio: "28-28-0",
        }),
        "17-17-17" => Some(FertilizerMetadata {
            description: "Balanced NPK complex for general-purpose feeding",
            application_method: "Broadcast evenly before sowing or transplanting",
            npk_ratio: "17-17-17",
        }),
        "20-20" => Some(FertilizerMetadata {
            description: "Balanced nitrogen-phosphorus blend for steady early development",
            application_method: "Broadcast and incorporate before planting",
            npk_ratio: "20-20-0",
        }),
        "10-26-26" => Some(FertilizerMetadata {
            description: "Phosphorus-potassium complex for flowering and grain fill",
            application_method: "Apply as basal dose and supplement at flowering",
            npk_ratio: "10-26-26",
        }),
        "Potassium sulfate" => Some(FertilizerMetadata {
            description: "Sulfate of potash for fruit quality and stress tolerance",
            application_method: "Side-dress during the fruit development stage",
            npk_ratio: "0-0-50",
        }),
        "Organic Compost" => Some(FertilizerMetadata {
            description: "Decomposed organic matter improving soil structure",
            application_method: "Spread evenly and work into the top 15 cm of soil",
            npk_ratio: "varies",
        }),
        _ => None,
    }
}

// Per-hectare base quantities for the fixed organic amendments.
const VERMICOMPOST_KG_PER_HA: f64 = 1000.0;
const NEEM_CAKE_KG_PER_HA: f64 = 200.0;
const BONE_MEAL_KG_PER_HA: f64 = 150.0;

/// The fixed organic amendment catalog, scaled to field area. Always three
/// entries, in this order.
pub fn organic_options(area_hectares: f64) -> Vec<OrganicOption> {
    vec![
        OrganicOption {
            name: "Vermicompost".to_string(),
            amount_kg: (VERMICOMPOST_KG_PER_HA * area_hectares).round() as i64,
            benefits: "Improves soil structure, water retention and microbial activity"
                .to_string(),
            application_timing: "Apply 2-3 weeks before sowing".to_string(),
        },
        OrganicOption {
            name: "Neem Cake".to_string(),
            amount_kg: (NEEM_CAKE_KG_PER_HA * area_hectares).round() as i64,
            benefits: "Slow-release nitrogen with natural pest suppression".to_string(),
            application_timing: "Mix into soil at the time of field preparation".to_string(),
        },
        OrganicOption {
            name: "Bone Meal".to_string(),
            amount_kg: (BONE_MEAL_KG_PER_HA * area_hectares).round() as i64,
            benefits: "Slow-release phosphorus and calcium for root development".to_string(),
            application_timing: "Apply at planting, close to the root zone".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_have_metadata() {
        let urea = fertilizer_metadata("Urea").unwrap();
        assert_eq!(urea.npk_ratio, "46-0-0");

        let dap = fertilizer_metadata("DAP").unwrap();
        assert_eq!(dap.npk_ratio, "18-46-0");

        assert!(fertilizer_metadata("17-17-17").is_some());
        assert!(fertilizer_metadata("Potassium sulfate").is_some());
    }

    #[test]
    fn unknown_label_returns_none() {
        assert!(fertilizer_metadata("Miracle Dust").is_none());
        assert!(fertilizer_metadata("").is_none());
        // Lookup is exact, not case-insensitive
        assert!(fertilizer_metadata("urea").is_none());
    }

    #[test]
    fn organic_catalog_is_fixed_and_ordered() {
        let options = organic_options(1.0);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].name, "Vermicompost");
        assert_eq!(options[1].name, "Neem Cake");
        assert_eq!(options[2].name, "Bone Meal");
        assert_eq!(options[0].amount_kg, 1000);
        assert_eq!(options[1].amount_kg, 200);
        assert_eq!(options[2].amount_kg, 150);
    }

    #[test]
    fn organic_amounts_scale_with_area() {
        let options = organic_options(2.0);
        assert_eq!(options[0].amount_kg, 2000);
        assert_eq!(options[1].amount_kg, 400);
        assert_eq!(options[2].amount_kg, 300);
    }

    #[test]
    fn organic_amounts_round_for_fractional_area() {
        // 0.1338 ha (one bigha)
        let options = organic_options(0.1338);
        assert_eq!(options[0].amount_kg, 134);
        assert_eq!(options[1].amount_kg, 27);
        assert_eq!(options[2].amount_kg, 20);
    }
}
