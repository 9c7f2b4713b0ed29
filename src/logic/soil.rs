use crate::models::{MoistureStatus, Nutrient, PhStatus, SoilAssessment};

// Agronomic thresholds. The optimal pH band is inclusive of its own edges:
// 6.0 and 7.5 both read as Optimal.
const PH_ACIDIC_BELOW: f64 = 6.0;
const PH_ALKALINE_ABOVE: f64 = 7.5;

const MOISTURE_LOW_BELOW: f64 = 40.0;
const MOISTURE_HIGH_ABOVE: f64 = 80.0;

const NITROGEN_DEFICIENT_BELOW: f64 = 30.0;
const PHOSPHORUS_DEFICIENT_BELOW: f64 = 15.0;
const POTASSIUM_DEFICIENT_BELOW: f64 = 120.0;

/// Derive qualitative soil status from numeric readings.
///
/// Each classification is evaluated independently against fixed thresholds.
/// Deficiencies are checked in N, P, K order, which also fixes their order
/// in the result. The guidance list always has exactly five entries.
pub fn assess(
    ph: f64,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    moisture: f64,
) -> SoilAssessment {
    let ph_status = if ph < PH_ACIDIC_BELOW {
        PhStatus::Acidic
    } else if ph > PH_ALKALINE_ABOVE {
        PhStatus::Alkaline
    } else {
        PhStatus::Optimal
    };

    let moisture_status = if moisture < MOISTURE_LOW_BELOW {
        MoistureStatus::Low
    } else if moisture > MOISTURE_HIGH_ABOVE {
        MoistureStatus::High
    } else {
        MoistureStatus::Optimal
    };

    let mut deficiencies = Vec::new();
    if nitrogen < NITROGEN_DEFICIENT_BELOW {
        deficiencies.push(Nutrient::Nitrogen);
    }
    if phosphorus < PHOSPHORUS_DEFICIENT_BELOW {
        deficiencies.push(Nutrient::Phosphorus);
    }
    if potassium < POTASSIUM_DEFICIENT_BELOW {
        deficiencies.push(Nutrient::Potassium);
    }

    let recommendations = build_guidance(ph_status, moisture_status, &deficiencies);

    SoilAssessment {
        ph_status,
        moisture_status,
        deficiencies,
        recommendations,
    }
}

fn build_guidance(
    ph_status: PhStatus,
    moisture_status: MoistureStatus,
    deficiencies: &[Nutrient],
) -> Vec<String> {
    let mut guidance = Vec::with_capacity(5);

    guidance.push(match ph_status {
        PhStatus::Acidic => "Adjust soil pH using lime".to_string(),
        PhStatus::Alkaline => "Adjust soil pH using sulfur".to_string(),
        PhStatus::Optimal => "Maintain current pH levels".to_string(),
    });

    guidance.push(match moisture_status {
        MoistureStatus::Low => {
            "Increase irrigation frequency to raise soil moisture".to_string()
        }
        MoistureStatus::High => {
            "Improve field drainage to reduce excess soil moisture".to_string()
        }
        MoistureStatus::Optimal => "Maintain current moisture levels".to_string(),
    });

    if deficiencies.is_empty() {
        guidance.push("Nutrient levels are adequate".to_string());
    } else {
        let names: Vec<&str> = deficiencies.iter().map(|n| n.as_str()).collect();
        guidance.push(format!("Address {} deficiency", names.join(", ")));
    }

    guidance.push("Conduct a soil test every 6 months to track nutrient trends".to_string());
    guidance.push("Practice crop rotation to maintain long-term soil health".to_string());

    guidance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ph_boundaries() {
        assert_eq!(assess(5.9, 50.0, 20.0, 150.0, 50.0).ph_status, PhStatus::Acidic);
        assert_eq!(assess(6.0, 50.0, 20.0, 150.0, 50.0).ph_status, PhStatus::Optimal);
        assert_eq!(assess(7.5, 50.0, 20.0, 150.0, 50.0).ph_status, PhStatus::Optimal);
        assert_eq!(assess(7.6, 50.0, 20.0, 150.0, 50.0).ph_status, PhStatus::Alkaline);
    }

    #[test]
    fn moisture_boundaries() {
        assert_eq!(
            assess(7.0, 50.0, 20.0, 150.0, 39.9).moisture_status,
            MoistureStatus::Low
        );
        assert_eq!(
            assess(7.0, 50.0, 20.0, 150.0, 40.0).moisture_status,
            MoistureStatus::Optimal
        );
        assert_eq!(
            assess(7.0, 50.0, 20.0, 150.0, 80.0).moisture_status,
            MoistureStatus::Optimal
        );
        assert_eq!(
            assess(7.0, 50.0, 20.0, 150.0, 80.1).moisture_status,
            MoistureStatus::High
        );
    }

    #[test]
    fn deficiencies_in_npk_order() {
        let a = assess(7.0, 29.0, 14.0, 119.0, 50.0);
        assert_eq!(
            a.deficiencies,
            vec![Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium]
        );
    }

    #[test]
    fn deficiencies_at_thresholds_are_adequate() {
        let a = assess(7.0, 30.0, 15.0, 120.0, 50.0);
        assert!(a.deficiencies.is_empty());
    }

    #[test]
    fn single_deficiency() {
        let a = assess(7.0, 50.0, 10.0, 150.0, 50.0);
        assert_eq!(a.deficiencies, vec![Nutrient::Phosphorus]);
    }

    #[test]
    fn guidance_always_five_entries() {
        let healthy = assess(7.0, 50.0, 20.0, 150.0, 50.0);
        assert_eq!(healthy.recommendations.len(), 5);
        assert_eq!(healthy.recommendations[0], "Maintain current pH levels");
        assert_eq!(healthy.recommendations[1], "Maintain current moisture levels");
        assert_eq!(healthy.recommendations[2], "Nutrient levels are adequate");

        let stressed = assess(5.0, 10.0, 5.0, 50.0, 20.0);
        assert_eq!(stressed.recommendations.len(), 5);
        assert_eq!(stressed.recommendations[0], "Adjust soil pH using lime");
        assert_eq!(
            stressed.recommendations[2],
            "Address Nitrogen, Phosphorus, Potassium deficiency"
        );
    }

    #[test]
    fn alkaline_guidance_uses_sulfur() {
        let a = assess(8.2, 50.0, 20.0, 150.0, 50.0);
        assert_eq!(a.recommendations[0], "Adjust soil pH using sulfur");
    }
}
