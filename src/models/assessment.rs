use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhStatus {
    Acidic,
    Alkaline,
    Optimal,
}

impl PhStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhStatus::Acidic => "Acidic",
            PhStatus::Alkaline => "Alkaline",
            PhStatus::Optimal => "Optimal",
        }
    }
}

impl std::fmt::Display for PhStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoistureStatus {
    Low,
    Optimal,
    High,
}

impl MoistureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoistureStatus::Low => "Low",
            MoistureStatus::Optimal => "Optimal",
            MoistureStatus::High => "High",
        }
    }
}

impl std::fmt::Display for MoistureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "Nitrogen",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Potassium => "Potassium",
        }
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative soil diagnosis derived from numeric readings.
///
/// `deficiencies` is ordered by evaluation order (N, P, K) and
/// `recommendations` always holds exactly five guidance entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilAssessment {
    pub ph_status: PhStatus,
    pub moisture_status: MoistureStatus,
    pub deficiencies: Vec<Nutrient>,
    pub recommendations: Vec<String>,
}

impl SoilAssessment {
    pub fn is_deficient(&self, nutrient: Nutrient) -> bool {
        self.deficiencies.contains(&nutrient)
    }
}
