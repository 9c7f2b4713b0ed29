use crate::models::CostEstimate;

// Flat per-hectare rates in currency units.
const PRIMARY_RATE_PER_HA: f64 = 4000.0;
const SECONDARY_RATE_PER_HA: f64 = 2500.0;
const ORGANIC_RATE_PER_HA: f64 = 2000.0;

/// Estimate per-track costs for the given area.
///
/// Each component is rounded individually and the total sums the rounded
/// components, so the total can differ by up to 2 units from rounding the
/// exact sum. Kept that way for compatibility with the upstream system.
pub fn estimate(area_hectares: f64) -> CostEstimate {
    let primary = (PRIMARY_RATE_PER_HA * area_hectares).round() as i64;
    let secondary = (SECONDARY_RATE_PER_HA * area_hectares).round() as i64;
    let organic = (ORGANIC_RATE_PER_HA * area_hectares).round() as i64;

    CostEstimate {
        primary,
        secondary,
        organic,
        total: primary + secondary + organic,
    }
}
