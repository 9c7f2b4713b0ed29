use crate::error::{AgroFertError, Result};
use crate::models::AreaUnit;

const HECTARES_PER_ACRE: f64 = 0.404686;
const HECTARES_PER_BIGHA: f64 = 0.1338;

/// Conversion factor from the given unit to hectares.
pub fn multiplier(unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::Hectares => 1.0,
        AreaUnit::Acres => HECTARES_PER_ACRE,
        AreaUnit::Bigha => HECTARES_PER_BIGHA,
    }
}

/// Convert a field size to hectares, the canonical unit all downstream
/// scaling works in. Size must be a finite positive number.
pub fn to_hectares(size: f64, unit: AreaUnit) -> Result<f64> {
    if !size.is_finite() || size <= 0.0 {
        return Err(AgroFertError::InvalidInput(format!(
            "field size must be a positive number, got {}",
            size
        )));
    }

    Ok(size * multiplier(unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hectares_are_identity() {
        assert_eq!(to_hectares(2.0, AreaUnit::Hectares).unwrap(), 2.0);
        assert_eq!(to_hectares(0.5, AreaUnit::Hectares).unwrap(), 0.5);
    }

    #[test]
    fn acres_convert() {
        let ha = to_hectares(1.0, AreaUnit::Acres).unwrap();
        assert!((ha - 0.404686).abs() < 1e-9);

        let ha = to_hectares(10.0, AreaUnit::Acres).unwrap();
        assert!((ha - 4.04686).abs() < 1e-9);
    }

    #[test]
    fn bigha_convert() {
        let ha = to_hectares(1.0, AreaUnit::Bigha).unwrap();
        assert!((ha - 0.1338).abs() < 1e-9);

        let ha = to_hectares(5.0, AreaUnit::Bigha).unwrap();
        assert!((ha - 0.669).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(to_hectares(0.0, AreaUnit::Hectares).is_err());
        assert!(to_hectares(-3.0, AreaUnit::Acres).is_err());
    }

    #[test]
    fn rejects_non_finite_size() {
        assert!(to_hectares(f64::NAN, AreaUnit::Hectares).is_err());
        assert!(to_hectares(f64::INFINITY, AreaUnit::Bigha).is_err());
    }
}
