use crate::error::{AgroFertError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    Hectares,
    Acres,
    Bigha,
}

impl AreaUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaUnit::Hectares => "hectares",
            AreaUnit::Acres => "acres",
            AreaUnit::Bigha => "bigha",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hectares" | "hectare" | "ha" => Some(AreaUnit::Hectares),
            "acres" | "acre" => Some(AreaUnit::Acres),
            "bigha" => Some(AreaUnit::Bigha),
            _ => None,
        }
    }

    /// Unrecognized unit strings degrade to hectares (identity conversion)
    /// rather than failing the request.
    pub fn parse(s: &str) -> Self {
        Self::from_str(s).unwrap_or(AreaUnit::Hectares)
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropType {
    Barley,
    Cotton,
    GroundNuts,
    Maize,
    Millets,
    OilSeeds,
    Paddy,
    Pulses,
    Sugarcane,
    Tobacco,
    Wheat,
}

impl CropType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Barley => "Barley",
            CropType::Cotton => "Cotton",
            CropType::GroundNuts => "Ground Nuts",
            CropType::Maize => "Maize",
            CropType::Millets => "Millets",
            CropType::OilSeeds => "Oil Seeds",
            CropType::Paddy => "Paddy",
            CropType::Pulses => "Pulses",
            CropType::Sugarcane => "Sugarcane",
            CropType::Tobacco => "Tobacco",
            CropType::Wheat => "Wheat",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "barley" => Some(CropType::Barley),
            "cotton" => Some(CropType::Cotton),
            "groundnuts" | "ground nuts" | "groundnut" => Some(CropType::GroundNuts),
            "maize" | "corn" => Some(CropType::Maize),
            "millets" | "millet" => Some(CropType::Millets),
            "oilseeds" | "oil seeds" => Some(CropType::OilSeeds),
            "paddy" | "rice" => Some(CropType::Paddy),
            "pulses" => Some(CropType::Pulses),
            "sugarcane" => Some(CropType::Sugarcane),
            "tobacco" => Some(CropType::Tobacco),
            "wheat" => Some(CropType::Wheat),
            _ => None,
        }
    }

    /// Label-encoded integer the classifier was trained with
    /// (alphabetical encoder order).
    pub fn code(&self) -> i32 {
        match self {
            CropType::Barley => 0,
            CropType::Cotton => 1,
            CropType::GroundNuts => 2,
            CropType::Maize => 3,
            CropType::Millets => 4,
            CropType::OilSeeds => 5,
            CropType::Paddy => 6,
            CropType::Pulses => 7,
            CropType::Sugarcane => 8,
            CropType::Tobacco => 9,
            CropType::Wheat => 10,
        }
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Black,
    Clayey,
    Loamy,
    Red,
    Sandy,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Black => "Black",
            SoilType::Clayey => "Clayey",
            SoilType::Loamy => "Loamy",
            SoilType::Red => "Red",
            SoilType::Sandy => "Sandy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "black" => Some(SoilType::Black),
            "clayey" | "clay" => Some(SoilType::Clayey),
            "loamy" | "loam" => Some(SoilType::Loamy),
            "red" => Some(SoilType::Red),
            "sandy" | "sand" => Some(SoilType::Sandy),
            _ => None,
        }
    }

    /// Label-encoded integer the classifier was trained with.
    pub fn code(&self) -> i32 {
        match self {
            SoilType::Black => 0,
            SoilType::Clayey => 1,
            SoilType::Loamy => 2,
            SoilType::Red => 3,
            SoilType::Sandy => 4,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field measurements exactly as received from the outer system.
/// Numeric fields arrive as strings and are validated by
/// [`FieldInput::from_raw`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFieldInput {
    pub field_size: String,
    pub size_unit: String,
    pub crop_type: String,
    pub soil_type: String,
    #[serde(rename = "soilPH")]
    pub soil_ph: String,
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub temperature: String,
    pub humidity: String,
    pub soil_moisture: String,
}

/// Parsed and validated field measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInput {
    pub field_size: f64,
    pub size_unit: AreaUnit,
    pub crop_type: CropType,
    pub soil_type: SoilType,
    pub soil_ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
}

impl FieldInput {
    /// Parse and validate raw measurements. Every numeric field must be a
    /// finite number; a missing or malformed value fails the whole request
    /// rather than defaulting to zero.
    pub fn from_raw(raw: &RawFieldInput) -> Result<Self> {
        let field_size = parse_finite("fieldSize", &raw.field_size)?;
        if field_size <= 0.0 {
            return Err(AgroFertError::InvalidInput(format!(
                "fieldSize must be positive, got {}",
                field_size
            )));
        }

        let crop_type = CropType::from_str(&raw.crop_type).ok_or_else(|| {
            AgroFertError::InvalidInput(format!("unknown crop type '{}'", raw.crop_type))
        })?;

        let soil_type = SoilType::from_str(&raw.soil_type).ok_or_else(|| {
            AgroFertError::InvalidInput(format!("unknown soil type '{}'", raw.soil_type))
        })?;

        Ok(Self {
            field_size,
            size_unit: AreaUnit::parse(&raw.size_unit),
            crop_type,
            soil_type,
            soil_ph: parse_finite("soilPH", &raw.soil_ph)?,
            nitrogen: parse_finite("nitrogen", &raw.nitrogen)?,
            phosphorus: parse_finite("phosphorus", &raw.phosphorus)?,
            potassium: parse_finite("potassium", &raw.potassium)?,
            temperature: parse_finite("temperature", &raw.temperature)?,
            humidity: parse_finite("humidity", &raw.humidity)?,
            soil_moisture: parse_finite("soilMoisture", &raw.soil_moisture)?,
        })
    }
}

fn parse_finite(field: &str, value: &str) -> Result<f64> {
    let parsed: f64 = value.trim().parse().map_err(|_| {
        AgroFertError::InvalidInput(format!("{} is not a number: '{}'", field, value))
    })?;

    if !parsed.is_finite() {
        return Err(AgroFertError::InvalidInput(format!(
            "{} is not finite: '{}'",
            field, value
        )));
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_raw() -> RawFieldInput {
        RawFieldInput {
            field_size: "2".into(),
            size_unit: "hectares".into(),
            crop_type: "Maize".into(),
            soil_type: "Loamy".into(),
            soil_ph: "6.5".into(),
            nitrogen: "40".into(),
            phosphorus: "20".into(),
            potassium: "150".into(),
            temperature: "25".into(),
            humidity: "60".into(),
            soil_moisture: "50".into(),
        }
    }

    #[test]
    fn area_unit_from_str_valid() {
        assert_eq!(AreaUnit::from_str("hectares"), Some(AreaUnit::Hectares));
        assert_eq!(AreaUnit::from_str("ha"), Some(AreaUnit::Hectares));
        assert_eq!(AreaUnit::from_str("Acres"), Some(AreaUnit::Acres));
        assert_eq!(AreaUnit::from_str("BIGHA"), Some(AreaUnit::Bigha));
    }

    #[test]
    fn area_unit_parse_falls_back_to_hectares() {
        assert_eq!(AreaUnit::parse("square-furlongs"), AreaUnit::Hectares);
        assert_eq!(AreaUnit::parse(""), AreaUnit::Hectares);
        assert_eq!(AreaUnit::parse("acres"), AreaUnit::Acres);
    }

    #[test]
    fn crop_type_from_str_valid() {
        assert_eq!(CropType::from_str("maize"), Some(CropType::Maize));
        assert_eq!(CropType::from_str("Ground Nuts"), Some(CropType::GroundNuts));
        assert_eq!(CropType::from_str("rice"), Some(CropType::Paddy));
        assert_eq!(CropType::from_str("unknown"), None);
    }

    #[test]
    fn crop_codes_follow_encoder_order() {
        assert_eq!(CropType::Barley.code(), 0);
        assert_eq!(CropType::Maize.code(), 3);
        assert_eq!(CropType::Wheat.code(), 10);
        assert_eq!(SoilType::Black.code(), 0);
        assert_eq!(SoilType::Sandy.code(), 4);
    }

    #[test]
    fn from_raw_parses_valid_input() {
        let input = FieldInput::from_raw(&sample_raw()).unwrap();
        assert_eq!(input.field_size, 2.0);
        assert_eq!(input.size_unit, AreaUnit::Hectares);
        assert_eq!(input.crop_type, CropType::Maize);
        assert_eq!(input.soil_type, SoilType::Loamy);
        assert_eq!(input.soil_ph, 6.5);
    }

    #[test]
    fn from_raw_rejects_non_numeric() {
        let mut raw = sample_raw();
        raw.nitrogen = "lots".into();
        assert!(FieldInput::from_raw(&raw).is_err());

        let mut raw = sample_raw();
        raw.soil_ph = "".into();
        assert!(FieldInput::from_raw(&raw).is_err());
    }

    #[test]
    fn from_raw_rejects_non_finite() {
        let mut raw = sample_raw();
        raw.potassium = "NaN".into();
        assert!(FieldInput::from_raw(&raw).is_err());

        let mut raw = sample_raw();
        raw.temperature = "inf".into();
        assert!(FieldInput::from_raw(&raw).is_err());
    }

    #[test]
    fn from_raw_rejects_non_positive_size() {
        let mut raw = sample_raw();
        raw.field_size = "0".into();
        assert!(FieldInput::from_raw(&raw).is_err());

        let mut raw = sample_raw();
        raw.field_size = "-1.5".into();
        assert!(FieldInput::from_raw(&raw).is_err());
    }

    #[test]
    fn from_raw_rejects_unknown_categories() {
        let mut raw = sample_raw();
        raw.crop_type = "kudzu".into();
        assert!(FieldInput::from_raw(&raw).is_err());

        let mut raw = sample_raw();
        raw.soil_type = "martian".into();
        assert!(FieldInput::from_raw(&raw).is_err());
    }

    #[test]
    fn from_raw_tolerates_unknown_unit() {
        let mut raw = sample_raw();
        raw.size_unit = "parcels".into();
        let input = FieldInput::from_raw(&raw).unwrap();
        assert_eq!(input.size_unit, AreaUnit::Hectares);
    }

    #[test]
    fn raw_input_deserializes_camel_case() {
        let json = r#"{
            "fieldSize": "2", "sizeUnit": "hectares",
            "cropType": "Maize", "soilType": "Loamy",
            "soilPH": "5.5", "nitrogen": "20", "phosphorus": "10",
            "potassium": "100", "temperature": "25", "humidity": "60",
            "soilMoisture": "30"
        }"#;
        let raw: RawFieldInput = serde_json::from_str(json).unwrap();
        assert_eq!(raw.soil_ph, "5.5");
        assert_eq!(raw.soil_moisture, "30");
    }
}
