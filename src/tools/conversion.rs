//! Conversion MCP Tools
//!
//! Thin request/response layer over the `units` engine.

use serde::Serialize;

use crate::units::{
    classify_unit, list_available_units, normalize_unit, resolve_density, try_convert,
    try_convert_text, ConversionResult, UnitCatalog, UnitCategory,
};

/// Response for convert_quantity
///
/// Refused conversions are reported in-band so callers can fall back to
/// showing the original quantity.
#[derive(Debug, Serialize)]
pub struct ConvertQuantityResponse {
    pub converted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ConversionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response for convert_text
#[derive(Debug, Serialize)]
pub struct ConvertTextResponse {
    pub input: String,
    pub output: String,
    pub converted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

/// Response for normalize_unit
#[derive(Debug, Serialize)]
pub struct NormalizeUnitResponse {
    pub input: String,
    pub canonical: String,
}

/// Response for classify_unit
#[derive(Debug, Serialize)]
pub struct ClassifyUnitResponse {
    pub input: String,
    pub canonical: String,
    pub category: UnitCategory,
    pub base_unit: Option<&'static str>,
}

/// Response for resolve_density
#[derive(Debug, Serialize)]
pub struct ResolveDensityResponse {
    pub ingredient: String,
    pub density_g_per_ml: Option<f64>,
}

/// Convert a numeric quantity between units
pub fn convert_quantity(
    value: f64,
    unit_source: &str,
    unit_target: &str,
    ingredient: Option<&str>,
) -> Result<ConvertQuantityResponse, String> {
    if unit_source.trim().is_empty() || unit_target.trim().is_empty() {
        return Err("unit_source and unit_target cannot be empty".to_string());
    }

    let response = match try_convert(value, unit_source, unit_target, ingredient) {
        Ok(result) => ConvertQuantityResponse {
            converted: true,
            result: Some(result),
            reason: None,
            error: None,
        },
        Err(e) => ConvertQuantityResponse {
            converted: false,
            result: None,
            reason: Some(e.kind()),
            error: Some(e.to_string()),
        },
    };
    Ok(response)
}

/// Convert a quantity string such as "2.5 cups"
pub fn convert_quantity_text(
    quantity_text: &str,
    unit_target: &str,
    ingredient: Option<&str>,
) -> Result<ConvertTextResponse, String> {
    if unit_target.trim().is_empty() {
        return Err("unit_target cannot be empty".to_string());
    }

    let response = match try_convert_text(quantity_text, unit_target, ingredient) {
        Ok(output) => ConvertTextResponse {
            input: quantity_text.to_string(),
            output,
            converted: true,
            reason: None,
        },
        Err(e) => ConvertTextResponse {
            input: quantity_text.to_string(),
            output: quantity_text.to_string(),
            converted: false,
            reason: Some(e.kind()),
        },
    };
    Ok(response)
}

/// Show the canonical form of a unit
pub fn normalize(unit: &str) -> NormalizeUnitResponse {
    NormalizeUnitResponse {
        input: unit.to_string(),
        canonical: normalize_unit(unit),
    }
}

/// Classify a unit into volume, weight, piece or unknown
pub fn classify(unit: &str) -> ClassifyUnitResponse {
    let category = classify_unit(unit);
    ClassifyUnitResponse {
        input: unit.to_string(),
        canonical: normalize_unit(unit),
        category,
        base_unit: category.base_unit(),
    }
}

/// Look up an ingredient density
pub fn density(ingredient: &str) -> Result<ResolveDensityResponse, String> {
    if ingredient.trim().is_empty() {
        return Err("ingredient cannot be empty".to_string());
    }
    Ok(ResolveDensityResponse {
        ingredient: ingredient.to_string(),
        density_g_per_ml: resolve_density(ingredient),
    })
}

/// Catalog of canonical units
pub fn catalog() -> UnitCatalog {
    list_available_units()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_quantity_success() {
        let response = convert_quantity(2.0, "cup", "ml", None).unwrap();
        assert!(response.converted);
        let result = response.result.unwrap();
        assert!((result.value_target - 473.18).abs() < 1e-9);
        assert!(response.reason.is_none());
    }

    #[test]
    fn test_convert_quantity_refused_in_band() {
        let response = convert_quantity(1.0, "kg", "pièce", None).unwrap();
        assert!(!response.converted);
        assert!(response.result.is_none());
        assert_eq!(response.reason, Some("incompatible_category"));

        let response = convert_quantity(1.0, "cup", "g", Some("tofu")).unwrap();
        assert_eq!(response.reason, Some("density_unavailable"));
    }

    #[test]
    fn test_convert_quantity_rejects_blank_units() {
        assert!(convert_quantity(1.0, " ", "ml", None).is_err());
    }

    #[test]
    fn test_convert_quantity_serializes_without_empty_fields() {
        let response = convert_quantity(1.0, "handful", "g", None).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["converted"], false);
        assert_eq!(json["reason"], "unknown_unit");
        assert!(json.get("result").is_none());
    }

    #[test]
    fn test_convert_quantity_text() {
        let response = convert_quantity_text("2.5 cups", "ml", None).unwrap();
        assert_eq!(response.output, "591.47 ml");
        assert!(response.converted);

        let response = convert_quantity_text("abc", "ml", None).unwrap();
        assert_eq!(response.output, "abc");
        assert!(!response.converted);
        assert_eq!(response.reason, Some("unparsable_quantity"));

        let response = convert_quantity_text("2 ml", "ml", None).unwrap();
        assert_eq!(response.output, "2 ml");
        assert!(response.converted);
        assert!(response.reason.is_none());

        let response = convert_quantity_text("2 gousses", "g", Some("ail")).unwrap();
        assert_eq!(response.output, "2 gousses");
        assert_eq!(response.reason, Some("incompatible_category"));
    }

    #[test]
    fn test_classify_and_normalize() {
        let response = classify("Cuillères à soupe");
        assert_eq!(response.canonical, "cuillère à soupe");
        assert_eq!(response.category, UnitCategory::Volume);
        assert_eq!(response.base_unit, Some("ml"));

        assert_eq!(normalize("LBS").canonical, "lb");
    }

    #[test]
    fn test_density() {
        assert_eq!(density("farine").unwrap().density_g_per_ml, Some(0.55));
        assert_eq!(density("tofu").unwrap().density_g_per_ml, None);
        assert!(density("").is_err());
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_value(catalog()).unwrap();
        assert!(json["volume"].as_array().unwrap().iter().any(|u| u == "ml"));
        assert!(json["weight"].as_array().unwrap().iter().any(|u| u == "g"));
        assert!(json["piece"].as_array().unwrap().iter().any(|u| u == "gousse"));
    }
}
