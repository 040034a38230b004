//! Quantity text conversion
//!
//! Turns short strings such as "2.5 cups" or "1,5 kg" into a converted,
//! display-ready string.

use std::sync::LazyLock;

use regex::Regex;

use super::converter::try_convert;
use super::error::{ConversionError, ConversionOutcome};

/// Leading amount (decimal with `.` or `,`, fraction, or mixed number)
/// followed by the unit.
static QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+\s+\d+/\d+|\d+/\d+|\d+(?:[.,]\d+)?)\s*(.*?)\s*$")
        .expect("quantity pattern is valid")
});

/// A quantity split into its amount and unit text
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuantity {
    pub value: f64,
    pub unit: String,
}

/// Split a quantity string into amount and unit
///
/// Examples:
/// - "2.5 cups" -> ParsedQuantity { value: 2.5, unit: "cups" }
/// - "1,5kg" -> ParsedQuantity { value: 1.5, unit: "kg" }
/// - "1 1/2 tasses" -> ParsedQuantity { value: 1.5, unit: "tasses" }
/// - "abc" -> None
pub fn parse_quantity(text: &str) -> Option<ParsedQuantity> {
    let caps = QUANTITY_RE.captures(text)?;
    let value = parse_amount(caps.get(1)?.as_str())?;
    let unit = caps.get(2).map(|m| m.as_str()).unwrap_or_default().to_string();
    Some(ParsedQuantity { value, unit })
}

/// Parse "2", "2.5", "2,5", "1/2" or "1 1/2"
fn parse_amount(amount: &str) -> Option<f64> {
    let parts: Vec<&str> = amount.split_whitespace().collect();
    if let [whole, fraction] = parts.as_slice() {
        let whole: f64 = whole.parse().ok()?;
        return Some(whole + parse_fraction(fraction)?);
    }

    if amount.contains('/') {
        return parse_fraction(amount);
    }

    amount.replace(',', ".").parse().ok()
}

fn parse_fraction(s: &str) -> Option<f64> {
    let (num, denom) = s.split_once('/')?;
    let num: f64 = num.parse().ok()?;
    let denom: f64 = denom.parse().ok()?;
    if denom == 0.0 {
        return None;
    }
    Some(num / denom)
}

/// Convert a quantity string to another unit, reporting why it failed
///
/// On success the string is "{value} {unit_target}", with " (≈)" appended
/// when a density was needed.
pub fn try_convert_text(
    quantity_text: &str,
    unit_target: &str,
    ingredient: Option<&str>,
) -> ConversionOutcome<String> {
    let parsed = parse_quantity(quantity_text)
        .ok_or_else(|| ConversionError::UnparsableQuantity(quantity_text.to_string()))?;
    let result = try_convert(parsed.value, &parsed.unit, unit_target, ingredient)?;
    Ok(result.to_string())
}

/// Convert a quantity string to another unit, for display
///
/// Anything that cannot be parsed or converted is returned as is.
pub fn convert_text(quantity_text: &str, unit_target: &str, ingredient: Option<&str>) -> String {
    try_convert_text(quantity_text, unit_target, ingredient).unwrap_or_else(|e| {
        tracing::debug!("Leaving '{}' unconverted: {}", quantity_text, e);
        quantity_text.to_string()
    })
}
