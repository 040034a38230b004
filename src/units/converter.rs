//! Unit conversion
//!
//! Same-category conversions pivot through the category base unit (ml or g).
//! Volume/weight conversions are bridged through an ingredient density and
//! flagged as approximate.

use std::fmt;

use serde::Serialize;

use super::density::resolve_density;
use super::error::{ConversionError, ConversionOutcome};
use super::normalize::{classify_canonical, normalize_unit, UnitCategory};
use super::registry::{volume_factor, weight_factor};

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub value_source: f64,
    pub unit_source: String,
    pub value_target: f64,
    pub unit_target: String,
    /// True only when a density was used to cross between volume and weight
    pub approximation: bool,
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value_target, self.unit_target)?;
        if self.approximation {
            f.write_str(" (≈)")?;
        }
        Ok(())
    }
}

/// Round to two decimal places, half away from zero
///
/// A result that rounds to zero is always `0.0`, never `-0.0`. Values near
/// `f64::MAX` overflow to infinity; `try_convert` rejects those.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Convert a quantity, reporting why it failed if it did
///
/// # Arguments
/// * `value` - Amount in the source unit
/// * `unit_source` - Unit the amount is expressed in (any known spelling)
/// * `unit_target` - Unit to express the amount in
/// * `ingredient` - Ingredient name, needed only to cross volume/weight
pub fn try_convert(
    value: f64,
    unit_source: &str,
    unit_target: &str,
    ingredient: Option<&str>,
) -> ConversionOutcome<ConversionResult> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }

    let source = normalize_unit(unit_source);
    let target = normalize_unit(unit_target);
    let source_category = classify_canonical(&source);
    let target_category = classify_canonical(&target);

    if source_category == UnitCategory::Unknown {
        return Err(ConversionError::UnknownUnit(unit_source.to_string()));
    }
    if target_category == UnitCategory::Unknown {
        return Err(ConversionError::UnknownUnit(unit_target.to_string()));
    }

    let ingredient = ingredient.map(str::trim).filter(|name| !name.is_empty());

    let (converted, approximation) = match (source_category, target_category) {
        (UnitCategory::Volume, UnitCategory::Volume) => {
            let ml = value * factor(&source, volume_factor)?;
            (ml / factor(&target, volume_factor)?, false)
        }
        (UnitCategory::Weight, UnitCategory::Weight) => {
            let grams = value * factor(&source, weight_factor)?;
            (grams / factor(&target, weight_factor)?, false)
        }
        (UnitCategory::Volume, UnitCategory::Weight) | (UnitCategory::Weight, UnitCategory::Volume) => {
            let Some(name) = ingredient else {
                return Err(ConversionError::IncompatibleCategory {
                    from: source_category,
                    to: target_category,
                });
            };
            let density = resolve_density(name)
                .ok_or_else(|| ConversionError::DensityUnavailable(name.to_string()))?;

            if source_category == UnitCategory::Volume {
                let grams = value * factor(&source, volume_factor)? * density;
                (grams / factor(&target, weight_factor)?, true)
            } else {
                let ml = value * factor(&source, weight_factor)? / density;
                (ml / factor(&target, volume_factor)?, true)
            }
        }
        (from, to) => return Err(ConversionError::IncompatibleCategory { from, to }),
    };

    let value_source = round2(value);
    let value_target = round2(converted);
    if !value_source.is_finite() || !value_target.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }

    Ok(ConversionResult {
        value_source,
        unit_source: unit_source.to_string(),
        value_target,
        unit_target: unit_target.to_string(),
        approximation,
    })
}

/// Convert a quantity, or `None` when the units cannot be reconciled
///
/// The fail-soft counterpart of [`try_convert`] for display code that
/// falls back to the original value.
pub fn convert(
    value: f64,
    unit_source: &str,
    unit_target: &str,
    ingredient: Option<&str>,
) -> Option<ConversionResult> {
    match try_convert(value, unit_source, unit_target, ingredient) {
        Ok(result) => Some(result),
        Err(e) => {
            tracing::debug!(
                "Conversion refused: {} {} -> {} ({})",
                value,
                unit_source,
                unit_target,
                e
            );
            None
        }
    }
}

/// Whether an amount in `unit_a` can be expressed in `unit_b`
pub fn is_convertible(unit_a: &str, unit_b: &str, ingredient: Option<&str>) -> bool {
    try_convert(1.0, unit_a, unit_b, ingredient).is_ok()
}

/// Scale factor and category for a unit
///
/// The factor is milliliters per unit for volumes and grams per unit for
/// weights. Pieces and unknown units have none.
pub fn factor_for(unit: &str) -> Option<(f64, UnitCategory)> {
    let canonical = normalize_unit(unit);
    match classify_canonical(&canonical) {
        UnitCategory::Volume => volume_factor(&canonical).map(|f| (f, UnitCategory::Volume)),
        UnitCategory::Weight => weight_factor(&canonical).map(|f| (f, UnitCategory::Weight)),
        UnitCategory::Piece | UnitCategory::Unknown => None,
    }
}

/// Express a quantity in its category base unit (ml or g), unrounded
pub fn to_base(value: f64, unit: &str) -> Option<(f64, UnitCategory)> {
    factor_for(unit).map(|(factor, category)| (value * factor, category))
}

fn factor(canonical: &str, lookup: fn(&str) -> Option<f64>) -> ConversionOutcome<f64> {
    lookup(canonical).ok_or_else(|| ConversionError::UnknownUnit(canonical.to_string()))
}
