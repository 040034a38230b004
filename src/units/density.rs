//! Ingredient density lookup
//!
//! Resolves a free-text ingredient name to a density in g/ml.

use super::registry::INGREDIENT_DENSITIES;

/// Look up the density of an ingredient in grams per milliliter
///
/// An exact (case-insensitive) name match wins. Otherwise the table is
/// scanned in declaration order and the first entry whose name contains,
/// or is contained in, the ingredient is used. Blank names resolve to
/// nothing.
///
/// The first-declared rule means "pâte à gâteau" resolves through "eau";
/// that is the behaviour callers currently rely on.
pub fn resolve_density(ingredient: &str) -> Option<f64> {
    let name = ingredient.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }

    if let Some((_, density)) = INGREDIENT_DENSITIES.iter().find(|(key, _)| *key == name) {
        return Some(*density);
    }

    let (key, density) = INGREDIENT_DENSITIES
        .iter()
        .find(|(key, _)| name.contains(key) || key.contains(name.as_str()))?;

    tracing::trace!(ingredient = %name, matched = %key, "Density resolved by partial match");
    Some(*density)
}
