//! Unit name normalization and classification

use std::fmt;

use serde::Serialize;

use super::registry::{alias_target, is_canonical, PIECE_UNITS, VOLUME_UNITS, WEIGHT_UNITS};

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Volume units, based on the milliliter
    Volume,
    /// Weight units, based on the gram
    Weight,
    /// Countable units (pièce, gousse, tranche). Never convertible.
    Piece,
    /// Anything the registry does not know
    Unknown,
}

impl UnitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Volume => "volume",
            UnitCategory::Weight => "weight",
            UnitCategory::Piece => "piece",
            UnitCategory::Unknown => "unknown",
        }
    }

    /// Base unit used as the conversion pivot, if the category has one
    pub fn base_unit(&self) -> Option<&'static str> {
        match self {
            UnitCategory::Volume => Some("ml"),
            UnitCategory::Weight => Some("g"),
            UnitCategory::Piece | UnitCategory::Unknown => None,
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonicalize a raw unit string
///
/// Lower-cases, trims, collapses inner whitespace and drops one trailing
/// period before consulting the alias table. Strings that resolve to
/// nothing come back lower-cased and trimmed, period included, so that
/// a second pass is always a no-op.
///
/// Examples:
/// - "Cuillères à Soupe" -> "cuillère à soupe"
/// - "c.à.s." -> "cuillère à soupe"
/// - " ML " -> "ml"
/// - "handful" -> "handful"
pub fn normalize_unit(raw: &str) -> String {
    let cleaned = raw
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let key = cleaned.strip_suffix('.').map(str::trim_end).unwrap_or(cleaned.as_str());

    if let Some(canonical) = alias_target(key) {
        return canonical.to_string();
    }
    if is_canonical(key) {
        return key.to_string();
    }

    cleaned
}

/// Determine the category of a unit string
///
/// Volume is checked before weight and weight before piece, so a name
/// listed in two tables resolves to the first of those.
pub fn classify_unit(raw: &str) -> UnitCategory {
    classify_canonical(&normalize_unit(raw))
}

/// Classify an already-normalized unit name
pub(crate) fn classify_canonical(canonical: &str) -> UnitCategory {
    classify_in(canonical, VOLUME_UNITS, WEIGHT_UNITS, PIECE_UNITS)
}

/// Table membership in fixed order: volume, then weight, then piece
fn classify_in(
    name: &str,
    volume: &[(&str, f64)],
    weight: &[(&str, f64)],
    piece: &[&str],
) -> UnitCategory {
    if volume.iter().any(|(unit, _)| *unit == name) {
        return UnitCategory::Volume;
    }
    if weight.iter().any(|(unit, _)| *unit == name) {
        return UnitCategory::Weight;
    }
    if piece.contains(&name) {
        return UnitCategory::Piece;
    }
    UnitCategory::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDGE_STRINGS: &[&str] = &[
        "",
        " ",
        ".",
        "..",
        "ml",
        "ml.",
        "ml..",
        " ML. ",
        "Cups",
        "c.à.s.",
        "C. à S.",
        "fl   oz",
        "Fl. Oz.",
        "cuillères  à   soupe",
        "handful",
        "handful.",
        "g .",
        "\tKG\n",
        "pièces",
        "Œufs",
        "1/2",
        "ÀÉÎ",
    ];

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(normalize_unit("cups"), "cup");
        assert_eq!(normalize_unit("Tablespoons"), "tbsp");
        assert_eq!(normalize_unit("cuillères à soupe"), "cuillère à soupe");
        assert_eq!(normalize_unit("c.à.s."), "cuillère à soupe");
        assert_eq!(normalize_unit("cac"), "cuillère à café");
        assert_eq!(normalize_unit("grammes"), "g");
        assert_eq!(normalize_unit("pieces"), "pièce");
    }

    #[test]
    fn test_normalize_cleans_case_space_and_period() {
        assert_eq!(normalize_unit("  ML  "), "ml");
        assert_eq!(normalize_unit("ml."), "ml");
        assert_eq!(normalize_unit("Fl.  Oz."), "fl oz");
        assert_eq!(normalize_unit("fl   oz"), "fl oz");
    }

    #[test]
    fn test_normalize_unknown_passthrough() {
        assert_eq!(normalize_unit("Handful"), "handful");
        assert_eq!(normalize_unit("handful."), "handful.");
        assert_eq!(normalize_unit("ml.."), "ml..");
        assert_eq!(normalize_unit(""), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in EDGE_STRINGS {
            let once = normalize_unit(raw);
            assert_eq!(normalize_unit(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_idempotent_over_registry() {
        use crate::units::registry::{PIECE_UNITS, UNIT_ALIASES, VOLUME_UNITS, WEIGHT_UNITS};

        let names = UNIT_ALIASES
            .iter()
            .flat_map(|(alias, target)| [*alias, *target])
            .chain(VOLUME_UNITS.iter().map(|(name, _)| *name))
            .chain(WEIGHT_UNITS.iter().map(|(name, _)| *name))
            .chain(PIECE_UNITS.iter().copied());

        for name in names {
            for raw in [name.to_string(), name.to_uppercase(), format!(" {}. ", name)] {
                let once = normalize_unit(&raw);
                assert_eq!(normalize_unit(&once), once, "not idempotent for {:?}", raw);
            }
        }
    }

    #[test]
    fn test_classify_volume_units() {
        assert_eq!(classify_unit("ml"), UnitCategory::Volume);
        assert_eq!(classify_unit("cup"), UnitCategory::Volume);
        assert_eq!(classify_unit("tbsp"), UnitCategory::Volume);
        assert_eq!(classify_unit("c.à.s"), UnitCategory::Volume);
        assert_eq!(classify_unit("verre"), UnitCategory::Volume);
        assert_eq!(classify_unit("fl oz"), UnitCategory::Volume);
    }

    #[test]
    fn test_classify_weight_units() {
        assert_eq!(classify_unit("g"), UnitCategory::Weight);
        assert_eq!(classify_unit("Kilos"), UnitCategory::Weight);
        assert_eq!(classify_unit("oz"), UnitCategory::Weight);
        assert_eq!(classify_unit("lbs"), UnitCategory::Weight);
    }

    #[test]
    fn test_classify_piece_units() {
        assert_eq!(classify_unit("pièce"), UnitCategory::Piece);
        assert_eq!(classify_unit("gousses"), UnitCategory::Piece);
        assert_eq!(classify_unit("tranche"), UnitCategory::Piece);
        assert_eq!(classify_unit("sachet"), UnitCategory::Piece);
    }

    #[test]
    fn test_classify_total() {
        for raw in EDGE_STRINGS {
            let category = classify_unit(raw);
            assert!(matches!(
                category,
                UnitCategory::Volume | UnitCategory::Weight | UnitCategory::Piece | UnitCategory::Unknown
            ));
        }
        assert_eq!(classify_unit("handful"), UnitCategory::Unknown);
        assert_eq!(classify_unit(""), UnitCategory::Unknown);
    }

    #[test]
    fn test_classify_priority_when_tables_overlap() {
        let volume: &[(&str, f64)] = &[("pot", 125.0)];
        let weight: &[(&str, f64)] = &[("pot", 150.0), ("boîte", 400.0)];
        let piece: &[&str] = &["pot", "boîte", "gousse"];

        assert_eq!(classify_in("pot", volume, weight, piece), UnitCategory::Volume);
        assert_eq!(classify_in("boîte", volume, weight, piece), UnitCategory::Weight);
        assert_eq!(classify_in("gousse", volume, weight, piece), UnitCategory::Piece);
        assert_eq!(classify_in("bol", volume, weight, piece), UnitCategory::Unknown);
    }

    #[test]
    fn test_category_base_unit() {
        assert_eq!(UnitCategory::Volume.base_unit(), Some("ml"));
        assert_eq!(UnitCategory::Weight.base_unit(), Some("g"));
        assert_eq!(UnitCategory::Piece.base_unit(), None);
        assert_eq!(UnitCategory::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(serde_json::to_value(UnitCategory::Volume).unwrap(), "volume");
        assert_eq!(serde_json::to_value(UnitCategory::Piece).unwrap(), "piece");
    }
}
