//! Unit registry
//!
//! Static conversion tables, the alias table, and ingredient densities.
//! Everything here is immutable data built at compile time.

use serde::Serialize;

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per teaspoon (US)
pub const ML_PER_TSP: f64 = 4.92892;
/// Milliliters per tablespoon (US)
pub const ML_PER_TBSP: f64 = 14.7868;
/// Milliliters per fluid ounce (US)
pub const ML_PER_FL_OZ: f64 = 29.5735;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
/// Milliliters per pint (US)
pub const ML_PER_PINT: f64 = 473.176;
/// Milliliters per quart (US)
pub const ML_PER_QUART: f64 = 946.353;
/// Milliliters per gallon (US)
pub const ML_PER_GALLON: f64 = 3785.41;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce (avoirdupois)
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound (avoirdupois)
pub const G_PER_LB: f64 = 453.592;

// ============================================================================
// Tables
// ============================================================================

/// Volume units: canonical name -> milliliters per unit.
pub static VOLUME_UNITS: &[(&str, f64)] = &[
    // Metric
    ("ml", 1.0),
    ("cl", 10.0),
    ("dl", 100.0),
    ("l", ML_PER_LITER),
    // US customary
    ("tsp", ML_PER_TSP),
    ("tbsp", ML_PER_TBSP),
    ("fl oz", ML_PER_FL_OZ),
    ("cup", ML_PER_CUP),
    ("pint", ML_PER_PINT),
    ("quart", ML_PER_QUART),
    ("gallon", ML_PER_GALLON),
    // French kitchen measures
    ("cuillère à café", 5.0),
    ("cuillère à soupe", 15.0),
    ("tasse", 250.0),
    ("verre", 200.0),
    ("bol", 350.0),
    ("louche", 100.0),
    ("pincée", 0.5),
];

/// Weight units: canonical name -> grams per unit.
pub static WEIGHT_UNITS: &[(&str, f64)] = &[
    ("mg", G_PER_MG),
    ("g", 1.0),
    ("kg", G_PER_KG),
    ("oz", G_PER_OZ),
    ("lb", G_PER_LB),
    // The French "livre" is a metric half-kilo, not an avoirdupois pound
    ("livre", 500.0),
];

/// Countable units. They carry no scale factor and never convert.
pub static PIECE_UNITS: &[&str] = &[
    "pièce",
    "unité",
    "tranche",
    "gousse",
    "sachet",
    "boîte",
    "paquet",
    "botte",
    "bouquet",
    "brin",
    "feuille",
    "tête",
    "filet",
    "pot",
    "bouteille",
    "œuf",
];

/// Spelling variants -> canonical unit name.
///
/// Keys are stored already lower-cased, trimmed, whitespace-collapsed and
/// without a trailing period, which is the shape `normalize_unit` looks up.
pub static UNIT_ALIASES: &[(&str, &str)] = &[
    // Metric volume
    ("millilitre", "ml"),
    ("millilitres", "ml"),
    ("milliliter", "ml"),
    ("milliliters", "ml"),
    ("mls", "ml"),
    ("centilitre", "cl"),
    ("centilitres", "cl"),
    ("centiliter", "cl"),
    ("centiliters", "cl"),
    ("décilitre", "dl"),
    ("décilitres", "dl"),
    ("decilitre", "dl"),
    ("decilitres", "dl"),
    ("deciliter", "dl"),
    ("deciliters", "dl"),
    ("litre", "l"),
    ("litres", "l"),
    ("liter", "l"),
    ("liters", "l"),
    ("lt", "l"),
    // US volume
    ("teaspoon", "tsp"),
    ("teaspoons", "tsp"),
    ("tsps", "tsp"),
    ("tablespoon", "tbsp"),
    ("tablespoons", "tbsp"),
    ("tbsps", "tbsp"),
    ("tbs", "tbsp"),
    ("floz", "fl oz"),
    ("fl. oz", "fl oz"),
    ("fluid ounce", "fl oz"),
    ("fluid ounces", "fl oz"),
    ("cups", "cup"),
    ("pints", "pint"),
    ("pt", "pint"),
    ("quarts", "quart"),
    ("qt", "quart"),
    ("gallons", "gallon"),
    ("gal", "gallon"),
    // French volume
    ("cac", "cuillère à café"),
    ("c.à.c", "cuillère à café"),
    ("c. à c", "cuillère à café"),
    ("càc", "cuillère à café"),
    ("cuillère à thé", "cuillère à café"),
    ("cuillères à café", "cuillère à café"),
    ("cuillere a cafe", "cuillère à café"),
    ("cuilleres a cafe", "cuillère à café"),
    ("cas", "cuillère à soupe"),
    ("c.à.s", "cuillère à soupe"),
    ("c. à s", "cuillère à soupe"),
    ("càs", "cuillère à soupe"),
    ("cuillères à soupe", "cuillère à soupe"),
    ("cuillere a soupe", "cuillère à soupe"),
    ("cuilleres a soupe", "cuillère à soupe"),
    ("tasses", "tasse"),
    ("verres", "verre"),
    ("bols", "bol"),
    ("louches", "louche"),
    ("pincées", "pincée"),
    ("pincee", "pincée"),
    ("pincees", "pincée"),
    ("pinch", "pincée"),
    ("pinches", "pincée"),
    // Weight
    ("milligramme", "mg"),
    ("milligrammes", "mg"),
    ("milligram", "mg"),
    ("milligrams", "mg"),
    ("gramme", "g"),
    ("grammes", "g"),
    ("gram", "g"),
    ("grams", "g"),
    ("gr", "g"),
    ("kilogramme", "kg"),
    ("kilogrammes", "kg"),
    ("kilogram", "kg"),
    ("kilograms", "kg"),
    ("kilo", "kg"),
    ("kilos", "kg"),
    ("kgs", "kg"),
    ("ounce", "oz"),
    ("ounces", "oz"),
    ("once", "oz"),
    ("onces", "oz"),
    ("pound", "lb"),
    ("pounds", "lb"),
    ("lbs", "lb"),
    ("livres", "livre"),
    // Pieces
    ("pièces", "pièce"),
    ("piece", "pièce"),
    ("pieces", "pièce"),
    ("pc", "pièce"),
    ("pcs", "pièce"),
    ("unités", "unité"),
    ("unite", "unité"),
    ("unites", "unité"),
    ("u", "unité"),
    ("tranches", "tranche"),
    ("slice", "tranche"),
    ("slices", "tranche"),
    ("gousses", "gousse"),
    ("clove", "gousse"),
    ("cloves", "gousse"),
    ("sachets", "sachet"),
    ("boîtes", "boîte"),
    ("boite", "boîte"),
    ("boites", "boîte"),
    ("paquets", "paquet"),
    ("bottes", "botte"),
    ("bouquets", "bouquet"),
    ("brins", "brin"),
    ("feuilles", "feuille"),
    ("têtes", "tête"),
    ("tete", "tête"),
    ("tetes", "tête"),
    ("filets", "filet"),
    ("pots", "pot"),
    ("bouteilles", "bouteille"),
    ("œufs", "œuf"),
    ("oeuf", "œuf"),
    ("oeufs", "œuf"),
];

/// Ingredient densities in grams per milliliter.
///
/// Declaration order matters: partial-name lookups return the first entry
/// that matches, so "sucre" shadows "sucre roux" for "sucre roux bio".
pub static INGREDIENT_DENSITIES: &[(&str, f64)] = &[
    // Liquids
    ("eau", 1.0),
    ("lait", 1.03),
    ("crème", 1.01),
    ("huile", 0.92),
    ("vinaigre", 1.01),
    ("vin", 0.99),
    ("bouillon", 1.0),
    ("jus", 1.04),
    ("sirop", 1.33),
    ("miel", 1.42),
    // Fats
    ("beurre", 0.91),
    // Flours and starches
    ("farine", 0.55),
    ("fécule", 0.6),
    ("maïzena", 0.6),
    ("semoule", 0.7),
    ("flocons d'avoine", 0.36),
    ("chapelure", 0.45),
    // Sugars
    ("sucre", 0.85),
    ("sucre glace", 0.56),
    ("sucre roux", 0.93),
    ("cassonade", 0.93),
    ("cacao", 0.42),
    // Grains and others
    ("riz", 0.85),
    ("sel", 1.2),
    ("levure", 0.9),
    ("poudre d'amande", 0.4),
    ("yaourt", 1.05),
    ("fromage râpé", 0.45),
    // English names seen in imported recipes
    ("water", 1.0),
    ("milk", 1.03),
    ("flour", 0.55),
    ("sugar", 0.85),
    ("butter", 0.91),
    ("oil", 0.92),
    ("honey", 1.42),
    ("rice", 0.85),
    ("salt", 1.2),
];

// ============================================================================
// Lookups
// ============================================================================

/// Milliliters per unit for a canonical volume unit
pub fn volume_factor(canonical: &str) -> Option<f64> {
    lookup(VOLUME_UNITS, canonical)
}

/// Grams per unit for a canonical weight unit
pub fn weight_factor(canonical: &str) -> Option<f64> {
    lookup(WEIGHT_UNITS, canonical)
}

/// Whether a canonical name is a countable unit
pub fn is_piece_unit(canonical: &str) -> bool {
    PIECE_UNITS.contains(&canonical)
}

/// Alias target for an already-cleaned spelling variant
pub fn alias_target(variant: &str) -> Option<&'static str> {
    UNIT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == variant)
        .map(|(_, canonical)| *canonical)
}

/// Whether a name appears in any of the unit tables
pub fn is_canonical(name: &str) -> bool {
    volume_factor(name).is_some() || weight_factor(name).is_some() || is_piece_unit(name)
}

fn lookup(table: &[(&str, f64)], key: &str) -> Option<f64> {
    table.iter().find(|(name, _)| *name == key).map(|(_, v)| *v)
}

// ============================================================================
// Catalog
// ============================================================================

/// Canonical unit names per category, for populating pickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitCatalog {
    pub volume: Vec<&'static str>,
    pub weight: Vec<&'static str>,
    pub piece: Vec<&'static str>,
}

/// List the available units, sorted and deduplicated per category
pub fn list_available_units() -> UnitCatalog {
    UnitCatalog {
        volume: sorted_names(VOLUME_UNITS.iter().map(|(name, _)| *name)),
        weight: sorted_names(WEIGHT_UNITS.iter().map(|(name, _)| *name)),
        piece: sorted_names(PIECE_UNITS.iter().copied()),
    }
}

fn sorted_names(names: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = names.collect();
    names.sort_unstable();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_are_positive() {
        for (name, factor) in VOLUME_UNITS.iter().chain(WEIGHT_UNITS) {
            assert!(*factor > 0.0, "{} has factor {}", name, factor);
        }
    }

    #[test]
    fn test_densities_are_positive() {
        for (name, density) in INGREDIENT_DENSITIES {
            assert!(*density > 0.0, "{} has density {}", name, density);
            assert_eq!(*name, name.to_lowercase());
        }
    }

    #[test]
    fn test_tables_are_disjoint() {
        for (name, _) in VOLUME_UNITS {
            assert!(weight_factor(name).is_none(), "{} is volume and weight", name);
            assert!(!is_piece_unit(name), "{} is volume and piece", name);
        }
        for (name, _) in WEIGHT_UNITS {
            assert!(!is_piece_unit(name), "{} is weight and piece", name);
        }
    }

    #[test]
    fn test_alias_targets_are_canonical() {
        for (alias, target) in UNIT_ALIASES {
            assert!(is_canonical(target), "{} -> {} is not a known unit", alias, target);
            assert!(!is_canonical(alias), "alias {} shadows a canonical unit", alias);
            assert!(alias_target(target).is_none(), "{} is both target and alias", target);
        }
    }

    #[test]
    fn test_alias_keys_are_clean() {
        for (alias, _) in UNIT_ALIASES {
            assert_eq!(*alias, alias.to_lowercase());
            assert_eq!(*alias, alias.trim());
            assert!(!alias.ends_with('.'), "{} keeps its trailing period", alias);
            assert!(!alias.contains("  "));
        }
    }

    #[test]
    fn test_factor_lookups() {
        assert_eq!(volume_factor("cup"), Some(ML_PER_CUP));
        assert_eq!(volume_factor("cuillère à soupe"), Some(15.0));
        assert_eq!(weight_factor("lb"), Some(G_PER_LB));
        assert_eq!(weight_factor("cup"), None);
        assert_eq!(volume_factor("g"), None);
        assert!(is_piece_unit("gousse"));
        assert!(!is_piece_unit("ml"));
    }

    #[test]
    fn test_list_available_units_sorted() {
        let catalog = list_available_units();
        assert_eq!(catalog.volume.len(), VOLUME_UNITS.len());
        assert_eq!(catalog.weight.len(), WEIGHT_UNITS.len());
        assert_eq!(catalog.piece.len(), PIECE_UNITS.len());
        for list in [&catalog.volume, &catalog.weight, &catalog.piece] {
            assert!(list.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(catalog.weight.contains(&"kg"));
        assert!(catalog.piece.contains(&"pièce"));
    }

    #[test]
    fn test_sorted_names_dedups() {
        let names = sorted_names(["l", "cl", "l", "ml"].into_iter());
        assert_eq!(names, vec!["cl", "l", "ml"]);
    }
}
