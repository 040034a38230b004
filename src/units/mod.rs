//! Unit conversion engine
//!
//! Recognizes metric, US customary and French kitchen units, converts
//! within a category, and bridges volume and weight through ingredient
//! densities.

pub mod converter;
pub mod density;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod text;

pub use converter::{
    convert, factor_for, is_convertible, round2, to_base, try_convert, ConversionResult,
};
pub use density::resolve_density;
pub use error::{ConversionError, ConversionOutcome};
pub use normalize::{classify_unit, normalize_unit, UnitCategory};
pub use registry::{list_available_units, UnitCatalog};
pub use text::{convert_text, parse_quantity, try_convert_text, ParsedQuantity};
