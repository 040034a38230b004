//! Household Unit Converter (HUC) Library
//!
//! Quantity normalization and unit conversion for recipes, inventory and
//! shopping lists.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod tools;
pub mod units;
