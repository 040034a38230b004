//! HUC Tools module
//!
//! MCP tool implementations for the Household Unit Converter.

pub mod conversion;
pub mod status;
