//! HUC MCP Server Implementation
//!
//! Exposes the conversion engine as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::tools::conversion;
use crate::tools::status::StatusTracker;

/// HUC MCP Service
#[derive(Clone)]
pub struct HucService {
    config: Config,
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<HucService>,
}

impl HucService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertQuantityParams {
    /// Amount expressed in unit_source
    pub value: f64,
    /// Unit of the amount (e.g. "cup", "c.à.s", "grammes")
    pub unit_source: String,
    /// Unit to convert to (e.g. "ml", "g")
    pub unit_target: String,
    /// Ingredient name, required to convert between volume and weight
    pub ingredient: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertTextParams {
    /// Quantity text such as "2.5 cups" or "1,5 kg"
    pub quantity_text: String,
    /// Unit to convert to
    pub unit_target: String,
    /// Ingredient name, required to convert between volume and weight
    pub ingredient: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UnitParams {
    /// Unit name in any supported spelling
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ResolveDensityParams {
    /// Ingredient name (French or English)
    pub ingredient: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl HucService {
    // --- Status ---

    #[tool(description = "Get the current status of the HUC service including build info, registry sizes, conversion counters, and process information")]
    async fn huc_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for converting recipe, inventory and shopping quantities. Call this when unsure which units are supported or how approximations work.")]
    fn unit_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::UNIT_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(UNIT_INSTRUCTIONS)]))
    }

    // --- Conversion ---

    #[tool(description = "Convert a numeric quantity between units. Volume<->weight needs an ingredient and is flagged as an approximation. Refused conversions return converted=false with a reason.")]
    async fn convert_quantity(&self, Parameters(p): Parameters<ConvertQuantityParams>) -> Result<CallToolResult, McpError> {
        let result = conversion::convert_quantity(p.value, &p.unit_source, &p.unit_target, p.ingredient.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        self.status_tracker.lock().await.record_conversion(result.converted);
        to_json(&result)
    }

    #[tool(description = "Convert a quantity string like '2.5 cups' or '1,5 kg' to another unit. Returns the original text unchanged when it cannot be converted.")]
    async fn convert_text(&self, Parameters(p): Parameters<ConvertTextParams>) -> Result<CallToolResult, McpError> {
        let result = conversion::convert_quantity_text(&p.quantity_text, &p.unit_target, p.ingredient.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        self.status_tracker.lock().await.record_conversion(result.converted);
        to_json(&result)
    }

    // --- Registry ---

    #[tool(description = "Show the canonical name of a unit (resolves plurals, abbreviations and accent-less spellings)")]
    fn normalize_unit(&self, Parameters(p): Parameters<UnitParams>) -> Result<CallToolResult, McpError> {
        to_json(&conversion::normalize(&p.unit))
    }

    #[tool(description = "Classify a unit as volume, weight, piece or unknown")]
    fn classify_unit(&self, Parameters(p): Parameters<UnitParams>) -> Result<CallToolResult, McpError> {
        to_json(&conversion::classify(&p.unit))
    }

    #[tool(description = "Look up the density (g/ml) used to convert an ingredient between volume and weight")]
    fn resolve_density(&self, Parameters(p): Parameters<ResolveDensityParams>) -> Result<CallToolResult, McpError> {
        let result = conversion::density(&p.ingredient).map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "List the supported canonical units grouped by category (volume, weight, piece)")]
    fn list_available_units(&self) -> Result<CallToolResult, McpError> {
        to_json(&conversion::catalog())
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for HucService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server_name.clone(),
                version: crate::build_info::VERSION.into(),
                title: Some("Household Unit Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Household Unit Converter (HUC) - quantity normalization for recipes, inventory and shopping lists. \
                 Call unit_instructions first if unsure. \
                 Conversion: convert_quantity (numbers), convert_text (strings like '2.5 cups'). \
                 Registry: normalize_unit, classify_unit, resolve_density, list_available_units. \
                 Status: huc_status. \
                 Volume<->weight conversions need an ingredient and are approximate; pieces never convert."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_uses_config_name() {
        let config = Config {
            server_name: "kitchen".to_string(),
            ..Config::default()
        };
        let info = HucService::new(config).get_info();
        assert_eq!(info.server_info.name, "kitchen");
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn test_conversions_are_counted() {
        let service = HucService::new(Config::default());
        let params = ConvertQuantityParams {
            value: 2.0,
            unit_source: "cup".to_string(),
            unit_target: "ml".to_string(),
            ingredient: None,
        };
        service.convert_quantity(Parameters(params)).await.unwrap();

        let params = ConvertTextParams {
            quantity_text: "2 gousses".to_string(),
            unit_target: "g".to_string(),
            ingredient: None,
        };
        service.convert_text(Parameters(params)).await.unwrap();

        let status = service.status_tracker.lock().await.get_status();
        assert_eq!(status.conversions_succeeded, 1);
        assert_eq!(status.conversions_failed, 1);
    }
}
