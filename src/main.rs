//! Household Unit Converter (HUC)
//!
//! An MCP server for recipe, inventory and shopping-list unit conversion.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use huc::build_info;
use huc::config::Config;
use huc::mcp::HucService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // Log to stderr so stdout stays reserved for the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config.log_directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    tracing::info!(server_name = %config.server_name, "Starting MCP server on stdio");

    let service = HucService::new(config);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    tracing::info!("MCP server stopped");
    Ok(())
}
