//! Runtime configuration
//!
//! Read from the environment once at start-up.

/// Default tracing directive when `HUC_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "huc=info";

/// Default server name advertised to MCP clients
pub const DEFAULT_SERVER_NAME: &str = "huc";

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive added on top of `RUST_LOG`
    pub log_directive: String,
    /// Name reported in the MCP server info
    pub server_name: String,
}

impl Config {
    /// Build the configuration from `HUC_LOG` and `HUC_SERVER_NAME`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            log_directive: non_empty("HUC_LOG").unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string()),
            server_name: non_empty("HUC_SERVER_NAME").unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}
