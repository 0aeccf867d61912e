//! MCP Server implementation.
//!
//! The handler owns the shared [`GeoNamesService`] and the rmcp tool router
//! built from it. Tools are defined in `domains/tools/definitions/`; adding
//! one does not require touching this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::diagnostics::{DiagnosticSink, TracingSink};
use super::error;
use super::transport::StdioTransport;
use crate::domains::geonames::GeoNamesService;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared GeoNames backend used by every tool.
    service: Arc<GeoNamesService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server that logs diagnostics through `tracing`.
    pub fn new(config: Config) -> error::Result<Self> {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create a new MCP server with a custom diagnostic sink.
    pub fn with_sink(config: Config, sink: Arc<dyn DiagnosticSink>) -> error::Result<Self> {
        let config = Arc::new(config);
        let service = Arc::new(GeoNamesService::new(config.geonames.clone(), sink)?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(service.clone()),
            config,
            service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all available tools as JSON.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Serve MCP over stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> error::Result<()> {
        StdioTransport::run(self).await?;
        Ok(())
    }

    /// Call a tool by name without going through a transport.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        ToolRegistry::new(self.service.clone())
            .call_tool(name, arguments)
            .await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "GeoNames gazetteer lookup. Use search-geonames to find places by name or \
                 free text (up to 10 results), and get-geoname to fetch the full record \
                 for a geoname id."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_lists_both_tools() {
        let server = McpServer::new(Config::default()).unwrap();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 2);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[test]
    fn test_server_info_enables_tools_only() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert_eq!(server.name(), "geonames");
    }
}
