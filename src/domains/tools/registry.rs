//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Programmatic dispatch of tool calls outside the rmcp router
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use crate::domains::geonames::GeoNamesService;

use super::ToolError;
use super::definitions::geonames::common::parse_params;
use super::definitions::{GetGeonameTool, SearchGeonamesTool};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    service: Arc<GeoNamesService>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(service: Arc<GeoNamesService>) -> Self {
        Self { service }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![SearchGeonamesTool::NAME, GetGeonameTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![SearchGeonamesTool::to_tool(), GetGeonameTool::to_tool()]
    }

    /// Dispatch a tool call by name.
    ///
    /// `arguments` must be a JSON object, or `null` for no arguments.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let args = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "Expected an object of arguments, got {other}"
                )));
            }
        };

        match name {
            SearchGeonamesTool::NAME => {
                SearchGeonamesTool::execute(parse_params(args)?, &self.service).await
            }
            GetGeonameTool::NAME => {
                GetGeonameTool::execute(parse_params(args)?, &self.service).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
