//! GeoNames place search tool.
//!
//! Calls `searchJSON` with the caller's filters, a fixed row cap and the
//! account name, then reshapes each hit into a compact place record.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use crate::domains::geonames::{GeoNamesService, SearchQuery};
use crate::domains::tools::ToolError;

use super::common::{json_result, parse_params};

/// GeoNames Search Tool implementation.
#[derive(Debug, Clone)]
pub struct SearchGeonamesTool;

impl SearchGeonamesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search-geonames";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for geographic places by query term";

    /// Execute the search and wrap the envelope for the host.
    pub async fn execute(
        params: SearchQuery,
        service: &GeoNamesService,
    ) -> Result<CallToolResult, ToolError> {
        let envelope = service.search(Self::NAME, params).await;
        info!(
            "Search returned {} of {} result(s)",
            envelope.results.len(),
            envelope.total_results
        );
        json_result(&envelope)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SearchQuery>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(service: Arc<GeoNamesService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let service = service.clone();
            async move {
                let params: SearchQuery = parse_params(args)?;
                Self::execute(params, &service).await.map_err(McpError::from)
            }
            .boxed()
        })
    }
}
