//! GeoNames lookup-by-id tool.
//!
//! Unlike search, the upstream record is returned exactly as received,
//! including bounding box, alternate names, timezone and Wikipedia links.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use crate::domains::geonames::{GeoNamesService, GetQuery};
use crate::domains::tools::ToolError;

use super::common::{json_result, parse_params};

/// GeoNames Get Tool implementation.
#[derive(Debug, Clone)]
pub struct GetGeonameTool;

impl GetGeonameTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-geoname";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Find a geoname entry by its geoname ID.\n\
         \n\
         The result will contain information such as bounding box, \n\
         alternate names, administrative subdivision hierarchy, \n\
         timezone, as well as crosslinks to sites such as Wikipedia.\n";

    /// Execute the lookup and wrap the envelope for the host.
    pub async fn execute(
        params: GetQuery,
        service: &GeoNamesService,
    ) -> Result<CallToolResult, ToolError> {
        let envelope = service.get(Self::NAME, params).await;
        info!(
            "Lookup of geoname {} {}",
            params.geoname_id,
            if envelope.result.is_some() { "succeeded" } else { "returned nothing" }
        );
        json_result(&envelope)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<GetQuery>().into(),
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
                let params: GetQuery = parse_params(args)?;
                Self::execute(params, &service).await.map_err(McpError::from)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_schema_requires_geoname_id() {
        let tool = GetGeonameTool::to_tool();
        assert_eq!(tool.name, "get-geoname");

        let required = tool
            .input_schema
            .get("required")
            .and_then(|r| r.as_array())
            .expect("schema lists required fields");
        assert!(required.iter().any(|r| r == "geonameId"));
    }
}
