//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool knows how to create its own route; this module only collects them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::geonames::GeoNamesService;

use super::definitions::{GetGeonameTool, SearchGeonamesTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(service: Arc<GeoNamesService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchGeonamesTool::create_route(service.clone()))
        .with_route(GetGeonameTool::create_route(service))
}
