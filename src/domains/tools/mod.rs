//! Tools domain module.
//!
//! Tools are the functions MCP clients call. This server exposes two of them,
//! both backed by the GeoNames web service.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - rmcp ToolRouter builder used by the stdio transport
//! - `registry.rs` - Tool metadata and programmatic dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/geonames/`
//! 2. Define `NAME`, `execute()`, `to_tool()` and `create_route()`
//! 3. Export it in `definitions/mod.rs`
//! 4. Add the route in `router.rs` and the dispatch arm in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
