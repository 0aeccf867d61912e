//! GeoNames MCP Server Library
//!
//! Exposes the GeoNames web service to MCP clients as two tools:
//! `search-geonames` and `get-geoname`.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, diagnostics, the server handler
//!   and the stdio transport
//! - **domains**: business logic
//!   - **geonames**: URL building, HTTP fetching and response shaping
//!   - **tools**: MCP tool definitions, router and registry
//!
//! # Example
//!
//! ```rust,no_run
//! use geonames_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     let result = server
//!         .call_tool("search-geonames", serde_json::json!({ "name": "london" }))
//!         .await?;
//!     println!("{:?}", result.content);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
