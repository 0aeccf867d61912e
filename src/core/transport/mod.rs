//! Transport layer for the MCP server.
//!
//! MCP clients launch this server as a subprocess and talk JSON-RPC over
//! stdin/stdout, so stdio is the only transport. Logs go to stderr.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
