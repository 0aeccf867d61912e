//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the diagnostic channel, the MCP server
//! handler and the stdio transport.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use diagnostics::{DiagnosticEvent, DiagnosticSink, TracingSink};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{StdioTransport, TransportError};
