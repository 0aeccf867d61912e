//! Diagnostic event channel.
//!
//! Tools and the API client report what they received, what they called and
//! what came back through a [`DiagnosticSink`]. The server wires in
//! [`TracingSink`], which writes to stderr via `tracing`; tests can inject
//! their own sink and assert on the recorded events.

use tracing::{info, trace, warn};

use crate::domains::geonames::{FetchError, redact_credential};

/// A single diagnostic event.
#[derive(Debug, Clone, Copy)]
pub enum DiagnosticEvent<'a> {
    /// A tool was invoked with the given (JSON-rendered) query.
    ReceivedQuery { tool: &'a str, query: &'a str },

    /// An upstream request is about to be issued.
    CallingApi { url: &'a str },

    /// An upstream response body arrived.
    ReceivedData {
        url: &'a str,
        status: u16,
        body: &'a str,
    },

    /// An upstream request failed and will be reported as absent.
    FetchFailed { url: &'a str, error: &'a FetchError },
}

/// Receiver for diagnostic events.
pub trait DiagnosticSink: Send + Sync {
    /// Record one event.
    fn record(&self, event: DiagnosticEvent<'_>);
}

/// Sink that forwards events to `tracing`, redacting the account name in URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: DiagnosticEvent<'_>) {
        match event {
            DiagnosticEvent::ReceivedQuery { tool, query } => {
                info!(tool, "Received query: {}", query);
            }
            DiagnosticEvent::CallingApi { url } => {
                info!("Calling API: {}", redact_credential(url));
            }
            DiagnosticEvent::ReceivedData { url, status, body } => {
                info!(
                    status,
                    bytes = body.len(),
                    "Received data from {}",
                    redact_credential(url)
                );
                trace!("Response body: {}", body);
            }
            DiagnosticEvent::FetchFailed { url, error } => {
                warn!("Request to {} failed: {}", redact_credential(url), error);
            }
        }
    }
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _event: DiagnosticEvent<'_>) {}
}
