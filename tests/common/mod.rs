//! Shared helpers for integration tests: a mock GeoNames upstream and a
//! diagnostic sink that keeps every event.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use geonames_mcp_server::core::config::GeoNamesConfig;
use geonames_mcp_server::core::{Config, DiagnosticEvent, DiagnosticSink, McpServer};
use rmcp::model::{CallToolResult, RawContent};
use tokio::net::TcpListener;

pub const USERNAME: &str = "test_user";

/// A request seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub uri: String,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
}

/// Mock upstream answering every path with a fixed status and body.
pub struct MockUpstream {
    pub base: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl MockUpstream {
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();

        let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap| {
            let captured = captured.clone();
            async move {
                let header_value = |name: header::HeaderName| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };
                captured.lock().unwrap().push(SeenRequest {
                    uri: uri.to_string(),
                    accept: header_value(header::ACCEPT),
                    user_agent: header_value(header::USER_AGENT),
                });
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{addr}"),
            seen,
            handle,
        }
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// An address nothing is listening on.
pub async fn closed_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Owned copy of a [`DiagnosticEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    ReceivedQuery { tool: String, query: String },
    CallingApi(String),
    ReceivedData { status: u16, body: String },
    FetchFailed(String),
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Recorded>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, event: DiagnosticEvent<'_>) {
        let recorded = match event {
            DiagnosticEvent::ReceivedQuery { tool, query } => Recorded::ReceivedQuery {
                tool: tool.to_string(),
                query: query.to_string(),
            },
            DiagnosticEvent::CallingApi { url } => Recorded::CallingApi(url.to_string()),
            DiagnosticEvent::ReceivedData { status, body, .. } => Recorded::ReceivedData {
                status,
                body: body.to_string(),
            },
            DiagnosticEvent::FetchFailed { error, .. } => Recorded::FetchFailed(error.to_string()),
        };
        self.events.lock().unwrap().push(recorded);
    }
}

/// Server pointed at `base`, recording diagnostics into the returned sink.
pub fn server_for(base: &str) -> (McpServer, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let config = Config::with_geonames(GeoNamesConfig::new(USERNAME, base));
    let server = McpServer::with_sink(config, sink.clone()).unwrap();
    (server, sink)
}

/// Parse the single text item of a tool result as JSON.
pub fn result_json(result: &CallToolResult) -> serde_json::Value {
    assert_eq!(result.content.len(), 1);
    assert!(!result.is_error.unwrap_or(false));
    match &result.content[0].raw {
        RawContent::Text(text) => serde_json::from_str(&text.text).unwrap(),
        _ => panic!("Expected text content"),
    }
}
