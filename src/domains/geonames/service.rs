//! Per-invocation composition: build URL, fetch, shape the envelope.

use std::sync::Arc;

use crate::core::config::GeoNamesConfig;
use crate::core::diagnostics::{DiagnosticEvent, DiagnosticSink};
use crate::core::error::Result;

use super::client::GeoNamesClient;
use super::model::{GetQuery, GetResult, GetResultQuery, SearchQuery, SearchResponse, SearchResult};
use super::normalize::normalize_search;
use super::request::{Endpoint, MAX_ROWS, build_url};

/// Entry point for both GeoNames tools.
///
/// Holds no per-request state, so one instance is shared by every
/// concurrent invocation.
pub struct GeoNamesService {
    config: GeoNamesConfig,
    client: GeoNamesClient,
    sink: Arc<dyn DiagnosticSink>,
}

impl GeoNamesService {
    /// Create a service with its own HTTP client.
    pub fn new(config: GeoNamesConfig, sink: Arc<dyn DiagnosticSink>) -> Result<Self> {
        let client = GeoNamesClient::new(&config, sink.clone())?;
        Ok(Self {
            config,
            client,
            sink,
        })
    }

    /// URL for a `searchJSON` call.
    pub fn search_url(&self, query: &SearchQuery) -> String {
        let max_rows = MAX_ROWS.to_string();
        build_url(
            &self.config.api_base,
            Endpoint::Search,
            &[
                ("maxRows", max_rows.as_str()),
                ("username", self.config.username.as_str()),
            ],
            &query.optional_params(),
        )
    }

    /// URL for a `get` call.
    pub fn get_url(&self, query: &GetQuery) -> String {
        let id = query.geoname_id.to_string();
        build_url(
            &self.config.api_base,
            Endpoint::Get,
            &[
                ("geonameId", id.as_str()),
                ("username", self.config.username.as_str()),
            ],
            &[],
        )
    }

    /// Search places. Upstream failures yield an empty result.
    pub async fn search(&self, tool: &str, query: SearchQuery) -> SearchResult {
        self.record_query(tool, &query);

        let url = self.search_url(&query);
        self.sink.record(DiagnosticEvent::CallingApi { url: &url });
        let response = self.client.fetch::<SearchResponse>(&url).await;

        normalize_search(query, response)
    }

    /// Fetch one place by id, passing the upstream record through unchanged.
    pub async fn get(&self, tool: &str, query: GetQuery) -> GetResult {
        self.record_query(tool, &query);

        let url = self.get_url(&query);
        self.sink.record(DiagnosticEvent::CallingApi { url: &url });
        let response = self.client.fetch::<serde_json::Value>(&url).await;

        GetResult {
            query: GetResultQuery {
                geoname_id: query.geoname_id,
            },
            result: response.into_option(),
        }
    }

    fn record_query<Q: serde::Serialize>(&self, tool: &str, query: &Q) {
        let rendered = serde_json::to_string(query).unwrap_or_default();
        self.sink.record(DiagnosticEvent::ReceivedQuery {
            tool,
            query: &rendered,
        });
    }
}
