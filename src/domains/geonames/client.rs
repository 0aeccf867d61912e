//! HTTP client for the GeoNames web service.
//!
//! Every failure (bad status, network error, undecodable body) is recorded on
//! the diagnostic sink and surfaces to callers only as [`Fetched::Absent`].
//! Callers therefore cannot tell "no matches" from "upstream unreachable"
//! without looking at the diagnostics.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::config::GeoNamesConfig;
use crate::core::diagnostics::{DiagnosticEvent, DiagnosticSink};
use crate::core::error::Result;

/// Client identifier sent with every request.
pub const USER_AGENT: &str = concat!("geonames-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Outcome of an upstream fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    Present(T),
    Absent,
}

impl<T> Fetched<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

/// Why a fetch came back absent.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service answered with a non-success status.
    #[error("upstream returned HTTP {0}")]
    Status(u16),

    /// The request could not be sent or the body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not the expected JSON.
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin wrapper around a shared `reqwest::Client`.
#[derive(Clone)]
pub struct GeoNamesClient {
    http: reqwest::Client,
    sink: Arc<dyn DiagnosticSink>,
}

impl GeoNamesClient {
    /// Build a client using the timeout from `config`, if any.
    pub fn new(config: &GeoNamesConfig, sink: Arc<dyn DiagnosticSink>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            sink,
        })
    }

    /// GET `url` and decode the body as `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Fetched<T> {
        match self.try_fetch(url).await {
            Ok(value) => Fetched::Present(value),
            Err(error) => {
                self.sink
                    .record(DiagnosticEvent::FetchFailed { url, error: &error });
                Fetched::Absent
            }
        }
    }

    async fn try_fetch<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, FetchError> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        self.sink.record(DiagnosticEvent::ReceivedData {
            url,
            status: status.as_u16(),
            body: &body,
        });

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
