//! GeoNames domain module.
//!
//! Everything between a validated tool invocation and the envelope handed
//! back to the host lives here:
//!
//! - `model.rs` - query parameters, upstream records and result envelopes
//! - `request.rs` - upstream URL construction
//! - `client.rs` - HTTP fetch that degrades failures to [`Fetched::Absent`]
//! - `normalize.rs` - reshaping of upstream search results
//! - `service.rs` - per-invocation composition of the above
//!
//! Search results are reshaped field by field while `get` results are passed
//! through verbatim. The asymmetry is observable behaviour that clients rely
//! on and is kept deliberately.

mod client;
mod model;
mod normalize;
mod request;
mod service;

pub use client::{FetchError, Fetched, GeoNamesClient, USER_AGENT};
pub use model::{
    Admin1, Coordinates, CountryInfo, FeatureInfo, GetQuery, GetResult, GetResultQuery,
    NormalizedPlace, SearchQuery, SearchResponse, SearchResult, UpstreamPlace,
};
pub use normalize::normalize_search;
pub use request::{Endpoint, MAX_ROWS, build_url, redact_credential};
pub use service::GeoNamesService;
