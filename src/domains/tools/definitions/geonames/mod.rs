//! GeoNames tools:
//! - `search`: free-text and name-based place search
//! - `get`: lookup of a single place by its geoname id

pub mod common;
pub mod get;
pub mod search;

pub use get::GetGeonameTool;
pub use search::SearchGeonamesTool;
