//! Tool definitions module.
//!
//! Each tool is defined in its own file.

pub mod geonames;

pub use geonames::{GetGeonameTool, SearchGeonamesTool};
