//! Domains module containing business logic organized by bounded contexts.
//!
//! - **geonames**: upstream GeoNames access and result shaping
//! - **tools**: the MCP tools built on top of it

pub mod geonames;
pub mod tools;
