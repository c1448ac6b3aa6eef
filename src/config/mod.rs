//! Configuration module for png2src
//!
//! Provides types and parsing for the optional `png2src.toml` file.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
