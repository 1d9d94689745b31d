//! Loader module - validated ingestion of parsed position records.
//!
//! File parsing lives outside the engine; this boundary consumes rows that
//! an external loader has already tokenized and turns them into catalog
//! entries and portfolio positions, rejecting malformed rows.

mod loader_model;
mod loader_service;

pub use loader_model::*;
pub use loader_service::*;
