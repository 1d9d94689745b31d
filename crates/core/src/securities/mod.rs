//! Securities module - security definitions and the symbol catalog.

mod securities_model;
mod securities_service;

pub use securities_model::*;
pub use securities_service::*;
