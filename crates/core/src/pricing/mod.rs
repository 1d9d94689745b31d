//! Pricing module - position valuation against a market price.

mod pricing_errors;
mod pricing_service;

pub use pricing_errors::*;
pub use pricing_service::*;
