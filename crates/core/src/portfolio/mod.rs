//! Portfolio module - positions and NAV recalculation.

mod portfolio_model;
mod portfolio_service;

pub use portfolio_model::*;
pub use portfolio_service::*;

#[cfg(test)]
mod portfolio_service_tests;
