//! Tickfolio Core - real-time portfolio valuation and change detection.
//!
//! This crate contains the in-process monitoring engine: a security catalog,
//! a pricing engine, a portfolio with NAV recalculation, a price-change
//! detector, and a synchronous event bus. I/O adapters (market data feeds,
//! presenters, position file loaders) live outside this crate and talk to it
//! through parsed records, price ticks, and published events.

pub mod constants;
pub mod errors;
pub mod events;
pub mod loader;
pub mod market_data;
pub mod monitor;
pub mod portfolio;
pub mod pricing;
pub mod securities;

// Re-export common types from the domain modules
pub use market_data::*;
pub use monitor::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
