//! Market data module - price ticks, snapshots, and change detection.

mod detector_service;
mod market_data_model;

pub use detector_service::*;
pub use market_data_model::*;
