//! Monitor module - the serialized detect/recalculate/publish update cycle.

mod monitor_service;

pub use monitor_service::*;
