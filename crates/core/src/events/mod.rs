//! Events module - monitor events and the in-process event bus.
//!
//! The bus is an explicitly constructed instance shared by the components
//! that publish or listen; there is no ambient singleton. It is created at
//! startup and closed at shutdown.

mod bus;
mod monitor_event;

pub use bus::*;
pub use monitor_event::*;
