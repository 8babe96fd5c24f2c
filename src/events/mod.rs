//! Match event logging
//!
//! The EventBus enables decoupled cross-module communication: gameplay
//! systems emit events, and the bus drains them into the structured log
//! each frame.

mod bus;
mod types;

pub use bus::{BusEvent, EventBus, log_events, update_event_bus_time};
pub use types::GameEvent;
