//! Core trigger loop abstractions
//!
//! - `WorldState` - avatar snapshot shared by every trigger
//! - `TriggerRegistry` - ordered collection of live triggers
//! - `TriggerLoop` - polls the world and dispatches triggers each tick
//! - `TriggerEvent` - emitted whenever a trigger fires

mod events;
mod registry;
mod runner;
mod state;

pub use events::{EventHandler, TriggerCallback, TriggerEvent};
pub use registry::{Fired, TriggerRegistry};
pub use runner::{TickReport, TriggerLoop};
pub use state::WorldState;
