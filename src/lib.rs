//! Maze Traps
//!
//! A tick-driven trigger engine for a shared block world. Each tick the
//! player's position is read from the world connection, every registered
//! trigger's condition is checked in registration order, and matching
//! triggers play their effect: a chat message, a floor that drops away, a
//! wall that rises around the player.
//!
//! ```no_run
//! use std::sync::atomic::AtomicBool;
//! use maze_traps::{RecordingWorld, TrapLayout, TriggerLoop};
//!
//! let layout = TrapLayout::load("maze.toml")?;
//! let mut trigger_loop = TriggerLoop::from_layout(RecordingWorld::new(), &layout)?;
//! trigger_loop.run(&AtomicBool::new(false))?;
//! # Ok::<(), maze_traps::TriggerError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod core;
mod error;
pub mod triggers;
pub mod world;

// Re-export commonly used types
pub use crate::core::{TickReport, TriggerEvent, TriggerLoop, TriggerRegistry, WorldState};
pub use config::{LoopConfig, TrapLayout, TrapSpec};
pub use error::{Result, TriggerError};
pub use triggers::{Sequence, Trigger, TriggerCondition, TriggerId};
pub use world::{Block, RecordingWorld, TilePos, Vec3, WorldConnection, WorldEdit};
