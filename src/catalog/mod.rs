//! Catalog of trap and message triggers
//!
//! Every entry is a fixed recipe of world edits. Tile traps are built from
//! the coordinate of a *marker* block; the avatar triggers them by standing
//! on top of it.

mod blockers;
mod fall;
mod message;
mod overhead;
mod pit;
mod push_back;

pub use blockers::{FlowHazardBlocker, RisingWall};
pub use fall::{FallTrap, Landing};
pub use message::Message;
pub use overhead::FallingHazard;
pub use pit::TimedPit;
pub use push_back::PushBackTrap;

use serde::{Deserialize, Serialize};

use crate::triggers::TriggerCondition;
use crate::world::{Block, TilePos, WorldEdit};

/// Horizontal axis an effect is laid out along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Z,
}

impl Axis {
    /// Move `n` blocks along this axis
    pub fn step(&self, tile: TilePos, n: i32) -> TilePos {
        match self {
            Axis::X => tile.offset(n, 0, 0),
            Axis::Z => tile.offset(0, 0, n),
        }
    }
}

/// Shared parts of every step-on trap
#[derive(Debug, Clone)]
pub(crate) struct StepOn {
    pub name: String,
    pub marker: TilePos,
    pub marker_block: Block,
    pub condition: TriggerCondition,
    pub one_shot: bool,
}

impl StepOn {
    pub fn new(name: impl Into<String>, marker: TilePos) -> Self {
        Self {
            name: name.into(),
            marker,
            marker_block: Block::STONE,
            condition: TriggerCondition::step_on(marker),
            one_shot: true,
        }
    }

    /// Places the marker block the avatar has to step on
    pub fn marker_edit(&self) -> WorldEdit {
        WorldEdit::set_block(self.marker, self.marker_block)
    }
}
