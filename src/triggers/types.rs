//! Trigger type definitions

use serde::{Deserialize, Serialize};

use crate::core::WorldState;
use crate::world::{TilePos, Vec3, WorldEdit};

use super::Sequence;

/// Stable handle for a registered trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriggerId(pub u64);

impl std::fmt::Display for TriggerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// When a trigger is considered active
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TriggerCondition {
    /// Avatar is strictly closer than `radius` to `anchor`
    Proximity { anchor: Vec3, radius: f64 },

    /// Avatar stands exactly on `tile`
    TileMatch { tile: TilePos },
}

impl TriggerCondition {
    /// Proximity condition around an anchor
    pub fn proximity(anchor: Vec3, radius: f64) -> Self {
        Self::Proximity { anchor, radius }
    }

    /// Tile condition for standing on top of a marker block
    pub fn step_on(marker: TilePos) -> Self {
        Self::TileMatch {
            tile: marker.above(),
        }
    }

    /// Distance from a proximity anchor, `None` for tile conditions
    pub fn distance(&self, state: &WorldState) -> Option<f64> {
        match self {
            TriggerCondition::Proximity { anchor, .. } => Some(anchor.distance_to(&state.pos)),
            TriggerCondition::TileMatch { .. } => None,
        }
    }
}

/// A condition paired with a world-mutation action
///
/// `setup` runs once when the trigger is installed; `action` runs every time
/// the condition holds (once, for one-shot triggers). Actions describe their
/// effect as a [`Sequence`] instead of touching the world directly.
pub trait Trigger: Send {
    /// Human-readable name for logs and events
    fn name(&self) -> &str;

    /// Condition polled every tick
    fn condition(&self) -> &TriggerCondition;

    /// Whether the trigger is removed after its first activation
    fn one_shot(&self) -> bool {
        true
    }

    /// One-time world edits applied at install time
    fn setup(&self) -> Vec<WorldEdit> {
        Vec::new()
    }

    /// Effect to play when the condition holds
    fn action(&mut self, state: &WorldState) -> Sequence;
}
