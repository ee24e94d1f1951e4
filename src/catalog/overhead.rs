//! Sand dropped on the player's head

use super::StepOn;
use crate::core::WorldState;
use crate::triggers::{Sequence, Trigger, TriggerCondition};
use crate::world::{Block, TilePos, WorldEdit};

#[derive(Debug, Clone)]
pub struct FallingHazard {
    base: StepOn,
}

impl FallingHazard {
    const DROP_HEIGHT: i32 = 3;

    pub fn new(marker: TilePos) -> Self {
        Self {
            base: StepOn::new("falling_hazard", marker),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.base.name = name.into();
        self
    }
}

impl Trigger for FallingHazard {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn condition(&self) -> &TriggerCondition {
        &self.base.condition
    }

    fn one_shot(&self) -> bool {
        self.base.one_shot
    }

    fn setup(&self) -> Vec<WorldEdit> {
        vec![self.base.marker_edit()]
    }

    fn action(&mut self, state: &WorldState) -> Sequence {
        Sequence::new().then(WorldEdit::set_block(
            state.tile.offset(0, Self::DROP_HEIGHT, 0),
            Block::SAND,
        ))
    }
}
