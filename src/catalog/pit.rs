//! Pit that opens under the player and is then sealed by a sliding lid

use std::time::Duration;

use super::{Axis, StepOn};
use crate::core::WorldState;
use crate::triggers::{Sequence, Trigger, TriggerCondition};
use crate::world::{Block, TilePos, WorldEdit};

/// Clears a trench under the player, waits, then slides a glowstone lid over
/// it one block per second
#[derive(Debug, Clone)]
pub struct TimedPit {
    base: StepOn,
    axis: Axis,
}

impl TimedPit {
    const LENGTH: i32 = 5;
    const DEPTH: i32 = 3;
    const DOOR_STEPS: i32 = 6;
    const CLOSE_AFTER: Duration = Duration::from_secs(3);
    const DOOR_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(marker: TilePos, axis: Axis) -> Self {
        Self {
            base: StepOn::new("timed_pit", marker),
            axis,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.base.name = name.into();
        self
    }
}

impl Trigger for TimedPit {
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
        let floor = state.tile.below();
        let far_corner = self.axis.step(state.tile, Self::LENGTH).offset(0, -Self::DEPTH, 0);

        let mut sequence = Sequence::new().then(WorldEdit::set_blocks(floor, far_corner, Block::AIR));
        for i in 0..Self::DOOR_STEPS {
            let delay = if i == 0 {
                Self::CLOSE_AFTER
            } else {
                Self::DOOR_INTERVAL
            };
            sequence = sequence.after(
                delay,
                WorldEdit::set_block(self.axis.step(floor, i), Block::GLOWSTONE_BLOCK),
            );
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Vec3;

    #[test]
    fn test_pit_then_lid_along_x() {
        let mut pit = TimedPit::new(TilePos::new(10, 63, 10), Axis::X);
        let sequence = pit.action(&WorldState::at(Vec3::new(10.5, 64.0, 10.5)));
        let steps: Vec<_> = sequence.steps().collect();

        assert_eq!(steps.len(), 7);
        assert_eq!(
            steps[0].edit,
            WorldEdit::set_blocks(TilePos::new(10, 63, 10), TilePos::new(15, 61, 10), Block::AIR)
        );
        assert_eq!(steps[0].delay, Duration::ZERO);
        assert_eq!(steps[1].delay, Duration::from_secs(3));
        assert_eq!(
            steps[1].edit,
            WorldEdit::set_block(TilePos::new(10, 63, 10), Block::GLOWSTONE_BLOCK)
        );
        assert_eq!(
            steps[6].edit,
            WorldEdit::set_block(TilePos::new(15, 63, 10), Block::GLOWSTONE_BLOCK)
        );
        assert_eq!(sequence.total_delay(), Duration::from_secs(8));
    }

    #[test]
    fn test_pit_along_z() {
        let mut pit = TimedPit::new(TilePos::new(0, 63, 0), Axis::Z);
        let sequence = pit.action(&WorldState::at(Vec3::new(0.5, 64.0, 0.5)));
        let edits: Vec<_> = sequence.steps().map(|s| s.edit.clone()).collect();
        assert_eq!(
            edits[0],
            WorldEdit::set_blocks(TilePos::new(0, 63, 0), TilePos::new(0, 61, 5), Block::AIR)
        );

        let lid: Vec<_> = (0..6)
            .map(|z| WorldEdit::set_block(TilePos::new(0, 63, z), Block::GLOWSTONE_BLOCK))
            .collect();
        assert_eq!(&edits[1..], lid.as_slice());
    }
}
