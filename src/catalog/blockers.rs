//! Traps that seal the corridor on both sides of the player

use std::time::Duration;

use super::{Axis, StepOn};
use crate::core::WorldState;
use crate::triggers::{Sequence, Trigger, TriggerCondition};
use crate::world::{Block, TilePos, WorldEdit};

/// Pours lava across the corridor five blocks either side of the player,
/// backed by stone so it cannot spread outward
#[derive(Debug, Clone)]
pub struct FlowHazardBlocker {
    base: StepOn,
    axis: Axis,
}

impl FlowHazardBlocker {
    const HAZARD_OFFSET: i32 = 5;

    pub fn new(marker: TilePos, axis: Axis) -> Self {
        Self {
            base: StepOn::new("flow_hazard", marker),
            axis,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.base.name = name.into();
        self
    }
}

impl Trigger for FlowHazardBlocker {
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
        let origin = state.tile;
        let mut sequence = Sequence::new();
        for side in [1, -1] {
            sequence = sequence
                .then(WorldEdit::set_block(
                    self.axis.step(origin, side * Self::HAZARD_OFFSET),
                    Block::LAVA,
                ))
                .then(WorldEdit::set_block(
                    self.axis.step(origin, side * (Self::HAZARD_OFFSET + 1)),
                    Block::STONE,
                ));
        }
        sequence
    }
}

/// Raises a brick wall on both sides of the player, one layer at a time
#[derive(Debug, Clone)]
pub struct RisingWall {
    base: StepOn,
    axis: Axis,
    offset: i32,
    layers: i32,
    interval: Duration,
}

impl RisingWall {
    pub const LAYERS: i32 = 4;

    pub fn new(marker: TilePos, axis: Axis) -> Self {
        let (offset, interval) = match axis {
            Axis::X => (5, Duration::from_secs(2)),
            Axis::Z => (3, Duration::from_secs(3)),
        };
        Self {
            base: StepOn::new("rising_wall", marker),
            axis,
            offset,
            layers: Self::LAYERS,
            interval,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.base.name = name.into();
        self
    }

    /// Distance of each wall from the player
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Pause between layers
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Trigger for RisingWall {
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
        let mut sequence = Sequence::new();
        for layer in 0..self.layers {
            let level = state.tile.offset(0, layer, 0);
            let delay = if layer == 0 { Duration::ZERO } else { self.interval };
            sequence = sequence
                .after(
                    delay,
                    WorldEdit::set_block(self.axis.step(level, self.offset), Block::STONE_BRICK),
                )
                .then(WorldEdit::set_block(
                    self.axis.step(level, -self.offset),
                    Block::STONE_BRICK,
                ));
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Vec3;

    #[test]
    fn test_flow_hazard_along_x() {
        let mut blocker = FlowHazardBlocker::new(TilePos::new(20, 63, -4), Axis::X);
        let sequence = blocker.action(&WorldState::at(Vec3::new(20.5, 64.0, -3.5)));
        let edits: Vec<_> = sequence.steps().map(|s| s.edit.clone()).collect();
        assert_eq!(
            edits,
            vec![
                WorldEdit::set_block(TilePos::new(25, 64, -4), Block::LAVA),
                WorldEdit::set_block(TilePos::new(26, 64, -4), Block::STONE),
                WorldEdit::set_block(TilePos::new(15, 64, -4), Block::LAVA),
                WorldEdit::set_block(TilePos::new(14, 64, -4), Block::STONE),
            ]
        );
    }

    #[test]
    fn test_flow_hazard_along_z() {
        let mut blocker = FlowHazardBlocker::new(TilePos::new(0, 63, 0), Axis::Z);
        assert_eq!(blocker.setup(), vec![WorldEdit::set_block(TilePos::new(0, 63, 0), Block::STONE)]);

        let sequence = blocker.action(&WorldState::at(Vec3::new(0.5, 64.0, 0.5)));
        let edits: Vec<_> = sequence.steps().map(|s| s.edit.clone()).collect();
        assert_eq!(
            edits,
            vec![
                WorldEdit::set_block(TilePos::new(0, 64, 5), Block::LAVA),
                WorldEdit::set_block(TilePos::new(0, 64, 6), Block::STONE),
                WorldEdit::set_block(TilePos::new(0, 64, -5), Block::LAVA),
                WorldEdit::set_block(TilePos::new(0, 64, -6), Block::STONE),
            ]
        );
        assert_eq!(sequence.total_delay(), Duration::ZERO);
    }

    #[test]
    fn test_rising_wall_layers_along_x() {
        let mut wall = RisingWall::new(TilePos::new(0, 63, 0), Axis::X);
        let sequence = wall.action(&WorldState::at(Vec3::new(0.5, 64.0, 0.5)));

        assert_eq!(sequence.len(), 8);
        assert_eq!(sequence.total_delay(), Duration::from_secs(6));

        let steps: Vec<_> = sequence.steps().collect();
        for layer in 0..4 {
            let y = 64 + layer as i32;
            assert_eq!(
                steps[layer * 2].edit,
                WorldEdit::set_block(TilePos::new(5, y, 0), Block::STONE_BRICK)
            );
            assert_eq!(
                steps[layer * 2 + 1].edit,
                WorldEdit::set_block(TilePos::new(-5, y, 0), Block::STONE_BRICK)
            );
            assert_eq!(steps[layer * 2 + 1].delay, Duration::ZERO);
        }
    }

    #[test]
    fn test_rising_wall_z_is_narrower_and_slower() {
        let wall = RisingWall::new(TilePos::new(0, 63, 0), Axis::Z);
        assert_eq!(wall.offset(), 3);
        assert_eq!(wall.interval(), Duration::from_secs(3));
    }
}
