//! Floors that drop away under the player

use serde::{Deserialize, Serialize};

use super::StepOn;
use crate::core::WorldState;
use crate::triggers::{Sequence, Trigger, TriggerCondition};
use crate::world::{Block, TilePos, WorldEdit};
use crate::{Result, TriggerError};

/// What waits at the bottom of the shaft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landing {
    /// Bare shaft
    #[default]
    Shaft,
    /// Air chamber over a water pool
    Pool,
    /// Damaging liquid at the bottom
    Hazard,
}

/// Removes the marker block once stepped on, dropping the player down a
/// shaft carved at install time
#[derive(Debug, Clone)]
pub struct FallTrap {
    base: StepOn,
    depth: i32,
    landing: Landing,
}

impl FallTrap {
    /// Blocks per maze floor
    pub const FLOOR_HEIGHT: i32 = 10;
    pub const HAZARD_DEPTH: i32 = 3;
    /// Half-width of the pool chamber
    const CHAMBER_REACH: i32 = 5;
    /// Air gap plus water below the shaft of a pool trap
    const POOL_DEPTH: i32 = 10;

    pub fn new(marker: TilePos, depth: i32) -> Self {
        Self {
            base: StepOn::new("fall_trap", marker),
            depth,
            landing: Landing::Shaft,
        }
    }

    /// Shaft through `floors` maze levels ending in a water pool
    pub fn into_pool(marker: TilePos, floors: u32) -> Result<Self> {
        let depth = Self::pool_depth(floors).ok_or_else(|| {
            TriggerError::InvalidLayout(format!("{} floors is too deep for a pool shaft", floors))
        })?;
        let mut trap = Self::new(marker, depth);
        trap.base.name = "fall_into_pool".to_string();
        trap.landing = Landing::Pool;
        trap.checked()
    }

    /// Shaft depth covering `floors` maze levels, `None` if it overflows
    pub fn pool_depth(floors: u32) -> Option<i32> {
        i32::try_from(floors).ok()?.checked_mul(Self::FLOOR_HEIGHT)
    }

    /// Rejects traps whose shaft or landing would reach past the lowest y level
    pub fn checked(self) -> Result<Self> {
        let bottom = self.base.marker.y.checked_sub(self.depth);
        let lowest = match self.landing {
            Landing::Pool => bottom.and_then(|y| y.checked_sub(Self::POOL_DEPTH)),
            Landing::Shaft | Landing::Hazard => bottom,
        };
        match lowest {
            Some(_) => Ok(self),
            None => Err(TriggerError::InvalidLayout(format!(
                "fall trap at {} with depth {} reaches below the world",
                self.base.marker, self.depth
            ))),
        }
    }

    /// Short shaft ending in lava
    pub fn into_hazard(marker: TilePos) -> Self {
        let mut trap = Self::new(marker, Self::HAZARD_DEPTH);
        trap.base.name = "fall_into_hazard".to_string();
        trap.landing = Landing::Hazard;
        trap
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.base.name = name.into();
        self
    }

    pub fn with_marker_block(mut self, block: Block) -> Self {
        self.base.marker_block = block;
        self
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn landing(&self) -> Landing {
        self.landing
    }

    /// Lowest carved y level
    pub fn bottom_y(&self) -> i32 {
        self.base.marker.y.saturating_sub(self.depth)
    }

    fn landing_edits(&self) -> Vec<WorldEdit> {
        let marker = self.base.marker;
        let bottom = self.bottom_y();
        let reach = Self::CHAMBER_REACH;
        let water_top = bottom.saturating_sub(Self::POOL_DEPTH / 2);
        let water_bottom = bottom.saturating_sub(Self::POOL_DEPTH);

        match self.landing {
            Landing::Shaft => Vec::new(),
            Landing::Pool => vec![
                WorldEdit::set_blocks(
                    TilePos::new(marker.x - reach, bottom, marker.z - reach),
                    TilePos::new(marker.x + reach, water_top, marker.z + reach),
                    Block::AIR,
                ),
                WorldEdit::set_blocks(
                    TilePos::new(marker.x - reach, water_top, marker.z - reach),
                    TilePos::new(marker.x + reach, water_bottom, marker.z + reach),
                    Block::WATER,
                ),
            ],
            Landing::Hazard => vec![WorldEdit::set_block(
                TilePos::new(marker.x, bottom, marker.z),
                Block::LAVA,
            )],
        }
    }
}

impl Trigger for FallTrap {
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
        let marker = self.base.marker;
        let mut edits = vec![
            self.base.marker_edit(),
            WorldEdit::set_blocks(
                marker.offset(0, -2, 0),
                TilePos::new(marker.x, self.bottom_y(), marker.z),
                Block::AIR,
            ),
        ];
        edits.extend(self.landing_edits());
        edits
    }

    fn action(&mut self, state: &WorldState) -> Sequence {
        Sequence::new().then(WorldEdit::set_block(state.tile.below(), Block::AIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Vec3;

    #[test]
    fn test_fall_trap_setup_carves_shaft() {
        let trap = FallTrap::new(TilePos::new(5, 70, 5), 10);
        assert_eq!(
            trap.setup(),
            vec![
                WorldEdit::set_block(TilePos::new(5, 70, 5), Block::STONE),
                WorldEdit::set_blocks(TilePos::new(5, 68, 5), TilePos::new(5, 60, 5), Block::AIR),
            ]
        );
    }

    #[test]
    fn test_fall_trap_removes_floor_under_player() {
        let mut trap = FallTrap::new(TilePos::new(5, 70, 5), 10);
        let state = WorldState::at(Vec3::new(5.5, 71.0, 5.5));
        assert_eq!(
            trap.action(&state),
            Sequence::new().then(WorldEdit::set_block(TilePos::new(5, 70, 5), Block::AIR))
        );
    }

    #[test]
    fn test_pool_depth_scales_with_floors() {
        let trap = FallTrap::into_pool(TilePos::new(0, 100, 0), 3).unwrap();
        assert_eq!(trap.depth(), 30);
        assert_eq!(trap.bottom_y(), 70);

        let setup = trap.setup();
        assert_eq!(setup.len(), 4);
        assert_eq!(
            setup[2],
            WorldEdit::set_blocks(TilePos::new(-5, 70, -5), TilePos::new(5, 65, 5), Block::AIR)
        );
        assert_eq!(
            setup[3],
            WorldEdit::set_blocks(TilePos::new(-5, 65, -5), TilePos::new(5, 60, 5), Block::WATER)
        );
    }

    #[test]
    fn test_hazard_places_lava_at_bottom() {
        let trap = FallTrap::into_hazard(TilePos::new(2, 64, 2));
        assert_eq!(trap.landing(), Landing::Hazard);
        assert_eq!(
            trap.setup().last(),
            Some(&WorldEdit::set_block(TilePos::new(2, 61, 2), Block::LAVA))
        );
    }

    #[test]
    fn test_shaft_past_lowest_level_rejected() {
        assert_eq!(FallTrap::pool_depth(3), Some(30));
        assert_eq!(FallTrap::pool_depth(300_000_000), None);
        assert_eq!(FallTrap::pool_depth(3_000_000_000), None);

        let result = FallTrap::into_pool(TilePos::new(0, 64, 0), 300_000_000);
        assert!(matches!(result, Err(TriggerError::InvalidLayout(_))));

        // Fits as a depth, but the water below the shaft does not
        let result = FallTrap::into_pool(TilePos::new(0, i32::MIN + 25, 0), 2);
        assert!(matches!(result, Err(TriggerError::InvalidLayout(_))));

        let result = FallTrap::new(TilePos::new(0, -64, 0), i32::MAX).checked();
        assert!(matches!(result, Err(TriggerError::InvalidLayout(_))));
        assert!(FallTrap::new(TilePos::new(0, 64, 0), 10).checked().is_ok());
    }

    #[test]
    fn test_unchecked_depth_saturates() {
        let trap = FallTrap::new(TilePos::new(0, -64, 0), i32::MAX);
        assert_eq!(trap.bottom_y(), i32::MIN);
        assert_eq!(trap.setup().len(), 2);
    }
}
