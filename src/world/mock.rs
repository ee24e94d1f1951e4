//! In-memory world used for tests and dry runs

use std::collections::HashMap;

use super::{Block, TilePos, Vec3, WorldConnection, WorldEdit};
use crate::{Result, TriggerError};

/// Mock world connection that records every request
///
/// Blocks are kept in a sparse map; anything never written reads as `None`.
/// Cuboid fills expand into individual blocks so tests can query them.
#[derive(Debug, Clone, Default)]
pub struct RecordingWorld {
    /// Scripted avatar position
    position: Vec3,
    /// Blocks written so far
    blocks: HashMap<TilePos, Block>,
    /// Every edit in the order it was received
    edits: Vec<WorldEdit>,
    /// Simulates a dropped connection when set
    offline: bool,
}

impl RecordingWorld {
    /// Create an empty world with the avatar at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting avatar position
    pub fn with_player_at(mut self, pos: Vec3) -> Self {
        self.position = pos;
        self
    }

    /// Move the avatar (as the player would by walking)
    pub fn move_player(&mut self, pos: Vec3) {
        self.position = pos;
    }

    /// Current avatar position without going through the connection
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Simulate losing or regaining the connection
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Last block written at a position
    pub fn block_at(&self, pos: TilePos) -> Option<Block> {
        self.blocks.get(&pos).copied()
    }

    /// All edits received so far
    pub fn edits(&self) -> &[WorldEdit] {
        &self.edits
    }

    /// Chat messages posted so far
    pub fn chat_messages(&self) -> Vec<&str> {
        self.edits
            .iter()
            .filter_map(|edit| match edit {
                WorldEdit::PostToChat(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Avatar teleports received so far
    pub fn teleports(&self) -> Vec<Vec3> {
        self.edits
            .iter()
            .filter_map(|edit| match edit {
                WorldEdit::SetPlayerPos(pos) => Some(*pos),
                _ => None,
            })
            .collect()
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline {
            return Err(TriggerError::Connection("world connection is offline".to_string()));
        }
        Ok(())
    }
}

impl WorldConnection for RecordingWorld {
    fn player_pos(&mut self) -> Result<Vec3> {
        self.ensure_online()?;
        Ok(self.position)
    }

    fn set_player_pos(&mut self, pos: Vec3) -> Result<()> {
        self.ensure_online()?;
        self.position = pos;
        self.edits.push(WorldEdit::teleport(pos));
        Ok(())
    }

    fn set_block(&mut self, pos: TilePos, block: Block) -> Result<()> {
        self.ensure_online()?;
        self.blocks.insert(pos, block);
        self.edits.push(WorldEdit::set_block(pos, block));
        Ok(())
    }

    fn set_blocks(&mut self, from: TilePos, to: TilePos, block: Block) -> Result<()> {
        self.ensure_online()?;
        for x in from.x.min(to.x)..=from.x.max(to.x) {
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                for z in from.z.min(to.z)..=from.z.max(to.z) {
                    self.blocks.insert(TilePos::new(x, y, z), block);
                }
            }
        }
        self.edits.push(WorldEdit::set_blocks(from, to, block));
        Ok(())
    }

    fn post_to_chat(&mut self, message: &str) -> Result<()> {
        self.ensure_online()?;
        self.edits.push(WorldEdit::chat(message));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_world_new() {
        let mut world = RecordingWorld::new().with_player_at(Vec3::new(1.5, 64.0, -2.5));
        assert_eq!(world.player_pos().unwrap(), Vec3::new(1.5, 64.0, -2.5));
        assert_eq!(world.player_tile().unwrap(), TilePos::new(1, 64, -3));
        assert!(world.edits().is_empty());
    }

    #[test]
    fn test_set_blocks_fills_cuboid_in_any_corner_order() {
        let mut world = RecordingWorld::new();
        world
            .set_blocks(TilePos::new(1, 10, 1), TilePos::new(0, 8, 0), Block::WATER)
            .unwrap();

        for x in 0..=1 {
            for y in 8..=10 {
                for z in 0..=1 {
                    assert_eq!(world.block_at(TilePos::new(x, y, z)), Some(Block::WATER));
                }
            }
        }
        assert_eq!(world.block_at(TilePos::new(0, 11, 0)), None);
        assert_eq!(world.edits().len(), 1);
    }

    #[test]
    fn test_teleport_moves_player() {
        let mut world = RecordingWorld::new();
        world.set_player_pos(Vec3::new(3.0, 65.0, 3.0)).unwrap();
        assert_eq!(world.position(), Vec3::new(3.0, 65.0, 3.0));
        assert_eq!(world.teleports(), vec![Vec3::new(3.0, 65.0, 3.0)]);
    }

    #[test]
    fn test_offline_world_rejects_requests() {
        let mut world = RecordingWorld::new();
        world.set_offline(true);
        assert!(matches!(world.player_pos(), Err(TriggerError::Connection(_))));
        assert!(world.post_to_chat("hello").is_err());

        world.set_offline(false);
        world.post_to_chat("hello").unwrap();
        assert_eq!(world.chat_messages(), vec!["hello"]);
    }

    #[test]
    fn test_edit_apply_routes_to_connection() {
        let mut world = RecordingWorld::new();
        WorldEdit::set_block(TilePos::new(0, 1, 0), Block::SAND)
            .apply(&mut world)
            .unwrap();
        WorldEdit::chat("boo").apply(&mut world).unwrap();

        assert_eq!(world.block_at(TilePos::new(0, 1, 0)), Some(Block::SAND));
        assert_eq!(world.chat_messages(), vec!["boo"]);
    }
}
