//! World mutations as data

use super::{Block, TilePos, Vec3, WorldConnection};
use crate::Result;

/// One request against the world connection
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEdit {
    SetBlock { pos: TilePos, block: Block },
    SetBlocks { from: TilePos, to: TilePos, block: Block },
    PostToChat(String),
    SetPlayerPos(Vec3),
}

impl WorldEdit {
    pub fn set_block(pos: TilePos, block: Block) -> Self {
        Self::SetBlock { pos, block }
    }

    pub fn set_blocks(from: TilePos, to: TilePos, block: Block) -> Self {
        Self::SetBlocks { from, to, block }
    }

    pub fn chat(message: impl Into<String>) -> Self {
        Self::PostToChat(message.into())
    }

    pub fn teleport(pos: Vec3) -> Self {
        Self::SetPlayerPos(pos)
    }

    /// Send this edit through a connection
    pub fn apply(&self, world: &mut dyn WorldConnection) -> Result<()> {
        log::debug!("Applying {:?}", self);
        match self {
            WorldEdit::SetBlock { pos, block } => world.set_block(*pos, *block),
            WorldEdit::SetBlocks { from, to, block } => world.set_blocks(*from, *to, *block),
            WorldEdit::PostToChat(message) => world.post_to_chat(message),
            WorldEdit::SetPlayerPos(pos) => world.set_player_pos(*pos),
        }
    }
}
