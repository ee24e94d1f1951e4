//! Block palette codes
//!
//! Block identifiers are opaque `(id, data)` pairs defined by the game
//! server's palette. Only the handful the trap catalog places are named here.

use serde::{Deserialize, Serialize};

/// A block type plus its variant data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub id: u16,
    #[serde(default)]
    pub data: u8,
}

impl Block {
    pub const AIR: Block = Block::new(0);
    pub const STONE: Block = Block::new(1);
    pub const WATER: Block = Block::new(8);
    pub const LAVA: Block = Block::new(10);
    pub const SAND: Block = Block::new(12);
    pub const GLOWSTONE_BLOCK: Block = Block::new(89);
    pub const STONE_BRICK: Block = Block::new(98);

    /// Block with default variant data
    pub const fn new(id: u16) -> Self {
        Self { id, data: 0 }
    }

    /// Block with explicit variant data
    pub const fn with_data(id: u16, data: u8) -> Self {
        Self { id, data }
    }

    /// Whether this is the empty block
    pub fn is_air(&self) -> bool {
        self.id == Self::AIR.id
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.id, self.data)
    }
}
