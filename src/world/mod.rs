//! World connection abstractions
//!
//! All real state lives in the external game server. Triggers only ever see
//! it through [`WorldConnection`], which lets the loop run against
//! [`RecordingWorld`] in tests without a live server.

mod block;
mod edit;
mod mock;
mod position;

pub use block::Block;
pub use edit::WorldEdit;
pub use mock::RecordingWorld;
pub use position::{TilePos, Vec3};

use crate::Result;

/// Handle to the shared game world
///
/// Edits are synchronous and fire-and-forget: an `Ok` only means the request
/// was sent, not that the server accepted it.
pub trait WorldConnection {
    /// Current continuous avatar position
    fn player_pos(&mut self) -> Result<Vec3>;

    /// Current avatar tile position
    fn player_tile(&mut self) -> Result<TilePos> {
        Ok(self.player_pos()?.tile())
    }

    /// Teleport the avatar
    fn set_player_pos(&mut self, pos: Vec3) -> Result<()>;

    /// Place a single block
    fn set_block(&mut self, pos: TilePos, block: Block) -> Result<()>;

    /// Fill the cuboid spanned by two corners (inclusive)
    fn set_blocks(&mut self, from: TilePos, to: TilePos, block: Block) -> Result<()>;

    /// Post a message to world chat
    fn post_to_chat(&mut self, message: &str) -> Result<()>;
}
