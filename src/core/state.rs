//! Shared world state seen by every trigger

use serde::{Deserialize, Serialize};

use crate::world::{TilePos, Vec3, WorldConnection};
use crate::Result;

/// Snapshot of the avatar, refreshed once per tick
///
/// Triggers read this; none of them own it. It is passed explicitly to every
/// evaluation so the loop can be driven without a live server.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldState {
    /// Continuous avatar position
    pub pos: Vec3,
    /// Avatar position on the block grid
    pub tile: TilePos,
    /// Number of ticks processed so far
    pub tick: u64,
    /// Whether the last refresh reached the world
    pub connected: bool,
}

impl WorldState {
    /// Create a disconnected state at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a connected state for the given avatar position
    pub fn at(pos: Vec3) -> Self {
        Self {
            pos,
            tile: pos.tile(),
            tick: 0,
            connected: true,
        }
    }

    /// Re-read the avatar from the connection
    ///
    /// On failure the previous position is kept and the state is marked
    /// disconnected so conditions evaluate to false.
    pub fn refresh(&mut self, world: &mut dyn WorldConnection) -> Result<()> {
        match Self::read(world) {
            Ok((pos, tile)) => {
                self.pos = pos;
                self.tile = tile;
                self.connected = true;
                Ok(())
            }
            Err(e) => {
                self.connected = false;
                Err(e)
            }
        }
    }

    fn read(world: &mut dyn WorldConnection) -> Result<(Vec3, TilePos)> {
        let pos = world.player_pos()?;
        let tile = world.player_tile()?;
        Ok((pos, tile))
    }
}
