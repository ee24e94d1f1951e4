//! World-space coordinates

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A continuous position in world space (avatar location, proximity anchors)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Create a new position
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length of this vector
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Calculate distance to another position
    pub fn distance_to(&self, other: &Vec3) -> f64 {
        (*self - *other).length()
    }

    /// Discretize to the block grid by flooring every axis
    pub fn tile(&self) -> TilePos {
        TilePos::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// A block coordinate on the integer world grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl TilePos {
    /// Create a new tile position
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Shift by a relative offset
    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// The tile directly above
    pub fn above(&self) -> Self {
        self.offset(0, 1, 0)
    }

    /// The tile directly below
    pub fn below(&self) -> Self {
        self.offset(0, -1, 0)
    }
}

impl From<[i32; 3]> for TilePos {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl std::fmt::Display for TilePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_distance() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_tile_floors_negative_coordinates() {
        assert_eq!(Vec3::new(0.5, 64.0, 0.9).tile(), TilePos::new(0, 64, 0));
        assert_eq!(Vec3::new(-0.5, 63.99, -4.5).tile(), TilePos::new(-1, 63, -5));
    }

    #[test]
    fn test_tile_neighbours() {
        let tile = TilePos::new(5, 70, 5);
        assert_eq!(tile.above(), TilePos::new(5, 71, 5));
        assert_eq!(tile.below(), TilePos::new(5, 69, 5));
        assert_eq!(tile.offset(-5, 2, 3), TilePos::new(0, 72, 8));
    }

    #[test]
    fn test_vector_arithmetic() {
        let old = Vec3::new(10.0, 64.0, 4.0);
        let now = Vec3::new(10.0, 64.0, 8.0);
        let back = old - now;
        assert_eq!(back, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(now + back * 0.5, Vec3::new(10.0, 64.0, 6.0));
    }
}
