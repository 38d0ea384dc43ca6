//! Brick layout construction
//!
//! Level files are parsed by an external loader into a [`LevelGrid`] of tile
//! codes; this module turns a grid into positioned bricks sized to the arena.
//! The brick field occupies the top half of the arena.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::state::Entity;

/// Tile codes per row, as supplied by the external level loader.
///
/// 0 = empty, 1 = solid (indestructible), 2..=5 = breakable with a per-code
/// tint. Unknown codes are treated as breakable with a white tint.
pub type LevelGrid = Vec<Vec<u32>>;

/// An ordered collection of bricks; completed when every non-solid brick is
/// destroyed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Level {
    pub bricks: Vec<Entity>,
}

impl Level {
    /// Lay out a grid of tile codes across the arena width and the top half
    /// of the arena height
    pub fn from_grid(grid: &[Vec<u32>], arena_width: f32, arena_height: f32) -> Self {
        let rows = grid.len();
        let cols = grid.first().map(|row| row.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Self::default();
        }

        let unit_width = arena_width / cols as f32;
        let unit_height = (arena_height / 2.0) / rows as f32;

        let mut bricks = Vec::new();
        for (y, row) in grid.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                if code == 0 {
                    continue;
                }
                let pos = Vec2::new(x as f32 * unit_width, y as f32 * unit_height);
                let size = Vec2::new(unit_width, unit_height);
                let mut brick = Entity::new(pos, size, tile_color(code));
                brick.solid = code == 1;
                bricks.push(brick);
            }
        }
        Self { bricks }
    }

    /// True when every non-solid brick has been destroyed
    pub fn is_completed(&self) -> bool {
        self.bricks.iter().all(|b| b.solid || b.destroyed)
    }
}

fn tile_color(code: u32) -> Vec3 {
    match code {
        1 => Vec3::new(0.8, 0.8, 0.7),
        2 => Vec3::new(0.2, 0.6, 1.0),
        3 => Vec3::new(0.0, 0.7, 0.0),
        4 => Vec3::new(0.8, 0.8, 0.4),
        5 => Vec3::new(1.0, 0.5, 0.0),
        _ => Vec3::ONE,
    }
}
