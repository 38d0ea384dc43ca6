//! Collision detection primitives for axis-aligned geometry
//!
//! The core queries of Brickfall: box-vs-box overlap for power-up pickup,
//! circle-vs-box for the ball against bricks and paddle, and classification
//! of the separation vector into a compass direction so the resolver knows
//! which velocity axis to reflect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Compass direction of a collision, in classification order.
///
/// Coordinates are screen-space (+y down), matching entity positions. The
/// direction is derived from the separation vector (closest box point minus
/// ball center), so `Down` means the ball struck the box from above it on
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Compass unit vectors, iterated first-to-last; first maximum wins
const COMPASS: [(Direction, Vec2); 4] = [
    (Direction::Up, Vec2::new(0.0, 1.0)),
    (Direction::Right, Vec2::new(1.0, 0.0)),
    (Direction::Down, Vec2::new(0.0, -1.0)),
    (Direction::Left, Vec2::new(-1.0, 0.0)),
];

/// Result of a circle-vs-box collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Compass direction of the hit (valid only when `hit`)
    pub direction: Direction,
    /// Raw separation vector, closest point minus circle center (unnormalized,
    /// for penetration-depth computation by the caller)
    pub separation: Vec2,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            direction: Direction::Up,
            separation: Vec2::ZERO,
        }
    }
}

/// AABB-vs-AABB overlap test with inclusive bounds
///
/// Boxes are given as top-left position plus size.
pub fn aabb_overlap(pos_a: Vec2, size_a: Vec2, pos_b: Vec2, size_b: Vec2) -> bool {
    let overlap_x = pos_a.x + size_a.x >= pos_b.x && pos_b.x + size_b.x >= pos_a.x;
    let overlap_y = pos_a.y + size_a.y >= pos_b.y && pos_b.y + size_b.y >= pos_a.y;
    overlap_x && overlap_y
}

/// Circle-vs-AABB collision check
///
/// Clamps the vector from box center to circle center into the box half
/// extents to find the closest point on the box, then tests its distance
/// against the radius. On hit, the separation vector is classified into a
/// compass direction for the resolver.
pub fn circle_aabb_collision(
    center: Vec2,
    radius: f32,
    box_pos: Vec2,
    box_size: Vec2,
) -> CollisionResult {
    let half_extents = box_size / 2.0;
    let box_center = box_pos + half_extents;

    let difference = center - box_center;
    let clamped = difference.clamp(-half_extents, half_extents);
    let closest = box_center + clamped;

    let separation = closest - center;
    if separation.length() <= radius {
        CollisionResult {
            hit: true,
            direction: vector_direction(separation),
            separation,
        }
    } else {
        CollisionResult::miss()
    }
}

/// Classify a vector into the compass direction with the largest dot product
///
/// Ties are broken by iteration order (Up, Right, Down, Left - first max
/// wins). The zero vector is a defined boundary case: every dot product is
/// 0, none exceeds the initial maximum, and the default `Up` is returned.
pub fn vector_direction(v: Vec2) -> Direction {
    let normalized = v.normalize_or_zero();
    let mut best = Direction::Up;
    let mut max = 0.0;
    for (direction, compass) in COMPASS {
        let dot = normalized.dot(compass);
        if dot > max {
            max = dot;
            best = direction;
        }
    }
    best
}
