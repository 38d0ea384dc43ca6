//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! External collaborators (renderer, audio, particle system) consume entity
//! state and the per-tick event list read-only; within a frame the update
//! completes before any consumer reads.

pub mod collision;
pub mod level;
pub mod powerup;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Direction, aabb_overlap, circle_aabb_collision, vector_direction};
pub use level::{Level, LevelGrid};
pub use powerup::{PowerUp, PowerUpKind};
pub use state::{Ball, Effects, Entity, GameEvent, GameMode, GameState};
pub use tick::{TickInput, tick};
