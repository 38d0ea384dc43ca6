//! Brickfall - a Breakout-style arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, power-ups)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio, window management and level-file parsing are external
//! collaborators. The simulation exposes read-only entity state, per-tick
//! [`sim::GameEvent`]s and the boolean visual flags (`shake`, `confuse`,
//! `chaos`) that a renderer interprets.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Arena dimensions (screen coordinates, +y is down)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PLAYER_SIZE: Vec2 = Vec2::new(100.0, 20.0);
    /// Paddle movement speed (pixels/s)
    pub const PLAYER_VELOCITY: f32 = 500.0;
    /// Horizontal deflection strength on paddle bounce
    pub const PADDLE_BOUNCE_STRENGTH: f32 = 2.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.5;
    pub const INITIAL_BALL_VELOCITY: Vec2 = Vec2::new(100.0, -350.0);

    /// How long the screen shake flag stays set after a solid brick hit
    pub const SHAKE_DURATION: f32 = 0.05;

    /// Falling power-up capsule size
    pub const POWERUP_SIZE: Vec2 = Vec2::new(60.0, 20.0);
}
