//! Game state and core simulation types
//!
//! Entities are plain structs composed around [`Entity`] rather than an
//! inheritance hierarchy: bricks are bare entities, the ball and power-ups
//! wrap one with their extra fields. All state needed to resume a run is
//! serializable.

use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{Level, LevelGrid};
use super::powerup::{PowerUp, PowerUpKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current mode of the game controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Level select, waiting for confirm
    Menu,
    /// Active gameplay
    Active,
    /// Level cleared
    Win,
}

/// A positioned, sized, velocity-bearing game object
///
/// Position is the top-left corner; sizes and positions are in arena pixels
/// with +y pointing down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Render tint
    pub color: Vec3,
    /// Solid bricks deflect the ball but cannot be destroyed
    pub solid: bool,
    pub destroyed: bool,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2, color: Vec3) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            color,
            solid: false,
            destroyed: false,
        }
    }
}

/// The ball: an entity with a radius and the flags power-ups toggle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub entity: Entity,
    pub radius: f32,
    /// Attached to the paddle; velocity is not integrated while set
    pub stuck: bool,
    /// Re-attach to the paddle on paddle contact
    pub sticky: bool,
    /// Fly through non-solid bricks without bouncing (still destroys them)
    pub pass_through: bool,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2) -> Self {
        let mut entity = Entity::new(pos, Vec2::splat(radius * 2.0), Vec3::ONE);
        entity.vel = vel;
        Self {
            entity,
            radius,
            stuck: true,
            sticky: false,
            pass_through: false,
        }
    }

    /// Center of the ball (position is the top-left of its bounding square)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.entity.pos + self.radius
    }

    /// Integrate velocity and bounce off the left/right/top arena walls.
    ///
    /// Returns true if a wall was hit. The bottom edge is open; falling past
    /// it is the loss condition handled by the tick.
    pub fn move_and_bounce(&mut self, dt: f32, arena_width: f32) -> bool {
        if self.stuck {
            return false;
        }
        self.entity.pos += self.entity.vel * dt;

        let mut hit_wall = false;
        if self.entity.pos.x <= 0.0 {
            self.entity.vel.x = -self.entity.vel.x;
            self.entity.pos.x = 0.0;
            hit_wall = true;
        } else if self.entity.pos.x + self.entity.size.x >= arena_width {
            self.entity.vel.x = -self.entity.vel.x;
            self.entity.pos.x = arena_width - self.entity.size.x;
            hit_wall = true;
        }
        if self.entity.pos.y <= 0.0 {
            self.entity.vel.y = -self.entity.vel.y;
            self.entity.pos.y = 0.0;
            hit_wall = true;
        }
        hit_wall
    }

    /// Re-attach above the paddle with fresh velocity and cleared effect flags
    pub fn reset(&mut self, pos: Vec2, vel: Vec2) {
        self.entity.pos = pos;
        self.entity.vel = vel;
        self.entity.color = Vec3::ONE;
        self.stuck = true;
        self.sticky = false;
        self.pass_through = false;
    }
}

/// Visual effect flags owned by the simulation, rendered externally
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Effects {
    /// Seconds of shake remaining after a solid brick hit
    pub shake_time: f32,
    pub shake: bool,
    /// Screen-distortion flags; confuse and chaos are mutually exclusive
    pub confuse: bool,
    pub chaos: bool,
}

/// Things that happened during a tick, for external audio/particle consumers
///
/// Cleared at the start of every tick; never serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    BrickDestroyed { pos: Vec2 },
    SolidBrickHit,
    PaddleHit,
    WallHit,
    PowerUpSpawned { kind: PowerUpKind },
    PowerUpCollected { kind: PowerUpKind },
    BallLost,
    GameOver,
    LevelWon,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Arena dimensions
    pub width: f32,
    pub height: f32,
    pub mode: GameMode,
    pub lives: u32,
    pub points: u32,
    /// Index into `grids` of the level being played
    pub level_index: usize,
    /// Raw level layouts supplied by the external loader
    pub grids: Vec<LevelGrid>,
    /// Bricks of the active level
    pub level: Level,
    pub paddle: Entity,
    pub ball: Ball,
    /// Falling and activated power-ups
    pub powerups: Vec<PowerUp>,
    pub effects: Effects,
    pub tuning: Tuning,
    /// Seeded RNG for power-up spawn rolls
    pub rng: Pcg32,
    /// Events emitted by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game from externally-loaded level grids
    pub fn new(seed: u64, grids: Vec<LevelGrid>, tuning: Tuning) -> Self {
        let width = ARENA_WIDTH;
        let height = ARENA_HEIGHT;

        let paddle = Entity::new(
            Vec2::new(width / 2.0 - PLAYER_SIZE.x / 2.0, height - PLAYER_SIZE.y),
            PLAYER_SIZE,
            Vec3::ONE,
        );
        let ball_pos = paddle.pos + Vec2::new(PLAYER_SIZE.x / 2.0 - BALL_RADIUS, -BALL_RADIUS * 2.0);

        let level = grids
            .first()
            .map(|grid| Level::from_grid(grid, width, height))
            .unwrap_or_default();

        Self {
            width,
            height,
            mode: GameMode::Menu,
            lives: 3,
            points: 0,
            level_index: 0,
            grids,
            level,
            paddle,
            ball: Ball::new(ball_pos, BALL_RADIUS, INITIAL_BALL_VELOCITY),
            powerups: Vec::new(),
            effects: Effects::default(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Rebuild the level at `index` from its grid and make it active
    pub fn load_level(&mut self, index: usize) {
        self.level_index = index;
        self.level = self
            .grids
            .get(index)
            .map(|grid| Level::from_grid(grid, self.width, self.height))
            .unwrap_or_default();
    }

    /// Reload the active level and restore run state (lives, points)
    ///
    /// Called on game over and on level completion. In-flight power-ups
    /// belong to the abandoned run and are dropped.
    pub fn reset_level(&mut self) {
        self.load_level(self.level_index);
        self.lives = 3;
        self.points = 0;
        self.powerups.clear();
    }

    /// Restore paddle size/position, re-attach the ball and clear all active
    /// binary effects and tints
    pub fn reset_player(&mut self) {
        self.paddle.size = PLAYER_SIZE;
        self.paddle.pos = Vec2::new(
            self.width / 2.0 - PLAYER_SIZE.x / 2.0,
            self.height - PLAYER_SIZE.y,
        );
        self.paddle.color = Vec3::ONE;

        let ball_pos =
            self.paddle.pos + Vec2::new(PLAYER_SIZE.x / 2.0 - BALL_RADIUS, -BALL_RADIUS * 2.0);
        self.ball.reset(ball_pos, INITIAL_BALL_VELOCITY);

        self.effects.confuse = false;
        self.effects.chaos = false;
    }

    /// Emit an event for external consumers
    #[inline]
    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> GameState {
        let grid = vec![vec![1, 2], vec![2, 0]];
        GameState::new(7, vec![grid], Tuning::default())
    }

    #[test]
    fn test_stuck_ball_ignores_velocity() {
        let mut ball = Ball::new(Vec2::new(100.0, 100.0), BALL_RADIUS, Vec2::new(200.0, -200.0));
        assert!(ball.stuck);
        let hit = ball.move_and_bounce(1.0, ARENA_WIDTH);
        assert!(!hit);
        assert_eq!(ball.entity.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_ball_bounces_off_side_walls() {
        let mut ball = Ball::new(Vec2::new(5.0, 300.0), BALL_RADIUS, Vec2::new(-100.0, 0.0));
        ball.stuck = false;
        assert!(ball.move_and_bounce(0.1, ARENA_WIDTH));
        assert_eq!(ball.entity.pos.x, 0.0);
        assert!(ball.entity.vel.x > 0.0);

        let mut ball = Ball::new(Vec2::new(770.0, 300.0), BALL_RADIUS, Vec2::new(100.0, 0.0));
        ball.stuck = false;
        assert!(ball.move_and_bounce(0.5, ARENA_WIDTH));
        assert_eq!(ball.entity.pos.x, ARENA_WIDTH - ball.entity.size.x);
        assert!(ball.entity.vel.x < 0.0);
    }

    #[test]
    fn test_ball_bounces_off_top_not_bottom() {
        let mut ball = Ball::new(Vec2::new(400.0, 2.0), BALL_RADIUS, Vec2::new(0.0, -100.0));
        ball.stuck = false;
        assert!(ball.move_and_bounce(0.1, ARENA_WIDTH));
        assert_eq!(ball.entity.pos.y, 0.0);
        assert!(ball.entity.vel.y > 0.0);

        // Falling past the bottom edge is not a bounce
        let mut ball = Ball::new(Vec2::new(400.0, 590.0), BALL_RADIUS, Vec2::new(0.0, 300.0));
        ball.stuck = false;
        assert!(!ball.move_and_bounce(0.5, ARENA_WIDTH));
        assert!(ball.entity.pos.y > ARENA_HEIGHT);
    }

    #[test]
    fn test_reset_player_clears_effects_and_tints() {
        let mut state = test_state();
        state.ball.sticky = true;
        state.ball.pass_through = true;
        state.ball.stuck = false;
        state.ball.entity.color = Vec3::new(1.0, 0.5, 0.5);
        state.paddle.color = Vec3::new(1.0, 0.5, 1.0);
        state.paddle.size.x += 50.0;
        state.effects.confuse = true;

        state.reset_player();

        assert!(state.ball.stuck);
        assert!(!state.ball.sticky);
        assert!(!state.ball.pass_through);
        assert_eq!(state.ball.entity.color, Vec3::ONE);
        assert_eq!(state.paddle.color, Vec3::ONE);
        assert_eq!(state.paddle.size, PLAYER_SIZE);
        assert!(!state.effects.confuse);
        assert!(!state.effects.chaos);
    }

    #[test]
    fn test_state_serde_round_trip() {
        let state = test_state();
        let json = serde_json::to_string(&state).expect("serialize");
        let restored: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored.lives, state.lives);
        assert_eq!(restored.level.bricks.len(), state.level.bricks.len());
        assert_eq!(restored.ball.entity.pos, state.ball.entity.pos);
    }
}
