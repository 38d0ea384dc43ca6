//! Power-up lifecycle: probabilistic spawn, activation, timed expiry
//!
//! Timed effects stack: picking up a second capsule of the same kind while
//! the first is active extends the effect, and expiry only clears the shared
//! flag once no activated power-up of that kind remains.

use glam::{Vec2, Vec3};
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Entity, GameEvent, GameState};
use crate::consts::POWERUP_SIZE;
use crate::tuning::Tuning;

/// The fixed set of power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Instantaneous: scales ball velocity
    Speed,
    /// Timed: ball re-attaches to the paddle on contact
    Sticky,
    /// Timed: ball flies through non-solid bricks
    PassThrough,
    /// Instantaneous: permanently widens the paddle
    PadSizeIncrease,
    /// Timed negative effect: screen distortion (excluded by chaos)
    Confuse,
    /// Timed negative effect: screen distortion (excluded by confuse)
    Chaos,
}

impl PowerUpKind {
    /// Spawn-roll order
    pub const ALL: [PowerUpKind; 6] = [
        PowerUpKind::Speed,
        PowerUpKind::Sticky,
        PowerUpKind::PassThrough,
        PowerUpKind::PadSizeIncrease,
        PowerUpKind::Confuse,
        PowerUpKind::Chaos,
    ];

    /// Capsule tint
    pub fn color(self) -> Vec3 {
        match self {
            PowerUpKind::Speed => Vec3::new(1.5, 1.5, 0.0),
            PowerUpKind::Sticky => Vec3::new(0.0, 0.5, 0.0),
            PowerUpKind::PassThrough => Vec3::new(1.0, 0.5, 0.0),
            PowerUpKind::PadSizeIncrease => Vec3::new(1.5, 1.5, 0.0),
            PowerUpKind::Confuse => Vec3::new(0.64, 0.0, 1.0),
            PowerUpKind::Chaos => Vec3::new(0.9, 0.0, 0.0),
        }
    }
}

/// A falling (or already collected and still ticking) power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub entity: Entity,
    pub kind: PowerUpKind,
    /// Seconds of effect remaining; 0 marks an instantaneous kind
    pub duration: f32,
    /// Applying its effect, counting down `duration`
    pub activated: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, pos: Vec2, tuning: &Tuning) -> Self {
        let mut entity = Entity::new(pos, POWERUP_SIZE, kind.color());
        entity.vel = Vec2::new(0.0, tuning.powerup_fall_speed);
        Self {
            entity,
            kind,
            duration: tuning.duration(kind),
            activated: false,
        }
    }
}

/// Roll spawn chances for every kind at a destroyed brick's position
///
/// Each kind rolls independently at 1-in-N odds from the tuning table, so a
/// single brick can drop several capsules.
pub fn spawn_powerups(
    rng: &mut Pcg32,
    tuning: &Tuning,
    origin: Vec2,
    powerups: &mut Vec<PowerUp>,
    events: &mut Vec<GameEvent>,
) {
    for kind in PowerUpKind::ALL {
        let one_in = tuning.spawn_one_in(kind).max(1);
        if rng.random_range(0..one_in) != 0 {
            continue;
        }
        powerups.push(PowerUp::new(kind, origin, tuning));
        events.push(GameEvent::PowerUpSpawned { kind });
    }
}

/// Apply a collected power-up's effect to the simulation
pub fn activate(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Speed => {
            state.ball.entity.vel *= state.tuning.speed_factor;
        }
        PowerUpKind::Sticky => {
            state.ball.sticky = true;
            state.paddle.color = Vec3::new(1.0, 0.5, 1.0);
        }
        PowerUpKind::PassThrough => {
            state.ball.pass_through = true;
            state.ball.entity.color = Vec3::new(1.0, 0.5, 0.5);
        }
        PowerUpKind::PadSizeIncrease => {
            state.paddle.size.x += state.tuning.pad_size_increase;
        }
        PowerUpKind::Confuse => {
            // Mutually exclusive with chaos
            if !state.effects.chaos {
                state.effects.confuse = true;
            }
        }
        PowerUpKind::Chaos => {
            if !state.effects.confuse {
                state.effects.chaos = true;
            }
        }
    }
}

/// Per-frame power-up update, in two stable passes
///
/// Pass 1 advances positions and countdowns, collecting expired kinds. A
/// shared effect flag is only cleared once no activated power-up of that
/// kind survives, so overlapping pickups keep the effect alive. Pass 2
/// removes consumed entries.
pub fn update_powerups(state: &mut GameState, dt: f32) {
    let mut expired: Vec<PowerUpKind> = Vec::new();
    for powerup in &mut state.powerups {
        powerup.entity.pos += powerup.entity.vel * dt;
        if powerup.activated {
            powerup.duration -= dt;
            if powerup.duration <= 0.0 {
                powerup.activated = false;
                expired.push(powerup.kind);
            }
        }
    }

    for kind in expired {
        if any_activated(&state.powerups, kind) {
            continue;
        }
        match kind {
            PowerUpKind::Sticky => {
                state.ball.sticky = false;
                state.paddle.color = Vec3::ONE;
            }
            PowerUpKind::PassThrough => {
                state.ball.pass_through = false;
                state.ball.entity.color = Vec3::ONE;
            }
            PowerUpKind::Confuse => {
                state.effects.confuse = false;
            }
            PowerUpKind::Chaos => {
                state.effects.chaos = false;
            }
            // Instantaneous kinds never count down
            PowerUpKind::Speed | PowerUpKind::PadSizeIncrease => {}
        }
    }

    state
        .powerups
        .retain(|p| !(p.entity.destroyed && !p.activated));
}

/// Scan for a surviving activated power-up of the given kind.
///
/// An empty list is a safe no-op ("no other active effect of that type").
fn any_activated(powerups: &[PowerUp], kind: PowerUpKind) -> bool {
    powerups.iter().any(|p| p.activated && p.kind == kind)
}
