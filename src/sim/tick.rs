//! Fixed timestep simulation tick
//!
//! Per-frame order while active: input, ball integration, brick collisions,
//! power-up pickup, paddle bounce, shake countdown, power-up lifecycle, then
//! the loss and win checks. External consumers read entity state and the
//! event list after the tick completes.

use glam::Vec2;

use super::collision::{Direction, aabb_overlap, circle_aabb_collision};
use super::powerup;
use super::state::{GameEvent, GameMode, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// Held keys map to the movement booleans every tick; `launch`, `confirm`
/// and the level-select flags are one-shot and must be cleared by the host
/// after each processed tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move the paddle left/right (held)
    pub move_left: bool,
    pub move_right: bool,
    /// Release a stuck ball
    pub launch: bool,
    /// Menu: start the selected level. Win: back to menu
    pub confirm: bool,
    /// Menu: cycle the selected level
    pub next_level: bool,
    pub prev_level: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    match state.mode {
        GameMode::Menu => menu_tick(state, input),
        GameMode::Win => {
            if input.confirm {
                state.effects.chaos = false;
                state.mode = GameMode::Menu;
            }
        }
        GameMode::Active => active_tick(state, input, dt),
    }
}

fn menu_tick(state: &mut GameState, input: &TickInput) {
    let count = state.grids.len();
    if count > 0 {
        if input.next_level {
            state.load_level((state.level_index + 1) % count);
        }
        if input.prev_level {
            state.load_level((state.level_index + count - 1) % count);
        }
    }
    if input.confirm {
        state.mode = GameMode::Active;
    }
}

fn active_tick(state: &mut GameState, input: &TickInput, dt: f32) {
    process_input(state, input, dt);

    if state.ball.move_and_bounce(dt, state.width) {
        state.emit(GameEvent::WallHit);
    }

    resolve_brick_collisions(state);
    collect_powerups(state);
    resolve_paddle_collision(state);

    // Shake countdown, set when a solid brick is struck
    if state.effects.shake_time > 0.0 {
        state.effects.shake_time -= dt;
        if state.effects.shake_time <= 0.0 {
            state.effects.shake = false;
        }
    }

    powerup::update_powerups(state, dt);

    check_loss(state);
    check_win(state);
}

/// Paddle movement clamped to the arena; a stuck ball rides along
fn process_input(state: &mut GameState, input: &TickInput, dt: f32) {
    let velocity = PLAYER_VELOCITY * dt;
    if input.move_left && state.paddle.pos.x >= 0.0 {
        state.paddle.pos.x -= velocity;
        if state.ball.stuck {
            state.ball.entity.pos.x -= velocity;
        }
    }
    if input.move_right && state.paddle.pos.x <= state.width - state.paddle.size.x {
        state.paddle.pos.x += velocity;
        if state.ball.stuck {
            state.ball.entity.pos.x += velocity;
        }
    }
    if input.launch {
        state.ball.stuck = false;
    }
}

/// Ball vs brick field
///
/// Destroyed bricks are skipped permanently. Pass-through suppresses the
/// reflection against non-solid bricks only; solid bricks always deflect.
fn resolve_brick_collisions(state: &mut GameState) {
    if state.ball.stuck {
        return;
    }

    for i in 0..state.level.bricks.len() {
        if state.level.bricks[i].destroyed {
            continue;
        }
        let (brick_pos, brick_size, brick_solid) = {
            let brick = &state.level.bricks[i];
            (brick.pos, brick.size, brick.solid)
        };

        let result =
            circle_aabb_collision(state.ball.center(), state.ball.radius, brick_pos, brick_size);
        if !result.hit {
            continue;
        }

        if brick_solid {
            state.effects.shake_time = SHAKE_DURATION;
            state.effects.shake = true;
            state.emit(GameEvent::SolidBrickHit);
        } else {
            state.level.bricks[i].destroyed = true;
            state.points += state.tuning.brick_score;
            state.emit(GameEvent::BrickDestroyed { pos: brick_pos });
            powerup::spawn_powerups(
                &mut state.rng,
                &state.tuning,
                brick_pos,
                &mut state.powerups,
                &mut state.events,
            );
        }

        if state.ball.pass_through && !brick_solid {
            continue;
        }

        let ball = &mut state.ball;
        match result.direction {
            Direction::Left | Direction::Right => {
                ball.entity.vel.x = -ball.entity.vel.x;
                // Reposition by the exact penetration depth so the same
                // collision cannot re-trigger next frame
                let penetration = ball.radius - result.separation.x.abs();
                if result.direction == Direction::Left {
                    ball.entity.pos.x += penetration;
                } else {
                    ball.entity.pos.x -= penetration;
                }
            }
            Direction::Up | Direction::Down => {
                ball.entity.vel.y = -ball.entity.vel.y;
                let penetration = ball.radius - result.separation.y.abs();
                if result.direction == Direction::Up {
                    ball.entity.pos.y -= penetration;
                } else {
                    ball.entity.pos.y += penetration;
                }
            }
        }
    }
}

/// Falling power-ups: cull below the arena, collect on paddle contact
fn collect_powerups(state: &mut GameState) {
    let paddle_pos = state.paddle.pos;
    let paddle_size = state.paddle.size;
    let height = state.height;

    let mut collected = Vec::new();
    for capsule in &mut state.powerups {
        if capsule.entity.destroyed {
            continue;
        }
        if capsule.entity.pos.y >= height {
            capsule.entity.destroyed = true;
            continue;
        }
        if aabb_overlap(paddle_pos, paddle_size, capsule.entity.pos, capsule.entity.size) {
            capsule.entity.destroyed = true;
            // Instantaneous kinds are consumed outright, never counted down
            if capsule.duration > 0.0 {
                capsule.activated = true;
            }
            collected.push(capsule.kind);
        }
    }

    for kind in collected {
        powerup::activate(state, kind);
        state.emit(GameEvent::PowerUpCollected { kind });
    }
}

/// Ball vs paddle: deflection angle depends on strike position, speed is
/// conserved, and the bounce always sends the ball upward
fn resolve_paddle_collision(state: &mut GameState) {
    if state.ball.stuck {
        return;
    }
    let result = circle_aabb_collision(
        state.ball.center(),
        state.ball.radius,
        state.paddle.pos,
        state.paddle.size,
    );
    if !result.hit {
        return;
    }

    let ball = &mut state.ball;
    // Snap just above the paddle top to prevent tunneling
    ball.entity.pos.y = state.paddle.pos.y - ball.radius * 2.0;

    let paddle_center_x = state.paddle.pos.x + state.paddle.size.x / 2.0;
    let distance = (ball.entity.pos.x + ball.radius) - paddle_center_x;
    let percentage = distance / (state.paddle.size.x / 2.0);

    let old_vel = ball.entity.vel;
    ball.entity.vel.x = INITIAL_BALL_VELOCITY.x * percentage * PADDLE_BOUNCE_STRENGTH;
    // Direction changes, speed is conserved
    ball.entity.vel = ball.entity.vel.normalize_or_zero() * old_vel.length();
    // Always bounce upward so the ball cannot skim along the paddle
    ball.entity.vel.y = -ball.entity.vel.y.abs();

    ball.stuck = ball.sticky;
    state.emit(GameEvent::PaddleHit);
}

/// Ball below the arena costs a life; at zero the run ends back in the menu
fn check_loss(state: &mut GameState) {
    if state.ball.entity.pos.y < state.height {
        return;
    }
    state.lives = state.lives.saturating_sub(1);
    state.emit(GameEvent::BallLost);
    if state.lives == 0 {
        state.reset_level();
        state.mode = GameMode::Menu;
        state.emit(GameEvent::GameOver);
    }
    state.reset_player();
}

/// All breakable bricks cleared: reset, flag the celebratory chaos visual
fn check_win(state: &mut GameState) {
    if state.mode != GameMode::Active || !state.level.is_completed() {
        return;
    }
    state.reset_level();
    state.reset_player();
    state.effects.chaos = true;
    state.mode = GameMode::Win;
    state.emit(GameEvent::LevelWon);
}
