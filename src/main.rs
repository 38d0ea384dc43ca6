//! Brickfall headless demo
//!
//! Runs the simulation at the fixed timestep with a trivial ball-tracking
//! paddle, logging progress. Useful for smoke-testing balance changes
//! without a renderer attached.

use brickfall::Tuning;
use brickfall::consts::*;
use brickfall::sim::{GameMode, GameState, LevelGrid, TickInput, tick};

/// A simple stand-in for the external level loader
fn demo_grid() -> LevelGrid {
    vec![
        vec![0, 2, 2, 2, 2, 2, 2, 0],
        vec![1, 3, 3, 4, 4, 3, 3, 1],
        vec![0, 5, 2, 3, 3, 2, 5, 0],
        vec![0, 0, 4, 4, 4, 4, 0, 0],
    ]
}

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut state = GameState::new(seed, vec![demo_grid()], Tuning::default());
    log::info!("Brickfall demo starting, seed {seed}");

    // Leave the menu, then play for up to two simulated minutes
    tick(&mut state, &TickInput { confirm: true, ..Default::default() }, SIM_DT);

    let max_ticks = 120 * 120;
    let mut ticks = 0u32;
    while state.mode == GameMode::Active && ticks < max_ticks {
        let ball_x = state.ball.entity.pos.x + state.ball.radius;
        let paddle_x = state.paddle.pos.x + state.paddle.size.x / 2.0;
        let input = TickInput {
            move_left: ball_x < paddle_x - 4.0,
            move_right: ball_x > paddle_x + 4.0,
            launch: state.ball.stuck,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        ticks += 1;

        if ticks % (120 * 10) == 0 {
            let remaining = state
                .level
                .bricks
                .iter()
                .filter(|b| !b.solid && !b.destroyed)
                .count();
            log::info!(
                "t={}s lives={} points={} bricks_remaining={}",
                ticks / 120,
                state.lives,
                state.points,
                remaining
            );
        }
    }

    log::info!(
        "Demo finished after {}s: mode={:?} points={}",
        ticks / 120,
        state.mode,
        state.points
    );
}
