//! Fixed timestep simulation tick
//!
//! One tick per frame: ball moves, paddle moves, then collisions are resolved
//! against the post-move positions.

use rand::Rng;

use super::collision::{
    ball_hits_brick, ball_hits_paddle, brick_bounce, classify_brick_edge, paddle_bounce,
};
use super::state::{Brick, GameEvent, GamePhase, GameState, Steer};
use crate::HighScores;
use crate::Tuning;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Latest steering command this frame (None = keep current velocity)
    pub steer: Option<Steer>,
}

/// Advance the session by one tick.
///
/// The high score table is only touched on the tick that moves the session
/// into `GameOver`, which is the tick after the ball left the playfield.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    high_scores: &mut HighScores,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(steer) = input.steer {
        state.paddle.steer(steer);
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    if state.ball.active {
        state.time_ticks += 1;
        state.ball.update();
        state.paddle.update();
        check_collisions(state, &mut events);
    } else {
        let recorded = high_scores.record(state.score, state.bricks_broken);
        state.phase = GamePhase::GameOver;
        if recorded.new_high_score {
            log::info!("Game over: score {} (new high score)", state.score);
        } else {
            log::info!(
                "Game over: score {} (high score {})",
                state.score,
                high_scores.best()
            );
        }
        events.push(GameEvent::GameOver {
            score: state.score,
            bricks_broken: state.bricks_broken,
            paddle_hits: state.paddle_hits,
            new_high_score: recorded.new_high_score,
            rank: recorded.rank,
        });
    }

    events
}

/// Resolve at most one paddle bounce and at most one brick hit
pub fn check_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let tuning = &state.tuning;
    let ball = &mut state.ball;
    let paddle_rect = state.paddle.rect();

    if ball_hits_paddle(ball.pos, ball.radius, &paddle_rect) {
        let offset = ball.pos.x - state.paddle.center_x();
        ball.vel = paddle_bounce(ball.vel, offset, state.paddle.velocity(), tuning);
        // Rest on the paddle top so the ball can't sink into it
        ball.pos.y = paddle_rect.top() - ball.radius;
        state.score += tuning.paddle_hit_score;
        state.paddle_hits += 1;
        log::debug!("Paddle hit at offset {:.1}, vel {:?}", offset, ball.vel);
        events.push(GameEvent::PaddleHit { offset });
    }

    let hit = state
        .bricks
        .iter()
        .position(|brick| ball_hits_brick(ball.pos, ball.radius, brick.bounds()));

    if let Some(index) = hit {
        let brick = state.bricks.remove(index);
        let edge = classify_brick_edge(ball.pos.y, brick.bounds(), tuning.edge_band);
        ball.vel = brick_bounce(ball.vel, edge, tuning);
        state.score += tuning.brick_hit_score;
        state.bricks_broken += 1;
        log::debug!("Brick hit ({:?}) at {:?}", edge, brick.rect);
        events.push(GameEvent::BrickHit {
            brick: brick.rect,
            edge,
        });

        match generate_single_brick(&state.bricks, &mut state.rng, tuning) {
            Some(replacement) => {
                log::debug!("Brick respawned at {:?}", replacement.rect);
                events.push(GameEvent::BrickRespawned {
                    brick: replacement.rect,
                });
                state.bricks.push(replacement);
            }
            None => {
                log::warn!(
                    "No room for a replacement brick; {} left",
                    state.bricks.len()
                );
                events.push(GameEvent::BrickLost);
            }
        }
    }
}

/// Pick a random spot in the upper half that overlaps none of `existing`.
///
/// Gives up after `placement_attempts` tries and returns None; callers skip
/// the brick rather than treating it as a fault.
pub fn generate_single_brick<R: Rng + ?Sized>(
    existing: &[Brick],
    rng: &mut R,
    tuning: &Tuning,
) -> Option<Brick> {
    let max_x = (SCREEN_WIDTH - tuning.brick_width).floor() as i32;
    let min_y = tuning.brick_min_y.ceil() as i32;
    let max_y = tuning.brick_max_y().floor() as i32;
    if max_x < 0 || max_y < min_y {
        return None;
    }

    for _ in 0..tuning.placement_attempts {
        let x = rng.random_range(0..=max_x) as f32;
        let y = rng.random_range(min_y..=max_y) as f32;
        let candidate = Brick::new(x, y, tuning.brick_width, tuning.brick_height);

        if !existing
            .iter()
            .any(|brick| candidate.rect.intersects(brick.bounds()))
        {
            return Some(candidate);
        }
    }

    None
}

/// Seed the field with `brick_count` bricks (fewer if placement gives up)
pub fn generate_bricks(state: &mut GameState) {
    for _ in 0..state.tuning.brick_count {
        match generate_single_brick(&state.bricks, &mut state.rng, &state.tuning) {
            Some(brick) => state.bricks.push(brick),
            None => log::warn!("Brick placement gave up during setup"),
        }
    }
}
