//! Scene assembly: game state in, triangle list out (playfield coordinates)

use super::font::TextRenderer;
use super::shapes;
use super::vertex::{Vertex, colors};
use crate::HighScores;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::GameState;

/// Ball tessellation
const BALL_SEGMENTS: u32 = 24;
/// Font sizes in px
const HUD_SIZE: f32 = 28.0;
const OVERLAY_SMALL_SIZE: f32 = 20.0;
/// Leaderboard rows shown under the game-over text
const LEADERBOARD_ROWS: usize = 5;
const LEADERBOARD_TOP: f32 = 110.0;
const LEADERBOARD_SPACING: f32 = 24.0;

/// Build the full frame: entities, HUD, and the game-over overlay if needed
pub fn build_scene(
    state: &GameState,
    high_scores: &HighScores,
    text: &TextRenderer,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(8192);

    let ball = &state.ball;
    vertices.extend(shapes::circle(
        ball.pos.round(),
        ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));
    vertices.extend(shapes::rect(&state.paddle.rect(), colors::PADDLE));
    for brick in &state.bricks {
        vertices.extend(shapes::rect(brick.bounds(), colors::BRICK));
    }

    let best = high_scores.best();
    vertices.extend(text.text(
        &format!("High Score: {}", best),
        10.0,
        10.0,
        HUD_SIZE,
        colors::TEXT,
    ));
    vertices.extend(text.text(
        &format!("Score: {}", state.score),
        10.0,
        40.0,
        HUD_SIZE,
        colors::TEXT,
    ));

    if state.game_over() {
        let cx = SCREEN_WIDTH / 2.0;
        let cy = SCREEN_HEIGHT / 2.0;
        vertices.extend(text.text_centered(
            "GAME OVER!",
            cx,
            cy,
            HUD_SIZE,
            colors::GAME_OVER,
        ));
        vertices.extend(text.text_centered(
            &format!("High Score: {}", best),
            cx,
            cy + 40.0,
            OVERLAY_SMALL_SIZE,
            colors::TEXT,
        ));
        vertices.extend(text.text_centered(
            "Press R to restart",
            cx,
            cy + 70.0,
            OVERLAY_SMALL_SIZE,
            colors::TEXT,
        ));

        for (i, line) in leaderboard_lines(high_scores).iter().enumerate() {
            vertices.extend(text.text_centered(
                line,
                cx,
                cy + LEADERBOARD_TOP + i as f32 * LEADERBOARD_SPACING,
                OVERLAY_SMALL_SIZE,
                colors::LEADERBOARD,
            ));
        }
    }

    vertices
}

/// "1.  350  (3 bricks)" for the best runs of this process
fn leaderboard_lines(high_scores: &HighScores) -> Vec<String> {
    high_scores
        .entries()
        .iter()
        .take(LEADERBOARD_ROWS)
        .enumerate()
        .map(|(i, entry)| {
            let bricks = match entry.bricks_broken {
                1 => "1 brick".to_string(),
                n => format!("{} bricks", n),
            };
            format!("{}.  {}  ({})", i + 1, entry.score, bricks)
        })
        .collect()
}
