//! Brick Pinball - breakout bricks under a pinball-style gravity ball
//!
//! Core modules:
//! - `sim`: Simulation (ball physics, paddle, bricks, collisions, scoring)
//! - `game`: Session state machine (play, game over, restart, quit)
//! - `renderer`: wgpu rendering pipeline and scene tessellation
//! - `platform`: Input event abstraction and frame pacing
//! - `tuning`: Data-driven gameplay coefficients

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Flow, Game};
pub use highscores::HighScores;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical units, y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Target frame rate; one simulation tick per frame
    pub const FPS: u32 = 60;

    /// Window title
    pub const WINDOW_TITLE: &str = "Simple Pinball Machine";

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const GRAVITY: f32 = 0.5;
    /// Velocity retained (and reversed) on a side or top wall bounce
    pub const WALL_DAMPING: f32 = 0.5;
    /// Initial upward launch speed
    pub const BALL_LAUNCH_SPEED: f32 = 28.0;
    /// Ball spawns this far above the bottom edge
    pub const BALL_SPAWN_OFFSET: f32 = 40.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 110.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Paddle top sits this far above the bottom edge
    pub const PADDLE_OFFSET: f32 = 30.0;
    pub const PADDLE_SPEED: f32 = 12.0;

    /// Paddle bounce: vertical speed gain per hit (multiplicative, uncapped)
    pub const PADDLE_BOOST: f32 = 1.05;
    /// Hits within this many units of paddle center go straight up
    pub const PADDLE_DEAD_ZONE: f32 = 3.0;
    /// Inset from the paddle half-width at which the bounce angle saturates
    pub const PADDLE_EDGE_INSET: f32 = 5.0;
    /// Horizontal speed of a full-deflection bounce
    pub const PADDLE_MAX_DEFLECT: f32 = 9.0;
    /// Fraction of paddle velocity transferred to the ball as spin
    pub const PADDLE_SPIN: f32 = 0.3;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_COUNT: usize = 7;
    pub const BRICK_MIN_Y: f32 = 50.0;
    pub const BRICK_PLACEMENT_ATTEMPTS: u32 = 100;
    /// Depth of the top/bottom bands used to classify a brick hit
    pub const BRICK_EDGE_BAND: f32 = 5.0;
    /// Speed retention for hits on a brick's bottom edge (horizontal, vertical)
    pub const BRICK_BOTTOM_RETAIN: (f32, f32) = (0.7, 0.6);
    /// Speed boost for hits on a brick's top edge
    pub const BRICK_TOP_BOOST: f32 = 1.4;

    /// Scoring
    pub const PADDLE_HIT_SCORE: u64 = 5;
    pub const BRICK_HIT_SCORE: u64 = 100;
}
