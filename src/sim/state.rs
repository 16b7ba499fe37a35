//! Game state and core simulation types
//!
//! A session owns one ball, one paddle and the live bricks. Entities only
//! mutate themselves; cross-entity reads and writes happen in `tick`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::tick::generate_bricks;
use crate::Tuning;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball in play
    Playing,
    /// Ball fell off the bottom; waiting for restart or quit
    GameOver,
    /// Player quit; the session will never tick again
    Terminated,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PaddleHit { offset: f32 },
    BrickHit { brick: Rect, edge: BrickEdge },
    BrickRespawned { brick: Rect },
    /// Placement gave up after its retry budget; the field shrank by one
    BrickLost,
    GameOver {
        score: u64,
        bricks_broken: u32,
        paddle_hits: u32,
        new_high_score: bool,
        rank: Option<usize>,
    },
}

/// Which part of a brick the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickEdge {
    Bottom,
    Top,
    Side,
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub gravity: f32,
    pub wall_damping: f32,
    /// Cleared once, when the ball drops below the playfield
    pub active: bool,
}

impl Ball {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
            gravity: tuning.gravity,
            wall_damping: tuning.wall_damping,
            active: true,
        }
    }

    /// Ball resting above the paddle, launched straight up
    pub fn launched(tuning: &Tuning) -> Self {
        let mut ball = Self::new(
            Vec2::new(
                (SCREEN_WIDTH / 2.0).floor(),
                SCREEN_HEIGHT - tuning.ball_spawn_offset,
            ),
            tuning,
        );
        ball.vel = Vec2::new(0.0, -tuning.launch_speed);
        ball
    }

    /// Advance one fixed timestep: gravity, Euler step, wall bounces, floor exit.
    /// Does nothing once the ball is inactive.
    pub fn update(&mut self) {
        if !self.active {
            return;
        }

        self.vel.y += self.gravity;
        self.pos += self.vel;

        // Side walls
        if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.vel.x = -self.vel.x * self.wall_damping;
        }
        if self.pos.x + self.radius > SCREEN_WIDTH {
            self.pos.x = SCREEN_WIDTH - self.radius;
            self.vel.x = -self.vel.x * self.wall_damping;
        }

        // Ceiling
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y * self.wall_damping;
        }

        // No floor: falling past it ends the ball
        if self.pos.y > SCREEN_HEIGHT {
            self.active = false;
        }
    }

    /// Bounding box (center ± radius)
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// Paddle steering command; the only way to set paddle velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    Left,
    #[default]
    Idle,
    Right,
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Top-left corner; y never changes
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    speed: f32,
    vel_x: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed: tuning.paddle_speed,
            vel_x: 0.0,
        }
    }

    /// Paddle horizontally centered near the bottom edge
    pub fn centered(tuning: &Tuning) -> Self {
        let x = (SCREEN_WIDTH / 2.0).floor() - (tuning.paddle_width / 2.0).floor();
        Self::new(Vec2::new(x, SCREEN_HEIGHT - tuning.paddle_offset), tuning)
    }

    pub fn steer(&mut self, steer: Steer) {
        self.vel_x = match steer {
            Steer::Left => -self.speed,
            Steer::Idle => 0.0,
            Steer::Right => self.speed,
        };
    }

    /// Current horizontal velocity (read for spin)
    pub fn velocity(&self) -> f32 {
        self.vel_x
    }

    /// Move by current velocity, then clamp fully inside the playfield
    pub fn update(&mut self) {
        self.pos.x += self.vel_x;
        let max_x = (SCREEN_WIDTH - self.width).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// A static brick; destroyed on the first hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub rect: Rect,
}

impl Brick {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
        }
    }

    pub fn bounds(&self) -> &Rect {
        &self.rect
    }
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session's layout was drawn from
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live bricks in spawn order
    pub bricks: Vec<Brick>,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub bricks_broken: u32,
    pub paddle_hits: u32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh session: centered paddle, ball launched upward, bricks seeded
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self::empty(seed, tuning);
        generate_bricks(&mut state);
        log::info!(
            "Session started (seed {}, {} bricks placed)",
            seed,
            state.bricks.len()
        );
        state
    }

    /// Session without bricks (for scripted scenarios)
    pub fn empty(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            ball: Ball::launched(&tuning),
            paddle: Paddle::centered(&tuning),
            bricks: Vec::new(),
            tuning,
            time_ticks: 0,
            bricks_broken: 0,
            paddle_hits: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
