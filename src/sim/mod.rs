//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One fixed tick per frame
//! - Seeded RNG only, so a session is reproducible from its seed
//! - Stable iteration order (bricks in spawn order)

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_brick, ball_hits_paddle, brick_bounce, paddle_bounce};
pub use rect::Rect;
pub use state::{Ball, Brick, BrickEdge, GameEvent, GamePhase, GameState, Paddle, Steer};
pub use tick::{TickInput, check_collisions, generate_bricks, generate_single_brick, tick};
