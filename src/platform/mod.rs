//! Platform abstraction layer
//!
//! Keeps the window system out of the game:
//! - Input events (winit keys mapped to game keys)
//! - Frame pacing (fixed 60 Hz)

pub mod input;
pub mod time;

pub use input::{InputEvent, Key};
pub use time::FramePacer;
