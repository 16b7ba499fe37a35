//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Caps the loop at a fixed frame rate.
///
/// The event loop sleeps until `deadline()` and asks `ready()` whether a frame
/// is due. A loop that falls more than a frame behind drops the backlog
/// instead of running frames back to back.
///
/// A due frame stays latched until `take_frame()` claims it, so redraws the
/// windowing system asks for on its own never add simulation steps.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame: Duration,
    next: Instant,
    due: bool,
}

impl FramePacer {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            next: now,
            due: false,
        }
    }

    #[cfg(test)]
    fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// When the next frame is due
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// True (and schedules the following frame) if a frame is due at `now`
    pub fn ready(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.frame;
        if self.next <= now {
            self.next = now + self.frame;
        }
        self.due = true;
        true
    }

    /// Claim the latched frame; true at most once per `ready()`
    pub fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.due)
    }
}
