//! Gameplay tuning
//!
//! Every coefficient the simulation uses, as data. The defaults reproduce the
//! classic feel; a partial JSON document overrides only the fields it names.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay coefficients consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ball ===
    pub ball_radius: f32,
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Fraction of speed kept after a side/top wall bounce
    pub wall_damping: f32,
    /// Upward speed at session start
    pub launch_speed: f32,
    /// Ball spawns this far above the bottom edge
    pub ball_spawn_offset: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    /// Paddle top sits this far above the bottom edge
    pub paddle_offset: f32,
    pub paddle_boost: f32,
    pub paddle_dead_zone: f32,
    pub paddle_edge_inset: f32,
    pub paddle_max_deflect: f32,
    pub paddle_spin: f32,
    /// Optional cap on upward speed after a paddle bounce (None = uncapped)
    pub max_launch_speed: Option<f32>,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_count: usize,
    pub brick_min_y: f32,
    pub placement_attempts: u32,
    pub edge_band: f32,
    pub bottom_retain_x: f32,
    pub bottom_retain_y: f32,
    pub top_boost: f32,

    // === Scoring ===
    pub paddle_hit_score: u64,
    pub brick_hit_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            gravity: GRAVITY,
            wall_damping: WALL_DAMPING,
            launch_speed: BALL_LAUNCH_SPEED,
            ball_spawn_offset: BALL_SPAWN_OFFSET,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_offset: PADDLE_OFFSET,
            paddle_boost: PADDLE_BOOST,
            paddle_dead_zone: PADDLE_DEAD_ZONE,
            paddle_edge_inset: PADDLE_EDGE_INSET,
            paddle_max_deflect: PADDLE_MAX_DEFLECT,
            paddle_spin: PADDLE_SPIN,
            max_launch_speed: None,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_count: BRICK_COUNT,
            brick_min_y: BRICK_MIN_Y,
            placement_attempts: BRICK_PLACEMENT_ATTEMPTS,
            edge_band: BRICK_EDGE_BAND,
            bottom_retain_x: BRICK_BOTTOM_RETAIN.0,
            bottom_retain_y: BRICK_BOTTOM_RETAIN.1,
            top_boost: BRICK_TOP_BOOST,

            paddle_hit_score: PADDLE_HIT_SCORE,
            brick_hit_score: BRICK_HIT_SCORE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Offset from paddle center at which the bounce angle saturates
    pub fn deflect_divisor(&self) -> f32 {
        self.paddle_width / 2.0 - self.paddle_edge_inset
    }

    /// Lowest y a brick's top edge may take (bricks stay in the upper half)
    pub fn brick_max_y(&self) -> f32 {
        (SCREEN_HEIGHT / 2.0).floor() - self.brick_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let t = Tuning::default();
        assert_eq!(t.ball_radius, 8.0);
        assert_eq!(t.gravity, 0.5);
        assert_eq!(t.paddle_width, 110.0);
        assert_eq!(t.ball_spawn_offset, 40.0);
        assert_eq!(t.paddle_offset, 30.0);
        assert_eq!(t.brick_count, 7);
        assert_eq!(t.placement_attempts, 100);
        assert!(t.max_launch_speed.is_none());
        assert!((t.deflect_divisor() - 50.0).abs() < f32::EPSILON);
        assert!((t.brick_max_y() - 325.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_json_overrides() {
        let t = Tuning::from_json(r#"{ "gravity": 0.25, "max_launch_speed": 40.0 }"#).unwrap();
        assert_eq!(t.gravity, 0.25);
        assert_eq!(t.max_launch_speed, Some(40.0));
        // Everything else untouched
        assert_eq!(t.paddle_speed, PADDLE_SPEED);
        assert_eq!(t.brick_hit_score, BRICK_HIT_SCORE);
    }

    #[test]
    fn test_json_round_trip() {
        let original = Tuning {
            brick_count: 3,
            ..Default::default()
        };
        let json = original.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), original);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Tuning::from_json("{ gravity: ").is_err());
        assert!(Tuning::from_json(r#"{ "brick_count": -1 }"#).is_err());
    }
}
