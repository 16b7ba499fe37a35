//! Collision detection and response
//!
//! All tests are axis-aligned: the paddle test checks the ball center against
//! the paddle span, the brick test checks the ball center against the brick
//! inflated by the ball radius. Responses are simple velocity rewrites, not
//! surface-normal reflections.

use glam::Vec2;

use super::rect::Rect;
use super::state::BrickEdge;
use crate::Tuning;

/// Ball/paddle overlap: center strictly inside the paddle's horizontal span,
/// and within one radius of its top or bottom.
pub fn ball_hits_paddle(ball_pos: Vec2, ball_radius: f32, paddle: &Rect) -> bool {
    ball_pos.x > paddle.left()
        && ball_pos.x < paddle.right()
        && ball_pos.y + ball_radius > paddle.top()
        && ball_pos.y - ball_radius < paddle.bottom()
}

/// Horizontal speed from where the ball met the paddle, before spin.
///
/// `offset` is ball x minus paddle center. Inside the dead zone the ball goes
/// straight up; elsewhere the deflection grows linearly and saturates at
/// `paddle_max_deflect` near the paddle ends.
pub fn paddle_deflection(offset: f32, tuning: &Tuning) -> f32 {
    if offset.abs() <= tuning.paddle_dead_zone {
        return 0.0;
    }
    let factor = (offset / tuning.deflect_divisor()).clamp(-1.0, 1.0);
    factor * tuning.paddle_max_deflect
}

/// Velocity after a paddle bounce: always upward and faster, angled by the
/// contact offset, plus spin from the paddle's own motion.
pub fn paddle_bounce(vel: Vec2, offset: f32, paddle_vel: f32, tuning: &Tuning) -> Vec2 {
    let mut vy = -vel.y.abs() * tuning.paddle_boost;
    if let Some(cap) = tuning.max_launch_speed {
        vy = vy.max(-cap);
    }
    let vx = paddle_deflection(offset, tuning) + paddle_vel * tuning.paddle_spin;
    Vec2::new(vx, vy)
}

/// Ball/brick overlap: center strictly inside the brick grown by the radius
pub fn ball_hits_brick(ball_pos: Vec2, ball_radius: f32, brick: &Rect) -> bool {
    brick.inflate(ball_radius).contains_open(ball_pos)
}

/// Classify a hit by the ball's height relative to the brick.
/// The bottom band wins when a short brick puts the ball in both bands.
pub fn classify_brick_edge(ball_y: f32, brick: &Rect, band: f32) -> BrickEdge {
    if ball_y > brick.bottom() - band {
        BrickEdge::Bottom
    } else if ball_y < brick.top() + band {
        BrickEdge::Top
    } else {
        BrickEdge::Side
    }
}

/// Velocity after striking a brick.
///
/// Both components reverse. A hit from below then redistributes the speed with
/// asymmetric retention, a hit from above is boosted, a side hit is left as is.
pub fn brick_bounce(vel: Vec2, edge: BrickEdge, tuning: &Tuning) -> Vec2 {
    let reversed = -vel;
    match edge {
        BrickEdge::Bottom => {
            let speed = reversed.length();
            if speed > 0.0 {
                let dir = reversed / speed;
                Vec2::new(
                    dir.x * speed * tuning.bottom_retain_x,
                    dir.y * speed * tuning.bottom_retain_y,
                )
            } else {
                reversed
            }
        }
        BrickEdge::Top => reversed * tuning.top_boost,
        BrickEdge::Side => reversed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Rect {
        Rect::new(345.0, 670.0, 110.0, 12.0)
    }

    #[test]
    fn test_paddle_hit_inside_span() {
        assert!(ball_hits_paddle(Vec2::new(400.0, 665.0), 8.0, &paddle()));
        assert!(ball_hits_paddle(Vec2::new(346.0, 680.0), 8.0, &paddle()));
    }

    #[test]
    fn test_paddle_miss_on_exact_edge() {
        // Strict horizontal bounds
        assert!(!ball_hits_paddle(Vec2::new(345.0, 665.0), 8.0, &paddle()));
        assert!(!ball_hits_paddle(Vec2::new(455.0, 665.0), 8.0, &paddle()));
    }

    #[test]
    fn test_paddle_miss_above_and_below() {
        assert!(!ball_hits_paddle(Vec2::new(400.0, 662.0), 8.0, &paddle()));
        assert!(!ball_hits_paddle(Vec2::new(400.0, 690.0), 8.0, &paddle()));
        assert!(ball_hits_paddle(Vec2::new(400.0, 689.0), 8.0, &paddle()));
    }

    #[test]
    fn test_dead_center_goes_straight_up() {
        let t = Tuning::default();
        assert_eq!(paddle_deflection(0.0, &t), 0.0);
        assert_eq!(paddle_deflection(3.0, &t), 0.0);
        assert_eq!(paddle_deflection(-3.0, &t), 0.0);
        assert!(paddle_deflection(3.5, &t) > 0.0);
    }

    #[test]
    fn test_edge_hit_saturates() {
        let t = Tuning::default();
        assert!((paddle_deflection(50.0, &t) - 9.0).abs() < 1e-5);
        assert!((paddle_deflection(54.9, &t) - 9.0).abs() < 1e-5);
        assert!((paddle_deflection(-54.9, &t) + 9.0).abs() < 1e-5);
        assert!((paddle_deflection(25.0, &t) - 4.5).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_bounce_forces_upward_with_boost() {
        let t = Tuning::default();
        let v = paddle_bounce(Vec2::new(1.0, 10.0), 0.0, 0.0, &t);
        assert!((v.y + 10.5).abs() < 1e-5);
        assert_eq!(v.x, 0.0);

        // Already moving up: still upward, still boosted
        let v = paddle_bounce(Vec2::new(0.0, -10.0), 0.0, 0.0, &t);
        assert!((v.y + 10.5).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_spin_adds_to_deflection() {
        let t = Tuning::default();
        let v = paddle_bounce(Vec2::new(0.0, 10.0), 0.0, 12.0, &t);
        assert!((v.x - 3.6).abs() < 1e-5);
        let v = paddle_bounce(Vec2::new(0.0, 10.0), 50.0, -12.0, &t);
        assert!((v.x - 5.4).abs() < 1e-5);
    }

    #[test]
    fn test_optional_launch_cap() {
        let t = Tuning {
            max_launch_speed: Some(20.0),
            ..Default::default()
        };
        let v = paddle_bounce(Vec2::new(0.0, 30.0), 0.0, 0.0, &t);
        assert_eq!(v.y, -20.0);
    }

    #[test]
    fn test_brick_hit_uses_inflated_box() {
        let brick = Rect::new(100.0, 100.0, 40.0, 25.0);
        assert!(ball_hits_brick(Vec2::new(93.0, 110.0), 8.0, &brick));
        assert!(!ball_hits_brick(Vec2::new(92.0, 110.0), 8.0, &brick));
        assert!(ball_hits_brick(Vec2::new(120.0, 132.0), 8.0, &brick));
        assert!(!ball_hits_brick(Vec2::new(120.0, 133.0), 8.0, &brick));
    }

    #[test]
    fn test_classify_edges() {
        let brick = Rect::new(100.0, 100.0, 40.0, 25.0);
        assert_eq!(classify_brick_edge(121.0, &brick, 5.0), BrickEdge::Bottom);
        assert_eq!(classify_brick_edge(104.0, &brick, 5.0), BrickEdge::Top);
        assert_eq!(classify_brick_edge(112.0, &brick, 5.0), BrickEdge::Side);
        // Exactly on the band boundary is not inside the band
        assert_eq!(classify_brick_edge(120.0, &brick, 5.0), BrickEdge::Side);
    }

    #[test]
    fn test_brick_bottom_retention() {
        let t = Tuning::default();
        let v = brick_bounce(Vec2::new(3.0, -4.0), BrickEdge::Bottom, &t);
        assert!((v.x + 2.1).abs() < 1e-5);
        assert!((v.y - 2.4).abs() < 1e-5);
    }

    #[test]
    fn test_brick_bottom_at_rest_is_untouched() {
        let t = Tuning::default();
        assert_eq!(brick_bounce(Vec2::ZERO, BrickEdge::Bottom, &t), Vec2::ZERO);
    }

    #[test]
    fn test_brick_top_boost_and_side() {
        let t = Tuning::default();
        let v = brick_bounce(Vec2::new(2.0, 5.0), BrickEdge::Top, &t);
        assert!((v.x + 2.8).abs() < 1e-5);
        assert!((v.y + 7.0).abs() < 1e-5);
        assert_eq!(
            brick_bounce(Vec2::new(2.0, 5.0), BrickEdge::Side, &t),
            Vec2::new(-2.0, -5.0)
        );
    }
}
