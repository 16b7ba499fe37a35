//! Session driver
//!
//! Owns the live session and the process-wide high scores, turns input events
//! into tick input, and runs the Playing -> GameOver -> (restart) state
//! machine. A restart builds a brand-new session; it never resets the old one.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::platform::{InputEvent, Key};
use crate::sim::{GameEvent, GamePhase, GameState, Steer, TickInput, tick};
use crate::{HighScores, Tuning};

/// What the frame's input asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue(TickInput),
    Restart,
    Quit,
}

pub struct Game {
    state: GameState,
    high_scores: HighScores,
    tuning: Tuning,
    /// Draws the seed of every new session
    seeder: Pcg32,
}

impl Game {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::with_high_scores(seed, tuning, HighScores::new())
    }

    pub fn with_high_scores(seed: u64, tuning: Tuning, high_scores: HighScores) -> Self {
        let mut seeder = Pcg32::seed_from_u64(seed);
        let state = GameState::new(seeder.next_u64(), tuning.clone());
        Self {
            state,
            high_scores,
            tuning,
            seeder,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.phase != GamePhase::Terminated
    }

    /// Interpret one frame's events in order.
    ///
    /// Quit wins immediately and drops the rest of the batch; restart is only
    /// honoured once the session is over. Steering keeps the last command.
    pub fn handle_input<I>(&self, events: I) -> Flow
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut input = TickInput::default();
        for event in events {
            match event {
                InputEvent::Quit => return Flow::Quit,
                InputEvent::KeyDown(Key::Left) => input.steer = Some(Steer::Left),
                InputEvent::KeyDown(Key::Right) => input.steer = Some(Steer::Right),
                InputEvent::KeyDown(Key::Restart) if self.state.game_over() => {
                    return Flow::Restart;
                }
                InputEvent::KeyUp(Key::Left | Key::Right) => input.steer = Some(Steer::Idle),
                _ => {}
            }
        }
        Flow::Continue(input)
    }

    /// Run one frame: input, then the simulation tick
    pub fn frame<I>(&mut self, events: I) -> Vec<GameEvent>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        if !self.is_running() {
            return Vec::new();
        }

        match self.handle_input(events) {
            Flow::Quit => {
                self.quit();
                Vec::new()
            }
            Flow::Restart => {
                self.restart();
                Vec::new()
            }
            Flow::Continue(input) => tick(&mut self.state, &input, &mut self.high_scores),
        }
    }

    /// Replace the finished session with a fresh one
    pub fn restart(&mut self) {
        let seed = self.seeder.next_u64();
        log::info!("Restarting (high score {})", self.high_scores.best());
        self.state = GameState::new(seed, self.tuning.clone());
    }

    pub fn quit(&mut self) {
        log::info!("Quit requested");
        self.state.phase = GamePhase::Terminated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const NO_EVENTS: [InputEvent; 0] = [];

    /// Park the ball where the paddle can't reach it and let it drop out
    fn lose_ball(game: &mut Game) -> Vec<GameEvent> {
        game.state_mut().ball.pos = Vec2::new(20.0, 600.0);
        game.state_mut().ball.vel = Vec2::new(0.0, 10.0);
        let mut events = Vec::new();
        for _ in 0..20 {
            events.extend(game.frame(NO_EVENTS));
            if game.phase() == GamePhase::GameOver {
                break;
            }
        }
        events
    }

    #[test]
    fn test_steering_moves_paddle() {
        let mut game = Game::new(1, Tuning::default());
        let start = game.state().paddle.pos.x;

        game.frame([InputEvent::KeyDown(Key::Right)]);
        assert_eq!(game.state().paddle.pos.x, start + 12.0);
        game.frame(NO_EVENTS);
        assert_eq!(game.state().paddle.pos.x, start + 24.0);

        game.frame([InputEvent::KeyUp(Key::Right)]);
        assert_eq!(game.state().paddle.pos.x, start + 24.0);

        game.frame([InputEvent::KeyDown(Key::Left)]);
        assert_eq!(game.state().paddle.pos.x, start + 12.0);
    }

    #[test]
    fn test_key_up_of_either_arrow_stops_paddle() {
        let game = Game::new(1, Tuning::default());
        let flow = game.handle_input([
            InputEvent::KeyDown(Key::Right),
            InputEvent::KeyUp(Key::Left),
        ]);
        assert_eq!(
            flow,
            Flow::Continue(TickInput {
                steer: Some(Steer::Idle)
            })
        );
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut game = Game::new(1, Tuning::default());
        let seed = game.state().seed;
        game.frame([InputEvent::KeyDown(Key::Restart)]);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.state().seed, seed);
        assert_eq!(game.state().time_ticks, 1);
    }

    #[test]
    fn test_quit_terminates_immediately() {
        let mut game = Game::new(1, Tuning::default());
        let paddle_x = game.state().paddle.pos.x;
        let events = game.frame([InputEvent::Quit, InputEvent::KeyDown(Key::Right)]);
        assert!(events.is_empty());
        assert_eq!(game.phase(), GamePhase::Terminated);
        assert!(!game.is_running());
        assert_eq!(game.state().time_ticks, 0);

        // Nothing runs after termination
        game.frame([InputEvent::KeyDown(Key::Right)]);
        assert_eq!(game.state().paddle.pos.x, paddle_x);
        assert_eq!(game.state().time_ticks, 0);
    }

    #[test]
    fn test_game_over_then_restart_keeps_high_score() {
        let mut game = Game::new(5, Tuning::default());
        game.state_mut().score = 250;

        let events = lose_ball(&mut game);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::GameOver {
                score: 250,
                new_high_score: true,
                ..
            }
        )));
        assert_eq!(game.high_scores().best(), 250);

        let old_seed = game.state().seed;
        game.frame([InputEvent::KeyDown(Key::Restart)]);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.state().score, 0);
        assert_ne!(game.state().seed, old_seed);
        assert_eq!(game.state().time_ticks, 0);
        assert!(game.state().ball.active);

        // A worse second run leaves the high score alone
        game.state_mut().score = 100;
        lose_ball(&mut game);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert_eq!(game.high_scores().best(), 250);
        assert_eq!(game.high_scores().sessions(), 2);
    }

    #[test]
    fn test_injected_high_score() {
        let mut game = Game::with_high_scores(2, Tuning::default(), HighScores::with_best(10_000));
        game.state_mut().score = 500;
        lose_ball(&mut game);
        assert_eq!(game.high_scores().best(), 10_000);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = Game::new(77, Tuning::default());
        let b = Game::new(77, Tuning::default());
        assert_eq!(a.state().bricks, b.state().bricks);
    }
}
