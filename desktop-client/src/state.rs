use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use snake_core::game::{Direction, GameState, Point};

/// Commands flowing from any input source into the driver task.
#[derive(Debug, Clone, Copy)]
pub enum ClientCommand {
    Start,
    Restart,
    Turn { direction: Direction },
    /// Space-bar semantics: always leaves an active, running game.
    PrimaryAction,
}

/// The three overlay modes the presentation layer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Hidden,
    PressToStart,
    GameOver,
}

impl Overlay {
    pub fn for_state(state: &GameState) -> Self {
        if state.game_over {
            Overlay::GameOver
        } else if !state.running {
            Overlay::PressToStart
        } else {
            Overlay::Hidden
        }
    }
}

/// Snapshot handed to the renderer on every publish.
#[derive(Debug, Clone)]
pub struct RenderFrame {
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub overlay: Overlay,
    pub tick_interval_ms: u64,
}

impl RenderFrame {
    pub fn from_state(state: &GameState, tick_interval: Duration) -> Self {
        Self {
            snake: state.snake.body.iter().copied().collect(),
            food: state.food,
            score: state.score,
            overlay: Overlay::for_state(state),
            tick_interval_ms: tick_interval.as_millis() as u64,
        }
    }
}

/// Transient "+N" indicator raised when the score crosses a milestone.
#[derive(Debug, Clone, Copy)]
pub struct ScorePop {
    pub score: u32,
    pub raised_at: Instant,
}

/// Shared between the driver task (writer) and the egui thread (reader).
/// Holds published snapshots only, never the live game.
pub struct SharedState {
    frame: Arc<Mutex<Option<RenderFrame>>>,
    score_pop: Arc<Mutex<Option<ScorePop>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            frame: Arc::new(Mutex::new(None)),
            score_pop: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_frame(&self, frame: RenderFrame) {
        *self.frame.lock().unwrap() = Some(frame);
    }

    pub fn frame(&self) -> Option<RenderFrame> {
        self.frame.lock().unwrap().clone()
    }

    pub fn raise_score_pop(&self, score: u32, raised_at: Instant) {
        *self.score_pop.lock().unwrap() = Some(ScorePop { score, raised_at });
    }

    pub fn score_pop(&self) -> Option<ScorePop> {
        *self.score_pop.lock().unwrap()
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            frame: Arc::clone(&self.frame),
            score_pop: Arc::clone(&self.score_pop),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::game::SessionRng;

    #[test]
    fn test_overlay_modes() {
        let mut rng = SessionRng::new(42);
        let mut state = GameState::new(&mut rng, Instant::now());
        assert_eq!(Overlay::for_state(&state), Overlay::PressToStart);

        state.running = true;
        assert_eq!(Overlay::for_state(&state), Overlay::Hidden);

        state.running = false;
        state.game_over = true;
        assert_eq!(Overlay::for_state(&state), Overlay::GameOver);
    }

    #[test]
    fn test_frame_snapshots_segments_head_first() {
        let mut rng = SessionRng::new(42);
        let state = GameState::new(&mut rng, Instant::now());
        let frame = RenderFrame::from_state(&state, Duration::from_millis(200));

        assert_eq!(frame.snake.first(), Some(&state.snake.head()));
        assert_eq!(frame.snake.len(), state.snake.body.len());
        assert_eq!(frame.tick_interval_ms, 200);
        assert_eq!(frame.overlay, Overlay::PressToStart);
    }
}
