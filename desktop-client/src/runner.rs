use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::time::{Interval, interval_at};

use snake_core::game::rules;
use snake_core::game::{GameState, SessionRng};
use snake_core::log;

use crate::presenter::FramePresenter;
use crate::state::{ClientCommand, RenderFrame};

/// Owns the live game: the single `GameState`, the session RNG, the
/// currently scheduled tick interval and the score milestone tracker.
pub struct GameDriver {
    state: GameState,
    rng: SessionRng,
    tick_interval: Duration,
    last_score: u32,
}

impl GameDriver {
    pub fn new(seed: u64, now: Instant) -> Self {
        let mut rng = SessionRng::new(seed);
        let state = GameState::new(&mut rng, now);
        Self {
            state,
            rng,
            tick_interval: rules::BASE_TICK,
            last_score: 0,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn frame(&self) -> RenderFrame {
        RenderFrame::from_state(&self.state, self.tick_interval)
    }

    /// One timer tick. Returns true when the tick interval changed and the
    /// caller must re-arm its timer.
    pub fn run_tick<P: FramePresenter>(&mut self, presenter: &P, now: Instant) -> bool {
        if !self.state.running {
            return false;
        }

        if self.state.food_is_stale(now) {
            self.state.relocate_food(&mut self.rng, now);
            log!("Relocated stale food");
        }

        self.state.update(&mut self.rng, now);

        if self.state.game_over {
            log!("Game over. Final score: {}", self.state.score);
        }

        let next_interval = rules::tick_interval_for_length(self.state.snake.body.len());
        let rearm = next_interval != self.tick_interval;
        self.tick_interval = next_interval;

        if self.state.score != self.last_score {
            if rules::is_score_milestone(self.state.score) {
                presenter.score_milestone(self.state.score, now);
            }
            self.last_score = self.state.score;
        }

        presenter.present(self.frame());
        rearm
    }

    /// Apply one input command. Returns true when the timer must be
    /// re-armed; only a restart does that.
    pub fn handle_command<P: FramePresenter>(
        &mut self,
        presenter: &P,
        command: ClientCommand,
        now: Instant,
    ) -> bool {
        let rearm = match command {
            ClientCommand::Start => {
                self.start();
                false
            }
            ClientCommand::Restart => {
                self.restart(now);
                true
            }
            ClientCommand::Turn { direction } => {
                if !self.state.running && !self.state.game_over {
                    self.start();
                }
                self.state.request_direction(direction);
                false
            }
            ClientCommand::PrimaryAction => {
                let restarted = if self.state.running || self.state.game_over {
                    self.restart(now);
                    true
                } else {
                    false
                };
                self.start();
                restarted
            }
        };

        presenter.present(self.frame());
        rearm
    }

    fn start(&mut self) {
        if !self.state.game_over {
            self.state.running = true;
        }
    }

    fn restart(&mut self, now: Instant) {
        self.state = GameState::new(&mut self.rng, now);
        self.tick_interval = rules::BASE_TICK;
        self.last_score = 0;
        log!("Game restarted");
    }
}

/// Drive the game until the UI side goes away. Exactly one timer is armed
/// at any moment: reassigning `timer` drops the previous schedule.
pub async fn run_game_loop<P: FramePresenter>(
    presenter: P,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    seed: u64,
) {
    log!("Session seed: {}", seed);

    let mut driver = GameDriver::new(seed, Instant::now());
    presenter.present(driver.frame());

    let mut timer = arm_timer(driver.tick_interval());

    loop {
        tokio::select! {
            _ = timer.tick() => {
                if driver.run_tick(&presenter, Instant::now()) {
                    timer = arm_timer(driver.tick_interval());
                }
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                if driver.handle_command(&presenter, command, Instant::now()) {
                    timer = arm_timer(driver.tick_interval());
                }
            }
        }
    }
}

/// First tick lands a full period from now.
fn arm_timer(period: Duration) -> Interval {
    interval_at(tokio::time::Instant::now() + period, period)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use snake_core::game::{Direction, Point, Snake};

    use super::*;
    use crate::state::Overlay;

    #[derive(Default)]
    struct RecordingPresenter {
        frames: RefCell<Vec<RenderFrame>>,
        milestones: RefCell<Vec<u32>>,
    }

    impl FramePresenter for RecordingPresenter {
        fn present(&self, frame: RenderFrame) {
            self.frames.borrow_mut().push(frame);
        }

        fn score_milestone(&self, score: u32, _now: Instant) {
            self.milestones.borrow_mut().push(score);
        }
    }

    fn snake_in_row(head_x: usize, length: usize) -> Snake {
        let cells: Vec<Point> = (0..length)
            .map(|i| Point::new(head_x - i, 10))
            .collect();
        Snake {
            body: cells.iter().copied().collect(),
            body_set: cells.iter().copied().collect(),
        }
    }

    fn driver() -> (GameDriver, RecordingPresenter, Instant) {
        (
            GameDriver::new(42, Instant::now()),
            RecordingPresenter::default(),
            Instant::now(),
        )
    }

    #[test]
    fn test_tick_is_a_noop_until_started() {
        let (mut driver, presenter, now) = driver();

        assert!(!driver.run_tick(&presenter, now));
        assert!(presenter.frames.borrow().is_empty());
        assert_eq!(driver.state.snake.head(), Point::new(10, 10));
    }

    #[test]
    fn test_tick_advances_and_publishes() {
        let (mut driver, presenter, now) = driver();
        driver.state.running = true;
        driver.state.food = Some(Point::new(0, 0));

        assert!(!driver.run_tick(&presenter, now));

        let frames = presenter.frames.borrow();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].snake[0], Point::new(11, 10));
        assert_eq!(frames[0].overlay, Overlay::Hidden);
    }

    #[test]
    fn test_interval_rearms_when_length_crosses_threshold() {
        let (mut driver, presenter, now) = driver();
        driver.state.running = true;

        // Length 8 still runs at the base interval.
        driver.state.snake = snake_in_row(10, 7);
        driver.state.food = Some(Point::new(11, 10));
        assert!(!driver.run_tick(&presenter, now));
        assert_eq!(driver.tick_interval(), rules::BASE_TICK);

        // Growing to 9 is the first speed-up.
        driver.state.food = Some(Point::new(12, 10));
        assert!(driver.run_tick(&presenter, now));
        assert_eq!(driver.tick_interval(), Duration::from_millis(188));

        // No change while the length holds steady.
        driver.state.food = Some(Point::new(0, 0));
        assert!(!driver.run_tick(&presenter, now));
        assert_eq!(driver.tick_interval(), Duration::from_millis(188));
    }

    #[test]
    fn test_milestone_fires_once_per_crossing() {
        let (mut driver, presenter, now) = driver();
        driver.state.running = true;
        driver.state.score = 4;
        driver.last_score = 4;
        driver.state.food = Some(Point::new(11, 10));

        driver.run_tick(&presenter, now);
        assert_eq!(*presenter.milestones.borrow(), vec![5]);

        // Further ticks without a score change stay silent.
        driver.state.food = Some(Point::new(0, 0));
        driver.run_tick(&presenter, now);
        assert_eq!(*presenter.milestones.borrow(), vec![5]);

        // A non-milestone score change stays silent too.
        driver.state.food = Some(driver.state.snake.head().stepped(Direction::Right));
        driver.run_tick(&presenter, now);
        assert_eq!(driver.state.score, 6);
        assert_eq!(*presenter.milestones.borrow(), vec![5]);
    }

    #[test]
    fn test_stale_food_is_relocated_before_the_move() {
        let (mut driver, presenter, now) = driver();
        driver.state.running = true;
        driver.state.score = rules::FOOD_REFRESH_MIN_SCORE;
        driver.last_score = driver.state.score;
        driver.state.food = Some(Point::new(0, 0));
        driver.state.food_placed_at = now;

        let later = now + rules::FOOD_STALE_AFTER;
        driver.run_tick(&presenter, later);

        // The staleness clock restarted at this tick.
        assert_eq!(driver.state.food_placed_at, later);
        assert!(!driver.state.food_is_stale(later));
    }

    #[test]
    fn test_fresh_food_is_left_alone() {
        let (mut driver, presenter, now) = driver();
        driver.state.running = true;
        driver.state.score = rules::FOOD_REFRESH_MIN_SCORE;
        driver.last_score = driver.state.score;
        driver.state.food = Some(Point::new(0, 0));
        driver.state.food_placed_at = now;

        driver.run_tick(&presenter, now + Duration::from_millis(100));

        assert_eq!(driver.state.food, Some(Point::new(0, 0)));
    }

    #[test]
    fn test_turn_implicitly_starts_a_fresh_game() {
        let (mut driver, presenter, now) = driver();

        driver.handle_command(
            &presenter,
            ClientCommand::Turn {
                direction: Direction::Up,
            },
            now,
        );

        assert!(driver.state.running);
        assert_eq!(driver.state.pending_direction, Some(Direction::Up));
        assert_eq!(
            presenter.frames.borrow().last().unwrap().overlay,
            Overlay::Hidden
        );
    }

    #[test]
    fn test_turn_does_not_revive_a_finished_game() {
        let (mut driver, presenter, now) = driver();
        driver.state.game_over = true;

        driver.handle_command(
            &presenter,
            ClientCommand::Turn {
                direction: Direction::Up,
            },
            now,
        );

        assert!(!driver.state.running);
        assert!(driver.state.game_over);
    }

    #[test]
    fn test_primary_action_starts_an_idle_game() {
        let (mut driver, presenter, now) = driver();

        let rearm = driver.handle_command(&presenter, ClientCommand::PrimaryAction, now);

        assert!(!rearm);
        assert!(driver.state.running);
        assert!(!driver.state.game_over);
    }

    #[test]
    fn test_primary_action_restarts_a_running_game() {
        let (mut driver, presenter, now) = driver();
        driver.state.running = true;
        driver.state.score = 7;
        driver.tick_interval = Duration::from_millis(100);

        let rearm = driver.handle_command(&presenter, ClientCommand::PrimaryAction, now);

        assert!(rearm);
        assert!(driver.state.running);
        assert_eq!(driver.state.score, 0);
        assert_eq!(driver.state.snake.body.len(), 3);
        assert_eq!(driver.tick_interval(), rules::BASE_TICK);
    }

    #[test]
    fn test_primary_action_restarts_after_game_over() {
        let (mut driver, presenter, now) = driver();
        driver.state.game_over = true;
        driver.state.running = false;

        let rearm = driver.handle_command(&presenter, ClientCommand::PrimaryAction, now);

        assert!(rearm);
        assert!(driver.state.running);
        assert!(!driver.state.game_over);
        assert_eq!(driver.state.score, 0);
    }

    #[test]
    fn test_start_is_a_noop_after_game_over() {
        let (mut driver, presenter, now) = driver();
        driver.state.game_over = true;

        driver.handle_command(&presenter, ClientCommand::Start, now);

        assert!(!driver.state.running);
        assert_eq!(
            presenter.frames.borrow().last().unwrap().overlay,
            Overlay::GameOver
        );
    }

    #[test]
    fn test_restart_resets_everything() {
        let (mut driver, presenter, now) = driver();
        driver.state.running = true;
        driver.state.score = 12;
        driver.last_score = 12;
        driver.tick_interval = Duration::from_millis(56);

        let rearm = driver.handle_command(&presenter, ClientCommand::Restart, now);

        assert!(rearm);
        assert!(!driver.state.running);
        assert!(!driver.state.game_over);
        assert_eq!(driver.state.score, 0);
        assert_eq!(driver.state.snake.body.len(), 3);
        assert_eq!(driver.tick_interval(), rules::BASE_TICK);
        assert_eq!(driver.last_score, 0);
        assert_eq!(
            presenter.frames.borrow().last().unwrap().overlay,
            Overlay::PressToStart
        );
    }

    #[test]
    fn test_milestone_tracker_survives_restart() {
        // After a restart the tracker starts from zero again: reaching 5 in
        // the next session pulses again.
        let (mut driver, presenter, now) = driver();
        driver.state.running = true;
        driver.state.score = 4;
        driver.last_score = 4;
        driver.state.food = Some(Point::new(11, 10));
        driver.run_tick(&presenter, now);
        assert_eq!(*presenter.milestones.borrow(), vec![5]);

        driver.handle_command(&presenter, ClientCommand::PrimaryAction, now);
        driver.state.score = 4;
        driver.last_score = 4;
        driver.state.food = Some(Point::new(11, 10));
        driver.run_tick(&presenter, now);
        assert_eq!(*presenter.milestones.borrow(), vec![5, 5]);
    }
}
