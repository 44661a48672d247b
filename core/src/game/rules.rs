//! Fixed gameplay rules: pacing, food staleness and score milestones.
//!
//! Tuning lives here, decoupled from the scheduling machinery, so every
//! policy can be tested without arming a timer.

use std::time::Duration;

pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Tick interval while the snake is short.
pub const BASE_TICK: Duration = Duration::from_millis(200);

/// The game never runs faster than this.
pub const MIN_TICK: Duration = Duration::from_millis(50);

/// Snake length at which the game starts speeding up.
pub const SPEEDUP_START_LENGTH: usize = 8;

/// Interval reduction per segment beyond [`SPEEDUP_START_LENGTH`].
pub const SPEEDUP_STEP: Duration = Duration::from_millis(12);

/// Score required before stale food gets relocated.
pub const FOOD_REFRESH_MIN_SCORE: u32 = 20;

/// Age at which food on the board counts as stale.
pub const FOOD_STALE_AFTER: Duration = Duration::from_millis(5000);

/// Score pulses fire on every positive multiple of this.
pub const SCORE_MILESTONE_STEP: u32 = 5;

/// Tick interval for a snake of the given length.
pub fn tick_interval_for_length(length: usize) -> Duration {
    if length < SPEEDUP_START_LENGTH {
        return BASE_TICK;
    }
    let speedup = SPEEDUP_STEP * (length - SPEEDUP_START_LENGTH) as u32;
    match BASE_TICK.checked_sub(speedup) {
        Some(interval) => interval.max(MIN_TICK),
        None => MIN_TICK,
    }
}

pub fn is_score_milestone(score: u32) -> bool {
    score > 0 && score % SCORE_MILESTONE_STEP == 0
}
