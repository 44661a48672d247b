use std::time::Instant;

use crate::log;

use super::rules;
use super::session_rng::SessionRng;
use super::snake::Snake;
use super::types::{Direction, GRID_SIZE, Point};

/// Complete state of one game. Created fresh on start/restart, mutated once
/// per tick by [`GameState::update`], replaced wholesale on restart.
#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub food: Option<Point>,
    pub food_placed_at: Instant,
    pub score: u32,
    pub running: bool,
    pub game_over: bool,
}

impl GameState {
    pub fn new(rng: &mut SessionRng, now: Instant) -> Self {
        let mid = GRID_SIZE / 2;
        let snake = Snake::new(Point::new(mid, mid), Direction::Right);
        let food = spawn_food(&snake, rng);
        Self {
            snake,
            direction: Direction::Right,
            pending_direction: None,
            food,
            food_placed_at: now,
            score: 0,
            running: false,
            game_over: false,
        }
    }

    /// Queue a direction change for the next tick. A request for the exact
    /// opposite of the current direction is dropped.
    pub fn request_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Advance the game by one tick.
    pub fn update(&mut self, rng: &mut SessionRng, now: Instant) {
        if let Some(pending) = self.pending_direction.take()
            && !pending.is_opposite(&self.direction)
        {
            self.direction = pending;
        }

        let next_head = self.snake.head().stepped(self.direction);

        if self.snake.contains(&next_head) {
            // Any segment is fatal, the tail included.
            self.game_over = true;
            self.running = false;
            return;
        }

        self.snake.grow_head(next_head);

        if self.food == Some(next_head) {
            self.score += 1;
            self.food = spawn_food(&self.snake, rng);
            self.food_placed_at = now;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
        } else {
            self.snake.drop_tail();
        }

        if self.food.is_none() {
            // The snake covers the whole field; nothing left to chase.
            self.game_over = true;
            self.running = false;
        }
    }

    /// True once the score gate is reached and the current food has been on
    /// the board long enough to count as stale.
    pub fn food_is_stale(&self, now: Instant) -> bool {
        self.score >= rules::FOOD_REFRESH_MIN_SCORE
            && self.food.is_some()
            && now.duration_since(self.food_placed_at) >= rules::FOOD_STALE_AFTER
    }

    /// Move the food to a fresh open cell and restart its staleness clock.
    pub fn relocate_food(&mut self, rng: &mut SessionRng, now: Instant) {
        self.food = spawn_food(&self.snake, rng);
        self.food_placed_at = now;
    }
}

/// Pick a food cell uniformly among all cells the snake does not occupy, or
/// `None` when the field is fully covered. Every open cell must be equally
/// likely, so the open set is enumerated rather than sampled by rejection.
pub fn spawn_food(snake: &Snake, rng: &mut SessionRng) -> Option<Point> {
    let mut open = Vec::with_capacity(GRID_SIZE * GRID_SIZE - snake.body.len());
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let cell = Point::new(x, y);
            if !snake.contains(&cell) {
                open.push(cell);
            }
        }
    }

    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}
