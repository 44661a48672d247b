use std::collections::{HashSet, VecDeque};

use super::rules::INITIAL_SNAKE_LENGTH;
use super::types::{Direction, Point};

/// Ordered segments with the head first, plus an occupancy index for
/// constant-time collision checks. `body` and `body_set` always hold the
/// same cells.
#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(head: Point, facing: Direction) -> Self {
        let trailing = match facing {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        };

        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        let mut segment = head;
        for _ in 0..INITIAL_SNAKE_LENGTH {
            body.push_back(segment);
            body_set.insert(segment);
            segment = segment.stepped(trailing);
        }

        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn contains(&self, cell: &Point) -> bool {
        self.body_set.contains(cell)
    }

    pub fn grow_head(&mut self, cell: Point) {
        self.body.push_front(cell);
        self.body_set.insert(cell);
    }

    pub fn drop_tail(&mut self) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.body_set.remove(&tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trails_away_from_facing() {
        let snake = Snake::new(Point::new(10, 10), Direction::Right);
        let segments: Vec<Point> = snake.body.iter().copied().collect();
        assert_eq!(
            segments,
            vec![Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)]
        );
    }

    #[test]
    fn test_new_wraps_trailing_segments() {
        let snake = Snake::new(Point::new(0, 5), Direction::Right);
        let segments: Vec<Point> = snake.body.iter().copied().collect();
        assert_eq!(
            segments,
            vec![Point::new(0, 5), Point::new(19, 5), Point::new(18, 5)]
        );
    }

    #[test]
    fn test_grow_and_drop_keep_index_in_sync() {
        let mut snake = Snake::new(Point::new(10, 10), Direction::Right);
        snake.grow_head(Point::new(11, 10));
        assert!(snake.contains(&Point::new(11, 10)));
        assert_eq!(snake.body.len(), 4);

        snake.drop_tail();
        assert!(!snake.contains(&Point::new(8, 10)));
        assert_eq!(snake.body.len(), 3);
        assert_eq!(snake.body.len(), snake.body_set.len());
    }
}
