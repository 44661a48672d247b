/// Side length of the square playing field, in cells.
pub const GRID_SIZE: usize = 20;

/// A grid cell; both coordinates are in `[0, GRID_SIZE)` and `y` grows
/// downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The neighboring cell in `direction`, wrapping across the field edges.
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, wrapping_dec(self.y)),
            Direction::Down => Self::new(self.x, wrapping_inc(self.y)),
            Direction::Left => Self::new(wrapping_dec(self.x), self.y),
            Direction::Right => Self::new(wrapping_inc(self.x), self.y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

fn wrapping_inc(value: usize) -> usize {
    if value + 1 >= GRID_SIZE { 0 } else { value + 1 }
}

fn wrapping_dec(value: usize) -> usize {
    if value == 0 { GRID_SIZE - 1 } else { value - 1 }
}
