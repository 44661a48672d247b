pub mod rules;

mod session_rng;
mod snake;
mod state;
mod types;

pub use session_rng::SessionRng;
pub use snake::Snake;
pub use state::{GameState, spawn_food};
pub use types::{Direction, GRID_SIZE, Point};
