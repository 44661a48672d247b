use serde::{Deserialize, Serialize};

use snake_core::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub cell_size_px: f32,
    pub show_grid_lines: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if !(8.0..=64.0).contains(&self.cell_size_px) {
            return Err("cell_size_px must be between 8 and 64".to_string());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size_px: 21.0,
            show_grid_lines: true,
        }
    }
}
