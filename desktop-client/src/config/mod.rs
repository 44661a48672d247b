mod display_config;

pub use display_config::DisplayConfig;

use serde::{Deserialize, Serialize};

use snake_core::config::{ConfigManager, Validate};

/// Top-level client config. Gameplay is not configurable; only the
/// presentation knobs live here.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub display: DisplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.display.validate()
    }
}

pub fn load_config(file_path: &str) -> Result<Config, String> {
    ConfigManager::from_yaml_file(file_path).get_config()
}
