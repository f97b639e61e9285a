use common::config::{check_range, Validate};
use serde::{Deserialize, Serialize};

const MIN_SIDE: f32 = 320.0;
const MAX_SIDE: f32 = 4096.0;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    /// Show the key binding cheat sheet next to the board.
    pub show_help: bool,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        check_range("window width", self.width, MIN_SIDE..=MAX_SIDE)?;
        check_range("window height", self.height, MIN_SIDE..=MAX_SIDE)?;
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 760.0,
            show_help: true,
        }
    }
}
