use serde::{Deserialize, Serialize};

use crate::config::{check_range, Validate};

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;
pub const MIN_FIELD_SIZE: u16 = 4;
pub const MAX_INITIAL_FIELD_SIZE: u16 = 256;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutopilotKind {
    /// Row-by-row sweep of the board.
    #[default]
    Sweep,
    /// Heads for the nearest food, avoiding walls and its own body.
    FoodSeeker,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    pub initial_size: u16,
    pub initial_speed: u8,
    pub wrap: bool,
    pub special_food_chance: f64,
    pub food_spawn_chance: f64,
    /// Grid cells per guaranteed food item.
    pub cells_per_food: u32,
    pub autopilot: AutopilotKind,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            initial_size: 12,
            initial_speed: MIN_SPEED,
            wrap: false,
            special_food_chance: 0.1,
            food_spawn_chance: 0.2,
            cells_per_food: 100,
            autopilot: AutopilotKind::Sweep,
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        check_range("initial_size", self.initial_size, MIN_FIELD_SIZE..=MAX_INITIAL_FIELD_SIZE)?;
        if self.initial_size % 2 != 0 {
            return Err(format!("initial_size must be even, got {}", self.initial_size));
        }
        check_range("initial_speed", self.initial_speed, MIN_SPEED..=MAX_SPEED)?;
        check_range("special_food_chance", self.special_food_chance, 0.0..=1.0)?;
        check_range("food_spawn_chance", self.food_spawn_chance, 0.0..=1.0)?;
        if self.cells_per_food == 0 {
            return Err("cells_per_food must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_odd_size_rejected() {
        let settings = SnakeSettings {
            initial_size: 13,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let too_small = SnakeSettings {
            initial_size: 2,
            ..SnakeSettings::default()
        };
        assert!(too_small.validate().is_err());

        let too_fast = SnakeSettings {
            initial_speed: 11,
            ..SnakeSettings::default()
        };
        let err = too_fast.validate().unwrap_err();
        assert!(err.contains("initial_speed"));

        let bad_chance = SnakeSettings {
            food_spawn_chance: 1.5,
            ..SnakeSettings::default()
        };
        assert!(bad_chance.validate().is_err());

        let no_density = SnakeSettings {
            cells_per_food: 0,
            ..SnakeSettings::default()
        };
        assert!(no_density.validate().is_err());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: SnakeSettings = serde_yaml_ng::from_str("wrap: true\n").unwrap();
        assert!(settings.wrap);
        assert_eq!(settings.initial_size, 12);
        assert_eq!(settings.autopilot, AutopilotKind::Sweep);
    }
}
