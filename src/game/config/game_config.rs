//! Game configuration
//!
//! Every field has a default, so `{}` is a complete configuration and a file
//! only needs to name what it overrides:
//!
//! ```json
//! {
//!     "level": "spiral_tower",
//!     "control": "character_relative",
//!     "physics": { "gravity": 30.0 },
//!     "camera": { "smoothing": 0.12 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::physics::PhysicsTuning;
use crate::player::ControlScheme;
use crate::world::LevelId;

use super::ConfigError;

/// Top-level session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Procedural level recipe to build
    pub level: LevelId,
    /// How movement keys map to world directions
    pub control: ControlScheme,
    pub physics: PhysicsTuning,
    pub camera: CameraConfig,
}

impl GameConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Pretty-printed JSON of this configuration.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((field, reason)) = self.physics.first_violation() {
            return Err(ConfigError::Invalid { field, reason });
        }
        if let Some((field, reason)) = self.camera.first_violation() {
            return Err(ConfigError::Invalid { field, reason });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = GameConfig::from_json_str("{}").expect("defaults are valid");
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.level, LevelId::Classic);
        assert_eq!(config.control, ControlScheme::CameraRelative);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{ "level": "stepped_tower", "physics": { "gravity": 20.0 } }"#;
        let config = GameConfig::from_json_str(json).expect("valid override");
        assert_eq!(config.level, LevelId::SteppedTower);
        assert_eq!(config.physics.gravity, 20.0);
        assert_eq!(config.physics.jump_impulse, PhysicsTuning::default().jump_impulse);
    }

    #[test]
    fn test_invalid_value_names_field() {
        let json = r#"{ "physics": { "max_substep": 0.0 } }"#;
        match GameConfig::from_json_str(json) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "max_substep"),
            other => panic!("expected invalid field, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_level_is_parse_error() {
        let result = GameConfig::from_json_str(r#"{ "level": "moon_base" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = GameConfig {
            level: LevelId::ShapeGauntlet,
            control: ControlScheme::WorldRelative,
            ..GameConfig::default()
        };
        let json = config.to_json_string().expect("serializable");
        assert_eq!(GameConfig::from_json_str(&json).expect("parses back"), config);
    }
}
