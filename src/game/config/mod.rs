//! Config Module
//!
//! Serde-loaded configuration for a play session: which level to build, which
//! control scheme maps the keys, and the physics and camera tuning.

pub mod game_config;

pub use game_config::GameConfig;

use crate::world::CatalogError;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    /// The selected level failed catalog validation
    #[error("Level rejected: {0}")]
    Catalog(#[from] CatalogError),
}
