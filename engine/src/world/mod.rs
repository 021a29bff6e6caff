//! World Module
//!
//! Level geometry: obstacle descriptors, the validated obstacle catalog with
//! its vertical broad phase, and the procedural level recipes.

pub mod catalog;
pub mod height_index;
pub mod levels;
pub mod obstacle;

pub use catalog::{CatalogError, ObstacleCatalog};
pub use height_index::HeightIndex;
pub use levels::{LevelId, SPAWN_POINT};
pub use obstacle::{Motion, Obstacle, ObstacleKind, ObstaclePose};
