//! Obstacle Catalog
//!
//! The ordered, read-only set of obstacles for one level plus its spawn point.
//! Built once at level load and validated up front so the per-step code never
//! meets malformed geometry.
//!
//! Catalog order matters: when several platforms can support the body in the
//! same step, the earliest entry wins.

use thiserror::Error;

use crate::physics::types::Vec3;

use super::height_index::{DEFAULT_BUCKET_HEIGHT, HeightIndex};
use super::obstacle::{Obstacle, ObstacleKind};

/// Rejected obstacle data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("obstacle {index}: {shape} has a non-positive or non-finite extent")]
    NonPositiveExtent { index: usize, shape: &'static str },
    #[error("obstacle {index}: position, rotation or motion is not finite")]
    NonFinite { index: usize },
    #[error("obstacle {index}: motion does not fit a {kind}")]
    MotionMismatch { index: usize, kind: &'static str },
    #[error("spawn point is not finite")]
    NonFiniteSpawn,
}

/// Validated obstacle set for one level.
#[derive(Debug, Clone)]
pub struct ObstacleCatalog {
    obstacles: Vec<Obstacle>,
    spawn: Vec3,
    index: HeightIndex,
    lowest_support_y: Option<f32>,
}

impl ObstacleCatalog {
    /// Validate and index `obstacles`.
    ///
    /// # Errors
    ///
    /// Returns the first invalid obstacle: non-positive extents, non-finite
    /// placement, or a motion that does not match its kind.
    pub fn new(obstacles: Vec<Obstacle>, spawn: Vec3) -> Result<Self, CatalogError> {
        if !spawn.is_finite() {
            return Err(CatalogError::NonFiniteSpawn);
        }
        for (index, obstacle) in obstacles.iter().enumerate() {
            if !obstacle.shape.has_positive_extents() {
                return Err(CatalogError::NonPositiveExtent {
                    index,
                    shape: obstacle.shape.name(),
                });
            }
            if !obstacle.is_finite() {
                return Err(CatalogError::NonFinite { index });
            }
            if !obstacle.motion_matches_kind() {
                return Err(CatalogError::MotionMismatch {
                    index,
                    kind: obstacle.kind.name(),
                });
            }
        }

        let spans: Vec<(f32, f32)> = obstacles.iter().map(Obstacle::vertical_span).collect();
        let index = HeightIndex::build(&spans, DEFAULT_BUCKET_HEIGHT);

        let lowest_support_y = obstacles
            .iter()
            .filter(|o| o.kind.is_support())
            .map(|o| o.center_y_range().0)
            .reduce(f32::min);

        Ok(Self {
            obstacles,
            spawn,
            index,
            lowest_support_y,
        })
    }

    /// A catalog with no obstacles at all.
    pub fn empty(spawn: Vec3) -> Result<Self, CatalogError> {
        Self::new(Vec::new(), spawn)
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Where the body starts and respawns before any checkpoint.
    #[inline]
    pub fn spawn(&self) -> Vec3 {
        self.spawn
    }

    /// Indices of obstacles whose swept span may reach `[y_min, y_max]`, in catalog order.
    pub fn candidates(&self, y_min: f32, y_max: f32) -> Vec<usize> {
        self.index.candidates(y_min, y_max)
    }

    /// Indices of every obstacle of `kind`, in catalog order.
    pub fn indices_of(&self, kind: ObstacleKind) -> impl Iterator<Item = usize> + '_ {
        self.obstacles
            .iter()
            .enumerate()
            .filter(move |(_, o)| o.kind == kind)
            .map(|(i, _)| i)
    }

    /// Number of obstacles of `kind`.
    pub fn count_of(&self, kind: ObstacleKind) -> usize {
        self.indices_of(kind).count()
    }

    /// Height below which the body is considered to have fallen out of the level.
    ///
    /// The lowest center of any supporting obstacle minus `margin`, or the spawn
    /// height minus `margin` when nothing can support the body.
    pub fn fall_floor(&self, margin: f32) -> f32 {
        self.lowest_support_y.unwrap_or(self.spawn.y) - margin
    }

    /// Highest top surface of any support, used for progress telemetry.
    pub fn summit(&self) -> f32 {
        self.obstacles
            .iter()
            .filter(|o| o.kind.is_support())
            .map(|o| o.vertical_span().1)
            .fold(self.spawn.y, f32::max)
    }
}
