//! Respawn / checkpoint controller
//!
//! Remembers the most recently touched checkpoint and puts the body back
//! there when it touches a kill zone or falls out of the level.

use std::collections::BTreeSet;

use glam::Vec3;
use log::info;

use crate::world::{ObstacleCatalog, ObstacleKind};

use super::body::Body;

/// Last confirmed safe respawn location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckpointRecord {
    pub position: Vec3,
    /// Catalog index of the checkpoint, `None` for a record set directly.
    pub obstacle: Option<usize>,
}

/// Result of a checkpoint proximity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckpointTouch {
    pub obstacle: usize,
    /// True the first time this checkpoint is reached.
    pub first_visit: bool,
}

/// Tracks checkpoint progress and performs respawns.
#[derive(Debug, Clone)]
pub struct RespawnController {
    spawn: Vec3,
    record: Option<CheckpointRecord>,
    reached: BTreeSet<usize>,
    fall_floor: f32,
}

impl RespawnController {
    /// Controller for `catalog`, with the fall floor `fall_margin` below its lowest support.
    pub fn new(catalog: &ObstacleCatalog, fall_margin: f32) -> Self {
        Self {
            spawn: catalog.spawn(),
            record: None,
            reached: BTreeSet::new(),
            fall_floor: catalog.fall_floor(fall_margin),
        }
    }

    /// Where the next respawn will put the body.
    pub fn respawn_point(&self) -> Vec3 {
        self.record.map_or(self.spawn, |r| r.position)
    }

    pub fn record(&self) -> Option<CheckpointRecord> {
        self.record
    }

    /// Overwrite the checkpoint record.
    pub fn set_record(&mut self, position: Vec3, obstacle: Option<usize>) {
        self.record = Some(CheckpointRecord { position, obstacle });
    }

    /// Number of distinct checkpoints reached so far.
    pub fn checkpoints_reached(&self) -> usize {
        self.reached.len()
    }

    pub fn fall_floor(&self) -> f32 {
        self.fall_floor
    }

    /// True when `position` is below the fall-through threshold.
    pub fn has_fallen(&self, position: Vec3) -> bool {
        position.y < self.fall_floor
    }

    /// Update the record if `position` is within `radius` of a checkpoint.
    ///
    /// The first checkpoint in catalog order within reach wins. The record
    /// always moves to the touched checkpoint; the reached count only grows
    /// on the first visit to each one.
    pub fn check_checkpoint(
        &mut self,
        position: Vec3,
        catalog: &ObstacleCatalog,
        time: f32,
        radius: f32,
    ) -> Option<CheckpointTouch> {
        let touched = catalog.indices_of(ObstacleKind::Checkpoint).find_map(|index| {
            let center = catalog.get(index)?.pose_at(time).center;
            (position.distance(center) <= radius).then_some((index, center))
        });
        let (index, center) = touched?;

        self.record = Some(CheckpointRecord {
            position: center,
            obstacle: Some(index),
        });
        let first_visit = self.reached.insert(index);
        if first_visit {
            info!(
                "Checkpoint {} reached at ({:.1}, {:.1}, {:.1}), total {}",
                index,
                center.x,
                center.y,
                center.z,
                self.reached.len()
            );
        }
        Some(CheckpointTouch {
            obstacle: index,
            first_visit,
        })
    }

    /// Reset `body` in place to the respawn point, returning that point.
    pub fn respawn(&self, body: &mut Body) -> Vec3 {
        let point = self.respawn_point();
        body.reset_to(point);
        point
    }

    /// Forget all progress, returning to the spawn point.
    pub fn reset(&mut self) {
        self.record = None;
        self.reached.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::shapes::Shape;
    use crate::world::Obstacle;

    fn catalog() -> ObstacleCatalog {
        let obstacles = vec![
            Obstacle::platform(Vec3::ZERO, Shape::cuboid(12.0, 0.5, 12.0)),
            Obstacle::new(ObstacleKind::Checkpoint, Shape::cuboid(2.0, 4.0, 0.5), Vec3::new(0.0, 1.0, 8.0)),
            Obstacle::new(ObstacleKind::Checkpoint, Shape::cuboid(2.0, 4.0, 0.5), Vec3::new(0.0, 1.0, 20.0)),
        ];
        ObstacleCatalog::new(obstacles, Vec3::new(0.0, 1.25, 0.0)).expect("valid catalog")
    }

    #[test]
    fn test_respawn_without_checkpoint_uses_spawn() {
        let catalog = catalog();
        let controller = RespawnController::new(&catalog, 10.0);
        let mut body = Body::at_spawn(Vec3::new(3.0, -20.0, 3.0));
        body.grounded = false;
        assert_eq!(controller.respawn(&mut body), Vec3::new(0.0, 1.25, 0.0));
        assert!(body.grounded);
        assert_eq!(controller.fall_floor(), -10.0);
    }

    #[test]
    fn test_first_visit_counts_once() {
        let catalog = catalog();
        let mut controller = RespawnController::new(&catalog, 10.0);

        let touch = controller.check_checkpoint(Vec3::new(0.0, 1.25, 6.5), &catalog, 0.0, 2.0);
        assert_eq!(touch, Some(CheckpointTouch { obstacle: 1, first_visit: true }));
        let again = controller.check_checkpoint(Vec3::new(0.0, 1.25, 7.5), &catalog, 0.0, 2.0);
        assert_eq!(again, Some(CheckpointTouch { obstacle: 1, first_visit: false }));
        assert_eq!(controller.checkpoints_reached(), 1);
        assert_eq!(controller.respawn_point(), Vec3::new(0.0, 1.0, 8.0));

        assert_eq!(controller.check_checkpoint(Vec3::new(0.0, 1.25, 14.0), &catalog, 0.0, 2.0), None);
    }

    #[test]
    fn test_record_follows_most_recent_touch() {
        let catalog = catalog();
        let mut controller = RespawnController::new(&catalog, 10.0);
        controller.check_checkpoint(Vec3::new(0.0, 1.0, 20.0), &catalog, 0.0, 2.0);
        controller.check_checkpoint(Vec3::new(0.0, 1.0, 8.0), &catalog, 0.0, 2.0);
        assert_eq!(controller.respawn_point(), Vec3::new(0.0, 1.0, 8.0));
        assert_eq!(controller.checkpoints_reached(), 2);

        controller.reset();
        assert_eq!(controller.respawn_point(), Vec3::new(0.0, 1.25, 0.0));
        assert_eq!(controller.checkpoints_reached(), 0);
    }
}
