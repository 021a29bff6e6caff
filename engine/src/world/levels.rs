//! Procedural level recipes
//!
//! Every level is generated from fixed parameters, so the same [`LevelId`]
//! always yields bit-identical geometry. Hazard and platform placement doubles
//! as the difficulty curve, which is why nothing here is randomized.
//!
//! # Levels
//!
//! - [`LevelId::Classic`] - staged course along +Z: jumps, kill-part maze, moving
//!   platforms, jump pad, speed strip, spinners, victory pad
//! - [`LevelId::SpiralTower`] - fifty platforms winding around a central axis
//! - [`LevelId::SteppedTower`] - twenty stacked, shrinking floors
//! - [`LevelId::ShapeGauntlet`] - one platform of every footprint shape
//!
//! All levels share the spawn pad at the origin and the spawn point above it.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::physics::shapes::Shape;
use crate::physics::tuning::DEFAULT_HALF_HEIGHT;
use crate::physics::types::Vec3;

use super::catalog::{CatalogError, ObstacleCatalog};
use super::obstacle::{Obstacle, ObstacleKind};

/// Where the body starts: standing on the spawn pad.
pub const SPAWN_POINT: Vec3 = Vec3::new(0.0, 1.25, 0.0);

/// Half-extents of the shared spawn pad centered at the origin.
pub const SPAWN_PAD_HALF_EXTENTS: [f32; 3] = [6.0, 0.25, 6.0];

/// Oscillation amplitude of moving platforms.
pub const MOVING_PLATFORM_AMPLITUDE: f32 = 4.0;
/// Angular frequency of moving platforms (rad/s).
pub const MOVING_PLATFORM_FREQUENCY: f32 = 0.8;
/// Spinner angular speeds, slowest first (rad/s).
pub const SPINNER_SPEEDS: [f32; 3] = [1.2, 1.8, 2.4];

/// Center height of the Classic maze's safe stones. Kill parts sit at 9.3.
const SAFE_STONE_HEIGHT: f32 = 10.6;

// Spiral tower parameters
const SPIRAL_LEVELS: usize = 50;
const SPIRAL_PER_TURN: f32 = 12.0;
const SPIRAL_BASE_RADIUS: f32 = 8.0;
const SPIRAL_BASE_HEIGHT: f32 = 1.5;
const SPIRAL_RISE: f32 = 0.8;

// Stepped tower parameters
const STEPPED_FLOORS: usize = 20;
const STEPPED_SPACING: f32 = 4.0;

/// Identifier of a built-in level recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelId {
    #[default]
    Classic,
    SpiralTower,
    SteppedTower,
    ShapeGauntlet,
}

impl LevelId {
    pub const ALL: [LevelId; 4] = [
        LevelId::Classic,
        LevelId::SpiralTower,
        LevelId::SteppedTower,
        LevelId::ShapeGauntlet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LevelId::Classic => "classic",
            LevelId::SpiralTower => "spiral_tower",
            LevelId::SteppedTower => "stepped_tower",
            LevelId::ShapeGauntlet => "shape_gauntlet",
        }
    }

    /// Parse a level name (`classic`, `spiral`, `spiral-tower`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "classic" => Some(LevelId::Classic),
            "spiral" | "spiral_tower" => Some(LevelId::SpiralTower),
            "stepped" | "stepped_tower" => Some(LevelId::SteppedTower),
            "gauntlet" | "shape_gauntlet" => Some(LevelId::ShapeGauntlet),
            _ => None,
        }
    }

    /// The obstacle list of this level, spawn pad first.
    pub fn obstacles(self) -> Vec<Obstacle> {
        let mut obstacles = vec![spawn_pad()];
        match self {
            LevelId::Classic => classic(&mut obstacles),
            LevelId::SpiralTower => spiral_tower(&mut obstacles),
            LevelId::SteppedTower => stepped_tower(&mut obstacles),
            LevelId::ShapeGauntlet => shape_gauntlet(&mut obstacles),
        }
        obstacles
    }

    /// Build and validate the catalog for this level.
    pub fn build(self) -> Result<ObstacleCatalog, CatalogError> {
        ObstacleCatalog::new(self.obstacles(), SPAWN_POINT)
    }
}

fn spawn_pad() -> Obstacle {
    Obstacle::platform(
        Vec3::ZERO,
        Shape::Box {
            half_extents: SPAWN_PAD_HALF_EXTENTS,
        },
    )
}

fn checkpoint(center: Vec3) -> Obstacle {
    Obstacle::new(ObstacleKind::Checkpoint, Shape::cuboid(2.0, 4.0, 0.5), center)
}

/// Checkpoint plus a landing pad whose top sits exactly under a body respawned there.
fn checkpoint_station(out: &mut Vec<Obstacle>, center: Vec3) {
    out.push(checkpoint(center));
    let pad_center = center - Vec3::new(0.0, DEFAULT_HALF_HEIGHT + 0.25, 0.0);
    out.push(Obstacle::platform(pad_center, Shape::cuboid(4.0, 0.5, 4.0)));
}

fn classic(out: &mut Vec<Obstacle>) {
    // Stage 0: simple jumps
    checkpoint_station(out, Vec3::new(0.0, 1.0, 8.0));
    out.push(Obstacle::platform(Vec3::new(0.0, 2.0, 12.0), Shape::cuboid(3.0, 0.5, 3.0)));
    out.push(Obstacle::platform(Vec3::new(4.0, 3.0, 16.0), Shape::cuboid(2.0, 0.5, 2.0)));
    out.push(Obstacle::platform(Vec3::new(-4.0, 4.0, 20.0), Shape::cuboid(2.0, 0.5, 2.0)));

    // Stage 1: alternating parkour
    for i in 0..6 {
        let x = if i % 2 == 0 { -3.0 } else { 3.0 };
        let center = Vec3::new(x, 5.0 + i as f32 * 0.5, 24.0 + i as f32 * 4.0);
        out.push(Obstacle::platform(center, Shape::cuboid(2.0, 0.5, 2.0)));
    }

    // Stage 2: kill-part maze. The safe stones ride above the kill parts,
    // high enough that a body standing on one is out of trigger reach.
    checkpoint_station(out, Vec3::new(0.0, 8.0, 48.0));
    out.push(Obstacle::platform(Vec3::new(0.0, 9.0, 52.0), Shape::cuboid(4.0, 0.5, 4.0)));
    for i in 0..8 {
        let x = -6.0 + i as f32 * 1.5;
        out.push(Obstacle::new(
            ObstacleKind::KillZone,
            Shape::cuboid(1.0, 0.6, 1.0),
            Vec3::new(x, 9.3, 56.0),
        ));
        out.push(Obstacle::platform(Vec3::new(x, 9.0, 58.0), Shape::cuboid(1.0, 0.5, 1.0)));
        if i % 2 == 1 {
            out.push(Obstacle::platform(Vec3::new(x - 0.7, SAFE_STONE_HEIGHT, 57.0), Shape::cuboid(0.8, 0.5, 0.8)));
        }
    }

    // Stage 3: horizontally oscillating platforms
    checkpoint_station(out, Vec3::new(0.0, 10.0, 64.0));
    for i in 0..5 {
        let f = i as f32;
        out.push(Obstacle::moving_platform(
            Vec3::new(-8.0 + f * 4.0, 12.0 + f, 68.0 + f * 4.0),
            Shape::cuboid(2.0, 0.5, 2.0),
            Vec3::X,
            MOVING_PLATFORM_AMPLITUDE,
            MOVING_PLATFORM_FREQUENCY,
        ));
    }

    // Stage 4: jump pad and speed strip
    checkpoint_station(out, Vec3::new(0.0, 18.0, 88.0));
    out.push(Obstacle::new(
        ObstacleKind::JumpPad,
        Shape::cuboid(2.0, 0.5, 2.0),
        Vec3::new(0.0, 19.0, 92.0),
    ));
    out.push(Obstacle::platform(Vec3::new(0.0, 25.0, 96.0), Shape::cuboid(3.0, 0.5, 3.0)));
    for i in 0..4 {
        let z = 100.0 + i as f32 * 3.0;
        out.push(Obstacle::new(
            ObstacleKind::SpeedPad,
            Shape::cuboid(2.0, 0.5, 2.0),
            Vec3::new(0.0, 26.0, z),
        ));
        if i < 3 {
            out.push(Obstacle::platform(Vec3::new(0.0, 27.0, z + 1.5), Shape::cuboid(1.5, 0.5, 1.5)));
        }
    }

    // Stage 5: spinners with rest platforms
    checkpoint_station(out, Vec3::new(0.0, 28.0, 116.0));
    for (i, speed) in SPINNER_SPEEDS.iter().enumerate() {
        let f = i as f32;
        out.push(Obstacle::spinner(
            Vec3::new(0.0, 30.0 + f * 3.0, 120.0 + f * 6.0),
            Shape::cuboid(8.0, 0.5, 1.0),
            *speed,
        ));
        out.push(Obstacle::platform(
            Vec3::new(0.0, 30.0 + f * 3.0, 124.0 + f * 6.0),
            Shape::cuboid(2.0, 0.5, 2.0),
        ));
    }

    // Finale
    checkpoint_station(out, Vec3::new(0.0, 36.0, 136.0));
    out.push(Obstacle::new(
        ObstacleKind::VictoryPad,
        Shape::cuboid(6.0, 1.0, 6.0),
        Vec3::new(0.0, 40.0, 140.0),
    ));
}

fn spiral_point(level: usize, radius: f32) -> (f32, f32) {
    let angle = level as f32 / SPIRAL_PER_TURN * TAU;
    (angle.cos() * radius, angle.sin() * radius)
}

fn spiral_height(level: usize) -> f32 {
    SPIRAL_BASE_HEIGHT + level as f32 * SPIRAL_RISE
}

fn spiral_size(height: f32) -> f32 {
    if height < 10.0 {
        3.0
    } else if height < 20.0 {
        2.5
    } else if height < 30.0 {
        2.0
    } else {
        1.8
    }
}

fn spiral_tower(out: &mut Vec<Obstacle>) {
    for level in 0..SPIRAL_LEVELS {
        let radius = SPIRAL_BASE_RADIUS + (level as f32 * 0.2).sin();
        let (x, z) = spiral_point(level, radius);
        let height = spiral_height(level);
        let size = spiral_size(height);
        out.push(Obstacle::platform(Vec3::new(x, height, z), Shape::cuboid(size, 0.5, size)));

        // Bridges between level pairs, measured at the current radius.
        if level % 4 == 1 {
            let (px, pz) = spiral_point(level - 1, radius);
            let bridge = Vec3::new((x + px) * 0.5, (height + spiral_height(level - 1)) * 0.5, (z + pz) * 0.5);
            out.push(Obstacle::platform(bridge, Shape::cuboid(1.5, 0.5, 1.5)));
        }

        if level > 0 && level % 10 == 0 {
            out.push(checkpoint(Vec3::new(x, height + 0.25 + DEFAULT_HALF_HEIGHT, z)));
        }
    }

    let radius = SPIRAL_BASE_RADIUS + (SPIRAL_LEVELS as f32 * 0.2).sin();
    let (x, z) = spiral_point(SPIRAL_LEVELS, radius);
    out.push(Obstacle::new(
        ObstacleKind::VictoryPad,
        Shape::cuboid(4.0, 1.0, 4.0),
        Vec3::new(x, spiral_height(SPIRAL_LEVELS), z),
    ));
}

fn stepped_tower(out: &mut Vec<Obstacle>) {
    for floor in 0..STEPPED_FLOORS {
        let y = floor as f32 * STEPPED_SPACING;
        let size = 6.0 - floor as f32 * 0.1;
        out.push(Obstacle::platform(Vec3::new(0.0, y, 0.0), Shape::cuboid(size, 0.2, size)));
        if floor > 0 && floor % 5 == 0 {
            out.push(checkpoint(Vec3::new(0.0, y + 0.1 + DEFAULT_HALF_HEIGHT, 0.0)));
        }
    }
    out.push(Obstacle::new(
        ObstacleKind::VictoryPad,
        Shape::cuboid(4.0, 1.0, 4.0),
        Vec3::new(0.0, STEPPED_FLOORS as f32 * STEPPED_SPACING, 0.0),
    ));
}

fn shape_gauntlet(out: &mut Vec<Obstacle>) {
    let hh = 0.25;
    let shapes = [
        Shape::Cross {
            long_half_length: 2.5,
            short_half_length: 1.5,
            arm_half_width: 0.6,
            half_height: hh,
        },
        Shape::LShape {
            half_size: 2.0,
            arm_width: 1.2,
            half_height: hh,
        },
        Shape::TShape {
            half_size: 2.0,
            arm_width: 1.2,
            half_height: hh,
        },
        Shape::Diamond {
            half_diagonal: 2.2,
            half_height: hh,
        },
        Shape::Star {
            half_size: 1.4,
            half_height: hh,
        },
        Shape::Hexagon {
            circumradius: 2.0,
            half_height: hh,
        },
        Shape::Triangle {
            circumradius: 2.4,
            half_height: hh,
        },
        Shape::Cylinder {
            radius: 1.5,
            half_height: 1.0,
        },
        Shape::Sphere { radius: 1.5 },
    ];

    let mut top = SPAWN_PAD_HALF_EXTENTS[1];
    let mut z = SPAWN_PAD_HALF_EXTENTS[2];
    for (i, shape) in shapes.iter().enumerate() {
        top += 1.25;
        z += 4.5;
        let center = Vec3::new(0.0, top - shape.half_height(), z);
        out.push(Obstacle::platform(center, *shape));

        // Checkpoint on the diamond, kill strip alongside the star.
        match shape {
            Shape::Diamond { .. } => out.push(checkpoint(Vec3::new(0.0, top + DEFAULT_HALF_HEIGHT, z))),
            Shape::Star { .. } => out.push(Obstacle::new(
                ObstacleKind::KillZone,
                Shape::cuboid(1.0, 0.4, 6.0),
                Vec3::new(if i % 2 == 0 { 3.0 } else { -3.0 }, top + 0.2, z),
            )),
            _ => {}
        }
    }

    z += 5.0;
    top += 1.25;
    out.push(Obstacle::new(
        ObstacleKind::VictoryPad,
        Shape::cuboid(4.0, 1.0, 4.0),
        Vec3::new(0.0, top - 0.5, z),
    ));
}
