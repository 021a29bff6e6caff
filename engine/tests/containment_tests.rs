//! Containment Tests - Shape Support Rules and Resolver Precedence

use std::f32::consts::FRAC_PI_4;

use glam::Vec3;
use obby_engine::physics::{ContactTolerances, PhysicsTuning, Resolution, Shape, resolve, supports};
use obby_engine::player::Body;
use obby_engine::world::{Obstacle, ObstacleCatalog};

fn exact() -> ContactTolerances {
    ContactTolerances::exact()
}

/// Foot point at horizontal distance `d` along +X, level with the top surface.
fn at_top(shape: &Shape, d: f32) -> Vec3 {
    Vec3::new(d, shape.half_height(), 0.0)
}

// ============================================================================
// Primitive shapes
// ============================================================================

#[test]
fn test_box_corner_support() {
    let shape = Shape::Box {
        half_extents: [2.0, 0.25, 2.0],
    };
    let tol = ContactTolerances::default();
    assert!(supports(Vec3::new(1.9, 0.25, 1.9), &shape, Vec3::ZERO, 0.0, 0.0, &tol));
    assert!(!supports(Vec3::new(2.1, 0.25, 2.1), &shape, Vec3::ZERO, 0.0, 0.0, &tol));
}

#[test]
fn test_sphere_radius_boundary() {
    let shape = Shape::Sphere { radius: 1.0 };
    assert!(supports(at_top(&shape, 0.99), &shape, Vec3::ZERO, 0.0, 0.0, &exact()));
    assert!(!supports(at_top(&shape, 1.01), &shape, Vec3::ZERO, 0.0, 0.0, &exact()));
}

#[test]
fn test_cylinder_radius_boundary() {
    let shape = Shape::Cylinder {
        radius: 1.0,
        half_height: 2.0,
    };
    assert!(supports(at_top(&shape, 0.99), &shape, Vec3::ZERO, 0.0, 0.0, &exact()));
    assert!(!supports(at_top(&shape, 1.01), &shape, Vec3::ZERO, 0.0, 0.0, &exact()));
}

#[test]
fn test_forgiveness_widens_edge() {
    let shape = Shape::Cylinder {
        radius: 1.0,
        half_height: 0.5,
    };
    let tol = ContactTolerances::default();
    assert!(supports(at_top(&shape, 1.04), &shape, Vec3::ZERO, 0.0, 0.0, &tol));
    assert!(!supports(at_top(&shape, 1.06), &shape, Vec3::ZERO, 0.0, 0.0, &tol));
}

#[test]
fn test_degenerate_shapes_never_support() {
    let shapes = [
        Shape::Sphere { radius: 0.0 },
        Shape::Cylinder {
            radius: 0.0,
            half_height: 1.0,
        },
        Shape::Box {
            half_extents: [1.0, 0.0, 1.0],
        },
    ];
    for shape in shapes {
        assert!(!supports(Vec3::ZERO, &shape, Vec3::ZERO, 0.0, 0.0, &ContactTolerances::default()));
    }
}

#[test]
fn test_support_band_limits() {
    let shape = Shape::cuboid(4.0, 0.5, 4.0);
    let tol = ContactTolerances::default();
    // Slightly above the surface, within the top band.
    assert!(supports(Vec3::new(0.0, 0.3, 0.0), &shape, Vec3::ZERO, 0.0, -1.0, &tol));
    // Too far above.
    assert!(!supports(Vec3::new(0.0, 0.5, 0.0), &shape, Vec3::ZERO, 0.0, -1.0, &tol));
    // Sunk below the surface but within the sink band.
    assert!(supports(Vec3::new(0.0, -0.6, 0.0), &shape, Vec3::ZERO, 0.0, -1.0, &tol));
    // Passed clean through.
    assert!(!supports(Vec3::new(0.0, -0.8, 0.0), &shape, Vec3::ZERO, 0.0, -1.0, &tol));
}

// ============================================================================
// Compound shapes and rotation
// ============================================================================

#[test]
fn test_rotated_box_uses_local_frame() {
    // A long thin bar along X, turned 90° so it runs along Z.
    let shape = Shape::cuboid(8.0, 0.5, 1.0);
    let tol = exact();
    let yaw = std::f32::consts::FRAC_PI_2;
    assert!(supports(Vec3::new(0.0, 0.25, 3.5), &shape, Vec3::ZERO, yaw, 0.0, &tol));
    assert!(!supports(Vec3::new(3.5, 0.25, 0.0), &shape, Vec3::ZERO, yaw, 0.0, &tol));
}

#[test]
fn test_diamond_and_star() {
    let diamond = Shape::Diamond {
        half_diagonal: 2.0,
        half_height: 0.25,
    };
    let tol = exact();
    assert!(supports(Vec3::new(0.9, 0.25, 0.9), &diamond, Vec3::ZERO, 0.0, 0.0, &tol));
    assert!(!supports(Vec3::new(1.1, 0.25, 1.1), &diamond, Vec3::ZERO, 0.0, 0.0, &tol));

    let star = Shape::Star {
        half_size: 1.0,
        half_height: 0.25,
    };
    // Corner of the square and tip of the rotated square.
    assert!(supports(Vec3::new(0.95, 0.25, 0.95), &star, Vec3::ZERO, 0.0, 0.0, &tol));
    assert!(supports(Vec3::new(1.35, 0.25, 0.0), &star, Vec3::ZERO, 0.0, 0.0, &tol));
    assert!(!supports(Vec3::new(1.2, 0.25, 0.6), &star, Vec3::ZERO, 0.0, 0.0, &tol));
}

#[test]
fn test_hexagon_and_triangle() {
    let hexagon = Shape::Hexagon {
        circumradius: 2.0,
        half_height: 0.25,
    };
    let tol = exact();
    assert!(supports(Vec3::new(1.95, 0.25, 0.0), &hexagon, Vec3::ZERO, 0.0, 0.0, &tol));
    assert!(!supports(Vec3::new(0.0, 0.25, 1.8), &hexagon, Vec3::ZERO, 0.0, 0.0, &tol));

    let triangle = Shape::Triangle {
        circumradius: 2.0,
        half_height: 0.25,
    };
    assert!(supports(Vec3::new(0.0, 0.25, 1.9), &triangle, Vec3::ZERO, 0.0, 0.0, &tol));
    assert!(!supports(Vec3::new(0.0, 0.25, -1.1), &triangle, Vec3::ZERO, 0.0, 0.0, &tol));
    // Rotating by 45° moves the apex off the +Z axis.
    assert!(!supports(Vec3::new(0.0, 0.25, 1.9), &triangle, Vec3::ZERO, FRAC_PI_4, 0.0, &tol));
}

// ============================================================================
// First-match-wins precedence
// ============================================================================

fn overlapping(lower_first: bool) -> ObstacleCatalog {
    let lower = Obstacle::platform(Vec3::new(0.0, 0.75, 0.0), Shape::cuboid(4.0, 0.5, 4.0));
    let higher = Obstacle::platform(Vec3::new(0.0, 0.95, 0.0), Shape::cuboid(4.0, 0.5, 4.0));
    let obstacles = if lower_first {
        vec![lower, higher]
    } else {
        vec![higher, lower]
    };
    ObstacleCatalog::new(obstacles, Vec3::new(0.0, 2.0, 0.0)).expect("valid catalog")
}

#[test]
fn test_first_catalog_entry_wins_over_higher_surface() {
    let tuning = PhysicsTuning::default();
    let mut body = Body::at_spawn(Vec3::new(0.0, 2.05, 0.0));
    body.velocity.y = -0.5;
    // Foot at 1.05 lies in the support band of both platforms (tops 1.0 and 1.2).
    let tentative = Vec3::new(0.0, 2.05, 0.0);

    let Resolution::Settled(first) = resolve(tentative, &body, &overlapping(true), 0.0, &tuning) else {
        panic!("no kill zones present");
    };
    assert_eq!(first.support, Some(0));
    assert_eq!(first.position.y, 2.0);

    let Resolution::Settled(swapped) = resolve(tentative, &body, &overlapping(false), 0.0, &tuning) else {
        panic!("no kill zones present");
    };
    assert_eq!(swapped.support, Some(0));
    assert!((swapped.position.y - 2.2).abs() < 1e-5);
}
