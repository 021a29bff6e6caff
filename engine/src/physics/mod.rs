//! Physics module
//!
//! Character physics for a single dynamic body moving through a set of static
//! and kinematic obstacles. This is deliberately not a rigid-body engine:
//! there is no angular dynamics, no mass, and no obstacle-vs-obstacle contact.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, seconds for time, radians for angles.
//!
//! # Submodules
//!
//! - [`types`] - Math types re-exported from glam plus planar helpers
//! - [`shapes`] - Closed set of obstacle shapes and their footprint rules
//! - [`collision`] - Support and trigger tests between the body and one obstacle
//! - [`tuning`] - Physics constants
//! - [`integrator`] - Explicit Euler step and frame splitting
//! - [`resolver`] - Per-step resolution against the obstacle catalog

pub mod collision;
pub mod integrator;
pub mod resolver;
pub mod shapes;
pub mod tuning;
pub mod types;

// Re-export commonly used types at the physics module level
pub use collision::{ContactTolerances, overlaps, supports, top_surface};
pub use integrator::{SubSteps, integrate, split_frame};
pub use resolver::{Resolution, Settled, resolve};
pub use shapes::Shape;
pub use tuning::PhysicsTuning;
pub use types::{Vec2, Vec3};
