//! Obstacle Shapes
//!
//! Closed set of obstacle footprints. Every shape is an upright prism (or a
//! sphere) whose horizontal footprint is evaluated in the obstacle's local frame.
//! Compound shapes are unions or intersections of primitive box, radius and
//! half-plane tests.
//!
//! # Footprint rules (local `dx`, `dz`, forgiveness margin `m`)
//!
//! | Shape      | Rule |
//! |------------|------|
//! | `Box`      | `|dx| <= hx + m` and `|dz| <= hz + m` |
//! | `Sphere`   | `dx² + dz² <= (r + m)²` |
//! | `Cylinder` | `dx² + dz² <= (r + m)²` |
//! | `Cross`    | box rule of the long arm (along X) or of the short arm (along Z) |
//! | `LShape`   | union of the arm along the -Z edge and the arm along the -X edge |
//! | `TShape`   | union of the bar along the +Z edge and the centered stem along Z |
//! | `Diamond`  | `|dx| + |dz| <= d + m` |
//! | `Star`     | square rule or its 45° rotation (`|dx| + |dz| <= s·√2 + m`) |
//! | `Hexagon`  | `|dz| <= a + m` and `(√3/2)|dx| + |dz|/2 <= a + m`, apothem `a = R·√3/2` |
//! | `Triangle` | three half-planes with apothem `R/2`, apex toward local +Z |

use serde::{Deserialize, Serialize};

use super::types::Vec2;

const SQRT_3: f32 = 1.732_050_8;
const HALF_SQRT_3: f32 = SQRT_3 * 0.5;

/// Geometric shape of an obstacle.
///
/// Parameters are half-sizes so that `center ± half` bounds the volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned (in local frame) box.
    Box { half_extents: [f32; 3] },
    /// Sphere; its top surface is `center.y + radius`.
    Sphere { radius: f32 },
    /// Upright cylinder.
    Cylinder { radius: f32, half_height: f32 },
    /// Plus sign: long arm along local X, short arm along local Z.
    Cross {
        long_half_length: f32,
        short_half_length: f32,
        arm_half_width: f32,
        half_height: f32,
    },
    /// L inside a `2*half_size` square, arms `arm_width` wide along the -Z and -X edges.
    LShape {
        half_size: f32,
        arm_width: f32,
        half_height: f32,
    },
    /// T inside a `2*half_size` square: bar along the +Z edge, stem centered on X.
    TShape {
        half_size: f32,
        arm_width: f32,
        half_height: f32,
    },
    /// Square rotated 45°, measured center-to-corner.
    Diamond { half_diagonal: f32, half_height: f32 },
    /// Eight-point star: a square and the same square rotated 45°.
    Star { half_size: f32, half_height: f32 },
    /// Regular hexagon with corners on local ±X.
    Hexagon { circumradius: f32, half_height: f32 },
    /// Equilateral triangle with its apex toward local +Z.
    Triangle { circumradius: f32, half_height: f32 },
}

impl Shape {
    /// Convenience constructor for a box from full sizes (as level recipes list them).
    pub fn cuboid(size_x: f32, size_y: f32, size_z: f32) -> Self {
        Shape::Box {
            half_extents: [size_x * 0.5, size_y * 0.5, size_z * 0.5],
        }
    }

    /// Short lowercase name, used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Box { .. } => "box",
            Shape::Sphere { .. } => "sphere",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Cross { .. } => "cross",
            Shape::LShape { .. } => "l_shape",
            Shape::TShape { .. } => "t_shape",
            Shape::Diamond { .. } => "diamond",
            Shape::Star { .. } => "star",
            Shape::Hexagon { .. } => "hexagon",
            Shape::Triangle { .. } => "triangle",
        }
    }

    /// Half of the vertical thickness. The top surface sits at `center.y + half_height()`.
    pub fn half_height(&self) -> f32 {
        match *self {
            Shape::Box { half_extents } => half_extents[1],
            Shape::Sphere { radius } => radius,
            Shape::Cylinder { half_height, .. }
            | Shape::Cross { half_height, .. }
            | Shape::LShape { half_height, .. }
            | Shape::TShape { half_height, .. }
            | Shape::Diamond { half_height, .. }
            | Shape::Star { half_height, .. }
            | Shape::Hexagon { half_height, .. }
            | Shape::Triangle { half_height, .. } => half_height,
        }
    }

    /// Every extent this shape carries, in declaration order.
    fn extents(&self) -> Vec<f32> {
        match *self {
            Shape::Box { half_extents } => half_extents.to_vec(),
            Shape::Sphere { radius } => vec![radius],
            Shape::Cylinder {
                radius,
                half_height,
            } => vec![radius, half_height],
            Shape::Cross {
                long_half_length,
                short_half_length,
                arm_half_width,
                half_height,
            } => vec![long_half_length, short_half_length, arm_half_width, half_height],
            Shape::LShape {
                half_size,
                arm_width,
                half_height,
            }
            | Shape::TShape {
                half_size,
                arm_width,
                half_height,
            } => vec![half_size, arm_width, half_height],
            Shape::Diamond {
                half_diagonal,
                half_height,
            } => vec![half_diagonal, half_height],
            Shape::Star {
                half_size,
                half_height,
            } => vec![half_size, half_height],
            Shape::Hexagon {
                circumradius,
                half_height,
            }
            | Shape::Triangle {
                circumradius,
                half_height,
            } => vec![circumradius, half_height],
        }
    }

    /// True when every extent is finite and strictly positive.
    pub fn has_positive_extents(&self) -> bool {
        self.extents().iter().all(|e| e.is_finite() && *e > 0.0)
    }

    /// Radius of a vertical cylinder around the center that bounds the footprint.
    pub fn horizontal_reach(&self) -> f32 {
        match *self {
            Shape::Box { half_extents } => {
                Vec2::new(half_extents[0], half_extents[2]).length()
            }
            Shape::Sphere { radius } | Shape::Cylinder { radius, .. } => radius,
            Shape::Cross {
                long_half_length,
                short_half_length,
                arm_half_width,
                ..
            } => Vec2::new(long_half_length.max(short_half_length), arm_half_width).length(),
            Shape::LShape { half_size, .. }
            | Shape::TShape { half_size, .. }
            | Shape::Star { half_size, .. } => half_size * std::f32::consts::SQRT_2,
            Shape::Diamond { half_diagonal, .. } => half_diagonal,
            Shape::Hexagon { circumradius, .. } | Shape::Triangle { circumradius, .. } => {
                circumradius
            }
        }
    }

    /// Footprint test in the obstacle's local frame.
    ///
    /// `local` is the planar offset `(dx, dz)` from the obstacle center, already
    /// rotated into the obstacle frame. `margin` widens every edge outward.
    /// Degenerate shapes (non-positive extents) never contain anything.
    pub fn footprint_contains(&self, local: Vec2, margin: f32) -> bool {
        if !self.has_positive_extents() {
            return false;
        }
        let m = margin.max(0.0);
        let (dx, dz) = (local.x, local.y);

        match *self {
            Shape::Box { half_extents } => within_box(dx, dz, half_extents[0], half_extents[2], m),
            Shape::Sphere { radius } | Shape::Cylinder { radius, .. } => {
                let reach = radius + m;
                dx * dx + dz * dz <= reach * reach
            }
            Shape::Cross {
                long_half_length,
                short_half_length,
                arm_half_width,
                ..
            } => {
                within_box(dx, dz, long_half_length, arm_half_width, m)
                    || within_box(dx, dz, arm_half_width, short_half_length, m)
            }
            Shape::LShape {
                half_size,
                arm_width,
                ..
            } => {
                let h = half_size;
                let inner = -h + arm_width.min(2.0 * h);
                let along_x = dx.abs() <= h + m && dz >= -h - m && dz <= inner + m;
                let along_z = dz.abs() <= h + m && dx >= -h - m && dx <= inner + m;
                along_x || along_z
            }
            Shape::TShape {
                half_size,
                arm_width,
                ..
            } => {
                let h = half_size;
                let w = arm_width.min(2.0 * h);
                let bar = dx.abs() <= h + m && dz <= h + m && dz >= h - w - m;
                let stem = dx.abs() <= w * 0.5 + m && dz.abs() <= h + m;
                bar || stem
            }
            Shape::Diamond { half_diagonal, .. } => dx.abs() + dz.abs() <= half_diagonal + m,
            Shape::Star { half_size, .. } => {
                within_box(dx, dz, half_size, half_size, m)
                    || dx.abs() + dz.abs() <= half_size * std::f32::consts::SQRT_2 + m
            }
            Shape::Hexagon { circumradius, .. } => {
                let apothem = circumradius * HALF_SQRT_3;
                dz.abs() <= apothem + m && HALF_SQRT_3 * dx.abs() + 0.5 * dz.abs() <= apothem + m
            }
            Shape::Triangle { circumradius, .. } => {
                let apothem = circumradius * 0.5;
                -dz <= apothem + m
                    && HALF_SQRT_3 * dx + 0.5 * dz <= apothem + m
                    && -HALF_SQRT_3 * dx + 0.5 * dz <= apothem + m
            }
        }
    }
}

#[inline]
fn within_box(dx: f32, dz: f32, hx: f32, hz: f32, margin: f32) -> bool {
    dx.abs() <= hx + margin && dz.abs() <= hz + margin
}
