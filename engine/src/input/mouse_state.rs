//! Pointer Drag State
//!
//! Alternate look control: while the pointer button is held, motion orbits
//! the camera instead of moving the cursor. Motion is summed between frames
//! and handed to the session once per frame.

use glam::Vec2;

/// Summed pointer motion of the current drag.
///
/// ```rust,ignore
/// let mut drag = PointerDrag::new();
/// drag.set_dragging(true);
/// drag.accumulate_delta(10.0, -5.0);
/// drag.accumulate_delta(3.0, 2.0);
/// assert_eq!(drag.consume_delta(), (13.0, -3.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointerDrag {
    pending: Vec2,
    dragging: bool,
}

impl PointerDrag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `(dx, dy)` pixels of motion. Ignored outside a drag or when not finite.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        let motion = Vec2::new(dx, dy);
        if self.dragging && motion.is_finite() {
            self.pending += motion;
        }
    }

    /// Take the motion summed since the last call.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.pending).into()
    }

    /// Press (`true`) or release the drag button. Releasing drops unread motion.
    pub fn set_dragging(&mut self, dragging: bool) {
        if !dragging {
            self.pending = Vec2::ZERO;
        }
        self.dragging = dragging;
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Motion summed so far, left in place.
    #[inline]
    pub fn peek_delta(&self) -> (f32, f32) {
        self.pending.into()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
