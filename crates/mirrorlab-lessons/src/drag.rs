//! Pointer dragging of lesson objects.

use glam::Vec2;
use mirrorlab_core::Bounds;

/// How close a press must land to an object to pick it up.
pub const DEFAULT_GRAB_RADIUS: f32 = 30.0;

/// A pointer event in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    /// Button pressed or touch started.
    Down(Vec2),
    /// Pointer moved.
    Move(Vec2),
    /// Button released or touch ended.
    Up,
}

/// An object that follows the pointer while held, kept inside its bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draggable {
    position: Vec2,
    bounds: Bounds,
    grab_radius: f32,
    active: bool,
}

impl Draggable {
    /// Creates a resting object. The start position is clamped into `bounds`.
    pub fn new(position: Vec2, bounds: Bounds) -> Self {
        Self {
            position: bounds.clamp(position),
            bounds,
            grab_radius: DEFAULT_GRAB_RADIUS,
            active: false,
        }
    }

    /// Sets the pick-up distance.
    pub fn with_grab_radius(mut self, radius: f32) -> Self {
        self.grab_radius = radius;
        self
    }

    /// Current position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Allowed region.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns whether the object is being dragged.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns whether a press at `at` would pick the object up.
    pub fn hit(&self, at: Vec2) -> bool {
        at.distance(self.position) <= self.grab_radius
    }

    /// Applies a pointer event.
    ///
    /// A press on the object starts a drag; moves while dragging clamp the
    /// pointer into the bounds; release ends the drag. Moves without a drag
    /// are ignored.
    #[must_use]
    pub fn handle(mut self, pointer: Pointer) -> Self {
        match pointer {
            Pointer::Down(at) => {
                if self.hit(at) {
                    self.active = true;
                }
            }
            Pointer::Move(at) => {
                if self.active {
                    self.position = self.bounds.clamp(at);
                }
            }
            Pointer::Up => self.active = false,
        }
        self
    }
}
