//! Axis-aligned rectangles used for drag limits and walls.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with inclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Top-left corner (smallest coordinates).
    pub min: Vec2,
    /// Bottom-right corner (largest coordinates).
    pub max: Vec2,
}

impl Bounds {
    /// Creates a rectangle spanning the two corners in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a rectangle from x and y ranges.
    pub fn from_ranges(x: (f32, f32), y: (f32, f32)) -> Self {
        Self::new(Vec2::new(x.0, y.0), Vec2::new(x.1, y.1))
    }

    /// A degenerate rectangle that only admits one point.
    pub fn point(p: Vec2) -> Self {
        Self { min: p, max: p }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns whether `p` lies inside or on the edge.
    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Moves `p` to the nearest point inside the rectangle.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.max(self.min).min(self.max)
    }

    /// Distance along `direction` from `origin` to the edge where a ray leaves.
    ///
    /// `origin` is expected to be inside. Returns `None` for a zero direction.
    pub fn exit_distance(&self, origin: Vec2, direction: Vec2) -> Option<f32> {
        let along = |o: f32, d: f32, lo: f32, hi: f32| -> f32 {
            if d > 0.0 {
                (hi - o) / d
            } else if d < 0.0 {
                (lo - o) / d
            } else {
                f32::INFINITY
            }
        };
        let tx = along(origin.x, direction.x, self.min.x, self.max.x);
        let ty = along(origin.y, direction.y, self.min.y, self.max.y);
        let t = tx.min(ty);
        t.is_finite().then_some(t.max(0.0))
    }
}
