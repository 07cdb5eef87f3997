//! Axis-aligned mirror lines and point reflection.
//!
//! Most lessons use mirrors that are infinite horizontal or vertical lines.
//! Reflecting across them is a closed-form flip of a single coordinate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::intersect::axis_crossing;

/// Which coordinate a mirror line fixes.
///
/// `Axis::X` is the vertical line `x = c`, `Axis::Y` the horizontal line `y = c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Vertical mirror line (`x = c`).
    X,
    /// Horizontal mirror line (`y = c`).
    Y,
}

impl Axis {
    /// Returns the coordinate of `point` along this axis.
    pub fn component(self, point: Vec2) -> f32 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }

    /// Returns `point` with its coordinate along this axis replaced by `value`.
    pub fn with_component(self, point: Vec2, value: f32) -> Vec2 {
        match self {
            Self::X => Vec2::new(value, point.y),
            Self::Y => Vec2::new(point.x, value),
        }
    }

    /// Returns the other axis.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Reflects `point` across the axis-aligned line `axis = mirror`.
///
/// For [`Axis::X`] the result is `(2m - x, y)`, for [`Axis::Y`] it is `(x, 2m - y)`.
/// Reflecting twice across the same line returns the original point.
pub fn reflect(point: Vec2, axis: Axis, mirror: f32) -> Vec2 {
    let value = axis.component(point);
    axis.with_component(point, 2.0 * mirror - value)
}

/// An infinite axis-aligned mirror line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    /// The coordinate fixed by the line.
    pub axis: Axis,
    /// The value of that coordinate.
    pub offset: f32,
}

impl AxisLine {
    /// Creates a line fixing `axis` at `offset`.
    pub fn new(axis: Axis, offset: f32) -> Self {
        Self { axis, offset }
    }

    /// The vertical line `x = x`.
    pub fn vertical(x: f32) -> Self {
        Self::new(Axis::X, x)
    }

    /// The horizontal line `y = y`.
    pub fn horizontal(y: f32) -> Self {
        Self::new(Axis::Y, y)
    }

    /// Reflects a point across this line.
    pub fn reflect_point(&self, point: Vec2) -> Vec2 {
        reflect(point, self.axis, self.offset)
    }

    /// Returns where the line through `a` and `b` crosses this mirror line.
    ///
    /// Returns `None` when `a`-`b` runs parallel to the mirror.
    pub fn crossing(&self, a: Vec2, b: Vec2) -> Option<Vec2> {
        axis_crossing(a, b, self.axis, self.offset)
    }

    /// Signed distance of `point` from the line along the fixed axis.
    pub fn signed_distance(&self, point: Vec2) -> f32 {
        self.axis.component(point) - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_vertical() {
        let p = reflect(Vec2::new(250.0, 476.0), Axis::X, 400.0);
        assert_eq!(p, Vec2::new(550.0, 476.0));
    }

    #[test]
    fn test_reflect_horizontal() {
        let p = reflect(Vec2::new(250.0, 400.0), Axis::Y, 300.0);
        assert_eq!(p, Vec2::new(250.0, 200.0));
    }

    #[test]
    fn test_point_on_mirror_is_fixed() {
        let line = AxisLine::horizontal(300.0);
        let p = Vec2::new(123.0, 300.0);
        assert_eq!(line.reflect_point(p), p);
    }

    #[test]
    fn test_with_component() {
        assert_eq!(Axis::X.with_component(Vec2::new(1.0, 2.0), 9.0), Vec2::new(9.0, 2.0));
        assert_eq!(Axis::Y.with_component(Vec2::new(1.0, 2.0), 9.0), Vec2::new(1.0, 9.0));
        assert_eq!(Axis::X.other(), Axis::Y);
    }

    #[test]
    fn test_signed_distance() {
        let line = AxisLine::vertical(400.0);
        assert_eq!(line.signed_distance(Vec2::new(300.0, 0.0)), -100.0);
        assert_eq!(line.signed_distance(Vec2::new(450.0, 0.0)), 50.0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn coord() -> impl Strategy<Value = f32> {
            -1000.0f32..1000.0
        }

        proptest! {
            #[test]
            fn reflect_twice_is_identity(x in coord(), y in coord(), m in coord(), vertical in any::<bool>()) {
                let axis = if vertical { Axis::X } else { Axis::Y };
                let p = Vec2::new(x, y);
                let back = reflect(reflect(p, axis, m), axis, m);
                prop_assert!((back - p).length() < 1e-3);
            }

            #[test]
            fn reflect_keeps_other_coordinate(x in coord(), y in coord(), m in coord()) {
                let p = Vec2::new(x, y);
                prop_assert_eq!(reflect(p, Axis::X, m).y, y);
                prop_assert_eq!(reflect(p, Axis::Y, m).x, x);
            }
        }
    }
}
