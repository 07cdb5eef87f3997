//! Line intersection helpers.
//!
//! Two flavours are provided: bounded segment/segment intersection, and the
//! linear-interpolation shortcut for crossing an infinite axis-aligned line.
//! Both return `None` instead of propagating a division by zero.

use glam::Vec2;

use crate::axis::Axis;

/// Determinants smaller than this are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// 2D cross product (z component of the 3D cross product).
fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Intersects segment `p1`-`p2` with segment `p3`-`p4`.
///
/// Solves `p1 + u(p2 - p1) = p3 + v(p4 - p3)` and returns the point only when
/// both `u` and `v` lie in `[0, 1]`. Parallel and coincident segments return
/// `None`.
pub fn segment_intersection(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let det = cross(d1, d2);
    if det.abs() < PARALLEL_EPSILON {
        return None;
    }

    let offset = p3 - p1;
    let u = cross(offset, d2) / det;
    let v = cross(offset, d1) / det;

    if (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) {
        Some(p1 + u * d1)
    } else {
        None
    }
}

/// Finds where the line through `a` and `b` meets the line `axis = value`.
///
/// Computes `t = (value - a[axis]) / (b[axis] - a[axis])` and returns
/// `a + t(b - a)` with the axis coordinate pinned to `value`. The parameter is
/// not restricted to `[0, 1]`; callers that care about the physical extent of
/// a mirror check it themselves. Returns `None` when `a` and `b` share the
/// axis coordinate.
pub fn axis_crossing(a: Vec2, b: Vec2, axis: Axis, value: f32) -> Option<Vec2> {
    let denom = axis.component(b) - axis.component(a);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = (value - axis.component(a)) / denom;
    let point = a + t * (b - a);
    Some(axis.with_component(point, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_crossing_diagonals() {
        let p = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        );
        assert!(close(p.unwrap(), Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_parallel_segments() {
        let p = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(10.0, 5.0),
        );
        assert!(p.is_none());
    }

    #[test]
    fn test_coincident_segments() {
        let p = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(8.0, 0.0),
        );
        assert!(p.is_none());
    }

    #[test]
    fn test_lines_cross_outside_segments() {
        // The infinite lines meet at (5, 5), but the second segment stops short.
        let p = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(4.0, 6.0),
        );
        assert!(p.is_none());
    }

    #[test]
    fn test_touching_endpoint_counts() {
        let p = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(10.0, 5.0),
        );
        assert!(close(p.unwrap(), Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn test_axis_crossing_cellophane_plane() {
        // Sun at (10, 10), apple at (50, 71), cellophane at y = 35.
        let p = axis_crossing(Vec2::new(10.0, 10.0), Vec2::new(50.0, 71.0), Axis::Y, 35.0).unwrap();
        assert_eq!(p.y, 35.0);
        assert!((p.x - 26.393).abs() < 1e-2);
    }

    #[test]
    fn test_axis_crossing_extrapolates() {
        // t = 2: the crossing lies beyond b.
        let p = axis_crossing(Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Axis::X, 2.0).unwrap();
        assert!(close(p, Vec2::new(2.0, 4.0)));
    }

    #[test]
    fn test_axis_crossing_parallel() {
        let p = axis_crossing(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), Axis::Y, 300.0);
        assert!(p.is_none());
    }
}
