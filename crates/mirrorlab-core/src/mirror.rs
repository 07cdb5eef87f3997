//! Mirror geometry.
//!
//! A [`Mirror`] is either an infinite axis-aligned line or a bounded segment.
//! [`MirrorKind`] is the closed set of orientations a learner can pick for a
//! mirror slot; it carries no coordinates of its own.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::axis::AxisLine;
use crate::error::MirrorlabError;
use crate::intersect::segment_intersection;

/// A bounded line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint.
    pub start: Vec2,
    /// Second endpoint.
    pub end: Vec2,
}

impl Segment {
    /// Creates a segment between two points.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Returns `end - start`.
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Returns the segment length.
    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// Returns the midpoint.
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// Returns a unit normal, or zero for a degenerate segment.
    pub fn normal(&self) -> Vec2 {
        self.direction().perp().normalize_or_zero()
    }

    /// Reflects `point` across the infinite line through this segment.
    ///
    /// A degenerate segment has no line; the point is returned unchanged.
    pub fn reflect_point(&self, point: Vec2) -> Vec2 {
        let n = self.normal();
        point - 2.0 * (point - self.start).dot(n) * n
    }

    /// Reflects a direction vector off this segment (angle of incidence equals
    /// angle of reflection).
    pub fn reflect_direction(&self, direction: Vec2) -> Vec2 {
        let n = self.normal();
        direction - 2.0 * direction.dot(n) * n
    }

    /// Intersects this segment with the segment `a`-`b`.
    pub fn intersect(&self, a: Vec2, b: Vec2) -> Option<Vec2> {
        segment_intersection(a, b, self.start, self.end)
    }
}

/// A reflecting surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Mirror {
    /// An infinite horizontal or vertical line. Hits are not bounds-checked.
    Line(AxisLine),
    /// A bounded segment. Hits outside the segment miss.
    Segment(Segment),
}

impl Mirror {
    /// Reflects `point` across the mirror's supporting line.
    pub fn reflect_point(&self, point: Vec2) -> Vec2 {
        match self {
            Self::Line(line) => line.reflect_point(point),
            Self::Segment(segment) => segment.reflect_point(point),
        }
    }

    /// Returns where the sightline `from`-`to` meets the mirror.
    ///
    /// Axis lines use linear interpolation along the whole line; segments
    /// require the hit to lie on both the sightline and the segment.
    pub fn hit(&self, from: Vec2, to: Vec2) -> Option<Vec2> {
        match self {
            Self::Line(line) => line.crossing(from, to),
            Self::Segment(segment) => segment.intersect(from, to),
        }
    }
}

impl From<AxisLine> for Mirror {
    fn from(line: AxisLine) -> Self {
        Self::Line(line)
    }
}

impl From<Segment> for Mirror {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

/// Orientation chosen for a mirror slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MirrorKind {
    /// The slot is empty.
    #[default]
    None,
    /// A horizontal mirror (`-`).
    Horizontal,
    /// A vertical mirror (`|`).
    Vertical,
    /// A diagonal falling to the right in screen space (`\`).
    DiagonalDown,
    /// A diagonal rising to the right in screen space (`/`).
    DiagonalUp,
}

impl MirrorKind {
    /// All selectable kinds, in picker order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Horizontal,
        Self::Vertical,
        Self::DiagonalDown,
        Self::DiagonalUp,
    ];

    /// Returns whether a mirror is present.
    pub fn is_active(self) -> bool {
        self != Self::None
    }

    /// Returns the picker symbol for this kind.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::None => "×",
            Self::Horizontal => "-",
            Self::Vertical => "|",
            Self::DiagonalDown => "\\",
            Self::DiagonalUp => "/",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::DiagonalDown => "diagonal-down",
            Self::DiagonalUp => "diagonal-up",
        }
    }
}

impl fmt::Display for MirrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MirrorKind {
    type Err = MirrorlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "horizontal" | "-" => Ok(Self::Horizontal),
            "vertical" | "|" => Ok(Self::Vertical),
            "diagonal-down" | "back-slash" | "\\" => Ok(Self::DiagonalDown),
            "diagonal-up" | "slash" | "/" => Ok(Self::DiagonalUp),
            other => Err(MirrorlabError::UnknownMirrorKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn test_reflect_across_diagonal() {
        // The line y = x - 160.
        let mirror = Segment::new(Vec2::new(190.0, 30.0), Vec2::new(250.0, 90.0));
        let image = mirror.reflect_point(Vec2::new(70.0, 40.0));
        assert!(close(image, Vec2::new(200.0, -90.0)));
    }

    #[test]
    fn test_reflect_direction_turns_down() {
        let mirror = Segment::new(Vec2::new(190.0, 30.0), Vec2::new(250.0, 90.0));
        let d = mirror.reflect_direction(Vec2::X);
        assert!(close(d, Vec2::Y));
    }

    #[test]
    fn test_reflect_direction_turns_up() {
        let mirror = Segment::new(Vec2::new(190.0, 90.0), Vec2::new(250.0, 30.0));
        let d = mirror.reflect_direction(Vec2::X);
        assert!(close(d, Vec2::NEG_Y));
    }

    #[test]
    fn test_degenerate_segment_is_inert() {
        let p = Vec2::new(3.0, 4.0);
        let dot = Segment::new(Vec2::ONE, Vec2::ONE);
        assert_eq!(dot.reflect_point(p), p);
        assert_eq!(dot.reflect_direction(Vec2::X), Vec2::X);
    }

    #[test]
    fn test_mirror_line_hit_is_unbounded() {
        let mirror = Mirror::from(AxisLine::horizontal(300.0));
        let hit = mirror.hit(Vec2::new(400.0, 500.0), Vec2::new(250.0, 200.0)).unwrap();
        assert!(close(hit, Vec2::new(300.0, 300.0)));
    }

    #[test]
    fn test_mirror_segment_hit_is_bounded() {
        let mirror = Mirror::from(Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)));
        assert!(mirror.hit(Vec2::new(5.0, -1.0), Vec2::new(5.0, 1.0)).is_some());
        assert!(mirror.hit(Vec2::new(15.0, -1.0), Vec2::new(15.0, 1.0)).is_none());
    }

    #[test]
    fn test_mirror_kind_parse_and_display() {
        for kind in MirrorKind::ALL {
            assert_eq!(kind.to_string().parse::<MirrorKind>().unwrap(), kind);
        }
        assert_eq!("/".parse::<MirrorKind>().unwrap(), MirrorKind::DiagonalUp);
        assert!("sideways".parse::<MirrorKind>().is_err());
        assert!(!MirrorKind::None.is_active());
        assert!(MirrorKind::Vertical.is_active());
    }
}
