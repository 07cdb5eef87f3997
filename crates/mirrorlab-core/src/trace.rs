//! Ray path tracing by the method of virtual images.
//!
//! To find where light from a source bounces on its way to an eye, the source
//! is mirrored across each mirror it strikes. The straight sightline from the
//! eye to the final image crosses the last mirror at the real hit point; the
//! remaining hits are found by walking backward through the chain.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::axis::{Axis, AxisLine};
use crate::mirror::{Mirror, Segment};

/// The largest number of reflections any lesson traces.
pub const MAX_REFLECTIONS: usize = 3;

/// An ordered polyline describing the path taken by light.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RayPath {
    points: Vec<Vec2>,
}

impl RayPath {
    /// Creates a path starting at `start`.
    pub fn new(start: Vec2) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Creates a path from explicit vertices.
    pub fn from_points(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Appends a vertex.
    pub fn push(&mut self, point: Vec2) {
        self.points.push(point);
    }

    /// Returns the vertices in travel order.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Returns the first vertex.
    pub fn start(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    /// Returns the last vertex.
    pub fn end(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Returns whether the path has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over consecutive vertex pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of straight segments.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Number of bends (interior vertices).
    pub fn bend_count(&self) -> usize {
        self.points.len().saturating_sub(2)
    }

    /// Total length of the path.
    pub fn length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}

/// Result of tracing light through a chain of mirrors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// The real path: source, one hit per mirror, eye.
    pub path: RayPath,
    /// `images[i]` is the source as seen after `i + 1` reflections.
    pub images: Vec<Vec2>,
}

impl Trace {
    /// The image the eye perceives (the source itself when no mirror is used).
    pub fn final_image(&self) -> Option<Vec2> {
        self.images.last().copied().or_else(|| self.path.start())
    }

    /// Hit points on the mirrors, in the order the light strikes them.
    pub fn hits(&self) -> &[Vec2] {
        let points = self.path.points();
        if points.len() < 2 {
            return &[];
        }
        &points[1..points.len() - 1]
    }
}

/// Successive virtual images of `source` through `chain`.
pub fn virtual_images(source: Vec2, chain: &[Mirror]) -> Vec<Vec2> {
    chain
        .iter()
        .scan(source, |image, mirror| {
            *image = mirror.reflect_point(*image);
            Some(*image)
        })
        .collect()
}

/// Traces light from `source` to `eye` via the mirrors in `chain`.
///
/// `chain` lists the mirrors in the order the light strikes them. An empty
/// chain gives the direct path. Returns `None` when a sightline misses its
/// mirror (the image is not visible from `eye`) or when the chain is longer
/// than [`MAX_REFLECTIONS`].
pub fn trace_reflections(source: Vec2, eye: Vec2, chain: &[Mirror]) -> Option<Trace> {
    if chain.len() > MAX_REFLECTIONS {
        log::warn!(
            "refusing to trace {} reflections (limit {MAX_REFLECTIONS})",
            chain.len()
        );
        return None;
    }

    let images = virtual_images(source, chain);

    // Walk backward: the eye looks at the last image, each hit then looks at
    // the image one reflection earlier.
    let mut hits = Vec::with_capacity(chain.len());
    let mut viewer = eye;
    for (i, mirror) in chain.iter().enumerate().rev() {
        let target = images[i];
        let hit = mirror.hit(viewer, target)?;
        hits.push(hit);
        viewer = hit;
    }
    hits.reverse();

    let mut path = RayPath::new(source);
    for hit in hits {
        path.push(hit);
    }
    path.push(eye);

    log::debug!(
        "traced {} reflection(s) from {source} to {eye}",
        chain.len()
    );
    Some(Trace { path, images })
}

/// Which mirror of a corner the light strikes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerOrder {
    /// Source -> horizontal mirror -> vertical mirror -> eye.
    HorizontalThenVertical,
    /// Source -> vertical mirror -> horizontal mirror -> eye.
    VerticalThenHorizontal,
}

/// Two perpendicular mirrors meeting at a right angle.
///
/// The horizontal arm runs from `apex` along x by `horizontal_arm` (signed),
/// the vertical arm from `apex` along y by `vertical_arm` (signed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corner {
    /// Where the two mirrors meet.
    pub apex: Vec2,
    /// Signed extent of the horizontal mirror along x.
    pub horizontal_arm: f32,
    /// Signed extent of the vertical mirror along y.
    pub vertical_arm: f32,
}

impl Corner {
    /// Creates a corner.
    pub fn new(apex: Vec2, horizontal_arm: f32, vertical_arm: f32) -> Self {
        Self {
            apex,
            horizontal_arm,
            vertical_arm,
        }
    }

    /// The horizontal mirror as an infinite line.
    pub fn horizontal_mirror(&self) -> Mirror {
        Mirror::Line(AxisLine::horizontal(self.apex.y))
    }

    /// The vertical mirror as an infinite line.
    pub fn vertical_mirror(&self) -> Mirror {
        Mirror::Line(AxisLine::vertical(self.apex.x))
    }

    /// The visible extent of the horizontal mirror.
    pub fn horizontal_segment(&self) -> Segment {
        Segment::new(self.apex, self.apex + Vec2::new(self.horizontal_arm, 0.0))
    }

    /// The visible extent of the vertical mirror.
    pub fn vertical_segment(&self) -> Segment {
        Segment::new(self.apex, self.apex + Vec2::new(0.0, self.vertical_arm))
    }

    /// The image formed by both mirrors (a point reflection through the apex).
    pub fn double_image(&self, point: Vec2) -> Vec2 {
        let once = self.horizontal_mirror().reflect_point(point);
        self.vertical_mirror().reflect_point(once)
    }

    /// Decides which mirror the doubly reflected light meets first.
    ///
    /// The sightline from `eye` to the double image either crosses `x = apex.x`
    /// on the vertical arm's side of the apex (the vertical mirror is struck
    /// last) or it does not (the horizontal mirror is struck last).
    pub fn order(&self, eye: Vec2, double_image: Vec2) -> CornerOrder {
        let crossing = AxisLine::vertical(self.apex.x).crossing(eye, double_image);
        let on_vertical_arm = crossing.is_some_and(|p| {
            (Axis::Y.component(p) - self.apex.y) * self.vertical_arm.signum() > 0.0
        });
        if on_vertical_arm {
            CornerOrder::HorizontalThenVertical
        } else {
            CornerOrder::VerticalThenHorizontal
        }
    }

    /// The mirror chain for a given order.
    pub fn chain(&self, order: CornerOrder) -> [Mirror; 2] {
        match order {
            CornerOrder::HorizontalThenVertical => {
                [self.horizontal_mirror(), self.vertical_mirror()]
            }
            CornerOrder::VerticalThenHorizontal => {
                [self.vertical_mirror(), self.horizontal_mirror()]
            }
        }
    }

    /// Traces the doubly reflected path from `source` to `eye`.
    pub fn trace_double(&self, source: Vec2, eye: Vec2) -> Option<(CornerOrder, Trace)> {
        let order = self.order(eye, self.double_image(source));
        let trace = trace_reflections(source, eye, &self.chain(order))?;
        Some((order, trace))
    }
}
