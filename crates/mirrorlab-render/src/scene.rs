//! Retained 2D scene built by the lessons.
//!
//! A [`Scene`] is an ordered list of [`Shape`]s in diagram coordinates.
//! Shapes later in the list are drawn on top. Sizes that depend on the
//! options (ray width, beam dot spacing) are resolved against the width of
//! the view box, so one set of options suits every lesson's coordinate space.

use glam::Vec2;
use mirrorlab_core::{Color, Options, RayPath};

use crate::palette::{self, Rgb};
use crate::view::ViewBox;

/// Outline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line color.
    pub color: Rgb,
    /// Line width in diagram units.
    pub width: f32,
    /// Dash and gap lengths, or `None` for a solid line.
    pub dash: Option<[f32; 2]>,
    /// Stroke opacity.
    pub opacity: f32,
    /// Whether line ends are rounded.
    pub round_caps: bool,
}

impl Stroke {
    /// A solid, opaque stroke.
    pub fn new(color: Rgb, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
            opacity: 1.0,
            round_caps: false,
        }
    }

    /// Sets the dash pattern.
    pub fn with_dash(mut self, dash: f32, gap: f32) -> Self {
        self.dash = Some([dash, gap]);
        self
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Rounds the line ends.
    pub fn rounded(mut self) -> Self {
        self.round_caps = true;
        self
    }
}

/// Most dots drawn for a single beam.
pub const MAX_BEAM_DOTS: usize = 1000;

/// A drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Vec2>,
        stroke: Stroke,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    Rect {
        min: Vec2,
        size: Vec2,
        corner_radius: f32,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<Vec2>,
        fill: Option<Rgb>,
        stroke: Option<Stroke>,
    },
    Text {
        position: Vec2,
        content: String,
        size: f32,
        fill: Rgb,
    },
    /// Children drawn together with a shared opacity.
    Group { opacity: f32, children: Vec<Shape> },
}

impl Shape {
    /// Visits this shape and, for groups, every descendant.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Shape)) {
        f(self);
        if let Self::Group { children, .. } = self {
            for child in children {
                child.visit(f);
            }
        }
    }
}

/// An SVG-bound drawing.
#[derive(Debug, Clone)]
pub struct Scene {
    view_box: ViewBox,
    pixel_size: (u32, u32),
    background: Rgb,
    beam_dot_spacing: f32,
    beam_dot_radius: f32,
    ray_width: f32,
    ray_opacity: f32,
    image_opacity: f32,
    show_labels: bool,
    shapes: Vec<Shape>,
}

impl Scene {
    /// Creates an empty scene over `view_box`.
    pub fn new(view_box: ViewBox, options: &Options) -> Self {
        let unit = view_box.width();
        Self {
            view_box,
            pixel_size: (options.width, options.height),
            background: Rgb::from(options.background_color),
            beam_dot_spacing: options.beam_dot_spacing * unit,
            beam_dot_radius: options.beam_dot_radius * unit,
            ray_width: options.ray_width * unit,
            ray_opacity: options.ray_opacity,
            image_opacity: options.image_opacity,
            show_labels: options.show_labels,
            shapes: Vec::new(),
        }
    }

    /// The diagram rectangle shown.
    pub fn view_box(&self) -> ViewBox {
        self.view_box
    }

    /// Output size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        self.pixel_size
    }

    /// Background fill.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Top-level shapes in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns whether nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Counts shapes, including those nested in groups, matching `pred`.
    pub fn count(&self, mut pred: impl FnMut(&Shape) -> bool) -> usize {
        let mut n = 0;
        for shape in &self.shapes {
            shape.visit(&mut |s| {
                if pred(s) {
                    n += 1;
                }
            });
        }
        n
    }

    /// Converts a fraction of the view width to diagram units.
    pub fn units(&self, fraction: f32) -> f32 {
        fraction * self.view_box.width()
    }

    /// Opacity used for virtual images.
    pub fn image_opacity(&self) -> f32 {
        self.image_opacity
    }

    /// Whether labels are drawn.
    pub fn shows_labels(&self) -> bool {
        self.show_labels
    }

    /// Stroke for a real light ray.
    pub fn ray_stroke(&self, color: Rgb) -> Stroke {
        Stroke::new(color, self.ray_width).with_opacity(self.ray_opacity)
    }

    /// Stroke for a sightline toward a virtual image.
    pub fn guide_stroke(&self, color: Rgb) -> Stroke {
        let w = self.ray_width;
        Stroke::new(color, w * 0.75)
            .with_dash(w * 2.0, w * 2.0)
            .with_opacity(self.image_opacity)
    }

    /// Appends a shape.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.push(Shape::Line { from, to, stroke });
    }

    pub fn polyline(&mut self, points: impl IntoIterator<Item = Vec2>, stroke: Stroke) {
        let points: Vec<Vec2> = points.into_iter().collect();
        if points.len() >= 2 {
            self.push(Shape::Polyline { points, stroke });
        }
    }

    /// Draws a ray path as one polyline.
    pub fn ray_path(&mut self, path: &RayPath, stroke: Stroke) {
        self.polyline(path.points().iter().copied(), stroke);
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, fill: Rgb) {
        self.push(Shape::Circle {
            center,
            radius,
            fill: Some(fill),
            stroke: None,
        });
    }

    /// An unfilled circle.
    pub fn ring(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.push(Shape::Circle {
            center,
            radius,
            fill: None,
            stroke: Some(stroke),
        });
    }

    pub fn rect(&mut self, min: Vec2, size: Vec2, fill: Option<Rgb>, stroke: Option<Stroke>) {
        self.push(Shape::Rect {
            min,
            size,
            corner_radius: 0.0,
            fill,
            stroke,
        });
    }

    /// A filled rectangle with rounded corners.
    pub fn rounded_rect(&mut self, min: Vec2, size: Vec2, corner_radius: f32, fill: Rgb) {
        self.push(Shape::Rect {
            min,
            size,
            corner_radius,
            fill: Some(fill),
            stroke: None,
        });
    }

    pub fn polygon(&mut self, points: impl IntoIterator<Item = Vec2>, fill: Rgb) {
        self.push(Shape::Polygon {
            points: points.into_iter().collect(),
            fill: Some(fill),
            stroke: None,
        });
    }

    /// Centered text, always drawn.
    pub fn text(&mut self, position: Vec2, content: impl Into<String>, size: f32, fill: Rgb) {
        self.push(Shape::Text {
            position,
            content: content.into(),
            size,
            fill,
        });
    }

    /// Centered text, drawn only when labels are enabled.
    pub fn label(&mut self, position: Vec2, content: impl Into<String>, size: f32) {
        if self.show_labels {
            self.text(position, content, size, palette::MUTED);
        }
    }

    /// Draws everything `build` adds inside one group with `opacity`.
    /// Empty groups are dropped.
    pub fn group(&mut self, opacity: f32, build: impl FnOnce(&mut Self)) {
        let outer = std::mem::take(&mut self.shapes);
        build(self);
        let children = std::mem::replace(&mut self.shapes, outer);
        if !children.is_empty() {
            self.push(Shape::Group { opacity, children });
        }
    }

    /// Draws a beam of `color` light as a dotted line and returns the number
    /// of dots.
    ///
    /// White light cycles red, green and blue dots; red and blue light use a
    /// single dot color; black light is not drawn. Dots are evenly spaced
    /// with both ends included, up to [`MAX_BEAM_DOTS`] per beam.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn beam(&mut self, from: Vec2, to: Vec2, color: Color) -> usize {
        let dots = palette::beam_dots(color);
        if dots.is_empty() {
            return 0;
        }
        let count = if self.beam_dot_spacing > 0.0 {
            let n = (from.distance(to) / self.beam_dot_spacing).floor();
            if n.is_finite() {
                (n as usize).min(MAX_BEAM_DOTS - 1)
            } else {
                0
            }
        } else {
            0
        };
        let radius = self.beam_dot_radius;
        self.group(1.0, |scene| {
            for i in 0..=count {
                let t = if count == 0 { 0.0 } else { i as f32 / count as f32 };
                scene.circle(from.lerp(to, t), radius, dots[i % dots.len()]);
            }
        });
        count + 1
    }
}
