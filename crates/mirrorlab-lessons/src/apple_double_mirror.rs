//! Two mirrors at a right angle.
//!
//! A mirror along the top and one along the right meet in a corner. Each
//! mirror shows one image of the apple, and light bouncing off both mirrors
//! forms a third image diagonally across the corner. Which mirror that light
//! meets first depends on where the apple stands.

use glam::Vec2;
use mirrorlab_core::{trace_reflections, Bounds, Corner, CornerOrder, Trace};
use mirrorlab_render::{glyphs, palette, Scene, Stroke, ViewBox};

use crate::drag::{Draggable, Pointer};
use crate::Lesson;

pub const APEX: Vec2 = Vec2::new(400.0, 300.0);
pub const EYE: Vec2 = Vec2::new(200.0, 500.0);
pub const APPLE_START: Vec2 = Vec2::new(300.0, 400.0);
/// Length of each mirror arm.
pub const ARM: f32 = 250.0;
const APPLE_SIZE: f32 = 48.0;
const DIAGONAL_OPACITY: f32 = 0.3;

/// The top mirror runs left from the apex, the right mirror down from it.
pub fn corner() -> Corner {
    Corner::new(APEX, -ARM, ARM)
}

/// Draws both mirrors of `corner` with their imaginary extensions dashed.
pub(crate) fn draw_corner(scene: &mut Scene, corner: &Corner) {
    let extension = Stroke::new(palette::MIRROR_EDGE, 2.0).with_dash(4.0, 4.0);
    scene.line(corner.apex, corner.apex - Vec2::new(0.0, ARM), extension);
    scene.line(corner.apex, corner.apex + Vec2::new(ARM, 0.0), extension);
    glyphs::mirror_pane(scene, &corner.horizontal_segment(), 10.0, corner.apex - Vec2::new(0.0, ARM));
    glyphs::mirror_pane(scene, &corner.vertical_segment(), 10.0, corner.apex + Vec2::new(ARM, 0.0));
}

/// Draws a faded image, the sightline to it, and the real light path.
fn draw_image(scene: &mut Scene, image: Vec2, trace: Option<&Trace>, opacity: f32) {
    scene.line(EYE, image, scene.guide_stroke(palette::RAY_GUIDE));
    if let Some(trace) = trace {
        scene.ray_path(&trace.path, scene.ray_stroke(palette::RAY));
    }
    scene.group(opacity, |s| glyphs::apple(s, image, APPLE_SIZE, palette::CHANNEL_RED));
}

/// Images the learner can reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// The image in the top mirror.
    Top,
    /// The image in the right mirror.
    Right,
    /// The image formed by both mirrors.
    Diagonal,
}

impl Overlay {
    pub const ALL: [Self; 3] = [Self::Top, Self::Right, Self::Diagonal];

    fn label(self) -> &'static str {
        match self {
            Self::Top => "top mirror",
            Self::Right => "right mirror",
            Self::Diagonal => "one more",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Pointer(Pointer),
    Show(Overlay, bool),
    /// Shows or hides the overlay switches.
    ToggleControls,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppleDoubleMirror {
    apple: Draggable,
    show_controls: bool,
    top: bool,
    right: bool,
    diagonal: bool,
}

impl Default for AppleDoubleMirror {
    fn default() -> Self {
        Self {
            apple: Draggable::new(APPLE_START, Bounds::from_ranges((50.0, 370.0), (330.0, 550.0))),
            show_controls: false,
            top: false,
            right: false,
            diagonal: false,
        }
    }
}

impl AppleDoubleMirror {
    pub fn apple(&self) -> Vec2 {
        self.apple.position()
    }

    pub fn controls_visible(&self) -> bool {
        self.show_controls
    }

    pub fn shows(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Top => self.top,
            Overlay::Right => self.right,
            Overlay::Diagonal => self.diagonal,
        }
    }

    /// Position of each image.
    pub fn image(&self, overlay: Overlay) -> Vec2 {
        let corner = corner();
        match overlay {
            Overlay::Top => corner.horizontal_mirror().reflect_point(self.apple()),
            Overlay::Right => corner.vertical_mirror().reflect_point(self.apple()),
            Overlay::Diagonal => corner.double_image(self.apple()),
        }
    }

    /// Light from the apple to the eye via the top mirror.
    pub fn top_path(&self) -> Option<Trace> {
        trace_reflections(self.apple(), EYE, &[corner().horizontal_mirror()])
    }

    /// Light from the apple to the eye via the right mirror.
    pub fn right_path(&self) -> Option<Trace> {
        trace_reflections(self.apple(), EYE, &[corner().vertical_mirror()])
    }

    /// Light from the apple to the eye via both mirrors.
    pub fn double_path(&self) -> Option<(CornerOrder, Trace)> {
        corner().trace_double(self.apple(), EYE)
    }

    fn draw_controls(&self, scene: &mut Scene) {
        scene.rounded_rect(Vec2::new(560.0, 430.0), Vec2::new(200.0, 130.0), 12.0, palette::PANEL);
        for (i, overlay) in Overlay::ALL.into_iter().enumerate() {
            let y = 470.0 + 35.0 * i as f32;
            let mark = Vec2::new(590.0, y - 5.0);
            if self.shows(overlay) {
                scene.circle(mark, 8.0, palette::RAY);
            } else {
                scene.ring(mark, 8.0, Stroke::new(palette::MUTED, 2.0));
            }
            scene.label(Vec2::new(670.0, y), overlay.label(), 16.0);
        }
    }
}

impl Lesson for AppleDoubleMirror {
    type Event = Event;

    const KEY: &'static str = "apple-double-mirror";

    fn view_box(&self) -> ViewBox {
        ViewBox::MIRROR
    }

    fn update(mut self, event: Event) -> Self {
        match event {
            Event::Pointer(p) => self.apple = self.apple.handle(p),
            Event::Show(Overlay::Top, on) => self.top = on,
            Event::Show(Overlay::Right, on) => self.right = on,
            Event::Show(Overlay::Diagonal, on) => self.diagonal = on,
            Event::ToggleControls => self.show_controls = !self.show_controls,
        }
        log::debug!(
            "double mirror: apple at {}, double path {:?}",
            self.apple(),
            self.double_path().map(|(order, _)| order)
        );
        self
    }

    fn draw(&self, scene: &mut Scene) {
        draw_corner(scene, &corner());
        glyphs::eye(scene, EYE, 48.0);

        let faded = scene.image_opacity();
        if self.top {
            draw_image(scene, self.image(Overlay::Top), self.top_path().as_ref(), faded);
        }
        if self.right {
            draw_image(scene, self.image(Overlay::Right), self.right_path().as_ref(), faded);
        }
        if self.diagonal {
            let double = self.double_path();
            // The last mirror sees the image formed by the first one.
            if let Some((_, trace)) = &double {
                if let (Some(last_hit), Some(first_image)) = (trace.hits().last(), trace.images.first()) {
                    let stroke = scene.guide_stroke(palette::RAY_GUIDE).with_opacity(DIAGONAL_OPACITY);
                    scene.line(*last_hit, *first_image, stroke);
                }
            }
            draw_image(
                scene,
                self.image(Overlay::Diagonal),
                double.as_ref().map(|(_, t)| t),
                DIAGONAL_OPACITY,
            );
        }

        glyphs::apple(scene, self.apple(), APPLE_SIZE, palette::CHANNEL_RED);
        if self.show_controls {
            self.draw_controls(scene);
        }
    }
}
