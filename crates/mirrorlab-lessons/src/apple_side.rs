//! A plane mirror seen from the side.
//!
//! A person on the left looks at a vertical mirror. The learner slides an
//! apple along the ground; rays from the top, middle and bottom of the apple
//! bounce off the mirror into the eye, and the virtual apple appears as far
//! behind the mirror as the real one stands in front of it.

use glam::Vec2;
use mirrorlab_core::{trace_reflections, AxisLine, Bounds, Mirror, Segment, Trace};
use mirrorlab_render::{glyphs, palette, Scene, Stroke, ViewBox};

use crate::drag::{Draggable, Pointer};
use crate::Lesson;

pub const MIRROR_X: f32 = 400.0;
pub const EYE: Vec2 = Vec2::new(80.0, 310.0);
pub const APPLE_START: Vec2 = Vec2::new(250.0, 476.0);
pub const GROUND_Y: f32 = 500.0;
/// Vertical offsets of the three traced points on the apple.
pub const RAY_OFFSETS: [f32; 3] = [-18.0, 0.0, 18.0];
const APPLE_SIZE: f32 = 48.0;

/// Overlays the learner can switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    RealRays,
    VirtualImage,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Pointer(Pointer),
    Show(Overlay, bool),
}

/// A ray from one point of the apple to the eye.
#[derive(Debug, Clone, PartialEq)]
pub struct SideRay {
    pub source: Vec2,
    pub image: Vec2,
    pub trace: Trace,
}

impl SideRay {
    /// Where the ray meets the mirror.
    pub fn hit(&self) -> Option<Vec2> {
        self.trace.hits().first().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppleSide {
    apple: Draggable,
    real_rays: bool,
    virtual_image: bool,
}

impl Default for AppleSide {
    fn default() -> Self {
        Self {
            apple: Draggable::new(
                APPLE_START,
                Bounds::from_ranges((50.0, 350.0), (APPLE_START.y, APPLE_START.y)),
            ),
            real_rays: false,
            virtual_image: false,
        }
    }
}

impl AppleSide {
    pub fn apple(&self) -> Vec2 {
        self.apple.position()
    }

    pub fn shows(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::RealRays => self.real_rays,
            Overlay::VirtualImage => self.virtual_image,
        }
    }

    pub fn mirror() -> Mirror {
        Mirror::Line(AxisLine::vertical(MIRROR_X))
    }

    pub fn virtual_apple(&self) -> Vec2 {
        Self::mirror().reflect_point(self.apple())
    }

    /// Rays from the top, middle and bottom of the apple.
    pub fn rays(&self) -> Vec<SideRay> {
        let mirror = [Self::mirror()];
        RAY_OFFSETS
            .iter()
            .filter_map(|&dy| {
                let source = self.apple() + Vec2::new(0.0, dy);
                let trace = trace_reflections(source, EYE, &mirror)?;
                let image = trace.final_image()?;
                Some(SideRay {
                    source,
                    image,
                    trace,
                })
            })
            .collect()
    }
}

impl Lesson for AppleSide {
    type Event = Event;

    const KEY: &'static str = "apple-side";

    fn view_box(&self) -> ViewBox {
        ViewBox::MIRROR
    }

    fn update(mut self, event: Event) -> Self {
        match event {
            Event::Pointer(p) => self.apple = self.apple.handle(p),
            Event::Show(Overlay::RealRays, on) => self.real_rays = on,
            Event::Show(Overlay::VirtualImage, on) => self.virtual_image = on,
        }
        log::debug!("apple side view: apple at {}", self.apple());
        self
    }

    fn draw(&self, scene: &mut Scene) {
        scene.line(
            Vec2::new(0.0, GROUND_Y),
            Vec2::new(800.0, GROUND_Y),
            Stroke::new(palette::GROUND, 2.0),
        );
        glyphs::mirror_line(
            scene,
            &Segment::new(Vec2::new(MIRROR_X, 150.0), Vec2::new(MIRROR_X, GROUND_Y)),
            4.0,
        );
        glyphs::observer(scene, EYE);

        for ray in self.rays() {
            if self.virtual_image {
                scene.line(ray.image, EYE, scene.guide_stroke(palette::APPLE_RAY));
            }
            if let Some(hit) = ray.hit().filter(|_| self.real_rays) {
                let stroke = scene.ray_stroke(palette::APPLE_RAY);
                scene.line(ray.source, hit, stroke.with_dash(6.0, 3.0));
                scene.line(hit, EYE, stroke);
            }
        }

        if self.virtual_image {
            let image = self.virtual_apple();
            scene.group(scene.image_opacity(), |s| {
                glyphs::apple(s, image, APPLE_SIZE, palette::CHANNEL_RED);
            });
        }
        glyphs::apple(scene, self.apple(), APPLE_SIZE, palette::CHANNEL_RED);
        scene.label(Vec2::new(MIRROR_X, 135.0), "mirror", 16.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirrorlab_core::Options;
    use mirrorlab_render::Shape;

    #[test]
    fn test_virtual_apple_mirrors_position() {
        let lesson = AppleSide::default();
        assert_eq!(lesson.apple(), APPLE_START);
        assert_eq!(lesson.virtual_apple(), Vec2::new(550.0, 476.0));
    }

    #[test]
    fn test_three_rays_hit_the_mirror() {
        let rays = AppleSide::default().rays();
        assert_eq!(rays.len(), 3);
        for ray in &rays {
            assert_eq!(ray.trace.path.segment_count(), 2);
            let hit = ray.hit().unwrap();
            assert_eq!(hit.x, MIRROR_X);
            assert!(hit.y > EYE.y && hit.y < ray.source.y);
            assert_eq!(ray.image, Vec2::new(550.0, ray.source.y));
        }
        // Higher points on the apple reflect higher on the mirror.
        assert!(rays[0].hit().unwrap().y < rays[2].hit().unwrap().y);
    }

    #[test]
    fn test_drag_is_horizontal_and_clamped() {
        let lesson = AppleSide::default()
            .update(Event::Pointer(Pointer::Down(APPLE_START)))
            .update(Event::Pointer(Pointer::Move(Vec2::new(700.0, 100.0))));
        assert_eq!(lesson.apple(), Vec2::new(350.0, APPLE_START.y));
        assert_eq!(lesson.virtual_apple(), Vec2::new(450.0, APPLE_START.y));
        let lesson = lesson
            .update(Event::Pointer(Pointer::Move(Vec2::new(-10.0, 476.0))))
            .update(Event::Pointer(Pointer::Up))
            .update(Event::Pointer(Pointer::Move(Vec2::new(200.0, 476.0))));
        assert_eq!(lesson.apple().x, 50.0);
    }

    #[test]
    fn test_overlays_control_drawing() {
        let options = Options::default();
        let lines = |lesson: &AppleSide| {
            lesson
                .render(&options)
                .count(|s| matches!(s, Shape::Line { stroke, .. } if stroke.color == palette::APPLE_RAY))
        };
        let plain = AppleSide::default();
        assert_eq!(lines(&plain), 0);
        let rays = plain.update(Event::Show(Overlay::RealRays, true));
        assert_eq!(lines(&rays), 6);
        let both = rays.update(Event::Show(Overlay::VirtualImage, true));
        assert_eq!(lines(&both), 9);
        assert!(both.shows(Overlay::VirtualImage));
    }
}
