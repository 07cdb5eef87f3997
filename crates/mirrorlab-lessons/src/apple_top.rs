//! A plane mirror seen from above.

use glam::Vec2;
use mirrorlab_core::{trace_reflections, AxisLine, Bounds, Mirror, Segment, Trace};
use mirrorlab_render::{glyphs, palette, Scene, ViewBox};

use crate::drag::{Draggable, Pointer};
use crate::Lesson;

pub const MIRROR_Y: f32 = 300.0;
pub const EYE: Vec2 = Vec2::new(400.0, 500.0);
pub const APPLE_START: Vec2 = Vec2::new(250.0, 400.0);
const APPLE_SIZE: f32 = 48.0;

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

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppleTop {
    apple: Draggable,
    real_rays: bool,
    virtual_image: bool,
}

impl Default for AppleTop {
    fn default() -> Self {
        Self {
            apple: Draggable::new(APPLE_START, Bounds::from_ranges((50.0, 750.0), (350.0, 550.0))),
            real_rays: false,
            virtual_image: false,
        }
    }
}

impl AppleTop {
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
        Mirror::Line(AxisLine::horizontal(MIRROR_Y))
    }

    pub fn virtual_apple(&self) -> Vec2 {
        Self::mirror().reflect_point(self.apple())
    }

    /// The path from the apple over the mirror to the eye.
    pub fn ray(&self) -> Option<Trace> {
        trace_reflections(self.apple(), EYE, &[Self::mirror()])
    }
}

impl Lesson for AppleTop {
    type Event = Event;

    const KEY: &'static str = "apple-top";

    fn view_box(&self) -> ViewBox {
        ViewBox::MIRROR
    }

    fn update(mut self, event: Event) -> Self {
        match event {
            Event::Pointer(p) => self.apple = self.apple.handle(p),
            Event::Show(Overlay::RealRays, on) => self.real_rays = on,
            Event::Show(Overlay::VirtualImage, on) => self.virtual_image = on,
        }
        log::debug!("apple top view: apple at {}", self.apple());
        self
    }

    fn draw(&self, scene: &mut Scene) {
        glyphs::mirror_pane(
            scene,
            &Segment::new(Vec2::new(50.0, MIRROR_Y), Vec2::new(750.0, MIRROR_Y)),
            10.0,
            Vec2::new(EYE.x, 0.0),
        );
        glyphs::eye(scene, EYE, 48.0);

        let image = self.virtual_apple();
        if self.virtual_image {
            scene.line(image, EYE, scene.guide_stroke(palette::APPLE_RAY));
        }
        if self.real_rays {
            if let Some(hit) = self.ray().and_then(|t| t.hits().first().copied()) {
                let stroke = scene.ray_stroke(palette::APPLE_RAY);
                scene.line(self.apple(), hit, stroke.with_dash(6.0, 3.0));
                scene.line(hit, EYE, stroke);
            }
        }
        if self.virtual_image {
            scene.group(scene.image_opacity(), |s| {
                glyphs::apple(s, image, APPLE_SIZE, palette::CHANNEL_RED);
            });
        }
        glyphs::apple(scene, self.apple(), APPLE_SIZE, palette::CHANNEL_RED);
    }
}
