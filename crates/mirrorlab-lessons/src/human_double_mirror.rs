//! A person standing in a right-angle mirror corner.
//!
//! Uses the same corner as the apple lesson. The two single-mirror images
//! hold the apple in the left hand; the image across the corner has been
//! reflected twice and holds it in the right hand again.

use glam::Vec2;
use mirrorlab_core::{trace_reflections, Figure, Trace};
use mirrorlab_render::{glyphs, palette, Scene, ViewBox};

use crate::apple_double_mirror::{corner, draw_corner};
use crate::human_mirror::draw_front_card;
use crate::Lesson;

pub const EYE: Vec2 = Vec2::new(200.0, 500.0);
pub const APPLE_HAND: Vec2 = Vec2::new(240.0, 540.0);
pub const FREE_HAND: Vec2 = Vec2::new(160.0, 460.0);
const ARM_WIDTH: f32 = 8.0;
const CENTER_OPACITY: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Top,
    Right,
    /// The image formed by both mirrors.
    Center,
}

impl Overlay {
    pub const ALL: [Self; 3] = [Self::Top, Self::Right, Self::Center];

    fn title(self) -> &'static str {
        match self {
            Self::Top => "top image",
            Self::Right => "right image",
            Self::Center => "far image",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Show(Overlay, bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HumanDoubleMirror {
    top: bool,
    right: bool,
    center: bool,
}

impl HumanDoubleMirror {
    pub fn shows(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Top => self.top,
            Overlay::Right => self.right,
            Overlay::Center => self.center,
        }
    }

    pub fn person() -> Figure {
        Figure::new(EYE, APPLE_HAND, FREE_HAND)
    }

    pub fn image(overlay: Overlay) -> Figure {
        let corner = corner();
        let person = Self::person();
        match overlay {
            Overlay::Top => person.reflect(&corner.horizontal_mirror()),
            Overlay::Right => person.reflect(&corner.vertical_mirror()),
            Overlay::Center => person.map(|p| corner.double_image(p)),
        }
    }

    /// Light from the apple to the eye that forms the image.
    pub fn ray(overlay: Overlay) -> Option<Trace> {
        let corner = corner();
        match overlay {
            Overlay::Top => trace_reflections(APPLE_HAND, EYE, &[corner.horizontal_mirror()]),
            Overlay::Right => trace_reflections(APPLE_HAND, EYE, &[corner.vertical_mirror()]),
            Overlay::Center => corner.trace_double(APPLE_HAND, EYE).map(|(_, trace)| trace),
        }
    }

    fn draw_image(scene: &mut Scene, overlay: Overlay) {
        let image = Self::image(overlay);
        let opacity = match overlay {
            Overlay::Center => CENTER_OPACITY,
            Overlay::Top | Overlay::Right => scene.image_opacity(),
        };
        scene.line(EYE, image.head, scene.guide_stroke(palette::INK).with_opacity(0.3));
        scene.group(opacity, |s| glyphs::figure(s, &image, ARM_WIDTH));

        let Some(ray) = Self::ray(overlay) else {
            return;
        };
        scene.ray_path(&ray.path, scene.ray_stroke(palette::RAY));
        let guide = scene.guide_stroke(palette::RAY_GUIDE);
        match overlay {
            Overlay::Center => scene.line(image.apple_hand, EYE, guide.with_opacity(CENTER_OPACITY)),
            Overlay::Top | Overlay::Right => {
                if let Some(hit) = ray.hits().last() {
                    scene.line(image.apple_hand, *hit, guide);
                }
            }
        }
    }
}

impl Lesson for HumanDoubleMirror {
    type Event = Event;

    const KEY: &'static str = "human-double-mirror";

    fn view_box(&self) -> ViewBox {
        ViewBox::MIRROR
    }

    fn update(mut self, event: Event) -> Self {
        match event {
            Event::Show(Overlay::Top, on) => self.top = on,
            Event::Show(Overlay::Right, on) => self.right = on,
            Event::Show(Overlay::Center, on) => self.center = on,
        }
        log::debug!("human double mirror: {self:?}");
        self
    }

    fn draw(&self, scene: &mut Scene) {
        draw_corner(scene, &corner());
        glyphs::figure(scene, &Self::person(), ARM_WIDTH);
        for overlay in Overlay::ALL {
            if self.shows(overlay) {
                Self::draw_image(scene, overlay);
            }
        }

        let person = Self::person();
        for (i, overlay) in Overlay::ALL.into_iter().enumerate() {
            let min = Vec2::new(10.0, 20.0 + 190.0 * i as f32);
            let apple_on_left = self
                .shows(overlay)
                .then(|| Self::image(overlay).holds_apple_right(person.head));
            draw_front_card(scene, min, overlay.title(), apple_on_left, 1.0);
        }
    }
}
