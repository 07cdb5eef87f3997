//! A person in front of a plane mirror, seen from above.
//!
//! The person faces the mirror holding an apple in the right hand. The image
//! in the mirror holds the apple on the same side of the picture, which is
//! its left hand. Two front-view cards make the swap visible.

use glam::Vec2;
use mirrorlab_core::{trace_reflections, AxisLine, Figure, Mirror, Segment, Trace};
use mirrorlab_render::{glyphs, palette, Scene, Stroke, ViewBox};

use crate::Lesson;

pub const MIRROR_Y: f32 = 300.0;
pub const EYE: Vec2 = Vec2::new(400.0, 500.0);
/// Distance from the head to each hand.
pub const HAND_OFFSET: f32 = 80.0;
const ARM_WIDTH: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Rays,
    VirtualImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Show(Overlay, bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HumanMirror {
    rays: bool,
    virtual_image: bool,
}

impl HumanMirror {
    pub fn shows(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Rays => self.rays,
            Overlay::VirtualImage => self.virtual_image,
        }
    }

    pub fn mirror() -> Mirror {
        Mirror::Line(AxisLine::horizontal(MIRROR_Y))
    }

    /// The person, facing the mirror, apple in the right hand.
    pub fn person() -> Figure {
        Figure::new(
            EYE,
            EYE + Vec2::new(HAND_OFFSET, 0.0),
            EYE - Vec2::new(HAND_OFFSET, 0.0),
        )
    }

    /// The person's image in the mirror.
    pub fn image() -> Figure {
        Self::person().reflect(&Self::mirror())
    }

    /// Light from the apple over the mirror to the eye.
    pub fn ray() -> Option<Trace> {
        trace_reflections(Self::person().apple_hand, EYE, &[Self::mirror()])
    }

    fn draw_cards(&self, scene: &mut Scene) {
        let person = Self::person();
        let mirror_point = Vec2::new(EYE.x, MIRROR_Y);
        // Seen from the front, a right hand appears on the viewer's left.
        draw_front_card(
            scene,
            Vec2::new(30.0, 400.0),
            "person",
            Some(person.holds_apple_right(mirror_point)),
            1.0,
        );
        let image = self
            .virtual_image
            .then(|| Self::image().holds_apple_right(person.head));
        let faded = scene.image_opacity();
        draw_front_card(scene, Vec2::new(30.0, 90.0), "in the mirror", image, faded);
    }
}

/// Size of a front-view card.
pub(crate) const CARD: Vec2 = Vec2::new(140.0, 170.0);

/// Draws a card with a person seen from the front. `apple_on_left` says on
/// which side of the card the apple appears; `None` leaves the card empty.
pub(crate) fn draw_front_card(
    scene: &mut Scene,
    min: Vec2,
    title: &str,
    apple_on_left: Option<bool>,
    opacity: f32,
) {
    scene.rounded_rect(min, CARD, 12.0, palette::PANEL);
    scene.label(min + Vec2::new(CARD.x * 0.5, 25.0), title, 14.0);
    if let Some(apple_on_left) = apple_on_left {
        let center = min + Vec2::new(CARD.x * 0.5, CARD.y * 0.6);
        scene.group(opacity, |s| glyphs::person_front(s, center, 100.0, apple_on_left));
    }
}

impl Lesson for HumanMirror {
    type Event = Event;

    const KEY: &'static str = "human-mirror";

    fn view_box(&self) -> ViewBox {
        ViewBox::MIRROR
    }

    fn update(mut self, event: Event) -> Self {
        match event {
            Event::Show(Overlay::Rays, on) => self.rays = on,
            Event::Show(Overlay::VirtualImage, on) => self.virtual_image = on,
        }
        log::debug!("human mirror: {self:?}");
        self
    }

    fn draw(&self, scene: &mut Scene) {
        let mirror = Segment::new(Vec2::new(50.0, MIRROR_Y), Vec2::new(750.0, MIRROR_Y));
        scene.line(
            mirror.start,
            mirror.end,
            Stroke::new(palette::MIRROR_EDGE, 2.0).with_dash(4.0, 4.0),
        );
        scene.line(mirror.start, mirror.end, Stroke::new(palette::MIRROR_FACE, 4.0));

        let ray = Self::ray();
        if self.virtual_image {
            if let Some(image) = ray.as_ref().and_then(Trace::final_image) {
                let stroke = scene.guide_stroke(palette::APPLE_RAY).with_opacity(0.4);
                scene.line(image, EYE, stroke);
            }
        }
        if self.rays {
            if let Some(ray) = &ray {
                scene.ray_path(&ray.path, scene.ray_stroke(palette::APPLE_RAY));
            }
        }
        if self.virtual_image {
            let image = Self::image();
            scene.group(scene.image_opacity(), |s| glyphs::figure(s, &image, ARM_WIDTH));
        }
        glyphs::figure(scene, &Self::person(), ARM_WIDTH);
        self.draw_cards(scene);
    }
}
