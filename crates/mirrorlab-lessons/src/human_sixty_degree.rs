//! Two mirrors at 60 degrees.
//!
//! The mirrors open to the left of the centre. A person stands between them
//! facing the centre, and five images appear around the circle every 60
//! degrees. Images formed by an odd number of reflections hold the apple in
//! the left hand.

use glam::Vec2;
use mirrorlab_core::{trace_reflections, Figure, Mirror, Segment, Trace};
use mirrorlab_render::{glyphs, palette, Scene, Stroke, ViewBox};

use crate::Lesson;

pub const CENTER: Vec2 = Vec2::new(400.0, 300.0);
/// Distance from the centre to the person and every image.
pub const RADIUS: f32 = 150.0;
/// Arm length of each figure.
pub const REACH: f32 = 45.0;
pub const MIRROR_LENGTH: f32 = 400.0;
/// Mirror directions, in degrees.
pub const M1_ANGLE: f32 = 150.0;
pub const M2_ANGLE: f32 = 210.0;
pub const PERSON_ANGLE: f32 = 180.0;
const DRAWN_LENGTH: f32 = 300.0;
const GUIDE_ANGLES: [f32; 4] = [30.0, 90.0, 270.0, 330.0];
const ARM_WIDTH: f32 = 6.0;
const BUTTON_RADIUS: f32 = 240.0;

/// A point at `radius` from the centre in direction `degrees`.
pub fn polar(degrees: f32, radius: f32) -> Vec2 {
    CENTER + Vec2::from_angle(degrees.to_radians()) * radius
}

pub fn m1() -> Segment {
    Segment::new(CENTER, polar(M1_ANGLE, MIRROR_LENGTH))
}

pub fn m2() -> Segment {
    Segment::new(CENTER, polar(M2_ANGLE, MIRROR_LENGTH))
}

/// The five images, numbered clockwise from the person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Image {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Image {
    pub const ALL: [Self; 5] = [Self::One, Self::Two, Self::Three, Self::Four, Self::Five];

    /// Where the image stands on the circle, in degrees.
    pub fn angle(self) -> f32 {
        match self {
            Self::One => 120.0,
            Self::Two => 60.0,
            Self::Three => 0.0,
            Self::Four => 300.0,
            Self::Five => 240.0,
        }
    }

    /// Mirrors in the order the light strikes them.
    pub fn chain(self) -> Vec<Mirror> {
        let (a, b) = (Mirror::from(m1()), Mirror::from(m2()));
        match self {
            Self::One => vec![a],
            Self::Two => vec![b, a],
            Self::Three => vec![a, b, a],
            Self::Four => vec![a, b],
            Self::Five => vec![b],
        }
    }

    fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
            Self::Four => 3,
            Self::Five => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Show(Image, bool),
    ShowRays(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HumanSixtyDegree {
    images: [bool; 5],
    rays: bool,
}

impl HumanSixtyDegree {
    pub fn shows(&self, image: Image) -> bool {
        self.images[image.index()]
    }

    pub fn shows_rays(&self) -> bool {
        self.rays
    }

    /// The person, facing the centre, apple in the right hand.
    pub fn person() -> Figure {
        let facing = (PERSON_ANGLE + 180.0).to_radians();
        Figure::facing(polar(PERSON_ANGLE, RADIUS), facing, REACH)
    }

    pub fn image(image: Image) -> Figure {
        Self::person().reflect_chain(&image.chain())
    }

    /// Light from the apple to the eye that forms `image`.
    pub fn ray(image: Image) -> Option<Trace> {
        let person = Self::person();
        trace_reflections(person.apple_hand, person.head, &image.chain())
    }

    fn draw_buttons(&self, scene: &mut Scene) {
        for image in Image::ALL {
            let at = polar(image.angle(), BUTTON_RADIUS);
            let number = (image.index() + 1).to_string();
            if self.shows(image) {
                scene.circle(at, 32.0, palette::RAY);
                scene.text(at + Vec2::new(0.0, 8.0), number, 24.0, palette::WHITE);
            } else {
                scene.circle(at, 32.0, palette::WHITE);
                scene.ring(at, 32.0, Stroke::new(palette::MIRROR_EDGE, 2.0));
                scene.text(at + Vec2::new(0.0, 8.0), number, 24.0, palette::MUTED);
            }
        }
        scene.rounded_rect(Vec2::new(320.0, 20.0), Vec2::new(160.0, 36.0), 18.0, palette::PANEL);
        let mark = Vec2::new(345.0, 38.0);
        if self.rays {
            scene.circle(mark, 8.0, palette::RAY);
        } else {
            scene.ring(mark, 8.0, Stroke::new(palette::MUTED, 2.0));
        }
        scene.label(Vec2::new(415.0, 43.0), "light paths", 14.0);
    }
}

impl Lesson for HumanSixtyDegree {
    type Event = Event;

    const KEY: &'static str = "human-sixty-degree";

    fn view_box(&self) -> ViewBox {
        ViewBox::SQUARE
    }

    fn update(mut self, event: Event) -> Self {
        match event {
            Event::Show(image, on) => self.images[image.index()] = on,
            Event::ShowRays(on) => self.rays = on,
        }
        log::debug!("sixty degree mirrors: {self:?}");
        self
    }

    fn draw(&self, scene: &mut Scene) {
        let guide = Stroke::new(palette::MIRROR_EDGE, 2.0).with_dash(4.0, 4.0);
        for angle in GUIDE_ANGLES {
            scene.line(CENTER, polar(angle, DRAWN_LENGTH), guide);
        }
        for angle in [M1_ANGLE, M2_ANGLE] {
            scene.line(CENTER, polar(angle, DRAWN_LENGTH), Stroke::new(palette::MIRROR_FACE, 4.0));
        }

        glyphs::figure(scene, &Self::person(), ARM_WIDTH);
        let faded = scene.image_opacity();
        for image in Image::ALL.into_iter().filter(|i| self.shows(*i)) {
            let figure = Self::image(image);
            scene.group(faded, |s| glyphs::figure(s, &figure, ARM_WIDTH));
        }

        if self.rays {
            for image in Image::ALL.into_iter().filter(|i| self.shows(*i)) {
                let Some(ray) = Self::ray(image) else {
                    log::debug!("image {image:?} is not visible from the eye");
                    continue;
                };
                // The eye sees the image along the leg after the last hit.
                if let Some(hit) = ray.hits().last() {
                    let apple = Self::image(image).apple_hand;
                    scene.line(apple, *hit, scene.guide_stroke(palette::RAY_GUIDE));
                }
                scene.ray_path(&ray.path, scene.ray_stroke(palette::RAY));
            }
        }
        self.draw_buttons(scene);
    }
}
