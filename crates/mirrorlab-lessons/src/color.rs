//! How colors look through cellophane.
//!
//! Sunlight passes a sheet of cellophane, lights an apple lying on a sheet of
//! paper, and the reflected light passes the cellophane again on its way to
//! the eye. The learner picks the apple color, the paper color and the
//! cellophane; the diagram shows the light along both routes as dotted beams
//! and a preview card shows what the eye sees.
//!
//! Coordinates are percentages of the diagram.

use glam::Vec2;
use mirrorlab_core::{axis_crossing, Axis, Color, Filter, LightPath};
use mirrorlab_render::{glyphs, palette, Scene, Stroke, ViewBox};

use crate::Lesson;

pub const SUN: Vec2 = Vec2::new(10.0, 10.0);
pub const EYE: Vec2 = Vec2::new(90.0, 10.0);
/// Height of the cellophane plane.
pub const CELLOPHANE_Y: f32 = 35.0;
/// Where the beams touch the apple.
pub const APPLE: Vec2 = Vec2::new(50.0, 71.0);
/// Where the beams touch the paper, just above the apple.
pub const PAPER: Vec2 = Vec2::new(50.0, 59.0);

/// Events of the color lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SetObject(Color),
    SetPaper(Color),
    SetFilter(Filter),
}

/// One dotted stretch of light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

/// Light on its way from the sun to one target and back to the eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    /// Channel stages of the light.
    pub light: LightPath,
    /// Where the incoming light crosses the cellophane.
    pub entry: Vec2,
    /// Where the reflected light crosses the cellophane.
    pub exit: Vec2,
    /// The lit object.
    pub target: Vec2,
}

impl Route {
    fn new(target: Vec2, base: Color, filter: Filter) -> Option<Self> {
        Some(Self {
            light: LightPath::through(base, filter),
            entry: axis_crossing(SUN, target, Axis::Y, CELLOPHANE_Y)?,
            exit: axis_crossing(target, EYE, Axis::Y, CELLOPHANE_Y)?,
            target,
        })
    }

    /// The four beams: sun to cellophane, cellophane to object, object to
    /// cellophane, cellophane to eye.
    pub fn beams(&self) -> [Beam; 4] {
        let seen = self.light.perceived_color();
        [
            Beam {
                from: SUN,
                to: self.entry,
                color: self.light.incident.to_color(),
            },
            Beam {
                from: self.entry,
                to: self.target,
                color: self.light.filtered.to_color(),
            },
            Beam {
                from: self.target,
                to: self.exit,
                color: seen,
            },
            Beam {
                from: self.exit,
                to: EYE,
                color: seen,
            },
        ]
    }
}

/// State of the color lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorLesson {
    object: Color,
    paper: Color,
    filter: Filter,
}

impl Default for ColorLesson {
    fn default() -> Self {
        Self {
            object: Color::Red,
            paper: Color::White,
            filter: Filter::None,
        }
    }
}

impl ColorLesson {
    pub fn object(&self) -> Color {
        self.object
    }

    pub fn paper(&self) -> Color {
        self.paper
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The apple color the eye sees.
    pub fn perceived_object(&self) -> Color {
        mirrorlab_core::perceived_color(self.object, self.filter)
    }

    /// The paper color the eye sees.
    pub fn perceived_paper(&self) -> Color {
        mirrorlab_core::perceived_color(self.paper, self.filter)
    }

    /// Light reaching the eye from the apple.
    pub fn object_route(&self) -> Option<Route> {
        Route::new(APPLE, self.object, self.filter)
    }

    /// Light reaching the eye from the paper.
    pub fn paper_route(&self) -> Option<Route> {
        Route::new(PAPER, self.paper, self.filter)
    }

    fn draw_setup(&self, scene: &mut Scene) {
        scene.rounded_rect(
            Vec2::new(30.0, 52.0),
            Vec2::new(40.0, 26.0),
            3.0,
            palette::paper(self.paper),
        );
        scene.rect(
            Vec2::new(30.0, 52.0),
            Vec2::new(40.0, 26.0),
            None,
            Some(Stroke::new(palette::MIRROR_EDGE, 0.3)),
        );
        glyphs::apple(scene, APPLE, 10.0, palette::surface(self.object));

        let tint = match self.filter {
            Filter::None => None,
            Filter::Red => Some(palette::CHANNEL_RED),
            Filter::Blue => Some(palette::CHANNEL_BLUE),
        };
        if let Some(tint) = tint {
            scene.group(0.5, |s| {
                s.rounded_rect(Vec2::new(15.0, CELLOPHANE_Y - 2.0), Vec2::new(70.0, 4.0), 1.0, tint);
            });
        }
    }

    fn draw_preview(&self, scene: &mut Scene) {
        let card = Vec2::new(38.0, 83.0);
        let size = Vec2::new(24.0, 15.0);
        scene.rect(card, size, Some(palette::paper(self.perceived_paper())), Some(Stroke::new(palette::MIRROR_EDGE, 0.3)));
        glyphs::apple(scene, card + size * 0.5, 9.0, palette::surface(self.perceived_object()));
        scene.label(Vec2::new(75.0, 91.0), format!("apple looks {}", self.perceived_object()), 2.5);
        scene.label(Vec2::new(75.0, 95.0), format!("paper looks {}", self.perceived_paper()), 2.5);
    }
}

impl Lesson for ColorLesson {
    type Event = Event;

    const KEY: &'static str = "color";

    fn view_box(&self) -> ViewBox {
        ViewBox::PERCENT
    }

    fn update(mut self, event: Event) -> Self {
        match event {
            Event::SetObject(c) => self.object = c,
            Event::SetPaper(c) => self.paper = c,
            Event::SetFilter(f) => self.filter = f,
        }
        log::debug!(
            "color lesson: {} apple on {} paper under {} cellophane looks {}",
            self.object,
            self.paper,
            self.filter,
            self.perceived_object()
        );
        self
    }

    fn draw(&self, scene: &mut Scene) {
        self.draw_setup(scene);
        for route in [self.object_route(), self.paper_route()].into_iter().flatten() {
            for beam in route.beams() {
                scene.beam(beam.from, beam.to, beam.color);
            }
        }
        glyphs::sun(scene, SUN, 10.0);
        glyphs::eye(scene, EYE, 8.0);
        scene.label(Vec2::new(15.0, CELLOPHANE_Y - 3.0), "cellophane", 2.5);
        self.draw_preview(scene);
    }
}
