//! Navigation between the home screen and the lessons.
//!
//! A [`Session`] owns whatever lesson is open. Opening a lesson always starts
//! from its initial state, and going back to the home screen drops it.

use glam::Vec2;
use mirrorlab_core::{Options, Result};
use mirrorlab_lessons::{
    apple_double_mirror, apple_side, apple_top, color, human_double_mirror, human_mirror,
    human_sixty_degree, tube, AppleDoubleMirror, AppleSide, AppleTop, ColorLesson,
    HumanDoubleMirror, HumanMirror, HumanSixtyDegree, Lesson, Tube,
};
use mirrorlab_render::{palette, Scene, Stroke, ViewBox};

use crate::catalog::LessonId;

/// State of the open lesson.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveLesson {
    Color(ColorLesson),
    AppleSide(AppleSide),
    AppleTop(AppleTop),
    AppleDoubleMirror(AppleDoubleMirror),
    HumanMirror(HumanMirror),
    HumanDoubleMirror(HumanDoubleMirror),
    HumanSixtyDegree(HumanSixtyDegree),
    Tube(Tube),
}

impl ActiveLesson {
    /// The initial state of lesson `id`.
    pub fn new(id: LessonId) -> Self {
        match id {
            LessonId::Color => Self::Color(ColorLesson::default()),
            LessonId::AppleSide => Self::AppleSide(AppleSide::default()),
            LessonId::AppleTop => Self::AppleTop(AppleTop::default()),
            LessonId::AppleDoubleMirror => Self::AppleDoubleMirror(AppleDoubleMirror::default()),
            LessonId::HumanMirror => Self::HumanMirror(HumanMirror::default()),
            LessonId::HumanDoubleMirror => Self::HumanDoubleMirror(HumanDoubleMirror::default()),
            LessonId::HumanSixtyDegree => Self::HumanSixtyDegree(HumanSixtyDegree::default()),
            LessonId::Tube => Self::Tube(Tube::default()),
        }
    }

    pub fn id(&self) -> LessonId {
        match self {
            Self::Color(_) => LessonId::Color,
            Self::AppleSide(_) => LessonId::AppleSide,
            Self::AppleTop(_) => LessonId::AppleTop,
            Self::AppleDoubleMirror(_) => LessonId::AppleDoubleMirror,
            Self::HumanMirror(_) => LessonId::HumanMirror,
            Self::HumanDoubleMirror(_) => LessonId::HumanDoubleMirror,
            Self::HumanSixtyDegree(_) => LessonId::HumanSixtyDegree,
            Self::Tube(_) => LessonId::Tube,
        }
    }

    pub fn view_box(&self) -> ViewBox {
        match self {
            Self::Color(l) => l.view_box(),
            Self::AppleSide(l) => l.view_box(),
            Self::AppleTop(l) => l.view_box(),
            Self::AppleDoubleMirror(l) => l.view_box(),
            Self::HumanMirror(l) => l.view_box(),
            Self::HumanDoubleMirror(l) => l.view_box(),
            Self::HumanSixtyDegree(l) => l.view_box(),
            Self::Tube(l) => l.view_box(),
        }
    }

    pub fn render(&self, options: &Options) -> Scene {
        match self {
            Self::Color(l) => l.render(options),
            Self::AppleSide(l) => l.render(options),
            Self::AppleTop(l) => l.render(options),
            Self::AppleDoubleMirror(l) => l.render(options),
            Self::HumanMirror(l) => l.render(options),
            Self::HumanDoubleMirror(l) => l.render(options),
            Self::HumanSixtyDegree(l) => l.render(options),
            Self::Tube(l) => l.render(options),
        }
    }

    /// Applies `event` if it belongs to this lesson. Returns whether it did.
    pub fn apply(&mut self, event: LessonEvent) -> bool {
        match (self, event) {
            (Self::Color(l), LessonEvent::Color(e)) => *l = l.update(e),
            (Self::AppleSide(l), LessonEvent::AppleSide(e)) => *l = l.update(e),
            (Self::AppleTop(l), LessonEvent::AppleTop(e)) => *l = l.update(e),
            (Self::AppleDoubleMirror(l), LessonEvent::AppleDoubleMirror(e)) => *l = l.update(e),
            (Self::HumanMirror(l), LessonEvent::HumanMirror(e)) => *l = l.update(e),
            (Self::HumanDoubleMirror(l), LessonEvent::HumanDoubleMirror(e)) => *l = l.update(e),
            (Self::HumanSixtyDegree(l), LessonEvent::HumanSixtyDegree(e)) => *l = l.update(e),
            (Self::Tube(l), LessonEvent::Tube(e)) => *l = l.update(e),
            _ => return false,
        }
        true
    }
}

/// An event addressed to one lesson.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LessonEvent {
    Color(color::Event),
    AppleSide(apple_side::Event),
    AppleTop(apple_top::Event),
    AppleDoubleMirror(apple_double_mirror::Event),
    HumanMirror(human_mirror::Event),
    HumanDoubleMirror(human_double_mirror::Event),
    HumanSixtyDegree(human_sixty_degree::Event),
    Tube(tube::Event),
}

impl LessonEvent {
    /// The lesson this event is meant for.
    pub fn lesson(&self) -> LessonId {
        match self {
            Self::Color(_) => LessonId::Color,
            Self::AppleSide(_) => LessonId::AppleSide,
            Self::AppleTop(_) => LessonId::AppleTop,
            Self::AppleDoubleMirror(_) => LessonId::AppleDoubleMirror,
            Self::HumanMirror(_) => LessonId::HumanMirror,
            Self::HumanDoubleMirror(_) => LessonId::HumanDoubleMirror,
            Self::HumanSixtyDegree(_) => LessonId::HumanSixtyDegree,
            Self::Tube(_) => LessonId::Tube,
        }
    }
}

macro_rules! lesson_event_from {
    ($($module:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$module::Event> for LessonEvent {
                fn from(event: $module::Event) -> Self {
                    Self::$variant(event)
                }
            }
        )*
    };
}

lesson_event_from! {
    color => Color,
    apple_side => AppleSide,
    apple_top => AppleTop,
    apple_double_mirror => AppleDoubleMirror,
    human_mirror => HumanMirror,
    human_double_mirror => HumanDoubleMirror,
    human_sixty_degree => HumanSixtyDegree,
    tube => Tube,
}

/// What is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Screen {
    /// The lesson list.
    #[default]
    Home,
    Lesson(ActiveLesson),
}

/// A learner's walk through the lessons.
#[derive(Debug, Clone, Default)]
pub struct Session {
    screen: Screen,
    options: Options,
}

impl Session {
    /// Creates a session on the home screen.
    pub fn new(options: Options) -> Self {
        Self {
            screen: Screen::Home,
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The open lesson, if any.
    pub fn active(&self) -> Option<LessonId> {
        match &self.screen {
            Screen::Home => None,
            Screen::Lesson(lesson) => Some(lesson.id()),
        }
    }

    /// Opens lesson `id` in its initial state, replacing whatever was open.
    pub fn open(&mut self, id: LessonId) {
        log::info!("opening lesson '{id}'");
        self.screen = Screen::Lesson(ActiveLesson::new(id));
    }

    /// Opens the lesson registered under `key`.
    pub fn open_key(&mut self, key: &str) -> Result<()> {
        let id = key.parse()?;
        self.open(id);
        Ok(())
    }

    /// Returns to the home screen, dropping the open lesson.
    pub fn back(&mut self) {
        if let Some(id) = self.active() {
            log::info!("leaving lesson '{id}'");
        }
        self.screen = Screen::Home;
    }

    /// Routes `event` to the open lesson. Events for any other lesson, or
    /// sent from the home screen, are ignored. Returns whether the event was
    /// applied.
    pub fn dispatch(&mut self, event: impl Into<LessonEvent>) -> bool {
        let event = event.into();
        let applied = match &mut self.screen {
            Screen::Lesson(lesson) => lesson.apply(event),
            Screen::Home => false,
        };
        if !applied {
            log::warn!(
                "ignoring event for '{}' while {} is open",
                event.lesson(),
                self.active()
                    .map_or_else(|| "the home screen".to_string(), |id| format!("'{id}'"))
            );
        }
        applied
    }

    /// Draws the current screen.
    pub fn render(&self) -> Scene {
        match &self.screen {
            Screen::Home => render_home(&self.options),
            Screen::Lesson(lesson) => lesson.render(&self.options),
        }
    }
}

/// Size of a lesson card on the home screen.
const CARD: Vec2 = Vec2::new(350.0, 110.0);

/// Top-left corner of the card for `id`.
pub fn card_origin(id: LessonId) -> Vec2 {
    let i = LessonId::ALL.iter().position(|l| *l == id).unwrap_or(0);
    let (row, col) = (i / 2, i % 2);
    Vec2::new(40.0 + 370.0 * col as f32, 80.0 + 125.0 * row as f32)
}

/// The lesson whose card contains `point`, for hit-testing clicks.
pub fn card_at(point: Vec2) -> Option<LessonId> {
    LessonId::ALL.into_iter().find(|&id| {
        let min = card_origin(id);
        let max = min + CARD;
        point.cmpge(min).all() && point.cmple(max).all()
    })
}

fn render_home(options: &Options) -> Scene {
    let mut scene = Scene::new(ViewBox::MIRROR, options);
    scene.text(Vec2::new(400.0, 50.0), "Science room", 28.0, palette::INK);
    for id in LessonId::ALL {
        let min = card_origin(id);
        scene.rect(
            min,
            CARD,
            Some(palette::WHITE),
            Some(Stroke::new(palette::MIRROR_EDGE, 2.0)),
        );
        let middle = min.x + CARD.x * 0.5;
        scene.text(Vec2::new(middle, min.y + 45.0), id.title(), 20.0, palette::INK);
        scene.text(Vec2::new(middle, min.y + 80.0), id.subtitle(), 14.0, palette::MUTED);
    }
    scene
}
