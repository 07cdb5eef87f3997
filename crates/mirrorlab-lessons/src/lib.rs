//! Lesson implementations for mirrorlab.
//!
//! Each lesson is a small state machine over plain values:
//! - [`ColorLesson`] - how cellophane changes the color of an apple and paper
//! - [`AppleSide`], [`AppleTop`] - one plane mirror, seen from the side and above
//! - [`AppleDoubleMirror`] - two mirrors at a right angle and the third image
//! - [`HumanMirror`], [`HumanDoubleMirror`] - the same with a person holding an apple
//! - [`HumanSixtyDegree`] - five images between mirrors at 60 degrees
//! - [`Tube`] - a closed tube whose hidden mirrors the learner chooses
//!
//! All lessons implement [`Lesson`]: events go in through [`Lesson::update`],
//! and [`Lesson::draw`] paints the current state into a [`Scene`].

// Geometry code uses casts for indices and angles
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
// Lesson state is a set of independent on/off toggles
#![allow(clippy::struct_excessive_bools)]

pub mod apple_double_mirror;
pub mod apple_side;
pub mod apple_top;
pub mod color;
pub mod drag;
pub mod human_double_mirror;
pub mod human_mirror;
pub mod human_sixty_degree;
pub mod tube;

use std::fmt;

use mirrorlab_core::Options;
use mirrorlab_render::{Scene, ViewBox};

pub use apple_double_mirror::AppleDoubleMirror;
pub use apple_side::AppleSide;
pub use apple_top::AppleTop;
pub use color::ColorLesson;
pub use drag::{Draggable, Pointer};
pub use human_double_mirror::HumanDoubleMirror;
pub use human_mirror::HumanMirror;
pub use human_sixty_degree::HumanSixtyDegree;
pub use tube::Tube;

/// An interactive lesson.
///
/// `Default` is the scene a learner sees on entering the lesson. State only
/// changes through [`update`](Lesson::update), which consumes the old state
/// and returns the new one; everything drawn is derived from that state.
pub trait Lesson: Default + Clone + fmt::Debug {
    /// Events the lesson reacts to.
    type Event: fmt::Debug;

    /// Stable kebab-case identifier.
    const KEY: &'static str;

    /// The diagram coordinate space.
    fn view_box(&self) -> ViewBox;

    /// Applies one event.
    #[must_use]
    fn update(self, event: Self::Event) -> Self;

    /// Paints the current state.
    fn draw(&self, scene: &mut Scene);

    /// Paints the current state into a new scene.
    fn render(&self, options: &Options) -> Scene {
        let mut scene = Scene::new(self.view_box(), options);
        self.draw(&mut scene);
        scene
    }
}
