//! mirrorlab: interactive optics lessons for children.
//!
//! Learners change the color of an apple behind cellophane, drag objects in
//! front of mirrors, reveal virtual images and hidden light paths, and pick
//! the mirrors inside a closed tube. Every lesson is a small state machine
//! whose state is redrawn as an SVG scene after each event.
//!
//! # Quick Start
//!
//! ```no_run
//! use mirrorlab::*;
//! use mirrorlab::lessons::apple_top::{Event, Overlay};
//!
//! fn main() -> Result<()> {
//!     init();
//!
//!     let mut session = Session::new(Options::default());
//!     session.open(LessonId::AppleTop);
//!     session.dispatch(Event::Show(Overlay::VirtualImage, true));
//!     render_to_file(&session, "apple_top.svg")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! - [`geometry`] - reflections, intersections, ray paths and the color model
//! - [`render`] - the SVG [`Scene`] and its drawing primitives
//! - [`lessons`] - one state machine per lesson
//!
//! This crate adds the lesson [`catalog`](LessonId), the [`Session`] that
//! moves between the home screen and a lesson, and headless output.

// Home screen layout casts card indices to coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod catalog;
mod headless;
mod session;

pub use mirrorlab_core as geometry;
pub use mirrorlab_lessons as lessons;
pub use mirrorlab_render as render;

// Re-export core types
pub use mirrorlab_core::{
    Color, Filter, MirrorKind, MirrorlabError, Options, Result, Vec2, Vec3,
};

// Re-export render types
pub use mirrorlab_render::{Scene, ViewBox};

// Re-export lessons
pub use mirrorlab_lessons::{
    AppleDoubleMirror, AppleSide, AppleTop, ColorLesson, HumanDoubleMirror, HumanMirror,
    HumanSixtyDegree, Lesson, Pointer, Tube,
};

pub use catalog::LessonId;
pub use headless::{render_lesson, render_to_file, render_to_string};
pub use session::{card_at, card_origin, ActiveLesson, LessonEvent, Screen, Session};

/// Sets up logging from `RUST_LOG`.
///
/// Safe to call more than once; later calls leave the existing logger in
/// place.
pub fn init() {
    let _ = env_logger::try_init();
    log::info!("mirrorlab initialized");
}
