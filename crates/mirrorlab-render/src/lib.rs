//! SVG rendering backend for mirrorlab.
//!
//! This crate turns lesson drawings into SVG documents:
//! - [`Scene`] and [`Shape`] as the retained list of drawing primitives
//! - [`glyphs`] for the apple, eye, sun and person pictograms
//! - [`palette`] for the fixed lesson colors
//! - [`ViewBox`] for diagram coordinates and pointer mapping
//! - [`save_svg`] for writing documents to disk

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod export;
pub mod glyphs;
pub mod palette;
pub mod scene;
pub mod svg;
pub mod view;

pub use error::{RenderError, RenderResult};
pub use export::save_svg;
pub use palette::Rgb;
pub use scene::{Scene, Shape, Stroke};
pub use svg::Num;
pub use view::ViewBox;
