//! Core abstractions for mirrorlab.
//!
//! This crate provides the geometry and light model shared by every lesson:
//! - [`reflect`] and [`AxisLine`] for mirroring points across axis-aligned lines
//! - [`segment_intersection`] and [`axis_crossing`] for locating hit points
//! - [`trace_reflections`], [`Corner`] and [`march`] for building light paths
//! - [`perceived_color`] and [`LightPath`] for the cellophane color model
//! - Configuration [`Options`] and the crate [`Result`] type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Small value types return Self from builders; must_use is noise here
#![allow(clippy::must_use_candidate)]
// Scene coordinates are compared against exact constants in a few places
#![allow(clippy::float_cmp)]

pub mod axis;
pub mod bounds;
pub mod color;
pub mod error;
pub mod figure;
pub mod intersect;
pub mod march;
pub mod mirror;
pub mod options;
pub mod trace;

pub use axis::{reflect, Axis, AxisLine};
pub use bounds::Bounds;
pub use color::{perceived_color, Channels, Color, Filter, LightPath};
pub use error::{MirrorlabError, Result};
pub use figure::Figure;
pub use intersect::{axis_crossing, segment_intersection};
pub use march::{march, MarchedRay, Termination};
pub use mirror::{Mirror, MirrorKind, Segment};
pub use options::{Options, MIN_BEAM_FRACTION};
pub use trace::{trace_reflections, Corner, CornerOrder, RayPath, Trace, MAX_REFLECTIONS};

// Re-export glam types for convenience
pub use glam::{Vec2, Vec3};
