//! Rendering without a display.
//!
//! Turns the current screen of a [`Session`] into an SVG document, either as
//! a string or written to a file. Useful for tests, batch export and the
//! lesson gallery.

use std::path::Path;

use mirrorlab_core::{MirrorlabError, Options, Result};
use mirrorlab_render::{save_svg, Scene};

use crate::catalog::LessonId;
use crate::session::{ActiveLesson, Session};

/// Renders the current screen of `session` to SVG text.
///
/// # Example
/// ```
/// use mirrorlab::*;
///
/// let mut session = Session::default();
/// session.open(LessonId::AppleTop);
/// let svg = render_to_string(&session);
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn render_to_string(session: &Session) -> String {
    session.render().to_svg()
}

/// Renders the current screen of `session` to an `.svg` file.
pub fn render_to_file(session: &Session, path: impl AsRef<Path>) -> Result<()> {
    save_svg(path, &session.render())
        .map_err(|e| MirrorlabError::RenderError(format!("failed to save scene: {e}")))
}

/// Renders lesson `id` in its initial state.
pub fn render_lesson(id: LessonId, options: &Options) -> Scene {
    ActiveLesson::new(id).render(options)
}
