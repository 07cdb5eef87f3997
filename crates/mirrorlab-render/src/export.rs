//! Writing scenes to disk.

use std::path::Path;

use crate::error::{RenderError, RenderResult};
use crate::scene::Scene;

/// Saves `scene` as an SVG document.
///
/// # Errors
/// Returns [`RenderError::UnsupportedFormat`] unless the path ends in
/// `.svg`, or [`RenderError::IoError`] if the file cannot be written.
pub fn save_svg(path: impl AsRef<Path>, scene: &Scene) -> RenderResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if extension != "svg" {
        return Err(RenderError::UnsupportedFormat(extension));
    }
    std::fs::write(path, scene.to_svg())?;
    log::info!("wrote {}", path.display());
    Ok(())
}
