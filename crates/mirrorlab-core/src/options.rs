//! Configuration options for mirrorlab.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{MirrorlabError, Result};

/// Smallest accepted beam dot spacing and radius, as a fraction of view width.
pub const MIN_BEAM_FRACTION: f32 = 1e-3;

/// Rendering options shared by every lesson.
///
/// Lengths given as fractions are relative to the width of the lesson's view
/// box, so the same options suit the 0..100 color diagram and the 0..800
/// mirror diagrams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Output width in pixels.
    pub width: u32,

    /// Output height in pixels.
    pub height: u32,

    /// Background color.
    pub background_color: Vec3,

    /// Distance between dots of a colored light beam (fraction of view width).
    pub beam_dot_spacing: f32,

    /// Radius of a beam dot (fraction of view width).
    pub beam_dot_radius: f32,

    /// Stroke width of real light rays (fraction of view width).
    pub ray_width: f32,

    /// Opacity of real light rays.
    pub ray_opacity: f32,

    /// Opacity of virtual images.
    pub image_opacity: f32,

    /// Whether to draw text labels.
    pub show_labels: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background_color: Vec3::new(0.973, 0.980, 0.988),
            beam_dot_spacing: 0.015,
            beam_dot_radius: 0.004,
            ray_width: 0.0025,
            ray_opacity: 0.8,
            image_opacity: 0.5,
            show_labels: true,
        }
    }
}

impl Options {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the background color.
    pub fn with_background(mut self, color: Vec3) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the dot spacing of colored beams.
    pub fn with_beam_dot_spacing(mut self, spacing: f32) -> Self {
        self.beam_dot_spacing = spacing;
        self
    }

    /// Enables or disables text labels.
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MirrorlabError::InvalidOption {
                name: "width/height",
                reason: format!("output size {}x{} is empty", self.width, self.height),
            });
        }
        for (name, value) in [
            ("beam_dot_spacing", self.beam_dot_spacing),
            ("beam_dot_radius", self.beam_dot_radius),
        ] {
            if !(value.is_finite() && value >= MIN_BEAM_FRACTION) {
                return Err(MirrorlabError::InvalidOption {
                    name,
                    reason: format!("must be at least {MIN_BEAM_FRACTION}, got {value}"),
                });
            }
        }
        if !(self.ray_width.is_finite() && self.ray_width > 0.0) {
            return Err(MirrorlabError::InvalidOption {
                name: "ray_width",
                reason: format!("must be positive, got {}", self.ray_width),
            });
        }
        for (name, value) in [
            ("ray_opacity", self.ray_opacity),
            ("image_opacity", self.image_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MirrorlabError::InvalidOption {
                    name,
                    reason: format!("must lie in [0, 1], got {value}"),
                });
            }
        }
        if !self.background_color.cmpge(Vec3::ZERO).all()
            || !self.background_color.cmple(Vec3::ONE).all()
        {
            return Err(MirrorlabError::InvalidOption {
                name: "background_color",
                reason: "channels must lie in [0, 1]".to_string(),
            });
        }
        Ok(())
    }

    /// Parses and validates options from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let options = Self::from_json(&text)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Writes options to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
