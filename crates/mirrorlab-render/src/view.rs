//! Diagram coordinate spaces.

use glam::Vec2;

use crate::error::{RenderError, RenderResult};

/// The rectangle of diagram coordinates a scene shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Top-left corner.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl ViewBox {
    /// The `0..800 x 0..600` space of the mirror lessons.
    pub const MIRROR: Self = Self::from_size(800.0, 600.0);
    /// The `0..100 x 0..100` percent space of the color lesson.
    pub const PERCENT: Self = Self::from_size(100.0, 100.0);
    /// The `100..700 x 0..600` square of the person lessons.
    pub const SQUARE: Self = Self {
        origin: Vec2::new(100.0, 0.0),
        size: Vec2::new(600.0, 600.0),
    };
    /// The `0..600 x 0..300` space of the tube lesson.
    pub const TUBE: Self = Self::from_size(600.0, 300.0);

    /// Creates a view box, rejecting empty or non-finite sizes.
    pub fn new(origin: Vec2, size: Vec2) -> RenderResult<Self> {
        if !(size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(RenderError::InvalidViewBox {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self { origin, size })
    }

    /// A view box anchored at the origin.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            size: Vec2::new(width, height),
        }
    }

    /// Width in diagram units.
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height in diagram units.
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Maps a pointer position in client pixels to diagram coordinates.
    ///
    /// `rect_origin` and `rect_size` describe where the drawing surface sits
    /// on screen. Each axis is scaled independently. A zero-sized rectangle
    /// maps everything to the view box origin.
    pub fn client_to_scene(&self, client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Vec2 {
        let scale = Vec2::new(
            if rect_size.x > 0.0 { self.size.x / rect_size.x } else { 0.0 },
            if rect_size.y > 0.0 { self.size.y / rect_size.y } else { 0.0 },
        );
        self.origin + (client - rect_origin) * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert!(ViewBox::new(Vec2::ZERO, Vec2::new(0.0, 10.0)).is_err());
        assert!(ViewBox::new(Vec2::ZERO, Vec2::new(10.0, f32::NAN)).is_err());
        assert!(ViewBox::new(Vec2::ZERO, Vec2::new(10.0, 10.0)).is_ok());
    }

    #[test]
    fn test_client_to_scene_scales() {
        // An 800x600 diagram shown at 400x300 pixels, offset by (20, 10).
        let view = ViewBox::MIRROR;
        let p = view.client_to_scene(
            Vec2::new(220.0, 160.0),
            Vec2::new(20.0, 10.0),
            Vec2::new(400.0, 300.0),
        );
        assert_eq!(p, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_client_to_scene_zero_rect() {
        let p = ViewBox::MIRROR.client_to_scene(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::ZERO);
        assert_eq!(p, Vec2::ZERO);
    }

    #[test]
    fn test_client_to_scene_adds_origin() {
        let p = ViewBox::SQUARE.client_to_scene(Vec2::new(150.0, 150.0), Vec2::ZERO, Vec2::new(300.0, 300.0));
        assert_eq!(p, Vec2::new(400.0, 300.0));
    }
}
