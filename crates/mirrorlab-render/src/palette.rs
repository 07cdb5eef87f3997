//! Display colors.

use std::fmt;

use glam::Vec3;
use mirrorlab_core::Color;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Returns the `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Returns the channels as floats in `[0, 1]`.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

impl From<Vec3> for Rgb {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from(v: Vec3) -> Self {
        let v = (v.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        Self(v.x as u8, v.y as u8, v.z as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// Light channels, used for dotted beams.
pub const CHANNEL_RED: Rgb = Rgb::new(0xef, 0x44, 0x44);
pub const CHANNEL_GREEN: Rgb = Rgb::new(0x22, 0xc5, 0x5e);
pub const CHANNEL_BLUE: Rgb = Rgb::new(0x3b, 0x82, 0xf6);

// Rays and guides.
pub const RAY: Rgb = Rgb::new(0xf5, 0x9e, 0x0b);
pub const RAY_GUIDE: Rgb = Rgb::new(0xfb, 0xbf, 0x24);
pub const APPLE_RAY: Rgb = CHANNEL_RED;
pub const STAR_LIGHT: Rgb = Rgb::new(0xfa, 0xcc, 0x15);
pub const TREE_LIGHT: Rgb = Rgb::new(0x16, 0xa3, 0x4a);

// Mirrors and scenery.
pub const MIRROR_FACE: Rgb = Rgb::new(0x94, 0xa3, 0xb8);
pub const MIRROR_GLASS: Rgb = Rgb::new(0xe2, 0xe8, 0xf0);
pub const MIRROR_EDGE: Rgb = Rgb::new(0xcb, 0xd5, 0xe1);
pub const SLOT_MIRROR: Rgb = Rgb::new(0x64, 0x74, 0x8b);
pub const GROUND: Rgb = MIRROR_EDGE;
pub const INK: Rgb = Rgb::new(0x1e, 0x29, 0x3b);
pub const MUTED: Rgb = Rgb::new(0x64, 0x74, 0x8b);
pub const PANEL: Rgb = Rgb::new(0xf1, 0xf5, 0xf9);
pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
pub const SUN: Rgb = Rgb::new(0xfa, 0xcc, 0x15);
pub const LEAF: Rgb = Rgb::new(0x16, 0xa3, 0x4a);

/// Fill used for a surface of the given color.
pub fn surface(color: Color) -> Rgb {
    match color {
        Color::White => Rgb::new(0xe2, 0xe8, 0xf0),
        Color::Red => CHANNEL_RED,
        Color::Blue => CHANNEL_BLUE,
        Color::Black => Rgb::new(0x0f, 0x17, 0x2a),
    }
}

/// Fill used for a sheet of paper (white paper stays pure white).
pub fn paper(color: Color) -> Rgb {
    match color {
        Color::White => WHITE,
        other => surface(other),
    }
}

/// Dot colors cycled along a beam of the given color. Black light has none.
pub fn beam_dots(color: Color) -> &'static [Rgb] {
    match color {
        Color::White => &[CHANNEL_RED, CHANNEL_GREEN, CHANNEL_BLUE],
        Color::Red => &[CHANNEL_RED],
        Color::Blue => &[CHANNEL_BLUE],
        Color::Black => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(RAY.to_hex(), "#f59e0b");
        assert_eq!(CHANNEL_GREEN.to_string(), "#22c55e");
    }

    #[test]
    fn test_from_vec3() {
        assert_eq!(Rgb::from(Vec3::ONE), WHITE);
        assert_eq!(Rgb::from(Vec3::new(2.0, -1.0, 0.5)), Rgb(255, 0, 128));
        assert_eq!(Rgb::from(INK.to_vec3()), INK);
    }

    #[test]
    fn test_beam_dots() {
        assert_eq!(beam_dots(Color::White).len(), 3);
        assert_eq!(beam_dots(Color::Red), &[CHANNEL_RED]);
        assert!(beam_dots(Color::Black).is_empty());
    }
}
