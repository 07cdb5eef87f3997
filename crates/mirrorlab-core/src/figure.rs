//! A person seen from above, holding an apple.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::mirror::Mirror;

/// Head and hands of a figure in the top-down diagrams.
///
/// Mirroring a figure mirrors each point independently, so the apple hand of
/// an image sits on the opposite side from the real person's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Head position (also the eye).
    pub head: Vec2,
    /// Hand holding the apple.
    pub apple_hand: Vec2,
    /// The empty hand.
    pub free_hand: Vec2,
}

impl Figure {
    /// Creates a figure from its three points.
    pub fn new(head: Vec2, apple_hand: Vec2, free_hand: Vec2) -> Self {
        Self {
            head,
            apple_hand,
            free_hand,
        }
    }

    /// A figure at `head` facing `facing` (radians, screen space), arms
    /// stretched sideways by `reach`. The apple is in the right hand.
    pub fn facing(head: Vec2, facing: f32, reach: f32) -> Self {
        // Screen space has y pointing down, so +90 degrees is the right side.
        let right = Vec2::from_angle(facing + std::f32::consts::FRAC_PI_2);
        Self::new(head, head + right * reach, head - right * reach)
    }

    /// Applies `f` to every point.
    pub fn map(&self, f: impl Fn(Vec2) -> Vec2) -> Self {
        Self::new(f(self.head), f(self.apple_hand), f(self.free_hand))
    }

    /// The image of this figure in `mirror`.
    pub fn reflect(&self, mirror: &Mirror) -> Self {
        self.map(|p| mirror.reflect_point(p))
    }

    /// The image after reflecting in each mirror of `chain` in turn.
    pub fn reflect_chain(&self, chain: &[Mirror]) -> Self {
        chain.iter().fold(*self, |figure, m| figure.reflect(m))
    }

    /// Returns whether the apple is in the figure's right hand, judging by
    /// which way the arms turn relative to `facing_point`.
    pub fn holds_apple_right(&self, facing_point: Vec2) -> bool {
        let forward = facing_point - self.head;
        forward.perp_dot(self.apple_hand - self.head) > 0.0
    }
}
