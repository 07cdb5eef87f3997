//! Pictograms drawn into a [`Scene`].
//!
//! Every glyph is centred on the point it is given and scaled by `size`
//! (roughly its height in diagram units).

use glam::Vec2;
use mirrorlab_core::{Figure, Segment};

use crate::palette::{self, Rgb};
use crate::scene::{Scene, Shape, Stroke};

/// An apple: round body, stem and leaf.
pub fn apple(scene: &mut Scene, center: Vec2, size: f32, fill: Rgb) {
    let r = size * 0.42;
    scene.circle(center + Vec2::new(-r * 0.35, r * 0.1), r, fill);
    scene.circle(center + Vec2::new(r * 0.35, r * 0.1), r, fill);
    scene.line(
        center + Vec2::new(0.0, -r * 0.6),
        center + Vec2::new(r * 0.1, -size * 0.5),
        Stroke::new(palette::INK, size * 0.06).rounded(),
    );
    scene.polygon(
        [
            center + Vec2::new(r * 0.1, -size * 0.45),
            center + Vec2::new(r * 0.7, -size * 0.6),
            center + Vec2::new(r * 0.4, -size * 0.38),
        ],
        palette::LEAF,
    );
}

/// An open eye looking toward `+x`.
pub fn eye(scene: &mut Scene, center: Vec2, size: f32) {
    let w = size * 0.5;
    let h = size * 0.28;
    scene.polygon(
        [
            center + Vec2::new(-w, 0.0),
            center + Vec2::new(-w * 0.4, -h),
            center + Vec2::new(w * 0.4, -h),
            center + Vec2::new(w, 0.0),
            center + Vec2::new(w * 0.4, h),
            center + Vec2::new(-w * 0.4, h),
        ],
        palette::WHITE,
    );
    scene.circle(center, h * 0.9, palette::INK);
    scene.circle(center + Vec2::new(h * 0.3, -h * 0.3), h * 0.25, palette::WHITE);
}

/// A sun: disc with eight rays.
pub fn sun(scene: &mut Scene, center: Vec2, size: f32) {
    let r = size * 0.25;
    let rays = Stroke::new(palette::SUN, size * 0.06).rounded();
    for i in 0..8u8 {
        let dir = Vec2::from_angle(f32::from(i) * std::f32::consts::FRAC_PI_4);
        scene.line(center + dir * r * 1.4, center + dir * size * 0.5, rays);
    }
    scene.circle(center, r, palette::SUN);
}

/// A five-pointed star.
pub fn star(scene: &mut Scene, center: Vec2, size: f32, fill: Rgb) {
    let outer = size * 0.5;
    let inner = outer * 0.45;
    let points = (0..10u8).map(|i| {
        let angle = -std::f32::consts::FRAC_PI_2 + f32::from(i) * std::f32::consts::PI / 5.0;
        let r = if i % 2 == 0 { outer } else { inner };
        center + Vec2::from_angle(angle) * r
    });
    scene.polygon(points, fill);
}

/// A fir tree, pointing up unless `inverted`.
pub fn tree(scene: &mut Scene, center: Vec2, size: f32, fill: Rgb, inverted: bool) {
    let s = if inverted { -1.0 } else { 1.0 };
    let p = |x: f32, y: f32| center + Vec2::new(x * size, y * size * s);
    scene.polygon([p(0.0, -0.5), p(0.35, 0.25), p(-0.35, 0.25)], fill);
    scene.rect(
        center + Vec2::new(-size * 0.06, if inverted { -size * 0.5 } else { size * 0.25 }),
        Vec2::new(size * 0.12, size * 0.25),
        Some(palette::INK),
        None,
    );
}

/// A person seen from the side, facing `+x`, head centred on `head`.
pub fn observer(scene: &mut Scene, head: Vec2) {
    scene.circle(head, 30.0, palette::INK);
    scene.polygon(
        [
            head + Vec2::new(-20.0, 30.0),
            head + Vec2::new(20.0, 30.0),
            head + Vec2::new(20.0, 190.0),
            head + Vec2::new(-20.0, 190.0),
        ],
        palette::INK,
    );
    let eye = head + Vec2::new(12.0, -5.0);
    scene.circle(eye, 4.0, palette::WHITE);
    scene.circle(eye + Vec2::new(2.0, 0.0), 2.0, palette::INK);
}

/// A person seen from above: head, two arms, and an apple in the apple hand.
pub fn figure(scene: &mut Scene, figure: &Figure, arm_width: f32) {
    let arm = Stroke::new(palette::INK, arm_width).rounded();
    scene.line(figure.head, figure.free_hand, arm);
    scene.line(figure.head, figure.apple_hand, arm);
    scene.circle(figure.head, arm_width * 2.5, palette::INK);
    apple(scene, figure.apple_hand, arm_width * 4.0, palette::CHANNEL_RED);
}

/// A standing person seen from the front, holding an apple on the viewer's
/// left or right.
pub fn person_front(scene: &mut Scene, center: Vec2, size: f32, apple_on_left: bool) {
    let limb = Stroke::new(palette::INK, size * 0.08).rounded();
    let head = center - Vec2::new(0.0, size * 0.35);
    let shoulders = center - Vec2::new(0.0, size * 0.2);
    let hips = center + Vec2::new(0.0, size * 0.15);
    scene.circle(head, size * 0.12, palette::INK);
    scene.line(shoulders, hips, limb);
    let left_hand = shoulders + Vec2::new(-size * 0.3, size * 0.15);
    let right_hand = shoulders + Vec2::new(size * 0.3, size * 0.15);
    scene.line(shoulders, left_hand, limb);
    scene.line(shoulders, right_hand, limb);
    scene.line(hips, hips + Vec2::new(-size * 0.15, size * 0.35), limb);
    scene.line(hips, hips + Vec2::new(size * 0.15, size * 0.35), limb);
    let hand = if apple_on_left { left_hand } else { right_hand };
    apple(scene, hand, size * 0.22, palette::CHANNEL_RED);
}

/// A thin mirror drawn as a line with a dashed back side.
pub fn mirror_line(scene: &mut Scene, mirror: &Segment, width: f32) {
    scene.line(
        mirror.start,
        mirror.end,
        Stroke::new(palette::MIRROR_EDGE, width * 0.5).with_dash(4.0, 4.0),
    );
    scene.line(mirror.start, mirror.end, Stroke::new(palette::MIRROR_FACE, width));
}

/// A thick pane of glass along `mirror`, silvered on the side of `back`.
pub fn mirror_pane(scene: &mut Scene, mirror: &Segment, thickness: f32, back: Vec2) {
    let n = mirror.normal();
    let half = n * thickness * 0.5;
    scene.push(Shape::Polygon {
        points: vec![
            mirror.start - half,
            mirror.end - half,
            mirror.end + half,
            mirror.start + half,
        ],
        fill: Some(palette::MIRROR_GLASS),
        stroke: Some(Stroke::new(palette::MIRROR_EDGE, 2.0)),
    });
    let side = if (back - mirror.start).dot(n) >= 0.0 { half } else { -half };
    scene.line(
        mirror.start + side,
        mirror.end + side,
        Stroke::new(palette::MIRROR_FACE, 2.0).with_dash(4.0, 4.0),
    );
}
