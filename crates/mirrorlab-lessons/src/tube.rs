//! The mysterious tube.
//!
//! A U-shaped tube has a window at the top left, in front of a card with a
//! star and a tree, and a window at the bottom left where the eye looks in.
//! The learner picks a mirror for each of the two hidden slots and follows
//! the light from the star and the tree. With `\` at the top and `/` at the
//! bottom the tube works as a periscope and the picture arrives upside down.

use glam::Vec2;
use mirrorlab_core::{march, Bounds, MarchedRay, MirrorKind, Segment, Termination};
use mirrorlab_render::{glyphs, palette, Rgb, Scene, Shape, Stroke, ViewBox};

use crate::Lesson;

/// Where the light enters, moving right.
pub const STAR_START: Vec2 = Vec2::new(70.0, 40.0);
pub const TREE_START: Vec2 = Vec2::new(70.0, 80.0);
/// The card in front of the top window.
pub const OBJECT: Vec2 = Vec2::new(35.0, 65.0);
pub const EYE: Vec2 = Vec2::new(35.0, 240.0);
/// The bottom window, where light can reach the eye.
pub const EYE_WINDOW: (f32, f32) = (200.0, 280.0);

const FRONT: Vec2 = Vec2::new(420.0, 20.0);
const FRONT_SIZE: Vec2 = Vec2::new(100.0, 260.0);
const PICKER_X: f32 = 300.0;

/// The inside of the tube.
pub fn walls() -> Bounds {
    Bounds::from_ranges((70.0, 260.0), (20.0, 280.0))
}

/// The two mirror slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Top,
    Bottom,
}

impl Slot {
    pub const ALL: [Self; 2] = [Self::Top, Self::Bottom];

    /// The mirror a slot holds for `kind`, or `None` for an empty slot.
    pub fn segment(self, kind: MirrorKind) -> Option<Segment> {
        let (a, b) = match (self, kind) {
            (_, MirrorKind::None) => return None,
            (Self::Top, MirrorKind::Horizontal) => ((180.0, 30.0), (250.0, 30.0)),
            (Self::Top, MirrorKind::Vertical) => ((250.0, 30.0), (250.0, 90.0)),
            (Self::Top, MirrorKind::DiagonalDown) => ((190.0, 30.0), (250.0, 90.0)),
            (Self::Top, MirrorKind::DiagonalUp) => ((190.0, 90.0), (250.0, 30.0)),
            (Self::Bottom, MirrorKind::Horizontal) => ((180.0, 270.0), (250.0, 270.0)),
            (Self::Bottom, MirrorKind::Vertical) => ((250.0, 200.0), (250.0, 270.0)),
            (Self::Bottom, MirrorKind::DiagonalDown) => ((190.0, 210.0), (250.0, 270.0)),
            (Self::Bottom, MirrorKind::DiagonalUp) => ((190.0, 270.0), (250.0, 210.0)),
        };
        Some(Segment::new(Vec2::new(a.0, a.1), Vec2::new(b.0, b.1)))
    }

    /// Top-left corner of the slot's window in the front view.
    fn front_window(self) -> Vec2 {
        match self {
            Self::Top => FRONT + Vec2::new(10.0, 10.0),
            Self::Bottom => FRONT + Vec2::new(10.0, FRONT_SIZE.y - 70.0),
        }
    }
}

/// The two lights leaving the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Light {
    Star,
    Tree,
}

impl Light {
    pub fn start(self) -> Vec2 {
        match self {
            Self::Star => STAR_START,
            Self::Tree => TREE_START,
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            Self::Star => palette::STAR_LIGHT,
            Self::Tree => palette::TREE_LIGHT,
        }
    }
}

/// How the picture appears in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    Inverted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    StarLight,
    TreeLight,
    TopImage,
    BottomImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    SetMirror(Slot, MirrorKind),
    Show(Overlay, bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tube {
    top: MirrorKind,
    bottom: MirrorKind,
    star_light: bool,
    tree_light: bool,
    top_image: bool,
    bottom_image: bool,
}

impl Tube {
    pub fn mirror(&self, slot: Slot) -> MirrorKind {
        match slot {
            Slot::Top => self.top,
            Slot::Bottom => self.bottom,
        }
    }

    pub fn shows(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::StarLight => self.star_light,
            Overlay::TreeLight => self.tree_light,
            Overlay::TopImage => self.top_image,
            Overlay::BottomImage => self.bottom_image,
        }
    }

    /// Mirrors currently in the tube, with their slots.
    pub fn mirrors(&self) -> Vec<(Slot, Segment)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| slot.segment(self.mirror(slot)).map(|s| (slot, s)))
            .collect()
    }

    /// The path of `light` through the tube.
    pub fn trace(&self, light: Light) -> MarchedRay {
        let segments: Vec<Segment> = self.mirrors().into_iter().map(|(_, s)| s).collect();
        march(light.start(), Vec2::X, &segments, &walls())
    }

    /// Slots struck by `light`, in order.
    pub fn struck(&self, light: Light) -> Vec<Slot> {
        let mirrors = self.mirrors();
        self.trace(light)
            .mirrors_hit
            .iter()
            .map(|&i| mirrors[i].0)
            .collect()
    }

    /// Whether the top mirror turns the card's light, so that the card can be
    /// seen in it through the front.
    pub fn top_image_visible(&self) -> bool {
        self.struck(Light::Star).first() == Some(&Slot::Top)
    }

    /// What the eye at the bottom window sees: `None` unless light from both
    /// the star and the tree leaves through that window.
    pub fn bottom_view(&self) -> Option<Orientation> {
        let star = exit_to_eye(&self.trace(Light::Star))?;
        let tree = exit_to_eye(&self.trace(Light::Tree))?;
        // The star sits above the tree on the card.
        Some(if star.y < tree.y {
            Orientation::Upright
        } else {
            Orientation::Inverted
        })
    }

    fn draw_side(&self, scene: &mut Scene) {
        let wall = Stroke::new(palette::MIRROR_FACE, 2.0);
        let outline = |corners: [[f32; 2]; 4]| corners.map(Vec2::from_array);
        scene.polyline(outline([[80.0, 20.0], [260.0, 20.0], [260.0, 280.0], [80.0, 280.0]]), wall);
        scene.polyline(outline([[80.0, 100.0], [180.0, 100.0], [180.0, 200.0], [80.0, 200.0]]), wall);
        let opening = Stroke::new(palette::MIRROR_EDGE, 1.0).with_dash(4.0, 4.0);
        scene.line(Vec2::new(80.0, 20.0), Vec2::new(80.0, 100.0), opening);
        scene.line(Vec2::new(80.0, 200.0), Vec2::new(80.0, 280.0), opening);

        for (light, on) in [(Light::Star, self.star_light), (Light::Tree, self.tree_light)] {
            if on {
                let ray = self.trace(light);
                scene.ray_path(&ray.path, Stroke::new(light.color(), 2.0));
            }
        }
        for (_, mirror) in self.mirrors() {
            scene.line(mirror.start, mirror.end, Stroke::new(palette::SLOT_MIRROR, 4.0));
        }

        scene.rect(
            OBJECT - Vec2::new(35.0, 40.0),
            Vec2::new(70.0, 80.0),
            Some(palette::WHITE),
            Some(Stroke::new(palette::MIRROR_EDGE, 2.0)),
        );
        draw_card(scene, OBJECT, Orientation::Upright);
        glyphs::eye(scene, EYE, 32.0);
    }

    fn draw_pickers(&self, scene: &mut Scene) {
        for (slot, top) in [(Slot::Top, 25.0), (Slot::Bottom, 185.0)] {
            for (i, kind) in MirrorKind::ALL.into_iter().enumerate() {
                let at = Vec2::new(PICKER_X, top + 20.0 * i as f32);
                if self.mirror(slot) == kind {
                    scene.circle(at, 9.0, palette::PANEL);
                    scene.ring(at, 9.0, Stroke::new(palette::LEAF, 2.0));
                } else {
                    scene.ring(at, 9.0, Stroke::new(palette::MIRROR_EDGE, 1.0));
                }
                scene.text(at + Vec2::new(0.0, 4.0), kind.symbol(), 11.0, palette::INK);
            }
        }
    }

    fn draw_front(&self, scene: &mut Scene) {
        scene.rect(
            FRONT,
            FRONT_SIZE,
            Some(palette::PANEL),
            Some(Stroke::new(palette::MIRROR_FACE, 2.0)),
        );
        let divider = Stroke::new(palette::MIRROR_FACE, 1.0);
        for y in [100.0, 200.0] {
            scene.line(Vec2::new(FRONT.x, y), Vec2::new(FRONT.x + FRONT_SIZE.x, y), divider);
        }
        for slot in Slot::ALL {
            draw_front_mirror(scene, slot.front_window(), self.mirror(slot));
        }

        let window = Vec2::new(40.0, 30.0);
        if self.top_image && self.top_image_visible() {
            draw_card(scene, Slot::Top.front_window() + window, Orientation::Upright);
        }
        if self.bottom_image {
            if let Some(orientation) = self.bottom_view() {
                draw_card(scene, Slot::Bottom.front_window() + window, orientation);
            }
        }

        for (overlay, y) in [(Overlay::TopImage, 60.0), (Overlay::BottomImage, 240.0)] {
            let mark = Vec2::new(540.0, y);
            if self.shows(overlay) {
                scene.circle(mark, 7.0, palette::LEAF);
            } else {
                scene.ring(mark, 7.0, Stroke::new(palette::MUTED, 2.0));
            }
            scene.label(mark + Vec2::new(28.0, 4.0), "image", 11.0);
        }
        scene.label(FRONT + Vec2::new(FRONT_SIZE.x * 0.5, -6.0), "front", 11.0);
    }
}

/// The end point of `ray` if it leaves through the bottom window.
fn exit_to_eye(ray: &MarchedRay) -> Option<Vec2> {
    if ray.termination != Termination::Wall {
        return None;
    }
    let end = ray.path.end()?;
    let at_left = (end.x - walls().min.x).abs() < 0.5;
    (at_left && (EYE_WINDOW.0..=EYE_WINDOW.1).contains(&end.y)).then_some(end)
}

/// The tree with the star over its tip.
fn draw_card(scene: &mut Scene, center: Vec2, orientation: Orientation) {
    let inverted = orientation == Orientation::Inverted;
    glyphs::tree(scene, center, 44.0, palette::LEAF, inverted);
    let star = if inverted { 26.0 } else { -26.0 };
    glyphs::star(scene, center + Vec2::new(0.0, star), 16.0, palette::STAR_LIGHT);
}

/// A slot's mirror as it looks through the front of the tube.
fn draw_front_mirror(scene: &mut Scene, min: Vec2, kind: MirrorKind) {
    let frame = Stroke::new(palette::SLOT_MIRROR, 4.0);
    let quad = |corners: [(f32, f32); 4]| Shape::Polygon {
        points: corners.iter().map(|&(x, y)| min + Vec2::new(x, y)).collect(),
        fill: Some(palette::PANEL),
        stroke: Some(frame),
    };
    match kind {
        MirrorKind::None => {}
        MirrorKind::Horizontal => scene.rect(min, Vec2::new(80.0, 4.0), Some(palette::SLOT_MIRROR), None),
        MirrorKind::Vertical => scene.rect(min, Vec2::new(80.0, 60.0), Some(palette::PANEL), Some(frame)),
        MirrorKind::DiagonalDown => {
            scene.push(quad([(0.0, 0.0), (80.0, 0.0), (76.0, 60.0), (4.0, 60.0)]));
        }
        MirrorKind::DiagonalUp => {
            scene.push(quad([(4.0, 0.0), (76.0, 0.0), (80.0, 60.0), (0.0, 60.0)]));
        }
    }
}

impl Lesson for Tube {
    type Event = Event;

    const KEY: &'static str = "tube";

    fn view_box(&self) -> ViewBox {
        ViewBox::TUBE
    }

    fn update(mut self, event: Event) -> Self {
        match event {
            Event::SetMirror(Slot::Top, kind) => self.top = kind,
            Event::SetMirror(Slot::Bottom, kind) => self.bottom = kind,
            Event::Show(Overlay::StarLight, on) => self.star_light = on,
            Event::Show(Overlay::TreeLight, on) => self.tree_light = on,
            Event::Show(Overlay::TopImage, on) => self.top_image = on,
            Event::Show(Overlay::BottomImage, on) => self.bottom_image = on,
        }
        log::debug!(
            "tube: top {} bottom {}, eye sees {:?}",
            self.top,
            self.bottom,
            self.bottom_view()
        );
        self
    }

    fn draw(&self, scene: &mut Scene) {
        self.draw_side(scene);
        self.draw_pickers(scene);
        self.draw_front(scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirrorlab_core::Options;

    fn close(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-2
    }

    fn with(top: MirrorKind, bottom: MirrorKind) -> Tube {
        Tube::default()
            .update(Event::SetMirror(Slot::Top, top))
            .update(Event::SetMirror(Slot::Bottom, bottom))
    }

    fn periscope() -> Tube {
        with(MirrorKind::DiagonalDown, MirrorKind::DiagonalUp)
    }

    #[test]
    fn test_empty_tube_runs_to_right_wall() {
        let ray = Tube::default().trace(Light::Star);
        assert_eq!(ray.termination, Termination::Wall);
        assert_eq!(ray.reflection_count(), 0);
        assert!(close(ray.path.end().unwrap(), Vec2::new(260.0, 40.0)));
        assert_eq!(Tube::default().bottom_view(), None);
    }

    #[test]
    fn test_periscope_inverts() {
        let tube = periscope();
        let star = tube.trace(Light::Star);
        let points = star.path.points();
        assert_eq!(points.len(), 4);
        assert!(close(points[1], Vec2::new(200.0, 40.0)));
        assert!(close(points[2], Vec2::new(200.0, 260.0)));
        assert!(close(points[3], Vec2::new(70.0, 260.0)));
        let tree = tube.trace(Light::Tree);
        assert!(close(tree.path.end().unwrap(), Vec2::new(70.0, 220.0)));
        assert_eq!(tube.struck(Light::Tree), vec![Slot::Top, Slot::Bottom]);
        assert_eq!(tube.bottom_view(), Some(Orientation::Inverted));
        assert!(tube.top_image_visible());
    }

    #[test]
    fn test_top_mirror_orientations() {
        let back = with(MirrorKind::Vertical, MirrorKind::None).trace(Light::Star);
        assert!(close(back.path.end().unwrap(), Vec2::new(70.0, 40.0)));

        let up = with(MirrorKind::DiagonalUp, MirrorKind::None).trace(Light::Star);
        assert!(close(up.path.end().unwrap(), Vec2::new(240.0, 20.0)));

        let flat = with(MirrorKind::Horizontal, MirrorKind::None);
        assert_eq!(flat.trace(Light::Star).reflection_count(), 0);
        assert!(!flat.top_image_visible());
    }

    #[test]
    fn test_bottom_diagonal_down_sends_light_right() {
        let tube = with(MirrorKind::DiagonalDown, MirrorKind::DiagonalDown);
        let star = tube.trace(Light::Star);
        assert!(close(star.path.end().unwrap(), Vec2::new(260.0, 220.0)));
        assert_eq!(tube.bottom_view(), None);
    }

    #[test]
    fn test_bottom_horizontal_stops_back_at_top_mirror() {
        let tube = with(MirrorKind::DiagonalDown, MirrorKind::Horizontal);
        let star = tube.trace(Light::Star);
        assert_eq!(tube.struck(Light::Star), vec![Slot::Top, Slot::Bottom]);
        assert_eq!(star.termination, Termination::ReflectionLimit);
        assert_eq!(star.path.segment_count(), 3);
        assert!(close(star.path.end().unwrap(), Vec2::new(200.0, 40.0)));
        assert_eq!(tube.bottom_view(), None);
    }

    #[test]
    fn test_segments_bounded_by_active_mirrors() {
        for top in MirrorKind::ALL {
            for bottom in MirrorKind::ALL {
                let tube = with(top, bottom);
                let active = tube.mirrors().len();
                for light in [Light::Star, Light::Tree] {
                    let ray = tube.trace(light);
                    assert!(ray.reflection_count() <= active);
                    assert!(
                        ray.path.segment_count() <= active + 1,
                        "{top:?}/{bottom:?} {light:?}: {} segments",
                        ray.path.segment_count()
                    );
                }
            }
        }
    }

    #[test]
    fn test_draw_follows_overlays() {
        let options = Options::default();
        let tube = periscope()
            .update(Event::Show(Overlay::StarLight, true))
            .update(Event::Show(Overlay::TreeLight, true));
        let scene = tube.render(&options);
        let rays = scene.count(|s| {
            matches!(s, Shape::Polyline { stroke, .. }
                if stroke.color == palette::STAR_LIGHT || stroke.color == palette::TREE_LIGHT)
        });
        assert_eq!(rays, 2);

        let stars = |t: Tube| {
            t.render(&options)
                .count(|s| matches!(s, Shape::Polygon { points, .. } if points.len() == 10))
        };
        assert_eq!(stars(tube), 1);
        assert_eq!(stars(tube.update(Event::Show(Overlay::BottomImage, true))), 2);
        assert_eq!(stars(with(MirrorKind::None, MirrorKind::None).update(Event::Show(Overlay::BottomImage, true))), 1);
    }
}
