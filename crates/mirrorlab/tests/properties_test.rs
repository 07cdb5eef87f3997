//! Properties that hold for any input.

use mirrorlab::geometry::{
    march, perceived_color, reflect, trace_reflections, Axis, AxisLine,
    Bounds, Mirror, Segment, MAX_REFLECTIONS,
};
use mirrorlab::lessons::tube::{Light, Slot};
use mirrorlab::lessons::{apple_top, tube};
use mirrorlab::*;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0
}

fn point() -> impl Strategy<Value = Vec2> {
    (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::White),
        Just(Color::Red),
        Just(Color::Blue),
        Just(Color::Black)
    ]
}

fn filter() -> impl Strategy<Value = Filter> {
    prop_oneof![Just(Filter::None), Just(Filter::Red), Just(Filter::Blue)]
}

fn mirror_kind() -> impl Strategy<Value = MirrorKind> {
    proptest::sample::select(MirrorKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn reflect_preserves_distance_to_mirror(p in point(), m in coord(), vertical in any::<bool>()) {
        let axis = if vertical { Axis::X } else { Axis::Y };
        let line = AxisLine::new(axis, m);
        let image = reflect(p, axis, m);
        prop_assert!((line.signed_distance(image) + line.signed_distance(p)).abs() < 1e-2);
    }

    #[test]
    fn filtering_never_adds_light(base in color(), filter in filter()) {
        let seen = perceived_color(base, filter).channels();
        let allowed = base.channels().mask(filter.passes());
        prop_assert_eq!(seen.mask(allowed), seen, "{:?} behind {:?}", base, filter);
        let seen = seen.to_color();
        // Without a filter the object looks like itself.
        if filter == Filter::None {
            prop_assert_eq!(seen, base);
        }
        if base == Color::Black {
            prop_assert_eq!(seen, Color::Black);
        }
    }

    #[test]
    fn plane_mirror_path_is_as_long_as_the_sightline(
        sx in 60.0f32..740.0, sy in 350.0f32..550.0, ex in 60.0f32..740.0, ey in 350.0f32..550.0,
    ) {
        let source = Vec2::new(sx, sy);
        let eye = Vec2::new(ex, ey);
        let mirror = Mirror::Line(AxisLine::horizontal(300.0));
        let trace = trace_reflections(source, eye, &[mirror]).unwrap();
        let image = trace.final_image().unwrap();
        prop_assert!((trace.path.length() - eye.distance(image)).abs() < 1e-1);
        prop_assert_eq!(trace.path.segment_count(), 2);
    }

    #[test]
    fn long_chains_are_refused(source in point(), eye in point()) {
        let m = Mirror::Line(AxisLine::vertical(0.0));
        let chain = vec![m; MAX_REFLECTIONS + 1];
        prop_assert!(trace_reflections(source, eye, &chain).is_none());
    }

    #[test]
    fn marched_rays_stay_in_the_walls(
        y in 25.0f32..275.0,
        a in point(), b in point(),
    ) {
        let walls = Bounds::from_ranges((0.0, 300.0), (0.0, 300.0));
        let mirror = Segment::new(walls.clamp(a), walls.clamp(b));
        let ray = march(Vec2::new(0.0, y), Vec2::X, &[mirror], &walls);
        prop_assert!(ray.reflection_count() <= MAX_REFLECTIONS);
        for p in ray.path.points() {
            prop_assert!(p.x >= -1e-2 && p.x <= 300.01 && p.y >= -1e-2 && p.y <= 300.01);
        }
    }

    #[test]
    fn tube_paths_are_bounded(top in mirror_kind(), bottom in mirror_kind(), star in any::<bool>()) {
        let tube = Tube::default()
            .update(tube::Event::SetMirror(Slot::Top, top))
            .update(tube::Event::SetMirror(Slot::Bottom, bottom));
        let light = if star { Light::Star } else { Light::Tree };
        let ray = tube.trace(light);
        let active = tube.mirrors().len();
        prop_assert!(ray.path.segment_count() <= active + 1);
        prop_assert!(ray.reflection_count() <= active.min(MAX_REFLECTIONS));
    }

    #[test]
    fn dragged_apple_stays_in_front_of_mirror(moves in proptest::collection::vec(point(), 1..10)) {
        let mut session = Session::default();
        session.open(LessonId::AppleTop);
        session.dispatch(apple_top::Event::Pointer(Pointer::Down(apple_top::APPLE_START)));
        for p in moves {
            session.dispatch(apple_top::Event::Pointer(Pointer::Move(p)));
        }
        let Screen::Lesson(ActiveLesson::AppleTop(lesson)) = session.screen() else {
            panic!("apple top view should be open");
        };
        let apple = lesson.apple();
        prop_assert!((50.0..=750.0).contains(&apple.x));
        prop_assert!((350.0..=550.0).contains(&apple.y));
    }
}
