//! Navigation between the home screen and the lessons.

use mirrorlab::lessons::{apple_double_mirror, apple_top, color, tube};
use mirrorlab::*;

fn apple_top_state(session: &Session) -> AppleTop {
    match session.screen() {
        Screen::Lesson(ActiveLesson::AppleTop(lesson)) => *lesson,
        other => panic!("expected the apple top view, found {other:?}"),
    }
}

#[test]
fn test_reopening_a_lesson_resets_it() {
    let mut session = Session::default();
    session.open(LessonId::AppleTop);
    let start = apple_top_state(&session).apple();

    session.dispatch(apple_top::Event::Pointer(Pointer::Down(start)));
    session.dispatch(apple_top::Event::Pointer(Pointer::Move(Vec2::new(600.0, 450.0))));
    session.dispatch(apple_top::Event::Pointer(Pointer::Up));
    assert_eq!(apple_top_state(&session).apple(), Vec2::new(600.0, 450.0));

    session.back();
    assert_eq!(session.active(), None);
    session.open(LessonId::AppleTop);
    assert_eq!(apple_top_state(&session).apple(), start);
}

#[test]
fn test_open_by_key() {
    let mut session = Session::default();
    for id in LessonId::ALL {
        session.open_key(id.key()).unwrap();
        assert_eq!(session.active(), Some(id));
    }
    let err = session.open_key("kaleidoscope").unwrap_err();
    assert!(matches!(err, MirrorlabError::UnknownLesson(_)));
    // A failed open leaves the current lesson alone.
    assert_eq!(session.active(), Some(LessonId::Tube));
}

#[test]
fn test_events_for_other_lessons_are_ignored() {
    let mut session = Session::default();
    session.open(LessonId::Color);
    let before = *session.screen();

    let stray = LessonEvent::from(apple_double_mirror::Event::ToggleControls);
    assert_eq!(stray.lesson(), LessonId::AppleDoubleMirror);
    assert!(!session.dispatch(stray));
    assert!(!session.dispatch(tube::Event::SetMirror(tube::Slot::Top, MirrorKind::Vertical)));
    assert_eq!(*session.screen(), before);

    assert!(session.dispatch(color::Event::SetFilter(Filter::Blue)));
    assert_ne!(*session.screen(), before);
}

#[test]
fn test_home_card_opens_lesson() {
    let mut session = Session::default();
    let click = card_origin(LessonId::HumanSixtyDegree) + Vec2::new(100.0, 50.0);
    let id = card_at(click).unwrap();
    session.open(id);
    assert_eq!(session.active(), Some(LessonId::HumanSixtyDegree));
    assert_eq!(session.render().view_box(), ViewBox::SQUARE);
}
