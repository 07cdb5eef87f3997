//! SVG output for every screen.

use mirrorlab::lessons::{color, tube};
use mirrorlab::*;

#[test]
fn test_every_lesson_renders_a_document() {
    let options = Options::default();
    for id in LessonId::ALL {
        let svg = render_lesson(id, &options).to_svg();
        assert!(svg.starts_with("<svg"), "{id}");
        assert!(svg.trim_end().ends_with("</svg>"), "{id}");
        assert!(svg.contains(r#"width="800""#), "{id}");
    }
}

#[test]
fn test_home_screen_lists_titles() {
    let svg = render_to_string(&Session::default());
    for id in LessonId::ALL {
        assert!(svg.contains(id.subtitle()), "missing {id}");
    }
}

#[test]
fn test_color_beams_show_up_in_output() {
    let mut session = Session::default();
    session.open(LessonId::Color);
    let plain = render_to_string(&session);
    session.dispatch(color::Event::SetObject(Color::Black));
    let black = render_to_string(&session);
    // A black apple sends no light back, so fewer dots are drawn.
    assert!(black.matches("<circle").count() < plain.matches("<circle").count());
}

#[test]
fn test_tube_rays_follow_the_mirrors() {
    let mut session = Session::default();
    session.open(LessonId::Tube);
    session.dispatch(tube::Event::Show(tube::Overlay::StarLight, true));
    session.dispatch(tube::Event::SetMirror(tube::Slot::Top, MirrorKind::DiagonalDown));
    session.dispatch(tube::Event::SetMirror(tube::Slot::Bottom, MirrorKind::DiagonalUp));
    let svg = render_to_string(&session);
    assert!(svg.contains(r#"points="70,40 200,40 200,260 70,260""#), "{svg}");
}

#[test]
fn test_render_to_file() {
    let dir = std::env::temp_dir().join(format!("mirrorlab-headless-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let mut session = Session::default();
    session.open(LessonId::HumanMirror);
    let path = dir.join("human-mirror.svg");
    render_to_file(&session, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_to_string(&session));

    let err = render_to_file(&session, dir.join("human-mirror.png")).unwrap_err();
    assert!(matches!(err, MirrorlabError::RenderError(_)));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_options_change_output() {
    let options = Options::default().with_size(400, 300).with_labels(false);
    let mut session = Session::new(options);
    session.open(LessonId::AppleSide);
    let svg = render_to_string(&session);
    assert!(svg.contains(r#"width="400" height="300""#));
    assert!(!svg.contains(">mirror<"));
}
