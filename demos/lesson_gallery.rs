//! Writes one SVG per lesson, plus a few lessons with their overlays on.
//!
//! Usage: `cargo run --example lesson_gallery -- [OUT_DIR] [OPTIONS_JSON]`

use std::path::PathBuf;

use mirrorlab::lessons::{apple_double_mirror, apple_side, human_sixty_degree, tube};
use mirrorlab::*;

fn main() -> Result<()> {
    init();

    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "gallery".to_string()));
    let options = match args.next() {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    std::fs::create_dir_all(&out_dir)?;

    let mut session = Session::new(options);
    render_to_file(&session, out_dir.join("home.svg"))?;

    for id in LessonId::ALL {
        session.open(id);
        render_to_file(&session, out_dir.join(format!("{id}.svg")))?;
    }

    session.open(LessonId::AppleSide);
    session.dispatch(apple_side::Event::Show(apple_side::Overlay::RealRays, true));
    session.dispatch(apple_side::Event::Show(apple_side::Overlay::VirtualImage, true));
    render_to_file(&session, out_dir.join("apple-side-rays.svg"))?;

    session.open(LessonId::AppleDoubleMirror);
    for overlay in apple_double_mirror::Overlay::ALL {
        session.dispatch(apple_double_mirror::Event::Show(overlay, true));
    }
    render_to_file(&session, out_dir.join("apple-double-mirror-images.svg"))?;

    session.open(LessonId::HumanSixtyDegree);
    session.dispatch(human_sixty_degree::Event::ShowRays(true));
    for image in human_sixty_degree::Image::ALL {
        session.dispatch(human_sixty_degree::Event::Show(image, true));
    }
    render_to_file(&session, out_dir.join("human-sixty-degree-images.svg"))?;

    session.open(LessonId::Tube);
    for event in [
        tube::Event::SetMirror(tube::Slot::Top, MirrorKind::DiagonalDown),
        tube::Event::SetMirror(tube::Slot::Bottom, MirrorKind::DiagonalUp),
        tube::Event::Show(tube::Overlay::StarLight, true),
        tube::Event::Show(tube::Overlay::TreeLight, true),
        tube::Event::Show(tube::Overlay::TopImage, true),
        tube::Event::Show(tube::Overlay::BottomImage, true),
    ] {
        session.dispatch(event);
    }
    render_to_file(&session, out_dir.join("tube-periscope.svg"))?;

    session.back();
    println!("wrote gallery to {}", out_dir.display());
    Ok(())
}
