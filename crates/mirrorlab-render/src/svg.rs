//! SVG serialization.

use std::fmt::{self, Write};

use glam::Vec2;

use crate::palette::Rgb;
use crate::scene::{Scene, Shape, Stroke};

/// A coordinate written with at most two decimals and no trailing zeros.
#[derive(Debug, Clone, Copy)]
pub struct Num(pub f32);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = (self.0 * 100.0).round() / 100.0;
        if !v.is_finite() || v == 0.0 {
            return f.write_str("0");
        }
        let s = format!("{v:.2}");
        f.write_str(s.trim_end_matches('0').trim_end_matches('.'))
    }
}

fn points(list: &[Vec2]) -> String {
    list.iter()
        .map(|p| format!("{},{}", Num(p.x), Num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn fill_attr(out: &mut String, fill: Option<Rgb>) -> fmt::Result {
    match fill {
        Some(c) => write!(out, r#" fill="{c}""#),
        None => out.write_str(r#" fill="none""#),
    }
}

fn stroke_attrs(out: &mut String, stroke: Option<&Stroke>) -> fmt::Result {
    let Some(s) = stroke else {
        return Ok(());
    };
    write!(
        out,
        r#" stroke="{}" stroke-width="{}""#,
        s.color,
        Num(s.width)
    )?;
    if let Some([dash, gap]) = s.dash {
        write!(out, r#" stroke-dasharray="{},{}""#, Num(dash), Num(gap))?;
    }
    if s.opacity < 1.0 {
        write!(out, r#" stroke-opacity="{}""#, Num(s.opacity))?;
    }
    if s.round_caps {
        out.write_str(r#" stroke-linecap="round""#)?;
    }
    Ok(())
}

fn write_shape(out: &mut String, shape: &Shape, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    out.write_str(&indent)?;
    match shape {
        Shape::Line { from, to, stroke } => {
            write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                Num(from.x),
                Num(from.y),
                Num(to.x),
                Num(to.y)
            )?;
            stroke_attrs(out, Some(stroke))?;
            out.write_str("/>\n")
        }
        Shape::Polyline { points: list, stroke } => {
            write!(out, r#"<polyline points="{}" fill="none""#, points(list))?;
            stroke_attrs(out, Some(stroke))?;
            out.write_str("/>\n")
        }
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}""#,
                Num(center.x),
                Num(center.y),
                Num(*radius)
            )?;
            fill_attr(out, *fill)?;
            stroke_attrs(out, stroke.as_ref())?;
            out.write_str("/>\n")
        }
        Shape::Rect {
            min,
            size,
            corner_radius,
            fill,
            stroke,
        } => {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                Num(min.x),
                Num(min.y),
                Num(size.x),
                Num(size.y)
            )?;
            if *corner_radius > 0.0 {
                write!(out, r#" rx="{}""#, Num(*corner_radius))?;
            }
            fill_attr(out, *fill)?;
            stroke_attrs(out, stroke.as_ref())?;
            out.write_str("/>\n")
        }
        Shape::Polygon {
            points: list,
            fill,
            stroke,
        } => {
            write!(out, r#"<polygon points="{}""#, points(list))?;
            fill_attr(out, *fill)?;
            stroke_attrs(out, stroke.as_ref())?;
            out.write_str("/>\n")
        }
        Shape::Text {
            position,
            content,
            size,
            fill,
        } => {
            writeln!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" text-anchor="middle" fill="{fill}">{}</text>"#,
                Num(position.x),
                Num(position.y),
                Num(*size),
                escape(content)
            )
        }
        Shape::Group { opacity, children } => {
            if *opacity < 1.0 {
                writeln!(out, r#"<g opacity="{}">"#, Num(*opacity))?;
            } else {
                out.write_str("<g>\n")?;
            }
            for child in children {
                write_shape(out, child, depth + 1)?;
            }
            out.write_str(&indent)?;
            out.write_str("</g>\n")
        }
    }
}

impl Scene {
    /// Serializes the scene as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view_box();
        let (width, height) = self.pixel_size();
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{width}" height="{height}">"#,
            Num(view.origin.x),
            Num(view.origin.y),
            Num(view.size.x),
            Num(view.size.y)
        )?;
        writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            Num(view.origin.x),
            Num(view.origin.y),
            Num(view.size.x),
            Num(view.size.y),
            self.background()
        )?;
        for shape in self.shapes() {
            write_shape(&mut out, shape, 1)?;
        }
        out.write_str("</svg>\n")?;
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::view::ViewBox;
    use mirrorlab_core::Options;

    #[test]
    fn test_number_format() {
        assert_eq!(Num(26.393_442).to_string(), "26.39");
        assert_eq!(Num(400.0).to_string(), "400");
        assert_eq!(Num(30.4).to_string(), "30.4");
        assert_eq!(Num(-0.001).to_string(), "0");
        assert_eq!(Num(-12.5).to_string(), "-12.5");
        assert_eq!(Num(f32::NAN).to_string(), "0");
    }

    #[test]
    fn test_document_header() {
        let scene = Scene::new(ViewBox::MIRROR, &Options::default());
        let svg = scene.to_svg();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 800 600" width="800" height="600">"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_shapes_are_written() {
        let mut scene = Scene::new(ViewBox::MIRROR, &Options::default());
        scene.line(
            Vec2::new(400.0, 150.0),
            Vec2::new(400.0, 500.0),
            Stroke::new(palette::MIRROR_FACE, 4.0),
        );
        scene.group(0.5, |s| s.circle(Vec2::new(550.0, 476.0), 20.0, palette::CHANNEL_RED));
        scene.text(Vec2::new(10.0, 10.0), "a < b & c", 12.0, palette::INK);
        let svg = scene.to_svg();
        assert!(svg.contains(
            r##"<line x1="400" y1="150" x2="400" y2="500" stroke="#94a3b8" stroke-width="4"/>"##
        ));
        assert!(svg.contains(r#"<g opacity="0.5">"#));
        assert!(svg.contains(r##"<circle cx="550" cy="476" r="20" fill="#ef4444"/>"##));
        assert!(svg.contains(r##"text-anchor="middle" fill="#1e293b">a &lt; b &amp; c</text>"##));
    }

    #[test]
    fn test_dashed_stroke() {
        let mut scene = Scene::new(ViewBox::MIRROR, &Options::default());
        let stroke = Stroke::new(palette::RAY_GUIDE, 2.0)
            .with_dash(4.0, 4.0)
            .with_opacity(0.5)
            .rounded();
        scene.polyline([Vec2::ZERO, Vec2::new(10.0, 0.0)], stroke);
        let svg = scene.to_svg();
        assert!(svg.contains(r#"stroke-dasharray="4,4""#));
        assert!(svg.contains(r#"stroke-opacity="0.5""#));
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert!(svg.contains(r#"points="0,0 10,0" fill="none""#));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn number_keeps_two_decimals(v in -10_000.0f32..10_000.0) {
                let text = Num(v).to_string();
                let decimals = text.split('.').nth(1).map_or(0, str::len);
                prop_assert!(decimals <= 2, "{}", text);
                let back: f32 = text.parse().unwrap();
                prop_assert!((back - v).abs() < 0.006, "{} -> {}", v, text);
            }
        }
    }
}
