//! Display list → standalone SVG document.
//!
//! Snapshot export of the current frame. Coordinates are already in screen
//! space, so the SVG viewBox is simply the canvas rectangle.

use crate::scene::DrawCmd;
use crate::theme::{Color, StrokeStyle};
use kurbo::Point;
use std::fmt::Write;

/// Render a frame to an SVG string.
pub fn render_svg(cmds: &[DrawCmd]) -> String {
    let (width, height) = cmds
        .iter()
        .find_map(|c| match c {
            DrawCmd::Clear { width, height, .. } => Some((*width, *height)),
            _ => None,
        })
        .unwrap_or((0.0, 0.0));

    let mut out = String::with_capacity(256 + cmds.len() * 96);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    for cmd in cmds {
        write_cmd(&mut out, cmd);
    }

    out.push_str("</svg>\n");
    out
}

fn write_cmd(out: &mut String, cmd: &DrawCmd) {
    match cmd {
        DrawCmd::Clear {
            width,
            height,
            color,
        } => {
            let _ = writeln!(
                out,
                r#"  <rect x="0" y="0" width="{width}" height="{height}"{}/>"#,
                fill_attr(*color)
            );
        }
        DrawCmd::Polyline { points, stroke } => {
            let _ = writeln!(
                out,
                r#"  <polyline points="{}" fill="none"{}/>"#,
                points_attr(points),
                stroke_attr(stroke)
            );
        }
        DrawCmd::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let _ = writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{radius}"{}{}/>"#,
                center.x,
                center.y,
                fill_attr(*fill),
                stroke_attr(stroke)
            );
        }
        DrawCmd::Arrow {
            from,
            to,
            barbs,
            stroke,
        } => {
            let _ = writeln!(
                out,
                r#"  <path d="M{} {} L{} {} M{} {} L{} {} M{} {} L{} {}" fill="none"{}/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                to.x,
                to.y,
                barbs[0].x,
                barbs[0].y,
                to.x,
                to.y,
                barbs[1].x,
                barbs[1].y,
                stroke_attr(stroke)
            );
        }
        DrawCmd::Label { text, at, style } => {
            let _ = writeln!(
                out,
                r#"  <text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" text-anchor="middle" dominant-baseline="middle"{}>{}</text>"#,
                at.x,
                at.y,
                style.family,
                style.size,
                style.weight,
                fill_attr(style.color),
                escape_xml(text)
            );
        }
    }
}

// ─── Attribute helpers ───────────────────────────────────────────────────────

fn fill_attr(color: Color) -> String {
    let mut attr = format!(r#" fill="{}""#, rgb_hex(color));
    if color.a != 255 {
        let _ = write!(attr, r#" fill-opacity="{}""#, f64::from(color.a) / 255.0);
    }
    attr
}

fn stroke_attr(stroke: &StrokeStyle) -> String {
    let mut attr = format!(
        r#" stroke="{}" stroke-width="{}""#,
        rgb_hex(stroke.color),
        stroke.width
    );
    if stroke.round {
        attr.push_str(r#" stroke-linecap="round" stroke-linejoin="round""#);
    }
    attr
}

fn rgb_hex(color: Color) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

fn points_attr(points: &[Point]) -> String {
    let mut s = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{},{}", p.x, p.y);
    }
    s
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
