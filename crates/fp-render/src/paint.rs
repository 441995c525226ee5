//! Display list → Vello drawing commands.
//!
//! Replays a frame's `DrawCmd`s into a `vello::Scene`: fills, strokes,
//! polylines. Call once per frame with a freshly-cleared `Scene`; the caller
//! presents it via wgpu.

use crate::scene::DrawCmd;
use crate::theme::{Color, StrokeStyle};
use kurbo::{Affine, BezPath, Cap, Circle, Join, Point, Rect, Stroke};
use peniko::Fill;
use vello::Scene;

/// Paint a whole frame into a Vello scene.
///
/// `Label` commands are skipped (only traced), so the encoded scene has no
/// line-number labels. Use the Canvas2D or SVG backend for a labelled frame.
pub fn paint_scene(scene: &mut Scene, cmds: &[DrawCmd]) {
    for cmd in cmds {
        paint_cmd(scene, cmd);
    }
}

fn paint_cmd(scene: &mut Scene, cmd: &DrawCmd) {
    match cmd {
        DrawCmd::Clear {
            width,
            height,
            color,
        } => {
            let rect = Rect::new(0.0, 0.0, *width, *height);
            scene.fill(Fill::NonZero, Affine::IDENTITY, to_peniko(*color), None, &rect);
        }

        DrawCmd::Polyline { points, stroke } => {
            let path = polyline(points);
            stroke_shape(scene, &path, stroke);
        }

        DrawCmd::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let circle = Circle::new(*center, *radius);
            scene.fill(Fill::NonZero, Affine::IDENTITY, to_peniko(*fill), None, &circle);
            stroke_shape(scene, &circle, stroke);
        }

        DrawCmd::Arrow {
            from,
            to,
            barbs,
            stroke,
        } => {
            let mut path = BezPath::new();
            path.move_to(*from);
            path.line_to(*to);
            for barb in barbs {
                path.move_to(*to);
                path.line_to(*barb);
            }
            stroke_shape(scene, &path, stroke);
        }

        DrawCmd::Label { text, at, .. } => {
            log::trace!("LABEL {text:?} at ({}, {})", at.x, at.y);
            // Text shaping needs a font context; labels are drawn by the
            // Canvas2D and SVG backends only.
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
    }
    path
}

fn stroke_shape<S: kurbo::Shape>(scene: &mut Scene, shape: &S, style: &StrokeStyle) {
    let (cap, join) = if style.round {
        (Cap::Round, Join::Round)
    } else {
        (Cap::Butt, Join::Miter)
    };
    let stroke = Stroke::new(style.width).with_caps(cap).with_join(join);
    scene.stroke(&stroke, Affine::IDENTITY, to_peniko(style.color), None, shape);
}

fn to_peniko(c: Color) -> peniko::Color {
    peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}
