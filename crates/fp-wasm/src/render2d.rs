//! Canvas2D replay of the display list.
//!
//! Draws each `DrawCmd` onto an HTML `<canvas>` via
//! `CanvasRenderingContext2d`, in list order.

use fp_render::scene::DrawCmd;
use fp_render::theme::{Color, LabelStyle, StrokeStyle};
use kurbo::Point;
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

/// Replay a frame onto the context.
pub fn render_scene(ctx: &CanvasRenderingContext2d, cmds: &[DrawCmd]) {
    for cmd in cmds {
        match cmd {
            DrawCmd::Clear {
                width,
                height,
                color,
            } => {
                ctx.clear_rect(0.0, 0.0, *width, *height);
                ctx.set_fill_style_str(&css(*color));
                ctx.fill_rect(0.0, 0.0, *width, *height);
            }
            DrawCmd::Polyline { points, stroke } => draw_polyline(ctx, points, stroke),
            DrawCmd::Circle {
                center,
                radius,
                fill,
                stroke,
            } => draw_circle(ctx, *center, *radius, *fill, stroke),
            DrawCmd::Arrow {
                from,
                to,
                barbs,
                stroke,
            } => draw_arrow(ctx, *from, *to, barbs, stroke),
            DrawCmd::Label { text, at, style } => draw_label(ctx, text, *at, style),
        }
    }
}

// ─── Drawing primitives ─────────────────────────────────────────────────

fn draw_polyline(ctx: &CanvasRenderingContext2d, points: &[Point], stroke: &StrokeStyle) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    apply_stroke(ctx, stroke);
    ctx.stroke();
}

fn draw_circle(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
    fill: Color,
    stroke: &StrokeStyle,
) {
    ctx.begin_path();
    let _ = ctx.arc(center.x, center.y, radius, 0.0, TAU);
    ctx.set_fill_style_str(&css(fill));
    ctx.fill();
    apply_stroke(ctx, stroke);
    ctx.stroke();
}

fn draw_arrow(
    ctx: &CanvasRenderingContext2d,
    from: Point,
    to: Point,
    barbs: &[Point; 2],
    stroke: &StrokeStyle,
) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    for barb in barbs {
        ctx.move_to(to.x, to.y);
        ctx.line_to(barb.x, barb.y);
    }
    apply_stroke(ctx, stroke);
    ctx.stroke();
}

fn draw_label(ctx: &CanvasRenderingContext2d, text: &str, at: Point, style: &LabelStyle) {
    ctx.set_font(&style.css_font());
    ctx.set_fill_style_str(&css(style.color));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let _ = ctx.fill_text(text, at.x, at.y);
}

fn apply_stroke(ctx: &CanvasRenderingContext2d, stroke: &StrokeStyle) {
    ctx.set_stroke_style_str(&css(stroke.color));
    ctx.set_line_width(stroke.width);
    if stroke.round {
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
    } else {
        ctx.set_line_cap("butt");
        ctx.set_line_join("miter");
    }
}

fn css(color: Color) -> String {
    if color.a == 255 {
        color.to_hex()
    } else {
        format!(
            "rgba({}, {}, {}, {:.3})",
            color.r,
            color.g,
            color.b,
            f64::from(color.a) / 255.0
        )
    }
}
