//! Token list → display list.
//!
//! Builds the full frame as an ordered list of drawing commands in screen
//! space: floor, walking path, then one circle + arrow + label per token.
//! The output depends only on its inputs, so building twice from the same
//! tokens and selection yields equal lists. Backends (`paint`, `svg`, the
//! Canvas2D bridge) replay the list in order; later commands paint on top.

use crate::theme::{Color, LabelStyle, StrokeStyle, Theme};
use fp_core::FloorConfig;
use fp_core::id::LineId;
use fp_core::model::Token;
use fp_core::transform::token_center;
use kurbo::{Point, Vec2};
use std::f64::consts::FRAC_PI_6;

/// Angle between the arrow shaft and each barb of the head.
const HEAD_ANGLE: f64 = FRAC_PI_6;

/// A single drawing primitive in screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole surface.
    Clear {
        width: f64,
        height: f64,
        color: Color,
    },
    /// Open polyline through `points`.
    Polyline {
        points: Vec<Point>,
        stroke: StrokeStyle,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Color,
        stroke: StrokeStyle,
    },
    /// Shaft `from → to` plus two barbs drawn from `to`.
    Arrow {
        from: Point,
        to: Point,
        barbs: [Point; 2],
        stroke: StrokeStyle,
    },
    /// Text centered on `at`.
    Label {
        text: String,
        at: Point,
        style: LabelStyle,
    },
}

/// Build the display list for one frame.
pub fn build_scene(
    tokens: &[Token],
    selected: Option<LineId>,
    config: &FloorConfig,
    theme: &Theme,
) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(2 + tokens.len() * 3);

    cmds.push(DrawCmd::Clear {
        width: config.width,
        height: config.height,
        color: theme.floor,
    });

    if tokens.len() >= 2 {
        cmds.push(DrawCmd::Polyline {
            points: tokens.iter().map(|t| screen_point(t, config)).collect(),
            stroke: theme.path,
        });
    }

    for token in tokens {
        push_token(&mut cmds, token, selected == Some(token.line), config, theme);
    }

    cmds
}

/// Screen-space center of a token.
pub fn screen_point(token: &Token, config: &FloorConfig) -> Point {
    let (x, y) = token_center(token, config.height);
    Point::new(x, y)
}

fn push_token(
    cmds: &mut Vec<DrawCmd>,
    token: &Token,
    is_selected: bool,
    config: &FloorConfig,
    theme: &Theme,
) {
    let center = screen_point(token, config);
    let style = theme.token_style(is_selected);

    cmds.push(DrawCmd::Circle {
        center,
        radius: config.token_radius,
        fill: style.fill,
        stroke: style.stroke,
    });

    let angle = token.direction.angle();
    let tip = center + Vec2::from_angle(angle) * config.arrow_length;
    let barb = |offset: f64| tip - Vec2::from_angle(angle + offset) * config.arrow_head_length;
    cmds.push(DrawCmd::Arrow {
        from: center,
        to: tip,
        barbs: [barb(-HEAD_ANGLE), barb(HEAD_ANGLE)],
        stroke: theme.arrow,
    });

    cmds.push(DrawCmd::Label {
        text: token.line.to_string(),
        at: Point::new(
            center.x,
            center.y + config.token_radius + theme.label.offset,
        ),
        style: theme.label,
    });
}
