//! Colors and stroke styles for the floor canvas.

use std::fmt;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Stroke parameters for lines and outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// Round caps and joins (the walking path); butt/miter otherwise.
    pub round: bool,
}

impl StrokeStyle {
    pub const fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            round: false,
        }
    }
}

/// Fill and outline of a token circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenStyle {
    pub fill: Color,
    pub stroke: StrokeStyle,
}

/// Line-number label under each token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub color: Color,
    pub family: &'static str,
    pub size: f64,
    pub weight: u16,
    /// Gap between the bottom of the circle and the label's center.
    pub offset: f64,
}

impl LabelStyle {
    /// CSS font shorthand, e.g. `700 12px Arial`.
    pub fn css_font(&self) -> String {
        format!("{} {}px {}", self.weight, self.size, self.family)
    }
}

/// Every visual constant of the floor canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub floor: Color,
    pub path: StrokeStyle,
    pub token: TokenStyle,
    pub selected_token: TokenStyle,
    pub arrow: StrokeStyle,
    pub label: LabelStyle,
}

impl Theme {
    /// Warm paper floor with a grey walking path.
    pub fn light() -> Self {
        Self {
            floor: Color::rgb(0xF4, 0xE4, 0xC1),
            path: StrokeStyle {
                color: Color::rgb(0xA0, 0xA0, 0xA0),
                width: 10.0,
                round: true,
            },
            token: TokenStyle {
                fill: Color::WHITE,
                stroke: StrokeStyle::new(Color::BLACK, 2.0),
            },
            selected_token: TokenStyle {
                fill: Color::rgb(0xFF, 0xFF, 0x99),
                stroke: StrokeStyle::new(Color::rgb(0xFF, 0x00, 0x00), 3.0),
            },
            arrow: StrokeStyle::new(Color::BLACK, 2.0),
            label: LabelStyle {
                color: Color::BLACK,
                family: "Arial",
                size: 12.0,
                weight: 700,
                offset: 12.0,
            },
        }
    }

    pub fn token_style(&self, selected: bool) -> TokenStyle {
        if selected { self.selected_token } else { self.token }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
