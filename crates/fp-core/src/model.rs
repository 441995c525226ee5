//! Token model for floor-plan annotations.
//!
//! A token is a record from the text buffer (`x, y, DIRECTION[, comment]`)
//! that passed validation. Tokens are derived data: they are rebuilt from the
//! text on every parse and never edited in place. Moving a token means
//! rewriting its line and parsing again.

use crate::id::LineId;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;

// ─── Direction ───────────────────────────────────────────────────────────

/// One of the eight compass directions a token can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions in clockwise order, starting at north.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Case-insensitive lookup of a direction label (`"ne"`, `"NE"`, `"Ne"`).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_uppercase().as_str() {
            "N" => Some(Direction::N),
            "NE" => Some(Direction::NE),
            "E" => Some(Direction::E),
            "SE" => Some(Direction::SE),
            "S" => Some(Direction::S),
            "SW" => Some(Direction::SW),
            "W" => Some(Direction::W),
            "NW" => Some(Direction::NW),
            _ => None,
        }
    }

    /// Canonical upper-case label, as written back into the text.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }

    /// Arrow angle in radians, screen convention (0 = +X, clockwise positive,
    /// so north points up the screen at -90°).
    pub fn angle(self) -> f64 {
        match self {
            Direction::N => -FRAC_PI_2,
            Direction::NE => -FRAC_PI_4,
            Direction::E => 0.0,
            Direction::SE => FRAC_PI_4,
            Direction::S => FRAC_PI_2,
            Direction::SW => 3.0 * FRAC_PI_4,
            Direction::W => PI,
            Direction::NW => -3.0 * FRAC_PI_4,
        }
    }

    /// Position in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotate one step through the compass, wrapping around.
    pub fn rotated(self, clockwise: bool) -> Self {
        let len = Self::ALL.len();
        let next = if clockwise {
            (self.index() + 1) % len
        } else {
            (self.index() + len - 1) % len
        };
        Self::ALL[next]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Token ───────────────────────────────────────────────────────────────

/// A parsed, renderable record: model-space position, facing, and line identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub x: u32,
    pub y: u32,
    pub direction: Direction,
    pub line: LineId,
}

impl Token {
    pub fn new(x: u32, y: u32, direction: Direction, line: LineId) -> Self {
        Self {
            x,
            y,
            direction,
            line,
        }
    }
}

/// Look a token up by line identity.
pub fn find_token(tokens: &[Token], line: LineId) -> Option<&Token> {
    tokens.iter().find(|t| t.line == line)
}

/// List position of the token with the given identity.
pub fn position_of(tokens: &[Token], line: LineId) -> Option<usize> {
    tokens.iter().position(|t| t.line == line)
}
