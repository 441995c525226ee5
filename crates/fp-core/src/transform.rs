//! Model ↔ screen coordinate transform.
//!
//! The text uses a Cartesian convention (origin bottom-left, Y up); the
//! painting surface uses pixels (origin top-left, Y down). Only the vertical
//! axis flips, over the fixed canvas height `H`. X is the identity.

use crate::model::Token;

/// Model Y → screen Y.
pub fn to_screen_y(y: f64, height: f64) -> f64 {
    height - y
}

/// Screen Y → model Y. Inverse of [`to_screen_y`].
pub fn to_model_y(screen_y: f64, height: f64) -> f64 {
    height - screen_y
}

/// Screen-space center of a token.
pub fn token_center(token: &Token, height: f64) -> (f64, f64) {
    (
        f64::from(token.x),
        to_screen_y(f64::from(token.y), height),
    )
}

/// Pointer position → integer model coordinates, rounded to the nearest
/// unit and saturated at zero on both axes.
pub fn to_model_point(px: f64, py: f64, height: f64) -> (u32, u32) {
    (saturate(px), saturate(to_model_y(py, height)))
}

fn saturate(v: f64) -> u32 {
    // `as` saturates at u32::MAX and maps NaN to 0.
    v.round().max(0.0) as u32
}
