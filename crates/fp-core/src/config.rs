//! Editor configuration: canvas extent, token geometry, and spawn rules.

use crate::model::Direction;
use serde::{Deserialize, Serialize};

/// Fixed parameters of a floor canvas.
///
/// Every field has a default, so a host only needs to send the overrides it
/// cares about (`{"height": 900}` is a valid config).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FloorConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels. Also the vertical extent `H` of the
    /// model ↔ screen transform.
    pub height: f64,
    /// Drawn circle radius, and the hit radius for pointer tests.
    pub token_radius: f64,
    pub arrow_length: f64,
    pub arrow_head_length: f64,
    /// Distance an arrow key moves the selected token.
    pub move_step: u32,
    /// Vertical gap between a token and one added after it.
    pub spawn_offset: u32,
    /// Where the first token goes on an empty floor.
    pub spawn_point: (u32, u32),
    pub spawn_direction: Direction,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 720.0,
            token_radius: 20.0,
            arrow_length: 12.0,
            arrow_head_length: 6.0,
            move_step: 10,
            spawn_offset: 50,
            spawn_point: (200, 300),
            spawn_direction: Direction::N,
        }
    }
}

impl FloorConfig {
    /// Default config on a canvas of the given size.
    pub fn with_size(width: f64, height: f64) -> Result<Self, String> {
        let config = Self {
            width,
            height,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: FloorConfig =
            serde_json::from_str(json).map_err(|e| format!("Config parse error: {e}"))?;
        config.validate()?;
        log::debug!("floor config {}x{}", config.width, config.height);
        Ok(config)
    }

    /// The canvas must have a positive, finite size.
    pub fn validate(&self) -> Result<(), String> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !(positive(self.width) && positive(self.height)) {
            return Err(format!(
                "Config error: canvas must have a positive size, got {}x{}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}
