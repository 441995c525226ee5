pub mod hit;
pub mod paint;
pub mod scene;
pub mod svg;
pub mod theme;

pub use hit::hit_test;
pub use scene::{DrawCmd, build_scene};
pub use theme::{Color, Theme};
