pub mod config;
pub mod edit;
pub mod id;
pub mod model;
pub mod parser;
pub mod transform;

pub use config::FloorConfig;
pub use edit::{LineEdit, apply_edit};
pub use id::LineId;
pub use model::*;
pub use parser::parse_tokens;
