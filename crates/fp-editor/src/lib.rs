pub mod editor;
pub mod input;
pub mod selection;
pub mod shortcuts;
pub mod sync;
pub mod tools;

pub use editor::{Editor, Response};
pub use input::{InputEvent, Modifiers};
pub use shortcuts::{Nudge, ShortcutAction};
pub use tools::{CursorHint, InteractionState};
