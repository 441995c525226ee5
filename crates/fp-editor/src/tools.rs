//! Pointer tool for the floor canvas.
//!
//! The select tool owns the selection and the drag gesture. It turns pointer
//! events into `LineEdit`s that the editor applies through the `SyncEngine`:
//!
//! ```text
//!            press token              press token
//!   Idle ───────────────▶ Dragging ◀─────────────── Selected
//!    ▲                      │ release / leave          │
//!    │                      ▼                          │
//!    └──── press floor ── Selected ◀───────────────────┘
//! ```

use crate::input::InputEvent;
use crate::selection::Selection;
use fp_core::FloorConfig;
use fp_core::edit::LineEdit;
use fp_core::model::{Token, find_token};
use fp_core::transform::to_model_point;
use fp_render::hit::hit_test;

/// Where the pointer interaction currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Selected,
    Dragging,
}

/// Cursor the host should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    /// Hovering a token that can be picked up.
    Grab,
    /// Dragging a token.
    Grabbing,
}

impl CursorHint {
    /// CSS `cursor` value.
    pub fn as_css(self) -> &'static str {
        match self {
            CursorHint::Default => "default",
            CursorHint::Grab => "grab",
            CursorHint::Grabbing => "grabbing",
        }
    }
}

/// Result of feeding one pointer event to the tool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolOutput {
    /// Text edit to apply, if the event moved a token.
    pub edit: Option<LineEdit>,
    pub cursor: Option<CursorHint>,
    pub selection_changed: bool,
}

#[derive(Debug, Default)]
pub struct SelectTool {
    pub selection: Selection,
    dragging: bool,
}

impl SelectTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        match (self.dragging, self.selection.get()) {
            (true, Some(_)) => InteractionState::Dragging,
            (_, Some(_)) => InteractionState::Selected,
            (_, None) => InteractionState::Idle,
        }
    }

    /// Handle a pointer event against the current token list.
    pub fn handle(&mut self, event: &InputEvent, tokens: &[Token], config: &FloorConfig) -> ToolOutput {
        match *event {
            InputEvent::PointerDown { x, y } => self.press(x, y, tokens, config),
            InputEvent::PointerMove { x, y } => self.drag_or_hover(x, y, tokens, config),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => self.release(),
            InputEvent::Key { .. } => ToolOutput::default(),
        }
    }

    fn press(&mut self, x: f64, y: f64, tokens: &[Token], config: &FloorConfig) -> ToolOutput {
        match hit_test(tokens, x, y, config) {
            Some(token) => {
                let selection_changed = self.selection.set(Some(token.line));
                self.dragging = true;
                ToolOutput {
                    edit: None,
                    cursor: Some(CursorHint::Grabbing),
                    selection_changed,
                }
            }
            None => ToolOutput {
                selection_changed: self.selection.clear(),
                ..ToolOutput::default()
            },
        }
    }

    fn drag_or_hover(&mut self, x: f64, y: f64, tokens: &[Token], config: &FloorConfig) -> ToolOutput {
        if self.dragging
            && let Some(line) = self.selection.get()
        {
            // The dragged line may have stopped parsing mid-gesture; the move
            // is dropped until it is a record again or the gesture ends.
            let Some(token) = find_token(tokens, line) else {
                return ToolOutput::default();
            };
            let (mx, my) = to_model_point(x, y, config.height);
            log::trace!("drag {line:?} to ({mx}, {my})");
            return ToolOutput {
                edit: Some(LineEdit::Update {
                    line,
                    x: mx,
                    y: my,
                    direction: token.direction,
                }),
                ..ToolOutput::default()
            };
        }

        let cursor = if hit_test(tokens, x, y, config).is_some() {
            CursorHint::Grab
        } else {
            CursorHint::Default
        };
        ToolOutput {
            cursor: Some(cursor),
            ..ToolOutput::default()
        }
    }

    fn release(&mut self) -> ToolOutput {
        self.dragging = false;
        ToolOutput {
            cursor: Some(CursorHint::Default),
            ..ToolOutput::default()
        }
    }
}
