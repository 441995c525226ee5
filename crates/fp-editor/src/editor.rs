//! Editor session: one dispatch point for every input event.
//!
//! `Editor` owns the sync engine (text + tokens), the select tool (selection
//! + drag state) and the text-focus flag reported by the host. Each call to
//! [`Editor::handle`] runs to completion: read tokens, build an edit, apply
//! it, re-parse, reconcile the selection. The host then asks for a fresh
//! frame with [`Editor::render`].

use crate::input::InputEvent;
use crate::shortcuts::{Nudge, ShortcutAction, ShortcutMap};
use crate::sync::SyncEngine;
use crate::tools::{CursorHint, InteractionState, SelectTool};
use fp_core::FloorConfig;
use fp_core::edit::LineEdit;
use fp_core::id::LineId;
use fp_core::model::Token;
use fp_render::scene::{DrawCmd, build_scene};
use fp_render::theme::Theme;

/// What an event did, for the host to act on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// The event was consumed (the host should suppress its default action).
    pub handled: bool,
    /// The text buffer changed and should be written back to the text view.
    pub text_changed: bool,
    pub selection_changed: bool,
    pub cursor: Option<CursorHint>,
    pub action: Option<ShortcutAction>,
}

impl Response {
    /// Whether the canvas needs a new frame.
    pub fn needs_redraw(&self) -> bool {
        self.text_changed || self.selection_changed
    }
}

pub struct Editor {
    engine: SyncEngine,
    tool: SelectTool,
    text_focused: bool,
}

impl Editor {
    pub fn new(config: FloorConfig) -> Self {
        Self {
            engine: SyncEngine::new(config),
            tool: SelectTool::new(),
            text_focused: false,
        }
    }

    pub fn from_text(text: &str, config: FloorConfig) -> Self {
        Self {
            engine: SyncEngine::from_text(text, config),
            tool: SelectTool::new(),
            text_focused: false,
        }
    }

    // ─── Text surface ────────────────────────────────────────────────────

    /// Replace the text (the user typed in the text view).
    pub fn set_text(&mut self, text: &str) {
        self.engine.set_text(text);
        self.tool.selection.reconcile(self.engine.tokens());
    }

    pub fn text(&self) -> &str {
        self.engine.text()
    }

    /// Host notification: while the text view has focus, key events are
    /// left to it.
    pub fn set_text_focus(&mut self, focused: bool) {
        self.text_focused = focused;
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn tokens(&self) -> &[Token] {
        self.engine.tokens()
    }

    pub fn selected(&self) -> Option<LineId> {
        self.tool.selection.get()
    }

    pub fn selected_token(&self) -> Option<&Token> {
        self.engine.token(self.tool.selection.get()?)
    }

    pub fn state(&self) -> InteractionState {
        self.tool.state()
    }

    // ─── Render cycle ────────────────────────────────────────────────────

    /// Re-parse and drop a selection whose line no longer parses.
    pub fn refresh(&mut self) -> bool {
        self.engine.reparse();
        self.tool.selection.reconcile(self.engine.tokens())
    }

    /// One render cycle: refresh, then build the frame's display list.
    /// Calling it repeatedly without changes yields the same list.
    pub fn render(&mut self, theme: &Theme) -> Vec<DrawCmd> {
        self.refresh();
        build_scene(
            self.engine.tokens(),
            self.tool.selection.get(),
            &self.engine.config,
            theme,
        )
    }

    // ─── Dispatch ────────────────────────────────────────────────────────

    /// Handle one input event.
    pub fn handle(&mut self, event: &InputEvent) -> Response {
        match event {
            InputEvent::Key { key, modifiers } => self.handle_key(key, modifiers.shift),
            _ => self.handle_pointer(event),
        }
    }

    fn handle_pointer(&mut self, event: &InputEvent) -> Response {
        let config = self.engine.config;
        let out = self.tool.handle(event, self.engine.tokens(), &config);
        let text_changed = match &out.edit {
            Some(edit) => self.apply(edit),
            None => false,
        };
        Response {
            handled: true,
            text_changed,
            selection_changed: out.selection_changed,
            cursor: out.cursor,
            action: None,
        }
    }

    fn handle_key(&mut self, key: &str, shift: bool) -> Response {
        if self.text_focused {
            return Response::default();
        }
        let Some(action) = ShortcutMap::resolve(key, shift) else {
            return Response::default();
        };
        if action.needs_selection() && self.selected_token().is_none() {
            return Response::default();
        }

        let before = self.selected();
        let text_changed = match action {
            ShortcutAction::SelectNext => self.select_next(true),
            ShortcutAction::SelectPrevious => self.select_next(false),
            ShortcutAction::AddToken => self.add_token(),
            ShortcutAction::DeleteToken => self.delete_selected(),
            ShortcutAction::Move(nudge) => self.nudge_selected(nudge),
            ShortcutAction::RotateClockwise => self.rotate_selected(true),
            ShortcutAction::RotateCounterClockwise => self.rotate_selected(false),
        };
        log::debug!("key {key:?} -> {}", action.name());

        Response {
            handled: true,
            text_changed,
            selection_changed: before != self.selected(),
            cursor: None,
            action: Some(action),
        }
    }

    // ─── Actions ─────────────────────────────────────────────────────────
    //
    // Each action returns `true` if the text changed.

    /// Cycle the selection. Never changes the text.
    pub fn select_next(&mut self, forward: bool) -> bool {
        self.tool
            .selection
            .select_next(self.engine.tokens(), forward);
        false
    }

    /// Add a token and select it.
    ///
    /// With a selection, the new record goes on the line right after the
    /// selected one, `spawn_offset` above it. Without one, it is appended
    /// `spawn_offset` above the last token, or at `spawn_point` on an empty
    /// floor.
    pub fn add_token(&mut self) -> bool {
        let config = self.engine.config;
        let direction = config.spawn_direction;

        match self.selected_token().copied() {
            Some(token) => {
                let changed = self.apply(&LineEdit::InsertAfter {
                    after: token.line,
                    x: token.x,
                    y: token.y.saturating_add(config.spawn_offset),
                    direction,
                });
                self.tool.selection.set(Some(token.line.next()));
                changed
            }
            None => {
                let (x, y) = match self.engine.tokens().last() {
                    Some(last) => (last.x, last.y.saturating_add(config.spawn_offset)),
                    None => config.spawn_point,
                };
                let changed = self.apply(&LineEdit::Append { x, y, direction });
                let newest = self.engine.tokens().last().map(|t| t.line);
                self.tool.selection.set(newest);
                changed
            }
        }
    }

    /// Delete the selected token's line and clear the selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(line) = self.selected() else {
            return false;
        };
        let changed = self.apply(&LineEdit::Delete { line });
        self.tool.selection.clear();
        changed
    }

    /// Move the selected token by `move_step`, saturating at zero.
    pub fn nudge_selected(&mut self, nudge: Nudge) -> bool {
        let Some(token) = self.selected_token().copied() else {
            return false;
        };
        let step = i64::from(self.engine.config.move_step);
        let (dx, dy) = nudge.delta();
        let shift = |v: u32, d: i64| -> u32 {
            (i64::from(v) + d * step).clamp(0, i64::from(u32::MAX)) as u32
        };
        self.apply(&LineEdit::Update {
            line: token.line,
            x: shift(token.x, dx),
            y: shift(token.y, dy),
            direction: token.direction,
        })
    }

    /// Turn the selected token one compass step.
    pub fn rotate_selected(&mut self, clockwise: bool) -> bool {
        let Some(token) = self.selected_token().copied() else {
            return false;
        };
        self.apply(&LineEdit::Update {
            line: token.line,
            x: token.x,
            y: token.y,
            direction: token.direction.rotated(clockwise),
        })
    }

    /// Mutate → re-parse → reconcile, as one step.
    fn apply(&mut self, edit: &LineEdit) -> bool {
        let changed = self.engine.apply_edit(edit);
        if changed {
            self.tool.selection.reconcile(self.engine.tokens());
        }
        changed
    }
}
