//! WASM bridge for Floorpath: exposes the editor session to the host page.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the textarea
//! and the `<canvas>`; it forwards input events here, writes `get_text()`
//! back into the textarea whenever a reply says `changed`, and calls
//! `render` to paint the next frame.

mod render2d;

use fp_core::FloorConfig;
use fp_core::parser::parse_tokens;
use fp_editor::{Editor, InputEvent, Modifiers, Response};
use fp_render::scene::build_scene;
use fp_render::svg::render_svg;
use fp_render::theme::Theme;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
///
/// All interaction from the page goes through this struct.
#[wasm_bindgen]
pub struct FpCanvas {
    editor: Editor,
    theme: Theme,
}

/// JSON reply to every event handler.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventReply {
    /// The event was consumed; the page should `preventDefault()`.
    handled: bool,
    /// The text changed and must be written back to the textarea.
    changed: bool,
    redraw: bool,
    selected: Option<usize>,
    cursor: Option<&'static str>,
    action: Option<&'static str>,
}

#[wasm_bindgen]
impl FpCanvas {
    /// Create a controller for a canvas of the given size, with default
    /// token geometry and controls. Throws on a non-positive size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<FpCanvas, JsValue> {
        console_error_panic_hook_setup();
        let config = FloorConfig::with_size(width, height).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_config(config))
    }

    /// Create a controller from a JSON config (camelCase keys, all optional).
    pub fn with_config(json: &str) -> Result<FpCanvas, JsValue> {
        console_error_panic_hook_setup();
        let config = FloorConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_config(config))
    }

    /// Replace the text (the user typed in the textarea).
    pub fn set_text(&mut self, text: &str) {
        self.editor.set_text(text);
    }

    pub fn get_text(&self) -> String {
        self.editor.text().to_string()
    }

    /// Tell the controller whether the textarea has keyboard focus.
    pub fn set_text_focus(&mut self, focused: bool) {
        self.editor.set_text_focus(focused);
    }

    /// Paint the current frame.
    pub fn render(&mut self, ctx: &CanvasRenderingContext2d) {
        let cmds = self.editor.render(&self.theme);
        render2d::render_scene(ctx, &cmds);
    }

    /// Export the current frame as an SVG document.
    pub fn export_svg(&mut self) -> String {
        render_svg(&self.editor.render(&self.theme))
    }

    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> String {
        self.dispatch(InputEvent::pointer_down(x, y))
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> String {
        self.dispatch(InputEvent::pointer_move(x, y))
    }

    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> String {
        self.dispatch(InputEvent::pointer_up(x, y))
    }

    pub fn handle_pointer_leave(&mut self) -> String {
        self.dispatch(InputEvent::PointerLeave)
    }

    /// Handle a keydown. `key` is `KeyboardEvent.key`.
    pub fn handle_key(&mut self, key: &str, shift: bool, ctrl: bool, alt: bool, meta: bool) -> String {
        let modifiers = Modifiers {
            shift,
            ctrl,
            alt,
            meta,
        };
        self.dispatch(InputEvent::key(key, modifiers))
    }

    /// Line number of the selected token, if any.
    pub fn get_selected_line(&self) -> Option<usize> {
        self.editor.selected().map(|line| line.get())
    }

    /// `"idle"`, `"selected"` or `"dragging"`.
    pub fn get_state(&self) -> String {
        format!("{:?}", self.editor.state()).to_lowercase()
    }

    /// Current tokens as a JSON array.
    pub fn get_tokens_json(&self) -> String {
        serde_json::to_string(self.editor.tokens()).unwrap_or_else(|_| "[]".to_string())
    }
}

impl FpCanvas {
    fn from_config(config: FloorConfig) -> Self {
        Self {
            editor: Editor::new(config),
            theme: Theme::light(),
        }
    }

    fn dispatch(&mut self, event: InputEvent) -> String {
        let response = self.editor.handle(&event);
        self.reply(response)
    }

    fn reply(&self, response: Response) -> String {
        let reply = EventReply {
            handled: response.handled,
            changed: response.text_changed,
            redraw: response.needs_redraw(),
            selected: self.get_selected_line(),
            cursor: response.cursor.map(|c| c.as_css()),
            action: response.action.map(|a| a.name()),
        };
        serde_json::to_string(&reply).unwrap_or_else(|_| r#"{"handled":false}"#.to_string())
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Floorpath WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone functions (no canvas needed) ─────────────────────────────

/// Parse text and return its tokens as a JSON array.
#[wasm_bindgen]
pub fn parse_to_json(source: &str) -> String {
    serde_json::to_string(&parse_tokens(source)).unwrap_or_else(|_| "[]".to_string())
}

/// Render text straight to SVG with the default config and no selection.
#[wasm_bindgen]
pub fn text_to_svg(source: &str) -> String {
    let cmds = build_scene(
        &parse_tokens(source),
        None,
        &FloorConfig::default(),
        &Theme::light(),
    );
    render_svg(&cmds)
}
