//! Integration tests: editor session (fp-editor ↔ fp-core ↔ fp-render).
//!
//! Drives the `Editor` the way a host page does, one event at a time, and
//! checks the text buffer, the selection and the rendered frame after each.

use fp_core::FloorConfig;
use fp_core::id::LineId;
use fp_core::model::Direction;
use fp_editor::{CursorHint, Editor, InputEvent, InteractionState, Modifiers};
use fp_render::scene::DrawCmd;
use fp_render::theme::Theme;
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn hallway() -> Editor {
    init_logging();
    Editor::from_text(include_str!("fixtures/hallway.txt"), FloorConfig::default())
}

fn press(editor: &mut Editor, key: &str) {
    editor.handle(&InputEvent::key(key, Modifiers::NONE));
}

fn press_shift(editor: &mut Editor, key: &str) {
    editor.handle(&InputEvent::key(key, Modifiers::SHIFT));
}

fn lines(editor: &Editor) -> Vec<usize> {
    editor.tokens().iter().map(|t| t.line.get()).collect()
}

fn selected(editor: &Editor) -> Option<usize> {
    editor.selected().map(LineId::get)
}

fn circle_fills(cmds: &[DrawCmd]) -> Vec<fp_render::Color> {
    cmds.iter()
        .filter_map(|c| match c {
            DrawCmd::Circle { fill, .. } => Some(*fill),
            _ => None,
        })
        .collect()
}

// ─── Keyboard ───────────────────────────────────────────────────────────

#[test]
fn tab_walks_tokens_in_line_order() {
    let mut ed = hallway();
    assert_eq!(lines(&ed), vec![2, 3, 5]);

    let mut seen = Vec::new();
    for _ in 0..4 {
        press(&mut ed, "Tab");
        seen.push(selected(&ed).unwrap());
    }
    assert_eq!(seen, vec![2, 3, 5, 2]);

    press_shift(&mut ed, "Tab");
    assert_eq!(selected(&ed), Some(5));
}

#[test]
fn add_after_selection_renumbers_below() {
    let mut ed = hallway();
    press(&mut ed, "Tab");
    press(&mut ed, "Tab");
    assert_eq!(selected(&ed), Some(3));

    press(&mut ed, "a");
    assert_eq!(
        ed.text(),
        "# hallway\n60, 80, N, front door\n60, 240, NE\n60, 290, N\nnot a record\n200, 240, E, hall\n"
    );
    assert_eq!(lines(&ed), vec![2, 3, 4, 6]);
    assert_eq!(selected(&ed), Some(4));
}

#[test]
fn add_without_selection_appends_above_last_token() {
    let mut ed = hallway();
    press(&mut ed, "A");
    assert!(ed.text().ends_with("200, 240, E, hall\n\n200, 290, N"));
    let token = ed.selected_token().unwrap();
    assert_eq!((token.x, token.y, token.direction), (200, 290, Direction::N));
    assert_eq!(token.line.get(), 7);
}

#[test]
fn delete_renumbers_and_clears_selection() {
    let mut ed = hallway();
    press(&mut ed, "Tab");
    press(&mut ed, "x");
    assert_eq!(
        ed.text(),
        "# hallway\n60, 240, NE\nnot a record\n200, 240, E, hall\n"
    );
    assert_eq!(lines(&ed), vec![2, 4]);
    assert_eq!(ed.selected(), None);
    assert_eq!(ed.state(), InteractionState::Idle);
}

#[test]
fn rotate_and_nudge_rewrite_only_the_selected_line() {
    let mut ed = hallway();
    press(&mut ed, "Tab");
    press(&mut ed, "Tab");
    press_shift(&mut ed, "ArrowRight");
    press(&mut ed, "ArrowRight");
    press(&mut ed, "ArrowUp");
    assert_eq!(
        ed.text(),
        "# hallway\n60, 80, N, front door\n70, 250, E\nnot a record\n200, 240, E, hall\n"
    );
}

#[test]
fn a_full_turn_returns_to_the_start() {
    let mut ed = Editor::from_text("10, 10, SW", FloorConfig::default());
    press(&mut ed, "Tab");
    for _ in 0..8 {
        press_shift(&mut ed, "ArrowLeft");
    }
    assert_eq!(ed.text(), "10, 10, SW");
}

// ─── Pointer ────────────────────────────────────────────────────────────

#[test]
fn drag_keeps_trailing_comment() {
    let mut ed = hallway();
    // Line 5 sits at (200, 240): screen (200, 480).
    let down = ed.handle(&InputEvent::pointer_down(200.0, 480.0));
    assert_eq!(down.cursor, Some(CursorHint::Grabbing));
    assert_eq!(selected(&ed), Some(5));

    let moved = ed.handle(&InputEvent::pointer_move(220.2, 470.0));
    assert!(moved.text_changed);
    assert!(ed.text().contains("\n220, 250, E, hall\n"));

    ed.handle(&InputEvent::pointer_up(220.2, 470.0));
    assert_eq!(ed.state(), InteractionState::Selected);
}

#[test]
fn pressing_another_token_moves_that_one() {
    let mut ed = hallway();
    press(&mut ed, "Tab");
    assert_eq!(selected(&ed), Some(2));

    let down = ed.handle(&InputEvent::pointer_down(200.0, 480.0));
    assert!(down.selection_changed);
    assert_eq!(selected(&ed), Some(5));
    assert_eq!(ed.state(), InteractionState::Dragging);

    ed.handle(&InputEvent::pointer_move(210.0, 470.0));
    assert_eq!(
        ed.text(),
        "# hallway\n60, 80, N, front door\n60, 240, NE\nnot a record\n210, 250, E, hall\n"
    );
}

#[test]
fn pointer_still_works_while_typing() {
    let mut ed = hallway();
    ed.set_text_focus(true);

    let down = ed.handle(&InputEvent::pointer_down(60.0, 480.0));
    assert!(down.handled && down.selection_changed);
    assert_eq!(selected(&ed), Some(3));

    let moved = ed.handle(&InputEvent::pointer_move(70.0, 470.0));
    assert!(moved.text_changed);
    assert!(ed.text().contains("\n70, 250, NE\n"));
}

#[test]
fn click_on_empty_floor_deselects() {
    let mut ed = hallway();
    ed.handle(&InputEvent::pointer_down(60.0, 640.0));
    ed.handle(&InputEvent::pointer_up(60.0, 640.0));
    assert_eq!(selected(&ed), Some(2));

    let resp = ed.handle(&InputEvent::pointer_down(400.0, 50.0));
    assert!(resp.selection_changed);
    assert_eq!(ed.selected(), None);
}

#[test]
fn overlapping_tokens_pick_the_later_line() {
    init_logging();
    let mut ed = Editor::from_text("100, 100, N\n110, 100, S", FloorConfig::default());
    ed.handle(&InputEvent::pointer_down(105.0, 620.0));
    assert_eq!(selected(&ed), Some(2));
}

// ─── Text edits and rendering ───────────────────────────────────────────

#[test]
fn breaking_the_selected_line_clears_selection() {
    let mut ed = hallway();
    press(&mut ed, "Tab");
    ed.set_text("# hallway\n60, 80\n60, 240, NE\n");
    assert_eq!(ed.selected(), None);
    assert_eq!(lines(&ed), vec![3]);
}

#[test]
fn keyboard_is_ignored_while_typing() {
    let mut ed = hallway();
    ed.set_text_focus(true);
    press(&mut ed, "Tab");
    press(&mut ed, "a");
    assert_eq!(ed.selected(), None);
    assert_eq!(ed.text(), include_str!("fixtures/hallway.txt"));
}

#[test]
fn render_highlights_selection_and_is_stable() {
    let mut ed = hallway();
    press(&mut ed, "Tab");
    press(&mut ed, "Tab");
    let theme = Theme::light();

    let frame = ed.render(&theme);
    assert_eq!(
        circle_fills(&frame),
        vec![theme.token.fill, theme.selected_token.fill, theme.token.fill]
    );
    assert_eq!(ed.render(&theme), frame);
    assert_eq!(ed.text(), include_str!("fixtures/hallway.txt"));
}

#[test]
fn render_of_empty_buffer_is_just_the_floor() {
    init_logging();
    let mut ed = Editor::new(FloorConfig::default());
    let frame = ed.render(&Theme::light());
    assert_eq!(frame.len(), 1);
    assert!(matches!(frame[0], DrawCmd::Clear { .. }));
}
