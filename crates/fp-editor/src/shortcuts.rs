//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s, so the same
//! bindings apply to every host.
//!
//! | Key | Action |
//! |-----|--------|
//! | Tab / Shift+Tab | select next / previous token |
//! | a | add token |
//! | x | delete selected token |
//! | Arrows | move selected token |
//! | Shift+← / Shift+→ | rotate selected token |

/// Arrow-key movement in model space (Y up).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Up,
    Down,
    Left,
    Right,
}

impl Nudge {
    /// Unit step `(dx, dy)` in model space.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Nudge::Up => (0, 1),
            Nudge::Down => (0, -1),
            Nudge::Left => (-1, 0),
            Nudge::Right => (1, 0),
        }
    }
}

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    SelectNext,
    SelectPrevious,
    AddToken,
    DeleteToken,
    Move(Nudge),
    RotateClockwise,
    RotateCounterClockwise,
}

impl ShortcutAction {
    /// Whether the action does nothing without a selected token.
    pub fn needs_selection(self) -> bool {
        matches!(
            self,
            ShortcutAction::Move(_)
                | ShortcutAction::RotateClockwise
                | ShortcutAction::RotateCounterClockwise
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ShortcutAction::SelectNext => "selectNext",
            ShortcutAction::SelectPrevious => "selectPrevious",
            ShortcutAction::AddToken => "addToken",
            ShortcutAction::DeleteToken => "deleteToken",
            ShortcutAction::Move(Nudge::Up) => "moveUp",
            ShortcutAction::Move(Nudge::Down) => "moveDown",
            ShortcutAction::Move(Nudge::Left) => "moveLeft",
            ShortcutAction::Move(Nudge::Right) => "moveRight",
            ShortcutAction::RotateClockwise => "rotateClockwise",
            ShortcutAction::RotateCounterClockwise => "rotateCounterClockwise",
        }
    }
}

/// Resolves key events into shortcut actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value. Only Shift changes the
    /// meaning of a key; Shift+↑ and Shift+↓ still move.
    pub fn resolve(key: &str, shift: bool) -> Option<ShortcutAction> {
        match key {
            "Tab" if shift => Some(ShortcutAction::SelectPrevious),
            "Tab" => Some(ShortcutAction::SelectNext),
            "a" | "A" => Some(ShortcutAction::AddToken),
            "x" | "X" => Some(ShortcutAction::DeleteToken),
            "ArrowRight" if shift => Some(ShortcutAction::RotateClockwise),
            "ArrowLeft" if shift => Some(ShortcutAction::RotateCounterClockwise),
            "ArrowUp" => Some(ShortcutAction::Move(Nudge::Up)),
            "ArrowDown" => Some(ShortcutAction::Move(Nudge::Down)),
            "ArrowLeft" => Some(ShortcutAction::Move(Nudge::Left)),
            "ArrowRight" => Some(ShortcutAction::Move(Nudge::Right)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_tab_cycles() {
        assert_eq!(
            ShortcutMap::resolve("Tab", false),
            Some(ShortcutAction::SelectNext)
        );
        assert_eq!(
            ShortcutMap::resolve("Tab", true),
            Some(ShortcutAction::SelectPrevious)
        );
    }

    #[test]
    fn resolve_add_delete_any_case() {
        for key in ["a", "A"] {
            assert_eq!(
                ShortcutMap::resolve(key, false),
                Some(ShortcutAction::AddToken)
            );
        }
        assert_eq!(
            ShortcutMap::resolve("A", true),
            Some(ShortcutAction::AddToken)
        );
        assert_eq!(
            ShortcutMap::resolve("X", false),
            Some(ShortcutAction::DeleteToken)
        );
    }

    #[test]
    fn resolve_arrows_move() {
        assert_eq!(
            ShortcutMap::resolve("ArrowUp", false),
            Some(ShortcutAction::Move(Nudge::Up))
        );
        assert_eq!(
            ShortcutMap::resolve("ArrowLeft", false),
            Some(ShortcutAction::Move(Nudge::Left))
        );
    }

    #[test]
    fn resolve_shift_arrows_rotate_horizontally_only() {
        assert_eq!(
            ShortcutMap::resolve("ArrowRight", true),
            Some(ShortcutAction::RotateClockwise)
        );
        assert_eq!(
            ShortcutMap::resolve("ArrowLeft", true),
            Some(ShortcutAction::RotateCounterClockwise)
        );
        assert_eq!(
            ShortcutMap::resolve("ArrowUp", true),
            Some(ShortcutAction::Move(Nudge::Up))
        );
    }

    #[test]
    fn resolve_unknown_key() {
        assert_eq!(ShortcutMap::resolve("q", false), None);
        assert_eq!(ShortcutMap::resolve("Delete", false), None);
        assert_eq!(ShortcutMap::resolve("Escape", true), None);
    }

    #[test]
    fn only_movement_and_rotation_need_selection() {
        assert!(ShortcutAction::Move(Nudge::Down).needs_selection());
        assert!(ShortcutAction::RotateClockwise.needs_selection());
        assert!(!ShortcutAction::AddToken.needs_selection());
        assert!(!ShortcutAction::SelectNext.needs_selection());
    }

    #[test]
    fn nudge_deltas_are_y_up() {
        assert_eq!(Nudge::Up.delta(), (0, 1));
        assert_eq!(Nudge::Down.delta(), (0, -1));
    }
}
