//! Single-token selection keyed by line identity.
//!
//! The selection never caches a list index: every lookup re-resolves the
//! stored `LineId` against the current token list, because any parse may
//! renumber or drop tokens.

use fp_core::id::LineId;
use fp_core::model::{Token, find_token, position_of};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<LineId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<LineId> {
        self.current
    }

    /// Replace the selection. Returns `true` if it changed.
    pub fn set(&mut self, line: Option<LineId>) -> bool {
        let changed = self.current != line;
        if changed {
            log::debug!("selection {:?} -> {:?}", self.current, line);
        }
        self.current = line;
        changed
    }

    pub fn clear(&mut self) -> bool {
        self.set(None)
    }

    /// Drop the selection if no token in `tokens` has its identity.
    /// Returns `true` if the selection was cleared.
    pub fn reconcile(&mut self, tokens: &[Token]) -> bool {
        match self.current {
            Some(line) if find_token(tokens, line).is_none() => self.clear(),
            _ => false,
        }
    }

    /// Move the selection one token forward or backward in list order,
    /// wrapping at both ends. With nothing selected (or a stale identity),
    /// selects the first token. No-op on an empty list.
    pub fn select_next(&mut self, tokens: &[Token], forward: bool) -> bool {
        let Some(first) = tokens.first() else {
            return false;
        };

        let target = match self.current.and_then(|line| position_of(tokens, line)) {
            None => first.line,
            Some(index) => {
                let len = tokens.len();
                let next = if forward {
                    (index + 1) % len
                } else {
                    (index + len - 1) % len
                };
                tokens[next].line
            }
        };
        self.set(Some(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_core::parser::parse_tokens;

    fn line(n: usize) -> LineId {
        LineId::new(n).unwrap()
    }

    const DOC: &str = "1, 1, N\nskip\n2, 2, E\n3, 3, S";

    #[test]
    fn first_cycle_selects_first_token() {
        let tokens = parse_tokens(DOC);
        let mut sel = Selection::new();
        assert!(sel.select_next(&tokens, true));
        assert_eq!(sel.get(), Some(line(1)));

        let mut sel = Selection::new();
        sel.select_next(&tokens, false);
        assert_eq!(sel.get(), Some(line(1)));
    }

    #[test]
    fn cycle_forward_wraps() {
        let tokens = parse_tokens(DOC);
        let mut sel = Selection::new();
        let mut seen = Vec::new();
        for _ in 0..4 {
            sel.select_next(&tokens, true);
            seen.push(sel.get().unwrap().get());
        }
        assert_eq!(seen, vec![1, 3, 4, 1]);
    }

    #[test]
    fn cycle_backward_wraps() {
        let tokens = parse_tokens(DOC);
        let mut sel = Selection::new();
        sel.set(Some(line(1)));
        sel.select_next(&tokens, false);
        assert_eq!(sel.get(), Some(line(4)));
        sel.select_next(&tokens, false);
        assert_eq!(sel.get(), Some(line(3)));
    }

    #[test]
    fn cycle_on_empty_list_is_noop() {
        let mut sel = Selection::new();
        assert!(!sel.select_next(&[], true));
        assert_eq!(sel.get(), None);
    }

    #[test]
    fn stale_identity_restarts_at_first() {
        let tokens = parse_tokens(DOC);
        let mut sel = Selection::new();
        sel.set(Some(line(2)));
        sel.select_next(&tokens, true);
        assert_eq!(sel.get(), Some(line(1)));
    }

    #[test]
    fn single_token_cycles_to_itself() {
        let tokens = parse_tokens("5, 5, W");
        let mut sel = Selection::new();
        sel.set(Some(line(1)));
        assert!(!sel.select_next(&tokens, true));
        assert_eq!(sel.get(), Some(line(1)));
    }

    #[test]
    fn reconcile_clears_missing_identity() {
        let mut sel = Selection::new();
        sel.set(Some(line(3)));

        assert!(!sel.reconcile(&parse_tokens(DOC)));
        assert_eq!(sel.get(), Some(line(3)));

        // Line 3 no longer parses.
        let broken = "1, 1, N\nskip\n2, 2, nowhere\n3, 3, S";
        assert!(sel.reconcile(&parse_tokens(broken)));
        assert_eq!(sel.get(), None);
    }
}
