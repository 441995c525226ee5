//! Text ↔ canvas sync engine.
//!
//! The text buffer is the single source of truth. The token list is a pure
//! function of it and is rebuilt in full after every change:
//!
//! - **Text → Canvas**: the host replaces the text (`set_text`); the engine
//!   re-parses.
//! - **Canvas → Text**: a canvas action becomes a `LineEdit`; `apply_edit`
//!   rewrites the affected line and re-parses in the same call, so no caller
//!   can observe tokens that disagree with the text.
//!
//! There is no incremental diffing. Inserts and deletes renumber every
//! record below them, and only a full parse gets that right.

use fp_core::FloorConfig;
use fp_core::edit::{LineEdit, apply_edit};
use fp_core::id::LineId;
use fp_core::model::{Token, find_token};
use fp_core::parser::parse_tokens;

pub struct SyncEngine {
    text: String,
    tokens: Vec<Token>,
    pub config: FloorConfig,
}

impl SyncEngine {
    /// Create an engine with an empty buffer.
    pub fn new(config: FloorConfig) -> Self {
        Self {
            text: String::new(),
            tokens: Vec::new(),
            config,
        }
    }

    /// Create an engine from existing text.
    pub fn from_text(text: &str, config: FloorConfig) -> Self {
        let mut engine = Self::new(config);
        engine.set_text(text);
        engine
    }

    // ─── Text → Canvas direction ─────────────────────────────────────────

    /// Replace the entire text and re-parse.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.reparse();
        log::debug!(
            "text replaced: {} lines, {} tokens",
            self.text.split('\n').count(),
            self.tokens.len()
        );
    }

    /// Rebuild the token list from the current text.
    pub fn reparse(&mut self) {
        self.tokens = parse_tokens(&self.text);
    }

    // ─── Canvas → Text direction ─────────────────────────────────────────

    /// Apply a line edit, then re-parse. Returns `true` if the text changed.
    pub fn apply_edit(&mut self, edit: &LineEdit) -> bool {
        let Some(new_text) = apply_edit(&self.text, edit) else {
            log::trace!("edit out of range: {edit:?}");
            return false;
        };
        if new_text == self.text {
            return false;
        }
        log::trace!("apply {edit:?}");
        self.text = new_text;
        self.reparse();
        true
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, line: LineId) -> Option<&Token> {
        find_token(&self.tokens, line)
    }
}
