//! Line edits: canvas actions → single-line changes to the text buffer.
//!
//! Every edit splits the buffer on `'\n'`, touches one line, and joins the
//! lines back. Identities in any token list taken before the edit are stale
//! afterwards; callers re-parse before reading tokens again.

use crate::id::LineId;
use crate::model::Direction;
use crate::parser::record_tail;

/// A single-line change to the text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// Rewrite a record in place, keeping any text after its third comma.
    Update {
        line: LineId,
        x: u32,
        y: u32,
        direction: Direction,
    },
    /// Insert a new record directly below `after`.
    InsertAfter {
        after: LineId,
        x: u32,
        y: u32,
        direction: Direction,
    },
    /// Add a new record at the end of the buffer.
    Append { x: u32, y: u32, direction: Direction },
    /// Remove a line entirely.
    Delete { line: LineId },
}

/// Minimal record form: `"{x}, {y}, {DIR}"`.
pub fn format_record(x: u32, y: u32, direction: Direction) -> String {
    format!("{x}, {y}, {direction}")
}

/// Apply an edit to `text`. Returns `None` when the edit is a no-op
/// (line out of range).
#[must_use = "the edited text is returned, not written in place"]
pub fn apply_edit(text: &str, edit: &LineEdit) -> Option<String> {
    match *edit {
        LineEdit::Update {
            line,
            x,
            y,
            direction,
        } => update_line(text, line, x, y, direction),
        LineEdit::InsertAfter {
            after,
            x,
            y,
            direction,
        } => Some(insert_line_after(text, after, x, y, direction)),
        LineEdit::Append { x, y, direction } => Some(append_line(text, x, y, direction)),
        LineEdit::Delete { line } => delete_line(text, line),
    }
}

/// Rewrite `line` as a record. If the original line had three or more
/// commas, everything after the third one is carried over verbatim.
pub fn update_line(text: &str, line: LineId, x: u32, y: u32, direction: Direction) -> Option<String> {
    let original = text.split('\n').nth(line.index())?;
    let rewritten = match record_tail(original) {
        Some(tail) => format!("{},{tail}", format_record(x, y, direction)),
        None => format_record(x, y, direction),
    };

    let mut lines: Vec<&str> = text.split('\n').collect();
    lines[line.index()] = &rewritten;
    Some(lines.join("\n"))
}

/// Insert a minimal record right after `after`. Lines below shift down by
/// one. An `after` past the end appends.
pub fn insert_line_after(text: &str, after: LineId, x: u32, y: u32, direction: Direction) -> String {
    let record = format_record(x, y, direction);
    let mut lines: Vec<&str> = text.split('\n').collect();
    let at = after.get().min(lines.len());
    lines.insert(at, &record);
    lines.join("\n")
}

/// Append a minimal record. An empty or whitespace-only buffer is replaced
/// outright, so the result never starts with a blank line.
pub fn append_line(text: &str, x: u32, y: u32, direction: Direction) -> String {
    let record = format_record(x, y, direction);
    if text.trim().is_empty() {
        record
    } else {
        format!("{text}\n{record}")
    }
}

/// Remove `line`. Lines below shift up by one.
pub fn delete_line(text: &str, line: LineId) -> Option<String> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if line.index() >= lines.len() {
        return None;
    }
    lines.remove(line.index());
    Some(lines.join("\n"))
}
