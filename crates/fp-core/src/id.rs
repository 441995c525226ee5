use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// Line identity of a token: its 1-based line number in the text buffer at
/// the moment of the last parse.
///
/// Identities are only meaningful for the parse that produced them. Inserting
/// or deleting a line shifts the identity of every record below it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(NonZeroUsize);

impl LineId {
    /// The first line of the buffer.
    pub const FIRST: LineId = LineId(NonZeroUsize::MIN);

    /// Build from a 1-based line number. Returns `None` for `0`.
    pub fn new(number: usize) -> Option<Self> {
        NonZeroUsize::new(number).map(LineId)
    }

    /// Build from a 0-based line index.
    pub fn from_index(index: usize) -> Self {
        LineId(NonZeroUsize::MIN.saturating_add(index))
    }

    /// The 1-based line number.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based index into the buffer's line array.
    pub fn index(self) -> usize {
        self.0.get() - 1
    }

    /// Identity of the line directly below this one.
    pub fn next(self) -> Self {
        LineId(self.0.saturating_add(1))
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
