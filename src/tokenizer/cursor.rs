//! Minimal byte cursor for expression scanning.

use crate::tokenizer::pos::SourcePos;

/// Byte-position cursor over input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    pos: SourcePos,
}

impl Cursor {
    /// Creates a cursor at position `0`.
    pub(crate) fn new() -> Self {
        Self {
            pos: SourcePos::new(0),
        }
    }

    /// Returns the current position.
    pub(crate) fn pos(&self) -> SourcePos {
        self.pos
    }

    /// Returns `true` if the cursor is at or beyond input end.
    pub(crate) fn is_eof(&self, input: &str) -> bool {
        self.pos.as_usize() >= input.len()
    }

    /// Returns the current byte at cursor position.
    pub(crate) fn peek_byte(&self, input: &str) -> Option<u8> {
        input.as_bytes().get(self.pos.as_usize()).copied()
    }

    /// Advances the cursor by one byte, clamped to input length.
    pub(crate) fn advance(&mut self, input: &str) {
        let next = self.pos.as_usize().saturating_add(1).min(input.len());
        self.pos = SourcePos::from_usize(next);
    }
}
