//! Immutable source position primitive.

/// Zero-based character index within the source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePos(u32);

impl SourcePos {
    /// Creates a position value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates a position from `usize` with saturation.
    pub fn from_usize(value: usize) -> Self {
        match u32::try_from(value) {
            Ok(pos) => Self(pos),
            Err(_) => Self(u32::MAX),
        }
    }

    /// Returns the raw index value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Converts the position to `usize`.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}
