//! Conversion error contracts.

use std::fmt;

use crate::tokenizer::SourcePos;

/// Stable structural-mismatch categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpnErrorKind {
    /// Argument separator with no enclosing left parenthesis on the stack.
    SeparatorMismatch,
    /// Right parenthesis with no matching left parenthesis.
    UnmatchedRightParen,
    /// A parenthesis left on the stack when input was exhausted.
    UnbalancedParenthesis,
}

impl fmt::Display for RpnErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeparatorMismatch => write!(f, "separator or parentheses mismatched"),
            Self::UnmatchedRightParen => write!(f, "parentheses mismatched"),
            Self::UnbalancedParenthesis => write!(f, "parentheses mismatched"),
        }
    }
}

/// Conversion error payload.
///
/// Every mismatch is fatal for the current conversion call; there is no
/// partial-result recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpnError {
    /// Error category.
    pub kind: RpnErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Source position of the offending token, when one exists.
    pub position: Option<SourcePos>,
}

impl RpnError {
    /// Creates a conversion error.
    pub fn new(kind: RpnErrorKind, message: impl Into<String>, position: Option<SourcePos>) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
        }
    }

    /// Creates a `SeparatorMismatch` error.
    pub fn separator_mismatch(position: Option<SourcePos>) -> Self {
        Self::new(
            RpnErrorKind::SeparatorMismatch,
            "argument separator outside a parenthesized argument list",
            position,
        )
    }

    /// Creates an `UnmatchedRightParen` error.
    pub fn unmatched_right_paren(position: Option<SourcePos>) -> Self {
        Self::new(
            RpnErrorKind::UnmatchedRightParen,
            "right parenthesis without a matching left parenthesis",
            position,
        )
    }

    /// Creates an `UnbalancedParenthesis` error.
    pub fn unbalanced_parenthesis(position: Option<SourcePos>) -> Self {
        Self::new(
            RpnErrorKind::UnbalancedParenthesis,
            "parenthesis left unclosed at end of input",
            position,
        )
    }
}

impl fmt::Display for RpnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{} at position {}", self.message, pos.value()),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for RpnError {}
