//! Token contracts shared by the tokenizer and the conversion engine.

use std::fmt;

use crate::tokenizer::operator::Operator;
use crate::tokenizer::pos::SourcePos;

/// Token categories produced over an infix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Single-character operand: a digit or a lowercase variable name.
    Identifier(char),
    /// Mathematical operator with its resolved descriptor.
    Operator(Operator),
    /// Single-uppercase-letter function name.
    Function(char),
    /// Argument separator (`,`) inside a function call.
    ArgumentSeparator,
    /// Opening parenthesis.
    LeftParen,
    /// Closing parenthesis.
    RightParen,
    /// Terminal token repeated forever once input is exhausted.
    EndOfInput,
    /// Sentinel returned when peeking an empty operator stack.
    ///
    /// Never produced by the tokenizer.
    StartOfInput,
}

/// A classified character with its source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Zero-based character index; sentinels carry none.
    pub position: Option<SourcePos>,
}

impl Token {
    /// Creates a token at a source position.
    pub fn new(kind: TokenKind, position: SourcePos) -> Self {
        Self {
            kind,
            position: Some(position),
        }
    }

    /// The empty-stack sentinel token.
    pub const START_OF_INPUT: Self = Self {
        kind: TokenKind::StartOfInput,
        position: None,
    };

    /// The terminal end-of-input token.
    pub const END_OF_INPUT: Self = Self {
        kind: TokenKind::EndOfInput,
        position: None,
    };

    /// Returns the display character, if the token has a printable form.
    pub fn display_char(&self) -> Option<char> {
        match self.kind {
            TokenKind::Identifier(ch) | TokenKind::Function(ch) => Some(ch),
            TokenKind::Operator(op) => Some(op.symbol()),
            TokenKind::ArgumentSeparator => Some(','),
            TokenKind::LeftParen => Some('('),
            TokenKind::RightParen => Some(')'),
            TokenKind::EndOfInput | TokenKind::StartOfInput => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.display_char() {
            Some(ch) => write!(f, "{ch}"),
            None => Ok(()),
        }
    }
}
