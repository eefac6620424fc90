//! Character-level tokenizer for infix expressions.
//!
//! Scanning is byte-oriented: operands, operators, and structural
//! characters are all single ASCII characters, and anything outside the
//! recognized classes (whitespace included) is skipped silently.

mod cursor;
mod operator;
mod pos;
mod token;

use crate::tokenizer::cursor::Cursor;

pub use operator::{Associativity, Operator, OPERATOR_SYMBOLS};
pub use pos::SourcePos;
pub use token::{Token, TokenKind};

/// Single-pass tokenizer over one source expression.
///
/// Calling [`Tokenizer::next_token`] past the end of input keeps
/// returning the end-of-input token forever.
pub struct Tokenizer<'a> {
    input: &'a str,
    cursor: Cursor,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer for the provided expression.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: Cursor::new(),
        }
    }

    /// Scans and returns the next token.
    ///
    /// Classification per character, in fixed priority order:
    /// lowercase/digit identifier, uppercase function name, operator
    /// symbol, `(`, `)`, `,`. Unrecognized characters produce nothing.
    /// The tokenizer never fails.
    pub fn next_token(&mut self) -> Token {
        while let Some(byte) = self.cursor.peek_byte(self.input) {
            let pos = self.cursor.pos();
            self.cursor.advance(self.input);

            let ch = byte as char;
            let kind = if byte.is_ascii_lowercase() || byte.is_ascii_digit() {
                TokenKind::Identifier(ch)
            } else if byte.is_ascii_uppercase() {
                TokenKind::Function(ch)
            } else if let Some(op) = Operator::from_symbol(ch) {
                TokenKind::Operator(op)
            } else if byte == b'(' {
                TokenKind::LeftParen
            } else if byte == b')' {
                TokenKind::RightParen
            } else if byte == b',' {
                TokenKind::ArgumentSeparator
            } else {
                // Skip characters outside the recognized classes.
                continue;
            };

            return Token::new(kind, pos);
        }

        Token::END_OF_INPUT
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    /// Yields tokens until end of input, then `None`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        match token.kind {
            TokenKind::EndOfInput => None,
            _ => Some(token),
        }
    }
}
