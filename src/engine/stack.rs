//! Operator stack with sentinel-yielding peek.

use crate::tokenizer::Token;

/// LIFO stack of operator, function, and parenthesis tokens.
///
/// Invariant: peeking an empty stack yields the start-of-input sentinel
/// instead of failing, so the empty stack behaves like a lowest-priority
/// boundary in every loop condition.
#[derive(Debug, Default)]
pub struct OperatorStack {
    items: Vec<Token>,
}

impl OperatorStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes a token onto the stack.
    pub fn push(&mut self, token: Token) {
        self.items.push(token);
    }

    /// Peeks at the top of the stack.
    ///
    /// Returns [`Token::START_OF_INPUT`] when the stack is empty.
    pub fn top(&self) -> Token {
        self.items.last().copied().unwrap_or(Token::START_OF_INPUT)
    }

    /// Pops and returns the top token, if any.
    pub fn pop(&mut self) -> Option<Token> {
        self.items.pop()
    }

    /// Returns `true` when the stack holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
