//! Append-only output sequence for the RPN result.

use std::fmt;

use crate::tokenizer::Token;

/// Ordered sequence of output tokens.
///
/// Insertion order is the final answer; tokens are never reordered after
/// appending.
#[derive(Debug, Default)]
pub struct RpnOutput {
    tokens: Vec<Token>,
}

impl RpnOutput {
    /// Creates an empty output sequence.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends a token to the sequence.
    pub fn append(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Returns the appended tokens in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the number of appended tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for RpnOutput {
    /// Concatenates each token's display form with no delimiter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
