//! Library entrypoint for `yard`.
//!
//! The crate converts infix expressions to Reverse Polish Notation with
//! the shunting-yard algorithm. It exposes the character tokenizer and
//! the conversion engine.

pub mod engine;
pub mod tokenizer;

pub use engine::{to_rpn, RpnError, RpnErrorKind};
pub use tokenizer::{Associativity, Operator, SourcePos, Token, TokenKind, Tokenizer};
