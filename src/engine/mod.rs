//! Shunting-yard conversion engine.
//!
//! Consumes the token stream one token at a time, maintaining an
//! operator stack and an append-only output sequence, and applies
//! precedence and associativity rules to decide when operators move
//! from the stack to the output.

mod error;
mod output;
mod stack;

pub use error::{RpnError, RpnErrorKind};
pub use output::RpnOutput;
pub use stack::OperatorStack;

use crate::tokenizer::{Token, TokenKind, Tokenizer};

/// Converts an infix expression to its RPN rendering.
///
/// The result concatenates each output token's display form in output
/// order with no delimiter. Structural mismatches (misplaced argument
/// separators, unmatched or unclosed parentheses) abort the conversion;
/// unrecognized input characters are skipped, never rejected.
///
/// Each call builds its own tokenizer, stack, and output, so separate
/// calls never share state.
pub fn to_rpn(input: &str) -> Result<String, RpnError> {
    let mut tokenizer = Tokenizer::new(input);
    let mut stack = OperatorStack::new();
    let mut output = RpnOutput::new();

    loop {
        let token = tokenizer.next_token();
        match token.kind {
            TokenKind::EndOfInput => break,
            TokenKind::Identifier(_) => output.append(token),
            TokenKind::Function(_) => stack.push(token),
            TokenKind::ArgumentSeparator => drain_argument(&mut stack, &mut output, &token)?,
            TokenKind::Operator(op) => {
                // Pop while the stacked operator binds at least as
                // tightly; equal precedence yields only for
                // left-associative incoming operators.
                while let TokenKind::Operator(top_op) = stack.top().kind {
                    let yields = (op.is_left_associative() && op.precedence() <= top_op.precedence())
                        || op.precedence() < top_op.precedence();
                    if !yields {
                        break;
                    }
                    if let Some(popped) = stack.pop() {
                        output.append(popped);
                    }
                }
                stack.push(token);
            }
            TokenKind::LeftParen => stack.push(token),
            TokenKind::RightParen => close_group(&mut stack, &mut output, &token)?,
            TokenKind::StartOfInput => unreachable!("tokenizer never produces the sentinel"),
        }
    }

    drain_remaining(&mut stack, &mut output)?;
    Ok(output.to_string())
}

/// Pops operators to the output until the enclosing left parenthesis.
///
/// The parenthesis stays on the stack; reaching the sentinel instead
/// means the separator sits outside any argument list.
fn drain_argument(
    stack: &mut OperatorStack,
    output: &mut RpnOutput,
    separator: &Token,
) -> Result<(), RpnError> {
    loop {
        match stack.top().kind {
            TokenKind::LeftParen => return Ok(()),
            TokenKind::StartOfInput => {
                return Err(RpnError::separator_mismatch(separator.position))
            }
            _ => {
                if let Some(popped) = stack.pop() {
                    output.append(popped);
                }
            }
        }
    }
}

/// Resolves a right parenthesis against the stack.
///
/// Pops to the output until the matching left parenthesis, discards the
/// parenthesis pair, then binds a pending function token to its
/// completed argument list.
fn close_group(
    stack: &mut OperatorStack,
    output: &mut RpnOutput,
    right_paren: &Token,
) -> Result<(), RpnError> {
    loop {
        match stack.top().kind {
            TokenKind::LeftParen => {
                stack.pop();
                break;
            }
            TokenKind::StartOfInput => {
                return Err(RpnError::unmatched_right_paren(right_paren.position))
            }
            _ => {
                if let Some(popped) = stack.pop() {
                    output.append(popped);
                }
            }
        }
    }

    if let TokenKind::Function(_) = stack.top().kind {
        if let Some(function) = stack.pop() {
            output.append(function);
        }
    }

    Ok(())
}

/// Drains the stack once the token stream is exhausted.
///
/// Any parenthesis still on the stack at this point is unbalanced; the
/// conversion halts before popping it.
fn drain_remaining(stack: &mut OperatorStack, output: &mut RpnOutput) -> Result<(), RpnError> {
    loop {
        let top = stack.top();
        match top.kind {
            TokenKind::Operator(_) => {
                if let Some(popped) = stack.pop() {
                    output.append(popped);
                }
            }
            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(RpnError::unbalanced_parenthesis(top.position))
            }
            _ => return Ok(()),
        }
    }
}
