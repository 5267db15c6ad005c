//! Stack evaluation of postfix token sequences.

use crate::error::ExprError;
use crate::postfix::PostfixToken;

/// Evaluates a postfix sequence to a single value.
///
/// Fails with [`ExprError::MalformedExpression`] when an operator or function
/// is missing operands, or when the stack does not end with exactly one value.
/// Division by zero and NaN are not errors; they follow IEEE-754.
pub fn evaluate_postfix(postfix: &[PostfixToken]) -> Result<f64, ExprError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());
    for token in postfix {
        match *token {
            PostfixToken::Value(value) => stack.push(value),
            PostfixToken::Function(def) => {
                let arg = stack.pop().ok_or(ExprError::MalformedExpression)?;
                stack.push((def.eval_fn)(arg));
            }
            PostfixToken::Operator(op) => {
                let right = stack.pop().ok_or(ExprError::MalformedExpression)?;
                let left = stack.pop().ok_or(ExprError::MalformedExpression)?;
                stack.push(op.apply(left, right));
            }
        }
    }
    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(ExprError::MalformedExpression),
    }
}
