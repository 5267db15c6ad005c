//! Infix to postfix conversion (shunting-yard).
//!
//! Names are resolved here, not at evaluation time: constants, variables and
//! accessor getters are read once while converting and their values are
//! written into the output. Evaluating the result never touches the symbol
//! table again.

use crate::error::ExprError;
use crate::functions;
use crate::symbols::SymbolTable;
use crate::token::Token;
use crate::types::{FunctionDefinition, Operator};
use std::fmt;
use tracing::trace;

#[derive(Debug, Clone, Copy)]
pub enum PostfixToken {
    Value(f64),
    Operator(Operator),
    Function(&'static FunctionDefinition),
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixToken::Value(value) => write!(f, "{value}"),
            PostfixToken::Operator(op) => write!(f, "{op}"),
            PostfixToken::Function(def) => f.write_str(def.name),
        }
    }
}

#[derive(Clone, Copy)]
enum Pending {
    Open,
    Operator(Operator),
    Function(&'static FunctionDefinition),
}

/// Converts infix tokens to postfix order, substituting symbol values.
pub fn to_postfix(tokens: &[Token], symbols: &SymbolTable) -> Result<Vec<PostfixToken>, ExprError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(text) => output.push(PostfixToken::Value(parse_number(text)?)),
            Token::Ident(name) => {
                if let Some(value) = symbols.resolve(name) {
                    output.push(PostfixToken::Value(value));
                } else if let Some(def) = functions::lookup(name) {
                    stack.push(Pending::Function(def));
                } else {
                    return Err(ExprError::UnknownIdentifier(name.clone()));
                }
            }
            Token::Operator(op) => {
                while let Some(&Pending::Operator(top)) = stack.last() {
                    let binds_tighter = top.precedence() > op.precedence()
                        || (top.precedence() == op.precedence() && !op.is_right_associative());
                    if !binds_tighter {
                        break;
                    }
                    stack.pop();
                    output.push(PostfixToken::Operator(top));
                }
                stack.push(Pending::Operator(*op));
            }
            Token::Open => stack.push(Pending::Open),
            Token::Close => {
                loop {
                    match stack.pop() {
                        Some(Pending::Open) => break,
                        Some(Pending::Operator(op)) => output.push(PostfixToken::Operator(op)),
                        Some(Pending::Function(def)) => output.push(PostfixToken::Function(def)),
                        None => return Err(ExprError::MismatchedParentheses),
                    }
                }
                if let Some(&Pending::Function(def)) = stack.last() {
                    stack.pop();
                    output.push(PostfixToken::Function(def));
                }
            }
            Token::Unrecognized(c) => return Err(ExprError::UnexpectedCharacter(*c)),
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Open => return Err(ExprError::MismatchedParentheses),
            Pending::Operator(op) => output.push(PostfixToken::Operator(op)),
            Pending::Function(def) => output.push(PostfixToken::Function(def)),
        }
    }

    trace!(postfix = ?output, "converted to postfix");
    Ok(output)
}

fn parse_number(text: &str) -> Result<f64, ExprError> {
    text.parse()
        .map_err(|_| ExprError::InvalidNumber(text.to_string()))
}
