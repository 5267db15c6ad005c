//! Operators and the built-in function definition type.

use crate::functions::logical::{flag, truthy};
use std::collections::HashMap;
use std::fmt;

/// Binary infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `|`
    Or,
    /// `&`
    And,
    /// `$`
    Xor,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*` or `×`
    Multiply,
    /// `/` or `÷`
    Divide,
    /// `%`
    Modulo,
    /// `^`
    Power,
}

impl Operator {
    /// Maps an operator character to its operator, if it is one.
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '|' => Some(Operator::Or),
            '&' => Some(Operator::And),
            '$' => Some(Operator::Xor),
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            '%' => Some(Operator::Modulo),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Or => '|',
            Operator::And => '&',
            Operator::Xor => '$',
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulo => '%',
            Operator::Power => '^',
        }
    }

    /// Binding strength, lowest first: or, and, xor, additive, multiplicative, power.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Or => 1,
            Operator::And => 2,
            Operator::Xor => 3,
            Operator::Add | Operator::Subtract => 4,
            Operator::Multiply | Operator::Divide | Operator::Modulo => 5,
            Operator::Power => 6,
        }
    }

    pub fn is_right_associative(self) -> bool {
        matches!(self, Operator::Power)
    }

    /// Applies the operator with IEEE-754 semantics. Logical operators treat
    /// any nonzero operand as true and yield `1.0` / `0.0`.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Or => flag(truthy(left) || truthy(right)),
            Operator::And => flag(truthy(left) && truthy(right)),
            Operator::Xor => flag(truthy(left) != truthy(right)),
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Modulo => left % right,
            Operator::Power => left.powf(right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The evaluation function of a built-in. All built-ins are unary.
pub type EvalFn = fn(f64) -> f64;

/// A built-in function definition.
#[derive(Debug)]
pub struct FunctionDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub eval_fn: EvalFn,
}

/// Map of function name/alias -> definition.
pub type FunctionMap = HashMap<&'static str, &'static FunctionDefinition>;

/// Builds a `FunctionMap` from a list of function definitions.
pub fn functions_to_map<I>(functions: I) -> FunctionMap
where
    I: IntoIterator<Item = &'static FunctionDefinition>,
{
    let mut map = HashMap::new();
    for function in functions {
        map.insert(function.name, function);
        for alias in function.aliases {
            map.insert(*alias, function);
        }
    }
    map
}
