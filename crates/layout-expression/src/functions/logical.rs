//! Logical built-ins and predicates. All of them yield `1.0` or `0.0`.

use crate::types::FunctionDefinition;

/// Nonzero is true.
pub(crate) fn truthy(x: f64) -> bool {
    x != 0.0
}

pub(crate) fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

fn not(x: f64) -> f64 {
    flag(!truthy(x))
}

fn to_bool(x: f64) -> f64 {
    flag(truthy(x))
}

fn is_zero(x: f64) -> f64 {
    flag(x == 0.0)
}

fn is_positive(x: f64) -> f64 {
    flag(x > 0.0)
}

fn is_negative(x: f64) -> f64 {
    flag(x < 0.0)
}

fn is_nan(x: f64) -> f64 {
    flag(x.is_nan())
}

fn is_inf(x: f64) -> f64 {
    flag(x.is_infinite())
}

static FUNCTIONS: &[FunctionDefinition] = &[
    FunctionDefinition { name: "not", aliases: &[], eval_fn: not },
    FunctionDefinition { name: "bool", aliases: &[], eval_fn: to_bool },
    FunctionDefinition { name: "iszero", aliases: &[], eval_fn: is_zero },
    FunctionDefinition { name: "ispositive", aliases: &[], eval_fn: is_positive },
    FunctionDefinition { name: "isnegative", aliases: &[], eval_fn: is_negative },
    FunctionDefinition { name: "isnan", aliases: &[], eval_fn: is_nan },
    FunctionDefinition { name: "isinf", aliases: &[], eval_fn: is_inf },
];

pub fn functions() -> &'static [FunctionDefinition] {
    FUNCTIONS
}
