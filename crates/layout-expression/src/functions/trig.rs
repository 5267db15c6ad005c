//! Trigonometric, hyperbolic and angle conversion built-ins.

use crate::types::FunctionDefinition;

static FUNCTIONS: &[FunctionDefinition] = &[
    FunctionDefinition { name: "sin", aliases: &[], eval_fn: f64::sin },
    FunctionDefinition { name: "cos", aliases: &[], eval_fn: f64::cos },
    FunctionDefinition { name: "tan", aliases: &[], eval_fn: f64::tan },
    FunctionDefinition { name: "asin", aliases: &[], eval_fn: f64::asin },
    FunctionDefinition { name: "acos", aliases: &[], eval_fn: f64::acos },
    FunctionDefinition { name: "atan", aliases: &[], eval_fn: f64::atan },
    FunctionDefinition { name: "sinh", aliases: &[], eval_fn: f64::sinh },
    FunctionDefinition { name: "cosh", aliases: &[], eval_fn: f64::cosh },
    FunctionDefinition { name: "tanh", aliases: &[], eval_fn: f64::tanh },
    FunctionDefinition { name: "asinh", aliases: &[], eval_fn: f64::asinh },
    FunctionDefinition { name: "acosh", aliases: &[], eval_fn: f64::acosh },
    FunctionDefinition { name: "atanh", aliases: &[], eval_fn: f64::atanh },
    FunctionDefinition { name: "rad", aliases: &["radians"], eval_fn: f64::to_radians },
    FunctionDefinition { name: "deg", aliases: &["degrees"], eval_fn: f64::to_degrees },
];

pub fn functions() -> &'static [FunctionDefinition] {
    FUNCTIONS
}
