//! Arithmetic and logarithmic built-ins.

use crate::types::FunctionDefinition;
use tracing::info;

/// Sign of `x`: `-1`, `0` or `1`. NaN stays NaN.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x * 0.0
    }
}

/// Negation that never produces `-0`.
fn neg(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        -x
    }
}

fn print(x: f64) -> f64 {
    info!(value = x, "print");
    x
}

static FUNCTIONS: &[FunctionDefinition] = &[
    FunctionDefinition { name: "sqrt", aliases: &[], eval_fn: f64::sqrt },
    FunctionDefinition { name: "exp", aliases: &[], eval_fn: f64::exp },
    FunctionDefinition { name: "abs", aliases: &[], eval_fn: f64::abs },
    FunctionDefinition { name: "floor", aliases: &[], eval_fn: f64::floor },
    FunctionDefinition { name: "ceil", aliases: &[], eval_fn: f64::ceil },
    // Half-way cases round away from zero.
    FunctionDefinition { name: "round", aliases: &[], eval_fn: f64::round },
    FunctionDefinition { name: "sign", aliases: &["sgn"], eval_fn: sign },
    FunctionDefinition { name: "log", aliases: &["ln"], eval_fn: f64::ln },
    FunctionDefinition { name: "log10", aliases: &[], eval_fn: f64::log10 },
    FunctionDefinition { name: "log2", aliases: &[], eval_fn: f64::log2 },
    FunctionDefinition { name: "neg", aliases: &[], eval_fn: neg },
    FunctionDefinition { name: "print", aliases: &[], eval_fn: print },
];

pub fn functions() -> &'static [FunctionDefinition] {
    FUNCTIONS
}
