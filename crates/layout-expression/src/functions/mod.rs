//! Built-in function table.
//!
//! Every built-in is unary and addressed by its lowercase name or one of its
//! aliases. Names in this table are reserved: no constant, variable or
//! accessor may use them.

pub mod arithmetic;
pub mod logical;
pub mod trig;

use crate::types::{functions_to_map, FunctionDefinition, FunctionMap};
use std::sync::OnceLock;

/// All built-in functions combined.
pub fn all_functions() -> impl Iterator<Item = &'static FunctionDefinition> {
    arithmetic::functions()
        .iter()
        .chain(trig::functions())
        .chain(logical::functions())
}

/// The function map, built on first use.
pub fn functions_map() -> &'static FunctionMap {
    static MAP: OnceLock<FunctionMap> = OnceLock::new();
    MAP.get_or_init(|| functions_to_map(all_functions()))
}

/// Looks up a built-in by lowercase name or alias.
pub fn lookup(name: &str) -> Option<&'static FunctionDefinition> {
    functions_map().get(name).copied()
}

/// Returns true if `name` is a built-in function name or alias.
pub fn is_function(name: &str) -> bool {
    functions_map().contains_key(name)
}
