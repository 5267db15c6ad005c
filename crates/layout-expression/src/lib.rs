//! Infix expression interpreter with live accessor bindings.
//!
//! # Overview
//!
//! Expressions are plain text such as `panelleft + 2margin` or
//! `w > 0 ? w : 1`. Each evaluation runs three stages:
//!
//! 1. [`tokenize`] splits the text, lowercases names and rewrites shorthand
//!    (implicit multiplication, unary minus, missing parentheses);
//! 2. [`to_postfix`] reorders the tokens into postfix form and replaces every
//!    name by its current value;
//! 3. [`evaluate_postfix`] reduces the postfix sequence on a stack.
//!
//! Names live in one [`SymbolTable`]: built-in constants, variables created
//! with `var name = expr`, and [`Accessor`]s registered by the host. An
//! accessor is a getter/setter pair over state the interpreter does not own,
//! which lets `child.left = parent.right + margin` read and write live values.
//!
//! # Example
//!
//! ```
//! use layout_expression::Interpreter;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let left = Rc::new(Cell::new(0.0));
//! let mut interp = Interpreter::new();
//! let (get, set) = (left.clone(), left.clone());
//! interp.register("left", move || get.get(), move |v| set.set(v)).unwrap();
//!
//! interp.evaluate("var margin = 4").unwrap();
//! interp.evaluate("left = 2(margin + 1)").unwrap();
//!
//! assert_eq!(left.get(), 10.0);
//! ```

pub mod accessor;
pub mod error;
pub mod evaluate;
pub mod functions;
pub mod interpreter;
pub mod options;
pub mod postfix;
pub mod symbols;
pub mod token;
pub mod types;

pub use accessor::{Accessor, FnAccessor};
pub use error::ExprError;
pub use evaluate::evaluate_postfix;
pub use functions::functions_map;
pub use interpreter::Interpreter;
pub use options::EngineOptions;
pub use postfix::{to_postfix, PostfixToken};
pub use symbols::{Symbol, SymbolTable, BUILTIN_CONSTANTS};
pub use token::{tokenize, tokenize_with, Token};
pub use types::{FunctionDefinition, FunctionMap, Operator};
