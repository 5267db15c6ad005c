//! Best-effort constraint application for layout expressions.
//!
//! A [`ConstraintRuntime`] owns an ordered list of statements and one
//! [`Interpreter`](layout_expression::Interpreter). Each call to
//! [`ConstraintRuntime::apply`] evaluates the statements in order; a statement
//! that fails is logged and reported, and the rest of the pass goes on.
//!
//! ```
//! use layout_constraints::ConstraintRuntime;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let width = Rc::new(Cell::new(0.0));
//! let mut runtime = ConstraintRuntime::new();
//! let (get, set) = (width.clone(), width.clone());
//! runtime
//!     .interpreter_mut()
//!     .register("child.width", move || get.get(), move |v| set.set(v))
//!     .unwrap();
//!
//! runtime.set_constraints(["var gutter = 8", "oops = 1", "child.width = 100 - 2gutter"]);
//! let report = runtime.apply();
//!
//! assert_eq!(report.applied, 2);
//! assert_eq!(report.failures.len(), 1);
//! assert_eq!(width.get(), 84.0);
//! ```

pub mod error;
pub mod runtime;
pub mod sheet;

pub use error::ConstraintError;
pub use layout_expression;
pub use runtime::{ApplyReport, ConstraintFailure, ConstraintRuntime};
pub use sheet::{ConstraintSheet, RuntimeOptions};
