use crate::sheet::{ConstraintSheet, RuntimeOptions};
use layout_expression::{EngineOptions, ExprError, Interpreter};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// A statement that failed during [`ConstraintRuntime::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintFailure {
    /// Position in the constraint list.
    pub index: usize,
    pub statement: String,
    pub error: ExprError,
}

impl fmt::Display for ConstraintFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "constraint #{} `{}`: {}", self.index, self.statement, self.error)
    }
}

/// Outcome of one pass over the constraint list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
    /// Number of statements that evaluated successfully.
    pub applied: usize,
    pub failures: Vec<ConstraintFailure>,
}

impl ApplyReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// An ordered list of statements applied against one [`Interpreter`].
///
/// Register accessors through [`interpreter_mut`](Self::interpreter_mut), set
/// the constraints, then call [`apply`](Self::apply) once per layout pass.
#[derive(Debug, Default)]
pub struct ConstraintRuntime {
    constraints: Vec<String>,
    interpreter: Interpreter,
    options: RuntimeOptions,
    /// Variables the previous pass declared.
    declared: Vec<String>,
}

impl ConstraintRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(engine: EngineOptions, options: RuntimeOptions) -> Self {
        ConstraintRuntime {
            constraints: Vec::new(),
            interpreter: Interpreter::with_options(engine),
            options,
            declared: Vec::new(),
        }
    }

    pub fn from_sheet(sheet: ConstraintSheet) -> Self {
        let mut runtime = Self::with_options(sheet.engine, sheet.runtime);
        runtime.constraints = sheet.constraints;
        runtime
    }

    /// Replaces the constraint list.
    pub fn set_constraints<I, S>(&mut self, constraints: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints = constraints.into_iter().map(Into::into).collect();
    }

    pub fn push_constraint(&mut self, statement: impl Into<String>) {
        self.constraints.push(statement.into());
    }

    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    pub fn options(&self) -> &RuntimeOptions {
        &self.options
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    /// Evaluates every constraint in order.
    ///
    /// A failing statement is logged and recorded in the report; the
    /// statements after it still run. Blank statements are skipped.
    ///
    /// With `reset_variables` set, variables declared by the previous pass are
    /// removed first. Variables the host declared through
    /// [`interpreter_mut`](Self::interpreter_mut) are left alone.
    pub fn apply(&mut self) -> ApplyReport {
        if self.options.reset_variables {
            for name in self.declared.drain(..) {
                self.interpreter.remove_variable(&name);
            }
        }
        let existing: HashSet<String> = self
            .interpreter
            .variable_names()
            .map(str::to_string)
            .collect();

        let mut report = ApplyReport::default();
        for (index, statement) in self.constraints.iter().enumerate() {
            if statement.trim().is_empty() {
                continue;
            }
            match self.interpreter.evaluate(statement) {
                Ok(_) => report.applied += 1,
                Err(error) => {
                    warn!(index, statement = %statement, %error, "constraint failed");
                    report.failures.push(ConstraintFailure {
                        index,
                        statement: statement.clone(),
                        error,
                    });
                }
            }
        }

        self.declared = self
            .interpreter
            .variable_names()
            .filter(|name| !existing.contains(*name))
            .map(str::to_string)
            .collect();

        debug!(
            applied = report.applied,
            declared = self.declared.len(),
            failed = report.failures.len(),
            "constraints applied"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_do_not_stop_the_pass() {
        let mut runtime = ConstraintRuntime::new();
        runtime.set_constraints(["var a = 1", "b = 2", "var c = a + 1"]);
        let report = runtime.apply();

        assert_eq!(report.applied, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
        assert_eq!(report.failures[0].error, ExprError::UndeclaredName("b".into()));
        assert_eq!(runtime.interpreter().variable("c"), Some(2.0));
    }

    #[test]
    fn test_blank_statements_are_skipped() {
        let mut runtime = ConstraintRuntime::new();
        runtime.set_constraints(["", "  ", "var a = 1"]);
        let report = runtime.apply();
        assert_eq!(report.applied, 1);
        assert!(report.is_clean());
    }

    #[test]
    fn test_reset_variables_between_passes() {
        let mut runtime = ConstraintRuntime::new();
        runtime.push_constraint("var a = 1");
        assert!(runtime.apply().is_clean());
        assert!(runtime.apply().is_clean());

        let mut keeping = ConstraintRuntime::with_options(
            EngineOptions::default(),
            RuntimeOptions {
                reset_variables: false,
                ..RuntimeOptions::default()
            },
        );
        keeping.push_constraint("var a = 1");
        assert!(keeping.apply().is_clean());
        let report = keeping.apply();
        assert_eq!(report.failures[0].error, ExprError::DuplicateName("a".into()));
    }

    #[test]
    fn test_host_variables_survive_passes() {
        let mut runtime = ConstraintRuntime::new();
        runtime.interpreter_mut().evaluate("var margin = 4").unwrap();
        runtime.set_constraints(["margin * 2", "var inner = margin + 1"]);

        for _ in 0..2 {
            let report = runtime.apply();
            assert!(report.is_clean(), "{:?}", report.failures);
            assert_eq!(report.applied, 2);
        }
        assert_eq!(runtime.interpreter().variable("margin"), Some(4.0));
        assert_eq!(runtime.interpreter().variable("inner"), Some(5.0));

        // A sheet variable is gone once the statement declaring it is.
        runtime.set_constraints(["margin = margin + 1"]);
        assert!(runtime.apply().is_clean());
        assert_eq!(runtime.interpreter().variable("inner"), None);
        assert_eq!(runtime.interpreter().variable("margin"), Some(5.0));
    }

    #[test]
    fn test_failure_display() {
        let failure = ConstraintFailure {
            index: 3,
            statement: "pi = 4".to_string(),
            error: ExprError::ConstantAssignment("pi".into()),
        };
        assert_eq!(
            failure.to_string(),
            "constraint #3 `pi = 4`: Cannot assign to constant 'pi'"
        );
    }
}
