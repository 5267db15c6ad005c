//! Errors raised while evaluating a statement.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("More than one '=' in statement: {0}")]
    MultipleAssignment(String),

    #[error("Ternary '?' without matching ':' in: {0}")]
    MissingTernaryBranch(String),

    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    #[error("Malformed expression")]
    MalformedExpression,

    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),

    #[error("Invalid number literal '{0}'")]
    InvalidNumber(String),

    #[error("Invalid name '{0}'")]
    InvalidName(String),

    #[error("Name '{0}' is already defined")]
    DuplicateName(String),

    #[error("Cannot assign to constant '{0}'")]
    ConstantAssignment(String),

    #[error("'{0}' is not a declared variable or accessor")]
    UndeclaredName(String),

    #[error("Unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("'{0}' is a reserved name")]
    ReservedName(String),
}

impl ExprError {
    /// True for format errors in the statement text itself, false for
    /// namespace errors (duplicates, constants, undeclared or unknown names).
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ExprError::MultipleAssignment(_)
                | ExprError::MissingTernaryBranch(_)
                | ExprError::MismatchedParentheses
                | ExprError::MalformedExpression
                | ExprError::UnexpectedCharacter(_)
                | ExprError::InvalidNumber(_)
        )
    }
}
