//! Statement evaluation: declarations, assignments and ternaries.

use crate::accessor::{Accessor, FnAccessor};
use crate::error::ExprError;
use crate::evaluate::evaluate_postfix;
use crate::functions;
use crate::options::EngineOptions;
use crate::postfix::to_postfix;
use crate::symbols::{Symbol, SymbolTable};
use crate::token::{is_identifier, tokenize_with};
use tracing::debug;

/// Evaluates expression statements against constants, variables and
/// accessors.
///
/// Every call re-tokenizes its input. Names are resolved while converting to
/// postfix, so a variable or accessor is read at most once per occurrence and
/// only in the branch of a ternary that is taken.
#[derive(Debug)]
pub struct Interpreter {
    symbols: SymbolTable,
    options: EngineOptions,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(mut options: EngineOptions) -> Self {
        options.declaration_keyword = options.declaration_keyword.trim().to_lowercase();
        Interpreter {
            symbols: SymbolTable::new(),
            options,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Evaluates one statement and returns its value.
    ///
    /// - `expr` evaluates the expression;
    /// - `var name = expr` declares a new variable;
    /// - `name = expr` writes to an existing variable or accessor.
    ///
    /// A statement may contain at most one `=`.
    pub fn evaluate(&mut self, statement: &str) -> Result<f64, ExprError> {
        let Some((target, expr)) = statement.split_once('=') else {
            return self.evaluate_expression(statement);
        };
        if expr.contains('=') {
            return Err(ExprError::MultipleAssignment(statement.trim().to_string()));
        }
        self.assign(target, expr)
    }

    /// Evaluates an expression without assignment. Ternaries are allowed.
    pub fn evaluate_expression(&self, expr: &str) -> Result<f64, ExprError> {
        let Some(question) = expr.find('?') else {
            return self.evaluate_plain(expr);
        };
        let branches = &expr[question + 1..];
        let colon = matching_colon(branches)
            .ok_or_else(|| ExprError::MissingTernaryBranch(expr.trim().to_string()))?;
        let condition = self.evaluate_plain(&expr[..question])?;
        if condition != 0.0 {
            self.evaluate_expression(&branches[..colon])
        } else {
            self.evaluate_expression(&branches[colon + 1..])
        }
    }

    fn evaluate_plain(&self, expr: &str) -> Result<f64, ExprError> {
        let tokens = tokenize_with(expr, self.options.auto_balance);
        let postfix = to_postfix(&tokens, &self.symbols)?;
        evaluate_postfix(&postfix)
    }

    fn assign(&mut self, target: &str, expr: &str) -> Result<f64, ExprError> {
        let target = target.trim().to_lowercase();

        if let Some(name) = self.declared_name(&target) {
            self.check_new_name(name)?;
            let value = self.evaluate_expression(expr)?;
            self.symbols.declare(name, value)?;
            debug!(variable = name, value, "declared");
            return Ok(value);
        }

        match self.symbols.get(&target) {
            Some(Symbol::Constant(_)) => return Err(ExprError::ConstantAssignment(target)),
            None => return Err(ExprError::UndeclaredName(target)),
            Some(_) => {}
        }
        let value = self.evaluate_expression(expr)?;
        self.symbols.assign(&target, value)?;
        debug!(symbol = %target, value, "assigned");
        Ok(value)
    }

    /// The name in `<keyword> <name>`, if `target` is a declaration.
    fn declared_name<'a>(&self, target: &'a str) -> Option<&'a str> {
        let rest = target.strip_prefix(self.options.declaration_keyword.as_str())?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.trim())
    }

    fn check_new_name(&self, name: &str) -> Result<(), ExprError> {
        if functions::is_function(name) || name == self.options.declaration_keyword {
            return Err(ExprError::ReservedName(name.to_string()));
        }
        if !is_identifier(name) {
            return Err(ExprError::InvalidName(name.to_string()));
        }
        if self.symbols.contains(name) {
            return Err(ExprError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Binds `name` to a getter/setter pair.
    pub fn register<G, S>(&mut self, name: &str, getter: G, setter: S) -> Result<(), ExprError>
    where
        G: Fn() -> f64 + 'static,
        S: FnMut(f64) + 'static,
    {
        self.register_accessor(name, FnAccessor::new(getter, setter))
    }

    /// Binds `name` to an accessor. Fails if the name is used by any constant,
    /// variable or accessor, or is not a valid identifier.
    pub fn register_accessor<A>(&mut self, name: &str, accessor: A) -> Result<(), ExprError>
    where
        A: Accessor + 'static,
    {
        let name = name.trim().to_lowercase();
        self.check_new_name(&name)?;
        self.symbols.insert_accessor(&name, Box::new(accessor))?;
        debug!(accessor = %name, "registered");
        Ok(())
    }

    /// Removes an accessor. Does nothing if `name` is not an accessor.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.symbols.remove_accessor(name)
    }

    /// Removes every accessor. Variables and constants stay.
    pub fn clear_accessors(&mut self) {
        self.symbols.clear_accessors();
    }

    /// Removes every variable. Accessors and constants stay.
    pub fn clear_variables(&mut self) {
        self.symbols.clear_variables();
    }

    /// Removes one variable. Does nothing if `name` is not a variable.
    pub fn remove_variable(&mut self, name: &str) -> bool {
        self.symbols.remove_variable(name)
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.symbols.variable(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains(name)
    }

    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.accessor_names()
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.variable_names()
    }
}

/// Byte index of the `:` closing the ternary whose `?` precedes `text`.
fn matching_colon(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (index, c) in text.char_indices() {
        match c {
            '?' => depth += 1,
            ':' if depth == 0 => return Some(index),
            ':' => depth -= 1,
            _ => {}
        }
    }
    None
}
