use crate::accessor::Accessor;
use crate::error::ExprError;
use std::borrow::Cow;
use std::collections::HashMap;
use std::f64::consts::{E, PI, TAU};
use std::fmt;

/// Golden ratio.
const PHI: f64 = 1.618_033_988_749_895;

/// Built-in constants.
pub const BUILTIN_CONSTANTS: &[(&str, f64)] = &[
    ("pi", PI),
    ("π", PI),
    ("e", E),
    ("tau", TAU),
    ("phi", PHI),
    ("φ", PHI),
    ("true", 1.0),
    ("false", 0.0),
];

/// What a name refers to.
pub enum Symbol {
    Constant(f64),
    Variable(f64),
    Accessor(Box<dyn Accessor>),
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Symbol::Variable(value) => f.debug_tuple("Variable").field(value).finish(),
            Symbol::Accessor(_) => f.write_str("Accessor(..)"),
        }
    }
}

/// Constants, variables and accessors in one name space.
///
/// Keeping all three kinds in a single map makes names unique across them.
/// Lookups are case-insensitive.
#[derive(Debug)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

fn key(name: &str) -> Cow<'_, str> {
    let trimmed = name.trim();
    if trimmed.chars().any(char::is_uppercase) {
        Cow::Owned(trimmed.to_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}

impl SymbolTable {
    /// A table holding only the built-in constants.
    pub fn new() -> Self {
        let symbols = BUILTIN_CONSTANTS
            .iter()
            .map(|&(name, value)| (name.to_string(), Symbol::Constant(value)))
            .collect();
        SymbolTable { symbols }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(key(name).as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(key(name).as_ref())
    }

    /// Current value of `name`. Reading an accessor calls its getter.
    pub fn resolve(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            Symbol::Constant(value) | Symbol::Variable(value) => Some(*value),
            Symbol::Accessor(accessor) => Some(accessor.get()),
        }
    }

    /// Value of the variable `name`, if it is one.
    pub fn variable(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            Symbol::Variable(value) => Some(*value),
            _ => None,
        }
    }

    /// Creates a variable. Fails if the name is taken by any symbol.
    pub fn declare(&mut self, name: &str, value: f64) -> Result<(), ExprError> {
        self.insert(name, Symbol::Variable(value))
    }

    /// Registers an accessor. Fails if the name is taken by any symbol.
    pub fn insert_accessor(
        &mut self,
        name: &str,
        accessor: Box<dyn Accessor>,
    ) -> Result<(), ExprError> {
        self.insert(name, Symbol::Accessor(accessor))
    }

    fn insert(&mut self, name: &str, symbol: Symbol) -> Result<(), ExprError> {
        let name = key(name).into_owned();
        if self.symbols.contains_key(&name) {
            return Err(ExprError::DuplicateName(name));
        }
        self.symbols.insert(name, symbol);
        Ok(())
    }

    /// Writes `value` to an existing variable or through an accessor's setter.
    pub fn assign(&mut self, name: &str, value: f64) -> Result<(), ExprError> {
        let name = key(name);
        match self.symbols.get_mut(name.as_ref()) {
            Some(Symbol::Variable(slot)) => {
                *slot = value;
                Ok(())
            }
            Some(Symbol::Accessor(accessor)) => {
                accessor.set(value);
                Ok(())
            }
            Some(Symbol::Constant(_)) => Err(ExprError::ConstantAssignment(name.into_owned())),
            None => Err(ExprError::UndeclaredName(name.into_owned())),
        }
    }

    /// Removes the accessor `name`. Returns false if there was no such accessor.
    pub fn remove_accessor(&mut self, name: &str) -> bool {
        let name = key(name);
        if matches!(self.symbols.get(name.as_ref()), Some(Symbol::Accessor(_))) {
            self.symbols.remove(name.as_ref());
            true
        } else {
            false
        }
    }

    /// Removes the variable `name`. Returns false if there was no such variable.
    pub fn remove_variable(&mut self, name: &str) -> bool {
        let name = key(name);
        if matches!(self.symbols.get(name.as_ref()), Some(Symbol::Variable(_))) {
            self.symbols.remove(name.as_ref());
            true
        } else {
            false
        }
    }

    pub fn clear_accessors(&mut self) {
        self.symbols
            .retain(|_, symbol| !matches!(symbol, Symbol::Accessor(_)));
    }

    pub fn clear_variables(&mut self) {
        self.symbols
            .retain(|_, symbol| !matches!(symbol, Symbol::Variable(_)));
    }

    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().filter_map(|(name, symbol)| match symbol {
            Symbol::Accessor(_) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().filter_map(|(name, symbol)| match symbol {
            Symbol::Variable(_) => Some(name.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::FnAccessor;

    #[test]
    fn test_builtin_constants() {
        let table = SymbolTable::new();
        assert_eq!(table.resolve("pi"), Some(PI));
        assert_eq!(table.resolve("PI"), Some(PI));
        assert_eq!(table.resolve("φ"), Some(PHI));
        assert_eq!(table.resolve("true"), Some(1.0));
        assert_eq!(table.resolve("false"), Some(0.0));
        assert_eq!(table.resolve("nope"), None);
    }

    #[test]
    fn test_names_are_unique_across_kinds() {
        let mut table = SymbolTable::new();
        table.declare("x", 1.0).unwrap();
        assert_eq!(table.declare("X", 2.0), Err(ExprError::DuplicateName("x".into())));
        assert_eq!(table.declare("pi", 2.0), Err(ExprError::DuplicateName("pi".into())));
        let err = table
            .insert_accessor("x", Box::new(FnAccessor::new(|| 0.0, |_| {})))
            .unwrap_err();
        assert_eq!(err, ExprError::DuplicateName("x".into()));
    }

    #[test]
    fn test_assign() {
        let mut table = SymbolTable::new();
        table.declare("x", 1.0).unwrap();
        table.assign("x", 3.0).unwrap();
        assert_eq!(table.variable("x"), Some(3.0));
        assert_eq!(
            table.assign("e", 3.0),
            Err(ExprError::ConstantAssignment("e".into()))
        );
        assert_eq!(
            table.assign("q", 3.0),
            Err(ExprError::UndeclaredName("q".into()))
        );
    }

    #[test]
    fn test_clear_is_per_kind() {
        let mut table = SymbolTable::new();
        table.declare("x", 1.0).unwrap();
        table
            .insert_accessor("a", Box::new(FnAccessor::new(|| 2.0, |_| {})))
            .unwrap();

        table.clear_variables();
        assert!(!table.contains("x"));
        assert_eq!(table.resolve("a"), Some(2.0));

        table.declare("x", 1.0).unwrap();
        table.clear_accessors();
        assert!(!table.contains("a"));
        assert_eq!(table.variable("x"), Some(1.0));
        assert_eq!(table.resolve("pi"), Some(PI));
    }

    #[test]
    fn test_remove_accessor_ignores_other_kinds() {
        let mut table = SymbolTable::new();
        table.declare("x", 1.0).unwrap();
        assert!(!table.remove_accessor("x"));
        assert!(!table.remove_accessor("missing"));
        assert!(table.contains("x"));
    }

    #[test]
    fn test_remove_variable() {
        let mut table = SymbolTable::new();
        table.declare("x", 1.0).unwrap();
        table
            .insert_accessor("a", Box::new(FnAccessor::new(|| 2.0, |_| {})))
            .unwrap();
        assert!(!table.remove_variable("a"));
        assert!(!table.remove_variable("pi"));
        assert!(table.remove_variable("X"));
        assert!(!table.contains("x"));
        assert_eq!(table.variable_names().count(), 0);
    }
}
