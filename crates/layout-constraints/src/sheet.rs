//! Constraint sheets: a list of statements plus the options to run them with.

use crate::error::ConstraintError;
use layout_expression::EngineOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeOptions {
    /// Lines of a text sheet starting with this prefix are skipped.
    pub comment_prefix: String,
    /// Forget the variables a pass declared before the next pass starts, so
    /// the sheet's `var` declarations can run again.
    pub reset_variables: bool,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        RuntimeOptions {
            comment_prefix: "#".to_string(),
            reset_variables: true,
        }
    }
}

/// Statements in application order, with the options to run them under.
///
/// In TOML the `constraints` array must come before the `[engine]` and
/// `[runtime]` tables:
///
/// ```
/// use layout_constraints::ConstraintSheet;
///
/// let sheet = ConstraintSheet::from_toml_str(r#"
///     constraints = ["var margin = 4", "margin * 2"]
///
///     [engine]
///     declaration_keyword = "let"
/// "#).unwrap();
///
/// assert_eq!(sheet.constraints.len(), 2);
/// assert_eq!(sheet.engine.declaration_keyword, "let");
/// assert!(sheet.engine.auto_balance);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstraintSheet {
    pub constraints: Vec<String>,
    pub engine: EngineOptions,
    pub runtime: RuntimeOptions,
}

impl ConstraintSheet {
    pub fn from_toml_str(text: &str) -> Result<Self, ConstraintError> {
        Ok(toml::from_str(text)?)
    }

    /// One statement per line. Blank lines and comment lines are skipped.
    pub fn from_text(text: &str, runtime: RuntimeOptions) -> Self {
        let prefix = runtime.comment_prefix.as_str();
        let constraints = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| prefix.is_empty() || !line.starts_with(prefix))
            .map(str::to_string)
            .collect();
        ConstraintSheet {
            constraints,
            engine: EngineOptions::default(),
            runtime,
        }
    }

    /// Reads a sheet from disk. `.toml` files are parsed as TOML, anything
    /// else as plain text with default options.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConstraintError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConstraintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            _ => Ok(Self::from_text(&text, RuntimeOptions::default())),
        }
    }
}
