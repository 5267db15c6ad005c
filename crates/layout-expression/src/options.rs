//! Interpreter configuration.

use serde::{Deserialize, Serialize};

/// Interpreter settings.
///
/// Deserializes with every field optional, so an empty table yields the
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Keyword that starts a variable declaration (`var x = 1`).
    pub declaration_keyword: String,
    /// Balance unmatched parentheses instead of reporting them.
    pub auto_balance: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            declaration_keyword: "var".to_string(),
            auto_balance: true,
        }
    }
}
