use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a constraint sheet.
#[derive(Error, Debug)]
pub enum ConstraintError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid constraint sheet: {0}")]
    Toml(#[from] toml::de::Error),
}
