//! Errors raised while loading or validating a `QualifierConfig`

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric field outside its accepted range
    #[error("{config}.{field} = {value} is outside {min}..={max}: {hint}")]
    Range {
        config: &'static str,
        field: &'static str,
        value: String,
        min: String,
        max: String,
        hint: &'static str,
    },

    #[error("qualifier config has no 'version' key; start the file with 'version: 1'")]
    MissingVersion,

    #[error("qualifier config version {found} is not supported (supported: {supported:?})")]
    UnsupportedVersion {
        found: u32,
        supported: &'static [u32],
    },

    #[error("unknown preset '{0}'; expected minimal, standard or large")]
    UnknownPreset(String),

    #[error("cannot read qualifier config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed qualifier config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Read failure for the file at `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Name of the offending field, for range errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Range { field, .. } => Some(*field),
            _ => None,
        }
    }
}
