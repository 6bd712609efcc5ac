//! Preset configurations
//!
//! Presets size the caches for common embeddings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Unit tests and one-shot tools
    ///
    /// - Type-name cache: 16 entries
    Minimal,

    /// One compilation at a time
    ///
    /// - Type-name cache: 300 entries
    #[default]
    Standard,

    /// Long-lived daemons checking many compilation units
    ///
    /// - Type-name cache: 10_000 entries
    Large,
}

impl Preset {
    /// Type-name cache capacity for this preset
    pub fn type_name_cache_capacity(&self) -> usize {
        match self {
            Self::Minimal => 16,
            Self::Standard => 300,
            Self::Large => 10_000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Large => "large",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "standard" => Ok(Self::Standard),
            "large" => Ok(Self::Large),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
