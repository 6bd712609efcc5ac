//! Qualifier core configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides, SUPPORTED_VERSIONS};
use super::preset::Preset;
use super::validation::{check_range, Validatable};

const MAX_TYPE_NAME_CACHE_CAPACITY: usize = 1_000_000;

/// Container backend used by `QualifierContext::new_set` / `new_map`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Balanced ordered tree
    #[default]
    Tree,
    /// Dense sorted array with positional access
    SortedArray,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::SortedArray => "sorted_array",
        }
    }
}

/// Settings of one `QualifierContext`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QualifierConfig {
    /// Type-name LRU capacity (1..=1_000_000)
    pub type_name_cache_capacity: usize,

    /// Intern zero-element markers; when off every lookup builds a fresh key
    pub intern_markers: bool,

    pub default_backend: BackendKind,
}

impl Default for QualifierConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl QualifierConfig {
    pub fn preset(preset: Preset) -> Self {
        Self {
            type_name_cache_capacity: preset.type_name_cache_capacity(),
            intern_markers: true,
            default_backend: BackendKind::Tree,
        }
    }

    pub fn type_name_cache_capacity(mut self, capacity: usize) -> Self {
        self.type_name_cache_capacity = capacity;
        self
    }

    pub fn intern_markers(mut self, intern: bool) -> Self {
        self.intern_markers = intern;
        self
    }

    pub fn default_backend(mut self, backend: BackendKind) -> Self {
        self.default_backend = backend;
        self
    }

    /// Range checks
    pub fn validate(&self) -> ConfigResult<()> {
        check_range(
            self.config_name(),
            "type_name_cache_capacity",
            self.type_name_cache_capacity,
            1..=MAX_TYPE_NAME_CACHE_CAPACITY,
            "the type-name cache must hold at least one entry",
        )
    }

    /// Load from a YAML document (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS,
            });
        }

        let preset = match export.preset {
            Some(name) => name.parse::<Preset>()?,
            None => Preset::default(),
        };
        let mut config = Self::preset(preset);

        if let Some(overrides) = export.overrides {
            if let Some(capacity) = overrides.type_name_cache_capacity {
                config.type_name_cache_capacity = capacity;
            }
            if let Some(intern) = overrides.intern_markers {
                config.intern_markers = intern;
            }
            if let Some(backend) = overrides.default_backend {
                config.default_backend = backend;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file (v1 schema)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Export to YAML
    ///
    /// Every field is written as an override so the result does not depend
    /// on preset defaults.
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: SUPPORTED_VERSIONS.last().copied(),
            preset: None,
            overrides: Some(ConfigOverrides {
                type_name_cache_capacity: Some(self.type_name_cache_capacity),
                intern_markers: Some(self.intern_markers),
                default_backend: Some(self.default_backend),
            }),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}

impl Validatable for QualifierConfig {
    fn validate(&self) -> ConfigResult<()> {
        QualifierConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "QualifierConfig"
    }
}
