//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema types. Loading and export live on
//! `QualifierConfig`.

use serde::{Deserialize, Serialize};

use super::qualifier_config::BackendKind;

/// Supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// preset: large
/// overrides:
///   intern_markers: false
///   default_backend: sorted_array
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version; `None` is reported as a missing field
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Field overrides on top of the preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name_cache_capacity: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub intern_markers: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_backend: Option<BackendKind>,
}
