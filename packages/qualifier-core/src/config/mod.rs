//! Configuration
//!
//! Two levels:
//! - Preset: cache sizing for a typical embedding
//! - YAML: preset plus field overrides, versioned schema
//!
//! # Examples
//!
//! ```rust,ignore
//! use qualifier_core::config::{BackendKind, Preset, QualifierConfig};
//!
//! let config = QualifierConfig::preset(Preset::Large)
//!     .default_backend(BackendKind::SortedArray);
//!
//! let config = QualifierConfig::from_yaml("qualifiers.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod preset;
pub mod qualifier_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use preset::Preset;
pub use qualifier_config::{BackendKind, QualifierConfig};
pub use validation::{check_range, Validatable};
