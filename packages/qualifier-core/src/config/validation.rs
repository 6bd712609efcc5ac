//! Configuration validation

use std::fmt::Display;
use std::ops::RangeInclusive;

use super::error::{ConfigError, ConfigResult};

/// A configuration that can check its own field ranges
///
/// ```rust,ignore
/// use qualifier_core::config::Validatable;
///
/// fn install<C: Validatable>(config: C) -> ConfigResult<C> {
///     config.validate()?;
///     Ok(config)
/// }
/// ```
pub trait Validatable {
    fn validate(&self) -> ConfigResult<()>;

    /// Prefix used in error messages
    fn config_name(&self) -> &'static str;
}

/// `Ok` when `value` lies in `range`, a `ConfigError::Range` otherwise
pub fn check_range<T>(
    config: &'static str,
    field: &'static str,
    value: T,
    range: RangeInclusive<T>,
    hint: &'static str,
) -> ConfigResult<()>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        return Ok(());
    }
    Err(ConfigError::Range {
        config,
        field,
        value: value.to_string(),
        min: range.start().to_string(),
        max: range.end().to_string(),
        hint,
    })
}
