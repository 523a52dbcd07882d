//! Crate-level configuration building on the shared `config` crate.
//!
//! Vector comparisons read their tolerance from here instead of literal
//! constants.

use ::config::constants::{ConfigError, GlobalConfig, EPSILON_TOLERANCE};
use thiserror::Error;

/// Vector configuration wrapper.
///
/// # Examples
/// ```
/// use vector3d::VectorConfig;
/// let cfg = VectorConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorConfig {
    /// Absolute per-component tolerance used by approximate comparisons.
    pub tolerance: f64,
}

impl VectorConfig {
    /// Creates a new configuration from an explicit tolerance.
    ///
    /// # Examples
    /// ```
    /// use vector3d::VectorConfig;
    /// let cfg = VectorConfig::new(1.0e-6).unwrap();
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// assert!(VectorConfig::new(-1.0).is_err());
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, VectorConfigError> {
        GlobalConfig::new(tolerance)
            .map(Self::from)
            .map_err(VectorConfigError)
    }
}

impl From<GlobalConfig> for VectorConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
        }
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
        }
    }
}

/// Error wrapper for invalid vector configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error(transparent)]
pub struct VectorConfigError(
    /// Validation failure reported by the shared configuration.
    pub ConfigError,
);

#[cfg(test)]
mod tests;
