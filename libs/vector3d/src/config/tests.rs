//! Tests covering vector configuration behavior.

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = VectorConfig::default();
    assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
}

#[test]
fn builder_validates_input() {
    let err = VectorConfig::new(0.0).unwrap_err();
    assert_eq!(err, VectorConfigError(ConfigError::InvalidTolerance(0.0)));
    assert!(err.to_string().contains("tolerance"));
}

#[test]
fn from_global_config_keeps_tolerance() {
    let global = GlobalConfig::new(1e-4).unwrap();
    assert_eq!(VectorConfig::from(global).tolerance, 1e-4);
}
