//! Tests for the centralized configuration constants.

use super::*;

/// Ensures the default hull policy is relative and positive.
///
/// # Examples
/// ```
/// use config::constants::HullConfig;
/// let cfg = HullConfig::default();
/// assert!(cfg.relative_tolerance > 0.0);
/// ```
#[test]
fn default_config_is_valid() {
    let cfg = HullConfig::default();
    assert!(cfg.relative_tolerance > 0.0);
    assert_eq!(cfg.absolute_tolerance, None);
}

/// Validates the builders reject invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        HullConfig::new(0.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        HullConfig::with_absolute_tolerance(-1.0).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0)
    );
    assert!(HullConfig::new(f64::NAN).is_err());
    assert!(HullConfig::new(f64::INFINITY).is_err());
}

#[test]
fn absolute_tolerance_overrides_relative() {
    let cfg = HullConfig::with_absolute_tolerance(0.5).unwrap();
    assert_eq!(cfg.tolerance_for(1.0), 0.5);
    assert_eq!(cfg.tolerance_for(1.0e6), 0.5);
}

#[test]
fn error_message_names_value() {
    let message = ConfigError::InvalidTolerance(-2.0).to_string();
    assert!(message.contains("-2"));
}
