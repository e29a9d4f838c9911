//! Centralized configuration values shared across the Spacewalk pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// HULL CONSTANTS
// =============================================================================

/// Minimum number of points able to span a non-degenerate tetrahedron.
///
/// # Examples
/// ```
/// use config::constants::MIN_HULL_POINTS;
/// let points = 3;
/// assert!(points < MIN_HULL_POINTS);
/// ```
pub const MIN_HULL_POINTS: usize = 4;

/// Maximum number of input points accepted by a single hull build.
///
/// Safety limit to prevent memory exhaustion from runaway traces.
///
/// # Examples
/// ```
/// use config::constants::MAX_HULL_POINTS;
/// assert!(MAX_HULL_POINTS >= 1_000_000);
/// ```
pub const MAX_HULL_POINTS: usize = 10_000_000;

/// Default hull tolerance expressed as a fraction of the input bounding-box
/// diagonal.
///
/// Keeping ε relative makes classification independent of the loader's unit
/// scale: a structure in nanometres and the same structure in microns yield
/// the same hull.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RELATIVE_TOLERANCE;
/// let diagonal = 2_000.0;
/// let epsilon = DEFAULT_RELATIVE_TOLERANCE * diagonal;
/// assert!(epsilon < 1.0e-6);
/// ```
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1.0e-10;

/// Squared sine of the corner angle below which a freshly created hull face
/// counts as numerically degenerate (`|ab × ac|² <= ε·|ab|²·|ac|²`).
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_NORMAL_EPSILON;
/// assert!(DEGENERATE_NORMAL_EPSILON > 0.0);
/// ```
pub const DEGENERATE_NORMAL_EPSILON: f64 = 1.0e-24;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Number of color components stored per point in a point-cloud color buffer.
pub const COLOR_COMPONENTS: usize = 3;

/// Shared color for point-cloud objects that are not highlighted.
///
/// Apple Crayon "magnesium" (`#b8b8b8`), RGB in range [0.0, 1.0].
///
/// # Examples
/// ```
/// use config::constants::DEEMPHASIZED_COLOR;
/// assert!(DEEMPHASIZED_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
/// ```
pub const DEEMPHASIZED_COLOR: [f32; 3] = [184.0 / 255.0, 184.0 / 255.0, 184.0 / 255.0];

/// Pick highlight color (Apple Crayon "maraschino", `#ff2600`).
pub const HIGHLIGHT_COLOR: [f32; 3] = [1.0, 38.0 / 255.0, 0.0];

// =============================================================================
// CONFIGURATION SNAPSHOTS
// =============================================================================

/// Validated tolerance policy for hull construction.
///
/// # Examples
/// ```
/// use config::constants::HullConfig;
/// let config = HullConfig::default();
/// assert!(config.relative_tolerance > 0.0);
/// assert!(config.absolute_tolerance.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullConfig {
    /// ε as a fraction of the input bounding-box diagonal.
    pub relative_tolerance: f64,
    /// Fixed ε overriding the relative policy when set.
    pub absolute_tolerance: Option<f64>,
}

impl HullConfig {
    /// Builds a relative-tolerance configuration, rejecting non-positive or
    /// non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::HullConfig;
    /// let cfg = HullConfig::new(1.0e-8).expect("valid config");
    /// assert_eq!(cfg.relative_tolerance, 1.0e-8);
    /// assert!(HullConfig::new(0.0).is_err());
    /// ```
    pub fn new(relative_tolerance: f64) -> Result<Self, ConfigError> {
        validate_tolerance(relative_tolerance)?;
        Ok(Self {
            relative_tolerance,
            absolute_tolerance: None,
        })
    }

    /// Builds a configuration with a fixed ε in input units.
    ///
    /// # Examples
    /// ```
    /// use config::constants::HullConfig;
    /// let cfg = HullConfig::with_absolute_tolerance(1.0e-6).unwrap();
    /// assert_eq!(cfg.tolerance_for(1.0e9), 1.0e-6);
    /// ```
    pub fn with_absolute_tolerance(tolerance: f64) -> Result<Self, ConfigError> {
        validate_tolerance(tolerance)?;
        Ok(Self {
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            absolute_tolerance: Some(tolerance),
        })
    }

    /// Resolves ε for an input whose bounding box has the given diagonal.
    pub fn tolerance_for(&self, diagonal: f64) -> f64 {
        match self.absolute_tolerance {
            Some(tolerance) => tolerance,
            None => self.relative_tolerance * diagonal,
        }
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            absolute_tolerance: None,
        }
    }
}

fn validate_tolerance(tolerance: f64) -> Result<(), ConfigError> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(ConfigError::InvalidTolerance(tolerance));
    }
    Ok(())
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when a tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are equal within `epsilon`.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11, 1e-10));
/// assert!(!approx_equal(1.0, 1.1, 1e-10));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Checks if a f64 value is zero within `epsilon`.
#[inline]
pub fn approx_zero(value: f64, epsilon: f64) -> bool {
    value.abs() <= epsilon
}

#[cfg(test)]
mod tests;
