//! # Hull Errors
//!
//! Error types for convex hull construction.
//!
//! ## Error Policy
//!
//! - Degenerate input is reported, never patched over with a fallback shape
//! - Callers decide whether to skip the bounding surface
//! - No partial mesh is ever returned alongside an error

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building a convex hull.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use spacewalk_hull::{build_hull, HullError};
/// use config::constants::HullConfig;
///
/// let points = [DVec3::ZERO, DVec3::X, DVec3::Y];
/// match build_hull(&points, &HullConfig::default()) {
///     Err(HullError::DegenerateInput { .. }) => {}
///     other => panic!("expected degenerate input, got {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum HullError {
    /// Fewer than four points, or no non-coplanar simplex within tolerance.
    #[error("Degenerate input: {message}")]
    DegenerateInput {
        /// What made the input degenerate
        message: String,
    },

    /// Malformed point buffer (bad stride, non-finite coordinate).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the malformed input
        message: String,
    },

    /// Input exceeds the configured safety limit.
    #[error("Too many points: {count} (max: {max})")]
    TooManyPoints {
        /// Points supplied
        count: usize,
        /// Largest accepted input
        max: usize,
    },

    /// A half-edge loop failed to close during mesh emission.
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// Where the walk failed
        message: String,
    },

    /// Rejected tolerance configuration.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl HullError {
    /// Creates a degenerate input error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput {
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Returns true for the degenerate-input family of failures.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput { .. })
    }
}

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;
