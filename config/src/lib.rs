//! # Config Crate
//!
//! Centralized configuration constants for the Spacewalk geometry pipeline.
//! Hull tolerances, input limits and the point-cloud highlight palette are
//! defined here so the hull, highlight and WASM crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{HullConfig, MIN_HULL_POINTS};
//!
//! let config = HullConfig::default();
//! // ε scales with the size of the input
//! let epsilon = config.tolerance_for(10.0);
//! assert!(epsilon > 0.0);
//! assert_eq!(MIN_HULL_POINTS, 4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Scale Invariant**: Hull tolerance is relative to the input extent

pub mod constants;
