//! # Spacewalk Hull
//!
//! Bounding-surface reconstruction for chromatin point clouds.
//! Computes the convex hull of a trace and emits it as a triangle mesh
//! ready for a WebGL scene graph.
//!
//! ## Architecture
//!
//! ```text
//! loader (flat positions) → point → hull (quickhull) → mesh → renderer
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are browser-safe (pure Rust, no native dependencies):
//! - **Hull**: QuickHull over an index-based half-edge arena
//! - **Orientation**: exact `orient3d` predicate for the initial simplex
//! - **Tolerance**: ε relative to the input bounding-box diagonal
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::HullConfig;
//! use spacewalk_hull::build_hull_from_flat;
//!
//! let positions = [
//!     0.0, 0.0, 0.0,
//!     1.0, 0.0, 0.0,
//!     0.0, 1.0, 0.0,
//!     0.0, 0.0, 1.0,
//! ];
//! let mesh = build_hull_from_flat(&positions, &HullConfig::default()).unwrap();
//! assert_eq!(mesh.triangle_count(), 4);
//! ```

pub mod error;
pub mod hull;
pub mod mesh;
pub mod point;

pub use error::{HullError, HullResult};
pub use hull::{build_hull, build_hull_from_flat, build_hulls, ConvexHull, Face, FaceId, HullStats};
pub use mesh::RenderableMesh;
pub use point::{bounding_box, points_from_flat, points_from_flat_f32};
