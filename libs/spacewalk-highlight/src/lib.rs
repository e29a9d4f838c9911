//! # Spacewalk Highlight
//!
//! Selection highlighting for chromatin point clouds. Highlighted objects
//! keep their own color; every other object is drawn in a shared
//! deemphasized gray.
//!
//! ## Architecture
//!
//! ```text
//! selection event → HighlightCoordinator → PointCloud color buffers → renderer
//! ```
//!
//! The [`PointCloud`] is created once by the application and passed to every
//! coordinator call. Loaders replace its meshes with [`PointCloud::configure`];
//! renderers poll [`PointCloud::take_dirty`] for buffers to re-upload.

pub mod color;
pub mod highlighter;
pub mod point_cloud;

pub use color::{set_geometry_color_attribute, Color};
pub use highlighter::HighlightCoordinator;
pub use point_cloud::{ObjectId, PointCloud, PointCloudMesh};
