//! WASM-facing entry points for Spacewalk hulls and highlighting.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `*_internal` helpers to
//! avoid depending on a JS host.
//!
//! ```
//! let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
//! let mesh = spacewalk_wasm::build_hull_internal(&positions).unwrap();
//! assert_eq!(mesh.triangle_count(), 4);
//! ```

use config::constants::HullConfig;
use spacewalk_hull::{ConvexHull, HullResult};
use wasm_bindgen::prelude::*;

mod mesh_handle;
mod point_cloud_handle;

pub use mesh_handle::MeshHandle;
pub use point_cloud_handle::PointCloudHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "spacewalk-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Builds the convex hull of a flat `[x, y, z, ...]` position buffer.
///
/// # Errors
/// Returns a JavaScript error value with a human-readable message when the
/// points are degenerate or malformed. Callers should skip the bounding
/// surface and keep rendering the point cloud.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const mesh = build_hull(trace.positions);
/// //   scene.add(toThreeMesh(mesh));
/// // } catch (error) {
/// //   console.warn("No bounding surface:", error);
/// // }
/// ```
#[wasm_bindgen]
pub fn build_hull(positions: &[f32]) -> Result<MeshHandle, JsValue> {
    build_hull_internal(positions).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper behind [`build_hull`], exposing Rust error types directly.
pub fn build_hull_internal(positions: &[f32]) -> HullResult<MeshHandle> {
    let mesh = spacewalk_hull::build_hull_from_flat(positions, &HullConfig::default())?;
    Ok(MeshHandle::from_mesh(&mesh))
}

/// Builds a hull and returns its construction counters as JSON.
///
/// # Errors
/// Same conditions as [`build_hull`].
#[wasm_bindgen]
pub fn hull_stats(positions: &[f32]) -> Result<String, JsValue> {
    hull_stats_internal(positions).map_err(|err| JsValue::from_str(&err))
}

/// Host-only helper behind [`hull_stats`].
pub fn hull_stats_internal(positions: &[f32]) -> Result<String, String> {
    let hull = ConvexHull::from_flat(positions, &HullConfig::default()).map_err(|e| e.to_string())?;
    serde_json::to_string(hull.stats()).map_err(|e| e.to_string())
}
