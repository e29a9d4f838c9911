//! # Point Cloud
//!
//! Renderable point-cloud meshes and their per-point color buffers.
//!
//! The [`PointCloud`] is the context the highlight coordinator writes into.
//! Every write through it bumps the mesh's version and marks the mesh dirty
//! so the renderer can re-upload only what changed.

use std::collections::{BTreeSet, HashMap};

use config::constants::COLOR_COMPONENTS;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::{set_geometry_color_attribute, Color};

/// Stable identity of a point-cloud object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// One renderable object of the cloud.
///
/// Holds its original color (never mutated) and the RGB buffer the renderer
/// displays.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloudMesh {
    id: ObjectId,
    original_color: Color,
    colors: Vec<f32>,
    version: u64,
}

impl PointCloudMesh {
    /// Creates a mesh of `point_count` points displayed in `original_color`.
    ///
    /// A count whose color buffer would not fit in memory yields an empty mesh.
    pub fn new(id: ObjectId, point_count: usize, original_color: Color) -> Self {
        let len = point_count.checked_mul(COLOR_COMPONENTS).unwrap_or_else(|| {
            warn!(%id, point_count, "point count overflows color buffer, mesh left empty");
            0
        });
        let mut colors = vec![0.0; len];
        set_geometry_color_attribute(&mut colors, original_color);
        Self {
            id,
            original_color,
            colors,
            version: 0,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Color assigned by the loader.
    pub fn original_color(&self) -> Color {
        self.original_color
    }

    /// Displayed RGB buffer, three floats per point.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn point_count(&self) -> usize {
        self.colors.len() / COLOR_COMPONENTS
    }

    /// Number of writes applied to the color buffer.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Color of point `index`, if in range.
    pub fn point_color(&self, index: usize) -> Option<Color> {
        let start = index.checked_mul(COLOR_COMPONENTS)?;
        let rgb = self.colors.get(start..start.checked_add(COLOR_COMPONENTS)?)?;
        Some(Color::new(rgb[0], rgb[1], rgb[2]))
    }

    fn paint(&mut self, color: Color) {
        set_geometry_color_attribute(&mut self.colors, color);
        self.version += 1;
    }
}

/// The renderable point cloud.
///
/// `mesh_list` is `None` until the loader calls [`PointCloud::configure`],
/// and again after [`PointCloud::dispose`].
#[derive(Debug, Clone)]
pub struct PointCloud {
    meshes: Option<Vec<PointCloudMesh>>,
    index: HashMap<ObjectId, usize>,
    deemphasized_color: Color,
    generation: u64,
    dirty: BTreeSet<ObjectId>,
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::new(Color::DEEMPHASIZED)
    }
}

impl PointCloud {
    /// Creates an empty cloud that deemphasizes with `deemphasized_color`.
    pub fn new(deemphasized_color: Color) -> Self {
        Self {
            meshes: None,
            index: HashMap::new(),
            deemphasized_color,
            generation: 0,
            dirty: BTreeSet::new(),
        }
    }

    /// Replaces the mesh list.
    ///
    /// Duplicate ids keep their first mesh; later ones are dropped.
    pub fn configure(&mut self, meshes: Vec<PointCloudMesh>) {
        self.index.clear();
        self.dirty.clear();
        let mut kept = Vec::with_capacity(meshes.len());
        for mesh in meshes {
            if self.index.contains_key(&mesh.id) {
                warn!(id = %mesh.id, "duplicate point-cloud object dropped");
                continue;
            }
            self.index.insert(mesh.id, kept.len());
            kept.push(mesh);
        }
        debug!(meshes = kept.len(), "point cloud configured");
        self.meshes = Some(kept);
        self.generation += 1;
    }

    /// Drops every mesh and returns to the unconfigured state.
    pub fn dispose(&mut self) {
        self.meshes = None;
        self.index.clear();
        self.dirty.clear();
        self.generation += 1;
    }

    /// Current meshes, or `None` before configuration.
    pub fn mesh_list(&self) -> Option<&[PointCloudMesh]> {
        self.meshes.as_deref()
    }

    /// True when at least one mesh is present.
    pub fn is_populated(&self) -> bool {
        self.meshes.as_ref().is_some_and(|meshes| !meshes.is_empty())
    }

    pub fn mesh(&self, id: ObjectId) -> Option<&PointCloudMesh> {
        let &slot = self.index.get(&id)?;
        self.meshes.as_ref()?.get(slot)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.index.contains_key(&id)
    }

    /// Shared color written to non-highlighted objects.
    pub fn deemphasized_color(&self) -> Color {
        self.deemphasized_color
    }

    /// Incremented on every configure or dispose.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ids written since the last call, ascending.
    pub fn take_dirty(&mut self) -> Vec<ObjectId> {
        std::mem::take(&mut self.dirty).into_iter().collect()
    }

    // =========================================================================
    // Writes (crate-internal, driven by the coordinator)
    // =========================================================================

    /// Fills every mesh with the deemphasized color.
    pub(crate) fn deemphasize_all(&mut self) {
        let color = self.deemphasized_color;
        for mesh in self.meshes.iter_mut().flatten() {
            mesh.paint(color);
            self.dirty.insert(mesh.id);
        }
    }

    /// Fills every mesh with its own original color.
    pub(crate) fn restore_all(&mut self) {
        for mesh in self.meshes.iter_mut().flatten() {
            mesh.paint(mesh.original_color);
            self.dirty.insert(mesh.id);
        }
    }

    /// Fills mesh `id` with its original color. Returns false if absent.
    pub(crate) fn restore(&mut self, id: ObjectId) -> bool {
        let Some(&slot) = self.index.get(&id) else {
            return false;
        };
        let Some(mesh) = self.meshes.as_mut().and_then(|meshes| meshes.get_mut(slot)) else {
            return false;
        };
        mesh.paint(mesh.original_color);
        self.dirty.insert(id);
        true
    }
}
