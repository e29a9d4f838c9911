//! # Point Cloud Handle
//!
//! JavaScript owner of the point cloud and its highlight coordinator.
//!
//! The handle keeps both halves together so JS never sees the borrow
//! between them. Object ids cross the boundary as `u64` (BigInt in JS).

use spacewalk_highlight::{Color, HighlightCoordinator, ObjectId, PointCloud, PointCloudMesh};
use wasm_bindgen::prelude::*;

/// Point cloud plus highlight state.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const cloud = new PointCloudHandle();
/// cloud.configure(ids, pointCounts, colors);
/// cloud.configure_object_list(new BigUint64Array([2n]));
/// for (const id of cloud.take_dirty()) {
///     geometries.get(id).attributes.color.array.set(cloud.colors(id));
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct PointCloudHandle {
    cloud: PointCloud,
    highlighter: HighlightCoordinator,
}

#[wasm_bindgen]
impl PointCloudHandle {
    /// Creates an empty cloud using the default deemphasized gray.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cloud that deemphasizes with `#rrggbb`.
    ///
    /// # Errors
    /// Returns a JavaScript error for a malformed color.
    pub fn with_deemphasized_color(hex: &str) -> Result<PointCloudHandle, JsValue> {
        Self::with_deemphasized_color_internal(hex).map_err(|err| JsValue::from_str(&err))
    }

    /// Replaces the cloud's meshes. `colors` holds one RGB triple per object.
    ///
    /// Any highlight is dropped before the meshes are replaced.
    ///
    /// # Errors
    /// Returns a JavaScript error when the three buffers disagree in length.
    pub fn configure(&mut self, ids: &[u64], point_counts: &[u32], colors: &[f32]) -> Result<(), JsValue> {
        self.configure_internal(ids, point_counts, colors)
            .map_err(|err| JsValue::from_str(&err))
    }

    /// Drops every mesh.
    pub fn dispose(&mut self) {
        self.highlighter.unhighlight(&mut self.cloud);
        self.cloud.dispose();
    }

    /// Highlights exactly `ids`, in order.
    pub fn configure_object_list(&mut self, ids: &[u64]) {
        let objects: Vec<ObjectId> = ids.iter().copied().map(ObjectId).collect();
        self.highlighter.configure_object_list(&mut self.cloud, &objects);
    }

    /// Highlights the picked object unless it is already highlighted.
    pub fn process_hit(&mut self, id: u64) {
        self.highlighter.process_hit(&mut self.cloud, ObjectId(id));
    }

    /// Restores every object's own color.
    pub fn unhighlight(&mut self) {
        self.highlighter.unhighlight(&mut self.cloud);
    }

    pub fn has_object(&self, id: u64) -> bool {
        self.highlighter.has_object(ObjectId(id))
    }

    /// Currently highlighted ids, empty when idle.
    pub fn highlighted(&self) -> Vec<u64> {
        self.highlighter
            .objects()
            .map(|objects| objects.iter().map(|id| id.0).collect())
            .unwrap_or_default()
    }

    /// Displayed RGB buffer of object `id`.
    pub fn colors(&self, id: u64) -> Option<Vec<f32>> {
        self.cloud.mesh(ObjectId(id)).map(|mesh| mesh.colors().to_vec())
    }

    /// Ids whose color buffers changed since the last call.
    pub fn take_dirty(&mut self) -> Vec<u64> {
        self.cloud.take_dirty().into_iter().map(|id| id.0).collect()
    }
}

impl PointCloudHandle {
    /// Host-only helper behind [`PointCloudHandle::with_deemphasized_color`].
    pub fn with_deemphasized_color_internal(hex: &str) -> Result<Self, String> {
        let color = Color::from_hex(hex).ok_or_else(|| format!("invalid color '{hex}'"))?;
        Ok(Self {
            cloud: PointCloud::new(color),
            highlighter: HighlightCoordinator::new(),
        })
    }

    /// Host-only helper behind [`PointCloudHandle::configure`].
    pub fn configure_internal(&mut self, ids: &[u64], point_counts: &[u32], colors: &[f32]) -> Result<(), String> {
        if ids.len() != point_counts.len() || ids.len().checked_mul(3) != Some(colors.len()) {
            return Err(format!(
                "mismatched buffers: {} ids, {} point counts, {} color components",
                ids.len(),
                point_counts.len(),
                colors.len()
            ));
        }

        let meshes = ids
            .iter()
            .zip(point_counts)
            .zip(colors.chunks_exact(3))
            .map(|((&id, &count), rgb)| {
                PointCloudMesh::new(ObjectId(id), count as usize, Color::new(rgb[0], rgb[1], rgb[2]))
            })
            .collect();

        self.highlighter.unhighlight(&mut self.cloud);
        self.cloud.configure(meshes);
        Ok(())
    }
}
