//! # Renderable Mesh
//!
//! Flattened triangle mesh handed to the renderer: positions, per-vertex
//! normals and triangle indices.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with one normal per vertex.
///
/// Hull meshes are emitted face by face: every triangle owns its three
/// vertices and each of them carries the face normal, so flat shading
/// needs no further processing. Vertices are not shared between faces.
///
/// All geometry is kept in f64. Export to f32 only happens at the WASM
/// boundary for GPU upload.
///
/// # Example
///
/// ```rust
/// use spacewalk_hull::RenderableMesh;
/// use glam::DVec3;
///
/// let mut mesh = RenderableMesh::new();
/// mesh.add_face([DVec3::ZERO, DVec3::X, DVec3::Y], DVec3::Z);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderableMesh {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
}

impl RenderableMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with room for `face_count` unshared triangles.
    pub fn with_face_capacity(face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(face_count * 3),
            normals: Vec::with_capacity(face_count * 3),
            triangles: Vec::with_capacity(face_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Appends one triangle with its own three vertices, all carrying
    /// `normal`. Returns the triangle's index triple.
    pub fn add_face(&mut self, corners: [DVec3; 3], normal: DVec3) -> [u32; 3] {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&corners);
        self.normals.extend_from_slice(&[normal; 3]);
        let triangle = [base, base + 1, base + 2];
        self.triangles.push(triangle);
        triangle
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Per-vertex normals, parallel to [`positions`](Self::positions).
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Triangle index triples.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the three corner positions of a triangle.
    pub fn triangle_corners(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [
            self.positions[a as usize],
            self.positions[b as usize],
            self.positions[c as usize],
        ]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        crate::point::bounding_box(&self.positions)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Positions and normals have the same length
    /// - All triangle indices are valid
    /// - No triangle has collinear corners (area above `epsilon`)
    pub fn validate(&self, epsilon: f64) -> bool {
        if self.positions.len() != self.normals.len() {
            return false;
        }
        let vertex_count = self.positions.len() as u32;

        self.triangles.iter().enumerate().all(|(i, tri)| {
            if tri.iter().any(|&v| v >= vertex_count) {
                return false;
            }
            let [v0, v1, v2] = self.triangle_corners(i);
            (v1 - v0).cross(v2 - v0).length() > epsilon
        })
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten_f32(&self.positions)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten_f32(vectors: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(vectors.len() * 3);
    for v in vectors {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
