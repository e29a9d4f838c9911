//! # Mesh Handle
//!
//! WASM-friendly wrapper for hull meshes that can be transferred to JavaScript.

use spacewalk_hull::RenderableMesh;
use wasm_bindgen::prelude::*;

/// A handle to hull mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = build_hull(positions);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Per-vertex face normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Axis-aligned extents as [min_x, min_y, min_z, max_x, max_y, max_z]
    bounds: [f32; 6],
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices (three per face).
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        u32::try_from(self.positions.len() / 3).unwrap_or(u32::MAX)
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        u32::try_from(self.indices.len() / 3).unwrap_or(u32::MAX)
    }

    /// Returns the vertex positions.
    ///
    /// Length: vertex_count * 3
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the per-vertex normals.
    ///
    /// Length: vertex_count * 3
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the triangle indices.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns `[min_x, min_y, min_z, max_x, max_y, max_z]`, used by the
    /// scene to size its scale bar.
    pub fn bounds(&self) -> Vec<f32> {
        self.bounds.to_vec()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Converts this mesh to a plain JavaScript object of typed arrays.
    ///
    /// This is useful for posting results from a worker to the main thread,
    /// as wasm-bindgen wrappers cannot be transferred.
    ///
    /// # Errors
    /// Returns the JavaScript exception raised by a failed property set.
    pub fn to_js_object(&self) -> Result<JsValue, JsValue> {
        use js_sys::{Float32Array, Object, Reflect, Uint32Array};

        let obj = Object::new();
        let fields: [(&str, JsValue); 3] = [
            ("positions", Float32Array::from(&self.positions[..]).into()),
            ("normals", Float32Array::from(&self.normals[..]).into()),
            ("indices", Uint32Array::from(&self.indices[..]).into()),
        ];
        for (key, value) in fields {
            Reflect::set(&obj, &JsValue::from_str(key), &value)?;
        }
        Ok(obj.into())
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a hull mesh.
    pub fn from_mesh(mesh: &RenderableMesh) -> Self {
        let (min, max) = mesh.bounding_box();
        Self {
            positions: mesh.positions_f32(),
            normals: mesh.normals_f32(),
            indices: mesh.indices_u32(),
            bounds: [
                min.x as f32,
                min.y as f32,
                min.z as f32,
                max.x as f32,
                max.y as f32,
                max.z as f32,
            ],
        }
    }
}
