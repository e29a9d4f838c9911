//! Index-based half-edge storage for hull construction.
//!
//! Faces own their three half-edges; `next` and `twin` are plain indices
//! into the shared arena, so there are no reference cycles. Removed faces
//! stay in the arena with `removed = true` until the hull is finished.

use glam::DVec3;
use std::collections::HashMap;

/// Identifier of a half-edge in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub u32);

/// Identifier of a face in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u32);

impl HalfEdgeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl FaceId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Directed edge on a face boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HalfEdge {
    /// Input point index the edge points at.
    pub head: usize,
    /// Opposite edge on the neighbouring face.
    pub twin: Option<HalfEdgeId>,
    /// Following edge in the same face loop.
    pub next: HalfEdgeId,
    /// Owning face.
    pub face: FaceId,
}

/// Triangular hull facet with an outward unit normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub(crate) edge: HalfEdgeId,
    pub(crate) normal: DVec3,
    pub(crate) offset: f64,
    /// Outside points assigned to this face (input indices).
    pub(crate) outside: Vec<usize>,
    pub(crate) removed: bool,
}

impl Face {
    /// Outward unit normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Plane offset: `normal · p = offset` for points on the face.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Signed distance of `point` from the face plane, positive outside.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.offset
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct Arena {
    pub edges: Vec<HalfEdge>,
    pub faces: Vec<Face>,
}

impl Arena {
    pub fn edge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.edges[id.index()]
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    pub fn face_mut(&mut self, id: FaceId) -> &mut Face {
        &mut self.faces[id.index()]
    }

    /// Point index the edge starts from. Face loops are triangles, so the
    /// tail is the head of the edge two steps ahead.
    pub fn tail(&self, id: HalfEdgeId) -> usize {
        let next = self.edge(id).next;
        self.edge(self.edge(next).next).head
    }

    pub fn set_twin(&mut self, a: HalfEdgeId, b: HalfEdgeId) {
        self.edges[a.index()].twin = Some(b);
        self.edges[b.index()].twin = Some(a);
    }

    /// Adds a triangle `a → b → c` and its three half-edges.
    ///
    /// The plane is taken from `normal`/`offset`; twins are left unset.
    pub fn add_triangle(&mut self, [a, b, c]: [usize; 3], normal: DVec3, offset: f64) -> FaceId {
        let face = FaceId(self.faces.len() as u32);
        let first = self.edges.len() as u32;
        for (k, head) in [b, c, a].into_iter().enumerate() {
            let next = HalfEdgeId(first + (k as u32 + 1) % 3);
            self.edges.push(HalfEdge {
                head,
                twin: None,
                next,
                face,
            });
        }
        self.faces.push(Face {
            edge: HalfEdgeId(first),
            normal,
            offset,
            outside: Vec::new(),
            removed: false,
        });
        face
    }

    /// Edges of a face loop, starting at the face's own edge.
    pub fn face_edges(&self, face: FaceId) -> [HalfEdgeId; 3] {
        let e0 = self.face(face).edge;
        let e1 = self.edge(e0).next;
        let e2 = self.edge(e1).next;
        [e0, e1, e2]
    }

    /// Pairs each edge of `faces` with the opposite-direction edge among the
    /// same faces. Edges whose partner lies outside the set keep their twin.
    pub fn link_twins(&mut self, faces: &[FaceId]) {
        let mut by_endpoints: HashMap<(usize, usize), HalfEdgeId> = HashMap::new();
        for &face in faces {
            for edge in self.face_edges(face) {
                by_endpoints.insert((self.tail(edge), self.edge(edge).head), edge);
            }
        }
        for &face in faces {
            for edge in self.face_edges(face) {
                let key = (self.edge(edge).head, self.tail(edge));
                if let Some(&twin) = by_endpoints.get(&key) {
                    self.set_twin(edge, twin);
                }
            }
        }
    }

    /// Iterator over live faces.
    pub fn live_faces(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        self.faces
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.removed)
            .map(|(i, f)| (FaceId(i as u32), f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_triangle_builds_loop() {
        let mut arena = Arena::default();
        let face = arena.add_triangle([0, 1, 2], DVec3::Z, 0.0);
        let [e0, e1, e2] = arena.face_edges(face);
        assert_eq!(arena.edge(e2).next, e0);
        assert_eq!(arena.edge(e0).head, 1);
        assert_eq!(arena.edge(e1).head, 2);
        assert_eq!(arena.edge(e2).head, 0);
        assert_eq!(arena.tail(e0), 0);
        assert_eq!(arena.tail(e1), 1);
    }

    #[test]
    fn test_link_twins_pairs_shared_edge() {
        let mut arena = Arena::default();
        let f0 = arena.add_triangle([0, 1, 2], DVec3::Z, 0.0);
        let f1 = arena.add_triangle([1, 0, 3], -DVec3::Z, 0.0);
        arena.link_twins(&[f0, f1]);

        let [e0, ..] = arena.face_edges(f0);
        let twin = arena.edge(e0).twin.unwrap();
        assert_eq!(arena.edge(twin).face, f1);
        assert_eq!(arena.edge(twin).head, 0);
        assert_eq!(arena.edge(twin).twin, Some(e0));
    }

    #[test]
    fn test_live_faces_skips_removed() {
        let mut arena = Arena::default();
        let f0 = arena.add_triangle([0, 1, 2], DVec3::Z, 0.0);
        arena.add_triangle([0, 2, 3], DVec3::Z, 0.0);
        arena.face_mut(f0).removed = true;
        assert_eq!(arena.live_faces().count(), 1);
    }
}
