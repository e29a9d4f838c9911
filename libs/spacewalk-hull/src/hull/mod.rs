//! # Convex Hull
//!
//! QuickHull algorithm for computing the bounding surface of a trace.
//! Browser-safe implementation in pure Rust.
//!
//! ## Algorithm Overview
//!
//! QuickHull grows the hull one point at a time:
//! 1. Find extreme points to form initial simplex (tetrahedron)
//! 2. For each face, collect the points outside it
//! 3. Merge the farthest point, replacing the faces it sees with a fan
//!    anchored on the horizon
//! 4. Repeat until no points remain outside
//!
//! ## Output
//!
//! [`ConvexHull::to_mesh`] walks every face loop and emits one unshared
//! triangle per face, each vertex carrying the face normal.

mod arena;
mod quickhull;

#[cfg(test)]
mod tests;

pub use arena::{Face, FaceId, HalfEdgeId};

use crate::error::{HullError, HullResult};
use crate::mesh::RenderableMesh;
use crate::point::{bounding_diagonal, ensure_finite, points_from_flat_f32};
use arena::Arena;
use config::constants::{HullConfig, MAX_HULL_POINTS, MIN_HULL_POINTS};
use glam::DVec3;
use quickhull::QuickHull;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Counters gathered while building a hull.
///
/// `near_tolerance` counts classifications that fell inside the ε band
/// (a point or face distance in `(0, ε]`). These are resolved by treating the
/// point as inside and never surface as errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HullStats {
    /// Points supplied by the caller.
    pub input_points: usize,
    /// ε used for all classifications.
    pub tolerance: f64,
    /// Points merged after the initial simplex.
    pub iterations: usize,
    /// Points dropped as interior (or within ε of the surface).
    pub discarded_interior: usize,
    /// Classifications within the tolerance band.
    pub near_tolerance: usize,
    /// New faces whose normal could not be resolved.
    pub degenerate_faces: usize,
}

/// Closed triangulated hull of a point set.
///
/// Created fresh by [`ConvexHull::build`] and immutable afterwards.
///
/// # Example
///
/// ```rust
/// use config::constants::HullConfig;
/// use glam::DVec3;
/// use spacewalk_hull::ConvexHull;
///
/// let points = [
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(0.0, 0.0, 1.0),
/// ];
/// let hull = ConvexHull::build(&points, &HullConfig::default())?;
/// assert_eq!(hull.face_count(), 4);
/// assert!((hull.volume()? - 1.0 / 6.0).abs() < 1e-12);
/// # Ok::<(), spacewalk_hull::HullError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConvexHull {
    points: Vec<DVec3>,
    arena: Arena,
    live: Vec<FaceId>,
    stats: HullStats,
}

impl ConvexHull {
    /// Builds the hull of `points`.
    ///
    /// # Errors
    ///
    /// - [`HullError::DegenerateInput`] for fewer than four points or input
    ///   that is coincident, collinear or coplanar within ε
    /// - [`HullError::InvalidInput`] for non-finite coordinates
    /// - [`HullError::TooManyPoints`] above [`MAX_HULL_POINTS`]
    pub fn build(points: &[DVec3], config: &HullConfig) -> HullResult<Self> {
        if points.len() < MIN_HULL_POINTS {
            return Err(HullError::degenerate(format!(
                "convex hull requires at least {MIN_HULL_POINTS} points, got {}",
                points.len()
            )));
        }
        if points.len() > MAX_HULL_POINTS {
            return Err(HullError::TooManyPoints {
                count: points.len(),
                max: MAX_HULL_POINTS,
            });
        }
        ensure_finite(points)?;

        let epsilon = config.tolerance_for(bounding_diagonal(points));
        if epsilon <= 0.0 {
            return Err(HullError::degenerate("all points coincide"));
        }

        let (arena, stats) = QuickHull::new(points, epsilon).build()?;
        let live = arena.live_faces().map(|(id, _)| id).collect::<Vec<_>>();

        debug!(
            points = stats.input_points,
            faces = live.len(),
            iterations = stats.iterations,
            near_tolerance = stats.near_tolerance,
            epsilon,
            "convex hull built"
        );

        Ok(Self {
            points: points.to_vec(),
            arena,
            live,
            stats,
        })
    }

    /// Builds the hull of a flat `[x, y, z, ...]` position buffer.
    pub fn from_flat(coordinates: &[f32], config: &HullConfig) -> HullResult<Self> {
        let points = points_from_flat_f32(coordinates)?;
        Self::build(&points, config)
    }

    /// Number of triangular faces.
    pub fn face_count(&self) -> usize {
        self.live.len()
    }

    /// Ids of the hull faces, in construction order.
    pub fn face_ids(&self) -> &[FaceId] {
        &self.live
    }

    /// Hull faces.
    pub fn faces(&self) -> impl Iterator<Item = &Face> + '_ {
        self.live.iter().map(|&id| self.arena.face(id))
    }

    /// Walks the boundary loop of `face` through the `next` chain and returns
    /// the input indices of its corners in winding order.
    pub fn face_vertices(&self, face: FaceId) -> HullResult<[usize; 3]> {
        let start = self.arena.face(face).edge;
        let mut corners = [0usize; 3];
        let mut edge = start;
        for (step, corner) in corners.iter_mut().enumerate() {
            *corner = self.arena.edge(edge).head;
            edge = self.arena.edge(edge).next;
            if (edge == start) != (step == 2) {
                return Err(HullError::invalid_topology(format!(
                    "face {} loop does not close after three edges",
                    face.0
                )));
            }
        }
        Ok(corners)
    }

    /// Distinct input indices lying on the hull, ascending.
    pub fn vertex_indices(&self) -> HullResult<Vec<usize>> {
        let mut indices = Vec::with_capacity(self.live.len() * 3);
        for &face in &self.live {
            indices.extend(self.face_vertices(face)?);
        }
        indices.sort_unstable();
        indices.dedup();
        Ok(indices)
    }

    /// The input points the hull was built from.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Construction counters.
    pub fn stats(&self) -> &HullStats {
        &self.stats
    }

    /// ε the hull was classified with.
    pub fn tolerance(&self) -> f64 {
        self.stats.tolerance
    }

    /// Total area of the hull surface.
    pub fn surface_area(&self) -> HullResult<f64> {
        self.sum_over_faces(|[a, b, c]| 0.5 * (b - a).cross(c - a).length())
    }

    /// Enclosed volume (divergence theorem over outward-wound faces).
    pub fn volume(&self) -> HullResult<f64> {
        self.sum_over_faces(|[a, b, c]| a.dot(b.cross(c)) / 6.0)
    }

    fn sum_over_faces(&self, term: impl Fn([DVec3; 3]) -> f64) -> HullResult<f64> {
        let mut total = 0.0;
        for &face in &self.live {
            let corners = self.face_vertices(face)?.map(|i| self.points[i]);
            total += term(corners);
        }
        Ok(total)
    }

    /// Emits the renderable mesh: three unshared vertices per face, each
    /// carrying the face normal, and one index triple per face.
    pub fn to_mesh(&self) -> HullResult<RenderableMesh> {
        let mut mesh = RenderableMesh::with_face_capacity(self.live.len());
        for &face in &self.live {
            let corners = self.face_vertices(face)?.map(|i| self.points[i]);
            mesh.add_face(corners, self.arena.face(face).normal());
        }
        Ok(mesh)
    }
}

/// Computes the convex hull of `points` and returns it as a renderable mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::HullConfig;
/// use glam::DVec3;
/// use spacewalk_hull::build_hull;
///
/// let points = vec![
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.5, 1.0, 0.0),
///     DVec3::new(0.5, 0.5, 1.0),
/// ];
/// let mesh = build_hull(&points, &HullConfig::default())?;
/// assert_eq!(mesh.triangle_count(), 4);
/// assert_eq!(mesh.vertex_count(), 12);
/// # Ok::<(), spacewalk_hull::HullError>(())
/// ```
pub fn build_hull(points: &[DVec3], config: &HullConfig) -> HullResult<RenderableMesh> {
    ConvexHull::build(points, config)?.to_mesh()
}

/// Computes the convex hull of a flat `[x, y, z, ...]` position buffer.
pub fn build_hull_from_flat(coordinates: &[f32], config: &HullConfig) -> HullResult<RenderableMesh> {
    ConvexHull::from_flat(coordinates, config)?.to_mesh()
}

/// Builds one hull per point set in parallel.
///
/// Each entry succeeds or fails on its own, so one degenerate trace in an
/// ensemble does not prevent the others from rendering.
pub fn build_hulls(point_sets: &[Vec<DVec3>], config: &HullConfig) -> Vec<HullResult<RenderableMesh>> {
    point_sets
        .par_iter()
        .map(|points| build_hull(points, config))
        .collect()
}
