//! # QuickHull Algorithm
//!
//! 3D convex hull computation using the QuickHull algorithm over an
//! index-based half-edge arena.
//!
//! ## Algorithm Steps
//!
//! 1. Find 6 extreme points (min/max on each axis)
//! 2. Build initial tetrahedron from 4 non-coplanar points
//! 3. Assign remaining points to the face they are farthest outside of
//! 4. While any face has outside points:
//!    a. Pick the farthest outside point (ties within ε: lowest input index)
//!    b. Flood the faces visible from it across twin edges
//!    c. Collect the horizon (visible edges whose twin face is not visible)
//!    d. Fan new faces from the horizon to the point
//!    e. Reassign outside points of the removed faces to the new faces

use super::arena::{Arena, FaceId, HalfEdgeId};
use super::HullStats;
use crate::error::{HullError, HullResult};
use config::constants::{approx_equal, approx_zero, DEGENERATE_NORMAL_EPSILON};
use glam::DVec3;
use robust::{orient3d, Coord3D};
use tracing::{trace, warn};

/// Hull under construction.
pub(crate) struct QuickHull<'a> {
    points: &'a [DVec3],
    epsilon: f64,
    arena: Arena,
    stats: HullStats,
}

impl<'a> QuickHull<'a> {
    pub fn new(points: &'a [DVec3], epsilon: f64) -> Self {
        Self {
            points,
            epsilon,
            arena: Arena::default(),
            stats: HullStats {
                input_points: points.len(),
                tolerance: epsilon,
                ..HullStats::default()
            },
        }
    }

    /// Runs the full construction and hands back the finished arena.
    pub fn build(mut self) -> HullResult<(Arena, HullStats)> {
        let simplex = self.initial_simplex()?;
        let faces = self.build_tetrahedron(simplex)?;

        let remaining: Vec<usize> = (0..self.points.len())
            .filter(|i| !simplex.contains(i))
            .collect();
        self.assign_outside(&remaining, &faces);

        while let Some((face, eye)) = self.next_eye() {
            self.add_point(face, eye)?;
            self.stats.iterations += 1;
        }

        Ok((self.arena, self.stats))
    }

    // =========================================================================
    // INITIAL SIMPLEX
    // =========================================================================

    /// Picks four input indices spanning a tetrahedron of non-trivial volume.
    fn initial_simplex(&self) -> HullResult<[usize; 4]> {
        let points = self.points;
        let mut extremes = [0usize; 6];
        for (i, p) in points.iter().enumerate() {
            for axis in 0..3 {
                if p[axis] < points[extremes[2 * axis]][axis] {
                    extremes[2 * axis] = i;
                }
                if p[axis] > points[extremes[2 * axis + 1]][axis] {
                    extremes[2 * axis + 1] = i;
                }
            }
        }

        // Two most distant extremes
        let mut best = (extremes[0], extremes[1]);
        let mut max_dist = 0.0;
        for (i, &a) in extremes.iter().enumerate() {
            for &b in &extremes[i + 1..] {
                let dist = points[a].distance_squared(points[b]);
                if dist > max_dist {
                    max_dist = dist;
                    best = (a, b);
                }
            }
        }
        if approx_zero(max_dist.sqrt(), self.epsilon) {
            return Err(HullError::degenerate("all points coincide"));
        }
        let (p0, p1) = best;

        // Farthest from line p0-p1
        let direction = (points[p1] - points[p0]).normalize();
        let p2 = farthest(points, |p| {
            let v = p - points[p0];
            (v - v.dot(direction) * direction).length()
        });
        if approx_zero(p2.1, self.epsilon) {
            return Err(HullError::degenerate("all points are collinear"));
        }
        let p2 = p2.0;

        // Farthest from plane p0-p1-p2
        let normal = (points[p1] - points[p0])
            .cross(points[p2] - points[p0])
            .normalize();
        let p3 = farthest(points, |p| normal.dot(p - points[p0]).abs());
        if approx_zero(p3.1, self.epsilon) {
            return Err(HullError::degenerate("all points are coplanar"));
        }

        Ok([p0, p1, p2, p3.0])
    }

    /// Creates the four tetrahedron faces with outward winding and links
    /// their twins.
    fn build_tetrahedron(&mut self, [a, b, c, d]: [usize; 4]) -> HullResult<[FaceId; 4]> {
        let orientation = orient3d(
            coord(self.points[a]),
            coord(self.points[b]),
            coord(self.points[c]),
            coord(self.points[d]),
        );
        // Positive: d lies behind the counter-clockwise face a-b-c
        let (b, c) = match orientation {
            o if o > 0.0 => (b, c),
            o if o < 0.0 => (c, b),
            _ => return Err(HullError::degenerate("initial simplex is flat")),
        };

        let mut faces = [FaceId(0); 4];
        for (slot, corners) in [[a, b, c], [b, a, d], [c, b, d], [a, c, d]]
            .into_iter()
            .enumerate()
        {
            // Simplex faces are never slivers
            faces[slot] = self.new_face(corners, DVec3::Z);
        }
        self.arena.link_twins(&faces);
        Ok(faces)
    }

    // =========================================================================
    // OUTSIDE SETS
    // =========================================================================

    /// Assigns each candidate to the face in `faces` it lies farthest above.
    /// Candidates within ε of every face are dropped for good.
    fn assign_outside(&mut self, candidates: &[usize], faces: &[FaceId]) {
        for &idx in candidates {
            let point = self.points[idx];
            let mut best: Option<(FaceId, f64)> = None;
            for &face in faces {
                let dist = self.arena.face(face).signed_distance(point);
                if best.map_or(true, |(_, d)| dist > d) {
                    best = Some((face, dist));
                }
            }
            match best {
                Some((face, dist)) if dist > self.epsilon => {
                    self.arena.face_mut(face).outside.push(idx);
                }
                Some((face, dist)) => {
                    if dist > 0.0 {
                        self.stats.near_tolerance += 1;
                        trace!(point = idx, face = face.0, dist, "point within tolerance of hull");
                    }
                    self.stats.discarded_interior += 1;
                }
                None => {}
            }
        }
    }

    /// Next point to merge: the greatest distance above its assigned face,
    /// ties within ε resolved by lowest input index.
    fn next_eye(&self) -> Option<(FaceId, usize)> {
        let mut best: Option<(FaceId, usize, f64)> = None;
        for (face_id, face) in self.arena.live_faces() {
            for &idx in &face.outside {
                let dist = face.signed_distance(self.points[idx]);
                let better = match best {
                    None => true,
                    Some((_, best_idx, best_dist)) => {
                        dist > best_dist + self.epsilon
                            || (approx_equal(dist, best_dist, self.epsilon) && idx < best_idx)
                    }
                };
                if better {
                    best = Some((face_id, idx, dist));
                }
            }
        }
        best.map(|(face, idx, _)| (face, idx))
    }

    // =========================================================================
    // MERGING A POINT
    // =========================================================================

    fn add_point(&mut self, eye_face: FaceId, eye: usize) -> HullResult<()> {
        let eye_point = self.points[eye];
        let visible = self.visible_faces(eye_face, eye_point)?;
        let horizon = self.horizon(&visible)?;

        let mut orphans = Vec::new();
        for &face in &visible {
            let face = self.arena.face_mut(face);
            face.removed = true;
            orphans.extend(face.outside.drain(..).filter(|&p| p != eye));
        }

        let mut new_faces = Vec::with_capacity(horizon.len());
        for edge in horizon {
            let tail = self.arena.tail(edge);
            let head = self.arena.edge(edge).head;
            let parent = self.arena.edge(edge).face;
            let outer = self.arena.edge(edge).twin.ok_or_else(|| {
                HullError::invalid_topology(format!("horizon edge {} has no twin", edge.0))
            })?;

            let fallback = self.arena.face(parent).normal;
            let face = self.new_face([tail, head, eye], fallback);
            let [base, ..] = self.arena.face_edges(face);
            self.arena.set_twin(base, outer);
            new_faces.push(face);
        }
        self.arena.link_twins(&new_faces);

        self.assign_outside(&orphans, &new_faces);
        Ok(())
    }

    /// Faces visible from `eye`, flooded from `start` across twin edges.
    fn visible_faces(&mut self, start: FaceId, eye: DVec3) -> HullResult<Vec<FaceId>> {
        let mut seen = vec![false; self.arena.faces.len()];
        let mut visible = Vec::new();
        let mut stack = vec![start];
        seen[start.index()] = true;

        while let Some(face) = stack.pop() {
            visible.push(face);
            for edge in self.arena.face_edges(face) {
                let twin = self.twin(edge)?;
                let neighbour = self.arena.edge(twin).face;
                if seen[neighbour.index()] {
                    continue;
                }
                let dist = self.arena.face(neighbour).signed_distance(eye);
                if dist > self.epsilon {
                    seen[neighbour.index()] = true;
                    stack.push(neighbour);
                } else if dist > 0.0 {
                    self.stats.near_tolerance += 1;
                    trace!(face = neighbour.0, dist, "face visibility within tolerance");
                }
            }
        }
        Ok(visible)
    }

    /// Edges of `visible` faces whose twin belongs to a face that stays.
    fn horizon(&self, visible: &[FaceId]) -> HullResult<Vec<HalfEdgeId>> {
        let mut in_visible = vec![false; self.arena.faces.len()];
        for face in visible {
            in_visible[face.index()] = true;
        }

        let mut horizon = Vec::new();
        for &face in visible {
            for edge in self.arena.face_edges(face) {
                let twin = self.twin(edge)?;
                if !in_visible[self.arena.edge(twin).face.index()] {
                    horizon.push(edge);
                }
            }
        }
        Ok(horizon)
    }

    fn twin(&self, edge: HalfEdgeId) -> HullResult<HalfEdgeId> {
        self.arena
            .edge(edge)
            .twin
            .ok_or_else(|| HullError::invalid_topology(format!("half-edge {} has no twin", edge.0)))
    }

    /// Adds a triangle with its plane through the corner centroid. Slivers
    /// whose normal cannot be resolved inherit `fallback`.
    fn new_face(&mut self, corners: [usize; 3], fallback: DVec3) -> FaceId {
        let [a, b, c] = corners.map(|i| self.points[i]);
        let (ab, ac) = (b - a, c - a);
        let cross = ab.cross(ac);

        let normal = if cross.length_squared()
            <= DEGENERATE_NORMAL_EPSILON * ab.length_squared() * ac.length_squared()
        {
            self.stats.degenerate_faces += 1;
            warn!(?corners, "degenerate hull face, reusing parent normal");
            fallback
        } else {
            cross.normalize()
        };
        let offset = normal.dot((a + b + c) / 3.0);
        self.arena.add_triangle(corners, normal, offset)
    }
}

/// Index and value of the largest `metric` over `points`; the first index
/// wins ties.
fn farthest(points: &[DVec3], metric: impl Fn(DVec3) -> f64) -> (usize, f64) {
    let mut best = (0, f64::NEG_INFINITY);
    for (i, p) in points.iter().enumerate() {
        let value = metric(*p);
        if value > best.1 {
            best = (i, value);
        }
    }
    best
}

fn coord(p: DVec3) -> Coord3D<f64> {
    Coord3D {
        x: p.x,
        y: p.y,
        z: p.z,
    }
}
