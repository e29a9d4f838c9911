//! Property-based tests for convex hull construction.
//!
//! Random point clouds are generated with proptest and every hull is checked
//! for convexity, completeness and mesh shape.

use config::constants::HullConfig;
use glam::DVec3;
use proptest::prelude::*;
use spacewalk_hull::{build_hull, ConvexHull, HullError};

/// Bounded coordinates keep the clouds well conditioned.
fn coordinate() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn point() -> impl Strategy<Value = DVec3> {
    (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

/// Clouds that always contain a fixed non-degenerate tetrahedron, so every
/// sample builds successfully.
fn cloud() -> impl Strategy<Value = Vec<DVec3>> {
    prop::collection::vec(point(), 0..120).prop_map(|mut points| {
        points.extend([
            DVec3::new(-150.0, -150.0, -150.0),
            DVec3::new(150.0, -150.0, -150.0),
            DVec3::new(0.0, 150.0, -150.0),
            DVec3::new(0.0, 0.0, 150.0),
        ]);
        points
    })
}

fn slack(hull: &ConvexHull) -> f64 {
    hull.tolerance() * 100.0 + 1e-9
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// No input point lies outside any face plane.
    #[test]
    fn prop_hull_is_convex(points in cloud()) {
        let hull = ConvexHull::build(&points, &HullConfig::default()).unwrap();
        let slack = slack(&hull);
        for face in hull.faces() {
            for p in &points {
                prop_assert!(face.signed_distance(*p) <= slack);
            }
        }
    }

    /// Every input point is a hull vertex or lies inside the hull.
    #[test]
    fn prop_hull_is_complete(points in cloud()) {
        let hull = ConvexHull::build(&points, &HullConfig::default()).unwrap();
        let vertices = hull.vertex_indices().unwrap();
        let slack = slack(&hull);
        for (i, p) in points.iter().enumerate() {
            let inside = hull.faces().all(|face| face.signed_distance(*p) <= slack);
            prop_assert!(vertices.binary_search(&i).is_ok() || inside);
        }
    }

    /// Three indices per face, three unshared vertices per face, none collinear.
    #[test]
    fn prop_mesh_triangle_count(points in cloud()) {
        let hull = ConvexHull::build(&points, &HullConfig::default()).unwrap();
        let mesh = hull.to_mesh().unwrap();
        prop_assert_eq!(mesh.indices_u32().len(), 3 * hull.face_count());
        prop_assert_eq!(mesh.vertex_count(), 3 * hull.face_count());
        prop_assert!(mesh.validate(0.0));
    }

    /// Closed triangulated surfaces satisfy F = 2V - 4.
    #[test]
    fn prop_hull_is_closed(points in cloud()) {
        let hull = ConvexHull::build(&points, &HullConfig::default()).unwrap();
        let vertices = hull.vertex_indices().unwrap().len();
        prop_assert_eq!(hull.face_count(), 2 * vertices - 4);
        prop_assert!(hull.volume().unwrap() > 0.0);
    }

    /// Flat clouds never produce a mesh.
    #[test]
    fn prop_coplanar_is_degenerate(xy in prop::collection::vec((coordinate(), coordinate()), 4..60), z in coordinate()) {
        let points: Vec<DVec3> = xy.into_iter().map(|(x, y)| DVec3::new(x, y, z)).collect();
        let result = build_hull(&points, &HullConfig::default());
        prop_assert!(result.as_ref().is_err_and(HullError::is_degenerate));
    }
}
