//! # Hull Integration Tests
//!
//! Tests for convex hull construction and mesh emission.

use super::*;
use approx::assert_relative_eq;

fn unit_cube() -> Vec<DVec3> {
    vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(1.0, 0.0, 1.0),
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(0.0, 1.0, 1.0),
    ]
}

/// Deterministic points on a sphere (golden-angle spiral).
fn sphere_points(count: usize, radius: f64) -> Vec<DVec3> {
    let golden = std::f64::consts::PI * (3.0 - 5f64.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / count as f64;
            let r = (1.0 - y * y).sqrt();
            let theta = golden * i as f64;
            DVec3::new(r * theta.cos(), y, r * theta.sin()) * radius
        })
        .collect()
}

fn assert_contains_all(hull: &ConvexHull, points: &[DVec3]) {
    let slack = hull.tolerance() * 10.0 + 1e-12;
    for face in hull.faces() {
        for p in points {
            assert!(
                face.signed_distance(*p) <= slack,
                "point {p} outside face by {}",
                face.signed_distance(*p)
            );
        }
    }
}

#[test]
fn test_hull_tetrahedron() {
    let points = vec![
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.5, 1.0, 0.0),
        DVec3::new(0.5, 0.5, 1.0),
    ];
    let hull = ConvexHull::build(&points, &HullConfig::default()).unwrap();
    assert_eq!(hull.face_count(), 4);
    assert_eq!(hull.vertex_indices().unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_hull_cube_vertices() {
    let hull = ConvexHull::build(&unit_cube(), &HullConfig::default()).unwrap();

    // Cube has 6 square faces, 2 triangles each
    assert_eq!(hull.face_count(), 12);
    assert_eq!(hull.vertex_indices().unwrap().len(), 8);
    assert_relative_eq!(hull.volume().unwrap(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(hull.surface_area().unwrap(), 6.0, epsilon = 1e-9);
}

#[test]
fn test_hull_with_interior_points() {
    let mut points = unit_cube();
    points.push(DVec3::new(0.5, 0.5, 0.5));
    points.push(DVec3::new(0.25, 0.75, 0.1));

    let hull = ConvexHull::build(&points, &HullConfig::default()).unwrap();

    // Interior points do not affect the hull
    assert_eq!(hull.face_count(), 12);
    assert!(!hull.vertex_indices().unwrap().contains(&8));
    assert_eq!(hull.stats().discarded_interior, 2);
}

#[test]
fn test_hull_sphere_contains_all_points() {
    let points = sphere_points(200, 5.0);
    let hull = ConvexHull::build(&points, &HullConfig::default()).unwrap();

    // Every sphere sample is extreme
    assert_eq!(hull.vertex_indices().unwrap().len(), 200);
    // Euler: closed triangulated sphere has F = 2V - 4
    assert_eq!(hull.face_count(), 2 * 200 - 4);
    assert_contains_all(&hull, &points);
}

#[test]
fn test_hull_is_scale_invariant() {
    let points = sphere_points(64, 1.0);
    let scaled: Vec<DVec3> = points.iter().map(|p| *p * 1.0e6).collect();

    let small = ConvexHull::build(&points, &HullConfig::default()).unwrap();
    let large = ConvexHull::build(&scaled, &HullConfig::default()).unwrap();
    assert_eq!(small.face_count(), large.face_count());
    assert_relative_eq!(large.tolerance() / small.tolerance(), 1.0e6, max_relative = 1e-9);
}

#[test]
fn test_hull_normals_face_outward() {
    let points = sphere_points(50, 2.0);
    let hull = ConvexHull::build(&points, &HullConfig::default()).unwrap();
    for face in hull.faces() {
        // Origin is strictly interior
        assert!(face.signed_distance(DVec3::ZERO) < 0.0);
        assert_relative_eq!(face.normal().length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_to_mesh_emits_unshared_vertices() {
    let hull = ConvexHull::build(&unit_cube(), &HullConfig::default()).unwrap();
    let mesh = hull.to_mesh().unwrap();

    assert_eq!(mesh.triangle_count(), hull.face_count());
    assert_eq!(mesh.vertex_count(), 3 * hull.face_count());
    assert_eq!(mesh.indices_u32().len(), 3 * hull.face_count());
    assert_eq!(mesh.indices_u32(), (0..36).collect::<Vec<u32>>());
    assert!(mesh.validate(1e-12));

    // Each vertex carries its face normal
    for (i, face) in hull.faces().enumerate() {
        for k in 0..3 {
            assert_eq!(mesh.normals()[3 * i + k], face.normal());
        }
    }
}

#[test]
fn test_mesh_winding_matches_normal() {
    let mesh = build_hull(&sphere_points(30, 1.0), &HullConfig::default()).unwrap();
    for i in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle_corners(i);
        let winding = (b - a).cross(c - a);
        assert!(winding.dot(mesh.normals()[3 * i]) > 0.0);
    }
}

#[test]
fn test_mesh_preserves_bounding_box() {
    let points: Vec<DVec3> = unit_cube()
        .into_iter()
        .map(|p| p * DVec3::new(10.0, 20.0, 30.0))
        .collect();
    let mesh = build_hull(&points, &HullConfig::default()).unwrap();
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, DVec3::ZERO);
    assert_eq!(max, DVec3::new(10.0, 20.0, 30.0));
}

#[test]
fn test_too_few_points() {
    let points = [DVec3::ZERO, DVec3::X, DVec3::Y];
    let err = build_hull(&points, &HullConfig::default()).unwrap_err();
    assert!(err.is_degenerate());
    assert!(err.to_string().contains("at least 4"));
}

#[test]
fn test_coplanar_input_is_degenerate() {
    let points: Vec<DVec3> = (0..20)
        .map(|i| DVec3::new(f64::from(i % 5), f64::from(i / 5), 0.0))
        .collect();
    assert!(build_hull(&points, &HullConfig::default())
        .unwrap_err()
        .is_degenerate());
}

#[test]
fn test_coincident_input_is_degenerate() {
    let points = vec![DVec3::splat(3.0); 10];
    assert!(build_hull(&points, &HullConfig::default())
        .unwrap_err()
        .is_degenerate());
}

#[test]
fn test_non_finite_input_is_invalid() {
    let mut points = unit_cube();
    points[3].y = f64::INFINITY;
    let err = build_hull(&points, &HullConfig::default()).unwrap_err();
    assert!(matches!(err, HullError::InvalidInput { .. }));
}

#[test]
fn test_absolute_tolerance_swallows_small_bumps() {
    let mut points = unit_cube();
    // Slightly above the top face
    points.push(DVec3::new(0.5, 0.5, 1.0 + 1e-4));

    let loose = HullConfig::with_absolute_tolerance(1e-3).unwrap();
    let hull = ConvexHull::build(&points, &loose).unwrap();
    assert_eq!(hull.face_count(), 12);
    assert!(hull.stats().near_tolerance >= 1);

    let strict = ConvexHull::build(&points, &HullConfig::default()).unwrap();
    assert!(strict.vertex_indices().unwrap().contains(&8));
}

#[test]
fn test_build_hull_from_flat() {
    let flat: Vec<f32> = unit_cube()
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect();
    let mesh = build_hull_from_flat(&flat, &HullConfig::default()).unwrap();
    assert_eq!(mesh.triangle_count(), 12);

    let err = build_hull_from_flat(&flat[..5], &HullConfig::default()).unwrap_err();
    assert!(matches!(err, HullError::InvalidInput { .. }));
}

#[test]
fn test_build_hulls_independent_results() {
    let sets = vec![
        unit_cube(),
        vec![DVec3::ZERO, DVec3::X],
        sphere_points(40, 3.0),
    ];
    let results = build_hulls(&sets, &HullConfig::default());
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().triangle_count(), 12);
    assert!(results[1].as_ref().unwrap_err().is_degenerate());
    assert_eq!(results[2].as_ref().unwrap().triangle_count(), 2 * 40 - 4);
}

#[test]
fn test_build_is_deterministic() {
    let points = sphere_points(120, 1.0);
    let a = build_hull(&points, &HullConfig::default()).unwrap();
    let b = build_hull(&points, &HullConfig::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_broken_face_loop_is_reported() {
    let mut hull = ConvexHull::build(&unit_cube(), &HullConfig::default()).unwrap();
    // Short-circuit one face loop so it never reaches three edges
    let face = hull.live[0];
    let edge = hull.arena.face(face).edge;
    hull.arena.edges[edge.0 as usize].next = edge;

    assert!(matches!(hull.face_vertices(face), Err(HullError::InvalidTopology { .. })));
    assert!(matches!(hull.volume(), Err(HullError::InvalidTopology { .. })));
    assert!(matches!(hull.surface_area(), Err(HullError::InvalidTopology { .. })));
    assert!(hull.to_mesh().is_err());
}
