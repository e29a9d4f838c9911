//! # Point Input
//!
//! Conversions from the loader's point representations into `DVec3`.
//!
//! Traces arrive either as point records or as a flat position buffer with
//! stride 3 (`[x, y, z, x, y, z, ...]`), the layout of a GPU position
//! attribute. Both are accepted; all geometry runs in f64.

use crate::error::{HullError, HullResult};
use glam::DVec3;

/// Converts a flat f64 buffer (stride 3) into points.
///
/// # Example
///
/// ```rust
/// use spacewalk_hull::points_from_flat;
/// use glam::DVec3;
///
/// let points = points_from_flat(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(points, vec![DVec3::new(0.0, 1.0, 2.0), DVec3::new(3.0, 4.0, 5.0)]);
/// assert!(points_from_flat(&[0.0, 1.0]).is_err());
/// ```
pub fn points_from_flat(coordinates: &[f64]) -> HullResult<Vec<DVec3>> {
    check_stride(coordinates.len())?;
    Ok(coordinates
        .chunks_exact(3)
        .map(|c| DVec3::new(c[0], c[1], c[2]))
        .collect())
}

/// Converts a flat f32 buffer (stride 3) into f64 points.
pub fn points_from_flat_f32(coordinates: &[f32]) -> HullResult<Vec<DVec3>> {
    check_stride(coordinates.len())?;
    Ok(coordinates
        .chunks_exact(3)
        .map(|c| DVec3::new(f64::from(c[0]), f64::from(c[1]), f64::from(c[2])))
        .collect())
}

fn check_stride(len: usize) -> HullResult<()> {
    if len % 3 != 0 {
        return Err(HullError::invalid_input(format!(
            "flat coordinate buffer length {len} is not a multiple of 3"
        )));
    }
    Ok(())
}

/// Rejects NaN and infinite coordinates, naming the first offender.
pub(crate) fn ensure_finite(points: &[DVec3]) -> HullResult<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(HullError::invalid_input(format!(
            "point {index} has a non-finite coordinate: {}",
            points[index]
        ))),
        None => Ok(()),
    }
}

/// Returns the (min, max) corners of the axis-aligned bounding box.
///
/// Empty input yields a zero box.
pub fn bounding_box(points: &[DVec3]) -> (DVec3, DVec3) {
    let Some((first, rest)) = points.split_first() else {
        return (DVec3::ZERO, DVec3::ZERO);
    };
    rest.iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
}

/// Length of the bounding-box diagonal; the scale ε is derived from.
pub fn bounding_diagonal(points: &[DVec3]) -> f64 {
    let (min, max) = bounding_box(points);
    (max - min).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_from_flat_f32() {
        let points = points_from_flat_f32(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(points, vec![DVec3::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_points_from_flat_rejects_bad_stride() {
        let err = points_from_flat_f32(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert!(err.to_string().contains("multiple of 3"));
    }

    #[test]
    fn test_empty_flat_buffer_is_empty() {
        assert!(points_from_flat(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(&[DVec3::ONE]).is_ok());
        let err = ensure_finite(&[DVec3::ONE, DVec3::new(0.0, f64::NAN, 0.0)]).unwrap_err();
        assert!(err.to_string().contains("point 1"));
    }

    #[test]
    fn test_bounding_diagonal() {
        let points = [DVec3::ZERO, DVec3::new(3.0, 4.0, 0.0), DVec3::new(1.0, 1.0, 0.0)];
        assert_eq!(bounding_diagonal(&points), 5.0);
        assert_eq!(bounding_diagonal(&[]), 0.0);
    }
}
