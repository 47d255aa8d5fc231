//! Geometric utility functions for distance calculations and direction vectors.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::Array1;

/// Builds a 2D position vector.
pub fn point(x: f32, y: f32) -> Array1<f32> {
    Array1::from_vec(vec![x, y])
}

/// Unit vector along the positive X axis.
pub fn unit_x() -> Array1<f32> {
    point(1.0, 0.0)
}

/// Calculates the Euclidean distance between two positions.
///
/// # Arguments
///
/// * `a` - First position
/// * `b` - Second position
///
/// # Returns
///
/// The straight-line distance between `a` and `b`.
pub fn distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    Euclidean.distance(Point::new(a[0], a[1]), Point::new(b[0], b[1]))
}

/// Length of a 2D vector.
pub fn magnitude(v: &Array1<f32>) -> f32 {
    v.dot(v).sqrt()
}

/// Scales a vector to unit length.
///
/// # Returns
///
/// `None` when the vector has zero length or a non-finite component, since
/// it then has no direction.
pub fn normalize(v: &Array1<f32>) -> Option<Array1<f32>> {
    let length = magnitude(v);
    if length > 0.0 && length.is_finite() {
        Some(v / length)
    } else {
        None
    }
}
