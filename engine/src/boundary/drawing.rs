//! Freehand Boundary Drawing
//!
//! Converts a mouse-drag path into a closed boundary polygon.

use super::BoundaryError;
use crate::geometry::{MIN_BOUNDARY_VERTICES, Point, Polygon, thin_by_distance};

/// Raw drag samples required before a path is considered deliberate.
pub const MIN_DRAWN_POINTS: usize = 10;

/// Minimum step between kept path points (canvas units).
pub const DRAWN_PATH_MIN_STEP: f64 = 2.0;

/// An end further than this from the start gets an explicit closing vertex.
pub const CLOSE_GAP: f64 = 5.0;

/// Simplify and close a freehand path.
///
/// The path is thinned to [`DRAWN_PATH_MIN_STEP`]; if its end is more than
/// [`CLOSE_GAP`] from its start, a copy of the start point is appended.
/// A stroke that encloses no area is rejected as [`BoundaryError::Degenerate`].
pub fn boundary_from_drawing(path: &[Point]) -> Result<Polygon, BoundaryError> {
    if path.len() < MIN_DRAWN_POINTS {
        return Err(BoundaryError::PathTooShort(path.len()));
    }

    let mut vertices = thin_by_distance(path.iter().copied(), DRAWN_PATH_MIN_STEP);
    if vertices.len() < MIN_BOUNDARY_VERTICES {
        return Err(BoundaryError::PathTooShort(vertices.len()));
    }

    let first = vertices[0];
    if let Some(&last) = vertices.last() {
        if last.distance(first) > CLOSE_GAP {
            vertices.push(first);
        }
    }

    let polygon = Polygon::new(vertices);
    if polygon.is_degenerate() {
        return Err(BoundaryError::Degenerate);
    }

    log::debug!(
        "drawn boundary: {} samples -> {} vertices",
        path.len(),
        polygon.len()
    );
    Ok(polygon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(count: usize, sweep: f64) -> Vec<Point> {
        (0..count)
            .map(|i| {
                let a = i as f64 / (count - 1) as f64 * sweep;
                Point::new(400.0 + 150.0 * a.cos(), 400.0 + 150.0 * a.sin())
            })
            .collect()
    }

    #[test]
    fn test_short_path_rejected() {
        let path = arc(9, 6.0);
        assert!(matches!(
            boundary_from_drawing(&path),
            Err(BoundaryError::PathTooShort(9))
        ));
    }

    #[test]
    fn test_jittery_path_rejected() {
        // Twelve samples wobbling inside a one-unit box
        let path: Vec<Point> = (0..12)
            .map(|i| Point::new(100.0 + (i % 2) as f64, 100.0))
            .collect();
        assert!(matches!(
            boundary_from_drawing(&path),
            Err(BoundaryError::PathTooShort(1))
        ));
    }

    #[test]
    fn test_open_path_is_closed() {
        // Three quarters of a circle: end is far from the start
        let path = arc(60, std::f64::consts::PI * 1.5);
        let poly = boundary_from_drawing(&path).expect("boundary");
        assert_eq!(poly.vertices().first(), poly.vertices().last());
        assert!(poly.contains(Point::new(400.0, 400.0)));
    }

    #[test]
    fn test_nearly_closed_path_not_duplicated() {
        let mut path = arc(60, std::f64::consts::TAU * 0.99);
        path.push(Point::new(551.0, 400.0));
        let poly = boundary_from_drawing(&path).expect("boundary");
        assert_ne!(poly.vertices().first(), poly.vertices().last());
    }

    #[test]
    fn test_retraced_stroke_rejected() {
        // Out to (580, 400) and back over the same line
        let out: Vec<Point> = (0..=38)
            .map(|i| Point::new(200.0 + i as f64 * 10.0, 400.0))
            .collect();
        let mut path = out.clone();
        path.extend(out.iter().rev().skip(1));
        assert!(matches!(
            boundary_from_drawing(&path),
            Err(BoundaryError::Degenerate)
        ));
    }
}
