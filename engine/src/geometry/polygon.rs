//! Arena Boundary Polygon
//!
//! An ordered vertex list, implicitly closed (last vertex connects back to
//! the first). Simplicity is never validated: self-intersecting input is
//! accepted and simply gives parity-based answers.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A position on the logical canvas.
pub type Point = DVec2;

/// Fewer vertices than this means "no boundary".
pub const MIN_BOUNDARY_VERTICES: usize = 3;

/// Smallest enclosed area (square canvas units) a usable boundary may have.
pub const MIN_BOUNDARY_AREA: f64 = 1.0;

// ============================================================================
// POLYGON
// ============================================================================

/// Boundary polygon in canvas coordinates.
///
/// Serializes as a plain array of `[x, y]` pairs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when the polygon has enough vertices to constrain anything.
    pub fn is_bounded(&self) -> bool {
        self.vertices.len() >= MIN_BOUNDARY_VERTICES
    }

    /// Ray-casting containment test. See [`contains`].
    pub fn contains(&self, point: Point) -> bool {
        contains(point, &self.vertices)
    }

    /// Mean of the vertices, or `None` for an empty polygon.
    pub fn centroid(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum: Point = self.vertices.iter().copied().sum();
        Some(sum / self.vertices.len() as f64)
    }

    /// Shoelace signed area. Positive for counter-clockwise winding in a
    /// y-up frame (clockwise on screen, where y grows downward).
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < MIN_BOUNDARY_VERTICES {
            return 0.0;
        }
        // Relative to the first vertex so large canvas coordinates don't
        // leave cancellation noise on collinear input.
        let origin = self.vertices[0];
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.vertices[i] - origin;
                let b = self.vertices[(i + 1) % n] - origin;
                a.perp_dot(b)
            })
            .sum();
        twice * 0.5
    }

    /// Encloses less than [`MIN_BOUNDARY_AREA`], so containment is
    /// meaningless. Polygons with fewer than three vertices are "no boundary"
    /// rather than degenerate.
    pub fn is_degenerate(&self) -> bool {
        self.is_bounded() && self.signed_area().abs() < MIN_BOUNDARY_AREA
    }

    /// Copy of this polygon scaled by `factor` about `center`.
    pub fn scaled_about(&self, center: Point, factor: f64) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|&v| center + (v - center) * factor)
                .collect(),
        }
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Horizontal ray-casting parity test.
///
/// A vertex list shorter than [`MIN_BOUNDARY_VERTICES`] is "no boundary"
/// and contains every point. Points exactly on an edge may go either way.
pub fn contains(point: Point, vertices: &[Point]) -> bool {
    if vertices.len() < MIN_BOUNDARY_VERTICES {
        return true;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Walk `points` in order, keeping a point only when it lies at least
/// `min_distance` from the last kept one. The first point is always kept.
pub fn thin_by_distance<I>(points: I, min_distance: f64) -> Vec<Point>
where
    I: IntoIterator<Item = Point>,
{
    let mut kept: Vec<Point> = Vec::new();
    for p in points {
        match kept.last() {
            Some(last) if last.distance(p) < min_distance => {}
            _ => kept.push(p),
        }
    }
    kept
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ])
    }

    #[test]
    fn test_contains_inside_and_outside() {
        let sq = square(100.0, 300.0);
        assert!(sq.contains(Point::new(200.0, 200.0)));
        assert!(!sq.contains(Point::new(50.0, 200.0)));
        assert!(!sq.contains(Point::new(350.0, 200.0)));
        assert!(!sq.contains(Point::new(200.0, 400.0)));
    }

    #[test]
    fn test_open_world_default() {
        let two = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        assert!(two.contains(Point::new(-1000.0, 5000.0)));
        assert!(Polygon::default().contains(Point::ZERO));
    }

    #[test]
    fn test_concave_notch_excluded() {
        // U shape: the notch between the arms is outside
        let u = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(300.0, 0.0),
            Point::new(300.0, 300.0),
            Point::new(200.0, 300.0),
            Point::new(200.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(100.0, 300.0),
            Point::new(0.0, 300.0),
        ]);
        assert!(u.contains(Point::new(50.0, 200.0)));
        assert!(u.contains(Point::new(250.0, 200.0)));
        assert!(!u.contains(Point::new(150.0, 200.0)));
    }

    #[test]
    fn test_centroid_and_area() {
        let sq = square(0.0, 10.0);
        assert_eq!(sq.centroid(), Some(Point::new(5.0, 5.0)));
        assert!((sq.signed_area().abs() - 100.0).abs() < 1e-9);
        assert!(!sq.is_degenerate());
        assert!(Polygon::default().centroid().is_none());
    }

    #[test]
    fn test_collinear_is_degenerate() {
        let line = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ]);
        assert!(line.is_degenerate());
    }

    #[test]
    fn test_retraced_stroke_is_degenerate() {
        // Out along y = 400 and back over the same points
        let mut pts: Vec<Point> = (0..=38)
            .map(|i| Point::new(200.0 + i as f64 * 10.0, 400.0))
            .collect();
        let back: Vec<Point> = pts.iter().rev().skip(1).copied().collect();
        pts.extend(back);
        let stroke = Polygon::new(pts);
        assert!(stroke.signed_area().abs() < 1e-6);
        assert!(stroke.is_degenerate());
        assert!(!Polygon::default().is_degenerate());
    }

    #[test]
    fn test_scaled_about_center() {
        let sq = square(300.0, 500.0).scaled_about(Point::new(400.0, 400.0), 0.5);
        assert_eq!(sq.vertices()[0], Point::new(350.0, 350.0));
        assert_eq!(sq.vertices()[2], Point::new(450.0, 450.0));
    }

    #[test]
    fn test_thin_by_distance() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(12.0, 0.0),
            Point::new(25.0, 0.0),
        ];
        let thinned = thin_by_distance(pts, 10.0);
        assert_eq!(
            thinned,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(25.0, 0.0)]
        );
    }

    #[test]
    fn test_thin_by_distance_empty() {
        assert!(thin_by_distance(Vec::new(), 5.0).is_empty());
    }
}
