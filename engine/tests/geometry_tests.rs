//! Geometry Tests - Containment, Ellipse Fallback, Radius Fitting
//!
//! Property-style checks over the polygon predicate and the radius fitter.

use raid_layout_engine::geometry::{CANVAS_CENTER, EllipseSpec, Point, Polygon, contains, ellipse};
use raid_layout_engine::layout::{RadiusScan, max_radius};

fn grid_points() -> Vec<Point> {
    let mut pts = Vec::new();
    for y in (0..=800).step_by(40) {
        for x in (0..=800).step_by(40) {
            pts.push(Point::new(x as f64, y as f64));
        }
    }
    pts
}

// ============================================================================
// Polygon Predicate
// ============================================================================

#[test]
fn test_fewer_than_three_vertices_contains_everything() {
    let shapes: [Vec<Point>; 3] = [
        vec![],
        vec![Point::new(10.0, 10.0)],
        vec![Point::new(10.0, 10.0), Point::new(700.0, 700.0)],
    ];
    for shape in &shapes {
        for p in grid_points() {
            assert!(contains(p, shape), "{p:?} should be inside an open world");
        }
    }
}

#[test]
fn test_winding_direction_does_not_matter() {
    let ccw = ellipse(CANVAS_CENTER, 300.0, 200.0, 24);
    let cw = Polygon::new(ccw.vertices().iter().rev().copied().collect());
    for p in grid_points() {
        assert_eq!(ccw.contains(p), cw.contains(p), "mismatch at {p:?}");
    }
}

// ============================================================================
// Ellipse Fallback
// ============================================================================

#[test]
fn test_canonical_ellipse_contains_center() {
    let poly = EllipseSpec::default().polygon();
    assert!(poly.contains(Point::new(400.0, 400.0)));
}

#[test]
fn test_ellipse_excludes_points_past_its_axes() {
    let poly = EllipseSpec::default().polygon();
    assert!(!poly.contains(Point::new(570.0, 400.0)));
    assert!(!poly.contains(Point::new(400.0, 250.0)));
    assert!(poly.contains(Point::new(550.0, 400.0)));
}

// ============================================================================
// Radius Fitter
// ============================================================================

#[test]
fn test_max_radius_always_in_range() {
    let scan = RadiusScan::default();
    let shapes = [
        ellipse(CANVAS_CENTER, 40.0, 40.0, 40),
        EllipseSpec::default().polygon(),
        ellipse(CANVAS_CENTER, 500.0, 700.0, 40),
        ellipse(CANVAS_CENTER, 4000.0, 4000.0, 40),
        ellipse(Point::new(2000.0, 2000.0), 100.0, 100.0, 40),
    ];
    for shape in &shapes {
        let r = max_radius(Some(shape), CANVAS_CENTER, 8.0, &scan);
        assert!((20.0..=60.0).contains(&r), "radius {r} out of range");
    }
}

#[test]
fn test_max_radius_non_increasing_as_polygon_shrinks() {
    let scan = RadiusScan::default();
    let base = ellipse(CANVAS_CENTER, 780.0, 700.0, 64);
    let mut previous = f64::INFINITY;
    for step in 0..20 {
        let factor = 1.0 - step as f64 * 0.045;
        let shrunk = base.scaled_about(CANVAS_CENTER, factor);
        let r = max_radius(Some(&shrunk), CANVAS_CENTER, 8.0, &scan);
        assert!(r <= previous, "radius grew from {previous} to {r} at factor {factor}");
        previous = r;
    }
    assert_eq!(previous, 20.0);
}

#[test]
fn test_no_boundary_uses_default_radius() {
    assert_eq!(max_radius(None, CANVAS_CENTER, 8.0, &RadiusScan::default()), 60.0);
}
