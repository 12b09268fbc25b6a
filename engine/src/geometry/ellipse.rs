//! Ellipse Fallback Boundary
//!
//! The canonical stand-in whenever a real boundary cannot be extracted.

use serde::{Deserialize, Serialize};

use super::polygon::{Point, Polygon};

/// Vertex count for the fallback ellipse.
pub const DEFAULT_ELLIPSE_POINTS: usize = 40;

/// `point_count` evenly spaced vertices on an axis-aligned ellipse.
///
/// `width` and `height` are full extents, so the semi-axes are half of each.
/// The first vertex sits at angle 0 (the +x extreme).
pub fn ellipse(center: Point, width: f64, height: f64, point_count: usize) -> Polygon {
    let rx = width * 0.5;
    let ry = height * 0.5;
    let vertices = (0..point_count)
        .map(|i| {
            let angle = (i as f64 / point_count as f64) * std::f64::consts::TAU;
            Point::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect();
    Polygon::new(vertices)
}

/// Parameters of the fallback ellipse. `Default` is the canonical arena
/// approximation: centered on the canvas, 320 wide, 280 tall, 40 vertices.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipseSpec {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub point_count: usize,
}

impl EllipseSpec {
    pub fn polygon(&self) -> Polygon {
        ellipse(self.center, self.width, self.height, self.point_count)
    }
}

impl Default for EllipseSpec {
    fn default() -> Self {
        Self {
            center: Point::new(400.0, 400.0),
            width: 320.0,
            height: 280.0,
            point_count: DEFAULT_ELLIPSE_POINTS,
        }
    }
}
