//! Geometry Module
//!
//! Canvas-space primitives shared by boundary detection and layout.
//!
//! ## Canvas
//! Everything lives on a fixed 800x800 logical canvas with the boss at
//! (400, 400). Real-world distances are yards; one yard is 8 canvas units
//! by default (see `LayoutConfig::yards_to_pixels`).

pub mod ellipse;
pub mod polygon;

pub use ellipse::{DEFAULT_ELLIPSE_POINTS, EllipseSpec, ellipse};
pub use polygon::{
    MIN_BOUNDARY_AREA, MIN_BOUNDARY_VERTICES, Point, Polygon, contains, thin_by_distance,
};

/// Side length of the logical canvas.
pub const CANVAS_SIZE: f64 = 800.0;

/// Canvas center, where the rings are anchored.
pub const CANVAS_CENTER: Point = Point::new(400.0, 400.0);

/// Point at `radius` from `center` along `angle` (radians, 0 = +x axis).
#[inline]
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}
