//! Radius Fitting
//!
//! Finds the largest circle around the center whose sampled perimeter lies
//! inside the boundary.
//!
//! ## Star-convexity
//! The scan walks radii upward and stops at the first failure; larger radii
//! are never tested. That is exact for arenas that are star-convex around
//! the center and an approximation for anything else. A concave arena with
//! an inward notch near the center will under-report its usable radius.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Polygon, polar};

/// Scan parameters, all radii in yards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusScan {
    /// First radius tested.
    pub lower_yards: f64,
    /// Last radius tested.
    pub upper_yards: f64,
    pub step_yards: f64,
    /// Perimeter samples per tested circle.
    pub sample_count: usize,
    /// Result never drops below this, however tight the boundary.
    pub floor_yards: f64,
    /// Result when there is no boundary at all.
    pub unbounded_yards: f64,
}

impl Default for RadiusScan {
    fn default() -> Self {
        Self {
            lower_yards: 10.0,
            upper_yards: 60.0,
            step_yards: 1.0,
            sample_count: 16,
            floor_yards: 20.0,
            unbounded_yards: 60.0,
        }
    }
}

impl RadiusScan {
    /// Radii tested, in order.
    fn radii(&self) -> impl Iterator<Item = f64> + '_ {
        let steps = if self.step_yards > 0.0 && self.upper_yards >= self.lower_yards {
            ((self.upper_yards - self.lower_yards) / self.step_yards + 1e-9).floor() as usize
        } else {
            0
        };
        (0..=steps).map(move |k| self.lower_yards + k as f64 * self.step_yards)
    }
}

/// Largest usable ring radius in yards.
///
/// `None` or a polygon with fewer than three vertices returns
/// `scan.unbounded_yards` without scanning.
pub fn max_radius(
    boundary: Option<&Polygon>,
    center: Point,
    yards_to_pixels: f64,
    scan: &RadiusScan,
) -> f64 {
    let polygon = match boundary {
        Some(p) if p.is_bounded() => p,
        _ => return scan.unbounded_yards,
    };

    let samples = scan.sample_count.max(1);
    let mut best = 0.0_f64;
    for radius_yards in scan.radii() {
        let radius = radius_yards * yards_to_pixels;
        let fits = (0..samples).all(|s| {
            let angle = s as f64 * std::f64::consts::TAU / samples as f64;
            polygon.contains(polar(center, radius, angle))
        });
        if !fits {
            break;
        }
        best = radius_yards;
    }

    best.max(scan.floor_yards)
}
