//! Boundary Extraction
//!
//! Orders an unordered cloud of border pixels into a simple ring polygon.
//!
//! Points are binned by angle around their centroid and only the point
//! nearest the centroid survives in each bin. For a thick painted border this
//! picks the inner edge, which is where the usable floor ends.

use std::collections::BTreeMap;

use super::BoundaryError;
use crate::geometry::{MIN_BOUNDARY_VERTICES, Point, Polygon, thin_by_distance};

/// Below this many candidates the border is treated as absent.
pub const MIN_CANDIDATE_POINTS: usize = 100;

/// Width of one angular bin (radians).
pub const ANGLE_BIN_WIDTH: f64 = 0.01;

/// Minimum distance between consecutive output vertices (canvas units).
pub const MIN_VERTEX_SPACING: f64 = 10.0;

/// Closest-to-centroid candidate seen in one angular bin.
struct BinEntry {
    point: Point,
    distance: f64,
}

/// Build a boundary polygon from unordered candidate points.
///
/// Fails with [`BoundaryError::InsufficientSignal`] below
/// [`MIN_CANDIDATE_POINTS`] candidates and with
/// [`BoundaryError::TooFewVertices`] when simplification leaves fewer than
/// three vertices. Vertices that enclose no area give
/// [`BoundaryError::Degenerate`].
pub fn extract_boundary(candidates: &[Point]) -> Result<Polygon, BoundaryError> {
    if candidates.len() < MIN_CANDIDATE_POINTS {
        return Err(BoundaryError::InsufficientSignal {
            found: candidates.len(),
            required: MIN_CANDIDATE_POINTS,
        });
    }

    let sum: Point = candidates.iter().copied().sum();
    let centroid = sum / candidates.len() as f64;

    // Bin keys are monotonic in angle, so BTreeMap order is angular order.
    let mut bins: BTreeMap<i64, BinEntry> = BTreeMap::new();
    for &point in candidates {
        let offset = point - centroid;
        let angle = offset.y.atan2(offset.x);
        let distance = offset.length();
        let key = (angle / ANGLE_BIN_WIDTH).round() as i64;

        bins.entry(key)
            .and_modify(|entry| {
                if distance < entry.distance {
                    *entry = BinEntry { point, distance };
                }
            })
            .or_insert(BinEntry { point, distance });
    }

    let vertices = thin_by_distance(bins.into_values().map(|e| e.point), MIN_VERTEX_SPACING);
    if vertices.len() < MIN_BOUNDARY_VERTICES {
        return Err(BoundaryError::TooFewVertices(vertices.len()));
    }
    let polygon = Polygon::new(vertices);
    if polygon.is_degenerate() {
        return Err(BoundaryError::Degenerate);
    }

    log::debug!(
        "extracted boundary: {} candidates -> {} vertices around ({:.1}, {:.1})",
        candidates.len(),
        polygon.len(),
        centroid.x,
        centroid.y
    );
    Ok(polygon)
}
