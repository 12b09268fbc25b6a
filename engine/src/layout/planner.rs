//! Position Planner
//!
//! Places one slot per ring entry, ring by ring, each at the best nearby
//! point that is inside the boundary and clear of every slot already placed.
//!
//! The search is greedy and local: slot N only sees slots 1..N-1, and a slot
//! that cannot satisfy both constraints falls back instead of failing the
//! layout. The result is always exactly `sum(count)` slots.
//!
//! ## Search grid
//! Around the ideal polar point, candidates pull the radius inward in
//! `radius_step` increments (up to `max_radius_offset_fraction` of the target)
//! and swing the angle by multiples of `angle_step` within `angle_span`.
//! Score = `-distance_to_ideal + clearance_weight * min(nearest, cap)`.

use serde::{Deserialize, Serialize};

use super::rings::{RingSpec, Role};
use crate::geometry::{Point, Polygon, polar};

// ============================================================================
// TYPES
// ============================================================================

/// Opaque reference to whoever occupies a slot. Assigned by the roster,
/// never by the planner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccupantId(pub u32);

impl std::fmt::Display for OccupantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a slot's position was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// No boundary: exact ideal polar point.
    Direct,
    /// Best-scoring candidate from the local search.
    Searched,
    /// Search found nothing; the ideal point was already inside.
    IdealFallback,
    /// Search found nothing; moved toward the boundary centroid.
    Corrected,
    /// Nothing inside was found at all; ideal point kept as is.
    Uncorrected,
}

impl Placement {
    /// Fallback placements may violate the spacing constraint.
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            Placement::IdealFallback | Placement::Corrected | Placement::Uncorrected
        )
    }
}

/// One placeable position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// 1-based, sequential in ring-then-angle order.
    pub id: u32,
    pub position: Point,
    pub preferred_role: Role,
    pub assigned: Option<OccupantId>,
    pub placement: Placement,
}

/// Local search tuning. Distances are canvas units, angles radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Required clearance as a fraction of the minimum spacing.
    pub spacing_factor: f64,
    pub radius_step: f64,
    /// Largest inward radius offset, as a fraction of the target radius.
    pub max_radius_offset_fraction: f64,
    /// Half-width of the angular sweep.
    pub angle_span: f64,
    pub angle_step: f64,
    pub clearance_weight: f64,
    /// Clearance reward stops growing past this multiple of the spacing.
    pub clearance_cap_factor: f64,
    /// Candidate radii never go below this.
    pub min_candidate_radius: f64,
    /// Steps of the centroid-ward correction walk.
    pub correction_steps: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        use std::f64::consts::PI;
        Self {
            spacing_factor: 0.8,
            radius_step: 10.0,
            max_radius_offset_fraction: 0.5,
            angle_span: PI / 8.0,
            angle_step: PI / 16.0,
            clearance_weight: 0.1,
            clearance_cap_factor: 2.0,
            min_candidate_radius: 20.0,
            correction_steps: 10,
        }
    }
}

// ============================================================================
// PLANNER
// ============================================================================

/// Places slots around `center`, optionally constrained by a boundary.
pub struct PositionPlanner<'a> {
    center: Point,
    boundary: Option<&'a Polygon>,
    min_spacing: f64,
    search: SearchConfig,
}

impl<'a> PositionPlanner<'a> {
    /// `min_spacing` is in canvas units. A boundary with fewer than three
    /// vertices is ignored.
    pub fn new(
        center: Point,
        boundary: Option<&'a Polygon>,
        min_spacing: f64,
        search: SearchConfig,
    ) -> Self {
        Self {
            center,
            boundary: boundary.filter(|p| p.is_bounded()),
            min_spacing,
            search,
        }
    }

    /// Clearance a searched candidate must keep from every placed slot.
    pub fn required_clearance(&self) -> f64 {
        self.search.spacing_factor * self.min_spacing
    }

    /// Place every ring entry. Ids run 1..=N: ring order, then angle order
    /// starting at angle 0.
    pub fn plan(&self, rings: &[RingSpec]) -> Vec<Slot> {
        let total: usize = rings.iter().map(|r| r.count).sum();
        let mut slots: Vec<Slot> = Vec::with_capacity(total);
        let mut next_id = 1u32;

        for ring in rings {
            if ring.count == 0 {
                continue;
            }
            let angle_step = std::f64::consts::TAU / ring.count as f64;
            for i in 0..ring.count {
                let angle = i as f64 * angle_step;
                let (position, placement) = self.place(angle, ring.target_radius, &slots);
                slots.push(Slot {
                    id: next_id,
                    position,
                    preferred_role: ring.role,
                    assigned: None,
                    placement,
                });
                next_id += 1;
            }
        }

        let fallbacks = slots.iter().filter(|s| s.placement.is_fallback()).count();
        if fallbacks > 0 {
            log::warn!("{fallbacks} of {} slots could not keep spacing", slots.len());
        }
        log::debug!(
            "planned {} slots on {} rings (bounded: {})",
            slots.len(),
            rings.len(),
            self.boundary.is_some()
        );
        slots
    }

    fn place(&self, angle: f64, target_radius: f64, placed: &[Slot]) -> (Point, Placement) {
        let ideal = polar(self.center, target_radius, angle);
        let Some(boundary) = self.boundary else {
            return (ideal, Placement::Direct);
        };

        if let Some(best) = self.search(boundary, angle, target_radius, ideal, placed) {
            return (best, Placement::Searched);
        }
        self.correct(boundary, ideal)
    }

    /// Highest-scoring candidate that is inside and clear, if any.
    fn search(
        &self,
        boundary: &Polygon,
        angle: f64,
        target_radius: f64,
        ideal: Point,
        placed: &[Slot],
    ) -> Option<Point> {
        let s = &self.search;
        let clearance = self.required_clearance();
        let clearance_cap = s.clearance_cap_factor * self.min_spacing;

        let max_offset = target_radius * s.max_radius_offset_fraction;
        let radius_steps = if s.radius_step > 0.0 {
            (max_offset / s.radius_step + 1e-9).floor().max(0.0) as usize
        } else {
            0
        };
        let angle_steps = if s.angle_step > 0.0 {
            (s.angle_span / s.angle_step + 1e-9).floor() as i32
        } else {
            0
        };

        let mut best: Option<(Point, f64)> = None;
        for k in 0..=radius_steps {
            let radius = (target_radius - k as f64 * s.radius_step).max(s.min_candidate_radius);
            for j in -angle_steps..=angle_steps {
                let candidate = polar(self.center, radius, angle + j as f64 * s.angle_step);
                if !boundary.contains(candidate) {
                    continue;
                }

                let nearest = placed
                    .iter()
                    .map(|slot| slot.position.distance(candidate))
                    .fold(f64::INFINITY, f64::min);
                if nearest < clearance {
                    continue;
                }

                let score = -candidate.distance(ideal) + s.clearance_weight * nearest.min(clearance_cap);
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((candidate, score));
                }
            }
        }

        best.map(|(p, _)| p)
    }

    /// Walk from the ideal point toward the boundary centroid and keep the
    /// first point inside. The walk starts at the ideal point itself.
    fn correct(&self, boundary: &Polygon, ideal: Point) -> (Point, Placement) {
        if boundary.contains(ideal) {
            return (ideal, Placement::IdealFallback);
        }

        if let Some(centroid) = boundary.centroid() {
            let steps = self.search.correction_steps.max(1);
            for step in 1..=steps {
                let t = step as f64 / steps as f64;
                let candidate = ideal.lerp(centroid, t);
                if boundary.contains(candidate) {
                    return (candidate, Placement::Corrected);
                }
            }
        }

        log::warn!(
            "no interior point near ({:.1}, {:.1}), keeping it uncorrected",
            ideal.x,
            ideal.y
        );
        (ideal, Placement::Uncorrected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(400.0, 400.0);

    fn rings() -> Vec<RingSpec> {
        vec![
            RingSpec { count: 8, target_radius: 96.0, role: Role::Melee },
            RingSpec { count: 9, target_radius: 240.0, role: Role::Ranged },
            RingSpec { count: 8, target_radius: 360.0, role: Role::Ranged },
        ]
    }

    fn square(min: f64, max: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
        ])
    }

    #[test]
    fn test_unbounded_is_direct() {
        let planner = PositionPlanner::new(CENTER, None, 144.0, SearchConfig::default());
        let slots = planner.plan(&rings());
        assert_eq!(slots.len(), 25);
        assert!(slots.iter().all(|s| s.placement == Placement::Direct));
        assert_eq!(slots[0].position, Point::new(496.0, 400.0));
    }

    #[test]
    fn test_degenerate_boundary_ignored() {
        let line = Polygon::new(vec![Point::ZERO, Point::new(1.0, 1.0)]);
        let planner = PositionPlanner::new(CENTER, Some(&line), 144.0, SearchConfig::default());
        assert!(planner.plan(&rings()).iter().all(|s| s.placement == Placement::Direct));
    }

    #[test]
    fn test_first_slot_lands_on_ideal_point() {
        let sq = square(20.0, 780.0);
        let planner = PositionPlanner::new(CENTER, Some(&sq), 144.0, SearchConfig::default());
        let slots = planner.plan(&rings());
        assert_eq!(slots[0].placement, Placement::Searched);
        assert!(slots[0].position.distance(Point::new(496.0, 400.0)) < 1e-9);
    }

    #[test]
    fn test_searched_slots_keep_clearance() {
        let sq = square(20.0, 780.0);
        let planner = PositionPlanner::new(CENTER, Some(&sq), 144.0, SearchConfig::default());
        let slots = planner.plan(&rings());
        for (i, slot) in slots.iter().enumerate() {
            assert!(sq.contains(slot.position), "slot {} outside", slot.id);
            if slot.placement == Placement::Searched {
                for earlier in &slots[..i] {
                    assert!(earlier.position.distance(slot.position) >= planner.required_clearance());
                }
            }
        }
    }

    #[test]
    fn test_outside_ideal_is_corrected_toward_centroid() {
        // Boundary far from the center: every ideal point is outside
        let far = square(700.0, 780.0);
        let planner = PositionPlanner::new(CENTER, Some(&far), 144.0, SearchConfig::default());
        let (pos, placement) = planner.correct(&far, Point::new(496.0, 400.0));
        assert_eq!(placement, Placement::Corrected);
        assert!(far.contains(pos));
    }

    #[test]
    fn test_uncorrectable_keeps_ideal() {
        // U shape whose vertex centroid (150, 175) sits in the notch; the
        // walk from below runs straight up the notch and never enters.
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
        assert_eq!(u.centroid(), Some(Point::new(150.0, 175.0)));
        let planner = PositionPlanner::new(CENTER, Some(&u), 144.0, SearchConfig::default());
        let ideal = Point::new(150.0, 700.0);
        assert_eq!(planner.correct(&u, ideal), (ideal, Placement::Uncorrected));
    }

    #[test]
    fn test_empty_ring_skipped() {
        let planner = PositionPlanner::new(CENTER, None, 144.0, SearchConfig::default());
        let slots = planner.plan(&[
            RingSpec { count: 0, target_radius: 50.0, role: Role::Melee },
            RingSpec { count: 3, target_radius: 100.0, role: Role::Ranged },
        ]);
        assert_eq!(slots.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
