//! Layout Module
//!
//! Fits the ring radii to the arena and places every slot.
//!
//! Pipeline: [`max_radius`] -> [`derive_ring_specs`] -> [`PositionPlanner::plan`].
//! [`generate_layout`] runs all three from a [`LayoutConfig`].

pub mod config;
pub mod planner;
pub mod radius;
pub mod rings;

pub use config::{ConfigError, LayoutConfig, MAX_SLOTS};
pub use planner::{OccupantId, Placement, PositionPlanner, SearchConfig, Slot};
pub use radius::{RadiusScan, max_radius};
pub use rings::{ParseRoleError, RingProfile, RingSpec, Role, default_ring_profiles, derive_ring_specs};

use serde::{Deserialize, Serialize};

use crate::geometry::Polygon;

/// One generated layout: an immutable snapshot of slot positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Fitted arena radius in yards.
    pub max_radius_yards: f64,
    pub rings: Vec<RingSpec>,
    pub slots: Vec<Slot>,
}

impl Layout {
    pub fn slot(&self, id: u32) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Slots placed by a fallback rather than the search.
    pub fn fallback_count(&self) -> usize {
        self.slots.iter().filter(|s| s.placement.is_fallback()).count()
    }
}

/// Fit the radius, derive the rings and plan every slot.
///
/// Pure: the same config and boundary always give the same layout.
pub fn generate_layout(config: &LayoutConfig, boundary: Option<&Polygon>) -> Layout {
    let boundary = boundary.filter(|p| p.is_bounded());
    let max_radius_yards = max_radius(
        boundary,
        config.center,
        config.yards_to_pixels,
        &config.radius_scan,
    );
    let rings = derive_ring_specs(max_radius_yards, &config.rings, config.yards_to_pixels);

    let planner = PositionPlanner::new(
        config.center,
        boundary,
        config.min_spacing_px(),
        config.search,
    );
    let slots = planner.plan(&rings);

    log::debug!(
        "layout: max radius {:.0} yd, ring radii {:?}",
        max_radius_yards,
        rings.iter().map(|r| r.target_radius).collect::<Vec<_>>()
    );
    Layout {
        max_radius_yards,
        rings,
        slots,
    }
}
