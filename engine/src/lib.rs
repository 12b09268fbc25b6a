//! Raid Layout Engine Library
//!
//! Lays out raid members on concentric rings around a fixed center point
//! inside an arena whose boundary is inferred from a screenshot, drawn by
//! hand, or replaced by a canonical ellipse when neither is usable.
//!
//! # Modules
//!
//! - [`geometry`] - Canvas points, boundary polygons, containment, ellipse fallback
//! - [`boundary`] - Border sampling, boundary extraction, freehand paths, fallback resolution
//! - [`layout`] - Radius fitting, ring derivation and the spaced position planner
//! - [`raid`] - Roster, role-based assignment and the mutable layout session
//! - [`util`] - Console logger for the binaries
//!
//! # Example
//!
//! ```ignore
//! use raid_layout_engine::boundary::{detect_boundary, ImageBorderSampler};
//! use raid_layout_engine::layout::{generate_layout, LayoutConfig};
//!
//! let config = LayoutConfig::default();
//! let sampler = ImageBorderSampler::open("arena.png".as_ref())?;
//! let boundary = detect_boundary(&sampler, &config.fallback_ellipse);
//! let layout = generate_layout(&config, Some(&boundary.polygon));
//!
//! for slot in &layout.slots {
//!     println!("{} -> ({:.1}, {:.1})", slot.id, slot.position.x, slot.position.y);
//! }
//! ```

pub mod boundary;
pub mod geometry;
pub mod layout;
pub mod util;

// Raid-side collaborators (located in src/raid/ directory)
#[path = "../../src/raid/mod.rs"]
pub mod raid;

// Re-export the types most callers touch
pub use boundary::{
    BorderSampler, BoundaryError, BoundaryOrigin, ImageBorderSampler, ResolvedBoundary,
    boundary_from_drawing, detect_boundary, extract_boundary, resolve_boundary,
};
pub use geometry::{EllipseSpec, Point, Polygon};
pub use layout::{
    Layout, LayoutConfig, OccupantId, Placement, PositionPlanner, RingSpec, Role, Slot,
    generate_layout, max_radius,
};
pub use raid::{LayoutSession, Raider, RaiderId, Roster};
