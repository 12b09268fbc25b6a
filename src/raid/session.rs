//! Layout Session
//!
//! The mutable side of the application: current config, roster, boundary
//! and layout. Every change that affects geometry regenerates the whole
//! slot list from scratch and carries occupants over by slot id.

use serde::{Deserialize, Serialize};

use super::assign::{auto_assign, carry_over, clear_assignments};
use super::roster::{ImportFormat, ImportReport, Raider, RaiderId, Roster, RosterError};
use crate::boundary::{
    BorderSampler, BoundaryError, BoundaryOrigin, ResolvedBoundary, boundary_from_drawing,
    detect_boundary,
};
use crate::geometry::{Point, Polygon};
use crate::layout::{ConfigError, Layout, LayoutConfig, Role, Slot, generate_layout};

/// Snapshot written by [`LayoutSession::export`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetupExport {
    pub raiders: Vec<Raider>,
    pub slots: Vec<Slot>,
    pub boundary: Option<ResolvedBoundary>,
    pub max_radius_yards: f64,
}

/// Errors from restoring a saved setup.
#[derive(Debug)]
pub enum SetupError {
    Json(serde_json::Error),
    Config(ConfigError),
    Roster(RosterError),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::Json(e) => write!(f, "JSON error: {e}"),
            SetupError::Config(e) => write!(f, "config error: {e}"),
            SetupError::Roster(e) => write!(f, "roster error: {e}"),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Json(e) => Some(e),
            SetupError::Config(e) => Some(e),
            SetupError::Roster(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(e: serde_json::Error) -> Self {
        SetupError::Json(e)
    }
}

impl From<ConfigError> for SetupError {
    fn from(e: ConfigError) -> Self {
        SetupError::Config(e)
    }
}

impl From<RosterError> for SetupError {
    fn from(e: RosterError) -> Self {
        SetupError::Roster(e)
    }
}

pub struct LayoutSession {
    config: LayoutConfig,
    roster: Roster,
    boundary: Option<ResolvedBoundary>,
    layout: Layout,
}

impl LayoutSession {
    /// Start unbounded with an empty roster.
    pub fn new(config: LayoutConfig) -> Self {
        let layout = generate_layout(&config, None);
        Self {
            config,
            roster: Roster::new(),
            boundary: None,
            layout,
        }
    }

    /// Restore a session from a saved setup: roster with its ids, boundary,
    /// and every assignment whose slot id still exists in the layout
    /// regenerated under `config`.
    ///
    /// A saved boundary that is open or encloses no area is replaced by the
    /// fallback ellipse.
    pub fn from_export(config: LayoutConfig, export: SetupExport) -> Result<Self, SetupError> {
        config.validate()?;
        let roster = Roster::restore(export.raiders)?;
        let boundary = export.boundary.map(|saved| {
            if saved.polygon.is_bounded() && !saved.polygon.is_degenerate() {
                saved
            } else {
                log::warn!(
                    "saved {:?} boundary is unusable ({} vertices), using ellipse fallback",
                    saved.origin,
                    saved.polygon.len()
                );
                ResolvedBoundary::fallback(&config.fallback_ellipse)
            }
        });

        let polygon = boundary.as_ref().map(|b| &b.polygon);
        let layout = generate_layout(&config, polygon);
        let mut session = Self {
            config,
            roster,
            boundary,
            layout,
        };
        let seated = carry_over(&export.slots, &mut session.layout.slots, &mut session.roster);
        log::debug!(
            "restored {} raiders, {} seated",
            session.roster.len(),
            seated
        );
        Ok(session)
    }

    /// [`LayoutSession::from_export`] from the JSON written by
    /// [`LayoutSession::export_json`].
    pub fn from_json(config: LayoutConfig, json: &str) -> Result<Self, SetupError> {
        let export: SetupExport = serde_json::from_str(json)?;
        Self::from_export(config, export)
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn boundary(&self) -> Option<&ResolvedBoundary> {
        self.boundary.as_ref()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn slots(&self) -> &[Slot] {
        &self.layout.slots
    }

    /// Rebuild the layout from the current config and boundary.
    pub fn regenerate(&mut self) {
        let polygon = self.boundary.as_ref().map(|b| &b.polygon);
        let mut next = generate_layout(&self.config, polygon);
        let carried = carry_over(&self.layout.slots, &mut next.slots, &mut self.roster);
        log::debug!(
            "regenerated {} slots, carried {} assignments",
            next.slots.len(),
            carried
        );
        self.layout = next;
    }

    /// Replace the config after validating it.
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.regenerate();
        Ok(())
    }

    pub fn set_boundary(&mut self, boundary: ResolvedBoundary) {
        self.boundary = Some(boundary);
        self.regenerate();
    }

    /// Detect the boundary from a screenshot sampler. Never fails: an
    /// unusable image gives the fallback ellipse.
    pub fn load_image(&mut self, sampler: &dyn BorderSampler) -> BoundaryOrigin {
        let resolved = detect_boundary(sampler, &self.config.fallback_ellipse);
        let origin = resolved.origin;
        self.set_boundary(resolved);
        origin
    }

    /// Use a freehand path as the boundary. A rejected path leaves the
    /// current boundary untouched.
    pub fn draw_boundary(&mut self, path: &[Point]) -> Result<(), BoundaryError> {
        let polygon = boundary_from_drawing(path)?;
        self.set_boundary(ResolvedBoundary {
            polygon,
            origin: BoundaryOrigin::Drawn,
        });
        Ok(())
    }

    /// Active boundary polygon, if any.
    pub fn polygon(&self) -> Option<&Polygon> {
        self.boundary.as_ref().map(|b| &b.polygon)
    }

    pub fn clear_boundary(&mut self) {
        self.boundary = None;
        self.regenerate();
    }

    // ------------------------------------------------------------------------
    // Roster
    // ------------------------------------------------------------------------

    pub fn add_raider(&mut self, name: &str, role: Role) -> Result<RaiderId, RosterError> {
        self.roster.add(name, role)
    }

    pub fn import_raiders(&mut self, text: &str, format: ImportFormat) -> ImportReport {
        self.roster.bulk_import(text, format)
    }

    /// Remove a raider and free the slot it held.
    pub fn remove_raider(&mut self, id: RaiderId) -> Result<Raider, RosterError> {
        let raider = self.roster.remove(id)?;
        for slot in &mut self.layout.slots {
            if slot.assigned == Some(id) {
                slot.assigned = None;
            }
        }
        Ok(raider)
    }

    pub fn clear_roster(&mut self) {
        self.roster.clear();
        for slot in &mut self.layout.slots {
            slot.assigned = None;
        }
    }

    // ------------------------------------------------------------------------
    // Assignment
    // ------------------------------------------------------------------------

    pub fn auto_assign(&mut self) -> usize {
        auto_assign(&mut self.roster, &mut self.layout.slots)
    }

    pub fn clear_assignments(&mut self) {
        clear_assignments(&mut self.roster, &mut self.layout.slots);
    }

    /// Seat `raider` in `slot_id`, evicting whoever held it and vacating the
    /// raider's previous slot.
    pub fn assign(&mut self, raider: RaiderId, slot_id: u32) -> Result<(), RosterError> {
        if self.roster.get(raider).is_none() {
            return Err(RosterError::UnknownRaider(raider));
        }
        let index = self
            .layout
            .slots
            .iter()
            .position(|s| s.id == slot_id)
            .ok_or(RosterError::UnknownSlot(slot_id))?;

        for slot in &mut self.layout.slots {
            if slot.assigned == Some(raider) {
                slot.assigned = None;
            }
        }
        if let Some(evicted) = self.layout.slots[index].assigned.replace(raider) {
            if let Some(r) = self.roster.get_mut(evicted) {
                r.slot = None;
            }
        }
        if let Some(r) = self.roster.get_mut(raider) {
            r.slot = Some(slot_id);
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    pub fn export(&self) -> SetupExport {
        SetupExport {
            raiders: self.roster.raiders().to_vec(),
            slots: self.layout.slots.clone(),
            boundary: self.boundary.clone(),
            max_radius_yards: self.layout.max_radius_yards,
        }
    }

    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.export())
    }
}

impl Default for LayoutSession {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
