//! Layout Configuration
//!
//! Every tunable of the layout pipeline in one place. `Default` reproduces
//! the reference raid setup: 25 slots on three rings, 18-yard spacing,
//! 8 canvas units per yard.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::planner::SearchConfig;
use super::radius::RadiusScan;
use super::rings::{RingProfile, default_ring_profiles};
use crate::geometry::{CANVAS_CENTER, CANVAS_SIZE, EllipseSpec, MIN_BOUNDARY_VERTICES, Point};

/// Upper bound on slots in one layout.
pub const MAX_SLOTS: usize = 25;

/// Central configuration for layout generation.
///
/// Loaded from JSON; any field left out keeps its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Side length of the logical canvas.
    pub canvas_size: f64,
    /// Ring center (the boss position).
    pub center: Point,
    /// Canvas units per real-world yard.
    pub yards_to_pixels: f64,
    /// Required distance between raiders, in yards.
    pub min_spacing_yards: f64,
    /// Rings, inner first.
    pub rings: Vec<RingProfile>,
    pub radius_scan: RadiusScan,
    pub search: SearchConfig,
    /// Boundary used when none can be detected.
    pub fallback_ellipse: EllipseSpec,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            center: CANVAS_CENTER,
            yards_to_pixels: 8.0,
            min_spacing_yards: 18.0,
            rings: default_ring_profiles(),
            radius_scan: RadiusScan::default(),
            search: SearchConfig::default(),
            fallback_ellipse: EllipseSpec::default(),
        }
    }
}

impl LayoutConfig {
    /// Minimum spacing in canvas units.
    pub fn min_spacing_px(&self) -> f64 {
        self.min_spacing_yards * self.yards_to_pixels
    }

    /// Total slots across all rings.
    pub fn slot_count(&self) -> usize {
        self.rings.iter().map(|r| r.count).sum()
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: LayoutConfig = serde_json::from_str(&json)?;
        config.validate()?;
        log::debug!("loaded layout config from {}", path.display());
        Ok(config)
    }

    /// Save as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_size > 0.0) {
            return Err(ConfigError::Invalid("canvas_size must be positive".into()));
        }
        if !(self.yards_to_pixels > 0.0) {
            return Err(ConfigError::Invalid("yards_to_pixels must be positive".into()));
        }
        if !(self.min_spacing_yards > 0.0) {
            return Err(ConfigError::Invalid("min_spacing_yards must be positive".into()));
        }
        if self.rings.is_empty() {
            return Err(ConfigError::Invalid("at least one ring is required".into()));
        }
        if let Some(ring) = self.rings.iter().find(|r| !(r.proportion > 0.0 && r.cap_yards > 0.0)) {
            return Err(ConfigError::Invalid(format!(
                "ring proportion and cap must be positive (got {} / {})",
                ring.proportion, ring.cap_yards
            )));
        }
        let total = self.slot_count();
        if total > MAX_SLOTS {
            return Err(ConfigError::Invalid(format!(
                "rings hold {total} slots, at most {MAX_SLOTS} allowed"
            )));
        }
        if !(self.radius_scan.step_yards > 0.0) || self.radius_scan.sample_count == 0 {
            return Err(ConfigError::Invalid("radius scan needs a positive step and samples".into()));
        }

        let s = &self.search;
        if !(s.spacing_factor > 0.0 && s.radius_step > 0.0 && s.angle_step > 0.0) {
            return Err(ConfigError::Invalid(
                "search spacing_factor, radius_step and angle_step must be positive".into(),
            ));
        }

        // The fallback must always be a real, closed boundary
        let e = &self.fallback_ellipse;
        if e.point_count < MIN_BOUNDARY_VERTICES {
            return Err(ConfigError::Invalid(format!(
                "fallback ellipse needs at least {MIN_BOUNDARY_VERTICES} points (got {})",
                e.point_count
            )));
        }
        if !(e.width > 0.0 && e.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fallback ellipse must have a positive size (got {} x {})",
                e.width, e.height
            )));
        }
        Ok(())
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors that can occur while loading or validating a config.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::rings::Role;

    #[test]
    fn test_default_is_valid() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.slot_count(), 25);
        assert_eq!(config.min_spacing_px(), 144.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{ "min_spacing_yards": 10.0 }"#).expect("parse");
        assert_eq!(config.min_spacing_yards, 10.0);
        assert_eq!(config.yards_to_pixels, 8.0);
        assert_eq!(config.rings.len(), 3);
    }

    #[test]
    fn test_too_many_slots_rejected() {
        let mut config = LayoutConfig::default();
        config.rings.push(RingProfile {
            count: 1,
            proportion: 0.5,
            cap_yards: 20.0,
            role: Role::Ranged,
        });
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_positive_spacing_rejected() {
        let config = LayoutConfig {
            min_spacing_yards: 0.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_open_world_fallback_rejected() {
        let mut config = LayoutConfig::default();
        config.fallback_ellipse.point_count = 2;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_flat_fallback_rejected() {
        for (width, height) in [(0.0, 280.0), (320.0, 0.0), (-10.0, 280.0)] {
            let mut config = LayoutConfig::default();
            config.fallback_ellipse.width = width;
            config.fallback_ellipse.height = height;
            assert!(config.validate().is_err(), "{width} x {height} accepted");
        }
    }

    #[test]
    fn test_empty_search_grid_rejected() {
        let mut config = LayoutConfig::default();
        config.search.angle_step = -0.1;
        assert!(config.validate().is_err());

        let mut config = LayoutConfig::default();
        config.search.radius_step = 0.0;
        assert!(config.validate().is_err());

        let mut config = LayoutConfig::default();
        config.search.spacing_factor = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_canvas_rejected() {
        let config = LayoutConfig {
            canvas_size: 0.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip_through_file() {
        let path = std::env::temp_dir().join("raid_layout_config_test.json");
        let config = LayoutConfig {
            min_spacing_yards: 12.0,
            ..LayoutConfig::default()
        };
        config.save(&path).expect("save");
        let loaded = LayoutConfig::load(&path).expect("load");
        assert_eq!(loaded.min_spacing_yards, 12.0);
        assert_eq!(loaded.rings, config.rings);
        assert_eq!(loaded.center, config.center);
        let _ = std::fs::remove_file(&path);
    }
}
