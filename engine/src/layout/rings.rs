//! Rings and Roles
//!
//! Three concentric rings around the boss: a tight melee ring and two
//! ranged rings. Ring radii scale with the fitted arena radius, each capped
//! at a fixed yard ceiling.

use serde::{Deserialize, Serialize};

// ============================================================================
// ROLE
// ============================================================================

/// Raid role. Slots only ever prefer `Melee` or `Ranged`; tanks and healers
/// are raider roles that get routed to one of those.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tank,
    Healer,
    Melee,
    Ranged,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Tank, Role::Healer, Role::Melee, Role::Ranged];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tank => "tank",
            Role::Healer => "healer",
            Role::Melee => "melee",
            Role::Ranged => "ranged",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized role name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl std::fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseRoleError(trimmed.to_string()))
    }
}

// ============================================================================
// RING SPECS
// ============================================================================

/// One ring to fill: `count` slots at `target_radius` canvas units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    pub count: usize,
    pub target_radius: f64,
    pub role: Role,
}

/// How a ring's radius follows the fitted arena radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingProfile {
    pub count: usize,
    /// Fraction of the fitted radius.
    pub proportion: f64,
    /// Ceiling in yards.
    pub cap_yards: f64,
    pub role: Role,
}

impl RingProfile {
    pub fn radius_yards(&self, max_radius_yards: f64) -> f64 {
        (max_radius_yards * self.proportion).min(self.cap_yards)
    }
}

/// Inner melee ring of 8, middle ranged ring of 9, outer ranged ring of 8.
pub fn default_ring_profiles() -> Vec<RingProfile> {
    vec![
        RingProfile { count: 8, proportion: 0.27, cap_yards: 12.0, role: Role::Melee },
        RingProfile { count: 9, proportion: 0.67, cap_yards: 30.0, role: Role::Ranged },
        RingProfile { count: 8, proportion: 0.95, cap_yards: 45.0, role: Role::Ranged },
    ]
}

/// Concrete rings for a fitted radius, radii converted to canvas units.
pub fn derive_ring_specs(
    max_radius_yards: f64,
    profiles: &[RingProfile],
    yards_to_pixels: f64,
) -> Vec<RingSpec> {
    profiles
        .iter()
        .map(|p| RingSpec {
            count: p.count,
            target_radius: p.radius_yards(max_radius_yards) * yards_to_pixels,
            role: p.role,
        })
        .collect()
}
