//! Boundary Module
//!
//! Turns raw boundary evidence into a polygon the planner can use.
//!
//! Sources:
//! - [`ImageBorderSampler`]: light border pixels from an arena screenshot
//! - [`boundary_from_drawing`]: a freehand path traced by the user
//! - any other [`BorderSampler`] implementation
//!
//! Every failure (too few candidates, unreadable image, denied pixel access)
//! resolves to the canonical ellipse through [`resolve_boundary`], so a
//! layout request always has a usable polygon.

pub mod drawing;
pub mod extract;
pub mod sampler;

pub use drawing::{CLOSE_GAP, DRAWN_PATH_MIN_STEP, MIN_DRAWN_POINTS, boundary_from_drawing};
pub use extract::{ANGLE_BIN_WIDTH, MIN_CANDIDATE_POINTS, MIN_VERTEX_SPACING, extract_boundary};
pub use sampler::{BorderSampler, BrightnessThreshold, ImageBorderSampler};

use serde::{Deserialize, Serialize};

use crate::geometry::{EllipseSpec, Polygon};

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Reasons a boundary could not be produced from the supplied evidence.
#[derive(Debug)]
pub enum BoundaryError {
    /// Not enough candidate border points to trust.
    InsufficientSignal { found: usize, required: usize },
    /// Fewer than three vertices survived simplification.
    TooFewVertices(usize),
    /// A drawn path was too short to close into a boundary.
    PathTooShort(usize),
    /// The vertices enclose (almost) no area, e.g. a stroke retraced over itself.
    Degenerate,
    /// The pixel source refused access (e.g. a cross-origin restriction).
    AccessDenied(String),
    /// The image could not be decoded.
    Image(image::ImageError),
    /// Standard I/O error.
    Io(std::io::Error),
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryError::InsufficientSignal { found, required } => {
                write!(f, "only {found} border points found, need {required}")
            }
            BoundaryError::TooFewVertices(n) => {
                write!(f, "boundary simplified to {n} vertices, need at least 3")
            }
            BoundaryError::PathTooShort(n) => write!(f, "drawn path too short ({n} points)"),
            BoundaryError::Degenerate => write!(f, "boundary encloses no area"),
            BoundaryError::AccessDenied(reason) => write!(f, "pixel access denied: {reason}"),
            BoundaryError::Image(e) => write!(f, "image error: {e}"),
            BoundaryError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for BoundaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoundaryError::Image(e) => Some(e),
            BoundaryError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for BoundaryError {
    fn from(e: image::ImageError) -> Self {
        BoundaryError::Image(e)
    }
}

impl From<std::io::Error> for BoundaryError {
    fn from(e: std::io::Error) -> Self {
        BoundaryError::Io(e)
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Where the active boundary came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryOrigin {
    Detected,
    Drawn,
    EllipseFallback,
}

/// A boundary that is always usable, tagged with its origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBoundary {
    pub polygon: Polygon,
    pub origin: BoundaryOrigin,
}

impl ResolvedBoundary {
    pub fn fallback(ellipse: &EllipseSpec) -> Self {
        Self {
            polygon: ellipse.polygon(),
            origin: BoundaryOrigin::EllipseFallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == BoundaryOrigin::EllipseFallback
    }
}

/// Accept `result` tagged as `origin`, or substitute the fallback ellipse.
pub fn resolve_boundary(
    result: Result<Polygon, BoundaryError>,
    origin: BoundaryOrigin,
    fallback: &EllipseSpec,
) -> ResolvedBoundary {
    match result {
        Ok(polygon) => {
            log::debug!("boundary {:?}: {} vertices", origin, polygon.len());
            ResolvedBoundary { polygon, origin }
        }
        Err(e) => {
            log::warn!("boundary {:?} unusable ({e}), using ellipse fallback", origin);
            ResolvedBoundary::fallback(fallback)
        }
    }
}

/// Sample `sampler` and extract a boundary, falling back to the ellipse.
pub fn detect_boundary(sampler: &dyn BorderSampler, fallback: &EllipseSpec) -> ResolvedBoundary {
    let result = sampler
        .sample()
        .and_then(|candidates| extract_boundary(&candidates));
    resolve_boundary(result, BoundaryOrigin::Detected, fallback)
}
