//! Border Sampling
//!
//! The pixel-access side of boundary detection lives behind the
//! [`BorderSampler`] capability so extraction stays testable without any
//! image decoding or rendering surface.

use std::path::Path;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use super::BoundaryError;
use crate::geometry::{CANVAS_SIZE, Point};

/// Produces candidate border points in canvas coordinates.
pub trait BorderSampler {
    fn sample(&self) -> Result<Vec<Point>, BoundaryError>;
}

/// Pre-sampled candidates pass straight through.
impl BorderSampler for Vec<Point> {
    fn sample(&self) -> Result<Vec<Point>, BoundaryError> {
        Ok(self.clone())
    }
}

// ============================================================================
// BRIGHTNESS THRESHOLD
// ============================================================================

/// A pixel belongs to the border when every color channel exceeds
/// `min_channel` and alpha exceeds `min_alpha` (strict comparisons).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessThreshold {
    pub min_channel: u8,
    pub min_alpha: u8,
}

impl BrightnessThreshold {
    pub fn is_border(&self, pixel: &Rgba<u8>) -> bool {
        let [r, g, b, a] = pixel.0;
        r > self.min_channel && g > self.min_channel && b > self.min_channel && a > self.min_alpha
    }
}

impl Default for BrightnessThreshold {
    fn default() -> Self {
        Self {
            min_channel: 240,
            min_alpha: 200,
        }
    }
}

// ============================================================================
// IMAGE SAMPLER
// ============================================================================

/// Scans an arena screenshot for near-white border pixels.
///
/// Every `step`-th pixel on both axes is tested. Hits are mapped onto the
/// square canvas with an independent linear scale per axis, so non-square
/// screenshots are stretched to fit.
pub struct ImageBorderSampler {
    image: RgbaImage,
    threshold: BrightnessThreshold,
    step: u32,
    canvas_size: f64,
}

impl ImageBorderSampler {
    /// Pixel stride of the scan.
    pub const DEFAULT_STEP: u32 = 2;

    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            threshold: BrightnessThreshold::default(),
            step: Self::DEFAULT_STEP,
            canvas_size: CANVAS_SIZE,
        }
    }

    /// Decode a PNG or JPEG screenshot from disk.
    pub fn open(path: &Path) -> Result<Self, BoundaryError> {
        let img = image::open(path)?;
        log::debug!(
            "border sampler: loaded {}x{} image from {:?}",
            img.width(),
            img.height(),
            path.file_name().unwrap_or_default()
        );
        Ok(Self::new(img.to_rgba8()))
    }

    /// Decode an in-memory PNG or JPEG.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BoundaryError> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::new(img.to_rgba8()))
    }

    pub fn with_threshold(mut self, threshold: BrightnessThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Stride is clamped to at least one pixel.
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step.max(1);
        self
    }

    pub fn with_canvas_size(mut self, canvas_size: f64) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

impl BorderSampler for ImageBorderSampler {
    fn sample(&self) -> Result<Vec<Point>, BoundaryError> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Ok(Vec::new());
        }

        let scale_x = self.canvas_size / width as f64;
        let scale_y = self.canvas_size / height as f64;
        let step = self.step as usize;

        let mut points = Vec::new();
        for y in (0..height).step_by(step) {
            for x in (0..width).step_by(step) {
                if self.threshold.is_border(self.image.get_pixel(x, y)) {
                    points.push(Point::new(x as f64 * scale_x, y as f64 * scale_y));
                }
            }
        }

        log::debug!(
            "border sampler: {} border pixels in {}x{} image (step {})",
            points.len(),
            width,
            height,
            self.step
        );
        Ok(points)
    }
}
