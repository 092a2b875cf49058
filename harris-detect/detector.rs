use harris_core::{Descriptor, HarrisConfig, PixelBuffer, Point};
use log::debug;
use rayon::prelude::*;

use crate::cornerness::{cornerness_response, DEFAULT_ALPHA};
use crate::descriptor::describe_points;
use crate::error::{HarrisError, HarrisResult};
use crate::nms::non_max_suppression;
use crate::structure::structure_matrix;

/// Check the parameters a detector is built from
pub fn validate_config(cfg: &HarrisConfig) -> HarrisResult<()> {
    if !cfg.sigma.is_finite() || cfg.sigma <= 0.0 {
        return Err(HarrisError::InvalidSigma(cfg.sigma));
    }
    if cfg.nms_radius < 1 {
        return Err(HarrisError::InvalidNmsRadius(cfg.nms_radius));
    }
    if !cfg.threshold.is_finite() {
        return Err(HarrisError::InvalidThreshold(cfg.threshold));
    }
    if !cfg.alpha.is_finite() || cfg.alpha < 0.0 {
        return Err(HarrisError::InvalidAlpha(cfg.alpha));
    }
    if cfg.n_threads == 0 {
        return Err(HarrisError::InvalidThreadCount(cfg.n_threads));
    }
    Ok(())
}

/// Pixels whose suppressed response is strictly above `threshold`, in
/// row-major order
pub fn collect_corners(suppressed: &PixelBuffer, threshold: f32) -> Vec<Point> {
    let w = suppressed.width();
    suppressed
        .plane(0)
        .par_chunks(w)
        .enumerate()
        .flat_map_iter(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(move |&(_, &r)| r > threshold)
                .map(move |(x, _)| Point::new(x, y))
        })
        .collect()
}

/// Harris corner detector with validated parameters
#[derive(Debug, Clone)]
pub struct HarrisDetector {
    cfg: HarrisConfig,
}

impl HarrisDetector {
    /// Creates a new detector with validation
    pub fn new(cfg: HarrisConfig) -> HarrisResult<Self> {
        validate_config(&cfg)?;
        Ok(Self { cfg })
    }

    /// Weighted second-moment matrix of `image`
    pub fn structure_matrix(&self, image: &PixelBuffer) -> PixelBuffer {
        structure_matrix(image, self.cfg.sigma)
    }

    /// Raw cornerness map, before suppression
    pub fn response_map(&self, image: &PixelBuffer) -> PixelBuffer {
        let s = self.structure_matrix(image);
        cornerness_response(&s, self.cfg.alpha)
    }

    /// Cornerness map with non-maxima suppressed
    pub fn suppressed_response(&self, image: &PixelBuffer) -> PixelBuffer {
        let response = self.response_map(image);
        non_max_suppression(&response, self.cfg.nms_radius)
    }

    /// Corner locations in row-major order
    pub fn detect_points(&self, image: &PixelBuffer) -> Vec<Point> {
        let suppressed = self.suppressed_response(image);
        let points = collect_corners(&suppressed, self.cfg.threshold);
        debug!(
            "{} corners above {} in {}x{} image",
            points.len(),
            self.cfg.threshold,
            image.width(),
            image.height()
        );
        points
    }

    /// Detect corners and describe each one, in row-major order
    pub fn detect_corners(&self, image: &PixelBuffer) -> Vec<Descriptor> {
        let points = self.detect_points(image);
        describe_points(image, &points)
    }

    /// Get detector configuration
    pub fn config(&self) -> &HarrisConfig {
        &self.cfg
    }
}

/// One-shot detection with the default alpha.
///
/// `threshold` must be finite: at `-inf` every suppressed pixel would pass.
///
/// # Panics
/// If `sigma <= 0` or `nms_radius < 1`, and in debug builds if `threshold`
/// is not finite.
pub fn harris_corner_detector(image: &PixelBuffer, sigma: f32, threshold: f32, nms_radius: usize) -> Vec<Descriptor> {
    debug_assert!(threshold.is_finite(), "threshold must be finite, got {}", threshold);
    let s = structure_matrix(image, sigma);
    let response = cornerness_response(&s, DEFAULT_ALPHA);
    let suppressed = non_max_suppression(&response, nms_radius);
    let points = collect_corners(&suppressed, threshold);
    describe_points(image, &points)
}
