pub mod color;
pub mod error;
pub mod image;
pub mod resize;

pub use error::{ImageError, ImageResult};
pub use image::PixelBuffer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate of a detected feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Local appearance vector around a point.
///
/// `values` holds `patch_size² * channels` samples, channel-major, then
/// row-major, then column within the patch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Descriptor {
    pub location: Point,
    pub values: Vec<f32>,
}

impl Descriptor {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Harris detection parameters shared by every front end
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HarrisConfig {
    /// Std. dev. of the Gaussian window weighting the structure matrix
    pub sigma: f32,
    /// A corner must have a suppressed response strictly above this
    pub threshold: f32,
    /// Half-width of the non-max suppression window
    pub nms_radius: usize,
    /// Trace penalty in `det - alpha * trace²`
    pub alpha: f32,
    pub n_threads: usize,
}

impl Default for HarrisConfig {
    fn default() -> Self {
        Self {
            sigma: 2.0,
            threshold: 50.0,
            nms_radius: 3,
            alpha: 0.06,
            n_threads: num_cpus::get().max(1),
        }
    }
}

/// Initialize Rayon thread pool with the specified number of threads
pub fn init_thread_pool(n_threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = HarrisConfig::default();
        assert_eq!(cfg.sigma, 2.0);
        assert_eq!(cfg.nms_radius, 3);
        assert_eq!(cfg.alpha, 0.06);
        assert!(cfg.n_threads >= 1);
    }

    #[test]
    fn test_descriptor_len() {
        let d = Descriptor {
            location: Point::new(3, 4),
            values: vec![0.0; 25],
        };
        assert_eq!(d.len(), 25);
        assert!(!d.is_empty());
    }
}
