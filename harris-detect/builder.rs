use harris_core::HarrisConfig;

use crate::config::DetectorConfig;
use crate::detector::HarrisDetector;
use crate::error::HarrisResult;

/// Builder for creating a [`HarrisDetector`]
#[derive(Debug, Clone, Default)]
pub struct DetectorBuilder {
    config: HarrisConfig,
}

impl DetectorBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Gaussian window standard deviation
    pub fn sigma(mut self, sigma: f32) -> Self {
        self.config.sigma = sigma;
        self
    }

    /// Set the minimum suppressed response for a corner
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Set the non-max suppression half-width
    pub fn nms_radius(mut self, radius: usize) -> Self {
        self.config.nms_radius = radius;
        self
    }

    /// Set the trace penalty of the cornerness measure
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Set the number of threads for parallel processing
    pub fn threads(mut self, n_threads: usize) -> Self {
        self.config.n_threads = n_threads;
        self
    }

    /// Use one thread per logical CPU
    pub fn threads_auto(mut self) -> Self {
        self.config.n_threads = num_cpus::get().max(1);
        self
    }

    /// Apply the fine preset
    pub fn preset_fine(self) -> Self {
        self.with_preset(DetectorConfig::fine_preset())
    }

    /// Apply the balanced preset
    pub fn preset_balanced(self) -> Self {
        self.with_preset(DetectorConfig::balanced_preset())
    }

    /// Apply the coarse preset
    pub fn preset_coarse(self) -> Self {
        self.with_preset(DetectorConfig::coarse_preset())
    }

    // Presets leave the thread count alone.
    fn with_preset(mut self, preset: DetectorConfig) -> Self {
        let n_threads = self.config.n_threads;
        self.config = HarrisConfig {
            n_threads,
            ..preset.core
        };
        self
    }

    /// Create builder from an existing configuration
    pub fn from_config(config: DetectorConfig) -> Self {
        Self { config: config.core }
    }

    /// Convert to a [`DetectorConfig`] without metadata
    pub fn to_config(self) -> DetectorConfig {
        DetectorConfig {
            core: self.config,
            ..DetectorConfig::new()
        }
    }

    /// Human-readable summary of the pending configuration
    pub fn summary(&self) -> String {
        format!(
            "DetectorBuilder: sigma={}, threshold={}, nms_radius={}, alpha={}, threads={}",
            self.config.sigma,
            self.config.threshold,
            self.config.nms_radius,
            self.config.alpha,
            self.config.n_threads
        )
    }

    /// Validate the parameters and build the detector
    pub fn build(self) -> HarrisResult<HarrisDetector> {
        HarrisDetector::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarrisError;

    #[test]
    fn test_builder_setters() {
        let detector = DetectorBuilder::new()
            .sigma(1.5)
            .threshold(5.0)
            .nms_radius(4)
            .alpha(0.05)
            .threads(2)
            .build()
            .unwrap();
        let cfg = detector.config();
        assert_eq!(cfg.sigma, 1.5);
        assert_eq!(cfg.threshold, 5.0);
        assert_eq!(cfg.nms_radius, 4);
        assert_eq!(cfg.alpha, 0.05);
        assert_eq!(cfg.n_threads, 2);
    }

    #[test]
    fn test_build_validates() {
        let err = DetectorBuilder::new().nms_radius(0).build().unwrap_err();
        assert_eq!(err, HarrisError::InvalidNmsRadius(0));
    }

    #[test]
    fn test_preset_keeps_threads() {
        let builder = DetectorBuilder::new().threads(3).preset_coarse();
        let cfg = builder.to_config();
        assert_eq!(cfg.core.n_threads, 3);
        assert_eq!(cfg.core.sigma, DetectorConfig::coarse_preset().core.sigma);
        assert_eq!(cfg.core.nms_radius, 5);
    }

    #[test]
    fn test_config_round_trip() {
        let original = DetectorConfig::fine_preset();
        let back = original.clone().to_builder().to_config();
        assert_eq!(back.core, original.core);
        assert!(back.name.is_none());
    }

    #[test]
    fn test_summary_reflects_settings() {
        let summary = DetectorBuilder::new().sigma(4.0).summary();
        assert!(summary.contains("sigma=4"));
    }
}
