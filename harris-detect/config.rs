use harris_core::HarrisConfig;

use crate::builder::DetectorBuilder;
use crate::error::HarrisResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete detector configuration with metadata, serializable to JSON and TOML
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DetectorConfig {
    /// Metadata
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub version: Option<String>,
    /// Core Harris parameters, kept last so TOML tables follow plain keys
    pub core: HarrisConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorConfig {
    /// Create new configuration with default settings
    pub fn new() -> Self {
        Self {
            core: HarrisConfig::default(),
            name: None,
            description: None,
            version: None,
        }
    }

    /// Small window, tight suppression: many corners, fine structure
    pub fn fine_preset() -> Self {
        Self {
            core: HarrisConfig {
                sigma: 1.0,
                threshold: 10.0,
                nms_radius: 2,
                ..HarrisConfig::default()
            },
            name: Some("Fine".to_string()),
            description: Some("Small Gaussian window for dense, fine-scale corners".to_string()),
            version: Some("1.0".to_string()),
        }
    }

    /// Default parameters
    pub fn balanced_preset() -> Self {
        Self {
            core: HarrisConfig::default(),
            name: Some("Balanced".to_string()),
            description: Some("Default window and suppression radius".to_string()),
            version: Some("1.0".to_string()),
        }
    }

    /// Wide window, wide suppression: few, strong corners
    pub fn coarse_preset() -> Self {
        Self {
            core: HarrisConfig {
                sigma: 3.0,
                threshold: 100.0,
                nms_radius: 5,
                ..HarrisConfig::default()
            },
            name: Some("Coarse".to_string()),
            description: Some("Large Gaussian window for sparse, strong corners".to_string()),
            version: Some("1.0".to_string()),
        }
    }

    /// Add metadata to configuration
    pub fn with_metadata(mut self, name: &str, description: &str) -> Self {
        self.name = Some(name.to_string());
        self.description = Some(description.to_string());
        self.version = Some("1.0".to_string());
        self
    }

    /// Convert to DetectorBuilder for further customization
    pub fn to_builder(self) -> DetectorBuilder {
        DetectorBuilder::from_config(self)
    }

    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "DetectorConfig{}: sigma={}, threshold={}, nms_radius={}, alpha={}, threads={}",
            self.name.as_deref().map(|n| format!(" '{}'", n)).unwrap_or_default(),
            self.core.sigma,
            self.core.threshold,
            self.core.nms_radius,
            self.core.alpha,
            self.core.n_threads
        )
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> HarrisResult<()> {
        crate::detector::validate_config(&self.core)
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save configuration to TOML file
    #[cfg(feature = "serde")]
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Load configuration from TOML file
    #[cfg(feature = "serde")]
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Serialize to JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    #[cfg(feature = "serde")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserialize from TOML string
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
