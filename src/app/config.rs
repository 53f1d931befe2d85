//! Configuration Management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Denoiser settings
    pub denoise: DenoiseConfig,
    /// Velocity estimation settings
    pub velocity: VelocityConfig,
    /// Hysteresis segmentation settings
    pub segmentation: SegmentationConfig,
    /// Post filtering settings
    pub post_filter: PostFilterConfig,
}

/// Denoiser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenoiseConfig {
    /// First-order roughness weight
    pub alpha: f64,
    /// Third-order roughness weight
    pub beta: f64,
    /// IRLS iteration cap
    pub max_iterations: usize,
    /// Relative elementwise convergence tolerance
    pub convergence_tolerance: f64,
}

/// Velocity estimation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelocityConfig {
    /// Pixel-to-angle scale (pixels per degree of visual angle)
    pub pixels_per_degree: f64,
}

/// Hysteresis segmentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Saccade onset threshold (deg/s); must not be below the offset threshold
    pub onset_velocity: f64,
    /// Saccade offset threshold (deg/s)
    pub offset_velocity: f64,
}

/// Post filtering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostFilterConfig {
    /// Minimum saccade duration (seconds)
    pub min_saccade_duration_s: f64,
    /// Minimum gap between accepted events (seconds)
    pub min_intersaccadic_interval_s: f64,
    /// Physiological peak velocity cap (deg/s)
    pub max_velocity: f64,
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            max_iterations: 100,
            convergence_tolerance: 1e-6,
        }
    }
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            pixels_per_degree: 10.0,
        }
    }
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            onset_velocity: 30.0,
            offset_velocity: 10.0,
        }
    }
}

impl Default for PostFilterConfig {
    fn default() -> Self {
        Self {
            min_saccade_duration_s: 0.02,
            min_intersaccadic_interval_s: 0.04,
            max_velocity: 1000.0,
        }
    }
}

fn require_finite(section: &str, field: &str, value: f64) -> Result<(), crate::Error> {
    if !value.is_finite() {
        return Err(crate::Error::Config(format!(
            "{section}.{field} must be finite, got {value}"
        )));
    }
    Ok(())
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        require_finite("denoise", "alpha", self.denoise.alpha)?;
        if self.denoise.alpha < 0.0 {
            return Err(crate::Error::Config(format!(
                "denoise.alpha must be non-negative, got {}",
                self.denoise.alpha
            )));
        }
        require_finite("denoise", "beta", self.denoise.beta)?;
        if self.denoise.beta < 0.0 {
            return Err(crate::Error::Config(format!(
                "denoise.beta must be non-negative, got {}",
                self.denoise.beta
            )));
        }
        if self.denoise.max_iterations == 0 {
            return Err(crate::Error::Config(
                "denoise.max_iterations must be > 0".to_string(),
            ));
        }
        require_finite(
            "denoise",
            "convergence_tolerance",
            self.denoise.convergence_tolerance,
        )?;
        if self.denoise.convergence_tolerance <= 0.0 {
            return Err(crate::Error::Config(format!(
                "denoise.convergence_tolerance must be positive, got {}",
                self.denoise.convergence_tolerance
            )));
        }

        require_finite("velocity", "pixels_per_degree", self.velocity.pixels_per_degree)?;
        if self.velocity.pixels_per_degree <= 0.0 {
            return Err(crate::Error::Config(format!(
                "velocity.pixels_per_degree must be positive, got {}",
                self.velocity.pixels_per_degree
            )));
        }

        require_finite("segmentation", "onset_velocity", self.segmentation.onset_velocity)?;
        require_finite(
            "segmentation",
            "offset_velocity",
            self.segmentation.offset_velocity,
        )?;
        if self.segmentation.onset_velocity <= 0.0 {
            return Err(crate::Error::Config(format!(
                "segmentation.onset_velocity must be positive, got {}",
                self.segmentation.onset_velocity
            )));
        }
        if self.segmentation.offset_velocity <= 0.0 {
            return Err(crate::Error::Config(format!(
                "segmentation.offset_velocity must be positive, got {}",
                self.segmentation.offset_velocity
            )));
        }
        if self.segmentation.offset_velocity > self.segmentation.onset_velocity {
            return Err(crate::Error::Config(format!(
                "segmentation.offset_velocity ({}) must not exceed onset_velocity ({})",
                self.segmentation.offset_velocity, self.segmentation.onset_velocity
            )));
        }

        require_finite(
            "post_filter",
            "min_saccade_duration_s",
            self.post_filter.min_saccade_duration_s,
        )?;
        if self.post_filter.min_saccade_duration_s < 0.0 {
            return Err(crate::Error::Config(format!(
                "post_filter.min_saccade_duration_s must be non-negative, got {}",
                self.post_filter.min_saccade_duration_s
            )));
        }
        require_finite(
            "post_filter",
            "min_intersaccadic_interval_s",
            self.post_filter.min_intersaccadic_interval_s,
        )?;
        if self.post_filter.min_intersaccadic_interval_s < 0.0 {
            return Err(crate::Error::Config(format!(
                "post_filter.min_intersaccadic_interval_s must be non-negative, got {}",
                self.post_filter.min_intersaccadic_interval_s
            )));
        }
        require_finite("post_filter", "max_velocity", self.post_filter.max_velocity)?;
        if self.post_filter.max_velocity <= 0.0 {
            return Err(crate::Error::Config(format!(
                "post_filter.max_velocity must be positive, got {}",
                self.post_filter.max_velocity
            )));
        }

        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".saccade_detector").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.denoise.max_iterations, 100);
        assert_eq!(config.segmentation.onset_velocity, 30.0);
        assert_eq!(config.post_filter.max_velocity, 1000.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[denoise]"));
        assert!(toml.contains("[velocity]"));
        assert!(toml.contains("[segmentation]"));
        assert!(toml.contains("[post_filter]"));
    }

    #[test]
    fn test_config_roundtrip_serialization() {
        let original = Config::default();
        let toml_str = original.to_toml().unwrap();
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");

        assert_eq!(original.denoise.alpha, deserialized.denoise.alpha);
        assert_eq!(
            original.segmentation.offset_velocity,
            deserialized.segmentation.offset_velocity
        );
        assert_eq!(
            original.post_filter.min_saccade_duration_s,
            deserialized.post_filter.min_saccade_duration_s
        );
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("test_config.toml");

        let mut original = Config::default();
        original.denoise.alpha = 2.5;
        original.segmentation.onset_velocity = 45.0;
        original.post_filter.max_velocity = 800.0;

        original.save(&config_path).expect("Failed to save config");
        assert!(config_path.exists());

        let loaded = Config::load(&config_path).expect("Failed to load config");
        assert_eq!(loaded.denoise.alpha, 2.5);
        assert_eq!(loaded.segmentation.onset_velocity, 45.0);
        assert_eq!(loaded.post_filter.max_velocity, 800.0);
    }

    #[test]
    fn test_config_save_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let nested_path = temp_dir.path().join("nested").join("path").join("config.toml");

        let config = Config::default();
        config.save(&nested_path).expect("Failed to save config");

        assert!(nested_path.exists());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let nonexistent_path = PathBuf::from("/tmp/nonexistent_saccade_config_12345.toml");
        let result = Config::load(&nonexistent_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path();
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_validate_negative_alpha() {
        let mut config = Config::default();
        config.denoise.alpha = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_beta() {
        let mut config = Config::default();
        config.denoise.beta = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let mut config = Config::default();
        config.denoise.max_iterations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nonpositive_tolerance() {
        let mut config = Config::default();
        config.denoise.convergence_tolerance = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_pixels_per_degree() {
        let mut config = Config::default();
        config.velocity.pixels_per_degree = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_onset() {
        let mut config = Config::default();
        config.segmentation.onset_velocity = -30.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_offset_above_onset() {
        let mut config = Config::default();
        config.segmentation.onset_velocity = 20.0;
        config.segmentation.offset_velocity = 25.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_duration() {
        let mut config = Config::default();
        config.post_filter.min_saccade_duration_s = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_interval() {
        let mut config = Config::default();
        config.post_filter.min_intersaccadic_interval_s = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_max_velocity() {
        let mut config = Config::default();
        config.post_filter.max_velocity = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_boundary_values() {
        let mut config = Config::default();
        // Zero roughness weights are degenerate but valid
        config.denoise.alpha = 0.0;
        config.denoise.beta = 0.0;
        assert!(config.validate().is_ok());
        // Equal thresholds collapse the hysteresis band but stay valid
        config.segmentation.onset_velocity = 30.0;
        config.segmentation.offset_velocity = 30.0;
        assert!(config.validate().is_ok());
        // Zero durations disable the corresponding filters
        config.post_filter.min_saccade_duration_s = 0.0;
        config.post_filter.min_intersaccadic_interval_s = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("bad_config.toml");
        std::fs::write(
            &config_path,
            r#"
[denoise]
alpha = 1.0
beta = 1.0
max_iterations = 100
convergence_tolerance = 1e-6

[velocity]
pixels_per_degree = 0.0

[segmentation]
onset_velocity = 30.0
offset_velocity = 10.0

[post_filter]
min_saccade_duration_s = 0.02
min_intersaccadic_interval_s = 0.04
max_velocity = 1000.0
"#,
        )
        .expect("Failed to write config");
        let result = Config::load(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_parsing() {
        let invalid_toml = "this is not valid toml {{{}}}";
        let result: Result<Config, _> = toml::from_str(invalid_toml);
        assert!(result.is_err());
    }
}
