//! Run configuration for a sketch
//!
//! Loaded from JSON so headless runs can be reproduced exactly. Every field
//! has a default, so a config file only needs the values it changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

/// Canvas and timing settings for one sketch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Target frames per second
    pub frame_rate: f64,
    /// Anti-aliasing on or off
    pub smooth: bool,
    /// Seed for `random`; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Seed for `noise`; `None` uses the default field
    pub noise_seed: Option<u64>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            frame_rate: 60.0,
            smooth: true,
            seed: None,
            noise_seed: None,
        }
    }
}

impl SketchConfig {
    /// Load config from a JSON file
    ///
    /// # Errors
    /// Returns error if file cannot be read, parsed, or fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        let config: Self =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;

        config.validate()?;
        info!("Loaded sketch config from {}", path.display());
        Ok(config)
    }

    /// Save config to a JSON file
    ///
    /// # Errors
    /// Returns error if file cannot be written or config cannot be serialized
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeFailed(e.to_string()))?;

        let path = path.as_ref();
        fs::write(path, contents).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        info!("Saved sketch config to {}", path.display());
        Ok(())
    }

    /// Check the values a runner relies on
    ///
    /// # Errors
    /// Returns error if the canvas is empty or the frame rate is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "frame rate must be positive, got {}",
                self.frame_rate
            )));
        }
        Ok(())
    }
}

/// Errors that can occur while loading or saving a config
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load from file
    LoadFailed(String),
    /// Failed to save to file
    SaveFailed(String),
    /// Failed to parse file contents
    ParseFailed(String),
    /// Failed to serialize config
    SerializeFailed(String),
    /// Values out of range
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed(e) => write!(f, "Failed to load config: {e}"),
            ConfigError::SaveFailed(e) => write!(f, "Failed to save config: {e}"),
            ConfigError::ParseFailed(e) => write!(f, "Failed to parse config: {e}"),
            ConfigError::SerializeFailed(e) => write!(f, "Failed to serialize config: {e}"),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
