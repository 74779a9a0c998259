//! Controller configuration with TOML preset support.
//!
//! Every section uses `#[serde(default)]`, so a partial file (e.g. only
//! overriding `[camera]`) keeps defaults for everything else.

mod animator;
mod audio;
mod camera;
mod ground;
mod input;
mod locomotion;

use std::path::Path;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

pub use animator::AnimatorConfig;
pub use audio::AudioConfig;
pub use camera::CameraConfig;
pub use ground::{GroundBackend, GroundConfig};
pub use input::{InputConfig, KeyBindings};
pub use locomotion::LocomotionConfig;

use crate::error::ControllerError;
use crate::logger::LogLevel;

/// Top-level configuration container.
#[derive(Resource, Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ControllerConfig {
    /// Action names and device bindings.
    pub input: InputConfig,
    /// Speed and rotation smoothing.
    pub locomotion: LocomotionConfig,
    /// Orbital rig axes and look sensitivity.
    pub camera: CameraConfig,
    /// Animator parameter names.
    pub animator: AnimatorConfig,
    /// Ground probe.
    pub ground: GroundConfig,
    /// Footstep/landing cues.
    pub audio: AudioConfig,
    /// Initial cursor mode.
    pub cursor: CursorConfig,
    /// Logger threshold.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CursorConfig {
    /// Start with the cursor locked and hidden.
    pub start_locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// "debug" | "info" | "warning" | "error"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl ControllerConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ControllerError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ControllerError::ConfigParse(msg) => {
                ControllerError::ConfigParse(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ControllerError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ControllerError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, ControllerError> {
        toml::to_string_pretty(self).map_err(|e| ControllerError::ConfigParse(e.to_string()))
    }

    /// Reject values the per-frame update cannot run with.
    pub fn validate(&self) -> Result<(), ControllerError> {
        self.locomotion.validate()?;
        self.camera.validate()?;
        self.ground.validate()?;
        self.audio.validate()?;
        self.input.bindings.validate()?;
        self.log_level()?;
        Ok(())
    }

    /// Parsed logger threshold.
    pub fn log_level(&self) -> Result<LogLevel, ControllerError> {
        self.logging
            .level
            .parse()
            .map_err(ControllerError::InvalidConfig)
    }
}
