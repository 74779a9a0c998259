use serde::{Deserialize, Serialize};

use crate::error::ControllerError;

/// Footstep/landing cue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Events at or below this blend weight are ignored
    pub weight_threshold: f32,
    pub volume: f32,
    /// Asset paths, one picked at random per footstep
    pub footstep_clips: Vec<String>,
    pub landing_clip: Option<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            weight_threshold: 0.5,
            volume: 0.5,
            footstep_clips: Vec::new(),
            landing_clip: None,
        }
    }
}

impl AudioConfig {
    pub(crate) fn validate(&self) -> Result<(), ControllerError> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ControllerError::InvalidConfig(format!(
                "audio.volume must be within [0, 1], got {}",
                self.volume
            )));
        }
        Ok(())
    }
}
