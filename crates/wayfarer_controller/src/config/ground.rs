use serde::{Deserialize, Serialize};

use crate::error::ControllerError;
use crate::physics::layers::LAYER_ENVIRONMENT;

/// Which collision world answers the ground probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroundBackend {
    /// Rapier scene queries (host runs RapierPhysicsPlugin)
    #[default]
    Rapier,
    /// In-memory `StaticColliders` resource (headless runs, tests)
    Headless,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GroundConfig {
    pub enabled: bool,
    pub backend: GroundBackend,
    /// Probe center distance below the character origin (m)
    pub offset: f32,
    pub radius: f32,
    /// Layer bits that count as ground
    pub layer_mask: u32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backend: GroundBackend::Rapier,
            offset: 0.14,
            radius: 0.28,
            layer_mask: LAYER_ENVIRONMENT,
        }
    }
}

impl GroundConfig {
    pub(crate) fn validate(&self) -> Result<(), ControllerError> {
        if !(self.radius > 0.0) {
            return Err(ControllerError::InvalidConfig(format!(
                "ground.radius must be positive, got {}",
                self.radius
            )));
        }
        if !self.offset.is_finite() {
            return Err(ControllerError::InvalidConfig("ground.offset must be finite".into()));
        }
        Ok(())
    }
}
