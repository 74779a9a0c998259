use serde::{Deserialize, Serialize};

use crate::error::ControllerError;

/// Speed and facing tuning for the move update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Base speed (m/s)
    pub move_speed: f32,
    /// Speed while the sprint action is held (m/s)
    pub sprint_speed: f32,
    /// Exponential smoothing rate for speed and animation blend
    pub speed_change_rate: f32,
    /// Time constant of the facing smoothing (seconds)
    pub rotation_smooth_time: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            sprint_speed: 10.0,
            speed_change_rate: 10.0,
            rotation_smooth_time: 0.12,
        }
    }
}

impl LocomotionConfig {
    pub(crate) fn validate(&self) -> Result<(), ControllerError> {
        if !(self.move_speed >= 0.0 && self.sprint_speed >= 0.0) {
            return Err(ControllerError::InvalidConfig(format!(
                "locomotion speeds must be non-negative (move {}, sprint {})",
                self.move_speed, self.sprint_speed
            )));
        }
        if !(self.speed_change_rate >= 0.0) {
            return Err(ControllerError::InvalidConfig(format!(
                "locomotion.speed_change_rate must be non-negative, got {}",
                self.speed_change_rate
            )));
        }
        if !(self.rotation_smooth_time > 0.0) {
            return Err(ControllerError::InvalidConfig(format!(
                "locomotion.rotation_smooth_time must be positive, got {}",
                self.rotation_smooth_time
            )));
        }
        Ok(())
    }
}
