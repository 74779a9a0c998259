use serde::{Deserialize, Serialize};

use crate::error::ControllerError;

/// Orbital rig axes and look sensitivity.
///
/// Angles are in degrees. The horizontal axis wraps, the vertical axis is
/// clamped to `vertical_range` after every increment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub sensitivity_x: f32,
    pub sensitivity_y: f32,
    pub invert_x: bool,
    pub invert_y: bool,
    /// Skip the look update entirely (rig stays where it is)
    pub lock_camera_position: bool,
    /// [min, max] of the vertical axis
    pub vertical_range: [f32; 2],
    pub start_horizontal: f32,
    pub start_vertical: f32,
    /// Orbit distance from the follow target (m)
    pub distance: f32,
    /// Height of the orbit pivot above the target origin (m)
    pub pivot_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity_x: 10.0,
            sensitivity_y: 10.0,
            invert_x: false,
            invert_y: false,
            lock_camera_position: false,
            vertical_range: [-10.0, 45.0],
            start_horizontal: 0.0,
            start_vertical: 17.5,
            distance: 4.0,
            pivot_height: 1.5,
        }
    }
}

impl CameraConfig {
    pub(crate) fn validate(&self) -> Result<(), ControllerError> {
        let [min, max] = self.vertical_range;
        if !(min.is_finite() && max.is_finite() && min <= max) {
            return Err(ControllerError::InvalidConfig(format!(
                "camera.vertical_range must be [min, max] with min <= max, got [{min}, {max}]"
            )));
        }
        if !(self.distance >= 0.0) {
            return Err(ControllerError::InvalidConfig(format!(
                "camera.distance must be non-negative, got {}",
                self.distance
            )));
        }
        Ok(())
    }
}
