//! Orbital rig components
//!
//! The rig lives on its own entity (the camera). The controller only
//! nudges its two axes; placement follows from the axes every frame.

use bevy::prelude::*;

use crate::config::CameraConfig;
use crate::movement::{wrap_degrees, yaw_direction};

/// One rig axis (degrees)
///
/// Wrapping axes loop over [range.x, range.y); clamped axes are
/// re-clamped after every increment.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct AxisState {
    pub value: f32,
    /// (min, max)
    pub range: Vec2,
    pub wrap: bool,
}

impl AxisState {
    pub fn wrapping(value: f32) -> Self {
        Self {
            value: wrap_degrees(value),
            range: Vec2::new(-180.0, 180.0),
            wrap: true,
        }
    }

    pub fn clamped(value: f32, min: f32, max: f32) -> Self {
        Self {
            value: value.clamp(min, max),
            range: Vec2::new(min, max),
            wrap: false,
        }
    }

    /// Add a delta; non-finite deltas are ignored
    pub fn add(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        if self.wrap {
            self.value = wrap_degrees(self.value + delta);
        } else {
            self.value = (self.value + delta).clamp(self.range.x, self.range.y);
        }
    }
}

/// Orbital follow rig
///
/// - `horizontal`: yaw around the target, wraps
/// - `vertical`: elevation, clamped to its configured range
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct OrbitalRig {
    pub horizontal: AxisState,
    pub vertical: AxisState,
    pub distance: f32,
    pub pivot_height: f32,
    /// Entity the rig orbits (None → rig stays where it is)
    pub target: Option<Entity>,
}

impl Default for OrbitalRig {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), None)
    }
}

impl OrbitalRig {
    pub fn from_config(config: &CameraConfig, target: Option<Entity>) -> Self {
        let [min, max] = config.vertical_range;
        Self {
            horizontal: AxisState::wrapping(config.start_horizontal),
            vertical: AxisState::clamped(config.start_vertical, min, max),
            distance: config.distance,
            pivot_height: config.pivot_height,
            target,
        }
    }

    /// Yaw the camera looks along (degrees, same convention as the character)
    pub fn yaw_degrees(&self) -> f32 {
        self.horizontal.value
    }

    /// Camera position for a target origin
    ///
    /// The camera sits behind the pivot along the rig yaw and is raised by
    /// the vertical angle.
    pub fn camera_position(&self, target_origin: Vec3) -> Vec3 {
        let pivot = self.pivot(target_origin);
        let elevation = self.vertical.value.to_radians();
        let back = -yaw_direction(self.yaw_degrees()) * elevation.cos();
        pivot + (back + Vec3::Y * elevation.sin()) * self.distance
    }

    pub fn pivot(&self, target_origin: Vec3) -> Vec3 {
        target_origin + Vec3::Y * self.pivot_height
    }
}

/// Link from a character to its camera rig (optional)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraLink {
    pub rig: Entity,
}

/// Look tuning (per character)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LookSettings {
    pub sensitivity_x: f32,
    pub sensitivity_y: f32,
    pub invert_x: bool,
    pub invert_y: bool,
    /// Skip the look update (rig axes stay put)
    pub lock_camera_position: bool,
}

impl Default for LookSettings {
    fn default() -> Self {
        Self::from(&CameraConfig::default())
    }
}

impl From<&CameraConfig> for LookSettings {
    fn from(config: &CameraConfig) -> Self {
        Self {
            sensitivity_x: config.sensitivity_x,
            sensitivity_y: config.sensitivity_y,
            invert_x: config.invert_x,
            invert_y: config.invert_y,
            lock_camera_position: config.lock_camera_position,
        }
    }
}
