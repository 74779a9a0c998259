//! Locomotion components: tuning + per-frame state

use bevy::prelude::*;

use super::facing::input_yaw;
use super::smoothing::{lerp, round_to_hundredths, smooth_damp_angle};
use crate::config::LocomotionConfig;

/// Speed gap below which smoothing snaps straight to the target (m/s)
pub const SPEED_OFFSET: f32 = 0.1;

/// Animation blend below this snaps to exactly 0
pub const BLEND_SNAP_THRESHOLD: f32 = 0.01;

/// MotionSpeed animator multiplier (constant)
pub const MOTION_SPEED: f32 = 1.0;

/// Locomotion tuning (per character)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LocomotionSettings {
    pub move_speed: f32,
    pub sprint_speed: f32,
    pub speed_change_rate: f32,
    pub rotation_smooth_time: f32,
}

impl Default for LocomotionSettings {
    fn default() -> Self {
        Self::from(&LocomotionConfig::default())
    }
}

impl From<&LocomotionConfig> for LocomotionSettings {
    fn from(config: &LocomotionConfig) -> Self {
        Self {
            move_speed: config.move_speed,
            sprint_speed: config.sprint_speed,
            speed_change_rate: config.speed_change_rate,
            rotation_smooth_time: config.rotation_smooth_time,
        }
    }
}

impl LocomotionSettings {
    /// Sprint or base speed; exactly zero input → 0 (no dead zone)
    pub fn target_speed(&self, move_input: Vec2, sprint: bool) -> f32 {
        if move_input == Vec2::ZERO {
            return 0.0;
        }
        if sprint {
            self.sprint_speed
        } else {
            self.move_speed
        }
    }
}

/// Per-frame locomotion state
///
/// Mutated once per frame by `move_character` (grounded by the ground check).
/// Never persisted.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LocomotionState {
    /// Smoothed horizontal speed (m/s), always >= 0
    pub speed: f32,
    /// Smoothed speed for the animator, always >= 0
    pub animation_blend: f32,
    /// Camera-relative target yaw (degrees); held while there is no input
    pub target_rotation: f32,
    /// Smoothing state for the facing spring (deg/s)
    pub rotation_velocity: f32,
    /// Vertical term added to every kinematic move (m/s)
    pub vertical_velocity: f32,
    pub grounded: bool,
}

impl LocomotionState {
    /// Smooth `speed` toward `target_speed`
    ///
    /// Lerps from the speed the body reports, rounded to 2 decimals, while
    /// the gap exceeds SPEED_OFFSET; inside the tolerance snaps to target.
    pub fn update_speed(&mut self, target_speed: f32, current_horizontal_speed: f32, dt: f32, rate: f32) {
        let gap = current_horizontal_speed - target_speed;
        if gap.abs() > SPEED_OFFSET {
            let smoothed = lerp(current_horizontal_speed, target_speed, dt * rate);
            self.speed = round_to_hundredths(smoothed).max(0.0);
        } else {
            self.speed = target_speed;
        }
    }

    /// Smooth the animation blend toward `target_speed`, snapping tiny values to 0
    pub fn update_animation_blend(&mut self, target_speed: f32, dt: f32, rate: f32) {
        self.animation_blend = lerp(self.animation_blend, target_speed, dt * rate);
        if self.animation_blend < BLEND_SNAP_THRESHOLD {
            self.animation_blend = 0.0;
        }
    }

    /// Recompute the target yaw from input; zero input keeps the old one
    ///
    /// Returns true if the input was nonzero (facing should turn).
    pub fn update_target_rotation(&mut self, move_input: Vec2, camera_yaw: f32) -> bool {
        if move_input == Vec2::ZERO {
            return false;
        }
        self.target_rotation = input_yaw(move_input) + camera_yaw;
        true
    }

    /// One spring step of the facing toward `target_rotation`
    pub fn smooth_facing(&mut self, current_yaw: f32, smooth_time: f32, dt: f32) -> f32 {
        smooth_damp_angle(
            current_yaw,
            self.target_rotation,
            &mut self.rotation_velocity,
            smooth_time,
            dt,
        )
    }

    /// Kinematic displacement for this frame
    pub fn displacement(&self, dt: f32) -> Vec3 {
        let direction = super::facing::yaw_direction(self.target_rotation);
        direction * (self.speed * dt) + Vec3::new(0.0, self.vertical_velocity, 0.0) * dt
    }
}
