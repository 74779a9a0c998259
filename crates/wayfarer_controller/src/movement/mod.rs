//! Locomotion domain: speed/blend smoothing, camera-relative facing, kinematic move
//!
//! Contents:
//! - LocomotionSettings / LocomotionState (components.rs)
//! - yaw conventions (facing.rs)
//! - lerp / smooth_damp helpers (smoothing.rs)
//! - move_character system (systems.rs)

pub mod components;
pub mod facing;
pub mod smoothing;
pub mod systems;


use bevy::prelude::*;

pub use components::{
    LocomotionSettings, LocomotionState, BLEND_SNAP_THRESHOLD, MOTION_SPEED, SPEED_OFFSET,
};
pub use facing::{input_yaw, yaw_direction, yaw_of, yaw_rotation};
pub use smoothing::{delta_angle, lerp, round_to_hundredths, smooth_damp, smooth_damp_angle, wrap_degrees};
pub use systems::move_character;

use crate::ControllerSet;

/// Locomotion plugin (move update, once per frame)
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<LocomotionSettings>()
            .register_type::<LocomotionState>()
            .add_systems(Update, move_character.in_set(ControllerSet::Locomotion));
    }
}
