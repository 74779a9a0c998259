//! Camera domain: orbital rig axes + look input
//!
//! The rig is the host camera's handle: two angular axes, the vertical one
//! clamped. Rendering/cameras themselves are the host's business.

pub mod look;
pub mod rig;


use bevy::prelude::*;
use bevy::transform::TransformSystem;

pub use look::{apply_camera_look, apply_look_input, place_camera_rigs};
pub use rig::{AxisState, CameraLink, LookSettings, OrbitalRig};

use crate::ControllerSet;

/// Camera look plugin
///
/// Look runs late (PostUpdate) so it sees this frame's movement; rig
/// placement runs right after, before transforms propagate.
pub struct CameraLookPlugin;

impl Plugin for CameraLookPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<OrbitalRig>()
            .register_type::<LookSettings>()
            .add_systems(
                PostUpdate,
                (apply_camera_look, place_camera_rigs)
                    .chain()
                    .in_set(ControllerSet::Look)
                    .before(TransformSystem::TransformPropagate),
            );
    }
}
