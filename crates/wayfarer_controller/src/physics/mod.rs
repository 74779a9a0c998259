//! Physics seams: kinematic body, collision layers, ground check
//!
//! No physics engine lives here. Rapier (or the headless StaticColliders)
//! answers queries; the controller only moves the body kinematically.

pub mod body;
pub mod ground;
pub mod layers;


use bevy::prelude::*;

pub use body::{apply_kinematic_move, spawn_third_person_character, PhysicsBody};
pub use layers::{character_groups, environment_groups};
pub use ground::{
    GroundCheck, GroundProbe, SphereOverlap, StaticCollider, StaticColliders, StaticShape,
};

use crate::config::{ControllerConfig, GroundBackend};
use crate::logger;
use crate::ControllerSet;

/// Ground check plugin
///
/// Backend is picked from `ControllerConfig.ground.backend`.
pub struct GroundCheckPlugin;

impl Plugin for GroundCheckPlugin {
    fn build(&self, app: &mut App) {
        let ground = app
            .world()
            .get_resource::<ControllerConfig>()
            .map(|config| config.ground.clone())
            .unwrap_or_default();

        if !ground.enabled {
            return;
        }

        logger::log_info(&format!(
            "Ground check: {:?} backend, mask {} ({})",
            ground.backend,
            ground.layer_mask,
            layers::layer_name(ground.layer_mask)
        ));

        app.register_type::<GroundCheck>();
        match ground.backend {
            GroundBackend::Rapier => {
                app.add_systems(Update, ground::detect_ground_rapier.in_set(ControllerSet::Ground));
            }
            GroundBackend::Headless => {
                app.init_resource::<StaticColliders>().add_systems(
                    Update,
                    ground::detect_ground_headless.in_set(ControllerSet::Ground),
                );
            }
        }
    }
}
