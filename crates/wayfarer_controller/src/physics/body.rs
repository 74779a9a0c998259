//! Kinematic body and character spawn helper
//!
//! Architecture:
//! - Rapier for collisions (RigidBody::KinematicPositionBased)
//! - Position is moved directly each frame (no forces/impulses)
//! - PhysicsBody.velocity is what the body reports back to the controller

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::ground::{GroundCheck, GroundProbe};
use super::layers::character_groups;
use crate::animation::{AnimatorIds, AnimatorParameters};
use crate::audio::LocomotionAudio;
use crate::camera::{CameraLink, LookSettings, OrbitalRig};
use crate::config::ControllerConfig;
use crate::movement::{LocomotionSettings, LocomotionState};
use crate::player::Player;

/// Linear velocity of the character body (m/s)
///
/// Written by `apply_kinematic_move` as displacement / dt, so for a
/// kinematic body it is the velocity the body actually moved with.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    pub velocity: Vec3,
}

impl PhysicsBody {
    /// Magnitude of the XZ component
    pub fn horizontal_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }
}

/// Kinematic position move: `position += displacement`, velocity = displacement / dt
///
/// dt == 0 moves nothing and keeps the previous velocity.
pub fn apply_kinematic_move(transform: &mut Transform, body: &mut PhysicsBody, displacement: Vec3, dt: f32) {
    if dt <= 0.0 {
        return;
    }
    transform.translation += displacement;
    body.velocity = displacement / dt;
}

/// Spawn a controlled character and its orbital camera rig
///
/// Character gets:
/// - Transform + Player marker
/// - LocomotionSettings / LocomotionState / LookSettings (from config)
/// - PhysicsBody + Rapier kinematic capsule
/// - AnimatorParameters with pre-resolved AnimatorIds
/// - GroundCheck (if enabled) + LocomotionAudio (clips from config)
///
/// Returns (character, rig).
pub fn spawn_third_person_character(
    commands: &mut Commands,
    config: &ControllerConfig,
    position: Vec3,
) -> (Entity, Entity) {
    let mut animator = AnimatorParameters::default();
    let animator_ids = AnimatorIds::resolve(&mut animator, &config.animator);

    let character = commands
        .spawn((
            Transform::from_translation(position),
            Player,
            LocomotionSettings::from(&config.locomotion),
            LocomotionState::default(),
            LookSettings::from(&config.camera),
            PhysicsBody::default(),
            animator,
            animator_ids,
            LocomotionAudio::from(&config.audio),
            // Rapier
            RigidBody::KinematicPositionBased,
            // Origin at the feet: 1.8m tall, radius 0.4m
            Collider::capsule(Vec3::new(0.0, 0.4, 0.0), Vec3::new(0.0, 1.4, 0.0), 0.4),
            character_groups(),
        ))
        .id();

    if config.ground.enabled {
        commands
            .entity(character)
            .insert((GroundCheck::from(&config.ground), GroundProbe::default()));
    }

    let rig = commands
        .spawn((
            OrbitalRig::from_config(&config.camera, Some(character)),
            Transform::from_translation(position),
        ))
        .id();

    commands.entity(character).insert(CameraLink { rig });

    (character, rig)
}
