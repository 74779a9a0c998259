//! Look update (PostUpdate, after movement and physics)

use bevy::prelude::*;

use super::rig::{CameraLink, LookSettings, OrbitalRig};
use crate::input::InputState;
use crate::player::Player;

/// Apply one frame of look input to a rig
///
/// Horizontal: `+x * sens_x * dt` (negated when inverted), wrapped.
/// Vertical: `-y * sens_y * dt` (positive when inverted), clamped.
pub fn apply_look_input(rig: &mut OrbitalRig, look: Vec2, settings: &LookSettings, dt: f32) {
    let dx = look.x * settings.sensitivity_x * dt;
    rig.horizontal.add(if settings.invert_x { -dx } else { dx });

    let dy = look.y * settings.sensitivity_y * dt;
    rig.vertical.add(if settings.invert_y { dy } else { -dy });
}

/// Player look system
///
/// Missing rig or locked camera → no-op for that character.
pub fn apply_camera_look(
    time: Res<Time>,
    input: Res<InputState>,
    characters: Query<(&LookSettings, &CameraLink), With<Player>>,
    mut rigs: Query<&mut OrbitalRig>,
) {
    let dt = time.delta_secs();
    let look = input.look_value();

    for (settings, link) in characters.iter() {
        if settings.lock_camera_position {
            continue;
        }
        let Ok(mut rig) = rigs.get_mut(link.rig) else {
            continue;
        };
        apply_look_input(&mut rig, look, settings, dt);
    }
}

/// Place rig transforms from their axes (before transform propagation)
pub fn place_camera_rigs(
    mut rigs: Query<(&OrbitalRig, &mut Transform)>,
    targets: Query<&Transform, Without<OrbitalRig>>,
) {
    for (rig, mut transform) in rigs.iter_mut() {
        let Some(target) = rig.target.and_then(|entity| targets.get(entity).ok()) else {
            continue;
        };

        let pivot = rig.pivot(target.translation);
        let position = rig.camera_position(target.translation);
        *transform = Transform::from_translation(position).looking_at(pivot, Vec3::Y);
    }
}
