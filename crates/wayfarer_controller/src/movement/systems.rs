//! Move update
//!
//! Runs once per frame (Update), independent of the physics tick rate.
//! Query: With<Player> (the single InputState drives player characters only).

use bevy::prelude::*;

use super::components::{LocomotionSettings, LocomotionState, MOTION_SPEED};
use super::facing::{yaw_of, yaw_rotation};
use crate::animation::{AnimatorIds, AnimatorParameters};
use crate::camera::{CameraLink, OrbitalRig};
use crate::input::InputState;
use crate::logger;
use crate::physics::{apply_kinematic_move, PhysicsBody};
use crate::player::Player;

type CharacterQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static LocomotionSettings,
        &'static mut LocomotionState,
        &'static mut Transform,
        Option<&'static mut PhysicsBody>,
        Option<&'static CameraLink>,
        Option<(&'static AnimatorIds, &'static mut AnimatorParameters)>,
    ),
    With<Player>,
>;

/// Player move system
///
/// # Steps
/// 1. Target speed (sprint/base, 0 without input)
/// 2. Speed smoothing from the body's horizontal speed
/// 3. Animation blend smoothing
/// 4. Camera-relative facing (only with input)
/// 5. Kinematic move (facing * speed + vertical term)
/// 6. Animator parameters
///
/// # Degradation
/// - No PhysicsBody → whole move is skipped this frame
/// - No rig → camera yaw 0 (world-relative input)
/// - No animator → parameters are not pushed
pub fn move_character(
    time: Res<Time>,
    input: Res<InputState>,
    rigs: Query<&OrbitalRig>,
    mut characters: CharacterQuery,
    mut warned_missing_rig: Local<bool>,
) {
    let dt = time.delta_secs();
    let move_input = input.move_value();

    for (entity, settings, mut state, mut transform, body, link, animator) in characters.iter_mut() {
        // Guard: no body to move
        let Some(mut body) = body else {
            continue;
        };

        let target_speed = settings.target_speed(move_input, input.sprint());
        state.update_speed(target_speed, body.horizontal_speed(), dt, settings.speed_change_rate);
        state.update_animation_blend(target_speed, dt, settings.speed_change_rate);

        let camera_yaw = match link.and_then(|link| rigs.get(link.rig).ok()) {
            Some(rig) => rig.yaw_degrees(),
            None => {
                if !*warned_missing_rig {
                    logger::log_warning(&format!(
                        "Character {:?} has no camera rig: input is world-relative",
                        entity
                    ));
                    *warned_missing_rig = true;
                }
                0.0
            }
        };

        if state.update_target_rotation(move_input, camera_yaw) {
            let yaw = state.smooth_facing(yaw_of(&transform), settings.rotation_smooth_time, dt);
            transform.rotation = yaw_rotation(yaw);
        }

        let displacement = state.displacement(dt);
        apply_kinematic_move(&mut transform, &mut body, displacement, dt);

        if let Some((ids, mut params)) = animator {
            params.set_float(ids.speed, state.animation_blend);
            params.set_float(ids.motion_speed, MOTION_SPEED);
        }
    }
}
