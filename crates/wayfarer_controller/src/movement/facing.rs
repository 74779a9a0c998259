//! Yaw conventions
//!
//! Yaw in degrees, 0 = world -Z (Bevy forward), +90 = +X (turning right).
//! Move input: x = right, y = forward.

use bevy::prelude::*;

/// World direction for a yaw
pub fn yaw_direction(yaw_degrees: f32) -> Vec3 {
    let yaw = yaw_degrees.to_radians();
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Rotation about +Y that faces `yaw_degrees`
pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(-yaw_degrees.to_radians())
}

/// Current yaw of a transform, in (-180, 180]
pub fn yaw_of(transform: &Transform) -> f32 {
    let forward = transform.rotation * Vec3::NEG_Z;
    forward.x.atan2(-forward.z).to_degrees()
}

/// Input direction as a yaw relative to the camera
pub fn input_yaw(move_input: Vec2) -> f32 {
    move_input.x.atan2(move_input.y).to_degrees()
}
