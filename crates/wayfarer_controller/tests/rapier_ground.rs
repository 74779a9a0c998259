//! Ground check against a real Rapier world
//!
//! MinimalPlugins + TransformPlugin + RapierPhysicsPlugin, default (Rapier)
//! ground backend, character spawned with its kinematic capsule.

use bevy::prelude::*;
use bevy::transform::TransformPlugin;
use bevy_rapier3d::prelude::*;

use wayfarer_controller::physics::layers::{LAYER_ENVIRONMENT, LAYER_TRIGGERS};
use wayfarer_controller::physics::{environment_groups, GroundProbe};
use wayfarer_controller::*;

/// Floor (top face at y = 0) + character standing on it, after a few frames
fn run_on_floor(floor: impl Bundle) -> (App, Entity) {
    let config = ControllerConfig::default();

    let mut app = create_headless_app(3);
    app.add_plugins((
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default(),
        ControllerPlugin::new(config.clone()),
    ));

    app.world_mut().spawn((
        Transform::from_xyz(0.0, -0.5, 0.0),
        Collider::cuboid(50.0, 0.5, 50.0),
        floor,
    ));
    let (character, _) = {
        let mut commands = app.world_mut().commands();
        spawn_third_person_character(&mut commands, &config, Vec3::ZERO)
    };
    app.world_mut().flush();

    // Colliders reach the query pipeline after the first physics step
    for _ in 0..5 {
        app.update();
    }

    (app, character)
}

/// (grounded, probe hit)
fn grounded_on(floor: impl Bundle) -> (bool, bool) {
    let (app, character) = run_on_floor(floor);
    let world = app.world();
    let grounded = world.get::<LocomotionState>(character).unwrap().grounded;
    let probe_hit = world.get::<GroundProbe>(character).unwrap().hit;
    (grounded, probe_hit)
}

#[test]
fn test_solid_environment_floor_is_ground() {
    let (grounded, probe_hit) = grounded_on(environment_groups());

    assert!(grounded);
    assert!(probe_hit);
}

#[test]
fn test_sensor_floor_is_not_ground() {
    let (grounded, _) = grounded_on((environment_groups(), Sensor));

    assert!(!grounded);
}

#[test]
fn test_floor_on_other_layer_is_not_ground() {
    let groups = CollisionGroups::new(Group::from_bits_truncate(LAYER_TRIGGERS), Group::ALL);
    let (grounded, _) = grounded_on(groups);

    assert!(!grounded);
    // Same floor moved onto the environment layer counts again
    let groups = CollisionGroups::new(Group::from_bits_truncate(LAYER_ENVIRONMENT), Group::ALL);
    assert!(grounded_on(groups).0);
}

#[test]
fn test_grounded_flag_reaches_animator() {
    let (app, character) = run_on_floor(environment_groups());

    let animator = app.world().get::<AnimatorParameters>(character).unwrap();
    assert_eq!(animator.bool_by_name("Grounded"), Some(true));
}
