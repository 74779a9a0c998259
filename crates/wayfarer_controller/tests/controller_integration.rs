//! Controller integration tests
//!
//! Full plugin stack in a headless App: scripted writes into the
//! ActionRegistry, StaticColliders floor, 60 Hz manual time.

use bevy::prelude::*;

use wayfarer_controller::config::GroundBackend;
use wayfarer_controller::input::InputActions;
use wayfarer_controller::physics::layers::LAYER_ENVIRONMENT;
use wayfarer_controller::physics::StaticCollider;
use wayfarer_controller::*;

fn headless_config() -> ControllerConfig {
    let mut config = ControllerConfig::default();
    config.ground.backend = GroundBackend::Headless;
    config
}

/// App + one spawned character; Startup already ran
fn setup(config: ControllerConfig) -> (App, Entity, Entity) {
    let mut app = create_headless_app(7);
    app.add_plugins(ControllerPlugin::new(config.clone()));

    app.world_mut()
        .resource_mut::<StaticColliders>()
        .push(StaticCollider::cuboid(
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(100.0, 0.5, 100.0),
            LAYER_ENVIRONMENT,
        ));

    let (character, rig) = {
        let mut commands = app.world_mut().commands();
        spawn_third_person_character(&mut commands, &config, Vec3::ZERO)
    };
    app.world_mut().flush();

    // First frame: Startup + zero delta
    app.update();

    (app, character, rig)
}

fn actions(app: &App) -> InputActions {
    *app.world().resource::<InputActions>()
}

fn write_move(app: &mut App, value: Vec2) {
    let id = actions(app).move_action;
    app.world_mut().resource_mut::<ActionRegistry>().write_vec2(id, value);
}

fn write_look(app: &mut App, value: Vec2) {
    let id = actions(app).look_action;
    app.world_mut().resource_mut::<ActionRegistry>().write_vec2(id, value);
}

fn write_sprint(app: &mut App, pressed: bool) {
    let id = actions(app).sprint_action;
    app.world_mut().resource_mut::<ActionRegistry>().write_button(id, pressed);
}

fn write_cancel(app: &mut App, pressed: bool) {
    let id = actions(app).cancel_action;
    app.world_mut().resource_mut::<ActionRegistry>().write_button(id, pressed);
}

fn run(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

#[test]
fn test_forward_input_converges_to_move_speed() {
    let (mut app, character, _) = setup(headless_config());

    write_move(&mut app, Vec2::Y);
    run(&mut app, 120);

    let world = app.world();
    let state = world.get::<LocomotionState>(character).unwrap();
    assert_eq!(state.speed, 5.0);
    assert!((world.get::<PhysicsBody>(character).unwrap().horizontal_speed() - 5.0).abs() < 1e-3);
    assert!(state.grounded);

    // Camera yaw 0 → forward is -Z
    let position = world.get::<Transform>(character).unwrap().translation;
    assert!(position.z < -5.0);
    assert!(position.x.abs() < 1e-3);

    let animator = world.get::<AnimatorParameters>(character).unwrap();
    assert!((animator.float_by_name("Speed").unwrap() - 5.0).abs() < 0.01);
    assert_eq!(animator.float_by_name("MotionSpeed"), Some(1.0));
    assert_eq!(animator.bool_by_name("Grounded"), Some(true));
}

#[test]
fn test_sprint_converges_to_sprint_speed() {
    let (mut app, character, _) = setup(headless_config());

    write_move(&mut app, Vec2::Y);
    write_sprint(&mut app, true);
    run(&mut app, 180);

    assert_eq!(app.world().get::<LocomotionState>(character).unwrap().speed, 10.0);
}

#[test]
fn test_release_brings_speed_and_blend_to_exact_zero() {
    let (mut app, character, _) = setup(headless_config());

    write_move(&mut app, Vec2::Y);
    run(&mut app, 60);
    let rotation_while_moving = app.world().get::<Transform>(character).unwrap().rotation;

    write_move(&mut app, Vec2::ZERO);
    run(&mut app, 120);

    let world = app.world();
    let state = world.get::<LocomotionState>(character).unwrap();
    assert_eq!(state.speed, 0.0);
    assert_eq!(state.animation_blend, 0.0);
    assert_eq!(
        world.get::<AnimatorParameters>(character).unwrap().float_by_name("Speed"),
        Some(0.0)
    );
    // Facing is held without input
    let rotation = world.get::<Transform>(character).unwrap().rotation;
    assert!(rotation.angle_between(rotation_while_moving) < 1e-3);
}

#[test]
fn test_movement_is_camera_relative() {
    let (mut app, character, rig) = setup(headless_config());

    app.world_mut().get_mut::<OrbitalRig>(rig).unwrap().horizontal.value = 90.0;
    write_move(&mut app, Vec2::Y);
    run(&mut app, 60);

    // Camera yaw 90 → forward is +X
    let position = app.world().get::<Transform>(character).unwrap().translation;
    assert!(position.x > 1.0);
    assert!(position.z.abs() < 1e-2);
}

#[test]
fn test_cursor_toggles_once_per_press() {
    let (mut app, _, _) = setup(headless_config());
    assert_eq!(app.world().resource::<CursorState>().mode, CursorMode::Free);

    // Held for many frames: one toggle
    write_cancel(&mut app, true);
    run(&mut app, 10);
    let cursor = *app.world().resource::<CursorState>();
    assert_eq!(cursor.mode, CursorMode::Locked);
    assert_eq!(cursor.toggles, 1);

    write_cancel(&mut app, false);
    run(&mut app, 1);
    write_cancel(&mut app, true);
    run(&mut app, 1);

    let cursor = *app.world().resource::<CursorState>();
    assert_eq!(cursor.mode, CursorMode::Free);
    assert_eq!(cursor.toggles, 2);
}

#[test]
fn test_vertical_look_stays_clamped() {
    let (mut app, _, rig) = setup(headless_config());

    // Mouse down hard: vertical grows toward the max
    write_look(&mut app, Vec2::new(0.0, -1000.0));
    run(&mut app, 30);
    assert_eq!(app.world().get::<OrbitalRig>(rig).unwrap().vertical.value, 45.0);

    write_look(&mut app, Vec2::new(0.0, 1000.0));
    run(&mut app, 30);
    assert_eq!(app.world().get::<OrbitalRig>(rig).unwrap().vertical.value, -10.0);
}

#[test]
fn test_locked_camera_ignores_look() {
    let mut config = headless_config();
    config.camera.lock_camera_position = true;
    let (mut app, _, rig) = setup(config);

    write_look(&mut app, Vec2::new(50.0, 50.0));
    run(&mut app, 10);

    let rig = app.world().get::<OrbitalRig>(rig).unwrap();
    assert_eq!(rig.horizontal.value, 0.0);
    assert_eq!(rig.vertical.value, 17.5);
}

#[test]
fn test_rig_is_placed_behind_character() {
    let (mut app, character, rig) = setup(headless_config());

    write_move(&mut app, Vec2::Y);
    run(&mut app, 30);

    let world = app.world();
    let target = world.get::<Transform>(character).unwrap().translation;
    let camera = world.get::<Transform>(rig).unwrap();
    let pivot = target + Vec3::Y * 1.5;

    assert!((camera.translation.distance(pivot) - 4.0).abs() < 1e-3);
    // Behind (+Z side) and above the pivot
    assert!(camera.translation.z > pivot.z);
    assert!(camera.translation.y > pivot.y);
}

#[test]
fn test_missing_collaborators_do_not_panic() {
    let (mut app, _, _) = setup(headless_config());

    // No body, no rig, no animator
    let bodiless = app
        .world_mut()
        .spawn((
            Transform::default(),
            Player,
            LocomotionSettings::default(),
            LocomotionState::default(),
        ))
        .id();
    // Body but no rig/animator
    let rigless = app
        .world_mut()
        .spawn((
            Transform::from_xyz(10.0, 0.0, 0.0),
            Player,
            LocomotionSettings::default(),
            LocomotionState::default(),
            PhysicsBody::default(),
        ))
        .id();

    write_move(&mut app, Vec2::Y);
    run(&mut app, 30);

    let world = app.world();
    assert_eq!(world.get::<Transform>(bodiless).unwrap().translation, Vec3::ZERO);

    // World-relative input: forward is -Z
    let position = world.get::<Transform>(rigless).unwrap().translation;
    assert!(position.z < 0.0);
    assert!((position.x - 10.0).abs() < 1e-3);
}

#[test]
fn test_unresolved_actions_leave_input_at_defaults() {
    let mut app = create_headless_app(7);
    // Host registry without the controller actions
    app.insert_resource(ActionRegistry::default())
        .add_plugins(ControllerPlugin::new(headless_config()));

    let config = headless_config();
    let (character, _) = {
        let mut commands = app.world_mut().commands();
        spawn_third_person_character(&mut commands, &config, Vec3::ZERO)
    };
    app.world_mut().flush();

    run(&mut app, 10);

    let world = app.world();
    assert!(world.get_resource::<InputActions>().is_none());
    assert_eq!(*world.resource::<InputState>(), InputState::default());
    assert_eq!(world.get::<LocomotionState>(character).unwrap().speed, 0.0);
}

#[test]
fn test_animation_events_play_one_sound_each() {
    let mut config = headless_config();
    config.audio.footstep_clips = vec!["step_a.ogg".into(), "step_b.ogg".into()];
    config.audio.landing_clip = Some("land.ogg".into());
    let (mut app, character, _) = setup(config);

    app.world_mut().send_event(AnimationEvent::new(character, "OnFootstep", 0.9));
    // Below the blend threshold
    app.world_mut().send_event(AnimationEvent::new(character, "OnFootstep", 0.2));
    app.world_mut().send_event(AnimationEvent::new(character, "OnLand", 1.0));
    // Not ours
    app.world_mut().send_event(AnimationEvent::new(character, "OnWave", 1.0));
    app.update();

    let sounds: Vec<PlaySound> = app
        .world_mut()
        .resource_mut::<Events<PlaySound>>()
        .drain()
        .collect();

    assert_eq!(sounds.len(), 2);
    assert_eq!(sounds[0].kind, AnimationEventKind::Footstep);
    assert!(sounds[0].clip == "step_a.ogg" || sounds[0].clip == "step_b.ogg");
    assert_eq!(sounds[0].volume, 0.5);
    assert_eq!(sounds[1].kind, AnimationEventKind::Landing);
    assert_eq!(sounds[1].clip, "land.ogg");
}

/// Host writer: always pushes forward
fn host_forward(actions: Option<Res<InputActions>>, mut registry: ResMut<ActionRegistry>) {
    if let Some(actions) = actions {
        registry.write_vec2(actions.move_action, Vec2::Y);
    }
}

#[test]
fn test_device_backend_drives_input_when_keys_exist() {
    let (mut app, _, _) = setup(headless_config());

    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyD);
    app.insert_resource(keys);
    run(&mut app, 2);

    assert_eq!(app.world().resource::<InputState>().move_value(), Vec2::X);
}

#[test]
fn test_host_writes_win_over_device_backend() {
    let (mut app, character, _) = setup(headless_config());
    app.add_systems(PreUpdate, host_forward.in_set(ControllerSet::InputBackend));

    // Keyboard present but idle: device backend writes zeros every frame
    app.insert_resource(ButtonInput::<KeyCode>::default());
    run(&mut app, 60);

    assert_eq!(app.world().resource::<InputState>().move_value(), Vec2::Y);
    assert!(app.world().get::<LocomotionState>(character).unwrap().speed > 0.0);
}
