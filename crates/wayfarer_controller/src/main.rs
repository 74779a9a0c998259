//! Headless controller run
//!
//! Spawns one character on a flat floor, feeds a scripted input sequence
//! and prints the character state. No window, no Rapier world.

use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use wayfarer_controller::config::GroundBackend;
use wayfarer_controller::input::InputActions;
use wayfarer_controller::physics::layers::LAYER_ENVIRONMENT;
use wayfarer_controller::physics::StaticCollider;
use wayfarer_controller::{
    create_headless_app, log_info, spawn_third_person_character, ActionRegistry, ControllerConfig,
    ControllerError, ControllerPlugin, ControllerSet, LocomotionState, Player, StaticColliders,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "wayfarer_controller")]
#[command(about = "Headless third-person controller run", long_about = None)]
struct Cli {
    /// TOML config file (defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// RNG seed (footstep clip selection)
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<(), ControllerError> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ControllerConfig::load(path)?,
        None => ControllerConfig::default(),
    };
    // No physics engine here
    config.ground.backend = GroundBackend::Headless;

    println!("Starting headless controller run (seed: {}, ticks: {})", cli.seed, cli.ticks);

    let mut app = create_headless_app(cli.seed);
    app.add_plugins(ControllerPlugin::new(config))
        .add_systems(Startup, spawn_scene)
        .add_systems(PreUpdate, scripted_input.in_set(ControllerSet::InputBackend));

    for tick in 0..cli.ticks {
        app.update();

        if tick % 60 == 0 {
            let mut query = app
                .world_mut()
                .query_filtered::<(&Transform, &LocomotionState), With<Player>>();
            for (transform, state) in query.iter(app.world()) {
                println!(
                    "Tick {}: pos={:.2?} speed={:.2} blend={:.2} grounded={}",
                    tick, transform.translation, state.speed, state.animation_blend, state.grounded
                );
            }
        }
    }

    println!("Run complete!");
    Ok(())
}

fn spawn_scene(
    mut commands: Commands,
    config: Res<ControllerConfig>,
    mut colliders: ResMut<StaticColliders>,
) {
    colliders.push(StaticCollider::cuboid(
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(500.0, 0.5, 500.0),
        LAYER_ENVIRONMENT,
    ));

    let (character, rig) = spawn_third_person_character(&mut commands, &config, Vec3::ZERO);
    log_info(&format!("Spawned character {:?} with rig {:?}", character, rig));
}

/// Walk forward, sprint, strafe while turning the camera, then stop
fn scripted_input(
    mut tick: Local<u32>,
    actions: Option<Res<InputActions>>,
    mut registry: ResMut<ActionRegistry>,
) {
    let Some(actions) = actions else {
        return;
    };

    let frame = *tick;
    *tick += 1;

    let (move_value, look_value, sprint) = match frame {
        0..120 => (Vec2::Y, Vec2::ZERO, false),
        120..240 => (Vec2::Y, Vec2::ZERO, true),
        240..300 => (Vec2::X, Vec2::new(2.0, 0.0), false),
        _ => (Vec2::ZERO, Vec2::ZERO, false),
    };

    registry.write_vec2(actions.move_action, move_value);
    registry.write_vec2(actions.look_action, look_value);
    registry.write_button(actions.sprint_action, sprint);
    registry.write_button(actions.cancel_action, frame == 30);
}
