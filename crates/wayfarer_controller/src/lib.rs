//! WAYFARER Controller Core
//!
//! Third-person locomotion + orbital camera look on Bevy 0.16 ECS.
//!
//! Frame order (one `App::update()` = one tick):
//! - PreUpdate: device backend → host writers → InputState snapshot
//! - Update: cursor toggle → ground check → move → audio cues
//! - PostUpdate: camera look → rig placement
//!
//! Physics, animation, audio playback and rendering belong to the host;
//! the controller talks to them through components, resources and events.

use std::time::Duration;

use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Public modules
pub mod animation;
pub mod audio;
pub mod camera;
pub mod config;
pub mod cursor;
pub mod error;
pub mod input;
pub mod logger;
pub mod movement;
pub mod physics;
pub mod player;

// Re-exports for convenience
pub use animation::{AnimationEvent, AnimationEventKind, AnimatorIds, AnimatorParameters, ParameterId};
pub use audio::{LocomotionAudio, LocomotionAudioPlugin, PlaySound};
pub use camera::{CameraLink, CameraLookPlugin, LookSettings, OrbitalRig};
pub use config::ControllerConfig;
pub use cursor::{CursorMode, CursorPlugin, CursorState};
pub use error::ControllerError;
pub use input::{ActionRegistry, InputState, InputStatePlugin};
pub use logger::{log, log_error, log_info, log_warning};
pub use movement::{LocomotionPlugin, LocomotionSettings, LocomotionState};
pub use physics::{spawn_third_person_character, GroundCheckPlugin, PhysicsBody, StaticColliders};
pub use player::Player;

/// Frame phases of the controller
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// PreUpdate: built-in keyboard/mouse/gamepad backend writes the ActionRegistry
    InputDevices,
    /// PreUpdate: host writers (scripts, replays, network); overwrite device values
    InputBackend,
    /// PreUpdate: InputState snapshot refresh
    InputSample,
    /// Update: cursor toggle on cancel
    Cursor,
    /// Update: ground probe
    Ground,
    /// Update: move update
    Locomotion,
    /// Update: footstep/landing cues
    Audio,
    /// PostUpdate: camera look
    Look,
}

/// Main controller plugin (all subsystems)
///
/// Inserts its config as a resource unless the host already provided one.
#[derive(Default)]
pub struct ControllerPlugin {
    pub config: ControllerConfig,
}

impl ControllerPlugin {
    pub fn new(config: ControllerConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ControllerPlugin {
    fn build(&self, app: &mut App) {
        logger::init_logger();

        if !app.world().contains_resource::<ControllerConfig>() {
            app.insert_resource(self.config.clone());
        }
        let level = app
            .world()
            .resource::<ControllerConfig>()
            .log_level()
            .unwrap_or(logger::LogLevel::Info);
        logger::set_log_level(level);

        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.configure_sets(
            PreUpdate,
            (
                ControllerSet::InputDevices,
                ControllerSet::InputBackend,
                ControllerSet::InputSample,
            )
                .chain()
                .after(InputSystem),
        )
        .configure_sets(
            Update,
            (
                ControllerSet::Cursor,
                ControllerSet::Ground,
                ControllerSet::Locomotion,
                ControllerSet::Audio,
            )
                .chain(),
        )
        .add_plugins((
            InputStatePlugin,
            CursorPlugin,
            GroundCheckPlugin,
            LocomotionPlugin,
            CameraLookPlugin,
            LocomotionAudioPlugin,
        ));
    }
}

/// Seeded RNG (footstep clip selection is its only consumer)
///
/// Movement and look never draw from it, so a seed only changes which
/// footstep clip plays.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Fixed frame time of headless apps (60 Hz)
pub const HEADLESS_FRAME_TIME: Duration = Duration::from_nanos(16_666_667);

/// Minimal Bevy App for headless runs
///
/// Every `update()` advances time by exactly HEADLESS_FRAME_TIME.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(HEADLESS_FRAME_TIME));

    app
}

/// Debug-formatted bytes of every `T`, ordered by entity
///
/// Two runs with the same seed and scripted input must give equal
/// snapshots of LocomotionState, Transform and OrbitalRig.
pub fn world_snapshot<T: Component + std::fmt::Debug>(world: &mut World) -> Vec<u8> {
    let mut query = world.query::<(Entity, &T)>();
    let mut rows: Vec<(Entity, String)> = query
        .iter(world)
        .map(|(entity, component)| (entity, format!("{component:?}")))
        .collect();
    rows.sort_by_key(|(entity, _)| *entity);

    rows.into_iter()
        .flat_map(|(entity, text)| {
            let mut row = entity.index().to_le_bytes().to_vec();
            row.extend(text.into_bytes());
            row
        })
        .collect()
}
