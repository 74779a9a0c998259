//! Input State Provider
//!
//! # Architecture
//!
//! ```text
//! Keyboard / mouse / gamepad (or host writes)
//!     ↓
//! ActionRegistry (named actions, id lookup)  - actions.rs
//!     ↓  poll_input_actions (once per frame)
//! InputState (snapshot + cancel edge)       - state.rs
//!     ↓
//! Controller systems (Res<InputState>)
//! ```
//!
//! # Module contents
//!
//! - `actions` - ActionRegistry, ActionId, edge latch
//! - `state` - InputState snapshot, startup resolution, polling
//! - `keyboard` - built-in device backend and key name parsing

pub mod actions;
pub mod keyboard;
pub mod state;

use bevy::prelude::*;

pub use actions::{ActionId, ActionKind, ActionRegistry};
pub use keyboard::{parse_key_code, DeviceBindings};
pub use state::{InputActions, InputState};

use crate::config::{ControllerConfig, InputConfig};
use crate::ControllerSet;

/// Input plugin
///
/// Inserts an ActionRegistry with the configured action names unless the
/// host already provided one.
pub struct InputStatePlugin;

impl Plugin for InputStatePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ActionRegistry>() {
            let registry = app
                .world()
                .get_resource::<ControllerConfig>()
                .map(|config| ActionRegistry::with_actions(&config.input))
                .unwrap_or_else(|| ActionRegistry::with_actions(&InputConfig::default()));
            app.insert_resource(registry);
        }

        app.init_resource::<InputState>()
            .add_systems(
                Startup,
                (state::resolve_input_actions, keyboard::init_device_bindings),
            )
            .add_systems(
                PreUpdate,
                (
                    keyboard::write_device_actions.in_set(ControllerSet::InputDevices),
                    state::poll_input_actions.in_set(ControllerSet::InputSample),
                ),
            );
    }
}
