//! InputState: the per-frame input snapshot
//!
//! Architecture:
//! - ActionRegistry holds raw values (written by device backend / host)
//! - poll_input_actions copies them into InputState exactly once per frame
//! - Controller systems read `Res<InputState>` (never the registry)

use bevy::prelude::*;

use super::actions::{ActionId, ActionRegistry};
use crate::config::{ControllerConfig, InputConfig};
use crate::error::ControllerError;
use crate::logger;

/// Ids of the controller actions, resolved once at startup
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputActions {
    pub move_action: ActionId,
    pub look_action: ActionId,
    pub jump_action: ActionId,
    pub sprint_action: ActionId,
    pub cancel_action: ActionId,
}

impl InputActions {
    pub fn resolve(registry: &ActionRegistry, config: &InputConfig) -> Result<Self, ControllerError> {
        Ok(Self {
            move_action: registry.resolve(&config.move_action)?,
            look_action: registry.resolve(&config.look_action)?,
            jump_action: registry.resolve(&config.jump_action)?,
            sprint_action: registry.resolve(&config.sprint_action)?,
            cancel_action: registry.resolve(&config.cancel_action)?,
        })
    }
}

/// Latest input values (read-only for consumers)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    move_value: Vec2,
    look_value: Vec2,
    jump: bool,
    sprint: bool,
    cancel: bool,
    cancel_pressed: bool,
}

impl InputState {
    /// Read every action once from the registry
    pub fn sample(registry: &ActionRegistry, actions: &InputActions) -> Self {
        Self {
            move_value: registry.read_vec2(actions.move_action),
            look_value: registry.read_vec2(actions.look_action),
            jump: registry.read_analog(actions.jump_action) > 0.0,
            sprint: registry.read_analog(actions.sprint_action) > 0.0,
            cancel: registry.read_analog(actions.cancel_action) > 0.0,
            cancel_pressed: registry.was_pressed_this_frame(actions.cancel_action),
        }
    }

    pub fn move_value(&self) -> Vec2 {
        self.move_value
    }

    pub fn look_value(&self) -> Vec2 {
        self.look_value
    }

    pub fn jump(&self) -> bool {
        self.jump
    }

    pub fn sprint(&self) -> bool {
        self.sprint
    }

    pub fn cancel(&self) -> bool {
        self.cancel
    }

    /// true only on the tick the cancel input went from released to pressed
    pub fn cancel_pressed_this_frame(&self) -> bool {
        self.cancel_pressed
    }
}

/// Startup: resolve configured action names
///
/// Unresolved names are reported once here. Without InputActions the
/// snapshot simply stays at its default (no input) every frame.
pub fn resolve_input_actions(
    mut commands: Commands,
    registry: Res<ActionRegistry>,
    config: Option<Res<ControllerConfig>>,
) {
    let default_input = InputConfig::default();
    let input = config.as_deref().map_or(&default_input, |config| &config.input);

    match InputActions::resolve(&registry, input) {
        Ok(actions) => {
            logger::log_info(&format!(
                "Input actions resolved ({} registered)",
                registry.len()
            ));
            commands.insert_resource(actions);
        }
        Err(err) => {
            logger::log_error(&format!("Input disabled: {err}"));
        }
    }
}

/// PreUpdate: refresh the snapshot, then latch values for edge detection
pub fn poll_input_actions(
    mut registry: ResMut<ActionRegistry>,
    actions: Option<Res<InputActions>>,
    mut state: ResMut<InputState>,
) {
    let Some(actions) = actions else {
        return;
    };

    *state = InputState::sample(&registry, &actions);
    registry.latch();
}
