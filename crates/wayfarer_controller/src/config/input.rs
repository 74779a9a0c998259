use serde::{Deserialize, Serialize};

use crate::error::ControllerError;
use crate::input::keyboard::parse_key_code;

/// Logical action names looked up in the action registry at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub move_action: String,
    pub look_action: String,
    pub jump_action: String,
    pub sprint_action: String,
    pub cancel_action: String,
    pub bindings: KeyBindings,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_action: "Move".into(),
            look_action: "Look".into(),
            jump_action: "Jump".into(),
            sprint_action: "Sprint".into(),
            cancel_action: "Cancel".into(),
            bindings: KeyBindings::default(),
        }
    }
}

/// Keyboard/mouse/gamepad bindings for the built-in device backend.
///
/// Keys are named after Bevy's `KeyCode` variants ("KeyW", "ShiftLeft", ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Vec<String>,
    pub back: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub jump: Vec<String>,
    pub sprint: Vec<String>,
    pub cancel: Vec<String>,
    /// Mouse delta multiplier for the look action
    pub mouse_look_scale: f32,
    /// Right stick multiplier for the look action
    pub gamepad_look_scale: f32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec!["KeyW".into(), "ArrowUp".into()],
            back: vec!["KeyS".into(), "ArrowDown".into()],
            left: vec!["KeyA".into(), "ArrowLeft".into()],
            right: vec!["KeyD".into(), "ArrowRight".into()],
            jump: vec!["Space".into()],
            sprint: vec!["ShiftLeft".into()],
            cancel: vec!["Escape".into()],
            mouse_look_scale: 1.0,
            gamepad_look_scale: 10.0,
        }
    }
}

impl KeyBindings {
    pub(crate) fn validate(&self) -> Result<(), ControllerError> {
        let all = [
            &self.forward,
            &self.back,
            &self.left,
            &self.right,
            &self.jump,
            &self.sprint,
            &self.cancel,
        ];
        for name in all.into_iter().flatten() {
            if parse_key_code(name).is_none() {
                return Err(ControllerError::UnknownKey(name.clone()));
            }
        }
        Ok(())
    }
}
