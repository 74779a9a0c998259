//! Device backend: keyboard + mouse + first gamepad → ActionRegistry
//!
//! Runs in PreUpdate after Bevy's InputSystem and before host writers
//! (`ControllerSet::InputBackend`), so host values win within a frame.
//! Every device resource is optional, so headless apps (MinimalPlugins,
//! no InputPlugin) skip it.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use super::actions::ActionRegistry;
use super::state::InputActions;
use crate::config::{ControllerConfig, KeyBindings};

const KEY_NAMES: &[(&str, KeyCode)] = &[
    ("KeyA", KeyCode::KeyA),
    ("KeyB", KeyCode::KeyB),
    ("KeyC", KeyCode::KeyC),
    ("KeyD", KeyCode::KeyD),
    ("KeyE", KeyCode::KeyE),
    ("KeyF", KeyCode::KeyF),
    ("KeyG", KeyCode::KeyG),
    ("KeyH", KeyCode::KeyH),
    ("KeyI", KeyCode::KeyI),
    ("KeyJ", KeyCode::KeyJ),
    ("KeyK", KeyCode::KeyK),
    ("KeyL", KeyCode::KeyL),
    ("KeyM", KeyCode::KeyM),
    ("KeyN", KeyCode::KeyN),
    ("KeyO", KeyCode::KeyO),
    ("KeyP", KeyCode::KeyP),
    ("KeyQ", KeyCode::KeyQ),
    ("KeyR", KeyCode::KeyR),
    ("KeyS", KeyCode::KeyS),
    ("KeyT", KeyCode::KeyT),
    ("KeyU", KeyCode::KeyU),
    ("KeyV", KeyCode::KeyV),
    ("KeyW", KeyCode::KeyW),
    ("KeyX", KeyCode::KeyX),
    ("KeyY", KeyCode::KeyY),
    ("KeyZ", KeyCode::KeyZ),
    ("Digit0", KeyCode::Digit0),
    ("Digit1", KeyCode::Digit1),
    ("Digit2", KeyCode::Digit2),
    ("Digit3", KeyCode::Digit3),
    ("Digit4", KeyCode::Digit4),
    ("Digit5", KeyCode::Digit5),
    ("Digit6", KeyCode::Digit6),
    ("Digit7", KeyCode::Digit7),
    ("Digit8", KeyCode::Digit8),
    ("Digit9", KeyCode::Digit9),
    ("ArrowUp", KeyCode::ArrowUp),
    ("ArrowDown", KeyCode::ArrowDown),
    ("ArrowLeft", KeyCode::ArrowLeft),
    ("ArrowRight", KeyCode::ArrowRight),
    ("Space", KeyCode::Space),
    ("Escape", KeyCode::Escape),
    ("Tab", KeyCode::Tab),
    ("Enter", KeyCode::Enter),
    ("Backspace", KeyCode::Backspace),
    ("CapsLock", KeyCode::CapsLock),
    ("ShiftLeft", KeyCode::ShiftLeft),
    ("ShiftRight", KeyCode::ShiftRight),
    ("ControlLeft", KeyCode::ControlLeft),
    ("ControlRight", KeyCode::ControlRight),
    ("AltLeft", KeyCode::AltLeft),
    ("AltRight", KeyCode::AltRight),
    ("F1", KeyCode::F1),
    ("F2", KeyCode::F2),
    ("F3", KeyCode::F3),
    ("F4", KeyCode::F4),
    ("F5", KeyCode::F5),
    ("F6", KeyCode::F6),
    ("F7", KeyCode::F7),
    ("F8", KeyCode::F8),
    ("F9", KeyCode::F9),
    ("F10", KeyCode::F10),
    ("F11", KeyCode::F11),
    ("F12", KeyCode::F12),
];

/// Key name ("KeyW", "ShiftLeft", ...) → KeyCode
pub fn parse_key_code(name: &str) -> Option<KeyCode> {
    KEY_NAMES
        .iter()
        .find(|(key_name, _)| *key_name == name)
        .map(|(_, code)| *code)
}

/// Bindings parsed once (names validated by ControllerConfig::validate)
#[derive(Resource, Debug, Clone, Default)]
pub struct DeviceBindings {
    forward: Vec<KeyCode>,
    back: Vec<KeyCode>,
    left: Vec<KeyCode>,
    right: Vec<KeyCode>,
    jump: Vec<KeyCode>,
    sprint: Vec<KeyCode>,
    cancel: Vec<KeyCode>,
    mouse_look_scale: f32,
    gamepad_look_scale: f32,
}

impl DeviceBindings {
    pub fn from_config(bindings: &KeyBindings) -> Self {
        let parse = |names: &[String]| -> Vec<KeyCode> {
            names.iter().filter_map(|name| parse_key_code(name)).collect()
        };
        Self {
            forward: parse(&bindings.forward),
            back: parse(&bindings.back),
            left: parse(&bindings.left),
            right: parse(&bindings.right),
            jump: parse(&bindings.jump),
            sprint: parse(&bindings.sprint),
            cancel: parse(&bindings.cancel),
            mouse_look_scale: bindings.mouse_look_scale,
            gamepad_look_scale: bindings.gamepad_look_scale,
        }
    }

    /// WASD → move vector (x right, y forward), normalized so diagonals aren't faster
    pub fn keyboard_move(&self, keys: &ButtonInput<KeyCode>) -> Vec2 {
        let held = |codes: &[KeyCode]| keys.any_pressed(codes.iter().copied());

        let mut direction = Vec2::ZERO;
        if held(&self.forward) {
            direction.y += 1.0;
        }
        if held(&self.back) {
            direction.y -= 1.0;
        }
        if held(&self.right) {
            direction.x += 1.0;
        }
        if held(&self.left) {
            direction.x -= 1.0;
        }
        direction.normalize_or_zero()
    }
}

/// Startup: parse key bindings from config
pub fn init_device_bindings(mut commands: Commands, config: Option<Res<ControllerConfig>>) {
    let bindings = config
        .map(|config| DeviceBindings::from_config(&config.input.bindings))
        .unwrap_or_else(|| DeviceBindings::from_config(&KeyBindings::default()));
    commands.insert_resource(bindings);
}

/// PreUpdate: write device state into the action registry
///
/// Keyboard move wins over the left stick; buttons are OR-ed across devices;
/// look = mouse delta (y flipped so "up" is positive) + right stick.
pub fn write_device_actions(
    bindings: Option<Res<DeviceBindings>>,
    actions: Option<Res<InputActions>>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse_motion: Option<Res<AccumulatedMouseMotion>>,
    gamepads: Query<&Gamepad>,
    mut registry: ResMut<ActionRegistry>,
) {
    let (Some(bindings), Some(actions)) = (bindings, actions) else {
        return;
    };

    // Guard: no device at all (headless) → leave values to the host
    let gamepad = gamepads.iter().next();
    if keys.is_none() && mouse_motion.is_none() && gamepad.is_none() {
        return;
    }

    let mut move_value = Vec2::ZERO;
    let mut look_value = Vec2::ZERO;
    let mut jump = false;
    let mut sprint = false;
    let mut cancel = false;

    if let Some(keys) = keys.as_deref() {
        move_value = bindings.keyboard_move(keys);
        jump |= keys.any_pressed(bindings.jump.iter().copied());
        sprint |= keys.any_pressed(bindings.sprint.iter().copied());
        cancel |= keys.any_pressed(bindings.cancel.iter().copied());
    }

    if let Some(motion) = mouse_motion.as_deref() {
        look_value += Vec2::new(motion.delta.x, -motion.delta.y) * bindings.mouse_look_scale;
    }

    if let Some(gamepad) = gamepad {
        if move_value == Vec2::ZERO {
            move_value = gamepad.left_stick();
        }
        look_value += gamepad.right_stick() * bindings.gamepad_look_scale;
        jump |= gamepad.pressed(GamepadButton::South);
        sprint |= gamepad.pressed(GamepadButton::LeftThumb);
        cancel |= gamepad.pressed(GamepadButton::Start);
    }

    registry.write_vec2(actions.move_action, move_value);
    registry.write_vec2(actions.look_action, look_value);
    registry.write_button(actions.jump_action, jump);
    registry.write_button(actions.sprint_action, sprint);
    registry.write_button(actions.cancel_action, cancel);
}
