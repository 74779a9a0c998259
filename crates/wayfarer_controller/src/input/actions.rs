//! Action registry: named logical actions resolved once to integer ids
//!
//! Device backends (or the host) write raw values by id, the input
//! provider reads them back once per frame. Names are only touched at
//! registration/resolution time.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::config::InputConfig;
use crate::error::ControllerError;

/// Index of a registered action (valid only for the registry that issued it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(u32);

impl ActionId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Value shape of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// 2D vector (stick, WASD, mouse delta)
    Axis2d,
    /// Analog scalar/button (trigger, key)
    Button,
}

#[derive(Debug, Clone)]
struct ActionSlot {
    name: String,
    kind: ActionKind,
    current: Vec2,
    /// Value at the last sample (for edge detection)
    previous: Vec2,
}

impl ActionSlot {
    fn analog(kind: ActionKind, value: Vec2) -> f32 {
        match kind {
            ActionKind::Axis2d => value.length(),
            ActionKind::Button => value.x,
        }
    }
}

/// Registry of logical input actions
///
/// # Edge detection
/// `latch()` runs once per frame right after the input provider sampled the
/// registry, so `was_pressed_this_frame` compares against what the previous
/// sample saw, no matter when writers wrote in between.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActionRegistry {
    slots: Vec<ActionSlot>,
    by_name: HashMap<String, ActionId>,
}

impl ActionRegistry {
    /// Registry with the five controller actions named in `config`
    pub fn with_actions(config: &InputConfig) -> Self {
        let mut registry = Self::default();
        registry.register(&config.move_action, ActionKind::Axis2d);
        registry.register(&config.look_action, ActionKind::Axis2d);
        registry.register(&config.jump_action, ActionKind::Button);
        registry.register(&config.sprint_action, ActionKind::Button);
        registry.register(&config.cancel_action, ActionKind::Button);
        registry
    }

    /// Register an action; re-registering a name returns the existing id
    pub fn register(&mut self, name: &str, kind: ActionKind) -> ActionId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }

        let id = ActionId(self.slots.len() as u32);
        self.slots.push(ActionSlot {
            name: name.to_string(),
            kind,
            current: Vec2::ZERO,
            previous: Vec2::ZERO,
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn resolve(&self, name: &str) -> Result<ActionId, ControllerError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ControllerError::UnresolvedAction(name.to_string()))
    }

    pub fn name(&self, id: ActionId) -> Option<&str> {
        self.slots.get(id.index()).map(|slot| slot.name.as_str())
    }

    pub fn kind(&self, id: ActionId) -> Option<ActionKind> {
        self.slots.get(id.index()).map(|slot| slot.kind)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn write_vec2(&mut self, id: ActionId, value: Vec2) {
        if let Some(slot) = self.slots.get_mut(id.index()) {
            slot.current = value;
        }
    }

    pub fn write_analog(&mut self, id: ActionId, value: f32) {
        self.write_vec2(id, Vec2::new(value, 0.0));
    }

    pub fn write_button(&mut self, id: ActionId, pressed: bool) {
        self.write_analog(id, if pressed { 1.0 } else { 0.0 });
    }

    pub fn read_vec2(&self, id: ActionId) -> Vec2 {
        self.slots
            .get(id.index())
            .map(|slot| slot.current)
            .unwrap_or(Vec2::ZERO)
    }

    /// Scalar value: x for buttons, magnitude for 2D actions
    pub fn read_analog(&self, id: ActionId) -> f32 {
        self.slots
            .get(id.index())
            .map(|slot| ActionSlot::analog(slot.kind, slot.current))
            .unwrap_or(0.0)
    }

    /// true only on the sample where the value went from <= 0 to > 0
    pub fn was_pressed_this_frame(&self, id: ActionId) -> bool {
        self.slots.get(id.index()).is_some_and(|slot| {
            ActionSlot::analog(slot.kind, slot.current) > 0.0
                && ActionSlot::analog(slot.kind, slot.previous) <= 0.0
        })
    }

    /// Remember current values as "previous" for the next edge check
    pub fn latch(&mut self) {
        for slot in &mut self.slots {
            slot.previous = slot.current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = ActionRegistry::default();
        let a = registry.register("Jump", ActionKind::Button);
        let b = registry.register("Jump", ActionKind::Button);
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.name(a), Some("Jump"));
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        let registry = ActionRegistry::with_actions(&InputConfig::default());
        assert!(registry.resolve("Move").is_ok());
        assert!(registry.resolve("Sprint").is_ok());

        let err = registry.resolve("Crouch").unwrap_err();
        assert!(matches!(err, ControllerError::UnresolvedAction(name) if name == "Crouch"));
    }

    #[test]
    fn test_button_edge_fires_once_per_press() {
        let mut registry = ActionRegistry::default();
        let cancel = registry.register("Cancel", ActionKind::Button);

        let mut edges = 0;
        // press held 3 samples, released 2, pressed again 1
        for pressed in [true, true, true, false, false, true] {
            registry.write_button(cancel, pressed);
            if registry.was_pressed_this_frame(cancel) {
                edges += 1;
            }
            registry.latch();
        }

        assert_eq!(edges, 2);
    }

    #[test]
    fn test_axis_analog_is_magnitude() {
        let mut registry = ActionRegistry::default();
        let look = registry.register("Look", ActionKind::Axis2d);
        registry.write_vec2(look, Vec2::new(3.0, 4.0));
        assert_eq!(registry.read_analog(look), 5.0);
        assert_eq!(registry.read_vec2(look), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_foreign_id_reads_zero() {
        let mut big = ActionRegistry::default();
        big.register("A", ActionKind::Button);
        let foreign = big.register("B", ActionKind::Button);

        let mut small = ActionRegistry::default();
        small.register("A", ActionKind::Button);
        small.write_button(foreign, true);

        assert_eq!(small.read_analog(foreign), 0.0);
        assert!(!small.was_pressed_this_frame(foreign));
    }
}
