//! Animator parameter sink
//!
//! Stand-in for the host animation graph's parameter block. Names are
//! registered once (spawn time) and mapped to dense ids; per-frame writes
//! go by id only. The host animation layer reads values back by id or name.
//!
//! Animation timeline events (footsteps, landing) arrive as
//! [`AnimationEvent`] and are consumed by the audio module.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::config::AnimatorConfig;

/// Dense parameter index (valid for the AnimatorParameters that issued it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterId(u32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorValue {
    Float(f32),
    Bool(bool),
}

/// Parameter block of one animated character
#[derive(Component, Debug, Clone, Default)]
pub struct AnimatorParameters {
    names: HashMap<String, ParameterId>,
    values: Vec<AnimatorValue>,
}

impl AnimatorParameters {
    /// Register a parameter name; registering again returns the same id
    pub fn register(&mut self, name: &str) -> ParameterId {
        if let Some(id) = self.names.get(name) {
            return *id;
        }
        let id = ParameterId(self.values.len() as u32);
        self.values.push(AnimatorValue::Float(0.0));
        self.names.insert(name.to_string(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<ParameterId> {
        self.names.get(name).copied()
    }

    pub fn set_float(&mut self, id: ParameterId, value: f32) {
        if let Some(slot) = self.values.get_mut(id.0 as usize) {
            *slot = AnimatorValue::Float(value);
        }
    }

    pub fn set_bool(&mut self, id: ParameterId, value: bool) {
        if let Some(slot) = self.values.get_mut(id.0 as usize) {
            *slot = AnimatorValue::Bool(value);
        }
    }

    pub fn value(&self, id: ParameterId) -> Option<AnimatorValue> {
        self.values.get(id.0 as usize).copied()
    }

    pub fn float(&self, id: ParameterId) -> Option<f32> {
        match self.value(id)? {
            AnimatorValue::Float(v) => Some(v),
            AnimatorValue::Bool(_) => None,
        }
    }

    pub fn bool(&self, id: ParameterId) -> Option<bool> {
        match self.value(id)? {
            AnimatorValue::Bool(v) => Some(v),
            AnimatorValue::Float(_) => None,
        }
    }

    /// Name lookup for the host side (not for per-frame controller writes)
    pub fn float_by_name(&self, name: &str) -> Option<f32> {
        self.float(self.id(name)?)
    }

    pub fn bool_by_name(&self, name: &str) -> Option<bool> {
        self.bool(self.id(name)?)
    }
}

/// Controller parameter ids, resolved once per character
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimatorIds {
    pub speed: ParameterId,
    pub motion_speed: ParameterId,
    pub grounded: ParameterId,
}

impl AnimatorIds {
    pub fn resolve(params: &mut AnimatorParameters, config: &AnimatorConfig) -> Self {
        Self {
            speed: params.register(&config.speed),
            motion_speed: params.register(&config.motion_speed),
            grounded: params.register(&config.grounded),
        }
    }
}

/// Kind of a locomotion animation event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEventKind {
    Footstep,
    Landing,
}

impl AnimationEventKind {
    /// Timeline event names as authored on the clips
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "OnFootstep" => Some(Self::Footstep),
            "OnLand" => Some(Self::Landing),
            _ => None,
        }
    }
}

/// Event: animation timeline fired a named event on `entity`
///
/// `weight` is the blend weight of the clip that fired it; events from
/// clips that are mostly blended out are ignored downstream.
#[derive(Event, Debug, Clone)]
pub struct AnimationEvent {
    pub entity: Entity,
    pub name: String,
    pub weight: f32,
}

impl AnimationEvent {
    pub fn new(entity: Entity, name: impl Into<String>, weight: f32) -> Self {
        Self {
            entity,
            name: name.into(),
            weight,
        }
    }

    pub fn kind(&self) -> Option<AnimationEventKind> {
        AnimationEventKind::from_name(&self.name)
    }
}
