//! Footstep / landing cues
//!
//! Architecture:
//! - Host animation layer emits AnimationEvent ("OnFootstep" / "OnLand")
//! - play_locomotion_audio filters by blend weight and picks the clip
//! - Host audio consumes PlaySound (one-shot, spatial at `position`)
//!
//! No voice management, pooling or interruption.

use bevy::prelude::*;
use rand::Rng;

use crate::animation::{AnimationEvent, AnimationEventKind};
use crate::config::AudioConfig;
use crate::{ControllerSet, DeterministicRng};

/// Clip pool of one character
#[derive(Component, Debug, Clone, PartialEq)]
pub struct LocomotionAudio {
    pub footstep_clips: Vec<String>,
    pub landing_clip: Option<String>,
    pub volume: f32,
    /// Events must be strictly heavier than this to play
    pub weight_threshold: f32,
}

impl Default for LocomotionAudio {
    fn default() -> Self {
        Self::from(&AudioConfig::default())
    }
}

impl From<&AudioConfig> for LocomotionAudio {
    fn from(config: &AudioConfig) -> Self {
        Self {
            footstep_clips: config.footstep_clips.clone(),
            landing_clip: config.landing_clip.clone(),
            volume: config.volume,
            weight_threshold: config.weight_threshold,
        }
    }
}

impl LocomotionAudio {
    /// Clip to play for an event, or None if it doesn't qualify
    ///
    /// Footsteps: uniform pick from the pool. Landing: the fixed clip.
    pub fn select_clip(&self, kind: AnimationEventKind, weight: f32, rng: &mut impl Rng) -> Option<&str> {
        // NaN weights never play
        if !(weight > self.weight_threshold) {
            return None;
        }
        match kind {
            AnimationEventKind::Footstep => {
                if self.footstep_clips.is_empty() {
                    return None;
                }
                let index = rng.gen_range(0..self.footstep_clips.len());
                Some(self.footstep_clips[index].as_str())
            }
            AnimationEventKind::Landing => self.landing_clip.as_deref(),
        }
    }
}

/// Request: play `clip` once at `position`
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlaySound {
    pub entity: Entity,
    pub kind: AnimationEventKind,
    pub clip: String,
    pub position: Vec3,
    pub volume: f32,
}

/// Turn qualifying animation events into exactly one PlaySound each
pub fn play_locomotion_audio(
    mut events: EventReader<AnimationEvent>,
    emitters: Query<(&LocomotionAudio, &Transform)>,
    mut rng: ResMut<DeterministicRng>,
    mut sounds: EventWriter<PlaySound>,
) {
    for event in events.read() {
        let Some(kind) = event.kind() else {
            continue;
        };
        // Guard: entity without a clip pool
        let Ok((audio, transform)) = emitters.get(event.entity) else {
            continue;
        };
        let Some(clip) = audio.select_clip(kind, event.weight, &mut rng.rng) else {
            continue;
        };

        sounds.write(PlaySound {
            entity: event.entity,
            kind,
            clip: clip.to_string(),
            position: transform.translation,
            volume: audio.volume,
        });
    }
}

/// Locomotion audio plugin
pub struct LocomotionAudioPlugin;

impl Plugin for LocomotionAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AnimationEvent>()
            .add_event::<PlaySound>()
            .add_systems(Update, play_locomotion_audio.in_set(ControllerSet::Audio));
    }
}
