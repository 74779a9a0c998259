//! Player control marker component

use bevy::prelude::Component;

/// Marker for the character driven by InputState
///
/// Move and look systems use `With<Player>`; characters without it are left
/// for other controllers (AI, cutscenes).
///
/// # Possession
/// ```ignore
/// commands.entity(old_character).remove::<Player>();
/// commands.entity(new_character).insert(Player);
/// ```
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
