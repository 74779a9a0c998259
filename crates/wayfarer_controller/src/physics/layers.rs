//! Collision layer constants
//!
//! ## Architecture:
//! - **Layers (bitmask):** which layer a collider lives on
//! - **Mask (bitmask):** which layers it collides with / a query accepts
//!
//! ## Layers:
//! - Layer 1 (0b1 = 1): Reserved
//! - Layer 2 (0b10 = 2): Characters (kinematic capsules)
//! - Layer 3 (0b100 = 4): Environment (terrain, floors, walls)
//! - Layer 4 (0b1000 = 8): Triggers (sensor volumes)

use bevy_rapier3d::prelude::{CollisionGroups, Group};

// ============================================================================
// Layer bitmasks
// ============================================================================

/// Layer 2: Characters
pub const LAYER_CHARACTER: u32 = 0b10; // 2

/// Layer 3: Environment (default ground mask)
pub const LAYER_ENVIRONMENT: u32 = 0b100; // 4

/// Layer 4: Trigger volumes
pub const LAYER_TRIGGERS: u32 = 0b1000; // 8

// ============================================================================
// Masks
// ============================================================================

/// Characters collide with characters + environment
pub const MASK_CHARACTER: u32 = LAYER_CHARACTER | LAYER_ENVIRONMENT;

// ============================================================================
// Helpers
// ============================================================================

/// Rapier groups for a character capsule
pub fn character_groups() -> CollisionGroups {
    CollisionGroups::new(
        Group::from_bits_truncate(LAYER_CHARACTER),
        Group::from_bits_truncate(MASK_CHARACTER),
    )
}

/// Rapier groups for static ground/environment geometry
pub fn environment_groups() -> CollisionGroups {
    CollisionGroups::new(Group::from_bits_truncate(LAYER_ENVIRONMENT), Group::ALL)
}

/// Layer name for debug logs
pub fn layer_name(layer_bits: u32) -> &'static str {
    match layer_bits {
        LAYER_CHARACTER => "Characters",
        LAYER_ENVIRONMENT => "Environment",
        LAYER_TRIGGERS => "Triggers",
        _ => "Unknown",
    }
}
