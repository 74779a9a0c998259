//! Ground check: sphere probe below the character origin
//!
//! Pure query, the only reaction is `LocomotionState.grounded` and the
//! animator Grounded flag. Two collision backends:
//! - Rapier scene queries (game)
//! - StaticColliders resource (headless simulation, tests)
//!
//! Sensor/trigger colliders never count as ground.

use bevy::prelude::*;
use bevy_rapier3d::parry::shape::Ball;
use bevy_rapier3d::prelude::*;

use crate::animation::{AnimatorIds, AnimatorParameters};
use crate::config::GroundConfig;
use crate::movement::LocomotionState;

/// Ground probe settings (per character)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct GroundCheck {
    /// Probe center distance below the origin (m)
    pub offset: f32,
    pub radius: f32,
    /// Layer bits accepted as ground
    pub layer_mask: u32,
}

impl Default for GroundCheck {
    fn default() -> Self {
        Self::from(&GroundConfig::default())
    }
}

impl From<&GroundConfig> for GroundCheck {
    fn from(config: &GroundConfig) -> Self {
        Self {
            offset: config.offset,
            radius: config.radius,
            layer_mask: config.layer_mask,
        }
    }
}

impl GroundCheck {
    pub fn probe_center(&self, origin: Vec3) -> Vec3 {
        origin - Vec3::Y * self.offset
    }
}

/// Last probe (for host debug drawing)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct GroundProbe {
    pub center: Vec3,
    pub radius: f32,
    pub hit: bool,
}

/// Collision query used by the ground check
pub trait SphereOverlap {
    /// true if a non-sensor collider on `layer_mask` (not owned by `exclude`)
    /// intersects the sphere
    fn overlaps_sphere(&self, center: Vec3, radius: f32, layer_mask: u32, exclude: Entity) -> bool;
}

// ============================================================================
// Headless backend
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaticShape {
    Sphere { radius: f32 },
    Cuboid { half_extents: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticCollider {
    pub center: Vec3,
    pub shape: StaticShape,
    pub layers: u32,
    pub sensor: bool,
    /// Entity the collider belongs to (skipped when probing for that entity)
    pub owner: Option<Entity>,
}

impl StaticCollider {
    pub fn cuboid(center: Vec3, half_extents: Vec3, layers: u32) -> Self {
        Self {
            center,
            shape: StaticShape::Cuboid { half_extents },
            layers,
            sensor: false,
            owner: None,
        }
    }

    pub fn sphere(center: Vec3, radius: f32, layers: u32) -> Self {
        Self {
            center,
            shape: StaticShape::Sphere { radius },
            layers,
            sensor: false,
            owner: None,
        }
    }

    pub fn as_sensor(mut self) -> Self {
        self.sensor = true;
        self
    }

    pub fn owned_by(mut self, owner: Entity) -> Self {
        self.owner = Some(owner);
        self
    }

    fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        match self.shape {
            StaticShape::Sphere { radius: own } => {
                self.center.distance_squared(center) <= (own + radius) * (own + radius)
            }
            StaticShape::Cuboid { half_extents } => {
                // Closest point of the box to the sphere center
                let min = self.center - half_extents;
                let max = self.center + half_extents;
                let closest = center.clamp(min, max);
                closest.distance_squared(center) <= radius * radius
            }
        }
    }
}

/// In-memory collision world for runs without a physics engine
#[derive(Resource, Debug, Clone, Default)]
pub struct StaticColliders {
    pub colliders: Vec<StaticCollider>,
}

impl StaticColliders {
    pub fn with(mut self, collider: StaticCollider) -> Self {
        self.colliders.push(collider);
        self
    }

    pub fn push(&mut self, collider: StaticCollider) {
        self.colliders.push(collider);
    }
}

impl SphereOverlap for StaticColliders {
    fn overlaps_sphere(&self, center: Vec3, radius: f32, layer_mask: u32, exclude: Entity) -> bool {
        self.colliders.iter().any(|collider| {
            !collider.sensor
                && collider.layers & layer_mask != 0
                && collider.owner != Some(exclude)
                && collider.intersects_sphere(center, radius)
        })
    }
}

// ============================================================================
// Rapier backend
// ============================================================================

/// Rapier scene query adapter
pub struct RapierOverlap<'a, 'w> {
    pub context: &'a RapierContext<'w>,
}

impl SphereOverlap for RapierOverlap<'_, '_> {
    fn overlaps_sphere(&self, center: Vec3, radius: f32, layer_mask: u32, exclude: Entity) -> bool {
        let filter = QueryFilter::new()
            .exclude_sensors()
            .exclude_rigid_body(exclude)
            .groups(CollisionGroups::new(
                Group::ALL,
                Group::from_bits_truncate(layer_mask),
            ));

        let mut hit = false;
        self.context.intersect_shape(
            center,
            Quat::IDENTITY,
            &Ball::new(radius),
            filter,
            |_| {
                hit = true;
                // First hit is enough
                false
            },
        );
        hit
    }
}

// ============================================================================
// Systems
// ============================================================================

type GroundQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static Transform,
        &'static GroundCheck,
        &'static mut LocomotionState,
        Option<&'static mut GroundProbe>,
        Option<(&'static AnimatorIds, &'static mut AnimatorParameters)>,
    ),
>;

/// Probe once per character and forward the result
fn run_ground_checks(overlap: &impl SphereOverlap, query: &mut GroundQuery) {
    for (entity, transform, check, mut state, probe, animator) in query.iter_mut() {
        let center = check.probe_center(transform.translation);
        let grounded = overlap.overlaps_sphere(center, check.radius, check.layer_mask, entity);

        state.grounded = grounded;

        if let Some(mut probe) = probe {
            *probe = GroundProbe {
                center,
                radius: check.radius,
                hit: grounded,
            };
        }

        // Guard: no animator → ground flag stays local
        if let Some((ids, mut params)) = animator {
            params.set_bool(ids.grounded, grounded);
        }
    }
}

/// Ground check against the in-memory StaticColliders
pub fn detect_ground_headless(colliders: Option<Res<StaticColliders>>, mut query: GroundQuery) {
    let empty = StaticColliders::default();
    let colliders = colliders.as_deref().unwrap_or(&empty);
    run_ground_checks(colliders, &mut query);
}

/// Ground check against the Rapier scene
///
/// No Rapier context (plugin not added yet) → no-op this frame.
pub fn detect_ground_rapier(rapier: ReadRapierContext, mut query: GroundQuery) {
    let Ok(context) = rapier.single() else {
        return;
    };
    let overlap = RapierOverlap { context: &context };
    run_ground_checks(&overlap, &mut query);
}
