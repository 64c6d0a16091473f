//! Collision queries.
//!
//! Discrete query functions, one per interaction the orchestrator cares
//! about. Every test is a full 3D euclidean sphere test on the entities'
//! declared radii; inactive entities never participate. Entity counts are
//! tens of meteors and single-digit projectiles, so there is no
//! broad-phase — plain pairwise iteration.

use hecs::{Entity, World};

use rescue_core::components::{
    Active, Astronaut, CollisionRadius, Craft, CraftState, LandingPad, Meteor, Mothership,
    Projectile,
};
use rescue_core::constants::{DOCK_ALTITUDE, DOCK_RADIUS, LANDING_Y, PLAYFIELD_HALF_WIDTH};
use rescue_core::types::Position;

/// A pad the craft has touched down on.
#[derive(Debug, Clone, Copy)]
pub struct PadContact {
    pub index: usize,
    pub center_x: f64,
}

/// Craft position and radius, or None if there is no active craft.
fn craft_sphere(world: &World) -> Option<(Position, f64)> {
    let mut query = world.query::<(&Craft, &Position, &CollisionRadius, &Active)>();
    query
        .iter()
        .next()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(_, (_, pos, radius, _))| (*pos, radius.0))
}

/// First active meteor overlapping the craft, in iteration order.
/// Short-circuits on the first hit; no tie-break beyond that.
pub fn craft_vs_meteors(world: &World) -> Option<Entity> {
    let (craft_pos, craft_radius) = craft_sphere(world)?;

    let mut query = world.query::<(&Meteor, &Position, &CollisionRadius, &Active)>();
    query
        .iter()
        .find(|(_, (_, pos, radius, active))| {
            active.0 && craft_pos.range_to(pos) <= craft_radius + radius.0
        })
        .map(|(entity, _)| entity)
}

/// All projectile–meteor hits this tick. Each projectile and each meteor
/// appears in at most one reported pair; the caller marks both inactive.
pub fn projectiles_vs_meteors(world: &World) -> Vec<(Entity, Entity)> {
    let projectiles: Vec<(Entity, Position, f64)> = {
        let mut query = world.query::<(&Projectile, &Position, &CollisionRadius, &Active)>();
        query
            .iter()
            .filter(|(_, (_, _, _, active))| active.0)
            .map(|(entity, (_, pos, radius, _))| (entity, *pos, radius.0))
            .collect()
    };
    if projectiles.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    let mut spent: Vec<Entity> = Vec::new();

    let mut query = world.query::<(&Meteor, &Position, &CollisionRadius, &Active)>();
    for (meteor_entity, (_, meteor_pos, meteor_radius, active)) in query.iter() {
        if !active.0 {
            continue;
        }
        for (projectile_entity, projectile_pos, projectile_radius) in &projectiles {
            if spent.contains(projectile_entity) {
                continue;
            }
            if projectile_pos.range_to(meteor_pos) <= projectile_radius + meteor_radius.0 {
                hits.push((*projectile_entity, meteor_entity));
                spent.push(*projectile_entity);
                break;
            }
        }
    }

    hits
}

/// Craft at or below the landing height and horizontally within a pad's
/// half-width window. First matching pad wins, in iteration order.
pub fn craft_on_pad(world: &World) -> Option<PadContact> {
    let (craft_pos, _) = craft_sphere(world)?;
    if craft_pos.y > LANDING_Y {
        return None;
    }

    let mut query = world.query::<&LandingPad>();
    query
        .iter()
        .find(|(_, pad)| (craft_pos.x - pad.center_x).abs() <= pad.width / 2.0)
        .map(|(_, pad)| PadContact {
            index: pad.index,
            center_x: pad.center_x,
        })
}

/// Craft at ground level and over no pad.
pub fn craft_on_ground(world: &World) -> bool {
    match craft_sphere(world) {
        Some((pos, _)) => pos.y <= LANDING_Y && craft_on_pad(world).is_none(),
        None => false,
    }
}

/// Craft at or above the docking altitude and horizontally within the
/// docking radius of the mothership's (static) center.
pub fn craft_docked(world: &World) -> bool {
    let Some((craft_pos, _)) = craft_sphere(world) else {
        return false;
    };
    if craft_pos.y < DOCK_ALTITUDE {
        return false;
    }

    let mut query = world.query::<(&Mothership, &Position)>();
    query
        .iter()
        .next()
        .map(|(_, (_, pos))| (craft_pos.x - pos.x).abs() <= DOCK_RADIUS)
        .unwrap_or(false)
}

/// Craft horizontal position outside the playfield, checked on the
/// pre-clamp position captured by the control system.
pub fn craft_out_of_bounds(world: &World) -> bool {
    let mut query = world.query::<(&Craft, &CraftState, &Active)>();
    query
        .iter()
        .next()
        .map(|(_, (_, state, active))| active.0 && state.unclamped_x.abs() > PLAYFIELD_HALF_WIDTH)
        .unwrap_or(false)
}

/// The live astronaut, if any. Used by the engine when clearing state on a
/// life-loss reset.
pub fn live_astronaut(world: &World) -> Option<Entity> {
    let mut query = world.query::<(&Astronaut, &Active)>();
    query
        .iter()
        .find(|(_, (_, active))| active.0)
        .map(|(entity, _)| entity)
}
