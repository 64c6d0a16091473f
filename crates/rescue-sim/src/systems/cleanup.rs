//! Cleanup system: despawns entities flagged inactive during the tick.
//!
//! Runs last, so an entity deactivated mid-tick is already excluded from
//! every query (they all check `Active`) and disappears from the world
//! before the next tick begins. Uses a pre-allocated buffer to avoid
//! per-tick allocation.

use hecs::{Entity, World};

use rescue_core::components::Active;

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, active) in world.query_mut::<&Active>() {
        if !active.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
