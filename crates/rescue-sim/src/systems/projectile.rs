//! Projectile system — fixed upward flight, deactivation past the
//! playfield top, and the bounded-pool count.

use hecs::World;

use rescue_core::components::{Active, Projectile};
use rescue_core::constants::{DT, PLAYFIELD_TOP};
use rescue_core::types::{Position, Velocity};

/// Advance all active projectiles one tick.
pub fn run(world: &mut World) {
    for (_entity, (_projectile, pos, vel, active)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity, &mut Active)>()
    {
        if !active.0 {
            continue;
        }
        pos.y += vel.y * DT;
        if pos.y > PLAYFIELD_TOP {
            active.0 = false;
        }
    }
}

/// Number of live projectiles. Fire requests are ignored while this is at
/// MAX_PROJECTILES.
pub fn active_count(world: &World) -> usize {
    let mut query = world.query::<(&Projectile, &Active)>();
    query.iter().filter(|(_, (_, active))| active.0).count()
}
