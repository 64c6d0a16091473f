//! Meteor behavior system — drift, edge bounce, vertical wrap, and the
//! one-way flagship transform.

use hecs::World;

use rescue_core::components::{Active, CollisionRadius, Meteor};
use rescue_core::constants::*;
use rescue_core::types::{Position, Velocity};

/// Advance all active meteors one tick.
pub fn run(world: &mut World) {
    let half = GAME_WIDTH / 2.0;

    for (_entity, (meteor, pos, vel, radius, active)) in world.query_mut::<(
        &mut Meteor,
        &mut Position,
        &mut Velocity,
        &mut CollisionRadius,
        &Active,
    )>() {
        if !active.0 {
            continue;
        }

        pos.x += vel.x * DT;
        pos.y += vel.y * DT;

        // Bounce off the side edges by velocity inversion.
        if (pos.x <= -half && vel.x < 0.0) || (pos.x >= half && vel.x > 0.0) {
            vel.x = -vel.x;
        }

        // Wrap vertically within the band, skipping the safe zone below
        // the mothership and the margin above the ground. Velocity is
        // preserved; the meteor reappears at the opposite bound. Like the
        // edge bounce, only movement past the bound wraps, so an entity
        // parked outside the band stays where it is.
        if pos.y > METEOR_BAND_TOP && vel.y > 0.0 {
            pos.y = METEOR_BAND_BOTTOM;
        } else if pos.y < METEOR_BAND_BOTTOM && vel.y < 0.0 {
            pos.y = METEOR_BAND_TOP;
        }

        // Eligible meteors flash, then transform in place. One-way.
        if meteor.eligible_flagship && !meteor.is_flagship {
            meteor.flash_timer_secs += DT;
            if meteor.flash_timer_secs > FLAGSHIP_FLASH_SECS {
                meteor.is_flagship = true;
                meteor.point_value = FLAGSHIP_POINTS;
                vel.x *= 2.0;
                radius.0 = FLAGSHIP_RADIUS;
                meteor.spin_rate = FLAGSHIP_SPIN_RATE;
            }
        }
    }
}
