//! Astronaut boarding system.
//!
//! Approaching: walk toward the craft's current horizontal position.
//! Boarding: rise and shrink until the scale epsilon, then Aboard.
//! Transitions are one-way; Aboard deactivates the entity, so the
//! "came aboard" report fires at most once per astronaut.

use std::f64::consts::TAU;

use hecs::World;

use rescue_core::components::{Active, Astronaut, Craft};
use rescue_core::constants::*;
use rescue_core::enums::AstronautPhase;
use rescue_core::types::Position;

/// Advance the astronaut one tick. Returns true if they came aboard this
/// tick.
pub fn run(world: &mut World) -> bool {
    let craft_x = {
        let mut query = world.query::<(&Craft, &Position)>();
        match query.iter().next() {
            Some((_, (_, pos))) => pos.x,
            None => return false,
        }
    };

    let mut came_aboard = false;

    for (_entity, (astro, pos, active)) in
        world.query_mut::<(&mut Astronaut, &mut Position, &mut Active)>()
    {
        if !active.0 {
            continue;
        }

        match astro.phase {
            AstronautPhase::Approaching => {
                let offset = craft_x - pos.x;
                if offset.abs() < BOARDING_THRESHOLD {
                    astro.phase = AstronautPhase::Boarding;
                } else {
                    pos.x += offset.signum() * ASTRONAUT_SPEED * DT;
                    astro.sway_phase += TAU * ASTRONAUT_SWAY_HZ * DT;
                }
            }
            AstronautPhase::Boarding => {
                pos.y += BOARDING_RISE * DT;
                astro.scale *= ASTRONAUT_SHRINK;
                if astro.scale < ASTRONAUT_SCALE_EPSILON {
                    astro.phase = AstronautPhase::Aboard;
                    active.0 = false;
                    came_aboard = true;
                }
            }
            AstronautPhase::Aboard => {}
        }
    }

    came_aboard
}
