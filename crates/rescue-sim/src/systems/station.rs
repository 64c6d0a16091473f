//! Mothership cosmetic bob. Docking range is measured from the home
//! position, so this never affects gameplay.

use std::f64::consts::TAU;

use hecs::World;

use rescue_core::components::Mothership;
use rescue_core::constants::{DT, MOTHERSHIP_BOB_AMPLITUDE, MOTHERSHIP_BOB_HZ};
use rescue_core::types::Position;

pub fn run(world: &mut World) {
    for (_entity, (ship, pos)) in world.query_mut::<(&mut Mothership, &mut Position)>() {
        ship.bob_phase += TAU * MOTHERSHIP_BOB_HZ * DT;
        pos.y = ship.home_y + ship.bob_phase.sin() * MOTHERSHIP_BOB_AMPLITUDE;
    }
}
