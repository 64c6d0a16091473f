//! Craft control system — applies input and phase-specific kinematics.
//!
//! Descent: gravity with a hard floor at MAX_DESCENT_SPEED, and a ceiling
//! at zero — thrust slows the fall but never produces net ascent.
//! Ascent: vertical velocity is forced to ASCENT_SPEED each tick, boosted
//! by fire (free) or thrust (fuel-costing).
//! Landed: the craft stays parked; only the tilt eases back to neutral.
//!
//! The horizontal clamp is applied separately via `clamp_to_playfield` so
//! the engine can run the boundary check on the pre-clamp position.

use hecs::World;

use rescue_core::commands::InputSnapshot;
use rescue_core::components::{Craft, CraftState};
use rescue_core::constants::*;
use rescue_core::enums::{MissionPhase, SoundCue};
use rescue_core::mission::MissionState;
use rescue_core::types::{Position, Velocity};

/// Advance the craft one tick for the active phase.
pub fn run(
    world: &mut World,
    mission: &mut MissionState,
    input: &InputSnapshot,
    sound_cues: &mut Vec<SoundCue>,
) {
    let phase = mission.phase();
    let mut fuel_burned = 0.0;

    for (_entity, (_craft, state, pos, vel)) in
        world.query_mut::<(&Craft, &mut CraftState, &mut Position, &mut Velocity)>()
    {
        let was_thrusting = state.thruster_on;

        match phase {
            MissionPhase::Descent => {
                let mut vy = vel.y - GRAVITY * DT;

                let thrusting = input.thrust && mission.fuel() > 0.0;
                if thrusting {
                    vy += THRUST_ACCEL * DT;
                    fuel_burned = FUEL_BURN_PER_SEC * DT;
                }
                state.thruster_on = thrusting;

                // Floor at the maximum descent speed, ceiling at zero:
                // the craft cannot climb during descent.
                vel.y = vy.clamp(MAX_DESCENT_SPEED, 0.0);
                pos.y += vel.y * DT;

                steer(state, pos, input, 1.0);
            }
            MissionPhase::Ascent => {
                let mut vy = ASCENT_SPEED;
                let mut thrusting = false;

                if input.fire_held {
                    vy *= FIRE_BOOST_FACTOR;
                } else if input.thrust && mission.fuel() > 0.0 {
                    vy *= THRUST_BOOST_FACTOR;
                    fuel_burned = FUEL_BURN_PER_SEC * DT;
                    thrusting = true;
                }
                state.thruster_on = thrusting;

                vel.y = vy;
                pos.y += vel.y * DT;

                steer(state, pos, input, ASCENT_STEER_FACTOR);
            }
            MissionPhase::Landed => {
                state.thruster_on = false;
                vel.y = 0.0;
                state.tilt *= TILT_DECAY;
                state.unclamped_x = pos.x;
            }
            MissionPhase::Title | MissionPhase::GameOver => {}
        }

        if state.thruster_on && !was_thrusting {
            sound_cues.push(SoundCue::Thrust);
        }
    }

    if fuel_burned > 0.0 {
        mission.consume_fuel(fuel_burned);
    }
}

/// Horizontal input and cosmetic bank, shared by descent and ascent.
/// Leaves the position unclamped; `unclamped_x` records it for the
/// boundary check.
fn steer(state: &mut CraftState, pos: &mut Position, input: &InputSnapshot, rate_factor: f64) {
    let dir = match (input.left, input.right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };

    if dir != 0.0 {
        pos.x += dir * HORIZONTAL_SPEED * rate_factor * DT;
        let target = -dir * TILT_MAX;
        state.tilt += (target - state.tilt) * (TILT_RATE * DT).min(1.0);
    } else {
        state.tilt *= TILT_DECAY;
    }

    state.unclamped_x = pos.x;
}

/// Clamp the craft back inside the playfield. Run after the boundary check.
pub fn clamp_to_playfield(world: &mut World) {
    for (_entity, (_craft, pos)) in world.query_mut::<(&Craft, &mut Position)>() {
        pos.x = pos.x.clamp(-PLAYFIELD_HALF_WIDTH, PLAYFIELD_HALF_WIDTH);
    }
}
