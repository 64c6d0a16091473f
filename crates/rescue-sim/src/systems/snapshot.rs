//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! Read-only over the world — it never modifies anything. Views are
//! sorted by id so equal worlds always serialize identically.

use std::f64::consts::TAU;

use hecs::World;

use rescue_core::components::*;
use rescue_core::constants::{FLAGSHIP_FLICKER_HZ, FLAGSHIP_FLASH_SECS};
use rescue_core::enums::{AstronautPhase, SoundCue};
use rescue_core::events::{CollisionEvent, StateEvent, UiEvent};
use rescue_core::mission::MissionState;
use rescue_core::state::*;
use rescue_core::types::{Position, SimTime};

/// Build a complete snapshot from the current world and mission state.
#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    mission: &MissionState,
    sound_cues: Vec<SoundCue>,
    state_events: Vec<StateEvent>,
    collision_events: Vec<CollisionEvent>,
    ui_events: Vec<UiEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        hud: HudView {
            phase: mission.phase(),
            score: mission.score(),
            lives: mission.lives(),
            fuel: mission.fuel(),
            rescued: mission.rescued_count(),
            level: mission.level(),
        },
        craft: build_craft(world, mission),
        meteors: build_meteors(world),
        astronaut: build_astronaut(world),
        projectiles: build_projectiles(world),
        pads: build_pads(world),
        mothership: build_mothership(world),
        sound_cues,
        state_events,
        collision_events,
        ui_events,
    }
}

fn entity_id(entity: hecs::Entity) -> u64 {
    entity.to_bits().get()
}

fn build_craft(world: &World, mission: &MissionState) -> Option<CraftView> {
    let mut query = world.query::<(&Craft, &CraftState, &Position)>();
    query
        .iter()
        .next()
        .map(|(entity, (_, state, pos))| CraftView {
            id: entity_id(entity),
            position: *pos,
            tilt: state.tilt,
            thruster_on: state.thruster_on,
            aboard: mission.astronaut_aboard(),
        })
}

fn build_meteors(world: &World) -> Vec<MeteorView> {
    let mut meteors: Vec<MeteorView> = world
        .query::<(&Meteor, &Position, &CollisionRadius, &Active)>()
        .iter()
        .filter(|(_, (_, _, _, active))| active.0)
        .map(|(entity, (meteor, pos, radius, _))| MeteorView {
            id: entity_id(entity),
            position: *pos,
            radius: radius.0,
            is_flagship: meteor.is_flagship,
            flicker: flicker_for(meteor),
            spin_rate: meteor.spin_rate,
            roll_rate: meteor.roll_rate,
        })
        .collect();

    meteors.sort_by_key(|m| m.id);
    meteors
}

/// Sine flicker in [0, 1] while an eligible meteor flashes toward its
/// transform. Cosmetic only.
fn flicker_for(meteor: &Meteor) -> f64 {
    if meteor.is_flagship
        || !meteor.eligible_flagship
        || meteor.flash_timer_secs <= 0.0
        || meteor.flash_timer_secs > FLAGSHIP_FLASH_SECS
    {
        return 0.0;
    }
    0.5 + 0.5 * (TAU * FLAGSHIP_FLICKER_HZ * meteor.flash_timer_secs).sin()
}

fn build_astronaut(world: &World) -> Option<AstronautView> {
    let mut query = world.query::<(&Astronaut, &Position, &Active)>();
    query
        .iter()
        .find(|(_, (_, _, active))| active.0)
        .map(|(entity, (astro, pos, _))| AstronautView {
            id: entity_id(entity),
            position: *pos,
            phase: astro.phase,
            scale: astro.scale,
            sway: if astro.phase == AstronautPhase::Approaching {
                astro.sway_phase.sin() * 0.15
            } else {
                0.0
            },
        })
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Active)>()
        .iter()
        .filter(|(_, (_, _, active))| active.0)
        .map(|(entity, (_, pos, _))| ProjectileView {
            id: entity_id(entity),
            position: *pos,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_pads(world: &World) -> Vec<PadView> {
    let mut pads: Vec<PadView> = world
        .query::<&LandingPad>()
        .iter()
        .map(|(entity, pad)| PadView {
            id: entity_id(entity),
            index: pad.index,
            center_x: pad.center_x,
            width: pad.width,
        })
        .collect();

    pads.sort_by_key(|p| p.index);
    pads
}

fn build_mothership(world: &World) -> Option<MothershipView> {
    let mut query = world.query::<(&Mothership, &Position)>();
    query
        .iter()
        .next()
        .map(|(entity, (_, pos))| MothershipView {
            id: entity_id(entity),
            position: *pos,
        })
}
