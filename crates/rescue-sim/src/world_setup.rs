//! Entity spawn factories for setting up the game world.
//!
//! Creates the craft, landing pads, mothership, meteor batches,
//! astronauts, and projectiles with their component bundles. All random
//! draws go through the engine's seeded RNG.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rescue_core::components::*;
use rescue_core::constants::*;
use rescue_core::enums::AstronautPhase;
use rescue_core::types::{Position, Velocity};

/// Set up a fresh game world: craft, pads, mothership, level-1 meteors.
pub fn setup_game(world: &mut World, rng: &mut ChaCha8Rng, level: u32) {
    spawn_craft(world);
    spawn_pads(world);
    spawn_mothership(world);
    spawn_meteor_batch(world, rng, level);
}

/// Spawn the craft at the start position. Created once per game session;
/// resets reposition it rather than respawning.
pub fn spawn_craft(world: &mut World) -> hecs::Entity {
    world.spawn((
        Craft,
        CraftState {
            tilt: 0.0,
            thruster_on: false,
            unclamped_x: CRAFT_START_X,
        },
        Position::new(CRAFT_START_X, CRAFT_START_Y, 0.0),
        Velocity::default(),
        CollisionRadius(CRAFT_RADIUS),
        Active(true),
    ))
}

/// Spawn the landing pads from the static table, in index order.
pub fn spawn_pads(world: &mut World) {
    for (index, (center_x, width)) in LANDING_PADS.iter().enumerate() {
        world.spawn((
            LandingPad {
                index,
                center_x: *center_x,
                width: *width,
            },
            Position::new(*center_x, GROUND_Y, 0.0),
            Active(true),
        ));
    }
}

/// Spawn the mothership at its home position above the playfield.
pub fn spawn_mothership(world: &mut World) -> hecs::Entity {
    world.spawn((
        Mothership {
            home_y: MOTHERSHIP_Y,
            bob_phase: 0.0,
        },
        Position::new(0.0, MOTHERSHIP_Y, 0.0),
        Active(true),
    ))
}

/// Meteor batch size for a level.
pub fn meteor_count_for_level(level: u32) -> usize {
    BASE_METEOR_COUNT + (level.saturating_sub(1) as usize) * METEORS_PER_LEVEL
}

/// Spawn a full meteor batch sized by the current level.
pub fn spawn_meteor_batch(world: &mut World, rng: &mut ChaCha8Rng, level: u32) {
    for _ in 0..meteor_count_for_level(level) {
        spawn_meteor(world, rng, level);
    }
}

/// Spawn a single meteor with randomized kinematics. Horizontal speed
/// scales with level; flagship eligibility is drawn here and never
/// changes afterward.
pub fn spawn_meteor(world: &mut World, rng: &mut ChaCha8Rng, level: u32) -> hecs::Entity {
    let half = GAME_WIDTH / 2.0;
    let x = rng.gen_range(-half..half);
    let y = rng.gen_range(METEOR_BAND_BOTTOM..METEOR_BAND_TOP);

    let level_factor = 1.0 + (level.saturating_sub(1)) as f64 * METEOR_LEVEL_SPEED_STEP;
    let speed = rng.gen_range(METEOR_SPEED_MIN..METEOR_SPEED_MAX) * level_factor;
    let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let drift = rng.gen_range(-METEOR_DRIFT_MAX..METEOR_DRIFT_MAX);

    world.spawn((
        Meteor {
            eligible_flagship: rng.gen_bool(FLAGSHIP_PROBABILITY),
            is_flagship: false,
            flash_timer_secs: 0.0,
            point_value: METEOR_POINTS,
            spin_rate: rng.gen_range(0.2..1.0),
            roll_rate: rng.gen_range(0.2..1.0),
        },
        Position::new(x, y, 0.0),
        Velocity::new(direction * speed, drift, 0.0),
        CollisionRadius(METEOR_RADIUS),
        Active(true),
    ))
}

/// Spawn the astronaut beside the pad the craft just landed on.
pub fn spawn_astronaut(world: &mut World, pad_index: usize, pad_center_x: f64) -> hecs::Entity {
    world.spawn((
        Astronaut {
            phase: AstronautPhase::Approaching,
            scale: 1.0,
            sway_phase: 0.0,
            pad_index,
        },
        Position::new(pad_center_x + 1.5, GROUND_Y + ASTRONAUT_RADIUS, 0.0),
        CollisionRadius(ASTRONAUT_RADIUS),
        Active(true),
    ))
}

/// Spawn a projectile just above the craft's nose.
pub fn spawn_projectile(world: &mut World, craft_pos: Position) -> hecs::Entity {
    world.spawn((
        Projectile,
        Position::new(craft_pos.x, craft_pos.y + CRAFT_RADIUS, craft_pos.z),
        Velocity::new(0.0, PROJECTILE_SPEED, 0.0),
        CollisionRadius(PROJECTILE_RADIUS),
        Active(true),
    ))
}
