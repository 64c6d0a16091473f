//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Total playfield width (units).
pub const GAME_WIDTH: f64 = 40.0;

/// Horizontal extent the craft is clamped to, and the boundary beyond which
/// (pre-clamp) a life is lost. One unit inside the true edge so the craft
/// never clips the walls visually.
pub const PLAYFIELD_HALF_WIDTH: f64 = GAME_WIDTH / 2.0 - 1.0;

/// Vertical position of the ground plane; pads sit here.
pub const GROUND_Y: f64 = 0.0;

/// Craft altitude at/below which ground and pad contact is evaluated.
pub const LANDING_Y: f64 = 1.0;

/// Projectiles deactivate above this altitude.
pub const PLAYFIELD_TOP: f64 = 30.0;

// --- Craft kinematics ---

/// Gravity acceleration during descent (units/s^2).
pub const GRAVITY: f64 = 3.0;

/// Maximum descent speed: a negative floor on vertical velocity.
/// During Descent the craft's vertical velocity stays in
/// [MAX_DESCENT_SPEED, 0] — thrust slows the fall but never climbs.
pub const MAX_DESCENT_SPEED: f64 = -6.0;

/// Thrust acceleration countering gravity (units/s^2).
pub const THRUST_ACCEL: f64 = 5.0;

/// Fuel consumed per second of thrust.
pub const FUEL_BURN_PER_SEC: f64 = 15.0;

/// Horizontal steering speed (units/s).
pub const HORIZONTAL_SPEED: f64 = 8.0;

/// Horizontal steering multiplier while ascending.
pub const ASCENT_STEER_FACTOR: f64 = 0.6;

/// Fixed climb rate during ascent (units/s).
pub const ASCENT_SPEED: f64 = 4.0;

/// Climb multiplier while the fire action is held (no fuel cost).
pub const FIRE_BOOST_FACTOR: f64 = 1.8;

/// Climb multiplier while thrust is held (fuel-costing, weaker than fire).
pub const THRUST_BOOST_FACTOR: f64 = 1.4;

/// Maximum cosmetic bank angle (radians).
pub const TILT_MAX: f64 = 0.35;

/// Tilt approach rate toward the banked angle (per second).
pub const TILT_RATE: f64 = 4.0;

/// Geometric decay factor applied to tilt per tick with no steering input.
pub const TILT_DECAY: f64 = 0.92;

/// Craft collision radius.
pub const CRAFT_RADIUS: f64 = 1.0;

/// Craft respawn position after a reset.
pub const CRAFT_START_X: f64 = 0.0;
pub const CRAFT_START_Y: f64 = 22.0;

// --- Fuel / lives / scoring ---

/// Fuel capacity; fuel is always clamped to [0, FUEL_MAX].
pub const FUEL_MAX: f64 = 100.0;

/// Fuel restored when landing on a pad (clamped to FUEL_MAX).
pub const LANDING_FUEL_BONUS: f64 = 50.0;

/// Lives at the start of a new game.
pub const INITIAL_LIVES: u32 = 3;

/// Points for a successful pad landing.
pub const LANDING_POINTS: u32 = 50;

/// Points for delivering an astronaut to the mothership.
pub const RESCUE_POINTS: u32 = 200;

/// Base point value of a meteor.
pub const METEOR_POINTS: u32 = 20;

/// Elevated point value after the flagship transform.
pub const FLAGSHIP_POINTS: u32 = 100;

/// Delay between a life loss and the craft reset (seconds).
pub const RESET_DELAY_SECS: f64 = 1.0;

/// Rescues needed per level-up.
pub const ASTRONAUTS_PER_LEVEL: u32 = 5;

// --- Meteors ---

/// Meteor batch size at level 1.
pub const BASE_METEOR_COUNT: usize = 8;

/// Extra meteors added to the batch per level gained.
pub const METEORS_PER_LEVEL: usize = 3;

/// Meteor collision radius (pre-transform).
pub const METEOR_RADIUS: f64 = 0.9;

/// Flagship collision radius (post-transform).
pub const FLAGSHIP_RADIUS: f64 = 1.4;

/// Horizontal speed range at spawn (units/s), scaled by level.
pub const METEOR_SPEED_MIN: f64 = 2.0;
pub const METEOR_SPEED_MAX: f64 = 5.0;

/// Vertical drift range at spawn (units/s).
pub const METEOR_DRIFT_MAX: f64 = 0.8;

/// Per-level multiplier on meteor speed: 1 + (level-1) * this.
pub const METEOR_LEVEL_SPEED_STEP: f64 = 0.15;

/// Vertical wrap band. Excludes a safe zone below the mothership (top)
/// and a margin above the ground (bottom).
pub const METEOR_BAND_BOTTOM: f64 = 4.0;
pub const METEOR_BAND_TOP: f64 = 20.0;

/// Probability that a meteor is flagship-eligible at spawn.
pub const FLAGSHIP_PROBABILITY: f64 = 0.2;

/// Flash duration before an eligible meteor transforms (seconds).
pub const FLAGSHIP_FLASH_SECS: f64 = 4.0;

/// Sine flicker frequency of the pre-transform flash (Hz).
pub const FLAGSHIP_FLICKER_HZ: f64 = 6.0;

/// Cosmetic spin rate gained on transform (radians/s).
pub const FLAGSHIP_SPIN_RATE: f64 = 2.5;

// --- Astronaut ---

/// Walk speed toward the craft (units/s).
pub const ASTRONAUT_SPEED: f64 = 1.5;

/// Horizontal offset below which Approaching becomes Boarding.
pub const BOARDING_THRESHOLD: f64 = 0.4;

/// Upward drift while boarding (units/s).
pub const BOARDING_RISE: f64 = 1.0;

/// Geometric shrink factor applied to scale per tick while boarding.
pub const ASTRONAUT_SHRINK: f64 = 0.93;

/// Scale below which the astronaut counts as aboard.
pub const ASTRONAUT_SCALE_EPSILON: f64 = 0.05;

/// Cosmetic sway frequency while walking (Hz).
pub const ASTRONAUT_SWAY_HZ: f64 = 2.0;

/// Astronaut collision radius (unused by queries, kept for snapshots).
pub const ASTRONAUT_RADIUS: f64 = 0.4;

// --- Projectiles ---

/// Maximum simultaneous projectiles; fire requests are ignored when full.
pub const MAX_PROJECTILES: usize = 3;

/// Fixed upward projectile speed (units/s).
pub const PROJECTILE_SPEED: f64 = 14.0;

/// Projectile collision radius.
pub const PROJECTILE_RADIUS: f64 = 0.25;

// --- Mothership / docking ---

/// Mothership home altitude.
pub const MOTHERSHIP_Y: f64 = 26.0;

/// Craft altitude at/above which docking is evaluated.
pub const DOCK_ALTITUDE: f64 = 24.0;

/// Horizontal docking radius around the mothership center.
pub const DOCK_RADIUS: f64 = 3.0;

/// Cosmetic bob amplitude and frequency.
pub const MOTHERSHIP_BOB_AMPLITUDE: f64 = 0.4;
pub const MOTHERSHIP_BOB_HZ: f64 = 0.5;

// --- Landing pads ---

/// Landing pads as (center_x, width) pairs, indexed in order.
pub const LANDING_PADS: [(f64, f64); 3] = [(-12.0, 4.0), (0.0, 3.0), (13.0, 4.0)];
