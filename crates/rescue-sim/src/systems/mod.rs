//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions taking `&mut World` (or `&World` for
//! read-only queries). They do not own state — entity state lives in
//! components, counters live in `MissionState`.

pub mod astronaut;
pub mod cleanup;
pub mod collision;
pub mod craft_control;
pub mod meteor;
pub mod projectile;
pub mod snapshot;
pub mod station;
