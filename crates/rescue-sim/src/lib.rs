//! Simulation engine for the lunar rescue game.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the runtime shell.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use rescue_core as core;
