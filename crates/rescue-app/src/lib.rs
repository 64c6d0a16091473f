//! Runtime shell for the lunar rescue game.
//!
//! Hosts the game loop thread and the sink traits a frontend implements
//! to receive snapshots, sound cues, and UI events. The shell owns no
//! game logic; everything flows through the simulation engine.

pub mod error;
pub mod game_loop;
pub mod sinks;
pub mod state;

pub use rescue_core as core;
