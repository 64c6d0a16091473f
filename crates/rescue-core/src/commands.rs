//! Player commands sent from the shell to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Continuous control input travels separately as an `InputSnapshot`.

use serde::{Deserialize, Serialize};

/// Discrete player actions. The command surface is deliberately small:
/// everything else is per-tick held input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a new game from the title screen.
    StartGame,
    /// Restart after game over. Same full reset as StartGame.
    RestartGame,
}

/// The control state sampled from the input source once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub thrust: bool,
    /// Whether fire is currently held (ascent speed boost).
    pub fire_held: bool,
    /// Edge-triggered: true only on the tick fire was first pressed
    /// (projectile spawn reacts to the press, not the hold).
    pub fire_pressed: bool,
}
