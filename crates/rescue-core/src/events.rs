//! Events emitted by the simulation for audio and UI feedback.
//!
//! All events are typed enums batched into the per-tick snapshot, replacing
//! string-keyed observer maps. Consumers (UI sink, audio sink) drain them
//! after each tick; nothing is delivered re-entrantly mid-mutation.

use serde::{Deserialize, Serialize};

use crate::enums::MissionPhase;

/// A mission-state change, emitted by the named mutation operations on
/// `MissionState` and drained once per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StateEvent {
    PhaseChanged { phase: MissionPhase },
    ScoreChanged { score: u32 },
    FuelChanged { fuel: f64 },
    LivesChanged { lives: u32 },
    RescueCountChanged { rescued: u32 },
    AstronautAboardChanged { aboard: bool },
    /// Emitted exactly once per threshold crossing of ASTRONAUTS_PER_LEVEL.
    LevelUp { level: u32 },
}

/// Collision outcomes, reported by the collision queries for the tick they
/// occurred in. The engine applies the consequences; sinks may use these
/// for effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CollisionEvent {
    /// Craft struck a meteor (meteor id).
    CraftMeteor { meteor_id: u64 },
    /// A projectile destroyed a meteor.
    ProjectileMeteor { projectile_id: u64, meteor_id: u64 },
    /// Craft touched down within a pad window.
    PadLanding { pad_index: usize },
    /// Craft hit the ground away from every pad.
    GroundImpact,
    /// Craft reached the mothership docking range.
    Docked,
    /// Craft left the horizontal playfield.
    OutOfBounds,
}

/// One-shot UI commands, distinct from the continuous HUD view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    ShowTitle,
    ShowGameOver { score: u32, rescued: u32, level: u32 },
}
