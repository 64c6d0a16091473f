//! Game state snapshot — the complete visible state sent to the sinks each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{AstronautPhase, MissionPhase, SoundCue};
use crate::events::{CollisionEvent, StateEvent, UiEvent};
use crate::types::{Position, SimTime};

/// Complete game state broadcast after each tick.
///
/// Entity views carry a stable `id` so a renderer can keep its own
/// drawable table: add a drawable the first time an id appears, remove it
/// when the id disappears. The core never owns render handles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub hud: HudView,
    pub craft: Option<CraftView>,
    pub meteors: Vec<MeteorView>,
    pub astronaut: Option<AstronautView>,
    pub projectiles: Vec<ProjectileView>,
    pub pads: Vec<PadView>,
    pub mothership: Option<MothershipView>,
    /// Sound cues fired this tick, in order.
    pub sound_cues: Vec<SoundCue>,
    /// Mission-state changes this tick, in mutation order.
    pub state_events: Vec<StateEvent>,
    /// Collision hits this tick, in query order.
    pub collision_events: Vec<CollisionEvent>,
    /// One-shot overlay commands (title / game over).
    pub ui_events: Vec<UiEvent>,
}

/// The counters the UI displays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub phase: MissionPhase,
    pub score: u32,
    pub lives: u32,
    pub fuel: f64,
    pub rescued: u32,
    pub level: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CraftView {
    pub id: u64,
    pub position: Position,
    /// Cosmetic bank angle (radians).
    pub tilt: f64,
    pub thruster_on: bool,
    pub aboard: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeteorView {
    pub id: u64,
    pub position: Position,
    pub radius: f64,
    pub is_flagship: bool,
    /// Pre-transform emissive flicker in [0, 1]; 0 when not flashing.
    pub flicker: f64,
    /// Cosmetic rotation rates (radians/s).
    pub spin_rate: f64,
    pub roll_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AstronautView {
    pub id: u64,
    pub position: Position,
    pub phase: AstronautPhase,
    pub scale: f64,
    /// Cosmetic walk sway offset.
    pub sway: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PadView {
    pub id: u64,
    pub index: usize,
    pub center_x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MothershipView {
    pub id: u64,
    pub position: Position,
}
