//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::AstronautPhase;

/// Sphere radius used by every collision query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionRadius(pub f64);

/// Liveness flag. An inactive entity participates in no collision query
/// and no kinematic update; the cleanup system despawns it at end of tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Active(pub bool);

/// Marks the player-controlled craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Craft;

/// Craft-specific state beyond position/velocity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CraftState {
    /// Cosmetic bank angle (radians); not collision-relevant.
    pub tilt: f64,
    /// Whether the thruster is visually firing this tick.
    pub thruster_on: bool,
    /// Horizontal position before the playfield clamp, captured each tick
    /// so the boundary check sees the unclamped value.
    pub unclamped_x: f64,
}

/// A drifting meteor, possibly destined to become a flagship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Meteor {
    /// Chosen at spawn with FLAGSHIP_PROBABILITY; never changes.
    pub eligible_flagship: bool,
    /// One-way: false until the transform fires, then permanently true.
    pub is_flagship: bool,
    /// Accumulates while eligible and untransformed; drives the flicker
    /// and, past FLAGSHIP_FLASH_SECS, the transform itself.
    pub flash_timer_secs: f64,
    /// Current point value; elevated once transformed.
    pub point_value: u32,
    /// Cosmetic rotation rates (radians/s).
    pub spin_rate: f64,
    pub roll_rate: f64,
}

/// The astronaut walking to, then boarding, the craft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Astronaut {
    pub phase: AstronautPhase,
    /// Uniform scale; shrinks to zero while boarding.
    pub scale: f64,
    /// Cosmetic walk-sway phase (radians).
    pub sway_phase: f64,
    /// Index of the pad this astronaut spawned at.
    pub pad_index: usize,
}

/// Marks an upward-travelling projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// A static landing pad. Immutable after creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LandingPad {
    pub index: usize,
    pub center_x: f64,
    pub width: f64,
}

/// The docking destination. Does not move horizontally; the bob is
/// cosmetic and docking range is measured from the home position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mothership {
    pub home_y: f64,
    pub bob_phase: f64,
}
