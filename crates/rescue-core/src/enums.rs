//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Mission phase (top-level state machine).
///
/// Title and GameOver freeze the simulation entirely; the other three
/// phases each enable a different slice of the per-tick systems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    /// Idle attract screen, no simulation running.
    #[default]
    Title,
    /// Craft falls under gravity through the meteor field.
    Descent,
    /// Craft parked on a pad while the astronaut boards.
    Landed,
    /// Craft climbs toward the mothership, projectiles may fire.
    Ascent,
    /// Terminal state, simulation frozen.
    GameOver,
}

/// Astronaut boarding state machine. Transitions are one-way:
/// Approaching -> Boarding -> Aboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AstronautPhase {
    /// Walking toward the craft's horizontal position.
    #[default]
    Approaching,
    /// Shrinking into the craft.
    Boarding,
    /// Picked up; the entity is inactive once this is reached.
    Aboard,
}

/// Sound cues forwarded to the audio sink. Fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Thrust,
    Shoot,
    Explosion,
    Pickup,
    Dock,
    Land,
}
