//! Mission state — the authoritative counters and phase driving gameplay.
//!
//! Mutation happens exclusively through the named operations below. Each
//! operation appends a typed `StateEvent` to an internal buffer which the
//! engine drains into the snapshot once per tick.

use serde::{Deserialize, Serialize};

use crate::constants::{ASTRONAUTS_PER_LEVEL, FUEL_MAX, INITIAL_LIVES};
use crate::enums::MissionPhase;
use crate::events::StateEvent;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionState {
    phase: MissionPhase,
    score: u32,
    lives: u32,
    /// Clamped to [0, FUEL_MAX] by every mutation.
    fuel: f64,
    rescued_count: u32,
    astronaut_aboard: bool,
    level: u32,
    #[serde(skip)]
    events: Vec<StateEvent>,
}

impl Default for MissionState {
    fn default() -> Self {
        Self {
            phase: MissionPhase::Title,
            score: 0,
            lives: INITIAL_LIVES,
            fuel: FUEL_MAX,
            rescued_count: 0,
            astronaut_aboard: false,
            level: 1,
            events: Vec::new(),
        }
    }
}

impl MissionState {
    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn rescued_count(&self) -> u32 {
        self.rescued_count
    }

    pub fn astronaut_aboard(&self) -> bool {
        self.astronaut_aboard
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Whether the simulation systems should run at all this tick.
    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            MissionPhase::Descent | MissionPhase::Landed | MissionPhase::Ascent
        )
    }

    /// Reset every counter to a fresh game. Emits the full set of change
    /// events so listeners resynchronize.
    pub fn reset_for_new_game(&mut self) {
        self.score = 0;
        self.lives = INITIAL_LIVES;
        self.fuel = FUEL_MAX;
        self.rescued_count = 0;
        self.astronaut_aboard = false;
        self.level = 1;
        self.events.push(StateEvent::ScoreChanged { score: 0 });
        self.events.push(StateEvent::LivesChanged {
            lives: INITIAL_LIVES,
        });
        self.events.push(StateEvent::FuelChanged { fuel: FUEL_MAX });
        self.events.push(StateEvent::RescueCountChanged { rescued: 0 });
        self.events
            .push(StateEvent::AstronautAboardChanged { aboard: false });
        self.set_phase(MissionPhase::Descent);
    }

    pub fn set_phase(&mut self, phase: MissionPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.events.push(StateEvent::PhaseChanged { phase });
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
        self.events.push(StateEvent::ScoreChanged { score: self.score });
    }

    /// Burn fuel; never drives it negative. Returns the fuel remaining.
    pub fn consume_fuel(&mut self, amount: f64) -> f64 {
        self.fuel = (self.fuel - amount).max(0.0);
        self.events.push(StateEvent::FuelChanged { fuel: self.fuel });
        self.fuel
    }

    /// Add fuel; never exceeds FUEL_MAX.
    pub fn refill_fuel(&mut self, amount: f64) {
        self.fuel = (self.fuel + amount).min(FUEL_MAX);
        self.events.push(StateEvent::FuelChanged { fuel: self.fuel });
    }

    /// Deduct one life. Returns the lives remaining.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(StateEvent::LivesChanged { lives: self.lives });
        self.lives
    }

    pub fn set_astronaut_aboard(&mut self, aboard: bool) {
        if self.astronaut_aboard != aboard {
            self.astronaut_aboard = aboard;
            self.events
                .push(StateEvent::AstronautAboardChanged { aboard });
        }
    }

    /// Count a delivered astronaut. Returns the new level if this rescue
    /// crossed an ASTRONAUTS_PER_LEVEL threshold.
    pub fn record_rescue(&mut self) -> Option<u32> {
        self.rescued_count += 1;
        self.events.push(StateEvent::RescueCountChanged {
            rescued: self.rescued_count,
        });
        if self.rescued_count % ASTRONAUTS_PER_LEVEL == 0 {
            self.level += 1;
            self.events.push(StateEvent::LevelUp { level: self.level });
            Some(self.level)
        } else {
            None
        }
    }

    /// Drain the events accumulated since the last call. Invoked by the
    /// engine exactly once per tick, after all mutations.
    pub fn drain_events(&mut self) -> Vec<StateEvent> {
        std::mem::take(&mut self.events)
    }
}
