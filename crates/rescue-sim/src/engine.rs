//! Game engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world and the mission state, processes
//! player commands, samples input once per tick, runs all systems in a
//! fixed order, resolves collisions, and produces `GameStateSnapshot`s.
//! Completely headless (no rendering or audio dependency), enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rescue_core::commands::{InputSnapshot, PlayerCommand};
use rescue_core::components::{Active, Craft, CraftState, Meteor};
use rescue_core::constants::*;
use rescue_core::enums::{MissionPhase, SoundCue};
use rescue_core::events::{CollisionEvent, UiEvent};
use rescue_core::mission::MissionState;
use rescue_core::state::GameStateSnapshot;
use rescue_core::types::{Position, SimTime, Velocity};

use crate::systems;
use crate::systems::collision;
use crate::world_setup;

/// Ticks between a life loss and the craft reset.
const RESET_DELAY_TICKS: u64 = (RESET_DELAY_SECS * TICK_RATE as f64) as u64;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    mission: MissionState,
    rng: ChaCha8Rng,
    input: InputSnapshot,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    sound_cues: Vec<SoundCue>,
    collision_events: Vec<CollisionEvent>,
    ui_events: Vec<UiEvent>,
    /// Explicit timed-transition record for the post-life-loss reset.
    /// While this is Some, life-loss collision checks are suppressed, so
    /// a second loss can never double-schedule a reset.
    reset_at_tick: Option<u64>,
}

impl GameEngine {
    /// Create a new engine at the title screen.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            mission: MissionState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: InputSnapshot::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            sound_cues: Vec::new(),
            collision_events: Vec::new(),
            ui_events: vec![UiEvent::ShowTitle],
            reset_at_tick: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Set the control input sampled for the next tick. The edge-triggered
    /// `fire_pressed` flag is consumed by the tick it applies to.
    pub fn set_input(&mut self, input: InputSnapshot) {
        self.input = input;
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.mission.is_running() {
            self.run_systems();
            self.time.advance();
        }

        // A press edge applies to exactly one tick.
        self.input.fire_pressed = false;

        let sound_cues = std::mem::take(&mut self.sound_cues);
        let state_events = self.mission.drain_events();
        let collision_events = std::mem::take(&mut self.collision_events);
        let ui_events = std::mem::take(&mut self.ui_events);

        systems::snapshot::build(
            &self.world,
            &self.time,
            &self.mission,
            sound_cues,
            state_events,
            collision_events,
            ui_events,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the mission state.
    pub fn mission(&self) -> &MissionState {
        &self.mission
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Tick at which the pending life-loss reset fires, if one is pending.
    pub fn reset_pending(&self) -> Option<u64> {
        self.reset_at_tick
    }

    /// The craft's current position, if a craft exists.
    pub fn craft_position(&self) -> Option<Position> {
        let mut query = self.world.query::<(&Craft, &Position)>();
        query.iter().next().map(|(_, (_, pos))| *pos)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame | PlayerCommand::RestartGame => {
                if matches!(
                    self.mission.phase(),
                    MissionPhase::Title | MissionPhase::GameOver
                ) {
                    self.start_game();
                }
            }
        }
    }

    /// Full game reset: fresh world, fresh counters, level 1.
    fn start_game(&mut self) {
        self.world.clear();
        world_setup::setup_game(&mut self.world, &mut self.rng, 1);
        self.mission.reset_for_new_game();
        self.time = SimTime::default();
        self.reset_at_tick = None;
        log::info!("new game started");
    }

    /// Run all systems in order for one tick.
    fn run_systems(&mut self) {
        // 1. Pending life-loss reset due this tick?
        if let Some(at) = self.reset_at_tick {
            if self.time.tick >= at {
                self.complete_life_loss_reset();
            }
        }

        let input = self.input;

        // 2. Craft control (gravity/thrust/steer, leaves x unclamped).
        systems::craft_control::run(&mut self.world, &mut self.mission, &input, &mut self.sound_cues);

        // 3. Boundary check on the pre-clamp position, then clamp.
        if self.life_loss_armed() && collision::craft_out_of_bounds(&self.world) {
            self.collision_events.push(CollisionEvent::OutOfBounds);
            self.handle_life_loss();
        }
        systems::craft_control::clamp_to_playfield(&mut self.world);

        // 4. Environment motion.
        systems::meteor::run(&mut self.world);
        systems::station::run(&mut self.world);

        // 5. Astronaut boarding (Landed only).
        if self.mission.phase() == MissionPhase::Landed && systems::astronaut::run(&mut self.world)
        {
            self.mission.set_astronaut_aboard(true);
            self.mission.set_phase(MissionPhase::Ascent);
            self.sound_cues.push(SoundCue::Pickup);
            log::debug!("astronaut aboard, ascending");
        }

        // 6. Projectiles: edge-triggered fire during ascent, bounded pool.
        if self.mission.phase() == MissionPhase::Ascent
            && input.fire_pressed
            && systems::projectile::active_count(&self.world) < MAX_PROJECTILES
        {
            if let Some(pos) = self.craft_position() {
                world_setup::spawn_projectile(&mut self.world, pos);
                self.sound_cues.push(SoundCue::Shoot);
            }
        }
        systems::projectile::run(&mut self.world);

        // 7. Projectile hits: destroy both, score the meteor's value.
        for (projectile, meteor) in collision::projectiles_vs_meteors(&self.world) {
            let points = self
                .world
                .get::<&Meteor>(meteor)
                .map(|m| m.point_value)
                .unwrap_or(0);
            self.deactivate(projectile);
            self.deactivate(meteor);
            self.mission.add_score(points);
            self.sound_cues.push(SoundCue::Explosion);
            self.collision_events.push(CollisionEvent::ProjectileMeteor {
                projectile_id: projectile.to_bits().get(),
                meteor_id: meteor.to_bits().get(),
            });
        }

        // 8. Craft collision resolution (phase transitions, life loss).
        self.resolve_craft_collisions();

        // 9. Despawn everything deactivated this tick.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Whether life-loss checks run this tick: only in Descent/Ascent and
    /// never while a reset is already pending.
    fn life_loss_armed(&self) -> bool {
        self.reset_at_tick.is_none()
            && matches!(
                self.mission.phase(),
                MissionPhase::Descent | MissionPhase::Ascent
            )
    }

    fn resolve_craft_collisions(&mut self) {
        if !self.life_loss_armed() {
            return;
        }

        match self.mission.phase() {
            MissionPhase::Descent => {
                if let Some(meteor) = collision::craft_vs_meteors(&self.world) {
                    self.collision_events.push(CollisionEvent::CraftMeteor {
                        meteor_id: meteor.to_bits().get(),
                    });
                    self.deactivate(meteor);
                    self.handle_life_loss();
                    return;
                }
                if let Some(contact) = collision::craft_on_pad(&self.world) {
                    self.handle_landing(contact.index, contact.center_x);
                    return;
                }
                if collision::craft_on_ground(&self.world) {
                    self.collision_events.push(CollisionEvent::GroundImpact);
                    self.handle_life_loss();
                }
            }
            MissionPhase::Ascent => {
                if let Some(meteor) = collision::craft_vs_meteors(&self.world) {
                    self.collision_events.push(CollisionEvent::CraftMeteor {
                        meteor_id: meteor.to_bits().get(),
                    });
                    self.deactivate(meteor);
                    self.handle_life_loss();
                    return;
                }
                if collision::craft_docked(&self.world) {
                    self.handle_docking();
                }
            }
            _ => {}
        }
    }

    /// Deduct a life; either schedule the delayed reset or end the game.
    fn handle_life_loss(&mut self) {
        self.sound_cues.push(SoundCue::Explosion);
        let remaining = self.mission.lose_life();

        if remaining == 0 {
            self.reset_at_tick = None;
            self.mission.set_phase(MissionPhase::GameOver);
            self.ui_events.push(UiEvent::ShowGameOver {
                score: self.mission.score(),
                rescued: self.mission.rescued_count(),
                level: self.mission.level(),
            });
            log::info!(
                "game over: score {}, rescued {}",
                self.mission.score(),
                self.mission.rescued_count()
            );
        } else {
            self.reset_at_tick = Some(self.time.tick + RESET_DELAY_TICKS);
            log::debug!("life lost, {remaining} remaining, reset pending");
        }
    }

    /// The delayed post-life-loss reset: craft back to start, tank full,
    /// any live astronaut (walking or carried) is lost, back to Descent.
    fn complete_life_loss_reset(&mut self) {
        self.reset_at_tick = None;
        self.reset_craft();
        self.mission.refill_fuel(FUEL_MAX);
        self.mission.set_astronaut_aboard(false);
        if let Some(astronaut) = collision::live_astronaut(&self.world) {
            self.deactivate(astronaut);
        }
        self.mission.set_phase(MissionPhase::Descent);
    }

    /// Touchdown on a pad: score, partial refuel, astronaut spawn.
    fn handle_landing(&mut self, pad_index: usize, pad_center_x: f64) {
        self.collision_events
            .push(CollisionEvent::PadLanding { pad_index });
        self.mission.set_phase(MissionPhase::Landed);
        self.mission.add_score(LANDING_POINTS);
        self.mission.refill_fuel(LANDING_FUEL_BONUS);
        self.sound_cues.push(SoundCue::Land);

        for (_entity, (_craft, pos, vel)) in
            self.world.query_mut::<(&Craft, &mut Position, &mut Velocity)>()
        {
            pos.y = LANDING_Y;
            vel.x = 0.0;
            vel.y = 0.0;
        }

        world_setup::spawn_astronaut(&mut self.world, pad_index, pad_center_x);
        log::debug!("landed on pad {pad_index}");
    }

    /// Docked with the mothership: deliver the passenger (if any), maybe
    /// level up, and start the next descent.
    fn handle_docking(&mut self) {
        self.collision_events.push(CollisionEvent::Docked);

        if self.mission.astronaut_aboard() {
            self.mission.set_astronaut_aboard(false);
            self.mission.add_score(RESCUE_POINTS);
            self.sound_cues.push(SoundCue::Dock);

            if let Some(level) = self.mission.record_rescue() {
                log::info!("level up to {level}");
                self.regenerate_meteors(level);
            }
        }

        self.reset_craft();
        self.mission.set_phase(MissionPhase::Descent);
    }

    /// Reposition the craft at the start. The entity is reused, never
    /// recreated.
    fn reset_craft(&mut self) {
        for (_entity, (_craft, state, pos, vel)) in self.world.query_mut::<(
            &Craft,
            &mut CraftState,
            &mut Position,
            &mut Velocity,
        )>() {
            *pos = Position::new(CRAFT_START_X, CRAFT_START_Y, 0.0);
            *vel = Velocity::default();
            state.tilt = 0.0;
            state.thruster_on = false;
            state.unclamped_x = CRAFT_START_X;
        }
    }

    /// Replace the meteor batch, sized for the given level.
    fn regenerate_meteors(&mut self, level: u32) {
        self.despawn_buffer.clear();
        for (entity, _meteor) in self.world.query_mut::<&Meteor>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        world_setup::spawn_meteor_batch(&mut self.world, &mut self.rng, level);
    }

    /// Flag an entity inactive; cleanup despawns it at end of tick.
    fn deactivate(&mut self, entity: hecs::Entity) {
        if let Ok(mut active) = self.world.get::<&mut Active>(entity) {
            active.0 = false;
        }
    }

    // --- Test support ---

    /// Move the craft to an exact position (test setup).
    #[cfg(test)]
    pub(crate) fn set_craft_position(&mut self, x: f64, y: f64) {
        for (_entity, (_craft, state, pos)) in
            self.world.query_mut::<(&Craft, &mut CraftState, &mut Position)>()
        {
            pos.x = x;
            pos.y = y;
            state.unclamped_x = x;
        }
    }

    /// Set the craft's velocity directly (test setup).
    #[cfg(test)]
    pub(crate) fn set_craft_velocity(&mut self, x: f64, y: f64) {
        for (_entity, (_craft, vel)) in self.world.query_mut::<(&Craft, &mut Velocity)>() {
            vel.x = x;
            vel.y = y;
        }
    }

    /// Remove every meteor so scripted tests aren't interrupted by random
    /// collisions.
    #[cfg(test)]
    pub(crate) fn clear_meteors(&mut self) {
        self.despawn_buffer.clear();
        for (entity, _meteor) in self.world.query_mut::<&Meteor>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
    }

    /// Spawn a meteor with exact kinematics (test setup).
    #[cfg(test)]
    pub(crate) fn spawn_test_meteor(
        &mut self,
        pos: Position,
        vel: Velocity,
        eligible_flagship: bool,
    ) -> hecs::Entity {
        use rescue_core::components::CollisionRadius;
        self.world.spawn((
            Meteor {
                eligible_flagship,
                is_flagship: false,
                flash_timer_secs: 0.0,
                point_value: METEOR_POINTS,
                spin_rate: 0.5,
                roll_rate: 0.5,
            },
            pos,
            vel,
            CollisionRadius(METEOR_RADIUS),
            Active(true),
        ))
    }

    /// Force the mission phase (test setup for mid-game scenarios).
    #[cfg(test)]
    pub(crate) fn force_phase(&mut self, phase: MissionPhase) {
        self.mission.set_phase(phase);
        self.mission.drain_events();
    }

    /// Mutable mission access (test setup for mid-game counters).
    #[cfg(test)]
    pub(crate) fn mission_mut(&mut self) -> &mut MissionState {
        &mut self.mission
    }

    /// Drop the craft's remaining lives to exactly one (test setup).
    #[cfg(test)]
    pub(crate) fn drain_lives_to_one(&mut self) {
        while self.mission.lives() > 1 {
            self.mission.lose_life();
        }
        self.mission.drain_events();
    }
}
