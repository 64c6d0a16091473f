#[cfg(test)]
mod tests {
    use crate::commands::{InputSnapshot, PlayerCommand};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::{CollisionEvent, StateEvent, UiEvent};
    use crate::mission::MissionState;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, Velocity};

    /// Verify the phase enums round-trip through serde_json.
    #[test]
    fn test_mission_phase_serde() {
        let variants = vec![
            MissionPhase::Title,
            MissionPhase::Descent,
            MissionPhase::Landed,
            MissionPhase::Ascent,
            MissionPhase::GameOver,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: MissionPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_astronaut_phase_serde() {
        let variants = vec![
            AstronautPhase::Approaching,
            AstronautPhase::Boarding,
            AstronautPhase::Aboard,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: AstronautPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_sound_cue_serde() {
        let variants = vec![
            SoundCue::Thrust,
            SoundCue::Shoot,
            SoundCue::Explosion,
            SoundCue::Pickup,
            SoundCue::Dock,
            SoundCue::Land,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SoundCue = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![PlayerCommand::StartGame, PlayerCommand::RestartGame];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_event_serde() {
        let state_events = vec![
            StateEvent::PhaseChanged {
                phase: MissionPhase::Descent,
            },
            StateEvent::ScoreChanged { score: 250 },
            StateEvent::FuelChanged { fuel: 42.5 },
            StateEvent::LivesChanged { lives: 2 },
            StateEvent::RescueCountChanged { rescued: 3 },
            StateEvent::AstronautAboardChanged { aboard: true },
            StateEvent::LevelUp { level: 2 },
        ];
        for e in &state_events {
            let json = serde_json::to_string(e).unwrap();
            let back: StateEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*e, back);
        }

        let collision_events = vec![
            CollisionEvent::CraftMeteor { meteor_id: 7 },
            CollisionEvent::ProjectileMeteor {
                projectile_id: 1,
                meteor_id: 2,
            },
            CollisionEvent::PadLanding { pad_index: 0 },
            CollisionEvent::GroundImpact,
            CollisionEvent::Docked,
            CollisionEvent::OutOfBounds,
        ];
        for e in &collision_events {
            let json = serde_json::to_string(e).unwrap();
            let back: CollisionEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*e, back);
        }

        let ui_events = vec![
            UiEvent::ShowTitle,
            UiEvent::ShowGameOver {
                score: 1000,
                rescued: 4,
                level: 1,
            },
        ];
        for e in &ui_events {
            let json = serde_json::to_string(e).unwrap();
            let back: UiEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*e, back);
        }
    }

    #[test]
    fn test_input_snapshot_default_is_idle() {
        let input = InputSnapshot::default();
        assert!(!input.left && !input.right && !input.thrust);
        assert!(!input.fire_held && !input.fire_pressed);
    }

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-12);
        assert!((a.horizontal_offset_to(&b) - 3.0).abs() < 1e-12);

        let v = Velocity::new(1.0, 2.0, 2.0);
        assert!((v.speed() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert!(back.craft.is_none());
        assert!(back.meteors.is_empty());
    }

    // ---- MissionState operations ----

    #[test]
    fn test_mission_defaults() {
        let mission = MissionState::default();
        assert_eq!(mission.phase(), MissionPhase::Title);
        assert_eq!(mission.lives(), INITIAL_LIVES);
        assert_eq!(mission.level(), 1);
        assert!((mission.fuel() - FUEL_MAX).abs() < 1e-12);
        assert!(!mission.is_running());
    }

    #[test]
    fn test_fuel_clamped_to_range() {
        let mut mission = MissionState::default();

        // Consuming far more than the tank holds stops at zero.
        mission.consume_fuel(FUEL_MAX * 10.0);
        assert_eq!(mission.fuel(), 0.0);

        // Refilling past capacity stops at FUEL_MAX.
        mission.refill_fuel(FUEL_MAX * 10.0);
        assert_eq!(mission.fuel(), FUEL_MAX);
    }

    /// Scenario A: thrust held for one second at FUEL_BURN_PER_SEC = 15
    /// brings a full 100-unit tank to 85.
    #[test]
    fn test_fuel_burn_one_second_of_thrust() {
        let mut mission = MissionState::default();
        for _ in 0..TICK_RATE {
            mission.consume_fuel(FUEL_BURN_PER_SEC * DT);
        }
        assert!(
            (mission.fuel() - 85.0).abs() < 1e-9,
            "expected 85 fuel, got {}",
            mission.fuel()
        );
    }

    #[test]
    fn test_lose_life_saturates() {
        let mut mission = MissionState::default();
        for _ in 0..INITIAL_LIVES {
            mission.lose_life();
        }
        assert_eq!(mission.lives(), 0);
        assert_eq!(mission.lose_life(), 0);
    }

    #[test]
    fn test_level_up_exactly_on_threshold() {
        let mut mission = MissionState::default();

        for i in 1..ASTRONAUTS_PER_LEVEL {
            assert_eq!(mission.record_rescue(), None, "rescue {i} leveled early");
            assert_eq!(mission.level(), 1);
        }

        // The ASTRONAUTS_PER_LEVEL-th rescue crosses the threshold once.
        assert_eq!(mission.record_rescue(), Some(2));
        assert_eq!(mission.level(), 2);
        assert_eq!(mission.rescued_count(), ASTRONAUTS_PER_LEVEL);

        // Next rescue does not level again.
        assert_eq!(mission.record_rescue(), None);
        assert_eq!(mission.level(), 2);
    }

    #[test]
    fn test_set_phase_emits_only_on_change() {
        let mut mission = MissionState::default();
        mission.drain_events();

        mission.set_phase(MissionPhase::Descent);
        mission.set_phase(MissionPhase::Descent);
        let events = mission.drain_events();
        assert_eq!(
            events,
            vec![StateEvent::PhaseChanged {
                phase: MissionPhase::Descent
            }]
        );
    }

    #[test]
    fn test_mutations_emit_typed_events() {
        let mut mission = MissionState::default();
        mission.drain_events();

        mission.add_score(LANDING_POINTS);
        mission.consume_fuel(10.0);
        mission.lose_life();
        mission.set_astronaut_aboard(true);

        let events = mission.drain_events();
        assert_eq!(
            events,
            vec![
                StateEvent::ScoreChanged {
                    score: LANDING_POINTS
                },
                StateEvent::FuelChanged {
                    fuel: FUEL_MAX - 10.0
                },
                StateEvent::LivesChanged {
                    lives: INITIAL_LIVES - 1
                },
                StateEvent::AstronautAboardChanged { aboard: true },
            ]
        );

        // Draining twice yields nothing new.
        assert!(mission.drain_events().is_empty());
    }

    #[test]
    fn test_reset_for_new_game() {
        let mut mission = MissionState::default();
        mission.add_score(999);
        mission.lose_life();
        mission.record_rescue();
        mission.set_phase(MissionPhase::GameOver);
        mission.drain_events();

        mission.reset_for_new_game();
        assert_eq!(mission.score(), 0);
        assert_eq!(mission.lives(), INITIAL_LIVES);
        assert_eq!(mission.rescued_count(), 0);
        assert_eq!(mission.level(), 1);
        assert_eq!(mission.phase(), MissionPhase::Descent);
        assert!(mission.is_running());

        let events = mission.drain_events();
        assert!(events.contains(&StateEvent::PhaseChanged {
            phase: MissionPhase::Descent
        }));
    }
}
