//! Game loop thread — runs the simulation engine at 60Hz and fans out
//! each tick's snapshot, sound cues, and UI events to the sinks.
//!
//! The engine is created inside the thread so it never crosses a thread
//! boundary. Commands arrive via `mpsc` channel; the latest snapshot is
//! stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rescue_core::constants::TICK_RATE;
use rescue_core::state::GameStateSnapshot;
use rescue_sim::engine::{GameEngine, SimConfig};

use crate::sinks::{InputSource, Sinks};
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender plus the join handle for a clean shutdown.
pub fn spawn_game_loop(
    config: SimConfig,
    sinks: Sinks,
    input: Box<dyn InputSource>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, thread::JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = thread::Builder::new()
        .name("rescue-game-loop".into())
        .spawn(move || {
            run_game_loop(config, sinks, input, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until a Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    mut sinks: Sinks,
    mut input: Box<dyn InputSource>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = GameEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Sample input and advance one tick (the engine handles
        //    title/game-over freeze internally)
        engine.set_input(input.poll());
        let snapshot = engine.tick();

        // 3. Fan out the tick's output
        for cue in &snapshot.sound_cues {
            sinks.audio.play(*cue);
        }
        for event in &snapshot.ui_events {
            sinks.ui.handle(event);
        }
        if !snapshot.state_events.is_empty() {
            sinks.ui.hud_changed(&snapshot.hud);
        }
        sinks.render.present(&snapshot);

        // 4. Store the latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rescue_core::commands::PlayerCommand;
    use rescue_core::enums::{MissionPhase, SoundCue};
    use rescue_core::events::UiEvent;
    use crate::sinks::{NullInputSource, RecordingAudioSink, RecordingUiSink, Sinks};

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::RestartGame))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::RestartGame)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = GameEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);

        // Run enough ticks to populate entities
        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_thread_end_to_end() {
        let audio = RecordingAudioSink::default();
        let ui = RecordingUiSink::default();
        let mut sinks = Sinks::null();
        sinks.audio = Box::new(audio.clone());
        sinks.ui = Box::new(ui.clone());

        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(
            SimConfig::default(),
            sinks,
            Box::new(NullInputSource),
            latest.clone(),
        );

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        thread::sleep(Duration::from_millis(200));

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest
            .lock()
            .unwrap()
            .clone()
            .expect("loop should have published a snapshot");
        assert_eq!(snapshot.hud.phase, MissionPhase::Descent);
        assert!(snapshot.time.tick > 0);

        assert!(ui.events().contains(&UiEvent::ShowTitle));
        // No input held, so no thrust cue; the run may or may not contain
        // other cues depending on meteor positions, but never Shoot.
        assert!(!audio.cues().contains(&SoundCue::Shoot));
    }

    #[test]
    fn test_loop_exits_on_disconnect() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(
            SimConfig::default(),
            Sinks::null(),
            Box::new(NullInputSource),
            latest,
        );

        drop(tx);
        handle.join().unwrap();
    }
}
