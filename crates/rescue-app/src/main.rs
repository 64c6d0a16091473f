//! Headless demo shell: runs the simulation for a few seconds with
//! logging sinks. A real frontend attaches its own sinks instead.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use rescue_app::game_loop;
use rescue_app::sinks::{HudRenderSink, LoggingAudioSink, LoggingUiSink, NullInputSource, Sinks};
use rescue_app::state::AppState;
use rescue_core::commands::PlayerCommand;
use rescue_sim::engine::SimConfig;

fn main() -> Result<()> {
    env_logger::init();

    let state = AppState::new();
    let sinks = Sinks {
        render: Box::new(HudRenderSink),
        audio: Box::new(LoggingAudioSink),
        ui: Box::new(LoggingUiSink),
    };

    let (tx, handle) = game_loop::spawn_game_loop(
        SimConfig::default(),
        sinks,
        Box::new(NullInputSource),
        state.latest_snapshot.clone(),
    );
    state.attach_loop(tx)?;
    state.send_command(PlayerCommand::StartGame)?;

    thread::sleep(Duration::from_secs(5));

    if let Some(snapshot) = state.snapshot() {
        log::info!(
            "demo finished: score {}, lives {}, phase {:?}",
            snapshot.hud.score,
            snapshot.hud.lives,
            snapshot.hud.phase,
        );
    }

    state.shutdown()?;
    let _ = handle.join();
    Ok(())
}
