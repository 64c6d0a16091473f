//! Application state shared between the shell and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use rescue_core::commands::PlayerCommand;
use rescue_core::state::GameStateSnapshot;

use crate::error::AppError;

/// Commands sent from the shell to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared shell state.
///
/// The command sender lives behind a `Mutex<Option<...>>` because it does
/// not exist before the loop is attached, and `mpsc::Sender` is Send but
/// not Sync. The latest snapshot is shared with the game loop thread via
/// `Arc<Mutex<...>>` for synchronous polling.
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a spawned game loop's command sender. Fails if a loop is
    /// already attached.
    pub fn attach_loop(&self, tx: mpsc::Sender<GameLoopCommand>) -> Result<(), AppError> {
        let mut running = self.running.lock().map_err(|_| AppError::StatePoisoned)?;
        if *running {
            return Err(AppError::AlreadyRunning);
        }

        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::StatePoisoned)?;
        *tx_lock = Some(tx);
        *running = true;
        Ok(())
    }

    /// Forward a player command to the game loop thread.
    pub fn send_command(&self, command: PlayerCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::StatePoisoned)?;
        let tx = tx_lock.as_ref().ok_or(AppError::LoopNotRunning)?;
        tx.send(GameLoopCommand::Player(command))
            .map_err(|_| AppError::LoopNotRunning)
    }

    /// The latest snapshot, if the loop has produced one.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }

    /// Ask the game loop thread to exit and detach it. Idempotent: a
    /// second call is a no-op.
    pub fn shutdown(&self) -> Result<(), AppError> {
        let mut tx_lock = self.command_tx.lock().map_err(|_| AppError::StatePoisoned)?;
        if let Some(tx) = tx_lock.take() {
            // The loop may already have exited on disconnect; either way
            // it is no longer ours.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }

        let mut running = self.running.lock().map_err(|_| AppError::StatePoisoned)?;
        *running = false;
        Ok(())
    }
}
