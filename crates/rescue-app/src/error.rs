//! Shell error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A command was sent before the game loop thread was attached, or
    /// after it shut down.
    #[error("game loop is not running")]
    LoopNotRunning,

    /// A second game loop was attached while one was already running.
    #[error("game loop is already running")]
    AlreadyRunning,

    /// A shared-state mutex was poisoned by a panicking thread.
    #[error("shared state lock poisoned")]
    StatePoisoned,

    /// The audio backend failed to initialize. The shell degrades to a
    /// silent sink rather than aborting.
    #[error("audio device unavailable: {0}")]
    AudioUnavailable(String),
}
