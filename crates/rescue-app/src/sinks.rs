//! Output sinks and the input source.
//!
//! The engine is headless; a frontend plugs in by implementing these
//! traits. The shell ships null implementations (headless runs, tests),
//! logging implementations (the demo binary), and recording
//! implementations (assertions against captured output).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use rescue_core::commands::InputSnapshot;
use rescue_core::constants::TICK_RATE;
use rescue_core::enums::SoundCue;
use rescue_core::events::UiEvent;
use rescue_core::state::{GameStateSnapshot, HudView};

use crate::error::AppError;

/// Receives the full snapshot once per tick.
pub trait RenderSink: Send {
    fn present(&mut self, snapshot: &GameStateSnapshot);
}

/// Receives fire-and-forget sound cues.
pub trait AudioSink: Send {
    fn play(&mut self, cue: SoundCue);
}

/// Receives one-shot UI commands (title screen, game over) and HUD
/// updates whenever a mission counter changed.
pub trait UiSink: Send {
    fn handle(&mut self, event: &UiEvent);

    fn hud_changed(&mut self, _hud: &HudView) {}
}

/// Sampled once per tick for the control state.
pub trait InputSource: Send {
    fn poll(&mut self) -> InputSnapshot;
}

/// The sink bundle handed to the game loop thread.
pub struct Sinks {
    pub render: Box<dyn RenderSink>,
    pub audio: Box<dyn AudioSink>,
    pub ui: Box<dyn UiSink>,
}

impl Sinks {
    /// All-null bundle for headless runs.
    pub fn null() -> Self {
        Self {
            render: Box::new(NullRenderSink),
            audio: Box::new(NullAudioSink),
            ui: Box::new(NullUiSink),
        }
    }

    /// Install an audio sink from a fallible initializer. Initialization
    /// failure degrades to the silent sink; the game plays on without
    /// audio.
    pub fn set_audio(&mut self, result: Result<Box<dyn AudioSink>, AppError>) {
        match result {
            Ok(audio) => self.audio = audio,
            Err(err) => {
                log::warn!("audio unavailable, continuing silent: {err}");
                self.audio = Box::new(NullAudioSink);
            }
        }
    }
}

// --- Null implementations ---

pub struct NullRenderSink;

impl RenderSink for NullRenderSink {
    fn present(&mut self, _snapshot: &GameStateSnapshot) {}
}

pub struct NullAudioSink;

impl AudioSink for NullAudioSink {
    fn play(&mut self, _cue: SoundCue) {}
}

pub struct NullUiSink;

impl UiSink for NullUiSink {
    fn handle(&mut self, _event: &UiEvent) {}
}

/// Reports no input, ever.
pub struct NullInputSource;

impl InputSource for NullInputSource {
    fn poll(&mut self) -> InputSnapshot {
        InputSnapshot::default()
    }
}

// --- Logging implementations (demo binary) ---

/// Logs the HUD line once per second of simulation time.
#[derive(Default)]
pub struct HudRenderSink;

impl RenderSink for HudRenderSink {
    fn present(&mut self, snapshot: &GameStateSnapshot) {
        if snapshot.time.tick % TICK_RATE as u64 == 0 {
            log::info!(
                "t={:.0}s phase={:?} score={} lives={} fuel={:.0} rescued={} level={}",
                snapshot.time.elapsed_secs,
                snapshot.hud.phase,
                snapshot.hud.score,
                snapshot.hud.lives,
                snapshot.hud.fuel,
                snapshot.hud.rescued,
                snapshot.hud.level,
            );
        }
    }
}

pub struct LoggingAudioSink;

impl AudioSink for LoggingAudioSink {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("audio cue: {cue:?}");
    }
}

pub struct LoggingUiSink;

impl UiSink for LoggingUiSink {
    fn handle(&mut self, event: &UiEvent) {
        log::info!("ui event: {event:?}");
    }

    fn hud_changed(&mut self, hud: &HudView) {
        log::debug!("hud: {hud:?}");
    }
}

// --- Recording implementations ---

/// Captures every cue; `cues()` reads them back from any clone.
#[derive(Default, Clone)]
pub struct RecordingAudioSink {
    cues: Arc<Mutex<Vec<SoundCue>>>,
}

impl RecordingAudioSink {
    pub fn cues(&self) -> Vec<SoundCue> {
        self.cues.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl AudioSink for RecordingAudioSink {
    fn play(&mut self, cue: SoundCue) {
        if let Ok(mut cues) = self.cues.lock() {
            cues.push(cue);
        }
    }
}

/// Captures every UI event; `events()` reads them back from any clone.
#[derive(Default, Clone)]
pub struct RecordingUiSink {
    events: Arc<Mutex<Vec<UiEvent>>>,
}

impl RecordingUiSink {
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl UiSink for RecordingUiSink {
    fn handle(&mut self, event: &UiEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Replays a queued input script, one snapshot per poll; reports no input
/// once the script runs out.
#[derive(Default)]
pub struct ScriptedInputSource {
    script: VecDeque<InputSnapshot>,
}

impl ScriptedInputSource {
    pub fn new(script: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInputSource {
    fn poll(&mut self) -> InputSnapshot {
        self.script.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_audio_sink_captures_from_clone() {
        let recorder = RecordingAudioSink::default();
        let mut sink: Box<dyn AudioSink> = Box::new(recorder.clone());

        sink.play(SoundCue::Thrust);
        sink.play(SoundCue::Explosion);

        assert_eq!(recorder.cues(), vec![SoundCue::Thrust, SoundCue::Explosion]);
    }

    #[test]
    fn test_recording_ui_sink_captures_from_clone() {
        let recorder = RecordingUiSink::default();
        let mut sink: Box<dyn UiSink> = Box::new(recorder.clone());

        sink.handle(&UiEvent::ShowTitle);

        assert_eq!(recorder.events(), vec![UiEvent::ShowTitle]);
    }

    #[test]
    fn test_scripted_input_exhausts_to_default() {
        let pressed = InputSnapshot {
            thrust: true,
            ..Default::default()
        };
        let mut source = ScriptedInputSource::new([pressed]);

        assert_eq!(source.poll(), pressed);
        assert_eq!(source.poll(), InputSnapshot::default());
        assert_eq!(source.poll(), InputSnapshot::default());
    }

    #[test]
    fn test_audio_failure_degrades_to_silent() {
        let mut sinks = Sinks::null();
        sinks.set_audio(Err(AppError::AudioUnavailable("no device".into())));

        // Still playable; cues go nowhere instead of panicking.
        sinks.audio.play(SoundCue::Dock);
    }

    #[test]
    fn test_audio_success_installs_sink() {
        let recorder = RecordingAudioSink::default();
        let mut sinks = Sinks::null();
        sinks.set_audio(Ok(Box::new(recorder.clone())));

        sinks.audio.play(SoundCue::Land);
        assert_eq!(recorder.cues(), vec![SoundCue::Land]);
    }
}
