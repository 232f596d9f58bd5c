//! Pomodoro timer core.
//!
//! - `engine`: the timer/session state machine
//! - `schedule`: tick subscription and deferred tasks
//! - `settings`: validated durations and long-break period
//! - `sound`: audio cue players
//! - `display`: formatting derived from timer state

pub mod display;
pub mod engine;
pub mod phase;
pub mod schedule;
pub mod settings;
pub mod sound;

pub use display::{format_mmss, progress_percent};
pub use engine::{EngineEvent, TimerEngine, TimerState, AUTO_ADVANCE_DELAY};
pub use phase::Phase;
pub use schedule::{Clock, Fired, ManualClock, Scheduler, SystemClock, TaskId, Timeline};
pub use settings::Settings;
#[cfg(feature = "audio")]
pub use sound::FilePlayer;
pub use sound::{
    player_for, BellPlayer, RecordingPlayer, SilentPlayer, Sound, SoundBackend, SoundError,
    SoundFiles, SoundPlayer, MAX_VOLUME,
};
