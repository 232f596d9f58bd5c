//! The timer/session engine.
//!
//! [`TimerEngine`] owns the countdown and decides every phase transition.
//! It is driven from outside: commands come from the user, ticks and the
//! deferred auto-start come from a [`Scheduler`] drained by [`TimerEngine::pump`].

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::phase::Phase;
use super::schedule::{Fired, Scheduler, TaskId};
use super::settings::Settings;
use super::sound::{Sound, SoundPlayer};

/// Delay before the next phase starts by itself when auto-advance is on.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(2);

/// Live timer state, read by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerState {
    /// Current phase.
    pub phase: Phase,
    /// Seconds left in the current phase.
    pub remaining_seconds: u32,
    /// Whether the countdown is active.
    pub running: bool,
    /// Focus phases completed since start or the last statistics reset.
    pub completed_focus_sessions: u32,
    /// Whether sound requests are suppressed.
    pub muted: bool,
    /// Whether the next phase starts by itself after a completion.
    pub auto_advance: bool,
    /// Whether the last focus completion scheduled a long break.
    pub long_break_due: bool,
    /// Seconds counted down in focus phases.
    pub focused_seconds: u64,
}

impl TimerState {
    fn new(settings: &Settings) -> Self {
        Self {
            phase: Phase::Focus,
            remaining_seconds: settings.duration_for(Phase::Focus),
            running: false,
            completed_focus_sessions: 0,
            muted: false,
            auto_advance: false,
            long_break_due: false,
            focused_seconds: 0,
        }
    }
}

/// Something that happened inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// Countdown started (manually or by auto-advance).
    Started {
        /// Phase that started.
        phase: Phase,
    },
    /// Countdown paused.
    Paused {
        /// Phase that was paused.
        phase: Phase,
    },
    /// Current phase rewound to its full length.
    Reset {
        /// Phase that was reset.
        phase: Phase,
    },
    /// User moved to another phase.
    PhaseSwitched {
        /// New phase.
        phase: Phase,
    },
    /// A phase ran out.
    Completed {
        /// Phase that just ended.
        finished: Phase,
        /// Phase that is now loaded.
        next: Phase,
        /// Focus completions so far.
        completed_focus_sessions: u32,
    },
    /// A deferred start was scheduled.
    AutoStartScheduled,
    /// The deferred start fired.
    AutoStarted,
    /// A pending deferred start was dropped by a manual command.
    AutoStartCancelled,
    /// New settings were applied.
    SettingsApplied,
    /// Session counters were cleared.
    StatisticsReset,
}

/// Pomodoro state machine.
pub struct TimerEngine {
    settings: Settings,
    state: TimerState,
    scheduler: Box<dyn Scheduler>,
    player: Box<dyn SoundPlayer>,
    pending_start: Option<TaskId>,
    events: Vec<EngineEvent>,
}

impl TimerEngine {
    /// Create an engine loaded with a stopped focus phase.
    #[must_use]
    pub fn new(
        settings: Settings,
        scheduler: Box<dyn Scheduler>,
        player: Box<dyn SoundPlayer>,
    ) -> Self {
        Self {
            state: TimerState::new(&settings),
            settings,
            scheduler,
            player,
            pending_start: None,
            events: Vec::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &TimerState {
        &self.state
    }

    /// Settings in effect.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Full length of a phase under the current settings.
    #[must_use]
    pub const fn duration_for(&self, phase: Phase) -> u32 {
        self.settings.duration_for(phase)
    }

    /// Whether a deferred auto-start is waiting to fire.
    #[must_use]
    pub const fn auto_start_pending(&self) -> bool {
        self.pending_start.is_some()
    }

    /// Focus completions left before the next long break.
    #[must_use]
    pub const fn sessions_until_long_break(&self) -> u32 {
        let period = self.settings.sessions_until_long_break();
        period - self.state.completed_focus_sessions % period
    }

    /// Take the events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start the countdown. No effect while already running.
    pub fn start(&mut self) {
        self.cancel_auto_start();
        self.begin();
    }

    /// Pause the countdown. No effect while already paused, apart from
    /// dropping a pending auto-start.
    pub fn pause(&mut self) {
        self.cancel_auto_start();
        if !self.state.running {
            return;
        }
        self.halt();
        self.emit(Sound::Stop);
        debug!(phase = %self.state.phase, remaining = self.state.remaining_seconds, "paused");
        self.events.push(EngineEvent::Paused {
            phase: self.state.phase,
        });
    }

    /// Start when paused, pause when running.
    pub fn toggle(&mut self) {
        if self.state.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and rewind the current phase to its full length.
    pub fn reset(&mut self) {
        self.cancel_auto_start();
        self.halt();
        self.state.remaining_seconds = self.duration_for(self.state.phase);
        self.emit(Sound::Stop);
        debug!(phase = %self.state.phase, "reset");
        self.events.push(EngineEvent::Reset {
            phase: self.state.phase,
        });
    }

    /// Load another phase at its full length.
    ///
    /// Returns `false` and changes nothing while the countdown is running.
    pub fn switch_phase(&mut self, target: Phase) -> bool {
        self.cancel_auto_start();
        if self.state.running {
            debug!(%target, "phase switch rejected while running");
            return false;
        }
        self.state.phase = target;
        self.state.remaining_seconds = self.duration_for(target);
        self.emit(Sound::Stop);
        debug!(phase = %target, "switched phase");
        self.events.push(EngineEvent::PhaseSwitched { phase: target });
        true
    }

    /// Replace the settings and reload the current phase under them.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.cancel_auto_start();
        self.halt();
        self.settings = settings;
        self.state.remaining_seconds = self.duration_for(self.state.phase);
        info!(
            focus = settings.focus_minutes(),
            short_break = settings.short_break_minutes(),
            long_break = settings.long_break_minutes(),
            sessions_until_long_break = settings.sessions_until_long_break(),
            "settings applied"
        );
        self.events.push(EngineEvent::SettingsApplied);
    }

    /// Clear the session counters.
    pub fn reset_statistics(&mut self) {
        self.state.completed_focus_sessions = 0;
        self.state.long_break_due = false;
        self.state.focused_seconds = 0;
        info!("statistics reset");
        self.events.push(EngineEvent::StatisticsReset);
    }

    /// Suppress or allow sound requests.
    pub fn set_muted(&mut self, muted: bool) {
        self.state.muted = muted;
    }

    /// Enable or disable auto-advance. Disabling drops a pending auto-start.
    pub fn set_auto_advance(&mut self, auto_advance: bool) {
        self.state.auto_advance = auto_advance;
        if !auto_advance {
            self.cancel_auto_start();
        }
    }

    /// Count down one second.
    ///
    /// Ignored while paused. Reaching zero completes the phase.
    pub fn tick(&mut self) {
        if !self.state.running {
            return;
        }
        if self.state.remaining_seconds > 0 {
            self.state.remaining_seconds -= 1;
            if self.state.phase == Phase::Focus {
                self.state.focused_seconds += 1;
            }
        }
        if self.state.remaining_seconds == 0 {
            self.complete();
        }
    }

    /// Apply every tick and deferred task that has come due.
    pub fn pump(&mut self) {
        while let Some(fired) = self.scheduler.next_fired() {
            match fired {
                Fired::Tick => self.tick(),
                Fired::Deferred(task) => self.fire_deferred(task),
            }
        }
    }

    fn fire_deferred(&mut self, task: TaskId) {
        if self.pending_start != Some(task) {
            debug!(?task, "ignoring stale deferred task");
            return;
        }
        self.pending_start = None;
        self.events.push(EngineEvent::AutoStarted);
        self.begin();
    }

    fn begin(&mut self) {
        if self.state.running {
            return;
        }
        self.state.running = true;
        self.scheduler.subscribe_ticks();
        self.emit(Sound::Start);
        debug!(phase = %self.state.phase, remaining = self.state.remaining_seconds, "started");
        self.events.push(EngineEvent::Started {
            phase: self.state.phase,
        });
    }

    fn halt(&mut self) {
        self.state.running = false;
        self.scheduler.cancel_ticks();
    }

    fn complete(&mut self) {
        let finished = self.state.phase;
        self.emit(Sound::TimeUp);
        self.halt();

        let next = if finished == Phase::Focus {
            self.state.completed_focus_sessions += 1;
            self.state.long_break_due = self.state.completed_focus_sessions
                % self.settings.sessions_until_long_break()
                == 0;
            if self.state.long_break_due {
                Phase::LongBreak
            } else {
                Phase::ShortBreak
            }
        } else {
            if finished == Phase::LongBreak {
                self.state.long_break_due = false;
            }
            Phase::Focus
        };
        self.state.phase = next;
        self.state.remaining_seconds = self.duration_for(next);

        info!(
            %finished,
            %next,
            completed_focus_sessions = self.state.completed_focus_sessions,
            "phase completed"
        );
        self.events.push(EngineEvent::Completed {
            finished,
            next,
            completed_focus_sessions: self.state.completed_focus_sessions,
        });

        if self.state.auto_advance {
            self.cancel_auto_start();
            self.pending_start = Some(self.scheduler.after(AUTO_ADVANCE_DELAY));
            self.events.push(EngineEvent::AutoStartScheduled);
        }
    }

    fn cancel_auto_start(&mut self) {
        if let Some(task) = self.pending_start.take() {
            self.scheduler.cancel(task);
            debug!(?task, "auto-start cancelled");
            self.events.push(EngineEvent::AutoStartCancelled);
        }
    }

    fn emit(&self, sound: Sound) {
        if self.state.muted {
            return;
        }
        if let Err(e) = self.player.play(sound) {
            warn!(sound = sound.as_str(), error = %e, "sound request failed");
        }
    }
}

impl std::fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("settings", &self.settings)
            .field("state", &self.state)
            .field("pending_start", &self.pending_start)
            .finish_non_exhaustive()
    }
}
