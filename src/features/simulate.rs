//! Headless timer simulation.
//!
//! Runs the real engine on a manual clock with auto-advance on, moving the
//! clock from one deadline to the next, and records every phase completion.

use std::time::Duration;

use serde::Serialize;

use crate::features::focus::{
    EngineEvent, ManualClock, Phase, RecordingPlayer, Settings, Sound, TimerEngine, Timeline,
    AUTO_ADVANCE_DELAY,
};

/// One completed phase in a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulatedCompletion {
    /// 1-based position in the run.
    pub index: u32,
    /// Phase that ended.
    pub finished: Phase,
    /// Phase loaded next.
    pub next: Phase,
    /// Focus completions so far.
    pub completed_focus_sessions: u32,
    /// Virtual seconds since the run started.
    pub elapsed_seconds: u64,
}

/// Result of a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Settings the run used.
    pub settings: Settings,
    /// Completions in order.
    pub completions: Vec<SimulatedCompletion>,
    /// Virtual seconds until the last completion.
    pub elapsed_seconds: u64,
    /// Seconds spent in focus phases.
    pub focused_seconds: u64,
    /// Number of each cue requested.
    pub sounds: SoundCounts,
}

/// How often each cue was requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SoundCounts {
    /// Start cues.
    pub start: usize,
    /// Stop cues.
    pub stop: usize,
    /// Time-up cues.
    pub time_up: usize,
}

impl SoundCounts {
    fn from_log(log: &[Sound]) -> Self {
        log.iter().fold(Self::default(), |mut counts, sound| {
            match sound {
                Sound::Start => counts.start += 1,
                Sound::Stop => counts.stop += 1,
                Sound::TimeUp => counts.time_up += 1,
            }
            counts
        })
    }
}

/// Run the engine through `phases` completions.
#[must_use]
pub fn simulate(settings: Settings, phases: u32) -> SimulationReport {
    let clock = ManualClock::new();
    let sounds = RecordingPlayer::new();
    let mut engine = TimerEngine::new(
        settings,
        Box::new(Timeline::new(clock.clone())),
        Box::new(sounds.clone()),
    );
    engine.set_auto_advance(true);
    engine.start();

    let mut completions = Vec::new();
    let mut elapsed = 0;
    while completions.len() < phases as usize {
        // Jump straight to the next deadline: the end of the running phase
        // or the pending auto-start.
        let step = if engine.state().running {
            u64::from(engine.state().remaining_seconds)
        } else if engine.auto_start_pending() {
            AUTO_ADVANCE_DELAY.as_secs()
        } else {
            break;
        };
        clock.advance(Duration::from_secs(step));
        elapsed += step;
        engine.pump();

        for event in engine.drain_events() {
            if let EngineEvent::Completed {
                finished,
                next,
                completed_focus_sessions,
            } = event
            {
                completions.push(SimulatedCompletion {
                    index: u32::try_from(completions.len() + 1).unwrap_or(u32::MAX),
                    finished,
                    next,
                    completed_focus_sessions,
                    elapsed_seconds: elapsed,
                });
            }
        }
    }

    SimulationReport {
        settings,
        elapsed_seconds: completions.last().map_or(0, |c| c.elapsed_seconds),
        focused_seconds: engine.state().focused_seconds,
        completions,
        sounds: SoundCounts::from_log(&sounds.played()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_zero_phases() {
        let report = simulate(Settings::default(), 0);
        assert!(report.completions.is_empty());
        assert_eq!(report.elapsed_seconds, 0);
    }

    #[test]
    fn test_simulate_full_cycle() {
        let report = simulate(Settings::clamped(1, 1, 2, 2), 4);
        let phases: Vec<_> = report.completions.iter().map(|c| c.next).collect();
        assert_eq!(
            phases,
            vec![Phase::ShortBreak, Phase::Focus, Phase::LongBreak, Phase::Focus]
        );
        // 60 + 2 + 60 + 2 + 60 + 2 + 120
        assert_eq!(report.elapsed_seconds, 306);
        assert_eq!(report.focused_seconds, 120);
        assert_eq!(report.completions[2].completed_focus_sessions, 2);
    }

    #[test]
    fn test_simulate_sound_counts() {
        let report = simulate(Settings::clamped(1, 1, 1, 4), 3);
        assert_eq!(report.sounds.time_up, 3);
        // Initial start plus two auto-starts; the third auto-start is still pending.
        assert_eq!(report.sounds.start, 3);
        assert_eq!(report.sounds.stop, 0);
    }

    #[test]
    fn test_longest_allowed_run_is_quick() {
        let settings = Settings::clamped(100_000, 100_000, 100_000, 2);
        let started = std::time::Instant::now();
        let report = simulate(settings, 20);

        assert_eq!(report.completions.len(), 20);
        // 20 phases of 999 minutes with 19 auto-start delays between them
        assert_eq!(report.elapsed_seconds, 20 * 59_940 + 19 * 2);
        assert_eq!(report.focused_seconds, 10 * 59_940);
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn test_default_scenario_timing() {
        let report = simulate(Settings::default(), 1);
        let first = &report.completions[0];
        assert_eq!(first.finished, Phase::Focus);
        assert_eq!(first.next, Phase::ShortBreak);
        assert_eq!(first.elapsed_seconds, 1500);
    }
}
