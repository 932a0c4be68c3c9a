//! Timer engine implementation.
//!
//! The countdown itself is the pure function [`TimerState::tick`]: it takes a
//! state and the active [`Settings`] and returns the next state plus an
//! optional [`Completion`]. [`TimerEngine`] owns one state, applies operator
//! commands to it and reports every change as an [`Event`]. It has no
//! internal thread; the caller drives `tick()` once per elapsed second.
//!
//! ## State Transitions
//!
//! ```text
//! Work ──complete──> ShortBreak | LongBreak ──complete──> Work
//!   (each mode is either Running or Paused; completion always pauses)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(Settings::default());
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event::TimerCompleted) when the interval ends
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::mode::Mode;
use super::settings::Settings;
use crate::events::Event;

/// Countdown state of one widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: Mode,
    pub remaining_secs: u64,
    pub is_running: bool,
    pub completed_work_cycles: u32,
}

/// A natural end of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub completed: Mode,
    pub next: Mode,
    pub completed_work_cycles: u32,
}

/// Result of advancing a [`TimerState`] by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub state: TimerState,
    pub completion: Option<Completion>,
}

impl TimerState {
    /// Work mode, paused, full work duration, no cycles.
    pub fn initial(settings: &Settings) -> Self {
        Self {
            mode: Mode::Work,
            remaining_secs: settings.duration_secs(Mode::Work),
            is_running: false,
            completed_work_cycles: 0,
        }
    }

    /// Advance by one second.
    ///
    /// A paused state is returned unchanged. Reaching zero completes the
    /// interval within the same call, so no tick ever observes a running
    /// state at 00:00.
    pub fn tick(self, settings: &Settings) -> Tick {
        if !self.is_running {
            return Tick {
                state: self,
                completion: None,
            };
        }
        let remaining_secs = self.remaining_secs.saturating_sub(1);
        if remaining_secs > 0 {
            return Tick {
                state: TimerState {
                    remaining_secs,
                    ..self
                },
                completion: None,
            };
        }
        self.complete(settings)
    }

    /// Finish the current interval and move to the next mode, paused.
    pub fn complete(self, settings: &Settings) -> Tick {
        let (next, completed_work_cycles) = match self.mode {
            Mode::Work => {
                let cycles = self.completed_work_cycles.saturating_add(1);
                (settings.break_after(cycles), cycles)
            }
            Mode::ShortBreak | Mode::LongBreak => (Mode::Work, self.completed_work_cycles),
        };
        Tick {
            state: TimerState {
                mode: next,
                remaining_secs: settings.duration_secs(next),
                is_running: false,
                completed_work_cycles,
            },
            completion: Some(Completion {
                completed: self.mode,
                next,
                completed_work_cycles,
            }),
        }
    }
}

/// Core timer engine.
///
/// Owns the settings and the countdown state. All commands are idempotent
/// where it makes sense (`start` while running, `pause` while paused) and
/// return `None` in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    settings: Settings,
    state: TimerState,
}

impl TimerEngine {
    /// Create a new engine in Work mode, paused, with the full work duration.
    pub fn new(settings: Settings) -> Self {
        let settings = settings.normalized();
        Self {
            state: TimerState::initial(&settings),
            settings,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.state.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn completed_work_cycles(&self) -> u32 {
        self.state.completed_work_cycles
    }

    /// Configured length of the current mode.
    pub fn total_secs(&self) -> u64 {
        self.settings.duration_secs(self.state.mode)
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.state.remaining_secs)
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.state.is_running {
            return None;
        }
        self.state.is_running = true;
        debug!(mode = %self.state.mode, remaining_secs = self.state.remaining_secs, "timer started");
        Some(Event::TimerStarted {
            mode: self.state.mode,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.is_running {
            return None;
        }
        self.state.is_running = false;
        debug!(mode = %self.state.mode, remaining_secs = self.state.remaining_secs, "timer paused");
        Some(Event::TimerPaused {
            mode: self.state.mode,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        })
    }

    /// Stop and restore the full duration of the current mode.
    pub fn reset(&mut self) -> Event {
        self.state.is_running = false;
        self.state.remaining_secs = self.total_secs();
        debug!(mode = %self.state.mode, "timer reset");
        Event::TimerReset {
            mode: self.state.mode,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Jump to `target`, abandoning any progress. Always leaves the timer paused.
    pub fn switch_mode(&mut self, target: Mode) -> Event {
        let from = self.state.mode;
        self.state.is_running = false;
        self.state.mode = target;
        self.state.remaining_secs = self.settings.duration_secs(target);
        debug!(%from, to = %target, "mode switched");
        Event::ModeSwitched {
            from,
            to: target,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Call once per elapsed second. Returns `Some(Event::TimerCompleted)`
    /// when the interval ends.
    pub fn tick(&mut self) -> Option<Event> {
        let Tick { state, completion } = self.state.tick(&self.settings);
        self.state = state;
        let completion = completion?;
        info!(
            completed = %completion.completed,
            next = %completion.next,
            cycles = completion.completed_work_cycles,
            "interval completed"
        );
        Some(Event::TimerCompleted {
            completed: completion.completed,
            next: completion.next,
            completed_work_cycles: completion.completed_work_cycles,
            at: Utc::now(),
        })
    }

    /// Replace the configured durations.
    ///
    /// Saving restarts the active mode's countdown from its configured
    /// duration, whether or not that duration changed. The running flag is
    /// left alone.
    pub fn apply_settings(&mut self, settings: Settings) -> Event {
        self.settings = settings.normalized();
        self.state.remaining_secs = self.total_secs();
        debug!(settings = ?self.settings, mode = %self.state.mode, "settings applied");
        Event::SettingsApplied {
            settings: self.settings,
            remaining_secs: self.state.remaining_secs,
            at: Utc::now(),
        }
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// Format seconds as `MM:SS`. Minutes are not wrapped at 60.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
