use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::TaskId;
use crate::timer::{Mode, Settings};

/// Every state change in a session produces an Event.
/// Front ends render them; tests assert on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    ModeSwitched {
        from: Mode,
        to: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// Natural end of an interval. The alert fires on this event only.
    TimerCompleted {
        completed: Mode,
        next: Mode,
        completed_work_cycles: u32,
        at: DateTime<Utc>,
    },
    SettingsApplied {
        settings: Settings,
        /// Full duration of the active mode; saving restarts its countdown.
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TaskAdded {
        id: TaskId,
        name: String,
        at: DateTime<Utc>,
    },
    TaskToggled {
        id: TaskId,
        completed: bool,
        at: DateTime<Utc>,
    },
    PomodoroIncremented {
        id: TaskId,
        pomodoro_count: u32,
        at: DateTime<Utc>,
    },
    TaskRemoved {
        id: TaskId,
        selection_cleared: bool,
        at: DateTime<Utc>,
    },
    /// `id` is `None` when the requested task did not exist and the
    /// selection was cleared instead.
    TaskSelected {
        id: Option<TaskId>,
        name: Option<String>,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        remaining_secs: u64,
        total_secs: u64,
        clock: String,
        is_running: bool,
        completed_work_cycles: u32,
        current_task: Option<String>,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = Event::TimerCompleted {
            completed: Mode::Work,
            next: Mode::LongBreak,
            completed_work_cycles: 4,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "timer_completed");
        assert_eq!(json["next"], "long_break");
        assert_eq!(json["completed_work_cycles"], 4);
    }
}
