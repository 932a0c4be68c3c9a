//! One widget instance: a timer engine, a task ledger and an alert sink.
//!
//! The engine and the ledger never talk to each other. The operator picks a
//! task, then starts the timer; the session only routes [`Command`]s and
//! fires the alert when an interval ends on its own.

use chrono::Utc;
use tracing::warn;

use crate::alert::Alert;
use crate::events::Event;
use crate::task::{TaskId, TaskLedger};
use crate::timer::{Mode, Settings, TimerEngine};

/// Operator actions, plus the once-per-second tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Reset,
    SwitchMode(Mode),
    ApplySettings(Settings),
    AddTask(String),
    SelectTask(TaskId),
    ToggleCompleted(TaskId),
    IncrementPomodoro(TaskId),
    RemoveTask(TaskId),
    Tick,
}

pub struct Session {
    engine: TimerEngine,
    ledger: TaskLedger,
    alert: Box<dyn Alert>,
    alerts_requested: u64,
}

impl Session {
    pub fn new(settings: Settings, alert: Box<dyn Alert>) -> Self {
        Self {
            engine: TimerEngine::new(settings),
            ledger: TaskLedger::new(),
            alert,
            alerts_requested: 0,
        }
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn ledger(&self) -> &TaskLedger {
        &self.ledger
    }

    /// Number of completion alerts requested so far, successful or not.
    pub fn alerts_requested(&self) -> u64 {
        self.alerts_requested
    }

    /// Apply one command. Returns `None` when nothing changed.
    pub fn dispatch(&mut self, command: Command) -> Option<Event> {
        match command {
            Command::Start => self.engine.start(),
            Command::Pause => self.engine.pause(),
            Command::Reset => Some(self.engine.reset()),
            Command::SwitchMode(mode) => Some(self.engine.switch_mode(mode)),
            Command::ApplySettings(settings) => Some(self.engine.apply_settings(settings)),
            Command::Tick => self.tick(),
            Command::AddTask(name) => self.ledger.add_task(&name).map(|t| Event::TaskAdded {
                id: t.id,
                name: t.name.clone(),
                at: Utc::now(),
            }),
            Command::SelectTask(id) => {
                let selected = self.ledger.select_task(id);
                Some(Event::TaskSelected {
                    id: selected.map(|t| t.id),
                    name: selected.map(|t| t.name.clone()),
                    at: Utc::now(),
                })
            }
            Command::ToggleCompleted(id) => {
                self.ledger
                    .toggle_completed(id)
                    .map(|completed| Event::TaskToggled {
                        id,
                        completed,
                        at: Utc::now(),
                    })
            }
            Command::IncrementPomodoro(id) => {
                self.ledger
                    .increment_pomodoro(id)
                    .map(|pomodoro_count| Event::PomodoroIncremented {
                        id,
                        pomodoro_count,
                        at: Utc::now(),
                    })
            }
            Command::RemoveTask(id) => self.ledger.remove_task(id).map(|removal| Event::TaskRemoved {
                id,
                selection_cleared: removal.selection_cleared,
                at: Utc::now(),
            }),
        }
    }

    /// Advance the timer by one second, alerting on completion.
    pub fn tick(&mut self) -> Option<Event> {
        let event = self.engine.tick()?;
        if matches!(event, Event::TimerCompleted { .. }) {
            self.alerts_requested += 1;
            if let Err(e) = self.alert.play() {
                warn!(error = %e, "completion alert failed");
            }
        }
        Some(event)
    }

    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.engine.mode(),
            remaining_secs: self.engine.remaining_secs(),
            total_secs: self.engine.total_secs(),
            clock: self.engine.clock(),
            is_running: self.engine.is_running(),
            completed_work_cycles: self.engine.completed_work_cycles(),
            current_task: self.ledger.selected_name().map(str::to_string),
            at: Utc::now(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("engine", &self.engine)
            .field("ledger", &self.ledger)
            .field("alerts_requested", &self.alerts_requested)
            .finish_non_exhaustive()
    }
}
