//! # Pomodoro Core Library
//!
//! Business logic for a single-screen Pomodoro widget: a countdown that
//! alternates work and break intervals, and a small task list beside it.
//! Front ends (the bundled CLI, or anything else) own the once-per-second
//! driver and the rendering; this crate owns the state.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a pure `tick(state) -> state'` transition wrapped by an
//!   owner that emits [`Event`]s. No internal thread.
//! - **Task Ledger**: ordered in-memory task list with an optional selection.
//! - **Session**: one engine, one ledger and one [`Alert`] per widget instance.
//! - **Storage**: TOML configuration for default durations and alerts.
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`TaskLedger`]: Task list and selection
//! - [`Session`]: Command routing and completion alerts
//! - [`Config`]: Application configuration management

pub mod alert;
pub mod error;
pub mod events;
pub mod session;
pub mod storage;
pub mod task;
pub mod timer;

pub use alert::{Alert, SilentAlert, TerminalBell};
pub use error::{AlertError, ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use session::{Command, Session};
pub use storage::Config;
pub use task::{Task, TaskId, TaskLedger};
pub use timer::{format_clock, Mode, Settings, TimerEngine, TimerState};
