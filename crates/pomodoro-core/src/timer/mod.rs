mod engine;
mod mode;
mod settings;

pub use engine::{format_clock, Completion, Tick, TimerEngine, TimerState};
pub use mode::Mode;
pub use settings::{
    coerce_minutes, parse_minutes, Settings, DEFAULT_LONG_BREAK_INTERVAL,
    DEFAULT_LONG_BREAK_MINUTES, DEFAULT_SHORT_BREAK_MINUTES, DEFAULT_WORK_MINUTES,
};
