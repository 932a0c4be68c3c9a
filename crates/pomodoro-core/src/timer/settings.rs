//! Interval durations.
//!
//! Every value is coerced to at least 1 on the way in, so a `Settings` can
//! never produce a zero-length countdown. Free-form input (a text field, a
//! REPL argument) goes through [`parse_minutes`], which reads a leading
//! integer and falls back to 1 for anything else.

use serde::{Deserialize, Serialize};

use super::mode::Mode;

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;
pub const DEFAULT_LONG_BREAK_INTERVAL: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    /// Every n-th completed work interval is followed by a long break.
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
}

fn default_long_break_interval() -> u32 {
    DEFAULT_LONG_BREAK_INTERVAL
}

impl Settings {
    pub fn new(work_minutes: u32, short_break_minutes: u32, long_break_minutes: u32) -> Self {
        Self {
            work_minutes: coerce_minutes(work_minutes.into()),
            short_break_minutes: coerce_minutes(short_break_minutes.into()),
            long_break_minutes: coerce_minutes(long_break_minutes.into()),
            long_break_interval: DEFAULT_LONG_BREAK_INTERVAL,
        }
    }

    /// Build settings from raw text fields.
    pub fn from_input(work: &str, short_break: &str, long_break: &str) -> Self {
        Self::new(
            parse_minutes(work),
            parse_minutes(short_break),
            parse_minutes(long_break),
        )
    }

    pub fn with_long_break_interval(mut self, interval: u32) -> Self {
        self.long_break_interval = interval.max(1);
        self
    }

    /// Re-apply the minimum-of-one rule, e.g. after deserializing.
    pub fn normalized(self) -> Self {
        Self::new(
            self.work_minutes,
            self.short_break_minutes,
            self.long_break_minutes,
        )
        .with_long_break_interval(self.long_break_interval)
    }

    pub fn minutes_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    pub fn duration_secs(&self, mode: Mode) -> u64 {
        u64::from(self.minutes_for(mode)).saturating_mul(60)
    }

    /// Break that follows the work interval which brought the total to `completed_cycles`.
    pub fn break_after(&self, completed_cycles: u32) -> Mode {
        if completed_cycles % self.long_break_interval.max(1) == 0 {
            Mode::LongBreak
        } else {
            Mode::ShortBreak
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            long_break_interval: DEFAULT_LONG_BREAK_INTERVAL,
        }
    }
}

/// Clamp a minute count into `1..=u32::MAX`.
pub fn coerce_minutes(value: i64) -> u32 {
    value.clamp(1, i64::from(u32::MAX)) as u32
}

/// Read the leading integer of `input`, coerced to at least 1.
///
/// `"12"` and `"12abc"` give 12; `""`, `"abc"`, `"0"` and `"-3"` give 1.
pub fn parse_minutes(input: &str) -> u32 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 || negative {
        return 1;
    }
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    coerce_minutes(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_pomodoro() {
        let s = Settings::default();
        assert_eq!(s.duration_secs(Mode::Work), 25 * 60);
        assert_eq!(s.duration_secs(Mode::ShortBreak), 5 * 60);
        assert_eq!(s.duration_secs(Mode::LongBreak), 15 * 60);
        assert_eq!(s.long_break_interval, 4);
    }

    #[test]
    fn new_coerces_zero_to_one() {
        let s = Settings::new(0, 0, 7);
        assert_eq!(s.work_minutes, 1);
        assert_eq!(s.short_break_minutes, 1);
        assert_eq!(s.long_break_minutes, 7);
    }

    #[test]
    fn parse_minutes_reads_leading_integer() {
        assert_eq!(parse_minutes("12"), 12);
        assert_eq!(parse_minutes("  12abc"), 12);
        assert_eq!(parse_minutes("+3"), 3);
    }

    #[test]
    fn parse_minutes_falls_back_to_one() {
        assert_eq!(parse_minutes(""), 1);
        assert_eq!(parse_minutes("abc"), 1);
        assert_eq!(parse_minutes("0"), 1);
        assert_eq!(parse_minutes("-3"), 1);
    }

    #[test]
    fn parse_minutes_saturates_huge_values() {
        assert_eq!(parse_minutes("99999999999999999999999"), u32::MAX);
    }

    #[test]
    fn from_input_handles_garbage() {
        let s = Settings::from_input("50", "x", "");
        assert_eq!(s, Settings::new(50, 1, 1));
    }

    #[test]
    fn every_fourth_cycle_gets_long_break() {
        let s = Settings::default();
        assert_eq!(s.break_after(1), Mode::ShortBreak);
        assert_eq!(s.break_after(3), Mode::ShortBreak);
        assert_eq!(s.break_after(4), Mode::LongBreak);
        assert_eq!(s.break_after(8), Mode::LongBreak);
    }

    #[test]
    fn long_break_interval_is_at_least_one() {
        let s = Settings::default().with_long_break_interval(0);
        assert_eq!(s.long_break_interval, 1);
        assert_eq!(s.break_after(1), Mode::LongBreak);
    }
}
