//! Text and JSON output for the interactive session.

use std::io::{self, Write};

use pomodoro_core::{format_clock, Command, Event, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    /// One JSON object per line.
    Json,
}

pub fn event(out: &mut impl Write, format: OutputFormat, event: &Event) -> io::Result<()> {
    if format == OutputFormat::Json {
        return json_line(out, event);
    }
    match event {
        Event::TimerStarted {
            mode,
            remaining_secs,
            ..
        } => writeln!(out, "{mode} started ({})", format_clock(*remaining_secs)),
        Event::TimerPaused {
            mode,
            remaining_secs,
            ..
        } => writeln!(out, "{mode} paused at {}", format_clock(*remaining_secs)),
        Event::TimerReset {
            mode,
            remaining_secs,
            ..
        } => writeln!(out, "{mode} reset to {}", format_clock(*remaining_secs)),
        Event::ModeSwitched {
            to, remaining_secs, ..
        } => writeln!(out, "Switched to {to} ({})", format_clock(*remaining_secs)),
        Event::TimerCompleted {
            completed,
            next,
            completed_work_cycles,
            ..
        } => {
            writeln!(out)?;
            writeln!(
                out,
                "{completed} complete. Next: {next}. Completed Cycles: {completed_work_cycles}"
            )
        }
        Event::SettingsApplied {
            settings,
            remaining_secs,
            ..
        } => writeln!(
            out,
            "Settings saved: work {}m, short break {}m, long break {}m ({} left)",
            settings.work_minutes,
            settings.short_break_minutes,
            settings.long_break_minutes,
            format_clock(*remaining_secs)
        ),
        Event::TaskAdded { id, name, .. } => writeln!(out, "Added task [{id}] {name}"),
        Event::TaskToggled { id, completed, .. } => {
            let state = if *completed { "done" } else { "not done" };
            writeln!(out, "Task [{id}] marked {state}")
        }
        Event::PomodoroIncremented {
            id, pomodoro_count, ..
        } => writeln!(out, "Task [{id}] now has {pomodoro_count} pomodoros"),
        Event::TaskRemoved {
            id,
            selection_cleared,
            ..
        } => {
            writeln!(out, "Removed task [{id}]")?;
            if *selection_cleared {
                writeln!(out, "No task selected")?;
            }
            Ok(())
        }
        Event::TaskSelected { name, .. } => match name {
            Some(name) => writeln!(out, "Working on: {name}"),
            None => writeln!(out, "No task selected"),
        },
        Event::StateSnapshot { .. } => writeln!(out, "{}", status_text(event)),
    }
}

/// Message for a command that changed nothing.
pub fn unchanged(out: &mut impl Write, format: OutputFormat, command: &Command) -> io::Result<()> {
    let message = match command {
        Command::Start => "Timer is already running".to_string(),
        Command::Pause => "Timer is already paused".to_string(),
        Command::AddTask(_) => "Nothing added: task name is blank".to_string(),
        Command::ToggleCompleted(id) | Command::IncrementPomodoro(id) | Command::RemoveTask(id) => {
            format!("No task [{id}]")
        }
        _ => return Ok(()),
    };
    message_line(out, format, &message)
}

pub fn message_line(out: &mut impl Write, format: OutputFormat, message: &str) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{message}"),
        OutputFormat::Json => json_line(out, &serde_json::json!({ "message": message })),
    }
}

/// Redraw the running clock in place. Text mode only.
pub fn clock(out: &mut impl Write, format: OutputFormat, session: &Session) -> io::Result<()> {
    if format == OutputFormat::Json {
        return Ok(());
    }
    let engine = session.engine();
    write!(out, "\r{} {}   ", engine.mode(), engine.clock())?;
    out.flush()
}

pub fn tasks(out: &mut impl Write, format: OutputFormat, session: &Session) -> io::Result<()> {
    let ledger = session.ledger();
    if format == OutputFormat::Json {
        return json_line(out, ledger.tasks());
    }
    if ledger.is_empty() {
        return writeln!(out, "No tasks yet. Add one with: add <name>");
    }
    for task in ledger.tasks() {
        let check = if task.completed { "x" } else { " " };
        let marker = if ledger.selected_id() == Some(task.id) {
            "  <- current"
        } else {
            ""
        };
        writeln!(
            out,
            "[{}] [{check}] {}  ({} pomodoros){marker}",
            task.id, task.name, task.pomodoro_count
        )?;
    }
    Ok(())
}

fn status_text(snapshot: &Event) -> String {
    let Event::StateSnapshot {
        mode,
        clock,
        is_running,
        completed_work_cycles,
        current_task,
        ..
    } = snapshot
    else {
        return String::new();
    };
    let task = match current_task {
        Some(name) => format!("Working on: {name}"),
        None => "No task selected".to_string(),
    };
    let state = if *is_running { "running" } else { "paused" };
    format!("{task}\n{mode} {clock} [{state}]\nCompleted Cycles: {completed_work_cycles}")
}

fn json_line<T: serde::Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}
