//! Parsing of interactive session lines.

use pomodoro_core::{Command, Mode, Settings, TaskId, ValidationError};

pub const HELP: &str = "\
Commands:
  start | pause | reset          control the timer
  mode <work|short|long>         switch mode (also: work, short, long)
  settings <work> <short> <long> set durations in minutes
  add <name>                     add a task
  select <id>                    work on a task
  done <id>                      toggle a task's completed flag
  inc <id>                       add a pomodoro to a task
  rm <id>                        delete a task
  tasks | status | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Status,
    Tasks,
    Help,
    Quit,
    Empty,
}

/// Parse one input line. `current` supplies values a line does not set,
/// such as the long-break interval for `settings`.
pub fn parse_line(line: &str, current: &Settings) -> Result<Input, ValidationError> {
    let line = line.trim_start();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));

    let input = match word.to_ascii_lowercase().as_str() {
        "" => Input::Empty,
        "start" => Input::Command(Command::Start),
        "pause" => Input::Command(Command::Pause),
        "reset" => Input::Command(Command::Reset),
        "work" | "short" | "long" => Input::Command(Command::SwitchMode(word.parse()?)),
        "mode" => Input::Command(Command::SwitchMode(rest.parse::<Mode>()?)),
        "settings" | "set" => {
            let args: Vec<&str> = rest.split_whitespace().collect();
            let [work, short, long] = args.as_slice() else {
                return Err(invalid("settings", "expected three values: <work> <short> <long>"));
            };
            let settings = Settings::from_input(work, short, long)
                .with_long_break_interval(current.long_break_interval);
            Input::Command(Command::ApplySettings(settings))
        }
        // Keep the name as typed; the ledger decides whether it is blank.
        "add" => Input::Command(Command::AddTask(rest.to_string())),
        "select" => Input::Command(Command::SelectTask(task_id(rest)?)),
        "done" | "toggle" => Input::Command(Command::ToggleCompleted(task_id(rest)?)),
        "inc" | "+" => Input::Command(Command::IncrementPomodoro(task_id(rest)?)),
        "rm" | "delete" => Input::Command(Command::RemoveTask(task_id(rest)?)),
        "tasks" | "ls" => Input::Tasks,
        "status" => Input::Status,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => {
            return Err(invalid(
                "command",
                &format!("unknown command '{other}' (try 'help')"),
            ))
        }
    };
    Ok(input)
}

fn task_id(rest: &str) -> Result<TaskId, ValidationError> {
    if rest.trim().is_empty() {
        return Err(invalid("task id", "missing task number"));
    }
    rest.parse()
}

fn invalid(field: &str, message: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        message: message.into(),
    }
}
