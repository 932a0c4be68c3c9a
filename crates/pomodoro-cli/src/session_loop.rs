//! Single-threaded event loop for an interactive session.
//!
//! Input lines and pacer ticks are handled one at a time from a single
//! `select!`, so a tick never overlaps an operator action. Lines are split on
//! raw bytes and decoded lossily; undecodable input becomes an unknown
//! command instead of ending the session.

use std::borrow::Cow;
use std::io::Write;

use pomodoro_core::error::Result;
use pomodoro_core::Session;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::input::{parse_line, Input, HELP};
use crate::pacer::Pacer;
use crate::render::{self, OutputFormat};

/// Run until `quit` or end of input. The pacer is released on return.
pub async fn drive<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.split(b'\n');
    let mut pacer = Pacer::new();

    render::event(out, format, &session.snapshot())?;

    loop {
        pacer.sync(session.engine().is_running());

        tokio::select! {
            segment = lines.next_segment() => {
                let Some(bytes) = segment? else {
                    debug!("input closed");
                    break;
                };
                let line = decode_line(&bytes);
                if !handle_line(session, &line, out, format)? {
                    break;
                }
            }
            _ = pacer.tick() => {
                match session.tick() {
                    Some(event) => render::event(out, format, &event)?,
                    None => render::clock(out, format, session)?,
                }
            }
        }
    }

    pacer.sync(false);
    debug_assert!(!pacer.is_armed());
    out.flush()?;
    Ok(())
}

fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    let line = String::from_utf8_lossy(bytes);
    if matches!(line, Cow::Owned(_)) {
        debug!(len = bytes.len(), "input line was not valid UTF-8");
    }
    line
}

/// Returns `false` when the session should end.
fn handle_line<W: Write>(
    session: &mut Session,
    line: &str,
    out: &mut W,
    format: OutputFormat,
) -> std::io::Result<bool> {
    let input = match parse_line(line, session.engine().settings()) {
        Ok(input) => input,
        Err(e) => {
            render::message_line(out, format, &e.to_string())?;
            return Ok(true);
        }
    };

    match input {
        Input::Command(command) => match session.dispatch(command.clone()) {
            Some(event) => render::event(out, format, &event)?,
            None => render::unchanged(out, format, &command)?,
        },
        Input::Status => render::event(out, format, &session.snapshot())?,
        Input::Tasks => render::tasks(out, format, session)?,
        Input::Help => render::message_line(out, format, HELP)?,
        Input::Quit => return Ok(false),
        Input::Empty => {}
    }
    Ok(true)
}
