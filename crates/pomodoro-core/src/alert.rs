//! Completion alerts.
//!
//! The session asks its [`Alert`] to play once per natural completion.
//! Delivery is best effort: a failed alert is logged and otherwise ignored.

use std::io::Write;

use crate::error::AlertError;

pub trait Alert {
    fn play(&mut self) -> Result<(), AlertError>;
}

/// Rings the terminal bell by writing BEL to a writer.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Alert for TerminalBell<W> {
    fn play(&mut self) -> Result<(), AlertError> {
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Used when alerts are disabled in the configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlert;

impl Alert for SilentAlert {
    fn play(&mut self) -> Result<(), AlertError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_bell_writes_bel() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play().unwrap();
        bell.play().unwrap();
        assert_eq!(bell.into_inner(), b"\x07\x07");
    }

    #[test]
    fn silent_alert_succeeds() {
        assert!(SilentAlert.play().is_ok());
    }
}
