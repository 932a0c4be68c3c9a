use clap::Args;
use pomodoro_core::{Alert, Config, Session, Settings, SilentAlert, TerminalBell};
use tokio::io::BufReader;
use tracing::warn;

use crate::render::OutputFormat;
use crate::session_loop;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Work duration in minutes (overrides config)
    #[arg(long)]
    work: Option<u32>,
    /// Short break duration in minutes (overrides config)
    #[arg(long)]
    short_break: Option<u32>,
    /// Long break duration in minutes (overrides config)
    #[arg(long)]
    long_break: Option<u32>,
    /// Disable the completion bell
    #[arg(long)]
    silent: bool,
    /// Emit one JSON object per line instead of text
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    fn settings(&self, config: &Config) -> Settings {
        let base = config.settings();
        Settings::new(
            self.work.unwrap_or(base.work_minutes),
            self.short_break.unwrap_or(base.short_break_minutes),
            self.long_break.unwrap_or(base.long_break_minutes),
        )
        .with_long_break_interval(base.long_break_interval)
    }

    fn alert(&self, config: &Config) -> Box<dyn Alert> {
        if self.silent || !config.notifications.enabled {
            Box::new(SilentAlert)
        } else {
            // stderr keeps the bell out of JSON output.
            Box::new(TerminalBell::new(std::io::stderr()))
        }
    }
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "using default configuration");
        Config::default()
    });

    let mut session = Session::new(args.settings(&config), args.alert(&config));
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut stdout = std::io::stdout().lock();
    let result = runtime.block_on(session_loop::drive(
        &mut session,
        BufReader::new(tokio::io::stdin()),
        &mut stdout,
        format,
    ));
    // A stdin read may still be parked on the blocking pool after `quit`.
    runtime.shutdown_background();
    result?;
    Ok(())
}
