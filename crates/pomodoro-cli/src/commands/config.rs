use clap::Subcommand;
use pomodoro_core::{Config, Settings};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show one value, or the durations a new session starts with
    Get {
        /// Dot-separated key (e.g. "timer.long_break_interval")
        key: Option<String>,
    },
    /// Set a value and save
    Set {
        /// Dot-separated key
        key: String,
        /// New value
        value: String,
    },
    /// Print the config file location and its contents
    List,
    /// Restore default durations and alerts
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key: None } => {
            println!("{}", describe(&Config::load()?.settings()));
        }
        ConfigAction::Get { key: Some(key) } => {
            let config = Config::load()?;
            let value = config
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key} (see `config list`)"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            // Durations below one minute are stored as typed but run as 1.
            let effective = describe(&config.settings());
            println!("{key} = {value}");
            println!("next session: {effective}");
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("# {}", Config::path()?.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("{}", describe(&Config::default().settings()));
        }
    }
    Ok(())
}

fn describe(settings: &Settings) -> String {
    format!(
        "work {}m, short break {}m, long break {}m every {} work intervals",
        settings.work_minutes,
        settings.short_break_minutes,
        settings.long_break_minutes,
        settings.long_break_interval
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_shows_coerced_durations() {
        let mut config = Config::default();
        config.set("timer.short_break_minutes", "0").unwrap();
        assert_eq!(
            describe(&config.settings()),
            "work 25m, short break 1m, long break 15m every 4 work intervals"
        );
    }
}
