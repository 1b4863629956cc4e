use clap::ValueEnum;
use log::LevelFilter;

/// Env variable that overrides `--log`, using `env_logger` filter syntax.
pub const LOG_ENV: &str = "AGENT_GIT_LOG";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    #[default]
    None,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::None => LevelFilter::Off,
        }
    }
}

impl LogLevel {
    /// Only this crate logs at the chosen level, dependencies such as reqwest stay quiet.
    pub fn init_logger(self) {
        let level = LevelFilter::from(self);

        let initialised = env_logger::Builder::new()
            .format_timestamp(None)
            .format_target(false)
            .filter_module(env!("CARGO_CRATE_NAME"), level)
            .parse_env(LOG_ENV)
            .try_init();

        match initialised {
            Ok(()) => log::info!("setting log level '{}'", level),
            Err(e) => eprintln!("logger already initialised: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_turns_logging_off() {
        assert_eq!(LevelFilter::from(LogLevel::default()), LevelFilter::Off);
    }

    #[test]
    fn levels_map_one_to_one() {
        assert_eq!(LevelFilter::from(LogLevel::Warn), LevelFilter::Warn);
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::Trace);
    }
}
