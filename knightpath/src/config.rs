use std::env;

use log::LevelFilter;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "KNIGHTPATH_LOG";

/// Runtime settings for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Printed before reading input.
    pub prompt: String,
    /// Maximum level written to stderr.
    pub log_level: LevelFilter,
    /// A `KNIGHTPATH_LOG` value that could not be parsed.
    pub rejected_log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "Start coordinate and end coordinate (ex. a1h7): ".to_string(),
            log_level: LevelFilter::Off,
            rejected_log_level: None,
        }
    }
}

impl Config {
    /// Defaults, with the log level taken from [`LOG_ENV`] if set.
    pub fn from_env() -> Self {
        Self::with_log_level(env::var(LOG_ENV).ok().as_deref())
    }

    /// Defaults with the given log level string. An unparsable level falls
    /// back to `warn` so the rejection itself can be reported.
    pub fn with_log_level(level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(level) = level.map(str::trim).filter(|s| !s.is_empty()) {
            match level.parse::<LevelFilter>() {
                Ok(l) => config.log_level = l,
                Err(_) => {
                    config.log_level = LevelFilter::Warn;
                    config.rejected_log_level = Some(level.to_string());
                }
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_silent() {
        assert_eq!(Config::with_log_level(None).log_level, LevelFilter::Off);
        assert_eq!(Config::with_log_level(Some("  ")).log_level, LevelFilter::Off);
    }

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(Config::with_log_level(Some("TRACE")).log_level, LevelFilter::Trace);
        assert_eq!(Config::with_log_level(Some("debug")).log_level, LevelFilter::Debug);
        assert_eq!(Config::with_log_level(Some("off")).log_level, LevelFilter::Off);
    }

    #[test]
    fn unknown_level_falls_back_to_warn() {
        let c = Config::with_log_level(Some("loud"));
        assert_eq!(c.log_level, LevelFilter::Warn);
        assert_eq!(c.rejected_log_level.as_deref(), Some("loud"));
    }
}
