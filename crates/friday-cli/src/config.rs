//! Runner configuration parsed from environment variables.
//!
//! Settings can be overridden via environment variables prefixed with
//! `FRIDAY_`; command-line flags win over the environment.

use std::env;
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable selecting the log level.
pub(crate) const LOG_LEVEL_ENV: &str = "FRIDAY_LOG_LEVEL";
/// Environment variable selecting the report format.
pub(crate) const REPORT_FORMAT_ENV: &str = "FRIDAY_REPORT_FORMAT";

/// Log level enumeration matching tracing crate levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    pub(crate) fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Output format of the `run` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ReportFormat {
    #[default]
    Text,
    Json,
    Junit,
}

impl FromStr for ReportFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "junit" | "xml" => Ok(Self::Junit),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown report format '{s}', expected one of: text, json, junit"
            ))),
        }
    }
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CliConfig {
    pub(crate) log_level: LogLevel,
    pub(crate) format: ReportFormat,
}

impl CliConfig {
    /// Load configuration from `FRIDAY_LOG_LEVEL` and `FRIDAY_REPORT_FORMAT`,
    /// falling back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub(crate) fn from_env() -> Result<Self, CliError> {
        let log_level = match env::var(LOG_LEVEL_ENV) {
            Ok(val) => val.parse()?,
            Err(_) => LogLevel::default(),
        };
        let format = match env::var(REPORT_FORMAT_ENV) {
            Ok(val) => val.parse()?,
            Err(_) => ReportFormat::default(),
        };
        Ok(Self { log_level, format })
    }

    /// Apply command-line overrides on top of the environment.
    #[must_use]
    pub(crate) fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        format: Option<ReportFormat>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("DEBUG", LogLevel::Debug)]
    #[case("Info", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
        assert_eq!(
            expected.as_filter_str().parse::<LogLevel>().ok(),
            Some(expected)
        );
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let Err(err) = "loud".parse::<LogLevel>() else {
            panic!("loud is not a log level");
        };
        assert!(err.to_string().contains("unknown log level 'loud'"));
    }

    #[rstest]
    #[case("text", ReportFormat::Text)]
    #[case("JSON", ReportFormat::Json)]
    #[case("junit", ReportFormat::Junit)]
    #[case("xml", ReportFormat::Junit)]
    fn report_format_parses(#[case] input: &str, #[case] expected: ReportFormat) {
        assert_eq!(input.parse::<ReportFormat>().ok(), Some(expected));
    }

    #[test]
    fn defaults_are_quiet_text() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn overrides_win() {
        let config = CliConfig::default().apply_overrides(Some(LogLevel::Debug), None);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, ReportFormat::Text);
        let config = config.apply_overrides(None, Some(ReportFormat::Json));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, ReportFormat::Json);
    }
}
