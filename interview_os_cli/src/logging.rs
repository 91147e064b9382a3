//! Logging bootstrap for the CLI.
//!
//! # Invariants
//! - Logs go to stderr so stdout stays machine-readable.
//! - `TECHNOTES_LOG` overrides the configured level.
//! - Unknown levels are rejected, never silently defaulted.

use flexi_logger::{Logger, LoggerHandle, WriteMode};

use crate::error::CliError;

/// Environment variable overriding `[logging] level`.
pub const LOG_ENV_VAR: &str = "TECHNOTES_LOG";

/// Start the stderr logger. Keep the handle alive for the process lifetime.
pub fn init_logging(level: &'static str) -> Result<LoggerHandle, CliError> {
    let handle = Logger::try_with_str(level)?
        .log_to_stderr()
        .write_mode(WriteMode::Direct)
        .format(flexi_logger::default_format)
        .start()?;
    Ok(handle)
}

/// The level to run with: the environment override if set and non-empty,
/// otherwise the configured level.
pub fn effective_level(configured: &str, env_override: Option<&str>) -> Result<&'static str, CliError> {
    match env_override.map(str::trim).filter(|v| !v.is_empty()) {
        Some(level) => normalize_level(level),
        None => normalize_level(configured),
    }
}

pub fn normalize_level(level: &str) -> Result<&'static str, CliError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(CliError::InvalidLogLevel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert_eq!(normalize_level("trace").unwrap(), "trace");
    }

    #[test]
    fn test_normalize_level_rejects_unknown() {
        let err = normalize_level("loud").unwrap_err();
        assert!(matches!(err, CliError::InvalidLogLevel(level) if level == "loud"));
    }

    #[test]
    fn test_env_override_wins() {
        assert_eq!(effective_level("info", Some("debug")).unwrap(), "debug");
        assert_eq!(effective_level("info", Some("  ")).unwrap(), "info");
        assert_eq!(effective_level("error", None).unwrap(), "error");
    }
}
