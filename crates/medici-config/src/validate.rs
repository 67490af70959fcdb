//! Post-merge configuration validation.

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;

/// Longest delay accepted for any timing, in milliseconds.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Shortest caret blink half-period, in milliseconds.
pub const MIN_CARET_BLINK_MS: u64 = 50;

/// Accepted `logging.level` values.
pub const VALID_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Accepted `logging.format` values.
pub const VALID_FORMATS: [&str; 4] = ["pretty", "compact", "json", "full"];

/// Accepted `logging.rotation` values.
pub const VALID_ROTATIONS: [&str; 3] = ["daily", "hourly", "never"];

/// Validate a fully merged and deserialized configuration.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_timings(config)?;
    validate_terminal(config)?;
    validate_logging(config)?;
    Ok(())
}

fn invalid(field: &str, message: String) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_owned(),
        message,
    }
}

fn validate_timings(config: &Config) -> ConfigResult<()> {
    let t = &config.timings;

    for (name, value) in t.delays() {
        if value > MAX_DELAY_MS {
            return Err(invalid(
                &format!("timings.{name}"),
                format!("{value}ms exceeds the {MAX_DELAY_MS}ms limit"),
            ));
        }
    }

    if t.char_base_ms == 0 {
        return Err(invalid(
            "timings.char_base_ms",
            "typing needs a per-character delay of at least 1ms".to_owned(),
        ));
    }

    Ok(())
}

fn validate_terminal(config: &Config) -> ConfigResult<()> {
    let term = &config.terminal;

    if term.prompt.trim().is_empty() {
        return Err(invalid("terminal.prompt", "prompt must not be empty".to_owned()));
    }

    if term.prompt.contains('\n') {
        return Err(invalid(
            "terminal.prompt",
            "prompt must fit on one line".to_owned(),
        ));
    }

    if !(MIN_CARET_BLINK_MS..=MAX_DELAY_MS).contains(&term.caret_blink_ms) {
        return Err(invalid(
            "terminal.caret_blink_ms",
            format!(
                "{}ms is out of range; must be between {MIN_CARET_BLINK_MS} and {MAX_DELAY_MS}",
                term.caret_blink_ms
            ),
        ));
    }

    Ok(())
}

fn validate_logging(config: &Config) -> ConfigResult<()> {
    if !VALID_LEVELS.contains(&config.logging.level.as_str()) {
        return Err(invalid(
            "logging.level",
            format!(
                "unsupported log level '{}'; expected one of: {}",
                config.logging.level,
                VALID_LEVELS.join(", ")
            ),
        ));
    }

    if !VALID_FORMATS.contains(&config.logging.format.as_str()) {
        return Err(invalid(
            "logging.format",
            format!(
                "unsupported log format '{}'; expected one of: {}",
                config.logging.format,
                VALID_FORMATS.join(", ")
            ),
        ));
    }

    if !VALID_ROTATIONS.contains(&config.logging.rotation.as_str()) {
        return Err(invalid(
            "logging.rotation",
            format!(
                "unsupported log rotation '{}'; expected one of: {}",
                config.logging.rotation,
                VALID_ROTATIONS.join(", ")
            ),
        ));
    }

    Ok(())
}
