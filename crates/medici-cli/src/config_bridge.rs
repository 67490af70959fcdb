//! Bridge from `medici_config::Config` to player and telemetry types.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use medici_config::{Config, LoadOptions, ResolvedConfig, TimingsSection};
use medici_player::Timings;
use medici_telemetry::{FileRotation, LogConfig, LogFormat, LogGuard, setup_logging};

/// File name prefix for rolling log files.
const LOG_FILE_PREFIX: &str = "medici";

/// Load the layered config for the current directory.
pub(crate) fn load(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let mut options = LoadOptions::default();
    if let Ok(cwd) = std::env::current_dir() {
        options = options.with_workspace(cwd);
    }
    if let Some(path) = explicit {
        options = options.with_file(path);
    }
    Config::load(&options).context("failed to load configuration")
}

/// Convert the `[timings]` section to player timings.
#[must_use]
pub(crate) fn to_timings(section: &TimingsSection) -> Timings {
    Timings {
        startup_delay: Duration::from_millis(section.startup_delay_ms),
        reveal_delay: Duration::from_millis(section.reveal_delay_ms),
        system_settle: Duration::from_millis(section.system_settle_ms),
        response_settle: Duration::from_millis(section.response_settle_ms),
        prompt_settle: Duration::from_millis(section.prompt_settle_ms),
        unpaired_prompt: Duration::from_millis(section.unpaired_prompt_ms),
        orphan_input: Duration::from_millis(section.orphan_input_ms),
        gap: Duration::from_millis(section.gap_ms),
        char_base: Duration::from_millis(section.char_base_ms),
        char_jitter: Duration::from_millis(section.char_jitter_ms),
    }
}

/// Convert the `[logging]` section to a stderr [`LogConfig`].
#[must_use]
pub(crate) fn to_log_config(cfg: &Config) -> LogConfig {
    let format = cfg
        .logging
        .format
        .parse::<LogFormat>()
        .unwrap_or_default();

    LogConfig::new(&cfg.logging.level)
        .with_format(format)
        .with_directives(&cfg.logging.directives)
}

/// [`to_log_config`] writing rolling files to `logging.directory`, if set.
#[must_use]
pub(crate) fn to_file_log_config(cfg: &Config) -> Option<LogConfig> {
    let directory = cfg.logging.directory.as_ref()?;
    let rotation = cfg
        .logging
        .rotation
        .parse::<FileRotation>()
        .unwrap_or_default();

    Some(
        to_log_config(cfg)
            .with_file_logging(directory, LOG_FILE_PREFIX)
            .with_rotation(rotation, cfg.logging.max_files),
    )
}

/// Pick the jitter seed: flag, then config, then a fresh random one.
#[must_use]
pub(crate) fn resolve_seed(flag: Option<u64>, cfg: &Config) -> u64 {
    flag.or(cfg.terminal.seed).unwrap_or_else(rand::random)
}

/// Set up stderr logging for headless commands.
pub(crate) fn init_logging(cfg: &Config, verbose: bool) -> Option<LogGuard> {
    let mut log_config = to_log_config(cfg);
    if verbose {
        "debug".clone_into(&mut log_config.level);
    }
    start(&log_config)
}

/// Set up file logging for the interactive terminal.
///
/// Without `logging.directory` nothing is logged at all.
pub(crate) fn init_file_logging(cfg: &Config, verbose: bool) -> Option<LogGuard> {
    let mut log_config = to_file_log_config(cfg)?;
    if verbose {
        "debug".clone_into(&mut log_config.level);
    }
    start(&log_config)
}

fn start(log_config: &LogConfig) -> Option<LogGuard> {
    match setup_logging(log_config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medici_telemetry::LogTarget;
    use std::path::PathBuf;

    #[test]
    fn test_default_timings_match_player_defaults() {
        let cfg = Config::default();
        assert_eq!(to_timings(&cfg.timings), Timings::default());
    }

    #[test]
    fn test_timings_convert_millis() {
        let mut cfg = Config::default();
        cfg.timings.reveal_delay_ms = 0;
        cfg.timings.char_base_ms = 5;
        let t = to_timings(&cfg.timings);
        assert_eq!(t.reveal_delay, Duration::ZERO);
        assert_eq!(t.char_base, Duration::from_millis(5));
    }

    #[test]
    fn test_log_config_format_and_directives() {
        let mut cfg = Config::default();
        cfg.logging.level = "info".into();
        cfg.logging.format = "json".into();
        cfg.logging.directives = vec!["medici_player=trace".into()];

        let lc = to_log_config(&cfg);
        assert_eq!(lc.level, "info");
        assert_eq!(lc.format, LogFormat::Json);
        assert_eq!(lc.directives, vec!["medici_player=trace".to_owned()]);
        assert_eq!(lc.target, LogTarget::Stderr);
    }

    #[test]
    fn test_unknown_format_falls_back_to_compact() {
        let mut cfg = Config::default();
        cfg.logging.format = "fancy".into();
        assert_eq!(to_log_config(&cfg).format, LogFormat::Compact);
    }

    #[test]
    fn test_file_logging_needs_directory() {
        let mut cfg = Config::default();
        cfg.logging.directory = None;
        assert!(init_file_logging(&cfg, false).is_none());

        cfg.logging.directory = Some(PathBuf::from("/tmp/medici-logs"));
        let lc = to_file_log_config(&cfg).unwrap();
        assert_eq!(lc.target, LogTarget::File(PathBuf::from("/tmp/medici-logs")));
        assert_eq!(lc.file.prefix, LOG_FILE_PREFIX);
        assert!(!lc.ansi);
    }

    #[test]
    fn test_file_rotation_from_config() {
        let mut cfg = Config::default();
        cfg.logging.directory = Some(PathBuf::from("/tmp/medici-logs"));
        let lc = to_file_log_config(&cfg).unwrap();
        assert_eq!(lc.file.rotation, FileRotation::Daily);
        assert_eq!(lc.file.max_files, 0);

        cfg.logging.rotation = "hourly".into();
        cfg.logging.max_files = 6;
        let lc = to_file_log_config(&cfg).unwrap();
        assert_eq!(lc.file.rotation, FileRotation::Hourly);
        assert_eq!(lc.file.max_files, 6);
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.toml");
        std::fs::write(&path, "[terminal]\ntitle = \"quarterly\"\n").unwrap();

        let resolved = load(Some(&path)).unwrap();
        assert_eq!(resolved.config.terminal.title, "quarterly");
        assert!(resolved.loaded_files.iter().any(|f| f.ends_with("demo.toml")));
    }

    #[test]
    fn test_seed_precedence() {
        let mut cfg = Config::default();
        cfg.terminal.seed = Some(5);
        assert_eq!(resolve_seed(Some(9), &cfg), 9);
        assert_eq!(resolve_seed(None, &cfg), 5);
    }
}
