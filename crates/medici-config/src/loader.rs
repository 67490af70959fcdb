//! Config file discovery and layered loading.
//!
//! 1. Parse embedded `defaults.toml` → base
//! 2. Merge `~/.medici/config.toml` (user)
//! 3. Merge `{workspace}/.medici/config.toml` (workspace)
//! 4. Merge the file passed with `--config` (explicit)
//! 5. Apply `MEDICI_*` env var fallbacks for fields no file set
//! 6. Deserialize merged tree → `Config`
//! 7. Validate

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::env::{apply_env_fallbacks, collect_env_vars};
use crate::error::{ConfigError, ConfigResult};
use crate::merge::{ConfigLayer, FieldSources, deep_merge_tracking, record_leaves};
use crate::show::ResolvedConfig;
use crate::types::Config;
use crate::validate;

/// Embedded default configuration.
const DEFAULTS_TOML: &str = include_str!("defaults.toml");

/// Maximum allowed config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: usize = 1_048_576;

/// Name of the per-user and per-workspace config directory.
pub const CONFIG_DIR: &str = ".medici";

/// Where to look for configuration files.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Root of the workspace layer; skipped when `None`.
    pub workspace_root: Option<PathBuf>,
    /// Home directory override; discovered with `directories` when `None`.
    pub home_dir: Option<PathBuf>,
    /// Extra file merged above every discovered file.
    pub explicit_file: Option<PathBuf>,
}

impl LoadOptions {
    /// Look for a workspace config under `root`.
    #[must_use]
    pub fn with_workspace(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = Some(root.into());
        self
    }

    /// Use `home` instead of the real home directory.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    /// Merge `path` last. Unlike discovered files it must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }
}

/// Load configuration with the full precedence chain, reading fallbacks
/// from the process environment.
///
/// # Errors
///
/// Returns a [`ConfigError`] if any config file is unreadable or malformed,
/// the explicit file is missing, or the merged configuration fails
/// validation.
pub fn load(options: &LoadOptions) -> ConfigResult<ResolvedConfig> {
    load_with_env(options, &collect_env_vars())
}

/// [`load`] with an explicit environment.
///
/// # Errors
///
/// See [`load`].
pub fn load_with_env<S: std::hash::BuildHasher>(
    options: &LoadOptions,
    env_vars: &HashMap<String, String, S>,
) -> ConfigResult<ResolvedConfig> {
    // 1. Embedded defaults.
    let mut merged = parse_defaults()?;

    let mut field_sources = FieldSources::new();
    let mut loaded_files = Vec::new();
    record_leaves(&merged, "", &ConfigLayer::Defaults, &mut field_sources);

    // 2. User config. A missing home directory only matters if we need it.
    let home = match &options.home_dir {
        Some(h) => Some(h.clone()),
        None => home_directory().ok(),
    };
    if let Some(home) = home {
        let path = home.join(CONFIG_DIR).join("config.toml");
        if let Some(overlay) = try_load_file(&path)? {
            deep_merge_tracking(
                &mut merged,
                &overlay,
                "",
                &ConfigLayer::User,
                &mut field_sources,
            );
            info!(path = %path.display(), "loaded user config");
            loaded_files.push(path.display().to_string());
        }
    } else {
        debug!("no home directory, skipping user config");
    }

    // 3. Workspace config.
    if let Some(root) = &options.workspace_root {
        let path = root.join(CONFIG_DIR).join("config.toml");
        if let Some(overlay) = try_load_file(&path)? {
            deep_merge_tracking(
                &mut merged,
                &overlay,
                "",
                &ConfigLayer::Workspace,
                &mut field_sources,
            );
            info!(path = %path.display(), "loaded workspace config");
            loaded_files.push(path.display().to_string());
        }
    }

    // 4. Explicit file.
    if let Some(path) = &options.explicit_file {
        let overlay = require_file(path)?;
        deep_merge_tracking(
            &mut merged,
            &overlay,
            "",
            &ConfigLayer::Explicit,
            &mut field_sources,
        );
        info!(path = %path.display(), "loaded explicit config");
        loaded_files.push(path.display().to_string());
    }

    // 5. Env fallbacks.
    let env_count = apply_env_fallbacks(&mut merged, &mut field_sources, env_vars);
    if env_count > 0 {
        debug!(count = env_count, "applied environment variable fallbacks");
    }

    // 6. Deserialize.
    let config = into_config(merged)?;

    // 7. Validate.
    validate::validate(&config)?;

    Ok(ResolvedConfig {
        config,
        field_sources,
        loaded_files,
    })
}

fn parse_defaults() -> ConfigResult<toml::Value> {
    toml::from_str(DEFAULTS_TOML).map_err(|e| ConfigError::ParseError {
        path: "<embedded defaults>".to_owned(),
        source: e,
    })
}

fn into_config(merged: toml::Value) -> ConfigResult<Config> {
    merged
        .try_into()
        .map_err(|e: toml::de::Error| ConfigError::ParseError {
            path: "<merged config>".to_owned(),
            source: e,
        })
}

/// Like [`try_load_file`], but a missing file is an error.
fn require_file(path: &Path) -> ConfigResult<toml::Value> {
    try_load_file(path)?.ok_or_else(|| ConfigError::ReadError {
        path: path.display().to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    })
}

/// Try to load a file, returning `None` if it doesn't exist.
///
/// Reads once and checks the size afterwards, so there is no window between
/// a stat and the read.
fn try_load_file(path: &Path) -> ConfigResult<Option<toml::Value>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found, skipping");
            return Ok(None);
        },
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.display().to_string(),
                source: e,
            });
        },
    };

    if content.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::ValidationError {
            field: path.display().to_string(),
            message: format!(
                "config file is {} bytes, exceeding the {MAX_CONFIG_FILE_SIZE} byte limit",
                content.len()
            ),
        });
    }

    let value: toml::Value = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(Some(value))
}

/// Determine the user's home directory.
/// The current user's home directory.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDir`] if it cannot be determined.
pub fn home_directory() -> ConfigResult<PathBuf> {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env() -> HashMap<String, String> {
        HashMap::new()
    }

    fn write_config(root: &Path, body: &str) -> PathBuf {
        let dir = root.join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_defaults_deserialize_to_config() {
        let config: Config = toml::from_str(DEFAULTS_TOML).unwrap();
        assert_eq!(config, Config::default());
        assert!(validate::validate(&config).is_ok());
    }

    #[test]
    fn test_load_without_files() {
        let home = tempfile::tempdir().unwrap();
        let options = LoadOptions::default().with_home(home.path());
        let resolved = load_with_env(&options, &no_env()).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert!(resolved.loaded_files.is_empty());
        assert_eq!(
            resolved.field_sources.get("timings.gap_ms"),
            Some(&ConfigLayer::Defaults)
        );
    }

    #[test]
    fn test_user_then_workspace_then_explicit() {
        let home = tempfile::tempdir().unwrap();
        let ws = tempfile::tempdir().unwrap();
        write_config(home.path(), "[timings]\ngap_ms = 150\nchar_base_ms = 30\n");
        write_config(ws.path(), "[timings]\ngap_ms = 175\n");
        let explicit = ws.path().join("fast.toml");
        std::fs::write(&explicit, "[timings]\nchar_base_ms = 5\n").unwrap();

        let options = LoadOptions::default()
            .with_home(home.path())
            .with_workspace(ws.path())
            .with_file(&explicit);
        let resolved = load_with_env(&options, &no_env()).unwrap();

        assert_eq!(resolved.config.timings.gap_ms, 175);
        assert_eq!(resolved.config.timings.char_base_ms, 5);
        assert_eq!(resolved.config.timings.system_settle_ms, 600);
        assert_eq!(resolved.loaded_files.len(), 3);
        assert_eq!(
            resolved.field_sources.get("timings.gap_ms"),
            Some(&ConfigLayer::Workspace)
        );
        assert_eq!(
            resolved.field_sources.get("timings.char_base_ms"),
            Some(&ConfigLayer::Explicit)
        );
    }

    #[test]
    fn test_env_fallback_only_for_unset_fields() {
        let home = tempfile::tempdir().unwrap();
        write_config(home.path(), "[terminal]\nprompt = \"$ \"\n");
        let env: HashMap<String, String> = [
            ("MEDICI_PROMPT".to_owned(), "> ".to_owned()),
            ("MEDICI_SEED".to_owned(), "99".to_owned()),
        ]
        .into_iter()
        .collect();

        let resolved =
            load_with_env(&LoadOptions::default().with_home(home.path()), &env).unwrap();

        assert_eq!(resolved.config.terminal.prompt, "$ ");
        assert_eq!(resolved.config.terminal.seed, Some(99));
        assert_eq!(
            resolved.field_sources.get("terminal.seed"),
            Some(&ConfigLayer::Environment)
        );
    }

    #[test]
    fn test_negative_env_seed_does_not_break_loading() {
        let home = tempfile::tempdir().unwrap();
        let env: HashMap<String, String> = [("MEDICI_SEED".to_owned(), "-1".to_owned())]
            .into_iter()
            .collect();

        let resolved =
            load_with_env(&LoadOptions::default().with_home(home.path()), &env).unwrap();

        assert_eq!(resolved.config.terminal.seed, None);
        assert!(!resolved.field_sources.contains_key("terminal.seed"));
    }

    #[test]
    fn test_out_of_range_timing_rejected() {
        let home = tempfile::tempdir().unwrap();
        write_config(home.path(), "[timings]\nreveal_delay_ms = 90000\n");
        let result = load_with_env(&LoadOptions::default().with_home(home.path()), &no_env());
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { ref field, .. }) if field == "timings.reveal_delay_ms"
        ));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let home = tempfile::tempdir().unwrap();
        write_config(home.path(), "[timings]\ngap_ms = \"soon\"\n");
        let result = load_with_env(&LoadOptions::default().with_home(home.path()), &no_env());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let home = tempfile::tempdir().unwrap();
        let path = write_config(home.path(), "[timings\n");
        let result = load_with_env(&LoadOptions::default().with_home(home.path()), &no_env());
        match result {
            Err(ConfigError::ParseError { path: p, .. }) => {
                assert_eq!(p, path.display().to_string());
            },
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let home = tempfile::tempdir().unwrap();
        let options = LoadOptions::default()
            .with_home(home.path())
            .with_file(home.path().join("nope.toml"));
        let result = load_with_env(&options, &no_env());
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn test_try_load_file_missing() {
        let result = try_load_file(Path::new("/nonexistent/config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_oversized_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("huge.toml");
        let data = "x = \"".to_owned() + &"a".repeat(1_100_000) + "\"";
        std::fs::write(&file_path, data).unwrap();

        let result = try_load_file(&file_path);
        assert!(
            matches!(result, Err(ConfigError::ValidationError { .. })),
            "Expected ValidationError for oversized config, got: {result:?}"
        );
    }
}
