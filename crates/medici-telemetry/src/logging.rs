//! Logging configuration and setup.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::error::{TelemetryError, TelemetryResult};

/// Level names accepted by [`LogConfig::level`].
pub const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// File rotation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRotation {
    /// Rotate daily.
    #[default]
    Daily,
    /// Rotate hourly.
    Hourly,
    /// Never rotate.
    Never,
}

impl FileRotation {
    fn rotation(self) -> Rotation {
        match self {
            Self::Daily => Rotation::DAILY,
            Self::Hourly => Rotation::HOURLY,
            Self::Never => Rotation::NEVER,
        }
    }
}

impl FromStr for FileRotation {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "hourly" => Ok(Self::Hourly),
            "never" => Ok(Self::Never),
            other => Err(TelemetryError::ConfigError(format!(
                "unknown log rotation '{other}'"
            ))),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human-readable output.
    Pretty,
    /// Single-line output (default).
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
    /// The `tracing-subscriber` default format.
    Full,
}

impl LogFormat {
    /// Lowercase name, as written in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            "full" => Ok(Self::Full),
            other => Err(TelemetryError::ConfigError(format!(
                "unknown log format '{other}'"
            ))),
        }
    }
}

/// Where log lines go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    /// Standard error.
    #[default]
    Stderr,
    /// Rolling files in the given directory.
    File(PathBuf),
}

/// Rolling file settings, used when the target is [`LogTarget::File`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLogConfig {
    /// File name prefix (`medici` produces `medici.2026-10-14.log`).
    #[serde(default = "default_file_prefix")]
    pub prefix: String,
    /// Rotation strategy.
    #[serde(default)]
    pub rotation: FileRotation,
    /// Rotated files to keep; 0 keeps all of them.
    #[serde(default)]
    pub max_files: usize,
}

fn default_file_prefix() -> String {
    "medici".to_string()
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            prefix: default_file_prefix(),
            rotation: FileRotation::default(),
            max_files: 0,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Base level filter, any of [`LEVELS`].
    #[serde(default = "default_level")]
    pub level: String,
    /// Line format.
    #[serde(default)]
    pub format: LogFormat,
    /// Output target.
    #[serde(default)]
    pub target: LogTarget,
    /// Rolling file settings.
    #[serde(default)]
    pub file: FileLogConfig,
    /// Colour output. Ignored for JSON.
    #[serde(default = "default_true")]
    pub ansi: bool,
    /// Per-target overrides such as `medici_player=trace`.
    #[serde(default)]
    pub directives: Vec<String>,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
            target: LogTarget::default(),
            file: FileLogConfig::default(),
            ansi: true,
            directives: Vec::new(),
        }
    }
}

impl LogConfig {
    /// Create a config with the given base level.
    #[must_use]
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    /// Set the line format.
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Log to daily rolling files in `directory`.
    ///
    /// Turns colour off; escape codes in log files are noise.
    #[must_use]
    pub fn with_file_logging(
        mut self,
        directory: impl Into<PathBuf>,
        prefix: impl Into<String>,
    ) -> Self {
        self.target = LogTarget::File(directory.into());
        self.file.prefix = prefix.into();
        self.ansi = false;
        self
    }

    /// Set file rotation and retention.
    #[must_use]
    pub fn with_rotation(mut self, rotation: FileRotation, max_files: usize) -> Self {
        self.file.rotation = rotation;
        self.file.max_files = max_files;
        self
    }

    /// Add a directive override.
    #[must_use]
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// Add several directive overrides.
    #[must_use]
    pub fn with_directives<I, S>(mut self, directives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directives.extend(directives.into_iter().map(Into::into));
        self
    }

    /// Build the env filter from the level and directives.
    ///
    /// `RUST_LOG` is not consulted; configuration is the only source.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::ConfigError`] if the level is not one of
    /// [`LEVELS`] or a directive does not parse.
    pub fn build_filter(&self) -> TelemetryResult<EnvFilter> {
        let level = self.level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(TelemetryError::ConfigError(format!(
                "unknown log level '{}'",
                self.level
            )));
        }

        let mut filter = EnvFilter::try_new(&level)
            .map_err(|e| TelemetryError::ConfigError(e.to_string()))?;

        for directive in &self.directives {
            let parsed = directive.parse().map_err(
                |e: tracing_subscriber::filter::ParseError| {
                    TelemetryError::ConfigError(format!("bad directive '{directive}': {e}"))
                },
            )?;
            filter = filter.add_directive(parsed);
        }

        Ok(filter)
    }

    /// Build the formatting layer for `writer`.
    fn layer<W>(&self, writer: W) -> BoxedLayer
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let base = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(self.ansi && self.format != LogFormat::Json);

        match self.format {
            LogFormat::Json => base.json().boxed(),
            LogFormat::Pretty => base.pretty().boxed(),
            LogFormat::Compact => base.compact().boxed(),
            LogFormat::Full => base.boxed(),
        }
    }
}

/// Keeps buffered file output flowing.
///
/// Dropping the guard flushes pending lines. Hold it until the program exits.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

impl fmt::Debug for LogGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogGuard")
            .field("buffered", &self._worker.is_some())
            .finish()
    }
}

fn file_appender(dir: &Path, file: &FileLogConfig) -> TelemetryResult<RollingFileAppender> {
    std::fs::create_dir_all(dir)?;

    let mut builder = RollingFileAppender::builder()
        .rotation(file.rotation.rotation())
        .filename_prefix(&file.prefix)
        .filename_suffix("log");
    if file.max_files > 0 {
        builder = builder.max_log_files(file.max_files);
    }
    builder
        .build(dir)
        .map_err(|e| TelemetryError::InitError(e.to_string()))
}

/// Install the global subscriber described by `config`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the log directory
/// cannot be created, or a global subscriber is already installed.
pub fn setup_logging(config: &LogConfig) -> TelemetryResult<LogGuard> {
    let filter = config.build_filter()?;

    let (layer, worker) = match &config.target {
        LogTarget::Stderr => (config.layer(std::io::stderr), None),
        LogTarget::File(dir) => {
            let appender = file_appender(dir, &config.file)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (config.layer(writer), Some(guard))
        },
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .map_err(|e| TelemetryError::InitError(e.to_string()))?;

    Ok(LogGuard { _worker: worker })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.target, LogTarget::Stderr);
        assert_eq!(config.file.rotation, FileRotation::Daily);
        assert!(config.ansi);
    }

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new("debug")
            .with_format(LogFormat::Json)
            .with_directive("medici_player=trace");

        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.directives, vec!["medici_player=trace"]);
    }

    #[test]
    fn test_file_logging_turns_off_ansi() {
        let config = LogConfig::new("info")
            .with_file_logging("/tmp/medici-logs", "play")
            .with_rotation(FileRotation::Hourly, 4);
        assert_eq!(
            config.target,
            LogTarget::File(PathBuf::from("/tmp/medici-logs"))
        );
        assert_eq!(config.file.prefix, "play");
        assert_eq!(config.file.rotation, FileRotation::Hourly);
        assert_eq!(config.file.max_files, 4);
        assert!(!config.ansi);
    }

    #[test]
    fn test_log_config_serialization() {
        let config = LogConfig::new("warn").with_format(LogFormat::Pretty);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"level\":\"warn\""));
        assert!(json.contains("\"format\":\"pretty\""));

        let parsed: LogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("full".parse::<LogFormat>().unwrap(), LogFormat::Full);
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::Compact.to_string(), "compact");
    }

    #[test]
    fn test_rotation_from_str() {
        assert_eq!("Hourly".parse::<FileRotation>().unwrap(), FileRotation::Hourly);
        assert_eq!("never".parse::<FileRotation>().unwrap(), FileRotation::Never);
        assert!("weekly".parse::<FileRotation>().is_err());
    }

    #[test]
    fn test_build_filter() {
        let config = LogConfig::new("debug").with_directives(["medici=trace", "ratatui=off"]);
        assert!(config.build_filter().is_ok());
    }

    #[test]
    fn test_build_filter_rejects_bad_directive() {
        let config = LogConfig::new("debug").with_directive("[invalid=syntax");
        let err = config.build_filter().unwrap_err();
        assert!(matches!(err, TelemetryError::ConfigError(_)));
    }

    #[test]
    fn test_build_filter_rejects_unknown_level() {
        let err = LogConfig::new("loud").build_filter().unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    // Only test that installs the global subscriber in this binary.
    #[test]
    fn test_setup_file_logging_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig::new("info").with_file_logging(dir.path(), "test");

        let guard = setup_logging(&config).unwrap();
        tracing::info!("hello from the test");
        drop(guard);

        let files: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();
        assert!(!files.is_empty());

        // A second global subscriber is refused.
        assert!(matches!(
            setup_logging(&LogConfig::default()),
            Err(TelemetryError::InitError(_))
        ));
    }
}
