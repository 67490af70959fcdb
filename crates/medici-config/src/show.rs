//! Source-annotated display for `medici config show`.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::loader::CONFIG_DIR;
use crate::merge::FieldSources;
use crate::types::Config;

/// A resolved configuration together with source annotations.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The final merged configuration.
    pub config: Config,
    /// Dotted field path → which layer set the value.
    pub field_sources: FieldSources,
    /// Config file paths that were loaded, lowest precedence first.
    pub loaded_files: Vec<String>,
}

/// Output format for `config show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    /// TOML with a trailing comment naming each value's source.
    Toml,
    /// JSON with a parallel `sources` map.
    Json,
}

impl ResolvedConfig {
    /// Render the config, or one `[section]` of it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownSection`] if `section` does not exist,
    /// or [`ConfigError::RenderError`] if serialization fails.
    pub fn show(&self, format: ShowFormat, section: Option<&str>) -> ConfigResult<String> {
        match format {
            ShowFormat::Toml => self.show_toml(section),
            ShowFormat::Json => self.show_json(section),
        }
    }

    fn section_value(&self, section: Option<&str>) -> ConfigResult<toml::Value> {
        let val = toml::Value::try_from(&self.config)
            .map_err(|e| ConfigError::RenderError(e.to_string()))?;
        let Some(name) = section else {
            return Ok(val);
        };
        val.get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownSection {
                section: name.to_owned(),
                available: val
                    .as_table()
                    .map(|t| t.keys().cloned().collect::<Vec<_>>().join(", "))
                    .unwrap_or_default(),
            })
    }

    fn show_toml(&self, section: Option<&str>) -> ConfigResult<String> {
        let body = toml::to_string_pretty(&self.section_value(section)?)
            .map_err(|e| ConfigError::RenderError(e.to_string()))?;

        let mut output = String::new();
        output.push_str("# Resolved Medici configuration\n");
        output.push_str("# Sources: [defaults] [user] [workspace] [file] [env]\n");

        if !self.loaded_files.is_empty() {
            output.push_str("#\n# Loaded files (lowest precedence first):\n");
            for (i, path) in self.loaded_files.iter().enumerate() {
                writeln!(output, "#   {}. {path}", i.saturating_add(1))?;
            }
        }
        output.push('\n');

        // Section headers change the dotted prefix for the keys below them.
        let mut prefix = section.unwrap_or("").to_owned();
        for line in body.lines() {
            let trimmed = line.trim();
            if let Some(header) = trimmed.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
                prefix = match section {
                    Some(s) => format!("{s}.{header}"),
                    None => header.to_owned(),
                };
                writeln!(output, "{line}")?;
                continue;
            }
            match self.annotate(trimmed, &prefix) {
                Some(note) => writeln!(output, "{line}  # [{note}]")?,
                None => writeln!(output, "{line}")?,
            }
        }

        Ok(output)
    }

    fn show_json(&self, section: Option<&str>) -> ConfigResult<String> {
        let config = self.section_value(section)?;
        let mut sources: Vec<(&String, String)> = self
            .field_sources
            .iter()
            .filter(|(path, _)| {
                section.is_none_or(|s| {
                    path.strip_prefix(s)
                        .is_some_and(|rest| rest.starts_with('.'))
                })
            })
            .map(|(path, layer)| (path, layer.to_string()))
            .collect();
        sources.sort();

        let sources: serde_json::Map<String, serde_json::Value> = sources
            .into_iter()
            .map(|(path, layer)| (path.clone(), serde_json::Value::String(layer)))
            .collect();
        let doc = serde_json::json!({
            "config": config,
            "sources": sources,
            "loaded_files": self.loaded_files,
        });
        serde_json::to_string_pretty(&doc).map_err(|e| ConfigError::RenderError(e.to_string()))
    }

    /// Source note for a `key = value` line.
    fn annotate(&self, trimmed: &str, prefix: &str) -> Option<String> {
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        let key = trimmed.split('=').next()?.trim();
        let path = if prefix.is_empty() {
            key.to_owned()
        } else {
            format!("{prefix}.{key}")
        };
        self.field_sources.get(&path).map(ToString::to_string)
    }

    /// Every config file path checked during loading, in precedence order.
    #[must_use]
    pub fn config_paths(home_dir: Option<&Path>, workspace_root: Option<&Path>) -> Vec<String> {
        let user = home_dir.map_or_else(
            || format!("~/{CONFIG_DIR}/config.toml"),
            |h| h.join(CONFIG_DIR).join("config.toml").display().to_string(),
        );
        let workspace = workspace_root.map_or_else(
            || format!("{{workspace}}/{CONFIG_DIR}/config.toml"),
            |w| w.join(CONFIG_DIR).join("config.toml").display().to_string(),
        );
        vec![user, workspace]
    }
}
