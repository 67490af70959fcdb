//! Config command - inspect the resolved configuration.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use medici_config::{ResolvedConfig, ShowFormat, env, loader};

use crate::theme::Theme;

/// Print the resolved config with its source annotations.
pub(crate) fn show_config(resolved: &ResolvedConfig, format: &str, section: Option<&str>) -> Result<()> {
    let format = parse_format(format)?;
    let output = resolved
        .show(format, section)
        .with_context(|| match section {
            Some(name) => format!("cannot show config section '{name}'"),
            None => "failed to render configuration".to_owned(),
        })?;
    println!("{output}");
    Ok(())
}

/// Print every config file path and environment variable that is checked.
pub(crate) fn show_paths() -> Result<()> {
    let home = loader::home_directory().ok();
    let cwd = std::env::current_dir().ok();

    println!("\n{}", Theme::header("Config files (lowest precedence first)"));
    println!("{}", Theme::separator());
    for path in ResolvedConfig::config_paths(home.as_deref(), cwd.as_deref()) {
        let marker = if std::path::Path::new(&path).exists() {
            "found".green()
        } else {
            "missing".dimmed()
        };
        println!("  {path}  {marker}");
    }
    println!("  {}", Theme::dimmed("--config <path> (highest precedence)"));

    println!("\n{}", Theme::header("Environment variables (fallback only)"));
    println!("{}", Theme::separator());
    for (var, field) in env::supported_vars() {
        println!("  {:<18} {}", var.bold(), field.dimmed());
    }
    println!();
    println!("{}", Theme::info("Run `medici config show` to see where each value came from."));
    Ok(())
}

fn parse_format(format: &str) -> Result<ShowFormat> {
    match format {
        "toml" => Ok(ShowFormat::Toml),
        "json" => Ok(ShowFormat::Json),
        other => bail!("unknown format '{other}' (expected toml or json)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medici_config::{Config, ConfigError};

    fn resolved() -> ResolvedConfig {
        ResolvedConfig {
            config: Config::default(),
            field_sources: medici_config::merge::FieldSources::new(),
            loaded_files: Vec::new(),
        }
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("toml").unwrap(), ShowFormat::Toml);
        assert_eq!(parse_format("json").unwrap(), ShowFormat::Json);
        assert!(parse_format("yaml").is_err());
    }

    #[test]
    fn test_unknown_section_keeps_cause() {
        let err = show_config(&resolved(), "toml", Some("nope")).unwrap_err();
        assert_eq!(err.to_string(), "cannot show config section 'nope'");
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnknownSection { section, .. }) if section == "nope"
        ));
        assert!(format!("{err:#}").contains("expected one of"));
    }

    #[test]
    fn test_show_known_section() {
        assert!(show_config(&resolved(), "json", Some("timings")).is_ok());
    }
}
