//! Deep merge of TOML value trees with per-field source tracking.
//!
//! Merging raw [`toml::Value`] trees rather than deserialized structs keeps
//! "absent" distinct from "default": a key missing from an overlay never
//! overrides the layer below it.

use std::collections::HashMap;
use std::fmt;

/// Which configuration layer a value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLayer {
    /// Compiled-in defaults (`defaults.toml`).
    Defaults,
    /// User-level configuration (`~/.medici/config.toml`).
    User,
    /// Workspace-level configuration (`{cwd}/.medici/config.toml`).
    Workspace,
    /// File named on the command line.
    Explicit,
    /// Environment variable fallback.
    Environment,
}

impl fmt::Display for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => write!(f, "defaults"),
            Self::User => write!(f, "user (~/.medici/config.toml)"),
            Self::Workspace => write!(f, "workspace (.medici/config.toml)"),
            Self::Explicit => write!(f, "file (--config)"),
            Self::Environment => write!(f, "environment variable"),
        }
    }
}

/// Dotted field path → layer that last set it.
pub type FieldSources = HashMap<String, ConfigLayer>;

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Deep-merge `overlay` into `base`, recording `layer` for every leaf the
/// overlay sets.
///
/// Tables merge per field. Scalars and arrays from the overlay replace the
/// base value.
pub fn deep_merge_tracking(
    base: &mut toml::Value,
    overlay: &toml::Value,
    prefix: &str,
    layer: &ConfigLayer,
    sources: &mut FieldSources,
) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let path = join(prefix, key);
                match base_table.get_mut(key) {
                    Some(base_val) if overlay_val.is_table() && base_val.is_table() => {
                        deep_merge_tracking(base_val, overlay_val, &path, layer, sources);
                    },
                    Some(base_val) => {
                        *base_val = overlay_val.clone();
                        record_leaves(overlay_val, &path, layer, sources);
                    },
                    None => {
                        base_table.insert(key.clone(), overlay_val.clone());
                        record_leaves(overlay_val, &path, layer, sources);
                    },
                }
            }
        },
        (base, overlay) => {
            *base = overlay.clone();
            record_leaves(overlay, prefix, layer, sources);
        },
    }
}

/// Record `layer` for every leaf under `val`.
pub fn record_leaves(
    val: &toml::Value,
    prefix: &str,
    layer: &ConfigLayer,
    sources: &mut FieldSources,
) {
    if let toml::Value::Table(table) = val {
        for (key, child) in table {
            record_leaves(child, &join(prefix, key), layer, sources);
        }
    } else {
        sources.insert(prefix.to_owned(), layer.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> toml::Value {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn test_overlay_replaces_only_named_fields() {
        let mut base = parse("[timings]\ngap_ms = 100\nchar_base_ms = 22\n");
        let overlay = parse("[timings]\ngap_ms = 250\n");
        let mut sources = FieldSources::new();
        record_leaves(&base, "", &ConfigLayer::Defaults, &mut sources);

        deep_merge_tracking(&mut base, &overlay, "", &ConfigLayer::User, &mut sources);

        assert_eq!(base["timings"]["gap_ms"].as_integer(), Some(250));
        assert_eq!(base["timings"]["char_base_ms"].as_integer(), Some(22));
        assert_eq!(sources.get("timings.gap_ms"), Some(&ConfigLayer::User));
        assert_eq!(
            sources.get("timings.char_base_ms"),
            Some(&ConfigLayer::Defaults)
        );
    }

    #[test]
    fn test_arrays_replace() {
        let mut base = parse("[logging]\ndirectives = [\"a=debug\"]\n");
        let overlay = parse("[logging]\ndirectives = [\"b=trace\", \"c=off\"]\n");
        let mut sources = FieldSources::new();

        deep_merge_tracking(&mut base, &overlay, "", &ConfigLayer::Workspace, &mut sources);

        let dirs = base["logging"]["directives"].as_array().unwrap();
        assert_eq!(dirs.len(), 2);
        assert_eq!(
            sources.get("logging.directives"),
            Some(&ConfigLayer::Workspace)
        );
    }

    #[test]
    fn test_new_section_records_all_leaves() {
        let mut base = parse("[timings]\ngap_ms = 100\n");
        let overlay = parse("[terminal]\nprompt = \"$ \"\nseed = 4\n");
        let mut sources = FieldSources::new();

        deep_merge_tracking(&mut base, &overlay, "", &ConfigLayer::Explicit, &mut sources);

        assert_eq!(base["terminal"]["prompt"].as_str(), Some("$ "));
        assert_eq!(sources.get("terminal.prompt"), Some(&ConfigLayer::Explicit));
        assert_eq!(sources.get("terminal.seed"), Some(&ConfigLayer::Explicit));
    }

    #[test]
    fn test_later_layer_wins() {
        let mut base = parse("[terminal]\nprompt = \"a\"\n");
        let mut sources = FieldSources::new();
        for (layer, prompt) in [
            (ConfigLayer::User, "b"),
            (ConfigLayer::Workspace, "c"),
            (ConfigLayer::Explicit, "d"),
        ] {
            let overlay = parse(&format!("[terminal]\nprompt = \"{prompt}\"\n"));
            deep_merge_tracking(&mut base, &overlay, "", &layer, &mut sources);
        }
        assert_eq!(base["terminal"]["prompt"].as_str(), Some("d"));
        assert_eq!(sources.get("terminal.prompt"), Some(&ConfigLayer::Explicit));
    }
}
