//! Environment variable fallbacks.
//!
//! Env vars are a **fallback**, not an override: they only fill fields that
//! no config file set.

use std::collections::HashMap;
use std::hash::BuildHasher;

use tracing::{debug, warn};

use crate::merge::{ConfigLayer, FieldSources};

/// How an env var's string value becomes a TOML value.
#[derive(Debug, Clone, Copy)]
enum Kind {
    Text,
    /// Non-negative, and small enough for a TOML integer.
    Unsigned,
}

/// Mapping from environment variable name to config field path.
struct EnvMapping {
    var_name: &'static str,
    field_path: &'static str,
    kind: Kind,
}

/// All supported `MEDICI_*` env var mappings.
const ENV_MAPPINGS: &[EnvMapping] = &[
    EnvMapping {
        var_name: "MEDICI_LOG_LEVEL",
        field_path: "logging.level",
        kind: Kind::Text,
    },
    EnvMapping {
        var_name: "MEDICI_LOG_DIR",
        field_path: "logging.directory",
        kind: Kind::Text,
    },
    EnvMapping {
        var_name: "MEDICI_SEED",
        field_path: "terminal.seed",
        kind: Kind::Unsigned,
    },
    EnvMapping {
        var_name: "MEDICI_PROMPT",
        field_path: "terminal.prompt",
        kind: Kind::Text,
    },
];

/// `(var, field)` for every env var consulted, for help output.
#[must_use]
pub fn supported_vars() -> Vec<(&'static str, &'static str)> {
    ENV_MAPPINGS
        .iter()
        .map(|m| (m.var_name, m.field_path))
        .collect()
}

/// Fill fields that **no** config file set from the environment.
///
/// A field counts as set when a layer other than the embedded defaults
/// recorded it. Returns the number of env vars applied.
pub fn apply_env_fallbacks<S: BuildHasher>(
    merged: &mut toml::Value,
    sources: &mut FieldSources,
    env_vars: &HashMap<String, String, S>,
) -> usize {
    let mut count: usize = 0;

    for mapping in ENV_MAPPINGS {
        let set_by_file = sources
            .get(mapping.field_path)
            .is_some_and(|layer| *layer != ConfigLayer::Defaults);
        if set_by_file {
            continue;
        }

        let Some(raw) = env_vars.get(mapping.var_name) else {
            continue;
        };
        let Some(value) = coerce(mapping.kind, raw) else {
            warn!(
                var = mapping.var_name,
                value = raw.as_str(),
                "ignoring env var with unusable value"
            );
            continue;
        };

        debug!(
            var = mapping.var_name,
            field = mapping.field_path,
            "applying env var fallback"
        );
        if set_field(merged, mapping.field_path, value) {
            sources.insert(mapping.field_path.to_owned(), ConfigLayer::Environment);
            count = count.saturating_add(1);
        }
    }

    count
}

fn coerce(kind: Kind, raw: &str) -> Option<toml::Value> {
    match kind {
        Kind::Text => Some(toml::Value::String(raw.to_owned())),
        Kind::Unsigned => raw
            .trim()
            .parse::<u64>()
            .ok()
            .and_then(|n| i64::try_from(n).ok())
            .map(toml::Value::Integer),
    }
}

/// Set a dotted field, creating intermediate tables as needed.
///
/// Returns `false` if a non-table value is in the way.
fn set_field(root: &mut toml::Value, path: &str, value: toml::Value) -> bool {
    let (parents, leaf) = path.rsplit_once('.').unwrap_or(("", path));

    let mut current = root;
    for segment in parents.split('.').filter(|s| !s.is_empty()) {
        let Some(table) = current.as_table_mut() else {
            return false;
        };
        current = table
            .entry(segment.to_owned())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    match current.as_table_mut() {
        Some(table) => {
            table.insert(leaf.to_owned(), value);
            true
        },
        None => false,
    }
}

/// Collect all current environment variables into a map.
#[must_use]
pub fn collect_env_vars() -> HashMap<String, String> {
    std::env::vars().collect()
}
