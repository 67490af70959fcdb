//! CLI subcommands.

pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod play;
pub(crate) mod snapshot;

use anyhow::{Result, bail};
use medici_player::scenarios;

/// Resolve `--scenario` to an index, defaulting to the first tab.
pub(crate) fn scenario_index(selector: Option<&str>) -> Result<usize> {
    let Some(selector) = selector else {
        return Ok(0);
    };
    match scenarios::resolve(selector) {
        Some(index) => Ok(index),
        None => {
            let names: Vec<_> = scenarios::list().into_iter().map(|(name, _)| name).collect();
            bail!(
                "unknown scenario '{selector}' (expected one of: {})",
                names.join(", ")
            )
        },
    }
}
