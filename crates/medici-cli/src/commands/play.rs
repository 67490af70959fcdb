//! Play command - the interactive terminal demo.

use anyhow::{Context, Result};
use medici_config::Config;
use tracing::info;

use crate::config_bridge;
use crate::ui::{self, App};

/// Run the interactive demo until the user quits.
pub(crate) fn run_play(cfg: &Config, scenario: Option<&str>, seed: Option<u64>) -> Result<()> {
    let initial = super::scenario_index(scenario)?;
    let seed = config_bridge::resolve_seed(seed, cfg);
    info!(seed, "typing jitter seed");

    let mut app = App::new(cfg, initial, seed);
    if scenario.is_some() {
        app = app.start_immediately();
    }
    let mut terminal = ui::init_terminal().context("failed to set up the terminal")?;

    let result = app.run(&mut terminal);

    // Restore before reporting so the error lands on the normal screen.
    ui::restore_terminal(&mut terminal).context("failed to restore the terminal")?;
    result.context("terminal demo failed")?;

    info!(plays = app.player.completed_plays(), "demo closed");
    Ok(())
}
