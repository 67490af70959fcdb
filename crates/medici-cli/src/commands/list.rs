//! List command - the built-in scenarios.

use colored::Colorize;
use medici_config::Config;
use medici_player::scenarios;

use crate::config_bridge;
use crate::theme::Theme;

/// Print every builtin scenario with its nominal play time.
pub(crate) fn list_scenarios(cfg: &Config) {
    let timings = config_bridge::to_timings(&cfg.timings);
    let all = scenarios::builtin(&cfg.terminal.prompt);

    println!("\n{}", Theme::header("Scenarios"));
    println!(
        "{:>2} {:>3} {:<12} {:<14} {:>5} {:>5} {:>5} {:>14}",
        "#".dimmed(),
        "KEY".dimmed(),
        "NAME".dimmed(),
        "LABEL".dimmed(),
        "LINES".dimmed(),
        "ROWS".dimmed(),
        "TYPED".dimmed(),
        "PLAY TIME".dimmed()
    );
    println!("{}", Theme::separator());

    for (i, scenario) in all.iter().enumerate() {
        let (min, max) = timings.play_bounds(scenario);
        let span = format!("{:.1}s–{:.1}s", min.as_secs_f64(), max.as_secs_f64());
        println!(
            "{:>2} {:>3} {:<12} {:<14} {:>5} {:>5} {:>5} {:>14}",
            i,
            i.saturating_add(1),
            scenario.name.bold(),
            scenario.label,
            scenario.lines.len(),
            scenario.render_units(),
            scenario.typed_chars(),
            span.dimmed()
        );
    }

    println!();
    println!(
        "{}",
        Theme::dimmed("Start one with `medici play --scenario <name|#>`, or press its key while playing.")
    );
}
