//! Application state for the interactive demo.

use std::io;
use std::time::{Duration, Instant};

use medici_config::Config;
use medici_player::prelude::*;
use ratatui::layout::Rect;
use tracing::{debug, info};

use super::Term;
use crate::config_bridge;

/// Viewport rows needed before the terminal counts as visible.
pub(crate) const MIN_VISIBLE_ROWS: u16 = 3;

/// Everything the renderer needs.
pub(crate) struct App {
    /// The line player and its transcript.
    pub(crate) player: Player<Transcript, TabStrip>,
    /// Caption in the header.
    pub(crate) title: String,
    /// Scenario the first play-through starts with.
    initial: usize,
    /// Skip the startup delay once the terminal is visible.
    immediate: bool,
    trigger: VisibilityTrigger,
    caret_blink: Duration,
    /// Logical time of the last update.
    now: Duration,
    pub(crate) should_quit: bool,
}

impl App {
    /// Build the app from configuration.
    pub(crate) fn new(cfg: &Config, initial: usize, seed: u64) -> Self {
        let scenarios = scenarios::builtin(&cfg.terminal.prompt);
        let tabs = TabStrip::new(scenarios.iter().map(|s| s.label.clone()));
        let timings = config_bridge::to_timings(&cfg.timings);
        info!(seed, initial, "starting terminal demo");

        Self {
            player: Player::seeded(scenarios, timings, Transcript::new(), tabs, seed),
            title: cfg.terminal.title.clone(),
            initial,
            immediate: false,
            trigger: VisibilityTrigger::new(),
            caret_blink: Duration::from_millis(cfg.terminal.caret_blink_ms),
            now: Duration::ZERO,
            should_quit: false,
        }
    }

    /// Start the initial scenario as soon as the terminal is visible.
    #[must_use]
    pub(crate) fn start_immediately(mut self) -> Self {
        self.immediate = true;
        self
    }

    /// Current logical time.
    pub(crate) fn now(&self) -> Duration {
        self.now
    }

    /// Report how many body rows the terminal currently shows.
    ///
    /// The first time the body is tall enough, the initial scenario is
    /// scheduled after the startup delay (or started at once).
    pub(crate) fn observe_viewport(&mut self, body_rows: u16) {
        if !self.trigger.observe(body_rows >= MIN_VISIBLE_ROWS) {
            return;
        }
        if self.immediate {
            self.select(self.initial);
        } else {
            let delay = self.player.timings().startup_delay;
            self.player.schedule_run(self.initial, delay, self.now);
        }
    }

    /// Same as [`observe_viewport`](Self::observe_viewport) for a full frame.
    pub(crate) fn observe_frame(&mut self, area: Rect) {
        self.observe_viewport(super::body_area(area).height);
    }

    /// Move logical time forward and fire whatever is due.
    ///
    /// Returns `true` if the transcript may have changed.
    pub(crate) fn update(&mut self, now: Duration) -> bool {
        self.now = self.now.max(now);
        self.player.tick(self.now)
    }

    /// Play scenario `index`, unless one is already playing.
    pub(crate) fn select(&mut self, index: usize) {
        let outcome = self.player.run(index, self.now);
        debug!(index, ?outcome, "tab selected");
    }

    /// Select the tab right of the active one, wrapping around.
    pub(crate) fn next_tab(&mut self) {
        let count = self.player.scenarios().len();
        let next = self
            .player
            .active_scenario()
            .saturating_add(1)
            .checked_rem(count)
            .unwrap_or(0);
        self.select(next);
    }

    /// Select the tab left of the active one, wrapping around.
    pub(crate) fn prev_tab(&mut self) {
        let count = self.player.scenarios().len();
        let prev = self
            .player
            .active_scenario()
            .checked_sub(1)
            .unwrap_or_else(|| count.saturating_sub(1));
        self.select(prev);
    }

    /// Replay the active scenario.
    pub(crate) fn replay(&mut self) {
        self.select(self.player.active_scenario());
    }

    /// Whether the blinking trailing caret is in its "on" half.
    pub(crate) fn caret_visible(&self) -> bool {
        let period = self.caret_blink.as_millis();
        self.now
            .as_millis()
            .checked_div(period)
            .and_then(|n| n.checked_rem(2))
            .is_none_or(|half| half == 0)
    }

    /// Drive the player on wall-clock time until the user quits.
    pub(crate) fn run(&mut self, terminal: &mut Term) -> io::Result<()> {
        let render_interval = Duration::from_millis(16);
        let started = Instant::now();
        let mut last_render: Option<Instant> = None;

        loop {
            let size = terminal.size()?;
            self.observe_frame(Rect::new(0, 0, size.width, size.height));
            self.update(started.elapsed());

            if last_render.is_none_or(|at| at.elapsed() >= render_interval) {
                terminal.draw(|frame| super::render_frame(frame, self))?;
                last_render = Some(Instant::now());
            }

            if crossterm::event::poll(Duration::from_millis(10))? {
                super::handle_input(self)?;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
