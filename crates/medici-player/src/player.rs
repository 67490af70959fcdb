//! Sequenced line player - plays one scenario to an output surface.
//!
//! The player is driven entirely by its timer queue. A front-end calls
//! [`Player::tick`] with the current logical time; every wake-up that is due
//! is handled at its own due time, so the outcome does not depend on how
//! often ticks arrive. Tests jump straight to [`Player::next_deadline`].

use std::time::Duration;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace, warn};

use crate::indicator::SelectionIndicator;
use crate::script::{LineKind, Scenario};
use crate::surface::{Entry, EntryId, OutputSurface};
use crate::timer::TimerQueue;
use crate::timing::Timings;

/// Where the player is in the current play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been played yet.
    Idle,
    /// A prompt's input is being typed into `entry`.
    Typing {
        /// Prompt element receiving the characters.
        entry: EntryId,
    },
    /// Waiting on a reveal or settle delay.
    Settling,
    /// The last play-through has finished.
    Done,
}

/// What happened to a [`Player::run`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A new play-through began.
    Started,
    /// Another play-through is in progress; the request was dropped.
    Busy,
    /// No scenario has that index; the request was dropped.
    UnknownScenario,
}

/// Timer payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wake {
    /// Deferred `run` request.
    Run(usize),
    /// Reveal the next line.
    Advance,
    /// Make a hidden element visible, then settle for its kind.
    Reveal { entry: EntryId, kind: LineKind },
    /// Type the next character of the current input.
    TypeChar,
}

/// Input being typed.
#[derive(Debug)]
struct Typing {
    entry: EntryId,
    chars: Vec<char>,
    next: usize,
}

/// The sequenced line player.
///
/// Owns its surface and indicator: nothing else may mutate them while a
/// play-through is in flight. Read access goes through
/// [`surface`](Self::surface) and [`indicator`](Self::indicator).
#[derive(Debug)]
pub struct Player<S, I, R = StdRng> {
    scenarios: Vec<Scenario>,
    timings: Timings,
    surface: S,
    indicator: I,
    rng: R,
    timers: TimerQueue<Wake>,
    phase: Phase,
    active: usize,
    cursor: usize,
    typing: Option<Typing>,
    /// Completed play-throughs, for diagnostics.
    plays: u64,
}

impl<S, I> Player<S, I, StdRng>
where
    S: OutputSurface,
    I: SelectionIndicator,
{
    /// Create a player whose typing jitter comes from a seeded generator.
    #[must_use]
    pub fn seeded(
        scenarios: Vec<Scenario>,
        timings: Timings,
        surface: S,
        indicator: I,
        seed: u64,
    ) -> Self {
        Self::new(
            scenarios,
            timings,
            surface,
            indicator,
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<S, I, R> Player<S, I, R>
where
    S: OutputSurface,
    I: SelectionIndicator,
    R: Rng,
{
    /// Create an idle player.
    #[must_use]
    pub fn new(
        scenarios: Vec<Scenario>,
        timings: Timings,
        surface: S,
        indicator: I,
        rng: R,
    ) -> Self {
        Self {
            scenarios,
            timings,
            surface,
            indicator,
            rng,
            timers: TimerQueue::new(),
            phase: Phase::Idle,
            active: 0,
            cursor: 0,
            typing: None,
            plays: 0,
        }
    }

    // ── Read access ─────────────────────────────────────────────────

    /// The output surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The selection indicator.
    #[must_use]
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// The script.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// The timings in use.
    #[must_use]
    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a play-through is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Typing { .. } | Phase::Settling)
    }

    /// Index of the selected scenario.
    #[must_use]
    pub fn active_scenario(&self) -> usize {
        self.active
    }

    /// Index of the next line to reveal in the active scenario.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of play-throughs that ran to completion.
    #[must_use]
    pub fn completed_plays(&self) -> u64 {
        self.plays
    }

    /// Earliest pending wake-up, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    // ── Triggers ────────────────────────────────────────────────────

    /// Start playing scenario `index` from its first line.
    ///
    /// Ignored while another play-through is in progress: the request is
    /// dropped, never queued. On success the surface is cleared, the cursor
    /// reset, the indicator updated and the first line revealed at `now`.
    pub fn run(&mut self, index: usize, now: Duration) -> RunOutcome {
        if self.is_running() {
            debug!(
                requested = index,
                active = self.active,
                "play-through in progress, dropping run request"
            );
            return RunOutcome::Busy;
        }
        let Some(scenario) = self.scenarios.get(index) else {
            warn!(
                requested = index,
                available = self.scenarios.len(),
                "no such scenario"
            );
            return RunOutcome::UnknownScenario;
        };

        info!(
            scenario = %scenario.name,
            lines = scenario.lines.len(),
            "starting play-through"
        );

        self.phase = Phase::Settling;
        self.surface.clear();
        self.cursor = 0;
        self.typing = None;
        self.active = index;
        self.indicator.select(index);
        self.reveal_next(now);
        RunOutcome::Started
    }

    /// Call [`run`](Self::run) for `index` once `delay` has passed.
    ///
    /// The running guard is checked when the timer fires, not now.
    pub fn schedule_run(&mut self, index: usize, delay: Duration, now: Duration) {
        debug!(scenario = index, delay_ms = delay.as_millis(), "run scheduled");
        self.timers.schedule(now.saturating_add(delay), Wake::Run(index));
    }

    /// Handle every wake-up due at or before `now`.
    ///
    /// Returns `true` if anything happened (the caller should repaint).
    pub fn tick(&mut self, now: Duration) -> bool {
        let mut changed = false;
        while let Some((due, wake)) = self.timers.pop_due(now) {
            trace!(due_ms = due.as_millis(), ?wake, "timer fired");
            changed = true;
            match wake {
                Wake::Run(index) => {
                    let outcome = self.run(index, due);
                    debug!(scenario = index, ?outcome, "scheduled run fired");
                },
                Wake::Advance => self.reveal_next(due),
                Wake::Reveal { entry, kind } => {
                    self.surface.reveal(entry);
                    self.after(due, self.timings.settle_for(kind), Wake::Advance);
                },
                Wake::TypeChar => self.type_next(due),
            }
        }
        changed
    }

    /// Drive the player until no wake-ups remain, returning the time the
    /// last one fired at.
    ///
    /// Starts from `now`. Useful for headless rendering and tests.
    pub fn run_until_idle(&mut self, now: Duration) -> Duration {
        let mut t = now;
        while let Some(deadline) = self.timers.next_deadline() {
            t = t.max(deadline);
            self.tick(t);
        }
        t
    }

    // ── Advance chain ───────────────────────────────────────────────

    fn after(&mut self, now: Duration, delay: Duration, wake: Wake) {
        self.timers.schedule(now.saturating_add(delay), wake);
    }

    /// Reveal the line under the cursor and schedule whatever follows it.
    fn reveal_next(&mut self, now: Duration) {
        let Some(line) = self
            .scenarios
            .get(self.active)
            .and_then(|s| s.lines.get(self.cursor))
            .cloned()
        else {
            self.finish();
            return;
        };
        self.cursor = self.cursor.saturating_add(1);
        debug!(cursor = self.cursor, kind = ?line.kind, "revealing line");

        match line.kind {
            LineKind::PromptMarker => {
                let entry = self.surface.append(Entry::prompt(line.text));
                self.surface.scroll_to_latest();

                let input = self
                    .scenarios
                    .get(self.active)
                    .and_then(|s| s.lines.get(self.cursor))
                    .filter(|next| next.kind == LineKind::UserInput)
                    .map(|next| next.text.chars().collect::<Vec<_>>());

                if let Some(chars) = input {
                    self.cursor = self.cursor.saturating_add(1);
                    self.surface.set_caret(entry, true);
                    self.typing = Some(Typing {
                        entry,
                        chars,
                        next: 0,
                    });
                    self.phase = Phase::Typing { entry };
                    self.type_next(now);
                } else {
                    self.phase = Phase::Settling;
                    self.after(now, self.timings.unpaired_prompt, Wake::Advance);
                }
            },
            LineKind::UserInput => {
                warn!(
                    cursor = self.cursor,
                    "user input without a preceding prompt, skipping"
                );
                self.phase = Phase::Settling;
                self.after(now, self.timings.settle_for(LineKind::UserInput), Wake::Advance);
            },
            LineKind::Gap => {
                self.surface.append(Entry::gap());
                self.surface.scroll_to_latest();
                self.phase = Phase::Settling;
                self.after(now, self.timings.settle_for(LineKind::Gap), Wake::Advance);
            },
            LineKind::System
            | LineKind::Response
            | LineKind::Highlight
            | LineKind::SourceCitation => {
                let entry = self.surface.append(Entry::hidden(&line));
                self.surface.scroll_to_latest();
                self.phase = Phase::Settling;
                self.after(
                    now,
                    self.timings.reveal_delay,
                    Wake::Reveal {
                        entry,
                        kind: line.kind,
                    },
                );
            },
        }
    }

    /// Type one character, or wrap up typing once all are shown.
    fn type_next(&mut self, now: Duration) {
        let Some(typing) = self.typing.as_mut() else {
            return;
        };

        if let Some(&ch) = typing.chars.get(typing.next) {
            typing.next = typing.next.saturating_add(1);
            trace!(ch = %ch, typed = typing.next, "typed");
            self.surface.type_char(typing.entry, ch);
            let delay = self.timings.char_delay(&mut self.rng);
            self.after(now, delay, Wake::TypeChar);
        } else {
            let entry = typing.entry;
            self.typing = None;
            self.surface.set_caret(entry, false);
            self.phase = Phase::Settling;
            let settle = self.timings.settle_for(LineKind::PromptMarker);
            self.after(now, settle, Wake::Advance);
        }
    }

    fn finish(&mut self) {
        self.phase = Phase::Done;
        self.typing = None;
        self.plays = self.plays.saturating_add(1);
        info!(
            scenario = self.active,
            lines = self.cursor,
            "play-through complete"
        );
    }
}
