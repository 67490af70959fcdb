//! Per-kind reveal timings.

use std::time::Duration;

use rand::Rng;

use crate::script::{LineKind, Scenario};

/// Every delay the player waits on.
///
/// The defaults are the values the landing page ships with. Front-ends
/// usually build this from configuration instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay between the visibility trigger firing and the first play-through.
    pub startup_delay: Duration,
    /// Time a fading line stays hidden after it is appended.
    pub reveal_delay: Duration,
    /// Settle after a system line becomes visible.
    pub system_settle: Duration,
    /// Settle after a response, highlight or citation becomes visible.
    pub response_settle: Duration,
    /// Settle after a prompt's input has been typed.
    pub prompt_settle: Duration,
    /// Fallback wait after a prompt with no input following it.
    pub unpaired_prompt: Duration,
    /// Fallback wait when a user input line is reached without a prompt.
    pub orphan_input: Duration,
    /// Wait after a gap row.
    pub gap: Duration,
    /// Fixed part of the per-character typing delay.
    pub char_base: Duration,
    /// Upper bound of the random part of the per-character typing delay.
    pub char_jitter: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            startup_delay: Duration::from_millis(500),
            reveal_delay: Duration::from_millis(50),
            system_settle: Duration::from_millis(600),
            response_settle: Duration::from_millis(300),
            prompt_settle: Duration::from_millis(400),
            unpaired_prompt: Duration::from_millis(200),
            orphan_input: Duration::from_millis(200),
            gap: Duration::from_millis(100),
            char_base: Duration::from_millis(22),
            char_jitter: Duration::from_millis(18),
        }
    }
}

impl Timings {
    /// Pause after a line of `kind` is done: shown, typed, or skipped.
    ///
    /// A prompt without input to type waits `unpaired_prompt` instead.
    #[must_use]
    pub const fn settle_for(&self, kind: LineKind) -> Duration {
        match kind {
            LineKind::System => self.system_settle,
            LineKind::PromptMarker => self.prompt_settle,
            LineKind::Gap => self.gap,
            LineKind::UserInput => self.orphan_input,
            LineKind::Response | LineKind::Highlight | LineKind::SourceCitation => {
                self.response_settle
            },
        }
    }

    /// Draw the delay before the next typed character.
    ///
    /// Uniform in `char_base ..= char_base + char_jitter`, measured in
    /// whole milliseconds.
    pub fn char_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter_ms = u64::try_from(self.char_jitter.as_millis()).unwrap_or(u64::MAX);
        let extra = if jitter_ms == 0 {
            0
        } else {
            rng.gen_range(0..=jitter_ms)
        };
        self.char_base.saturating_add(Duration::from_millis(extra))
    }

    /// Largest possible per-character delay.
    #[must_use]
    pub fn max_char_delay(&self) -> Duration {
        self.char_base.saturating_add(self.char_jitter)
    }

    /// Shortest and longest wall time of one play-through of `scenario`.
    #[must_use]
    pub fn play_bounds(&self, scenario: &Scenario) -> (Duration, Duration) {
        let mut min = Duration::ZERO;
        let mut max = Duration::ZERO;
        let mut add = |lo: Duration, hi: Duration| {
            min = min.saturating_add(lo);
            max = max.saturating_add(hi);
        };

        let mut lines = scenario.lines.iter().peekable();
        while let Some(line) = lines.next() {
            match line.kind {
                LineKind::PromptMarker => {
                    if let Some(input) = lines.next_if(|l| l.kind == LineKind::UserInput) {
                        let n = u32::try_from(input.text.chars().count()).unwrap_or(u32::MAX);
                        let settle = self.settle_for(LineKind::PromptMarker);
                        add(
                            self.char_base.saturating_mul(n).saturating_add(settle),
                            self.max_char_delay().saturating_mul(n).saturating_add(settle),
                        );
                    } else {
                        add(self.unpaired_prompt, self.unpaired_prompt);
                    }
                },
                LineKind::UserInput | LineKind::Gap => {
                    let d = self.settle_for(line.kind);
                    add(d, d);
                },
                LineKind::System
                | LineKind::Response
                | LineKind::Highlight
                | LineKind::SourceCitation => {
                    let d = self.reveal_delay.saturating_add(self.settle_for(line.kind));
                    add(d, d);
                },
            }
        }

        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Line;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_timings() {
        let t = Timings::default();
        assert_eq!(t.startup_delay, Duration::from_millis(500));
        assert_eq!(t.reveal_delay, Duration::from_millis(50));
        assert!(t.system_settle > t.response_settle);
    }

    #[test]
    fn test_settle_for_kinds() {
        let t = Timings::default();
        assert_eq!(t.settle_for(LineKind::System), Duration::from_millis(600));
        assert_eq!(t.settle_for(LineKind::Response), Duration::from_millis(300));
        assert_eq!(t.settle_for(LineKind::Highlight), Duration::from_millis(300));
        assert_eq!(t.settle_for(LineKind::SourceCitation), Duration::from_millis(300));
        assert_eq!(t.settle_for(LineKind::PromptMarker), Duration::from_millis(400));
        assert_eq!(t.settle_for(LineKind::UserInput), Duration::from_millis(200));
        assert_eq!(t.settle_for(LineKind::Gap), Duration::from_millis(100));
    }

    #[test]
    fn test_char_delay_within_bounds() {
        let t = Timings::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let d = t.char_delay(&mut rng);
            assert!(d >= t.char_base);
            assert!(d <= t.max_char_delay());
        }
    }

    #[test]
    fn test_char_delay_without_jitter_is_constant() {
        let t = Timings {
            char_jitter: Duration::ZERO,
            ..Timings::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(t.char_delay(&mut rng), t.char_base);
        assert_eq!(t.char_delay(&mut rng), t.char_base);
    }

    #[test]
    fn test_char_delay_same_seed_same_sequence() {
        let t = Timings::default();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let xs: Vec<_> = (0..32).map(|_| t.char_delay(&mut a)).collect();
        let ys: Vec<_> = (0..32).map(|_| t.char_delay(&mut b)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_play_bounds() {
        let t = Timings::default();
        let scenario = Scenario::new("s", "S")
            .command("$ ", "abc")
            .line(Line::system("sys"))
            .line(Line::gap())
            .line(Line::response("r"));
        let (min, max) = t.play_bounds(&scenario);
        // 3 chars + 400 settle, 50 + 600, 100, 50 + 300.
        assert_eq!(min, Duration::from_millis(66 + 400 + 650 + 100 + 350));
        assert_eq!(max, Duration::from_millis(120 + 400 + 650 + 100 + 350));
    }

    #[test]
    fn test_play_bounds_fallbacks() {
        let t = Timings::default();
        let scenario = Scenario::new("s", "S")
            .line(Line::prompt("$ "))
            .line(Line::user_input("orphan"))
            .line(Line::prompt("$ "));
        let (min, max) = t.play_bounds(&scenario);
        // The first prompt pairs with the input; the last one is unpaired.
        assert_eq!(min, Duration::from_millis(6 * 22 + 400 + 200));
        assert_eq!(max, Duration::from_millis(6 * 40 + 400 + 200));
    }
}
