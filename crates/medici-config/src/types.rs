//! Configuration types.
//!
//! Every section implements [`Default`] with the same values as the embedded
//! `defaults.toml`, so a bare `[section]` header still yields a working
//! configuration. Delays are plain millisecond counts here; conversion to
//! `Duration` happens at the CLI boundary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Player delays.
    pub timings: TimingsSection,
    /// Terminal appearance.
    pub terminal: TerminalSection,
    /// Logging level, format and destination.
    pub logging: LoggingSection,
}

/// Player delays, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingsSection {
    /// Wait between the terminal coming into view and the first play-through.
    pub startup_delay_ms: u64,
    /// How long a fading line stays hidden after it is appended.
    pub reveal_delay_ms: u64,
    /// Settle after a system line.
    pub system_settle_ms: u64,
    /// Settle after a response, highlight or source line.
    pub response_settle_ms: u64,
    /// Settle after a command finishes typing.
    pub prompt_settle_ms: u64,
    /// Wait after a prompt with nothing to type.
    pub unpaired_prompt_ms: u64,
    /// Wait after skipping input that has no prompt.
    pub orphan_input_ms: u64,
    /// Wait after a spacer row.
    pub gap_ms: u64,
    /// Fixed part of the per-character typing delay.
    pub char_base_ms: u64,
    /// Largest random addition to the per-character typing delay.
    pub char_jitter_ms: u64,
}

impl Default for TimingsSection {
    fn default() -> Self {
        Self {
            startup_delay_ms: 500,
            reveal_delay_ms: 50,
            system_settle_ms: 600,
            response_settle_ms: 300,
            prompt_settle_ms: 400,
            unpaired_prompt_ms: 200,
            orphan_input_ms: 200,
            gap_ms: 100,
            char_base_ms: 22,
            char_jitter_ms: 18,
        }
    }
}

impl TimingsSection {
    /// `(field, value)` for every delay, in declaration order.
    #[must_use]
    pub fn delays(&self) -> [(&'static str, u64); 10] {
        [
            ("startup_delay_ms", self.startup_delay_ms),
            ("reveal_delay_ms", self.reveal_delay_ms),
            ("system_settle_ms", self.system_settle_ms),
            ("response_settle_ms", self.response_settle_ms),
            ("prompt_settle_ms", self.prompt_settle_ms),
            ("unpaired_prompt_ms", self.unpaired_prompt_ms),
            ("orphan_input_ms", self.orphan_input_ms),
            ("gap_ms", self.gap_ms),
            ("char_base_ms", self.char_base_ms),
            ("char_jitter_ms", self.char_jitter_ms),
        ]
    }
}

/// Terminal appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalSection {
    /// Prompt shown before each typed command.
    pub prompt: String,
    /// Title shown in the window chrome.
    pub title: String,
    /// Half-period of the blinking caret.
    pub caret_blink_ms: u64,
    /// Seed for typing jitter. A fresh seed is drawn when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for TerminalSection {
    fn default() -> Self {
        Self {
            prompt: "medici λ ".to_owned(),
            title: "medici".to_owned(),
            caret_blink_ms: 530,
            seed: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Global level filter (`"trace"`, `"debug"`, `"info"`, `"warn"`,
    /// `"error"`, `"off"`).
    pub level: String,
    /// `"pretty"`, `"compact"`, `"json"` or `"full"`.
    pub format: String,
    /// Directory for rolling log files. The interactive terminal only logs
    /// when this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// When log files roll over: `"daily"`, `"hourly"` or `"never"`.
    pub rotation: String,
    /// Rolled-over files to keep; 0 keeps all of them.
    pub max_files: usize,
    /// Per-crate directives (e.g. `["medici_player=trace"]`).
    pub directives: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: "compact".to_owned(),
            directory: None,
            rotation: "daily".to_owned(),
            max_files: 0,
            directives: Vec::new(),
        }
    }
}
