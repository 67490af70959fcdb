//! Medici Player - the sequenced line player behind the Medici terminal demo.
//!
//! A [`Scenario`] is an ordered list of [`Line`]s. The [`Player`] reveals
//! them one at a time onto an [`OutputSurface`], typing user input
//! character by character with jittered delays and waiting a kind-dependent
//! settle time after each line. At most one play-through runs at a time;
//! run requests that arrive while one is in progress are dropped.
//!
//! The player keeps no clock of its own. Callers pass the current logical
//! time to [`Player::tick`], which makes play-throughs deterministic for a
//! given seed and trivially testable on virtual time.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use medici_player::prelude::*;
//!
//! let scenarios = scenarios::builtin(scenarios::DEFAULT_PROMPT);
//! let tabs = TabStrip::new(scenarios.iter().map(|s| s.label.clone()));
//! let mut player = Player::seeded(scenarios, Timings::default(), Transcript::new(), tabs, 7);
//!
//! assert_eq!(player.run(0, Duration::ZERO), RunOutcome::Started);
//! player.run_until_idle(Duration::ZERO);
//! assert!(!player.is_running());
//! assert_eq!(player.indicator().active(), Some(0));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod markup;
pub mod prelude;
pub mod scenarios;

mod indicator;
mod player;
mod script;
mod surface;
mod timer;
mod timing;
mod trigger;

pub use indicator::{SelectionIndicator, TabStrip};
pub use player::{Phase, Player, RunOutcome};
pub use script::{Line, LineKind, Scenario};
pub use surface::{Entry, EntryId, OutputSurface, Transcript};
pub use timer::TimerQueue;
pub use timing::Timings;
pub use trigger::VisibilityTrigger;
