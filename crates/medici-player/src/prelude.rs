//! Prelude module - commonly used types for convenient import.
//!
//! Use `use medici_player::prelude::*;` to import all essential types.

// Script
pub use crate::{Line, LineKind, Scenario};

// Player
pub use crate::{Phase, Player, RunOutcome, Timings};

// Collaborators
pub use crate::{
    Entry, EntryId, OutputSurface, SelectionIndicator, TabStrip, Transcript, VisibilityTrigger,
};

// Builtin script
pub use crate::scenarios;
