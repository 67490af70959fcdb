//! Layered configuration for the Medici terminal demo.
//!
//! A single [`Config`] holds the player timings, terminal appearance and
//! logging settings.
//!
//! # Usage
//!
//! ```rust,no_run
//! use medici_config::{Config, LoadOptions};
//!
//! let resolved = Config::load(&LoadOptions::default().with_workspace(".")).unwrap();
//! println!("prompt: {}", resolved.config.terminal.prompt);
//! ```
//!
//! # Configuration Precedence
//!
//! From highest to lowest priority:
//!
//! 1. **Explicit** (`--config <path>`)
//! 2. **Workspace** (`{cwd}/.medici/config.toml`)
//! 3. **User** (`~/.medici/config.toml`)
//! 4. **Environment variables** (`MEDICI_*`), fallback only
//! 5. **Embedded defaults** (`defaults.toml` compiled into the binary)
//!
//! # Design
//!
//! No dependency on the other medici crates. The CLI converts these
//! plain-data sections into player timings and logging config.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

/// Environment variable fallback resolution.
pub mod env;
/// Configuration error types.
pub mod error;
/// Configuration file discovery and loading.
pub mod loader;
/// Layered configuration merging with precedence.
pub mod merge;
/// Resolved configuration display and serialization.
pub mod show;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::LoadOptions;
pub use merge::ConfigLayer;
pub use show::{ResolvedConfig, ShowFormat};
pub use types::*;

impl Config {
    /// Load configuration with the full precedence chain.
    ///
    /// See [`loader::load`] for the algorithm.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any config file is malformed or the final
    /// configuration fails validation.
    pub fn load(options: &LoadOptions) -> ConfigResult<ResolvedConfig> {
        loader::load(options)
    }
}
