//! Medici Telemetry - logging setup for the Medici terminal demo.
//!
//! Wraps `tracing-subscriber` and `tracing-appender` behind a small
//! [`LogConfig`] builder. The interactive terminal owns stdout and stderr
//! while it runs, so it logs to a rolling file; headless commands log to
//! stderr.
//!
//! # Example
//!
//! ```rust,no_run
//! use medici_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), medici_telemetry::TelemetryError> {
//! let config = LogConfig::new("debug")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("medici_player=trace");
//!
//! let _guard = setup_logging(&config)?;
//! tracing::info!("logging ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{
    FileLogConfig, FileRotation, LEVELS, LogConfig, LogFormat, LogGuard, LogTarget, setup_logging,
};
