#![forbid(unsafe_code)]

//! `hermes` - Minimal console/stream logger.
//!
//! A small logging library with support for:
//! - Named loggers with `INFO`/`WARN`/`ERROR` severities
//! - Multiple output sinks (console, file, in-memory buffer, custom)
//! - Customizable formatting templates (`{logname}`, `{loglevel}`, `{logmessage}`)
//! - Per-severity ANSI coloring with terminal auto-detection
//! - Runtime reload of a tiny key-value configuration file
//!
//! # Example
//!
//! ```
//! use hermes::{Logger, Severity};
//!
//! let mut logger = Logger::builder()
//!     .name("app")
//!     .format("[{logname}] {loglevel}: {logmessage}")
//!     .color(false)
//!     .no_config()
//!     .sink(hermes::ConsoleSink::stdout())
//!     .build();
//!
//! logger.info("started");
//! logger.log("disk nearly full", Severity::Warn);
//! logger.error("connection lost");
//! ```
//!
//! When a config path is active (the default probes `hermes.conf` in the
//! working directory), every log call re-reads it, so `enabled false` or a new
//! `format "..."` directive takes effect without restarting the program.

pub mod config;
pub mod error;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod sink;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use fmt::{FormatSegment, FormatTemplate, Placeholder};
pub use level::Severity;
pub use logger::{Logger, LoggerBuilder};
pub use sink::{BufferSink, ConsoleSink, FileSink, Sink};
