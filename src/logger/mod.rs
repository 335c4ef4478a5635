//! The logger proper — holds the name, the enabled flag, the format template,
//! the color flag, and the sink list, and fans each finished line out to every
//! registered sink in order.

mod builder;

pub use builder::LoggerBuilder;

use crate::config::{self, Config};
use crate::fmt::{self, FormatTemplate};
use crate::level::Severity;
use crate::sink::Sink;
use std::path::PathBuf;

/// A named, severity-tagged line logger with templated formatting.
///
/// Each `log` call is an independent transformation: optional config reload,
/// placeholder substitution, color wrapping, newline, fan-out. `log` takes
/// `&mut self` because a reload may overwrite the enabled flag and the format
/// template; concurrent use needs external synchronization.
pub struct Logger {
    name: String,
    enabled: bool,
    template: FormatTemplate,
    template_src: String,
    color: bool,
    sinks: Vec<Box<dyn Sink>>,
    config_path: Option<PathBuf>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Enabled, color auto-detected, default format, no sinks registered.
    ///
    /// Registering zero sinks is valid — `log` simply produces no output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            enabled: true,
            template: FormatTemplate::default(),
            template_src: FormatTemplate::DEFAULT.to_string(),
            color: fmt::auto_detect(),
            sinks: Vec::new(),
            config_path: Some(PathBuf::from(config::DEFAULT_PATH)),
        }
    }

    /// Named logger writing to stdout — the common case.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_sink(name, Box::new(crate::sink::ConsoleSink::stdout()))
    }

    /// Named logger with one pre-registered sink.
    #[must_use]
    pub fn with_sink(name: impl Into<String>, sink: Box<dyn Sink>) -> Self {
        let mut logger = Self::new();
        logger.name = name.into();
        logger.sinks.push(sink);
        logger
    }

    /// Named logger with several pre-registered sinks, kept in the given order.
    #[must_use]
    pub fn with_sinks(name: impl Into<String>, sinks: Vec<Box<dyn Sink>>) -> Self {
        let mut logger = Self::new();
        logger.name = name.into();
        logger.sinks = sinks;
        logger
    }

    /// Stepwise construction when mutator calls feel too imperative.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Replaces the name substituted for `{logname}`.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends a sink. No de-duplication: registering the same destination
    /// twice writes every line twice.
    pub fn add_sink(&mut self, sink: Box<dyn Sink>) {
        self.sinks.push(sink);
    }

    /// Empties the sink list. The underlying destinations stay open — the
    /// logger never owned them.
    pub fn clear_sinks(&mut self) {
        self.sinks.clear();
    }

    /// Explicit override of construction-time auto-detection.
    pub fn enable_color(&mut self) {
        self.color = true;
    }

    /// Explicit override of construction-time auto-detection.
    pub fn disable_color(&mut self) {
        self.color = false;
    }

    /// Points the per-call reload at a different file, e.g. for tests.
    pub fn set_config_path(&mut self, path: impl Into<PathBuf>) {
        self.config_path = Some(path.into());
    }

    /// Turns off the per-call reload entirely — the logger then behaves like
    /// the fixed-configuration variant.
    pub fn disable_config(&mut self) {
        self.config_path = None;
    }

    /// Formats and dispatches one message.
    ///
    /// Reloads the config file (when one is configured), substitutes the
    /// `{logname}`/`{loglevel}`/`{logmessage}` placeholders, wraps the line in
    /// the severity's color escapes (empty when color is off), appends one
    /// newline, and writes the result to every sink in registration order.
    /// Sink write failures are ignored; a disabled logger returns without
    /// touching any sink.
    pub fn log(&mut self, message: &str, severity: Severity) {
        self.reload();

        if !self.enabled {
            return;
        }

        let (color_on, color_off) = if self.color {
            (fmt::severity_color(severity), fmt::RESET)
        } else {
            ("", "")
        };

        let body = self.template.render(&self.name, severity, message);
        let line = format!("{color_on}{body}{color_off}\n");

        for sink in &self.sinks {
            let _ = sink.write_line(&line);
        }
    }

    /// `log` with the default severity — stands in for the original's
    /// call-operator shorthand.
    pub fn info(&mut self, message: &str) {
        self.log(message, Severity::Info);
    }

    /// Non-fatal anomalies that may need attention.
    pub fn warn(&mut self, message: &str) {
        self.log(message, Severity::Warn);
    }

    /// Failures that prevent an operation from completing.
    pub fn error(&mut self, message: &str) {
        self.log(message, Severity::Error);
    }

    /// Applies any directives found in the config file. Missing or unreadable
    /// file means the current values stay in force. The template is only
    /// re-parsed when the directive actually changes it.
    fn reload(&mut self) {
        let Some(path) = &self.config_path else {
            return;
        };
        let Some(config) = Config::load(path) else {
            return;
        };

        if let Some(enabled) = config.enabled {
            self.enabled = enabled;
        }
        if let Some(format) = config.format
            && format != self.template_src
        {
            self.template = FormatTemplate::parse(&format);
            self.template_src = format;
        }
    }

    /// The name substituted for `{logname}`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `log` currently produces output.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether lines are wrapped in severity color escapes.
    #[must_use]
    pub const fn color_enabled(&self) -> bool {
        self.color
    }

    /// Tests verify construction wired up the expected number of sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// The template source string currently in force.
    #[must_use]
    pub fn format_str(&self) -> &str {
        &self.template_src
    }
}
