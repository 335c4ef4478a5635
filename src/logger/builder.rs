//! Mutator-style configuration reads poorly at construction sites — the
//! builder gives the same knobs a chainable surface.

use super::Logger;
use crate::fmt::FormatTemplate;
use crate::sink::Sink;
use std::path::PathBuf;

/// Chainable construction for [`Logger`].
#[derive(Default)]
pub struct LoggerBuilder {
    name: String,
    format: Option<String>,
    /// `None` keeps construction-time auto-detection.
    color: Option<bool>,
    config_path: Option<PathBuf>,
    no_config: bool,
    sinks: Vec<Box<dyn Sink>>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The name substituted for `{logname}`.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Initial format template; a config reload may later overwrite it.
    #[must_use]
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = Some(template.into());
        self
    }

    /// Explicit color override — skips auto-detection entirely.
    #[must_use]
    pub const fn color(mut self, enabled: bool) -> Self {
        self.color = Some(enabled);
        self
    }

    /// Reload directives from this file instead of the default relative path.
    #[must_use]
    pub fn config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Fixed-configuration logger — no file is probed on log calls.
    #[must_use]
    pub const fn no_config(mut self) -> Self {
        self.no_config = true;
        self
    }

    /// Appends a sink; call order is write order.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let mut logger = Logger::new();
        logger.set_name(self.name);
        if let Some(format) = self.format {
            logger.template = FormatTemplate::parse(&format);
            logger.template_src = format;
        }
        if let Some(color) = self.color {
            logger.color = color;
        }
        if self.no_config {
            logger.disable_config();
        } else if let Some(path) = self.config_path {
            logger.set_config_path(path);
        }
        for sink in self.sinks {
            logger.add_sink(sink);
        }
        logger
    }
}
