//! Severity classification for log messages.

use std::fmt;

/// Identity-only severity set — no ordering or filtering semantics are attached.
///
/// Adding a variant without extending [`Severity::as_str`] and the color
/// mapping in [`crate::fmt`] is a compile error, so the text and color tables
/// can never silently fall out of sync with the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Normal operational messages.
    #[default]
    Info,
    /// Non-fatal anomalies that may need attention.
    Warn,
    /// Failures that prevent an operation from completing.
    Error,
}

impl Severity {
    /// Uppercase because the `{loglevel}` placeholder renders these names verbatim.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Convenience for iteration — used by tests that sweep every severity.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Info, Self::Warn, Self::Error]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
