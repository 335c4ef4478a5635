//! Severity coloring uses the classic 16-color SGR codes rather than true
//! color — the palette is fixed at three entries and must render everywhere.

use crate::level::Severity;

/// Terminates any active SGR styling so subsequent text returns to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// Exhaustive over the severity set — a new variant fails here at compile
/// time instead of silently defaulting to some color.
#[must_use]
pub const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "\x1b[34m",
        Severity::Warn => "\x1b[33m",
        Severity::Error => "\x1b[31m",
    }
}

/// One-shot heuristic, evaluated at logger construction.
///
/// Unix terminals advertise color support through `TERM`; Windows Terminal
/// sets `WT_SESSION`, and any attached console that passes the mode probe is
/// assumed capable. When nothing matches, color stays off — a wrong guess
/// here produces plain output, never an error.
#[must_use]
pub fn auto_detect() -> bool {
    #[cfg(windows)]
    {
        use std::io::IsTerminal;
        std::env::var_os("WT_SESSION").is_some() || std::io::stdout().is_terminal()
    }
    #[cfg(not(windows))]
    {
        std::env::var("TERM").is_ok_and(|term| term.contains("color"))
    }
}
