//! Console is the most common destination — the default stream registered by
//! [`crate::Logger::named`].

use super::Sink;
use crate::error::Error;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Stdout,
    Stderr,
}

/// Writes lines to the process's stdout or stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    target: Target,
}

impl ConsoleSink {
    /// The default output stream for named loggers.
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            target: Target::Stdout,
        }
    }

    /// Diagnostic output that must not mix with a program's data on stdout.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            target: Target::Stderr,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<(), Error> {
        match self.target {
            Target::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(line.as_bytes())?;
            }
            Target::Stderr => {
                let stderr = std::io::stderr();
                let mut handle = stderr.lock();
                handle.write_all(line.as_bytes())?;
            }
        }
        Ok(())
    }
}
